//! Dataset file naming grammar
//!
//! Every dataset `<name>` consists of
//! `<name>_train.data`, `<name>_valid.data`, `<name>_test.data` and
//! `<name>_train.solution`. Names are recovered by stripping one of these
//! suffixes from the final path component, so underscores inside the name
//! are preserved (`my_data_train.data` is dataset `my_data`).

use crate::core::{DataIoError, DatasetName, Result, Split};
use std::path::{Path, PathBuf};

/// Suffix of the training labels file
pub const SOLUTION_SUFFIX: &str = "_train.solution";

const KNOWN_SUFFIXES: [&str; 4] = [
    "_train.data",
    "_valid.data",
    "_test.data",
    SOLUTION_SUFFIX,
];

/// Expected locations of the files checked by the validator
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExpectedPaths {
    pub valid: PathBuf,
    pub test: PathBuf,
    pub train_solution: PathBuf,
}

/// Extract the dataset name from a path ending in a known dataset suffix
pub fn name_from_path<P: AsRef<Path>>(path: P) -> Result<DatasetName> {
    let path = path.as_ref();
    let malformed = || DataIoError::MalformedPath(path.to_path_buf());

    let file_name = path
        .file_name()
        .and_then(|name| name.to_str())
        .ok_or_else(malformed)?;

    let stem = KNOWN_SUFFIXES
        .iter()
        .find_map(|suffix| file_name.strip_suffix(suffix))
        .ok_or_else(malformed)?;

    DatasetName::new(stem).map_err(|_| malformed())
}

/// `<name>_<split>.data`
pub fn data_file_name(name: &DatasetName, split: Split) -> String {
    format!("{name}_{split}.data")
}

/// `<name>_train.solution`
pub fn solution_file_name(name: &DatasetName) -> String {
    format!("{name}{SOLUTION_SUFFIX}")
}

pub fn data_path<P: AsRef<Path>>(base_dir: P, name: &DatasetName, split: Split) -> PathBuf {
    base_dir.as_ref().join(data_file_name(name, split))
}

/// Compose the validation, test and training label paths. No I/O.
pub fn expected_paths<P: AsRef<Path>>(base_dir: P, name: &DatasetName) -> ExpectedPaths {
    let base_dir = base_dir.as_ref();
    ExpectedPaths {
        valid: data_path(base_dir, name, Split::Valid),
        test: data_path(base_dir, name, Split::Test),
        train_solution: base_dir.join(solution_file_name(name)),
    }
}
