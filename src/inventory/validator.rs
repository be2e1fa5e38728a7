//! Dataset completeness checks

use crate::core::{DataIoError, DatasetManifest, DatasetName, Result, Split};
use crate::inventory::naming::{data_path, expected_paths};
use log::error;
use std::path::Path;

/// Check that the validation, test and training label files of `name` exist
/// under `base_dir`, in that order.
///
/// The first missing file aborts with `MissingSplitFile`; an incomplete
/// dataset is never skipped. On success the validated manifest is returned.
pub fn validate<P: AsRef<Path>>(base_dir: P, name: &DatasetName) -> Result<DatasetManifest> {
    let base_dir = base_dir.as_ref();
    let expected = expected_paths(base_dir, name);

    let required = [
        ("validation", &expected.valid),
        ("test", &expected.test),
        ("training labels", &expected.train_solution),
    ];

    for (file, path) in required {
        if !path.is_file() {
            error!("No {file} file for {name} (expected {path:?})");
            return Err(DataIoError::MissingSplitFile {
                name: name.to_string(),
                file,
                path: path.clone(),
            });
        }
    }

    Ok(DatasetManifest {
        name: name.clone(),
        base_directory: base_dir.to_path_buf(),
        train_path: data_path(base_dir, name, Split::Train),
        valid_path: expected.valid,
        test_path: expected.test,
        train_solution_path: expected.train_solution,
    })
}

/// Non-failing variant of [`validate`]
pub fn is_complete<P: AsRef<Path>>(base_dir: P, name: &DatasetName) -> bool {
    let expected = expected_paths(base_dir, name);
    [&expected.valid, &expected.test, &expected.train_solution]
        .iter()
        .all(|path| path.is_file())
}
