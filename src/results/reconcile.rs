//! Staging prediction files for submission
//!
//! Prediction files are matched by name only:
//! `<result_dir>/<name>*_test*.predict` and `<result_dir>/<name>*_valid*.predict`.
//! File contents are never inspected.

use crate::core::{DatasetName, Result, Split};
use crate::utils::glob_files;
use glob::Pattern;
use log::{info, warn};
use std::collections::{BTreeMap, BTreeSet};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// Splits every dataset must have predictions for, in check order
pub const REQUIRED_SPLITS: [Split; 2] = [Split::Test, Split::Valid];

/// Prediction files found per dataset and required split
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ResultSet {
    files: BTreeMap<DatasetName, BTreeMap<Split, Vec<PathBuf>>>,
}

impl ResultSet {
    /// Look up the prediction files of every dataset in `result_dir`
    pub fn collect<P: AsRef<Path>>(names: &[DatasetName], result_dir: P) -> Result<Self> {
        let result_dir = result_dir.as_ref();
        let mut files = BTreeMap::new();

        for name in names {
            let mut splits = BTreeMap::new();
            for split in REQUIRED_SPLITS {
                splits.insert(split, glob_files(result_dir, &prediction_pattern(name, split))?);
            }
            files.insert(name.clone(), splits);
        }

        Ok(Self { files })
    }

    /// Files found for one dataset and split
    pub fn files(&self, name: &DatasetName, split: Split) -> &[PathBuf] {
        self.files
            .get(name)
            .and_then(|splits| splits.get(&split))
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    /// First required split without any prediction file
    pub fn missing_split(&self, name: &DatasetName) -> Option<Split> {
        REQUIRED_SPLITS
            .into_iter()
            .find(|&split| self.files(name, split).is_empty())
    }
}

/// `<name>*_<split>*.predict` with the name matched literally
fn prediction_pattern(name: &DatasetName, split: Split) -> String {
    format!("{}*_{}*.predict", Pattern::escape(name.as_str()), split)
}

/// Result of staging one dataset
#[derive(Debug)]
pub enum ReconcileOutcome {
    /// All prediction files were copied; holds their destination paths
    Copied(Vec<PathBuf>),
    /// No prediction file for this split; nothing was copied
    MissingResults(Split),
    /// Copying failed part way; files already copied for the dataset are
    /// removed from the output directory again
    CopyFailed(io::Error),
}

impl ReconcileOutcome {
    pub fn is_success(&self) -> bool {
        matches!(self, ReconcileOutcome::Copied(_))
    }
}

/// Per-dataset outcomes in input order
#[derive(Debug, Default)]
pub struct ReconcileReport {
    outcomes: Vec<(DatasetName, ReconcileOutcome)>,
}

impl ReconcileReport {
    pub fn outcomes(&self) -> &[(DatasetName, ReconcileOutcome)] {
        &self.outcomes
    }

    pub fn outcome(&self, name: &DatasetName) -> Option<&ReconcileOutcome> {
        self.outcomes
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, outcome)| outcome)
    }

    /// `false` for failed and for unknown datasets
    pub fn is_success(&self, name: &DatasetName) -> bool {
        self.outcome(name).is_some_and(ReconcileOutcome::is_success)
    }

    pub fn all_succeeded(&self) -> bool {
        self.outcomes.iter().all(|(_, outcome)| outcome.is_success())
    }

    pub fn succeeded(&self) -> Vec<&DatasetName> {
        self.filter_names(true)
    }

    pub fn failed(&self) -> Vec<&DatasetName> {
        self.filter_names(false)
    }

    fn filter_names(&self, success: bool) -> Vec<&DatasetName> {
        self.outcomes
            .iter()
            .filter(|(_, outcome)| outcome.is_success() == success)
            .map(|(name, _)| name)
            .collect()
    }
}

/// Copy the prediction files of every dataset from `result_dir` into `output_dir`.
///
/// A dataset missing either split is reported as failed and none of its files
/// are copied; the remaining datasets are still processed. `output_dir` is
/// created when absent.
pub fn reconcile<P, Q>(names: &[DatasetName], result_dir: P, output_dir: Q) -> Result<ReconcileReport>
where
    P: AsRef<Path>,
    Q: AsRef<Path>,
{
    let output_dir = output_dir.as_ref();
    fs::create_dir_all(output_dir)?;

    let results = ResultSet::collect(names, result_dir)?;
    let mut report = ReconcileReport::default();

    for name in names {
        let outcome = match results.missing_split(name) {
            Some(split) => {
                warn!("Missing '{split}' result files for {name}");
                ReconcileOutcome::MissingResults(split)
            }
            None => match copy_dataset(&results, name, output_dir) {
                Ok(copied) => {
                    info!("Copied {} result file(s) for {}", copied.len(), name);
                    ReconcileOutcome::Copied(copied)
                }
                Err(e) => {
                    warn!("Failed to copy result files for {name}: {e}");
                    ReconcileOutcome::CopyFailed(e)
                }
            },
        };
        report.outcomes.push((name.clone(), outcome));
    }

    Ok(report)
}

fn copy_dataset(
    results: &ResultSet,
    name: &DatasetName,
    output_dir: &Path,
) -> io::Result<Vec<PathBuf>> {
    let mut copied = Vec::new();
    // a file can match both split patterns
    let mut seen = BTreeSet::new();

    for split in REQUIRED_SPLITS {
        for source in results.files(name, split) {
            if !seen.insert(source) {
                continue;
            }
            match copy_file(source, output_dir) {
                Ok(destination) => copied.push(destination),
                Err(e) => {
                    remove_copies(&copied);
                    return Err(e);
                }
            }
        }
    }

    Ok(copied)
}

/// Copy `source` into `output_dir` under the same file name
fn copy_file(source: &Path, output_dir: &Path) -> io::Result<PathBuf> {
    let file_name = source
        .file_name()
        .ok_or_else(|| io::Error::new(io::ErrorKind::InvalidInput, format!("{source:?}")))?;
    let destination = output_dir.join(file_name);

    // copying a file onto itself truncates it
    if destination.exists() && fs::canonicalize(source)? == fs::canonicalize(&destination)? {
        return Err(io::Error::new(
            io::ErrorKind::InvalidInput,
            format!("{source:?} and {destination:?} are the same file"),
        ));
    }

    fs::copy(source, &destination)?;
    Ok(destination)
}

fn remove_copies(copied: &[PathBuf]) {
    for path in copied {
        if let Err(e) = fs::remove_file(path) {
            warn!("Could not remove partial copy {path:?}: {e}");
        }
    }
}
