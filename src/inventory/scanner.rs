//! Dataset discovery under an input directory
//!
//! Two layouts are recognised:
//!
//! - nested: `input_dir/<name>/<name>_train.data` (concatenated bundles)
//! - flat: `input_dir/<name>_train.data` (single submissions)
//!
//! The nested layout is tried first; the flat layout only when it finds
//! nothing. The two are never merged.

use crate::core::{DatasetManifest, DatasetName, Result};
use crate::inventory::naming::name_from_path;
use crate::inventory::validator::validate;
use crate::utils::glob_files;
use log::{info, warn};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::path::Path;

/// Directory layout a dataset inventory was discovered in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Layout {
    Nested,
    Flat,
}

impl fmt::Display for Layout {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Layout::Nested => f.write_str("nested"),
            Layout::Flat => f.write_str("flat"),
        }
    }
}

/// Validated datasets sorted by name
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Inventory {
    /// Layout the datasets were found in, `None` for an empty inventory
    pub layout: Option<Layout>,
    pub datasets: Vec<DatasetManifest>,
}

impl Inventory {
    pub fn names(&self) -> Vec<DatasetName> {
        self.datasets.iter().map(|d| d.name.clone()).collect()
    }

    pub fn len(&self) -> usize {
        self.datasets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.datasets.is_empty()
    }

    pub fn get(&self, name: &DatasetName) -> Option<&DatasetManifest> {
        self.datasets.iter().find(|d| &d.name == name)
    }
}

/// Discover and validate every dataset under `input_dir`.
///
/// Fails with `MissingSplitFile` as soon as a discovered dataset is
/// incomplete. Finding no dataset at all only logs a warning.
pub fn scan_inventory<P: AsRef<Path>>(input_dir: P) -> Result<Inventory> {
    let input_dir = input_dir.as_ref();

    for layout in [Layout::Nested, Layout::Flat] {
        let datasets = discover(input_dir, layout)?;
        if !datasets.is_empty() {
            info!(
                "Found {} dataset(s) in {:?} ({} layout)",
                datasets.len(),
                input_dir,
                layout
            );
            return Ok(Inventory {
                layout: Some(layout),
                datasets,
            });
        }
    }

    warn!("Inventory data - no data file found in {input_dir:?}");
    Ok(Inventory::default())
}

/// Sorted, deduplicated names of the datasets under `input_dir`
pub fn scan<P: AsRef<Path>>(input_dir: P) -> Result<Vec<DatasetName>> {
    Ok(scan_inventory(input_dir)?.names())
}

/// Sorted, deduplicated manifests of the datasets under `input_dir`
pub fn scan_manifests<P: AsRef<Path>>(input_dir: P) -> Result<Vec<DatasetManifest>> {
    Ok(scan_inventory(input_dir)?.datasets)
}

/// Discover datasets in a single layout, validating each one
pub fn discover(input_dir: &Path, layout: Layout) -> Result<Vec<DatasetManifest>> {
    let pattern = match layout {
        Layout::Nested => "*/*_train.data",
        Layout::Flat => "*_train.data",
    };

    let mut datasets: BTreeMap<DatasetName, DatasetManifest> = BTreeMap::new();

    for train_file in glob_files(input_dir, pattern)? {
        let name = name_from_path(&train_file)?;
        if datasets.contains_key(&name) {
            continue;
        }

        let base_dir = match layout {
            Layout::Nested => input_dir.join(name.as_str()),
            Layout::Flat => input_dir.to_path_buf(),
        };

        let manifest = validate(&base_dir, &name)?;
        info!("Found dataset {name} in {base_dir:?}");
        datasets.insert(name, manifest);
    }

    Ok(datasets.into_values().collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::DataIoError;
    use std::fs;
    use std::path::PathBuf;
    use tempfile::TempDir;

    fn write_dataset(dir: &Path, name: &str) {
        fs::create_dir_all(dir).expect("Failed to create dir");
        for suffix in ["_train.data", "_valid.data", "_test.data", "_train.solution"] {
            fs::write(dir.join(format!("{name}{suffix}")), "0 1\n").expect("Failed to write");
        }
    }

    fn names(list: &[DatasetName]) -> Vec<&str> {
        list.iter().map(|n| n.as_str()).collect()
    }

    #[test]
    fn test_scan_nested_layout() {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let root = temp_dir.path();
        write_dataset(&root.join("dorothea"), "dorothea");
        write_dataset(&root.join("adult"), "adult");
        write_dataset(&root.join("cadata"), "cadata");

        let inventory = scan_inventory(root).unwrap();
        assert_eq!(inventory.layout, Some(Layout::Nested));
        assert_eq!(
            names(&inventory.names()),
            vec!["adult", "cadata", "dorothea"]
        );

        let adult = inventory.get(&DatasetName::new("adult").unwrap()).unwrap();
        assert_eq!(adult.base_directory, root.join("adult"));
    }

    #[test]
    fn test_scan_flat_layout() {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let root = temp_dir.path();
        write_dataset(root, "my_data");
        write_dataset(root, "albert");

        let inventory = scan_inventory(root).unwrap();
        assert_eq!(inventory.layout, Some(Layout::Flat));
        assert_eq!(names(&inventory.names()), vec!["albert", "my_data"]);
        assert_eq!(inventory.datasets[1].base_directory, PathBuf::from(root));
    }

    #[test]
    fn test_nested_layout_takes_precedence() {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let root = temp_dir.path();
        write_dataset(root, "flat");
        write_dataset(&root.join("nested"), "nested");

        assert_eq!(names(&scan(root).unwrap()), vec!["nested"]);
    }

    #[test]
    fn test_scan_empty_directory() {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        fs::write(temp_dir.path().join("README"), "nothing here").unwrap();

        let inventory = scan_inventory(temp_dir.path()).unwrap();
        assert!(inventory.is_empty());
        assert_eq!(inventory.layout, None);
    }

    #[test]
    fn test_scan_missing_split_is_fatal() {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let root = temp_dir.path();
        write_dataset(&root.join("adult"), "adult");
        write_dataset(&root.join("broken"), "broken");
        fs::remove_file(root.join("broken").join("broken_valid.data")).unwrap();

        match scan(root) {
            Err(DataIoError::MissingSplitFile { name, file, .. }) => {
                assert_eq!(name, "broken");
                assert_eq!(file, "validation");
            }
            other => panic!("Expected MissingSplitFile, got {other:?}"),
        }
    }

    #[test]
    fn test_nested_validates_against_name_directory() {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let root = temp_dir.path();
        // bundle directory name differs from the dataset name
        write_dataset(&root.join("bundle"), "adult");

        assert!(matches!(
            scan(root),
            Err(DataIoError::MissingSplitFile { .. })
        ));
    }

    #[test]
    fn test_scan_deduplicates_names() {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let root = temp_dir.path();
        write_dataset(&root.join("adult"), "adult");
        // second bundle carrying the same training file
        fs::create_dir_all(root.join("copy")).unwrap();
        fs::write(root.join("copy").join("adult_train.data"), "0 1\n").unwrap();

        assert_eq!(names(&scan(root).unwrap()), vec!["adult"]);
    }

    #[test]
    fn test_scan_is_idempotent() {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let root = temp_dir.path();
        for name in ["zeta", "alpha", "mid_name"] {
            write_dataset(&root.join(name), name);
        }

        let first = scan(root).unwrap();
        let second = scan(root).unwrap();
        assert_eq!(first, second);
        assert_eq!(names(&first), vec!["alpha", "mid_name", "zeta"]);
    }
}
