//! Integration tests for the automl-io library
//!
//! These tests verify end-to-end functionality across multiple modules:
//! discovery -> loading -> prediction output -> reconciliation.

use automl_io::core::{DataFormat, FeatureTypes, Matrix, Split};
use automl_io::inventory::{scan, scan_inventory, Layout};
use automl_io::{
    load_samples, reconcile, write_predictions, DataIoError, DatasetName, ReconcileOutcome,
};
use std::fs;
use std::path::Path;
use tempfile::TempDir;

/// Write a complete dataset with the given sample file content for every split
fn write_dataset(dir: &Path, name: &str, samples: &str) {
    fs::create_dir_all(dir).expect("Failed to create dataset dir");
    for split in ["train", "valid", "test"] {
        fs::write(dir.join(format!("{name}_{split}.data")), samples).expect("Failed to write");
    }
    fs::write(dir.join(format!("{name}_train.solution")), "1\n0\n").expect("Failed to write");
}

fn names(list: &[DatasetName]) -> Vec<&str> {
    list.iter().map(|n| n.as_str()).collect()
}

/// Test complete workflow on a nested bundle with mixed formats
#[test]
fn test_complete_workflow_nested() {
    let root = TempDir::new().expect("Failed to create temp dir");
    let input = root.path().join("input");
    let results = root.path().join("results");
    let submission = root.path().join("submission");

    write_dataset(&input.join("dense_set"), "dense_set", "1 2 3\n4 5 6\n");
    write_dataset(&input.join("sparse_set"), "sparse_set", "1:0.5 4:2\n3:1\n");
    write_dataset(&input.join("binary_set"), "binary_set", "1 2\n4\n");

    let formats = [
        ("binary_set", DataFormat::SparseBinary),
        ("dense_set", DataFormat::Dense),
        ("sparse_set", DataFormat::Sparse),
    ];
    let feature_types = FeatureTypes::numerical(4);

    let inventory = scan_inventory(&input).expect("Scan should succeed");
    assert_eq!(inventory.layout, Some(Layout::Nested));
    assert_eq!(
        names(&inventory.names()),
        vec!["binary_set", "dense_set", "sparse_set"]
    );

    fs::create_dir_all(&results).unwrap();
    for (manifest, (expected_name, format)) in inventory.datasets.iter().zip(formats) {
        assert_eq!(manifest.name.as_str(), expected_name);

        for split in [Split::Train, Split::Valid, Split::Test] {
            let matrix = load_samples(manifest.data_path(split), format, &feature_types)
                .expect("Load should succeed");
            assert_eq!(matrix.n_rows(), 2);
            assert_eq!(matrix.is_sparse(), format != DataFormat::Dense);

            if split != Split::Train {
                // one score per sample
                let scores: Vec<[f64; 1]> = (0..matrix.n_rows())
                    .map(|row| [matrix.row_dense(row).iter().sum::<f64>()])
                    .collect();
                let path = results.join(format!("{}_{}_000.predict", manifest.name, split));
                write_predictions(&path, &scores).expect("Write should succeed");
            }
        }
    }

    let report = reconcile(&inventory.names(), &results, &submission).unwrap();
    assert!(report.all_succeeded());
    assert_eq!(fs::read_dir(&submission).unwrap().count(), 6);

    let dense_test = fs::read_to_string(submission.join("dense_set_test_000.predict")).unwrap();
    assert_eq!(dense_test, "6 \n15 \n");
}

/// Test flat layout discovery for a single dataset submission
#[test]
fn test_flat_layout_workflow() {
    let root = TempDir::new().expect("Failed to create temp dir");
    write_dataset(root.path(), "my_data", "0.5 1.5\n");

    let inventory = scan_inventory(root.path()).unwrap();
    assert_eq!(inventory.layout, Some(Layout::Flat));
    assert_eq!(names(&inventory.names()), vec!["my_data"]);

    let manifest = &inventory.datasets[0];
    assert_eq!(manifest.valid_path, root.path().join("my_data_valid.data"));

    let matrix = load_samples(
        &manifest.train_path,
        DataFormat::Dense,
        &FeatureTypes::default(),
    )
    .unwrap();
    assert_eq!(matrix.shape(), (1, 2));
}

/// Missing validation file halts the scan before any name is returned
#[test]
fn test_incomplete_dataset_halts_scan() {
    let root = TempDir::new().expect("Failed to create temp dir");
    write_dataset(&root.path().join("alpha"), "alpha", "1\n");
    write_dataset(&root.path().join("beta"), "beta", "1\n");
    fs::remove_file(root.path().join("beta").join("beta_valid.data")).unwrap();

    let result = scan(root.path());
    match result {
        Err(DataIoError::MissingSplitFile { name, path, .. }) => {
            assert_eq!(name, "beta");
            assert_eq!(path, root.path().join("beta").join("beta_valid.data"));
        }
        other => panic!("Expected MissingSplitFile, got {other:?}"),
    }
}

/// Empty input directory is a warning, not an error
#[test]
fn test_empty_inventory() {
    let root = TempDir::new().expect("Failed to create temp dir");
    let names = scan(root.path()).expect("Empty inventory should not fail");
    assert!(names.is_empty());

    let missing = scan(root.path().join("does-not-exist")).unwrap();
    assert!(missing.is_empty());
}

/// Scanning the same tree repeatedly gives the same ordered names
#[test]
fn test_scan_order_is_stable() {
    let root = TempDir::new().expect("Failed to create temp dir");
    // creation order differs from name order
    for name in ["yolanda", "christine", "albert", "jasmine", "madeline"] {
        write_dataset(&root.path().join(name), name, "1\n");
    }

    let first = scan(root.path()).unwrap();
    for _ in 0..3 {
        assert_eq!(scan(root.path()).unwrap(), first);
    }
    assert_eq!(
        names(&first),
        vec!["albert", "christine", "jasmine", "madeline", "yolanda"]
    );
}

/// One dataset without predictions does not stop the others from being staged
#[test]
fn test_reconcile_partial_results() {
    let root = TempDir::new().expect("Failed to create temp dir");
    let results = root.path().join("res");
    let submission = root.path().join("sub");
    fs::create_dir_all(&results).unwrap();
    fs::write(results.join("a_test.predict"), "1\n").unwrap();
    fs::write(results.join("a_valid.predict"), "1\n").unwrap();
    fs::write(results.join("c_valid.predict"), "1\n").unwrap();
    fs::write(results.join("c_test.predict"), "1\n").unwrap();

    let names: Vec<DatasetName> = ["a", "b", "c"]
        .iter()
        .map(|n| n.parse().unwrap())
        .collect();
    let report = reconcile(&names, &results, &submission).unwrap();

    assert!(report.is_success(&names[0]));
    assert!(matches!(
        report.outcome(&names[1]),
        Some(ReconcileOutcome::MissingResults(Split::Test))
    ));
    assert!(report.is_success(&names[2]));
    assert_eq!(fs::read_dir(&submission).unwrap().count(), 4);
}
