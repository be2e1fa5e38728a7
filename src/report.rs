//! Serializable run reports
//!
//! JSON summaries of an inventory scan and of a reconciliation, used by the
//! CLI and by hosts that archive what was discovered and staged.

use crate::core::{DataIoError, DatasetManifest, DatasetName, Result, Split};
use crate::inventory::{Inventory, Layout};
use crate::results::{ReconcileOutcome, ReconcileReport};
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::{BufReader, BufWriter};
use std::path::{Path, PathBuf};

/// Datasets found by one inventory scan
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InventoryReport {
    /// Library version used to produce the report
    pub library_version: String,
    /// Creation timestamp (RFC 3339)
    pub generated_at: String,
    pub input_dir: PathBuf,
    pub layout: Option<Layout>,
    pub datasets: Vec<DatasetManifest>,
}

impl InventoryReport {
    pub fn new<P: AsRef<Path>>(input_dir: P, inventory: &Inventory) -> Self {
        Self {
            library_version: env!("CARGO_PKG_VERSION").to_string(),
            generated_at: chrono::Utc::now().to_rfc3339(),
            input_dir: input_dir.as_ref().to_path_buf(),
            layout: inventory.layout,
            datasets: inventory.datasets.clone(),
        }
    }

    pub fn names(&self) -> Vec<&DatasetName> {
        self.datasets.iter().map(|d| &d.name).collect()
    }

    /// Save report to file
    pub fn save_to_file<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        save_json(self, path)
    }

    /// Load report from file
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        load_json(path)
    }

    pub fn print_summary(&self) {
        println!("Inventory of {:?}", self.input_dir);
        match self.layout {
            Some(layout) => println!("  Layout: {layout}"),
            None => println!("  Layout: none (no data file found)"),
        }
        println!("  Datasets: {}", self.datasets.len());
        for dataset in &self.datasets {
            println!("    {} ({:?})", dataset.name, dataset.base_directory);
        }
        println!("  Generated: {}", self.generated_at);
    }
}

/// Flattened view of a [`ReconcileReport`]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReconcileSummary {
    pub generated_at: String,
    pub output_dir: PathBuf,
    pub datasets: Vec<DatasetStatus>,
}

/// Staging status of one dataset
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DatasetStatus {
    pub name: DatasetName,
    pub success: bool,
    /// Destination paths of the copied files
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub copied: Vec<PathBuf>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub missing_split: Option<Split>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl From<(&DatasetName, &ReconcileOutcome)> for DatasetStatus {
    fn from((name, outcome): (&DatasetName, &ReconcileOutcome)) -> Self {
        let mut status = DatasetStatus {
            name: name.clone(),
            success: outcome.is_success(),
            copied: Vec::new(),
            missing_split: None,
            error: None,
        };
        match outcome {
            ReconcileOutcome::Copied(files) => status.copied = files.clone(),
            ReconcileOutcome::MissingResults(split) => status.missing_split = Some(*split),
            ReconcileOutcome::CopyFailed(e) => status.error = Some(e.to_string()),
        }
        status
    }
}

impl ReconcileSummary {
    pub fn new<P: AsRef<Path>>(output_dir: P, report: &ReconcileReport) -> Self {
        Self {
            generated_at: chrono::Utc::now().to_rfc3339(),
            output_dir: output_dir.as_ref().to_path_buf(),
            datasets: report
                .outcomes()
                .iter()
                .map(|(name, outcome)| DatasetStatus::from((name, outcome)))
                .collect(),
        }
    }

    pub fn all_succeeded(&self) -> bool {
        self.datasets.iter().all(|d| d.success)
    }

    pub fn save_to_file<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        save_json(self, path)
    }

    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        load_json(path)
    }

    pub fn print_summary(&self) {
        println!("Results staged in {:?}", self.output_dir);
        for status in &self.datasets {
            if status.success {
                println!("  [+] {} ({} files)", status.name, status.copied.len());
            } else if let Some(split) = status.missing_split {
                println!("  [-] {}: missing '{}' result files", status.name, split);
            } else {
                println!(
                    "  [-] {}: {}",
                    status.name,
                    status.error.as_deref().unwrap_or("copy failed")
                );
            }
        }
    }
}

fn save_json<T: Serialize, P: AsRef<Path>>(value: &T, path: P) -> Result<()> {
    let file = File::create(path).map_err(DataIoError::IoError)?;
    let writer = BufWriter::new(file);
    serde_json::to_writer_pretty(writer, value)?;
    Ok(())
}

fn load_json<T: serde::de::DeserializeOwned, P: AsRef<Path>>(path: P) -> Result<T> {
    let file = File::open(path).map_err(DataIoError::IoError)?;
    let reader = BufReader::new(file);
    Ok(serde_json::from_reader(reader)?)
}
