//! Dataset discovery and multi-format sample loading for AutoML challenge bundles
//!
//! - [`inventory`] finds the datasets under an input directory and checks
//!   that each one ships its validation, test and training label files
//! - [`data`] loads dense, `index:value` sparse and binary sparse sample
//!   files into a [`SampleMatrix`]
//! - [`results`] writes prediction files and stages them for submission

pub mod core;
pub mod data;
pub mod inventory;
pub mod matrix;
pub mod report;
pub mod results;
pub mod utils;

// Re-export main types for convenience
pub use crate::core::traits::*;
pub use crate::core::types::*;
pub use crate::core::{DataIoError, Result};
pub use crate::data::{load_binary_sparse, load_dense, load_samples, load_sparse};
pub use crate::inventory::{scan, scan_inventory, scan_manifests, validate, Inventory, Layout};
pub use crate::matrix::{CsrMatrix, DenseMatrix, SampleMatrix};
pub use crate::report::{InventoryReport, ReconcileSummary};
pub use crate::results::{reconcile, write_predictions, ReconcileOutcome, ReconcileReport};

// Version info
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
