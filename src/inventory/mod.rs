//! Dataset discovery and validation

pub mod naming;
pub mod scanner;
pub mod validator;

pub use self::naming::{expected_paths, name_from_path, ExpectedPaths};
pub use self::scanner::{scan, scan_inventory, scan_manifests, Inventory, Layout};
pub use self::validator::{is_complete, validate};
