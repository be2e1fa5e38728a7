//! Error types for dataset discovery and sample loading

use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum DataIoError {
    #[error("Missing {file} file for dataset '{name}': {path:?}")]
    MissingSplitFile {
        name: String,
        file: &'static str,
        path: PathBuf,
    },

    #[error("Malformed sample at line {line}: {message}")]
    MalformedSample { line: usize, message: String },

    #[error("Malformed dataset path: {0:?}")]
    MalformedPath(PathBuf),

    #[error("Invalid dataset name: {0:?}")]
    InvalidName(String),

    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),

    #[error("Invalid file pattern: {0}")]
    Pattern(#[from] glob::PatternError),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl DataIoError {
    /// Build a `MalformedSample` error for a 1-based line number
    pub fn malformed(line: usize, message: impl Into<String>) -> Self {
        Self::MalformedSample {
            line,
            message: message.into(),
        }
    }
}

pub type Result<T> = std::result::Result<T, DataIoError>;
