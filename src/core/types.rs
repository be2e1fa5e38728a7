//! Core type definitions for dataset discovery and loading

use crate::core::{DataIoError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::{is_separator, PathBuf};
use std::str::FromStr;

/// Canonical dataset identifier shared by all of its split files
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct DatasetName(String);

impl DatasetName {
    /// Create a dataset name, rejecting empty names and path separators
    pub fn new(name: impl Into<String>) -> Result<Self> {
        let name = name.into();
        if name.is_empty() || name.chars().any(is_separator) {
            return Err(DataIoError::InvalidName(name));
        }
        Ok(Self(name))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for DatasetName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for DatasetName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for DatasetName {
    type Error = DataIoError;

    fn try_from(value: String) -> Result<Self> {
        Self::new(value)
    }
}

impl From<DatasetName> for String {
    fn from(name: DatasetName) -> Self {
        name.0
    }
}

impl FromStr for DatasetName {
    type Err = DataIoError;

    fn from_str(s: &str) -> Result<Self> {
        Self::new(s)
    }
}

/// One of the three sample subsets of a dataset
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Split {
    Train,
    Valid,
    Test,
}

impl Split {
    pub fn as_str(&self) -> &'static str {
        match self {
            Split::Train => "train",
            Split::Valid => "valid",
            Split::Test => "test",
        }
    }
}

impl fmt::Display for Split {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Per-column type tag declared in the dataset metadata
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FeatureType {
    Numerical,
    Categorical,
    Binary,
}

impl FromStr for FeatureType {
    type Err = DataIoError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "numerical" => Ok(FeatureType::Numerical),
            "categorical" => Ok(FeatureType::Categorical),
            "binary" => Ok(FeatureType::Binary),
            other => Err(DataIoError::InvalidParameter(format!(
                "Unknown feature type: {other}"
            ))),
        }
    }
}

/// Ordered feature type tags; only the length matters to the sparse loaders
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FeatureTypes(Vec<FeatureType>);

impl FeatureTypes {
    pub fn new(types: Vec<FeatureType>) -> Self {
        Self(types)
    }

    /// `n` numerical columns, for callers that only know the feature count
    pub fn numerical(n: usize) -> Self {
        Self(vec![FeatureType::Numerical; n])
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn as_slice(&self) -> &[FeatureType] {
        &self.0
    }
}

impl From<Vec<FeatureType>> for FeatureTypes {
    fn from(types: Vec<FeatureType>) -> Self {
        Self(types)
    }
}

impl FromIterator<FeatureType> for FeatureTypes {
    fn from_iter<I: IntoIterator<Item = FeatureType>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

/// Declared on-disk encoding of a dataset's sample files
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DataFormat {
    /// Whitespace-separated floats, one sample per line
    Dense,
    /// `index:value` pairs with 1-based indices
    Sparse,
    /// Bare 1-based indices of the features equal to one
    SparseBinary,
}

impl FromStr for DataFormat {
    type Err = DataIoError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim() {
            "dense" => Ok(DataFormat::Dense),
            "sparse" => Ok(DataFormat::Sparse),
            "sparse_binary" | "binary" => Ok(DataFormat::SparseBinary),
            other => Err(DataIoError::InvalidParameter(format!(
                "Unsupported format: {other}. Use 'dense', 'sparse' or 'sparse_binary'"
            ))),
        }
    }
}

/// Files making up one validated dataset
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DatasetManifest {
    pub name: DatasetName,
    pub base_directory: PathBuf,
    pub train_path: PathBuf,
    pub valid_path: PathBuf,
    pub test_path: PathBuf,
    pub train_solution_path: PathBuf,
}

impl DatasetManifest {
    /// Path of the sample file for a split
    pub fn data_path(&self, split: Split) -> &PathBuf {
        match split {
            Split::Train => &self.train_path,
            Split::Valid => &self.valid_path,
            Split::Test => &self.test_path,
        }
    }
}

/// Sparse vector representation with sorted, unique indices
#[derive(Clone, Debug, Default, PartialEq)]
pub struct SparseVector {
    /// Sorted 0-based column indices of non-zero elements
    pub indices: Vec<usize>,
    /// Values corresponding to indices
    pub values: Vec<f64>,
}

impl SparseVector {
    /// Create a new sparse vector, ensuring indices are sorted
    pub fn new(indices: Vec<usize>, values: Vec<f64>) -> Self {
        assert_eq!(
            indices.len(),
            values.len(),
            "Indices and values must have same length"
        );
        Self::from_pairs(indices.into_iter().zip(values).collect())
    }

    /// Build from `(index, value)` pairs in file order.
    ///
    /// A repeated index keeps the value seen last and zero values are dropped.
    pub fn from_pairs(mut pairs: Vec<(usize, f64)>) -> Self {
        // stable: equal indices stay in file order
        pairs.sort_by_key(|&(idx, _)| idx);

        let mut deduped: Vec<(usize, f64)> = Vec::with_capacity(pairs.len());
        for (idx, value) in pairs {
            match deduped.last_mut() {
                Some(last) if last.0 == idx => last.1 = value,
                _ => deduped.push((idx, value)),
            }
        }

        let (indices, values) = deduped
            .into_iter()
            .filter(|&(_, value)| value != 0.0)
            .unzip();

        Self { indices, values }
    }

    /// Create an empty sparse vector
    pub fn empty() -> Self {
        Self::default()
    }

    /// Get the value at a specific index (0 if not present)
    pub fn get(&self, index: usize) -> f64 {
        match self.indices.binary_search(&index) {
            Ok(pos) => self.values[pos],
            Err(_) => 0.0,
        }
    }

    /// Number of non-zero elements
    pub fn nnz(&self) -> usize {
        self.indices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.indices.is_empty()
    }
}
