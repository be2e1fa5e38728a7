//! Sparse `index:value` format reader
//!
//! One sample per line, zero or more 1-based `index:value` pairs:
//! 1:0.5 3:1.2 7:0.8
//! 2:0.3 5:2.1

use crate::core::{DataIoError, Result, SparseVector};
use crate::data::{parse_feature_index, parse_lines};
use crate::matrix::CsrMatrix;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

/// Reader for `index:value` sparse sample files
#[derive(Debug, Clone, Copy)]
pub struct SparseReader {
    n_features: usize,
}

impl SparseReader {
    /// Reader producing matrices with `n_features` columns
    pub fn new(n_features: usize) -> Self {
        Self { n_features }
    }

    /// Load a sparse matrix from a file
    pub fn read_file<P: AsRef<Path>>(&self, path: P) -> Result<CsrMatrix> {
        let file = File::open(path).map_err(DataIoError::IoError)?;
        self.read(BufReader::new(file))
    }

    /// Load a sparse matrix from a reader
    pub fn read<R: BufRead>(&self, reader: R) -> Result<CsrMatrix> {
        let rows = parse_lines(reader, |line| self.parse_line(line))?;
        CsrMatrix::from_rows(rows, self.n_features)
    }

    /// Parse one line of `index:value` pairs into 0-based columns
    fn parse_line(&self, line: &str) -> std::result::Result<SparseVector, String> {
        let mut pairs = Vec::new();

        for feature_str in line.split_whitespace() {
            let (index_str, value_str) = feature_str
                .split_once(':')
                .ok_or_else(|| format!("Invalid feature format: {feature_str}"))?;

            let column = parse_feature_index(index_str, self.n_features)?;
            let value = value_str
                .parse::<f64>()
                .map_err(|_| format!("Invalid feature value: {value_str}"))?;

            pairs.push((column, value));
        }

        Ok(SparseVector::from_pairs(pairs))
    }
}
