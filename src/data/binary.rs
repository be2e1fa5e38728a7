//! Binary-indicator sparse format reader
//!
//! One sample per line, the 1-based indices of the features equal to one:
//! 1 3 7
//! 2

use crate::core::{DataIoError, Result, SparseVector};
use crate::data::{parse_feature_index, parse_lines};
use crate::matrix::CsrMatrix;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

/// Reader for binary-indicator sparse sample files
#[derive(Debug, Clone, Copy)]
pub struct BinarySparseReader {
    n_features: usize,
}

impl BinarySparseReader {
    /// Reader producing matrices with `n_features` columns
    pub fn new(n_features: usize) -> Self {
        Self { n_features }
    }

    /// Load a binary sparse matrix from a file
    pub fn read_file<P: AsRef<Path>>(&self, path: P) -> Result<CsrMatrix> {
        let file = File::open(path).map_err(DataIoError::IoError)?;
        self.read(BufReader::new(file))
    }

    /// Load a binary sparse matrix from a reader
    pub fn read<R: BufRead>(&self, reader: R) -> Result<CsrMatrix> {
        let rows = parse_lines(reader, |line| self.parse_line(line))?;
        CsrMatrix::from_rows(rows, self.n_features)
    }

    fn parse_line(&self, line: &str) -> std::result::Result<SparseVector, String> {
        let pairs = line
            .split_whitespace()
            .map(|token| parse_feature_index(token, self.n_features).map(|col| (col, 1.0)))
            .collect::<std::result::Result<Vec<_>, _>>()?;

        Ok(SparseVector::from_pairs(pairs))
    }
}
