//! Dense format reader
//!
//! One sample per line, whitespace-separated floats:
//! 0.5 1.2 0 3.0
//! 1 0 0 2.5

use crate::core::{DataIoError, Result};
use crate::data::parse_lines;
use crate::matrix::DenseMatrix;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

/// Reader for dense sample files
pub struct DenseReader;

impl DenseReader {
    /// Load a dense matrix from a file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<DenseMatrix> {
        let file = File::open(path).map_err(DataIoError::IoError)?;
        Self::from_reader(BufReader::new(file))
    }

    /// Load a dense matrix from a reader.
    ///
    /// Every line must hold the same number of values as the first one.
    pub fn from_reader<R: BufRead>(reader: R) -> Result<DenseMatrix> {
        let mut n_cols: Option<usize> = None;

        let rows = parse_lines(reader, |line| {
            let row = Self::parse_line(line)?;
            match n_cols {
                None => n_cols = Some(row.len()),
                Some(expected) if expected != row.len() => {
                    return Err(format!(
                        "Expected {} values, found {}",
                        expected,
                        row.len()
                    ));
                }
                Some(_) => {}
            }
            Ok(row)
        })?;

        DenseMatrix::from_rows(rows)
    }

    fn parse_line(line: &str) -> std::result::Result<Vec<f64>, String> {
        line.split_whitespace()
            .map(|token| {
                token
                    .parse::<f64>()
                    .map_err(|_| format!("Invalid value: {token}"))
            })
            .collect()
    }
}
