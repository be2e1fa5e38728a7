//! Row-major dense sample matrix

use crate::core::{DataIoError, Matrix, Result};

/// Rectangular matrix of samples stored row by row
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DenseMatrix {
    data: Vec<f64>,
    n_rows: usize,
    n_cols: usize,
}

impl DenseMatrix {
    /// Create a matrix from row-major storage
    pub fn new(n_rows: usize, n_cols: usize, data: Vec<f64>) -> Result<Self> {
        if data.len() != n_rows * n_cols {
            return Err(DataIoError::InvalidParameter(format!(
                "data length ({}) != rows * cols ({} * {})",
                data.len(),
                n_rows,
                n_cols
            )));
        }
        Ok(Self {
            data,
            n_rows,
            n_cols,
        })
    }

    /// All-zero matrix
    pub fn zeros(n_rows: usize, n_cols: usize) -> Self {
        Self {
            data: vec![0.0; n_rows * n_cols],
            n_rows,
            n_cols,
        }
    }

    /// Create a matrix from equally sized rows
    pub fn from_rows(rows: Vec<Vec<f64>>) -> Result<Self> {
        let n_rows = rows.len();
        let n_cols = rows.first().map_or(0, Vec::len);

        let mut data = Vec::with_capacity(n_rows * n_cols);
        for (i, row) in rows.into_iter().enumerate() {
            if row.len() != n_cols {
                return Err(DataIoError::InvalidParameter(format!(
                    "row {} has {} columns, expected {}",
                    i,
                    row.len(),
                    n_cols
                )));
            }
            data.extend(row);
        }

        Self::new(n_rows, n_cols, data)
    }

    /// Borrow one row
    ///
    /// # Panics
    /// Panics if `row >= n_rows()`
    pub fn row(&self, row: usize) -> &[f64] {
        assert!(row < self.n_rows, "row {row} out of bounds");
        &self.data[row * self.n_cols..(row + 1) * self.n_cols]
    }

    /// Overwrite one entry
    ///
    /// # Panics
    /// Panics if the position is out of bounds
    pub fn set(&mut self, row: usize, col: usize, value: f64) {
        assert!(
            row < self.n_rows && col < self.n_cols,
            "({row}, {col}) out of bounds"
        );
        self.data[row * self.n_cols + col] = value;
    }

    /// Iterate over rows in order
    pub fn rows(&self) -> impl Iterator<Item = &[f64]> {
        self.data.chunks_exact(self.n_cols.max(1))
    }

    /// Underlying row-major storage
    pub fn as_slice(&self) -> &[f64] {
        &self.data
    }
}

impl Matrix for DenseMatrix {
    fn n_rows(&self) -> usize {
        self.n_rows
    }

    fn n_cols(&self) -> usize {
        self.n_cols
    }

    fn get(&self, row: usize, col: usize) -> f64 {
        assert!(col < self.n_cols, "column {col} out of bounds");
        self.row(row)[col]
    }

    fn nnz(&self) -> usize {
        self.data.iter().filter(|&&v| v != 0.0).count()
    }

    fn row_dense(&self, row: usize) -> Vec<f64> {
        self.row(row).to_vec()
    }
}
