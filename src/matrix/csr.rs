//! Compressed sparse row matrix
//!
//! Storage layout:
//! - `values`: \[nnz\] - Stored entries, row by row
//! - `col_indices`: \[nnz\] - 0-based column of each entry, sorted within a row
//! - `row_ptrs`: \[n_rows + 1\] - Start of each row in `values`/`col_indices`
//!
//! ```text
//! [[1, 0, 2],     values:      [1, 2, 3]
//!  [0, 0, 0],     col_indices: [0, 2, 1]
//!  [0, 3, 0]]     row_ptrs:    [0, 2, 2, 3]
//! ```

use crate::core::{DataIoError, Matrix, Result, SparseVector};
use crate::matrix::DenseMatrix;

#[derive(Debug, Clone, PartialEq)]
pub struct CsrMatrix {
    values: Vec<f64>,
    col_indices: Vec<usize>,
    row_ptrs: Vec<usize>,
    n_cols: usize,
}

impl CsrMatrix {
    /// Create a CSR matrix from raw arrays, validating the layout
    pub fn new(
        values: Vec<f64>,
        col_indices: Vec<usize>,
        row_ptrs: Vec<usize>,
        n_cols: usize,
    ) -> Result<Self> {
        if values.len() != col_indices.len() {
            return Err(DataIoError::InvalidParameter(format!(
                "values length ({}) != col_indices length ({})",
                values.len(),
                col_indices.len()
            )));
        }

        if row_ptrs.first() != Some(&0) || row_ptrs.last() != Some(&values.len()) {
            return Err(DataIoError::InvalidParameter(format!(
                "row_ptrs must start at 0 and end at nnz ({})",
                values.len()
            )));
        }

        if let Some(i) = (1..row_ptrs.len()).find(|&i| row_ptrs[i] < row_ptrs[i - 1]) {
            return Err(DataIoError::InvalidParameter(format!(
                "row_ptrs not monotonic at index {}: {} < {}",
                i,
                row_ptrs[i],
                row_ptrs[i - 1]
            )));
        }

        if let Some(&col) = col_indices.iter().find(|&&col| col >= n_cols) {
            return Err(DataIoError::InvalidParameter(format!(
                "column index {col} out of bounds for {n_cols} columns"
            )));
        }

        Ok(Self {
            values,
            col_indices,
            row_ptrs,
            n_cols,
        })
    }

    /// Stack sparse rows into a matrix with `n_cols` columns
    pub fn from_rows(rows: Vec<SparseVector>, n_cols: usize) -> Result<Self> {
        let nnz = rows.iter().map(SparseVector::nnz).sum();
        let mut values = Vec::with_capacity(nnz);
        let mut col_indices = Vec::with_capacity(nnz);
        let mut row_ptrs = Vec::with_capacity(rows.len() + 1);
        row_ptrs.push(0);

        for row in rows {
            col_indices.extend(row.indices);
            values.extend(row.values);
            row_ptrs.push(values.len());
        }

        Self::new(values, col_indices, row_ptrs, n_cols)
    }

    /// Empty matrix with no rows
    pub fn empty(n_cols: usize) -> Self {
        Self {
            values: Vec::new(),
            col_indices: Vec::new(),
            row_ptrs: vec![0],
            n_cols,
        }
    }

    /// Column indices and values stored for one row
    ///
    /// # Panics
    /// Panics if `row >= n_rows()`
    pub fn row(&self, row: usize) -> (&[usize], &[f64]) {
        assert!(row < self.n_rows(), "row {row} out of bounds");
        let (start, end) = (self.row_ptrs[row], self.row_ptrs[row + 1]);
        (&self.col_indices[start..end], &self.values[start..end])
    }

    pub fn values(&self) -> &[f64] {
        &self.values
    }

    pub fn col_indices(&self) -> &[usize] {
        &self.col_indices
    }

    pub fn row_ptrs(&self) -> &[usize] {
        &self.row_ptrs
    }

    pub fn to_dense(&self) -> DenseMatrix {
        let mut dense = DenseMatrix::zeros(self.n_rows(), self.n_cols);
        for row in 0..self.n_rows() {
            let (cols, values) = self.row(row);
            for (&col, &value) in cols.iter().zip(values) {
                dense.set(row, col, value);
            }
        }
        dense
    }
}

impl Matrix for CsrMatrix {
    fn n_rows(&self) -> usize {
        self.row_ptrs.len() - 1
    }

    fn n_cols(&self) -> usize {
        self.n_cols
    }

    fn get(&self, row: usize, col: usize) -> f64 {
        assert!(col < self.n_cols, "column {col} out of bounds");
        let (cols, values) = self.row(row);
        match cols.binary_search(&col) {
            Ok(pos) => values[pos],
            Err(_) => 0.0,
        }
    }

    fn nnz(&self) -> usize {
        self.values.len()
    }
}
