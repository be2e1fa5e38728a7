//! Core traits shared by the matrix representations

/// Read access to a loaded sample matrix
pub trait Matrix {
    /// Number of samples
    fn n_rows(&self) -> usize;

    /// Number of feature columns
    fn n_cols(&self) -> usize;

    /// Value at `(row, col)`, zero for absent sparse entries
    ///
    /// # Panics
    /// Panics if `row >= n_rows()` or `col >= n_cols()`
    fn get(&self, row: usize, col: usize) -> f64;

    /// Number of explicitly stored entries
    fn nnz(&self) -> usize;

    /// `(rows, cols)`
    fn shape(&self) -> (usize, usize) {
        (self.n_rows(), self.n_cols())
    }

    /// Materialize one row as a dense vector
    fn row_dense(&self, row: usize) -> Vec<f64> {
        (0..self.n_cols()).map(|col| self.get(row, col)).collect()
    }

    fn is_empty(&self) -> bool {
        self.n_rows() == 0
    }
}
