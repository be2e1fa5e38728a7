//! Matrix representations produced by the sample loaders

pub mod csr;
pub mod dense;

pub use self::csr::CsrMatrix;
pub use self::dense::DenseMatrix;

use crate::core::Matrix;

/// Loaded samples in either dense or compressed sparse row form
#[derive(Debug, Clone, PartialEq)]
pub enum SampleMatrix {
    Dense(DenseMatrix),
    Sparse(CsrMatrix),
}

impl SampleMatrix {
    pub fn is_sparse(&self) -> bool {
        matches!(self, SampleMatrix::Sparse(_))
    }

    pub fn as_dense(&self) -> Option<&DenseMatrix> {
        match self {
            SampleMatrix::Dense(m) => Some(m),
            SampleMatrix::Sparse(_) => None,
        }
    }

    pub fn as_sparse(&self) -> Option<&CsrMatrix> {
        match self {
            SampleMatrix::Sparse(m) => Some(m),
            SampleMatrix::Dense(_) => None,
        }
    }

    /// Convert to a dense matrix, materializing sparse zeros
    pub fn into_dense(self) -> DenseMatrix {
        match self {
            SampleMatrix::Dense(m) => m,
            SampleMatrix::Sparse(m) => m.to_dense(),
        }
    }
}

impl Matrix for SampleMatrix {
    fn n_rows(&self) -> usize {
        match self {
            SampleMatrix::Dense(m) => m.n_rows(),
            SampleMatrix::Sparse(m) => m.n_rows(),
        }
    }

    fn n_cols(&self) -> usize {
        match self {
            SampleMatrix::Dense(m) => m.n_cols(),
            SampleMatrix::Sparse(m) => m.n_cols(),
        }
    }

    fn get(&self, row: usize, col: usize) -> f64 {
        match self {
            SampleMatrix::Dense(m) => m.get(row, col),
            SampleMatrix::Sparse(m) => m.get(row, col),
        }
    }

    fn nnz(&self) -> usize {
        match self {
            SampleMatrix::Dense(m) => m.nnz(),
            SampleMatrix::Sparse(m) => m.nnz(),
        }
    }
}

impl From<DenseMatrix> for SampleMatrix {
    fn from(m: DenseMatrix) -> Self {
        SampleMatrix::Dense(m)
    }
}

impl From<CsrMatrix> for SampleMatrix {
    fn from(m: CsrMatrix) -> Self {
        SampleMatrix::Sparse(m)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::SparseVector;

    #[test]
    fn test_sample_matrix_dispatch() {
        let dense: SampleMatrix = DenseMatrix::from_rows(vec![vec![0.0, 2.0]]).unwrap().into();
        assert!(!dense.is_sparse());
        assert_eq!(dense.shape(), (1, 2));
        assert_eq!(dense.get(0, 1), 2.0);
        assert!(dense.as_sparse().is_none());

        let rows = vec![SparseVector::new(vec![1], vec![2.0])];
        let sparse: SampleMatrix = CsrMatrix::from_rows(rows, 2).unwrap().into();
        assert!(sparse.is_sparse());
        assert_eq!(sparse.nnz(), 1);
        assert!(sparse.as_dense().is_none());

        assert_eq!(sparse.into_dense(), dense.into_dense());
    }
}
