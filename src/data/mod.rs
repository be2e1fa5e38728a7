//! Sample loading for the three on-disk encodings
//!
//! Every format stores one sample per line; blank lines are skipped.
//! Which loader to use is declared by the dataset, never detected:
//!
//! - `dense`: `0.5 1.2 0 3` (whitespace-separated floats)
//! - `sparse`: `2:3.0 5:1.5` (1-based `index:value` pairs)
//! - `sparse_binary`: `1 3` (1-based indices of features equal to one)

pub mod binary;
pub mod dense;
pub mod sparse;

pub use self::binary::BinarySparseReader;
pub use self::dense::DenseReader;
pub use self::sparse::SparseReader;

use crate::core::{DataFormat, DataIoError, FeatureTypes, Matrix, Result};
use crate::matrix::{CsrMatrix, DenseMatrix, SampleMatrix};
use log::debug;
use std::io::BufRead;
use std::path::Path;

/// Load a dense sample file
pub fn load_dense<P: AsRef<Path>>(path: P) -> Result<DenseMatrix> {
    let path = path.as_ref();
    debug!("Loading dense samples from {path:?}");
    let matrix = DenseReader::from_file(path)?;
    log_loaded(path, &matrix);
    Ok(matrix)
}

/// Load an `index:value` sparse sample file with one column per feature type
pub fn load_sparse<P: AsRef<Path>>(path: P, feature_types: &FeatureTypes) -> Result<CsrMatrix> {
    let path = path.as_ref();
    debug!("Loading sparse samples from {path:?}");
    let matrix = SparseReader::new(feature_types.len()).read_file(path)?;
    log_loaded(path, &matrix);
    Ok(matrix)
}

/// Load a binary-indicator sparse sample file with one column per feature type
pub fn load_binary_sparse<P: AsRef<Path>>(
    path: P,
    feature_types: &FeatureTypes,
) -> Result<CsrMatrix> {
    let path = path.as_ref();
    debug!("Loading binary sparse samples from {path:?}");
    let matrix = BinarySparseReader::new(feature_types.len()).read_file(path)?;
    log_loaded(path, &matrix);
    Ok(matrix)
}

/// Load a sample file using the dataset's declared format
pub fn load_samples<P: AsRef<Path>>(
    path: P,
    format: DataFormat,
    feature_types: &FeatureTypes,
) -> Result<SampleMatrix> {
    match format {
        DataFormat::Dense => load_dense(path).map(SampleMatrix::Dense),
        DataFormat::Sparse => load_sparse(path, feature_types).map(SampleMatrix::Sparse),
        DataFormat::SparseBinary => {
            load_binary_sparse(path, feature_types).map(SampleMatrix::Sparse)
        }
    }
}

fn log_loaded<M: Matrix>(path: &Path, matrix: &M) {
    debug!(
        "Loaded {}x{} matrix ({} stored entries) from {:?}",
        matrix.n_rows(),
        matrix.n_cols(),
        matrix.nnz(),
        path
    );
}

/// Parse every non-blank line of `reader`, stopping at the first failure.
///
/// Parser messages are wrapped into `MalformedSample` with the 1-based line number.
pub(crate) fn parse_lines<R, T, F>(reader: R, mut parse: F) -> Result<Vec<T>>
where
    R: BufRead,
    F: FnMut(&str) -> std::result::Result<T, String>,
{
    let mut rows = Vec::new();

    for (line_num, line) in reader.lines().enumerate() {
        let line = line.map_err(DataIoError::IoError)?;
        let line = line.trim();

        if line.is_empty() {
            continue;
        }

        let row = parse(line).map_err(|msg| DataIoError::malformed(line_num + 1, msg))?;
        rows.push(row);
    }

    Ok(rows)
}

/// Parse a 1-based feature index and convert it to a 0-based column
pub(crate) fn parse_feature_index(
    token: &str,
    n_features: usize,
) -> std::result::Result<usize, String> {
    let index = token
        .parse::<usize>()
        .map_err(|_| format!("Invalid feature index: {token}"))?;

    if index == 0 || index > n_features {
        return Err(format!(
            "Feature index {index} out of range [1, {n_features}]"
        ));
    }

    Ok(index - 1)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::{Cursor, Write};
    use tempfile::NamedTempFile;

    #[test]
    fn test_parse_lines_skips_blank_lines() {
        let data = "a\n\n   \nb\n";
        let rows = parse_lines(Cursor::new(data), |line| Ok(line.to_string())).unwrap();
        assert_eq!(rows, vec!["a", "b"]);
    }

    #[test]
    fn test_parse_lines_reports_line_number() {
        let data = "ok\n\nbad\n";
        let result = parse_lines(Cursor::new(data), |line| {
            if line == "bad" {
                Err("nope".to_string())
            } else {
                Ok(())
            }
        });

        match result {
            Err(DataIoError::MalformedSample { line, message }) => {
                assert_eq!(line, 3);
                assert_eq!(message, "nope");
            }
            other => panic!("Expected MalformedSample, got {other:?}"),
        }
    }

    #[test]
    fn test_parse_feature_index() {
        assert_eq!(parse_feature_index("1", 3), Ok(0));
        assert_eq!(parse_feature_index("3", 3), Ok(2));
        assert!(parse_feature_index("0", 3).is_err());
        assert!(parse_feature_index("4", 3).is_err());
        assert!(parse_feature_index("-1", 3).is_err());
        assert!(parse_feature_index("1.5", 3).is_err());
    }

    #[test]
    fn test_load_samples_dispatch() {
        let mut dense_file = NamedTempFile::new().expect("Failed to create temp file");
        writeln!(dense_file, "1 0 1").expect("Failed to write");
        dense_file.flush().expect("Failed to flush");

        let mut binary_file = NamedTempFile::new().expect("Failed to create temp file");
        writeln!(binary_file, "1 3").expect("Failed to write");
        binary_file.flush().expect("Failed to flush");

        let feature_types = FeatureTypes::numerical(3);

        let dense = load_samples(dense_file.path(), DataFormat::Dense, &feature_types).unwrap();
        assert!(!dense.is_sparse());

        let binary =
            load_samples(binary_file.path(), DataFormat::SparseBinary, &feature_types).unwrap();
        assert!(binary.is_sparse());
        assert_eq!(dense.into_dense(), binary.into_dense());
    }

    #[test]
    fn test_load_missing_file() {
        let result = load_dense("/non/existent/file_train.data");
        assert!(matches!(result, Err(DataIoError::IoError(_))));
    }
}
