//! Errors raised while loading a salary dataset.

use std::path::PathBuf;

use thiserror::Error;

/// Why a dataset could not be loaded. Always fatal for the load attempt.
#[derive(Debug, Error)]
pub enum DataLoadError {
    #[error("dataset file not found: {path}")]
    NotFound { path: PathBuf },

    #[error("failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("unsupported file extension '.{extension}' for {path}")]
    UnsupportedExtension { path: PathBuf, extension: String },

    #[error("failed to parse CSV {path}: {source}")]
    Csv {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },

    #[error("failed to parse JSON {path}: {source}")]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("failed to read parquet {path}: {source}")]
    Parquet {
        path: PathBuf,
        #[source]
        source: parquet::errors::ParquetError,
    },

    #[error("failed to decode parquet batch in {path}: {source}")]
    Arrow {
        path: PathBuf,
        #[source]
        source: arrow::error::ArrowError,
    },

    #[error("required column '{column}' not found in {path}")]
    MissingColumn { column: String, path: PathBuf },

    #[error("column '{column}' in {path} has type {found}, expected {expected}")]
    ColumnType {
        column: String,
        path: PathBuf,
        expected: &'static str,
        found: String,
    },

    #[error("null value in required column '{column}' at row {row} of {path}")]
    NullValue {
        column: String,
        row: usize,
        path: PathBuf,
    },
}

/// Result type for dataset loading.
pub type Result<T> = std::result::Result<T, DataLoadError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display() {
        let err = DataLoadError::MissingColumn {
            column: "usd".into(),
            path: PathBuf::from("data/salaries.csv"),
        };
        assert_eq!(
            err.to_string(),
            "required column 'usd' not found in data/salaries.csv"
        );
    }

    #[test]
    fn not_found_display() {
        let err = DataLoadError::NotFound {
            path: PathBuf::from("missing.csv"),
        };
        assert_eq!(err.to_string(), "dataset file not found: missing.csv");
    }
}
