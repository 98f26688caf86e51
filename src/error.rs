//! Error types for chat2parquet
//!
//! This module provides structured error handling using thiserror; the
//! underlying I/O and Polars errors are carried verbatim.

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for conversion operations
#[derive(Error, Debug)]
pub enum ConvertError {
    /// File I/O error
    #[error("Failed to access file: {0}")]
    FileIo(#[from] std::io::Error),

    /// Polars data processing error
    #[error("Data processing error: {0}")]
    Polars(#[from] polars::error::PolarsError),

    /// The input did not have the expected column count
    #[error("Expected {expected} columns, found {found}")]
    ColumnCount { expected: usize, found: usize },

    /// The input path has no usable file name
    #[error("Cannot derive an output name from '{}'", .0.display())]
    OutputName(PathBuf),
}

/// Result type alias for conversion operations
pub type Result<T> = std::result::Result<T, ConvertError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = ConvertError::ColumnCount {
            expected: 7,
            found: 5,
        };
        assert_eq!(err.to_string(), "Expected 7 columns, found 5");

        let err = ConvertError::OutputName(PathBuf::from("/"));
        assert_eq!(err.to_string(), "Cannot derive an output name from '/'");
    }

    #[test]
    fn test_error_conversion() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err: ConvertError = io_err.into();
        assert!(matches!(err, ConvertError::FileIo(_)));
    }
}
