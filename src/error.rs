//! Error types for the kotoba library.
//!
//! Text analysis itself never fails: invalid configuration falls back to
//! documented defaults and empty input simply yields empty results. Errors
//! arise only at the boundaries where input is read from files or results
//! are serialized for output, which is what [`KotobaError`] covers.

use std::io;

use thiserror::Error;

/// The error type for kotoba operations.
#[derive(Error, Debug)]
pub enum KotobaError {
    /// I/O errors (reading input files, standard input, etc.)
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Invalid operation
    #[error("Invalid operation: {0}")]
    InvalidOperation(String),
}

/// Result type alias for operations that may fail with [`KotobaError`].
pub type Result<T> = std::result::Result<T, KotobaError>;

impl KotobaError {
    /// Create a new invalid operation error.
    pub fn invalid_operation<S: Into<String>>(msg: S) -> Self {
        KotobaError::InvalidOperation(msg.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let error = KotobaError::invalid_operation("empty query");
        assert_eq!(error.to_string(), "Invalid operation: empty query");
    }

    #[test]
    fn test_io_error_conversion() {
        let io_error = io::Error::new(io::ErrorKind::NotFound, "file not found");
        let error = KotobaError::from(io_error);

        match error {
            KotobaError::Io(_) => {}
            _ => panic!("Expected IO error variant"),
        }
    }
}
