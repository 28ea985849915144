//! Error types for the test framework

use thiserror::Error;

/// Errors that can occur during regression testing
#[derive(Debug, Error)]
pub enum TestError {
    /// Failed to create directory
    #[error("failed to create directory '{path}': {message}")]
    DirectoryCreate { path: String, message: String },

    /// Value comparison failed
    #[error(
        "value comparison failed at index {index}: expected {expected}, got {actual}, delta {delta}"
    )]
    ValueMismatch {
        index: usize,
        expected: f64,
        actual: f64,
        delta: f64,
    },

    /// Point sequence comparison failed
    #[error("point comparison failed at index {index}: first difference at position {position}")]
    PointMismatch { index: usize, position: usize },

    /// Text comparison failed
    #[error("string comparison failed at index {index}: sizes {expected_len} vs {actual_len}")]
    StringMismatch {
        index: usize,
        expected_len: usize,
        actual_len: usize,
    },

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for test operations
pub type TestResult<T> = Result<T, TestError>;
