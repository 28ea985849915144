//! Error types for dgeom-core
//!
//! Provides a unified error type for all operations in the core crate.
//! Each variant captures enough context for diagnostics without exposing
//! internal implementation details.

use thiserror::Error;

/// dgeom core error type
#[derive(Error, Debug)]
pub enum Error {
    /// Input that cannot be processed (empty, mismatched lengths, ...)
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// Domain corners are not ordered
    #[error("invalid domain: lower ({lx}, {ly}) exceeds upper ({ux}, {uy})")]
    InvalidDomain { lx: i32, ly: i32, ux: i32, uy: i32 },

    /// Point does not lie inside the domain of a pixel set
    #[error("point ({x}, {y}) lies outside the domain")]
    PointOutsideDomain { x: i32, y: i32 },

    /// Index out of bounds
    #[error("index out of bounds: {index} >= {len}")]
    IndexOutOfBounds { index: usize, len: usize },
}

/// Result type alias for core operations
pub type Result<T> = std::result::Result<T, Error>;
