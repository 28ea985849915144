//! Error types for dgeom-region

use thiserror::Error;

/// Errors that can occur during region processing operations
#[derive(Debug, Error)]
pub enum RegionError {
    /// Core library error
    #[error("core error: {0}")]
    Core(#[from] dgeom_core::Error),

    /// Input that cannot be traced (empty set, seed off the boundary, ...)
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// Seed search gave up before finding a boundary cell
    #[error("no boundary cell found within a search budget of {budget} cells")]
    BoundaryNotFound { budget: usize },
}

/// Result type for region operations
pub type RegionResult<T> = Result<T, RegionError>;
