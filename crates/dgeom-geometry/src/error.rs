//! Error types for dgeom-geometry

use thiserror::Error;

/// Errors that can occur during geometry operations
#[derive(Debug, Error)]
pub enum GeometryError {
    /// Core library error
    #[error("core error: {0}")]
    Core(#[from] dgeom_core::Error),

    /// Region processing error
    #[error("region error: {0}")]
    Region(#[from] dgeom_region::RegionError),

    /// Input that cannot form a segmentation, hull or digitization
    #[error("invalid input: {0}")]
    InvalidInput(String),
}

/// Result type for geometry operations
pub type GeometryResult<T> = Result<T, GeometryError>;
