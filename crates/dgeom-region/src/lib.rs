//! dgeom-region - Region processing for dgeom
//!
//! This crate provides region processing functionality including:
//!
//! - **Adjacency** - 4/8 connectivities and foreground/background pairs
//! - **Connected component analysis** - Splitting a pixel set into objects
//! - **Boundary tracing** - Closed corner curves around an object
//! - **Selection** - Dropping objects cut by the image frame
//!
//! # Examples
//!
//! ## Finding connected components
//!
//! ```
//! use dgeom_region::{Connectivity, find_connected_components};
//! use dgeom_core::{Domain, PixelSet, Point};
//!
//! let mut set = PixelSet::new(Domain::from_size(100, 100).unwrap());
//! set.insert(Point::new(10, 10)).unwrap();
//! set.insert(Point::new(11, 10)).unwrap();
//! set.insert(Point::new(50, 50)).unwrap();
//!
//! let components = find_connected_components(&set, Connectivity::Four);
//! assert_eq!(components.len(), 2);
//! ```
//!
//! ## Tracing a boundary
//!
//! ```
//! use dgeom_region::{AdjacencyRule, TraceOptions, trace_boundary};
//! use dgeom_core::{Domain, PixelSet, Point};
//!
//! let mut set = PixelSet::new(Domain::from_size(10, 10).unwrap());
//! for x in 2..5 {
//!     set.insert(Point::new(x, 3)).unwrap();
//! }
//!
//! let curve = trace_boundary(&set, AdjacencyRule::FourEight, &TraceOptions::default()).unwrap();
//! assert_eq!(curve.len(), 8);
//! ```

pub mod adjacency;
pub mod conncomp;
pub mod error;
pub mod select;
pub mod tracer;

// Re-export core types
pub use dgeom_core;

// Re-export error types
pub use error::{RegionError, RegionResult};

pub use adjacency::{AdjacencyRule, Connectivity};
pub use conncomp::{ConnectedComponent, count_components, find_connected_components};
pub use select::{select_interior, touches_border};
pub use tracer::{
    BoundaryCell, DEFAULT_SEARCH_BUDGET, TraceOptions, find_boundary_cell, trace, trace_boundary,
};
