//! dgeom - Digital geometry on binary pixel sets
//!
//! # Overview
//!
//! dgeom turns binary images into geometry:
//!
//! - Connected components under 4- or 8-connectivity
//! - Boundary tracing on the pixel-corner grid
//! - Greedy segmentation into digital straight segments
//! - Perimeter, area and circularity of the segmented boundaries
//! - Convex hulls and Gauss digitization of analytic shapes
//!
//! # Example
//!
//! ```
//! use dgeom::{Domain, PixelSet, Point};
//! use dgeom::geometry::{GrainOptions, analyze_grains, write_report};
//!
//! let mut image = PixelSet::new(Domain::from_size(32, 32).unwrap());
//! for y in 8..18 {
//!     for x in 8..18 {
//!         image.insert(Point::new(x, y)).unwrap();
//!     }
//! }
//!
//! let grains = analyze_grains(&image, &image.domain(), &GrainOptions::default());
//! assert_eq!(grains.len(), 1);
//! assert_eq!(grains[0].perimeter, 40.0);
//!
//! let mut report = Vec::new();
//! write_report(&grains, &mut report).unwrap();
//! assert!(report.starts_with(b"perimeter;circularity\n40;"));
//! ```

// Re-export core types (primary data structures used everywhere)
pub use dgeom_core::*;

// Re-export domain crates as modules to avoid name conflicts
pub use dgeom_geometry as geometry;
pub use dgeom_region as region;
