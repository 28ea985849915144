//! dgeom-geometry - Straightness, segmentation and shape measures for dgeom
//!
//! This crate provides:
//!
//! - **Digital straight segments** - Incremental arithmetical recognition
//! - **Polygonal segmentation** - Greedy cover of a curve by straight pieces
//! - **Metrics** - Perimeter, area and circularity of the resulting polygon
//! - **Convex hulls** - Melkman (polylines) and monotone chain (point sets)
//! - **Digitization** - Gauss digitization of disks, ellipses, flowers and
//!   convex polygons
//! - **Grain analysis** - Per-component statistics of a binary image
//!
//! # Example
//!
//! ```
//! use dgeom_core::{Domain, PixelSet, Point};
//! use dgeom_geometry::{MetricOptions, segment};
//! use dgeom_region::{AdjacencyRule, TraceOptions, trace_boundary};
//!
//! let mut set = PixelSet::new(Domain::from_size(20, 20).unwrap());
//! for y in 5..15 {
//!     for x in 5..15 {
//!         set.insert(Point::new(x, y)).unwrap();
//!     }
//! }
//!
//! let curve = trace_boundary(&set, AdjacencyRule::FourEight, &TraceOptions::default()).unwrap();
//! let segmentation = segment(&curve).unwrap();
//! assert_eq!(segmentation.len(), 4);
//! assert_eq!(segmentation.perimeter(), 40.0);
//!
//! let c = segmentation.circularity(&MetricOptions::default());
//! assert!((c - std::f64::consts::FRAC_PI_4).abs() < 1e-12);
//! ```

pub mod digitize;
pub mod dss;
pub mod error;
pub mod grains;
pub mod hull;
pub mod metrics;
pub mod segmentation;

pub use error::{GeometryError, GeometryResult};

pub use digitize::{Bounds, ConvexPolygon, Disk, Ellipse, Flower, Shape, digitize};
pub use dss::{DssState, is_straight};
pub use grains::{GrainMetrics, GrainOptions, analyze_grain, analyze_grains, write_report};
pub use hull::{MelkmanHull, convex_hull, orientation, random_points};
pub use metrics::{
    MetricOptions, ShapeMetrics, circularity, polygon_area, polygon_perimeter, signed_double_area,
};
pub use segmentation::{Segment, Segmentation, longest_segment, segment, segment_points};
