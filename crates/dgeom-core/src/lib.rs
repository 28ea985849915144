//! dgeom Core - Basic data structures for digital geometry
//!
//! This crate provides the fundamental data structures used throughout
//! the dgeom workspace:
//!
//! - [`Point`] / [`Direction4`] - Grid points and axis-aligned unit steps
//! - [`Domain`] - Inclusive rectangular region of the grid
//! - [`PixelSet`] - Foreground pixels of a binary image
//! - [`Curve`] - Closed 4-connected curve on pixel corners
//!
//! # Coordinates
//!
//! The y axis points up. Pixel `(x, y)` covers the unit square
//! `[x, x + 1] x [y, y + 1]`, so boundary curves run through integer
//! corner points.
//!
//! # Example
//!
//! ```
//! use dgeom_core::{Domain, PixelSet, Point};
//!
//! let mut set = PixelSet::new(Domain::from_size(8, 8).unwrap());
//! set.insert(Point::new(2, 3)).unwrap();
//! assert!(set.contains(Point::new(2, 3)));
//! assert_eq!(set.len(), 1);
//! ```

pub mod curve;
pub mod domain;
pub mod error;
pub mod pixset;
pub mod point;

pub use curve::{Curve, from_chain_code, to_chain_code};
pub use domain::Domain;
pub use error::{Error, Result};
pub use pixset::PixelSet;
pub use point::{Direction4, Point};
