//! Domain - Rectangular regions of the pixel grid
//!
//! A domain is given by its two inclusive corners. Unlike a width/height
//! rectangle it can never be empty: a single pixel is the smallest domain.

use crate::error::{Error, Result};
use crate::point::Point;

/// Inclusive axis-aligned bounding box of grid points
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Domain {
    lower: Point,
    upper: Point,
}

impl Domain {
    /// Create a new domain
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidDomain`] if `lower` exceeds `upper` on either
    /// axis.
    pub fn new(lower: Point, upper: Point) -> Result<Self> {
        if lower.x > upper.x || lower.y > upper.y {
            return Err(Error::InvalidDomain {
                lx: lower.x,
                ly: lower.y,
                ux: upper.x,
                uy: upper.y,
            });
        }
        Ok(Self { lower, upper })
    }

    /// Domain of a `width x height` raster with its origin at `(0, 0)`
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidInput`] if either dimension is zero or larger
    /// than `i32::MAX`.
    pub fn from_size(width: u32, height: u32) -> Result<Self> {
        if width == 0 || height == 0 {
            return Err(Error::InvalidInput(format!(
                "raster dimensions must be positive: {}x{}",
                width, height
            )));
        }
        let last = |extent: u32| {
            i32::try_from(extent).map(|e| e - 1).map_err(|_| {
                Error::InvalidInput(format!(
                    "raster dimensions exceed the grid: {}x{}",
                    width, height
                ))
            })
        };
        Ok(Self {
            lower: Point::new(0, 0),
            upper: Point::new(last(width)?, last(height)?),
        })
    }

    /// Domain made of a single grid point
    #[inline]
    pub const fn from_point(p: Point) -> Self {
        Self { lower: p, upper: p }
    }

    /// Smallest domain containing every point, `None` if there are none
    pub fn bounding<I>(points: I) -> Option<Self>
    where
        I: IntoIterator<Item = Point>,
    {
        let mut iter = points.into_iter();
        let first = iter.next()?;
        let (lower, upper) = iter.fold((first, first), |(lo, hi), p| {
            (
                Point::new(lo.x.min(p.x), lo.y.min(p.y)),
                Point::new(hi.x.max(p.x), hi.y.max(p.y)),
            )
        });
        Some(Self { lower, upper })
    }

    /// Lower (inclusive) corner
    #[inline]
    pub fn lower(&self) -> Point {
        self.lower
    }

    /// Upper (inclusive) corner
    #[inline]
    pub fn upper(&self) -> Point {
        self.upper
    }

    /// Number of columns
    #[inline]
    pub fn width(&self) -> u64 {
        u64::from(self.upper.x.abs_diff(self.lower.x)) + 1
    }

    /// Number of rows
    #[inline]
    pub fn height(&self) -> u64 {
        u64::from(self.upper.y.abs_diff(self.lower.y)) + 1
    }

    /// Number of grid points inside, saturating at `u64::MAX`
    #[inline]
    pub fn cell_count(&self) -> u64 {
        self.width().saturating_mul(self.height())
    }

    /// Check if a point is inside the domain
    #[inline]
    pub fn contains(&self, p: Point) -> bool {
        p.x >= self.lower.x && p.x <= self.upper.x && p.y >= self.lower.y && p.y <= self.upper.y
    }

    /// Check if a point is on the outermost rows or columns of the domain
    #[inline]
    pub fn is_on_border(&self, p: Point) -> bool {
        self.contains(p)
            && (p.x == self.lower.x
                || p.x == self.upper.x
                || p.y == self.lower.y
                || p.y == self.upper.y)
    }

    /// Expand the domain by a margin on all sides
    pub fn expand(&self, margin: i32) -> Domain {
        Domain {
            lower: self.lower.offset(-margin, -margin),
            upper: self.upper.offset(margin, margin),
        }
    }

    /// Compute the union (bounding box) of two domains
    pub fn union(&self, other: &Domain) -> Domain {
        Domain {
            lower: Point::new(
                self.lower.x.min(other.lower.x),
                self.lower.y.min(other.lower.y),
            ),
            upper: Point::new(
                self.upper.x.max(other.upper.x),
                self.upper.y.max(other.upper.y),
            ),
        }
    }

    /// Iterate over all points in raster order (rows from the lower corner,
    /// x increasing inside a row)
    pub fn iter(&self) -> impl Iterator<Item = Point> + '_ {
        (self.lower.y..=self.upper.y)
            .flat_map(move |y| (self.lower.x..=self.upper.x).map(move |x| Point::new(x, y)))
    }
}
