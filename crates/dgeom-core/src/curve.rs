//! Curve - Closed grid curves and Freeman chain codes
//!
//! A curve is the cyclic sequence of pixel corners along the boundary of a
//! pixel set. Consecutive points, including the wrap-around from the last
//! point to the first, are one axis-aligned unit step apart, so a curve is
//! equivalently described by its start point and a 4-direction chain code.

use crate::domain::Domain;
use crate::error::{Error, Result};
use crate::point::{Direction4, Point};

/// Closed sequence of grid points with unit steps between neighbours
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Curve {
    points: Vec<Point>,
}

impl Curve {
    /// Create a curve from its points
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidInput`] if two consecutive points (the closing
    /// pair included) are not one unit step apart.
    pub fn new(points: Vec<Point>) -> Result<Self> {
        if points.len() > 1 {
            let n = points.len();
            for i in 0..n {
                let (p, q) = (points[i], points[(i + 1) % n]);
                if Direction4::from_offset(q - p).is_none() {
                    return Err(Error::InvalidInput(format!(
                        "curve points {} ({}, {}) and {} ({}, {}) are not 4-adjacent",
                        i,
                        p.x,
                        p.y,
                        (i + 1) % n,
                        q.x,
                        q.y
                    )));
                }
            }
        }
        Ok(Self { points })
    }

    /// Create a curve without validating the steps
    ///
    /// The caller guarantees the unit-step invariant.
    pub fn new_unchecked(points: Vec<Point>) -> Self {
        Self { points }
    }

    /// Get the number of points in this curve
    #[inline]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Check if the curve is empty
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// All points in order
    #[inline]
    pub fn points(&self) -> &[Point] {
        &self.points
    }

    /// Get a point by index
    #[inline]
    pub fn get(&self, index: usize) -> Option<Point> {
        self.points.get(index).copied()
    }

    /// Points `start..=end`
    ///
    /// # Errors
    ///
    /// Returns [`Error::IndexOutOfBounds`] if `end` is past the last point,
    /// and [`Error::InvalidInput`] if `start > end`.
    pub fn range(&self, start: usize, end: usize) -> Result<&[Point]> {
        if end >= self.points.len() {
            return Err(Error::IndexOutOfBounds {
                index: end,
                len: self.points.len(),
            });
        }
        if start > end {
            return Err(Error::InvalidInput(format!(
                "range start {} is after end {}",
                start, end
            )));
        }
        Ok(&self.points[start..=end])
    }

    /// Iterate over the points
    pub fn iter(&self) -> impl Iterator<Item = Point> + '_ {
        self.points.iter().copied()
    }

    /// Freeman codes of the steps between consecutive points, the closing
    /// step last
    pub fn steps(&self) -> Vec<Direction4> {
        if self.points.len() < 2 {
            return Vec::new();
        }
        let mut chain = to_chain_code(&self.points);
        if let Some(dir) = Direction4::from_offset(self.points[0] - self.points[self.points.len() - 1])
        {
            chain.push(dir);
        }
        chain
    }

    /// Number of unit steps around the curve
    ///
    /// Equal to `len()` for any closed curve of two points or more; this is
    /// the raw 4-connected boundary length.
    #[inline]
    pub fn edge_length(&self) -> usize {
        if self.points.len() < 2 {
            0
        } else {
            self.points.len()
        }
    }

    /// Bounding box of the curve points
    pub fn bounding_box(&self) -> Option<Domain> {
        Domain::bounding(self.iter())
    }
}

impl<'a> IntoIterator for &'a Curve {
    type Item = &'a Point;
    type IntoIter = std::slice::Iter<'a, Point>;

    fn into_iter(self) -> Self::IntoIter {
        self.points.iter()
    }
}

/// Convert a point sequence to its chain code
///
/// Pairs of consecutive points that are not a unit step apart are skipped.
pub fn to_chain_code(points: &[Point]) -> Vec<Direction4> {
    points
        .windows(2)
        .filter_map(|w| Direction4::from_offset(w[1] - w[0]))
        .collect()
}

/// Reconstruct points from a start point and a chain code
///
/// The result has `chain.len() + 1` points.
pub fn from_chain_code(start: Point, chain: &[Direction4]) -> Vec<Point> {
    let mut points = Vec::with_capacity(chain.len() + 1);
    let mut current = start;
    points.push(current);
    for &dir in chain {
        current = current.moved(dir);
        points.push(current);
    }
    points
}
