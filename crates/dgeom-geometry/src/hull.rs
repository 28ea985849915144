//! Convex hulls of grid points
//!
//! Two constructions are provided:
//!
//! - [`MelkmanHull`]: online hull of a simple polyline (e.g. a traced
//!   boundary), one point at a time with a deque.
//! - [`convex_hull`]: monotone chain hull of an arbitrary point set.
//!
//! Both use exact integer orientation tests and return vertices in
//! counter-clockwise order (y up) without collinear points.

use crate::error::{GeometryError, GeometryResult};
use crate::metrics::{polygon_area, polygon_perimeter};
use dgeom_core::Point;
use rand::SeedableRng;
use rand::distr::{Distribution, Uniform};
use rand::rngs::StdRng;
use std::collections::VecDeque;

/// Orientation of the triple `(a, b, c)`
///
/// Positive for a left turn, negative for a right turn, zero if collinear.
pub fn orientation(a: Point, b: Point, c: Point) -> i64 {
    (b - a).cross(c - a)
}

/// Incremental convex hull of a simple polyline (Melkman's algorithm)
///
/// The deque holds the current hull with the most recent hull vertex at
/// both ends. Points that arrive while all points so far are collinear are
/// kept aside until the first turn.
#[derive(Debug, Clone, Default)]
pub struct MelkmanHull {
    deque: VecDeque<Point>,
    collinear: Vec<Point>,
}

impl MelkmanHull {
    /// Create an empty hull
    pub fn new() -> Self {
        Self::default()
    }

    /// Build the hull of a whole polyline
    pub fn from_polyline<I>(points: I) -> Self
    where
        I: IntoIterator<Item = Point>,
    {
        let mut hull = Self::new();
        for p in points {
            hull.add(p);
        }
        hull
    }

    /// Add the next polyline point
    pub fn add(&mut self, p: Point) {
        if self.deque.is_empty() {
            self.add_collinear(p);
            return;
        }

        let n = self.deque.len();
        let outside_back = orientation(self.deque[n - 2], self.deque[n - 1], p) <= 0;
        let outside_front = orientation(self.deque[0], self.deque[1], p) <= 0;
        if !outside_back && !outside_front {
            return;
        }

        while self.deque.len() > 2 {
            let n = self.deque.len();
            if orientation(self.deque[n - 2], self.deque[n - 1], p) > 0 {
                break;
            }
            self.deque.pop_back();
        }
        self.deque.push_back(p);

        while self.deque.len() > 2 {
            if orientation(p, self.deque[0], self.deque[1]) > 0 {
                break;
            }
            self.deque.pop_front();
        }
        self.deque.push_front(p);
    }

    fn add_collinear(&mut self, p: Point) {
        if self.collinear.last() == Some(&p) {
            return;
        }
        let turn = match self.collinear.as_slice() {
            [a, b, ..] => orientation(*a, *b, p),
            _ => 0,
        };
        if turn == 0 {
            self.collinear.push(p);
            return;
        }

        // points on a line are ordered along it by their coordinates
        let (lo, hi) = extremes(&self.collinear);
        let (a, b) = if orientation(lo, hi, p) > 0 {
            (lo, hi)
        } else {
            (hi, lo)
        };
        self.deque = VecDeque::from(vec![p, a, b, p]);
        self.collinear.clear();
    }

    /// Hull vertices in counter-clockwise order
    pub fn vertices(&self) -> Vec<Point> {
        if self.deque.is_empty() {
            return match self.collinear.as_slice() {
                [] => Vec::new(),
                [p] => vec![*p],
                pts => {
                    let (lo, hi) = extremes(pts);
                    vec![lo, hi]
                }
            };
        }
        // a closed polyline can come back onto a hull edge
        let ring: Vec<Point> = self.deque.iter().skip(1).copied().collect();
        let n = ring.len();
        (0..n)
            .filter(|&i| orientation(ring[(i + n - 1) % n], ring[i], ring[(i + 1) % n]) != 0)
            .map(|i| ring[i])
            .collect()
    }

    /// Number of hull vertices
    pub fn len(&self) -> usize {
        self.vertices().len()
    }

    /// Check if no point has been added
    pub fn is_empty(&self) -> bool {
        self.deque.is_empty() && self.collinear.is_empty()
    }

    /// Perimeter of the hull polygon
    pub fn perimeter(&self) -> f64 {
        polygon_perimeter(&self.vertices())
    }

    /// Area of the hull polygon
    pub fn area(&self) -> f64 {
        polygon_area(&self.vertices())
    }
}

fn extremes(points: &[Point]) -> (Point, Point) {
    let lo = points.iter().copied().min().unwrap_or_default();
    let hi = points.iter().copied().max().unwrap_or_default();
    (lo, hi)
}

/// Convex hull of an arbitrary point set (Andrew's monotone chain)
///
/// Returns the hull vertices in counter-clockwise order starting from the
/// lexicographically smallest point. Duplicates are ignored; fewer than
/// three distinct points are returned as they are, sorted.
pub fn convex_hull(points: &[Point]) -> Vec<Point> {
    let mut sorted = points.to_vec();
    sorted.sort();
    sorted.dedup();
    if sorted.len() < 3 {
        return sorted;
    }

    let mut hull: Vec<Point> = Vec::with_capacity(2 * sorted.len());
    for &p in &sorted {
        while hull.len() > 1 && orientation(hull[hull.len() - 2], hull[hull.len() - 1], p) <= 0 {
            hull.pop();
        }
        hull.push(p);
    }
    hull.pop();
    let t = hull.len() + 1;
    for &p in sorted.iter().rev() {
        while hull.len() > t && orientation(hull[hull.len() - 2], hull[hull.len() - 1], p) <= 0 {
            hull.pop();
        }
        hull.push(p);
    }
    hull.pop();
    hull
}

/// Generate `count` points uniformly in `[0, extent) x [0, extent)`
///
/// The same seed always gives the same points.
///
/// # Errors
///
/// Returns `InvalidInput` if `extent` is not positive.
pub fn random_points(count: usize, extent: i32, seed: u64) -> GeometryResult<Vec<Point>> {
    let coord = Uniform::new(0, extent).map_err(|e| {
        GeometryError::InvalidInput(format!("cannot sample coordinates in [0, {}): {}", extent, e))
    })?;
    let mut rng = StdRng::seed_from_u64(seed);
    Ok((0..count)
        .map(|_| {
            let x = coord.sample(&mut rng);
            let y = coord.sample(&mut rng);
            Point::new(x, y)
        })
        .collect())
}
