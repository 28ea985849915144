//! Arithmetical digital straight segments
//!
//! A standard digital straight segment (DSS) is a 4-connected run of grid
//! points `(x, y)` satisfying
//!
//! ```text
//! mu <= a*x - b*y < mu + omega,    omega = |a| + |b|
//! ```
//!
//! for a primitive direction vector `(b, a)`. `DssState` is recognized
//! incrementally: adding a point costs O(1) and updates the characteristics
//! from the leaning points (the points on the two bounding lines `r = mu`
//! and `r = mu + omega - 1`).

use dgeom_core::{Direction4, Point};

/// Recognition state of a standard digital straight segment
///
/// The state is a plain value; [`DssState::extended`] returns a new state
/// instead of mutating, so a caller can keep the last accepted state while
/// probing further points.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DssState {
    a: i64,
    b: i64,
    mu: i64,
    omega: i64,
    first: Point,
    last: Point,
    upper_first: Point,
    upper_last: Point,
    lower_first: Point,
    lower_last: Point,
    steps: [usize; 4],
    first_step: Option<Direction4>,
    last_step: Option<Direction4>,
}

impl DssState {
    /// Create the one-point segment `{p}`
    pub fn new(p: Point) -> Self {
        Self {
            a: 0,
            b: 1,
            mu: -(p.y as i64),
            omega: 1,
            first: p,
            last: p,
            upper_first: p,
            upper_last: p,
            lower_first: p,
            lower_last: p,
            steps: [0; 4],
            first_step: None,
            last_step: None,
        }
    }

    /// `a` coefficient (y component of the direction)
    pub fn a(&self) -> i64 {
        self.a
    }

    /// `b` coefficient (x component of the direction)
    pub fn b(&self) -> i64 {
        self.b
    }

    /// Lower bound of the remainder
    pub fn mu(&self) -> i64 {
        self.mu
    }

    /// Arithmetical thickness, `|a| + |b|`
    pub fn omega(&self) -> i64 {
        self.omega
    }

    /// First point of the segment
    pub fn first(&self) -> Point {
        self.first
    }

    /// Last point of the segment
    pub fn last(&self) -> Point {
        self.last
    }

    /// Direction vector `(b, a)`
    pub fn direction(&self) -> Point {
        Point::new(self.b as i32, self.a as i32)
    }

    /// First and last upper leaning points (`r = mu`)
    pub fn upper_leaning(&self) -> (Point, Point) {
        (self.upper_first, self.upper_last)
    }

    /// First and last lower leaning points (`r = mu + omega - 1`)
    pub fn lower_leaning(&self) -> (Point, Point) {
        (self.lower_first, self.lower_last)
    }

    /// Number of points in the segment
    pub fn len(&self) -> usize {
        self.steps.iter().sum::<usize>() + 1
    }

    /// A DSS always holds at least one point
    pub fn is_empty(&self) -> bool {
        false
    }

    /// Number of steps taken in direction `dir`
    pub fn step_count(&self, dir: Direction4) -> usize {
        self.steps[dir.code() as usize]
    }

    /// Remainder `a*x - b*y` of `p`
    pub fn remainder(&self, p: Point) -> i64 {
        self.a * p.x as i64 - self.b * p.y as i64
    }

    /// Check if `p` lies within the arithmetical bounds of the segment's line
    pub fn contains(&self, p: Point) -> bool {
        let r = self.remainder(p);
        self.mu <= r && r < self.mu + self.omega
    }

    /// Check that the segment has no one-step hook at either end
    ///
    /// A segment mixing two step directions is hook-free when neither its
    /// first nor its last step is the only step of its direction. Segments
    /// with a single step direction are always hook-free.
    pub fn is_hook_free(&self) -> bool {
        let kinds = self.steps.iter().filter(|&&n| n > 0).count();
        match (self.first_step, self.last_step) {
            (Some(first), Some(last)) if kinds == 2 => {
                self.step_count(first) > 1 && self.step_count(last) > 1
            }
            _ => true,
        }
    }

    fn set_direction(&mut self, v: Point) {
        self.b = v.x as i64;
        self.a = v.y as i64;
        self.omega = self.a.abs() + self.b.abs();
    }

    /// Try to add `p` after the last point
    ///
    /// Returns the extended state if the points still form a standard DSS,
    /// or `None` if `p` is not a 4-neighbour of the last point, introduces a
    /// step opposite to one already taken, or falls outside the bounds by
    /// more than one.
    pub fn extended(self, p: Point) -> Option<Self> {
        let step = Direction4::from_offset(p - self.last)?;

        let mut steps = self.steps;
        steps[step.code() as usize] += 1;
        if Direction4::ALL
            .iter()
            .any(|&d| steps[d.code() as usize] > 0 && steps[d.opposite().code() as usize] > 0)
        {
            return None;
        }

        let mut next = self;
        next.last = p;
        next.steps = steps;
        next.last_step = Some(step);

        if self.first == self.last {
            next.set_direction(p - self.first);
            next.mu = next.remainder(self.first);
            next.upper_first = self.first;
            next.lower_first = self.first;
            next.upper_last = p;
            next.lower_last = p;
            next.first_step = Some(step);
            return Some(next);
        }

        let r = self.remainder(p);
        if self.mu <= r && r < self.mu + self.omega {
            if r == self.mu {
                next.upper_last = p;
            }
            if r == self.mu + self.omega - 1 {
                next.lower_last = p;
            }
        } else if r == self.mu - 1 {
            // new upper leaning point, slope turns towards it
            next.lower_first = self.lower_last;
            next.upper_last = p;
            next.set_direction(p - self.upper_first);
            next.mu = next.remainder(p);
        } else if r == self.mu + self.omega {
            next.upper_first = self.upper_last;
            next.lower_last = p;
            next.set_direction(p - self.lower_first);
            next.mu = next.remainder(next.upper_first);
        } else {
            return None;
        }

        Some(next)
    }
}

/// Check if `points` form a single standard digital straight segment
///
/// An empty slice is not a segment; a single point is.
pub fn is_straight(points: &[Point]) -> bool {
    let Some((&first, rest)) = points.split_first() else {
        return false;
    };
    rest.iter()
        .try_fold(DssState::new(first), |dss, &p| dss.extended(p))
        .is_some()
}
