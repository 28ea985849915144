//! Point, Direction4 - Integer grid points and unit steps
//!
//! Points live on the integer lattice. The y axis points up: a pixel
//! `(x, y)` covers the unit square `[x, x + 1] x [y, y + 1]` and its lower
//! left corner is the grid point with the same coordinates.

use std::ops::{Add, Neg, Sub};

/// An integer 2-vector
///
/// Ordering is lexicographic on `(x, y)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Point {
    /// X coordinate
    pub x: i32,
    /// Y coordinate
    pub y: i32,
}

impl Point {
    /// Create a new point
    #[inline]
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Move one unit step in the given direction
    #[inline]
    pub fn moved(self, dir: Direction4) -> Self {
        self + dir.offset()
    }

    /// Add offset to create new point
    #[inline]
    pub fn offset(self, dx: i32, dy: i32) -> Self {
        Self {
            x: self.x + dx,
            y: self.y + dy,
        }
    }

    /// Z component of the cross product, computed in `i64`
    #[inline]
    pub fn cross(self, other: Point) -> i64 {
        self.x as i64 * other.y as i64 - self.y as i64 * other.x as i64
    }

    /// Dot product, computed in `i64`
    #[inline]
    pub fn dot(self, other: Point) -> i64 {
        self.x as i64 * other.x as i64 + self.y as i64 * other.y as i64
    }

    /// Squared Euclidean distance to another point
    #[inline]
    pub fn squared_distance(self, other: Point) -> i64 {
        let d = other - self;
        d.dot(d)
    }

    /// Euclidean distance to another point
    #[inline]
    pub fn distance(self, other: Point) -> f64 {
        (self.squared_distance(other) as f64).sqrt()
    }
}

impl Add for Point {
    type Output = Point;

    #[inline]
    fn add(self, rhs: Point) -> Point {
        Point::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl Sub for Point {
    type Output = Point;

    #[inline]
    fn sub(self, rhs: Point) -> Point {
        Point::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl Neg for Point {
    type Output = Point;

    #[inline]
    fn neg(self) -> Point {
        Point::new(-self.x, -self.y)
    }
}

impl From<(i32, i32)> for Point {
    fn from((x, y): (i32, i32)) -> Self {
        Self::new(x, y)
    }
}

/// Axis-aligned unit step, numbered as Freeman 4-codes
///
/// Counter-clockwise from East.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Direction4 {
    /// (1, 0)
    East = 0,
    /// (0, 1)
    North = 1,
    /// (-1, 0)
    West = 2,
    /// (0, -1)
    South = 3,
}

/// X offset for each direction
const XPOSTAB: [i32; 4] = [1, 0, -1, 0];

/// Y offset for each direction
const YPOSTAB: [i32; 4] = [0, 1, 0, -1];

impl Direction4 {
    /// All directions in Freeman code order
    pub const ALL: [Direction4; 4] = [
        Direction4::East,
        Direction4::North,
        Direction4::West,
        Direction4::South,
    ];

    /// Get the x offset for this direction
    #[inline]
    pub fn dx(self) -> i32 {
        XPOSTAB[self as usize]
    }

    /// Get the y offset for this direction
    #[inline]
    pub fn dy(self) -> i32 {
        YPOSTAB[self as usize]
    }

    /// Offset vector of this direction
    #[inline]
    pub fn offset(self) -> Point {
        Point::new(self.dx(), self.dy())
    }

    /// Freeman code (0..4)
    #[inline]
    pub fn code(self) -> u8 {
        self as u8
    }

    /// Direction from a Freeman code, wrapping modulo 4
    #[inline]
    pub fn from_code(code: u8) -> Self {
        Self::ALL[(code % 4) as usize]
    }

    /// Direction of a unit step, `None` unless `step` is one of the four
    /// axis-aligned unit vectors
    pub fn from_offset(step: Point) -> Option<Self> {
        match (step.x, step.y) {
            (1, 0) => Some(Direction4::East),
            (0, 1) => Some(Direction4::North),
            (-1, 0) => Some(Direction4::West),
            (0, -1) => Some(Direction4::South),
            _ => None,
        }
    }

    /// Quarter turn counter-clockwise
    #[inline]
    pub fn turn_left(self) -> Self {
        Self::from_code(self.code() + 1)
    }

    /// Quarter turn clockwise
    #[inline]
    pub fn turn_right(self) -> Self {
        Self::from_code(self.code() + 3)
    }

    /// Opposite direction
    #[inline]
    pub fn opposite(self) -> Self {
        Self::from_code(self.code() + 2)
    }
}
