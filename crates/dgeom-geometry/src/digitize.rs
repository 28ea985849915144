//! Gauss digitization of analytic shapes
//!
//! The Gauss digitization of a shape `X` at grid step `h` is the set of
//! integer points `(i, j)` such that `(i * h, j * h)` lies in `X`. It turns
//! an ideal shape into a pixel set whose boundary can be traced and
//! measured, e.g. to check that the measured circularity of a disk tends
//! to 1 as the grid gets finer.

use crate::error::{GeometryError, GeometryResult};
use dgeom_core::{Domain, PixelSet, Point};

/// Axis-aligned bounds of a shape in continuous coordinates
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bounds {
    /// Smallest x
    pub min_x: f64,
    /// Smallest y
    pub min_y: f64,
    /// Largest x
    pub max_x: f64,
    /// Largest y
    pub max_y: f64,
}

/// A region of the continuous plane
pub trait Shape {
    /// Check if the point `(x, y)` lies in the shape (boundary included)
    fn contains(&self, x: f64, y: f64) -> bool;

    /// Bounds enclosing the whole shape
    fn bounds(&self) -> Bounds;
}

/// Closed disk
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Disk {
    /// Center x
    pub cx: f64,
    /// Center y
    pub cy: f64,
    /// Radius
    pub radius: f64,
}

impl Disk {
    /// Create a disk of `radius` centered at `(cx, cy)`
    pub fn new(cx: f64, cy: f64, radius: f64) -> Self {
        Self { cx, cy, radius }
    }
}

impl Shape for Disk {
    fn contains(&self, x: f64, y: f64) -> bool {
        let (dx, dy) = (x - self.cx, y - self.cy);
        dx * dx + dy * dy <= self.radius * self.radius
    }

    fn bounds(&self) -> Bounds {
        Bounds {
            min_x: self.cx - self.radius,
            min_y: self.cy - self.radius,
            max_x: self.cx + self.radius,
            max_y: self.cy + self.radius,
        }
    }
}

/// Closed ellipse with semi-axes `a` and `b`, rotated by `angle` radians
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ellipse {
    /// Center x
    pub cx: f64,
    /// Center y
    pub cy: f64,
    /// Semi-axis along the rotated x direction
    pub a: f64,
    /// Semi-axis along the rotated y direction
    pub b: f64,
    /// Counter-clockwise rotation in radians
    pub angle: f64,
}

impl Ellipse {
    /// Create an ellipse centered at `(cx, cy)`
    pub fn new(cx: f64, cy: f64, a: f64, b: f64, angle: f64) -> Self {
        Self {
            cx,
            cy,
            a,
            b,
            angle,
        }
    }
}

impl Shape for Ellipse {
    fn contains(&self, x: f64, y: f64) -> bool {
        let (sin, cos) = self.angle.sin_cos();
        let (dx, dy) = (x - self.cx, y - self.cy);
        let u = dx * cos + dy * sin;
        let v = -dx * sin + dy * cos;
        (u / self.a).powi(2) + (v / self.b).powi(2) <= 1.0
    }

    fn bounds(&self) -> Bounds {
        let (sin, cos) = self.angle.sin_cos();
        let half_w = ((self.a * cos).powi(2) + (self.b * sin).powi(2)).sqrt();
        let half_h = ((self.a * sin).powi(2) + (self.b * cos).powi(2)).sqrt();
        Bounds {
            min_x: self.cx - half_w,
            min_y: self.cy - half_h,
            max_x: self.cx + half_w,
            max_y: self.cy + half_h,
        }
    }
}

/// Star-shaped flower: radius `radius + varying * cos(petals * (t - phase))`
/// at polar angle `t`
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Flower {
    /// Center x
    pub cx: f64,
    /// Center y
    pub cy: f64,
    /// Mean radius
    pub radius: f64,
    /// Amplitude of the radius variation
    pub varying: f64,
    /// Number of petals
    pub petals: u32,
    /// Polar angle of the first petal tip
    pub phase: f64,
}

impl Flower {
    /// Create a flower centered at `(cx, cy)`
    pub fn new(cx: f64, cy: f64, radius: f64, varying: f64, petals: u32, phase: f64) -> Self {
        Self {
            cx,
            cy,
            radius,
            varying,
            petals,
            phase,
        }
    }
}

impl Shape for Flower {
    fn contains(&self, x: f64, y: f64) -> bool {
        let (dx, dy) = (x - self.cx, y - self.cy);
        let t = dy.atan2(dx);
        let rho = self.radius + self.varying * (self.petals as f64 * (t - self.phase)).cos();
        dx.hypot(dy) <= rho
    }

    fn bounds(&self) -> Bounds {
        let r = self.radius + self.varying.abs();
        Bounds {
            min_x: self.cx - r,
            min_y: self.cy - r,
            max_x: self.cx + r,
            max_y: self.cy + r,
        }
    }
}

/// Closed convex polygon with counter-clockwise vertices
#[derive(Debug, Clone, PartialEq)]
pub struct ConvexPolygon {
    vertices: Vec<(f64, f64)>,
}

impl ConvexPolygon {
    /// Create a convex polygon
    ///
    /// # Errors
    ///
    /// Returns `InvalidInput` if there are fewer than 3 vertices or the
    /// vertices do not turn left at every corner.
    pub fn new(vertices: Vec<(f64, f64)>) -> GeometryResult<Self> {
        let n = vertices.len();
        if n < 3 {
            return Err(GeometryError::InvalidInput(format!(
                "a polygon needs at least 3 vertices, got {}",
                n
            )));
        }
        for i in 0..n {
            if cross(vertices[i], vertices[(i + 1) % n], vertices[(i + 2) % n]) <= 0.0 {
                return Err(GeometryError::InvalidInput(format!(
                    "polygon is not convex counter-clockwise at vertex {}",
                    (i + 1) % n
                )));
            }
        }
        Ok(Self { vertices })
    }

    /// Vertices in counter-clockwise order
    pub fn vertices(&self) -> &[(f64, f64)] {
        &self.vertices
    }
}

fn cross(a: (f64, f64), b: (f64, f64), c: (f64, f64)) -> f64 {
    (b.0 - a.0) * (c.1 - a.1) - (b.1 - a.1) * (c.0 - a.0)
}

impl Shape for ConvexPolygon {
    fn contains(&self, x: f64, y: f64) -> bool {
        let n = self.vertices.len();
        (0..n).all(|i| cross(self.vertices[i], self.vertices[(i + 1) % n], (x, y)) >= 0.0)
    }

    fn bounds(&self) -> Bounds {
        let init = Bounds {
            min_x: f64::INFINITY,
            min_y: f64::INFINITY,
            max_x: f64::NEG_INFINITY,
            max_y: f64::NEG_INFINITY,
        };
        self.vertices.iter().fold(init, |b, &(x, y)| Bounds {
            min_x: b.min_x.min(x),
            min_y: b.min_y.min(y),
            max_x: b.max_x.max(x),
            max_y: b.max_y.max(y),
        })
    }
}

fn grid_index(v: f64) -> GeometryResult<i32> {
    if v.is_finite() && v >= i32::MIN as f64 && v <= i32::MAX as f64 {
        Ok(v as i32)
    } else {
        Err(GeometryError::InvalidInput(format!(
            "grid index {} does not fit the integer grid",
            v
        )))
    }
}

/// Gauss digitization of `shape` at grid step `step`
///
/// The pixel set's domain is the range of grid indices covered by the
/// shape's bounds.
///
/// # Errors
///
/// Returns `InvalidInput` if `step` is not a positive finite number, or if
/// the bounds do not enclose any grid point or exceed the integer grid.
pub fn digitize<S: Shape + ?Sized>(shape: &S, step: f64) -> GeometryResult<PixelSet> {
    if !(step.is_finite() && step > 0.0) {
        return Err(GeometryError::InvalidInput(format!(
            "grid step must be positive, got {}",
            step
        )));
    }

    let bounds = shape.bounds();
    let lower = Point::new(
        grid_index((bounds.min_x / step).ceil())?,
        grid_index((bounds.min_y / step).ceil())?,
    );
    let upper = Point::new(
        grid_index((bounds.max_x / step).floor())?,
        grid_index((bounds.max_y / step).floor())?,
    );
    if lower.x > upper.x || lower.y > upper.y {
        return Err(GeometryError::InvalidInput(
            "shape bounds enclose no grid point".to_string(),
        ));
    }

    let domain = Domain::new(lower, upper)?;
    let mut set = PixelSet::new(domain);
    for p in domain.iter() {
        if shape.contains(p.x as f64 * step, p.y as f64 * step) {
            set.insert(p)?;
        }
    }

    tracing::debug!(pixels = set.len(), step, "digitized shape");
    Ok(set)
}
