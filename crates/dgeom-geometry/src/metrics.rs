//! Polygon metrics
//!
//! Perimeter, area and circularity of closed polygons given by their
//! vertices. The closing edge from the last vertex back to the first is
//! always included.

use dgeom_core::Point;

/// Options for shape metrics
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MetricOptions {
    /// Value of pi used by the circularity formula
    pub pi: f64,
}

impl Default for MetricOptions {
    fn default() -> Self {
        Self {
            pi: std::f64::consts::PI,
        }
    }
}

impl MetricOptions {
    /// Create default options
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the value of pi
    pub fn with_pi(mut self, pi: f64) -> Self {
        self.pi = pi;
        self
    }
}

/// Perimeter, area and circularity of one shape
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ShapeMetrics {
    /// Length of the closed polygon
    pub perimeter: f64,
    /// Enclosed area (shoelace formula)
    pub area: f64,
    /// `4 * pi * area / perimeter^2`, 0 for a degenerate polygon
    pub circularity: f64,
}

impl ShapeMetrics {
    /// Compute the metrics of the closed polygon through `vertices`
    pub fn from_polygon(vertices: &[Point], options: &MetricOptions) -> Self {
        let perimeter = polygon_perimeter(vertices);
        let area = polygon_area(vertices);
        Self {
            perimeter,
            area,
            circularity: circularity(area, perimeter, options),
        }
    }
}

/// Length of the closed polygon through `vertices`
pub fn polygon_perimeter(vertices: &[Point]) -> f64 {
    if vertices.len() < 2 {
        return 0.0;
    }
    let n = vertices.len();
    (0..n)
        .map(|i| vertices[i].distance(vertices[(i + 1) % n]))
        .sum()
}

/// Twice the signed area of the closed polygon through `vertices`
///
/// Positive for counter-clockwise polygons (y up).
pub fn signed_double_area(vertices: &[Point]) -> i64 {
    let n = vertices.len();
    (0..n)
        .map(|i| vertices[i].cross(vertices[(i + 1) % n]))
        .sum()
}

/// Area of the closed polygon through `vertices` (shoelace formula)
pub fn polygon_area(vertices: &[Point]) -> f64 {
    signed_double_area(vertices).abs() as f64 / 2.0
}

/// Circularity `4 * pi * area / perimeter^2`
///
/// A degenerate shape with zero perimeter has circularity 0.
pub fn circularity(area: f64, perimeter: f64, options: &MetricOptions) -> f64 {
    if perimeter <= 0.0 {
        return 0.0;
    }
    4.0 * options.pi * area / (perimeter * perimeter)
}
