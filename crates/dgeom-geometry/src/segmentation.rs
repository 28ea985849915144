//! Greedy polygonal segmentation
//!
//! Splits a sequence of 4-connected points into consecutive digital
//! straight segments. Each segment is the longest hook-free DSS prefix
//! starting at its first point, and the next segment starts where the
//! previous one ends. Recognition is incremental, so the whole curve is
//! processed in time linear in its length (plus the backtracking over the
//! rejected tail of each maximal DSS).
//!
//! # Example
//!
//! ```
//! use dgeom_core::{Curve, Point};
//! use dgeom_geometry::segment;
//!
//! // boundary of a 2x1 block of pixels
//! let curve = Curve::new(vec![
//!     Point::new(0, 0),
//!     Point::new(1, 0),
//!     Point::new(2, 0),
//!     Point::new(2, 1),
//!     Point::new(1, 1),
//!     Point::new(0, 1),
//! ])
//! .unwrap();
//!
//! let segmentation = segment(&curve).unwrap();
//! assert_eq!(segmentation.len(), 3);
//! assert_eq!(segmentation.perimeter(), 6.0);
//! assert_eq!(segmentation.area(), 2.0);
//! ```

use crate::dss::DssState;
use crate::error::{GeometryError, GeometryResult};
use crate::metrics::{MetricOptions, ShapeMetrics, polygon_area, polygon_perimeter};
use dgeom_core::{Curve, Point};

/// A straight piece of a curve
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Segment {
    /// Index of the first covered point
    pub start_index: usize,
    /// Index of the last covered point
    pub end_index: usize,
    /// First covered point
    pub start: Point,
    /// Last covered point
    pub end: Point,
}

impl Segment {
    /// Number of covered points
    pub fn len(&self) -> usize {
        self.end_index - self.start_index + 1
    }

    /// A segment always covers at least two points
    pub fn is_empty(&self) -> bool {
        false
    }

    /// Euclidean length between the endpoints
    pub fn length(&self) -> f64 {
        self.start.distance(self.end)
    }
}

/// Ordered segments covering a curve
///
/// Consecutive segments share their boundary point. The polygon of the
/// segmentation is closed: its metrics include the edge from the last
/// endpoint back to the first.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Segmentation {
    segments: Vec<Segment>,
}

impl Segmentation {
    /// Get the segments
    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    /// Number of segments
    pub fn len(&self) -> usize {
        self.segments.len()
    }

    /// Check if there are no segments
    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    /// Iterate over the segments
    pub fn iter(&self) -> impl Iterator<Item = &Segment> {
        self.segments.iter()
    }

    /// Polygon vertices: every segment start, then the end of the last one
    pub fn vertices(&self) -> Vec<Point> {
        let mut vertices: Vec<Point> = self.segments.iter().map(|s| s.start).collect();
        if let Some(last) = self.segments.last() {
            vertices.push(last.end);
        }
        vertices
    }

    /// Polygonal perimeter including the closing edge
    pub fn perimeter(&self) -> f64 {
        polygon_perimeter(&self.vertices())
    }

    /// Polygonal area (shoelace formula over the vertices)
    pub fn area(&self) -> f64 {
        polygon_area(&self.vertices())
    }

    /// Circularity `4 * pi * area / perimeter^2`
    pub fn circularity(&self, options: &MetricOptions) -> f64 {
        self.metrics(options).circularity
    }

    /// Perimeter, area and circularity together
    pub fn metrics(&self, options: &MetricOptions) -> ShapeMetrics {
        ShapeMetrics::from_polygon(&self.vertices(), options)
    }
}

impl<'a> IntoIterator for &'a Segmentation {
    type Item = &'a Segment;
    type IntoIter = std::slice::Iter<'a, Segment>;

    fn into_iter(self) -> Self::IntoIter {
        self.segments.iter()
    }
}

/// Find the segment starting at `points[start]`
///
/// Extends the DSS as far as it goes and keeps the longest hook-free
/// prefix.
///
/// # Errors
///
/// Returns `InvalidInput` if `start` is not followed by a 4-neighbour.
pub fn longest_segment(points: &[Point], start: usize) -> GeometryResult<Segment> {
    let Some(&first) = points.get(start) else {
        return Err(GeometryError::InvalidInput(format!(
            "segment start {} out of bounds for {} points",
            start,
            points.len()
        )));
    };

    let mut dss = DssState::new(first);
    let mut end = start;
    for (j, &p) in points.iter().enumerate().skip(start + 1) {
        match dss.extended(p) {
            Some(next) => {
                dss = next;
                if dss.is_hook_free() {
                    end = j;
                }
            }
            None => break,
        }
    }

    if end == start {
        return Err(GeometryError::InvalidInput(format!(
            "points {} and {} are not 4-adjacent",
            start,
            start + 1
        )));
    }

    Ok(Segment {
        start_index: start,
        end_index: end,
        start: first,
        end: points[end],
    })
}

/// Segment an open sequence of 4-connected points
///
/// # Errors
///
/// Returns `InvalidInput` if there are fewer than 2 points or two
/// consecutive points are not 4-adjacent.
pub fn segment_points(points: &[Point]) -> GeometryResult<Segmentation> {
    if points.len() < 2 {
        return Err(GeometryError::InvalidInput(format!(
            "cannot segment {} point(s), at least 2 are needed",
            points.len()
        )));
    }

    let mut segments = Vec::new();
    let mut start = 0;
    while start + 1 < points.len() {
        let segment = longest_segment(points, start)?;
        start = segment.end_index;
        segments.push(segment);
    }

    Ok(Segmentation { segments })
}

/// Segment a traced curve greedily into digital straight segments
///
/// The curve points are covered in order from the first to the last; the
/// closing edge back to the first point is accounted for by the metrics.
///
/// # Errors
///
/// Returns `InvalidInput` if the curve has fewer than 2 points.
pub fn segment(curve: &Curve) -> GeometryResult<Segmentation> {
    let segmentation = segment_points(curve.points())?;
    tracing::debug!(
        points = curve.len(),
        segments = segmentation.len(),
        "segmented curve"
    );
    Ok(segmentation)
}

#[cfg(test)]
mod tests {
    use super::*;
    use dgeom_core::{Direction4, from_chain_code};

    fn rect_curve(w: usize, h: usize) -> Curve {
        let mut chain = Vec::new();
        chain.extend(std::iter::repeat_n(Direction4::East, w));
        chain.extend(std::iter::repeat_n(Direction4::North, h));
        chain.extend(std::iter::repeat_n(Direction4::West, w));
        chain.extend(std::iter::repeat_n(Direction4::South, h - 1));
        Curve::new(from_chain_code(Point::new(0, 0), &chain)).unwrap()
    }

    #[test]
    fn test_square_sides() {
        let seg = segment(&rect_curve(10, 10)).unwrap();
        assert_eq!(seg.len(), 4);
        let ends: Vec<Point> = seg.vertices();
        assert_eq!(
            ends,
            vec![
                Point::new(0, 0),
                Point::new(10, 0),
                Point::new(10, 10),
                Point::new(0, 10),
                Point::new(0, 1),
            ]
        );
        assert_eq!(seg.perimeter(), 40.0);
        assert_eq!(seg.area(), 100.0);
    }

    #[test]
    fn test_thin_rectangles() {
        for (w, h) in [(1, 1), (5, 1), (1, 5), (3, 7)] {
            let seg = segment(&rect_curve(w, h)).unwrap();
            assert_eq!(seg.perimeter(), 2.0 * (w + h) as f64, "{}x{}", w, h);
            assert_eq!(seg.area(), (w * h) as f64, "{}x{}", w, h);
        }
        assert_eq!(segment(&rect_curve(1, 1)).unwrap().len(), 3);
    }

    #[test]
    fn test_too_short() {
        let err = segment_points(&[Point::new(0, 0)]).unwrap_err();
        assert!(matches!(err, GeometryError::InvalidInput(_)));
        assert!(segment_points(&[]).is_err());
    }

    #[test]
    fn test_not_adjacent() {
        let err = segment_points(&[Point::new(0, 0), Point::new(2, 0)]).unwrap_err();
        assert!(matches!(err, GeometryError::InvalidInput(_)));
    }

    #[test]
    fn test_open_staircase() {
        let chain = [Direction4::East, Direction4::North].repeat(6);
        let points = from_chain_code(Point::new(0, 0), &chain);
        let seg = segment_points(&points).unwrap();
        assert_eq!(seg.len(), 1);
        assert_eq!(seg.segments()[0].len(), 13);
        assert_eq!(seg.segments()[0].end, Point::new(6, 6));
    }

    #[test]
    fn test_longest_segment_bounds() {
        let points = [Point::new(0, 0), Point::new(1, 0)];
        assert!(longest_segment(&points, 5).is_err());
        assert!(longest_segment(&points, 1).is_err());
        let s = longest_segment(&points, 0).unwrap();
        assert_eq!(s.length(), 1.0);
    }
}
