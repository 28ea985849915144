//! Boundary tracing for pixel sets
//!
//! The boundary of a pixel set is followed along the cracks between
//! foreground and background pixels. The moving cursor is a
//! [`BoundaryCell`]: one edge of a foreground pixel whose neighbour across
//! that edge is background. Cells are walked keeping the foreground on the
//! left, which is counter-clockwise with the y axis pointing up (clockwise
//! on a raster whose rows grow downward). For every cell the corner where
//! the walk enters it is emitted, so the resulting [`Curve`] has one point
//! per boundary edge.
//!
//! At each corner the next cell depends on the two pixels in front of the
//! cursor, and on the [`AdjacencyRule`] when only the diagonal one is
//! foreground:
//!
//! ```text
//!   diagonal | out          (walking to the right, foreground below)
//!   ---------+-----
//!   ahead    | pixel
//! ```

use crate::adjacency::{AdjacencyRule, Connectivity};
use crate::error::{RegionError, RegionResult};
use dgeom_core::{Curve, Direction4, PixelSet, Point};

/// Default seed search budget, in examined cells
pub const DEFAULT_SEARCH_BUDGET: usize = 100_000;

/// Options for boundary tracing
#[derive(Debug, Clone)]
pub struct TraceOptions {
    /// Maximum number of cells examined while looking for a seed cell
    pub search_budget: usize,
}

impl Default for TraceOptions {
    fn default() -> Self {
        Self {
            search_budget: DEFAULT_SEARCH_BUDGET,
        }
    }
}

impl TraceOptions {
    /// Create new options with the default budget
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the seed search budget
    pub fn with_search_budget(mut self, budget: usize) -> Self {
        self.search_budget = budget;
        self
    }
}

/// Oriented edge between a foreground pixel and a background pixel
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct BoundaryCell {
    /// Foreground pixel owning the edge
    pub pixel: Point,
    /// Side of `pixel` the edge lies on; the pixel across it is background
    pub normal: Direction4,
}

impl BoundaryCell {
    /// Create a new boundary cell
    #[inline]
    pub fn new(pixel: Point, normal: Direction4) -> Self {
        Self { pixel, normal }
    }

    /// Direction of travel along the edge
    #[inline]
    pub fn tangent(&self) -> Direction4 {
        self.normal.turn_left()
    }

    /// Corner where the walk enters this edge
    #[inline]
    pub fn tail(&self) -> Point {
        let n = self.normal.offset();
        let t = self.tangent().offset();
        let corner = n - t + Point::new(1, 1);
        self.pixel.offset(corner.x / 2, corner.y / 2)
    }

    /// Corner where the walk leaves this edge
    #[inline]
    pub fn head(&self) -> Point {
        self.tail().moved(self.tangent())
    }

    /// Check that the edge separates `set` from its complement
    pub fn is_boundary_of(&self, set: &PixelSet) -> bool {
        set.contains(self.pixel) && !set.contains(self.pixel.moved(self.normal))
    }
}

/// Find a boundary cell of a pixel set
///
/// Scans the bounding box of the set in raster order from its lower corner.
/// The first foreground pixel met has no foreground pixel below it, so its
/// lower edge is a boundary cell.
///
/// # Errors
///
/// Returns [`RegionError::InvalidInput`] for an empty set, and
/// [`RegionError::BoundaryNotFound`] if more than
/// `options.search_budget` cells would have to be examined.
pub fn find_boundary_cell(set: &PixelSet, options: &TraceOptions) -> RegionResult<BoundaryCell> {
    let bounds = set
        .bounding_box()
        .ok_or_else(|| RegionError::InvalidInput("cannot trace an empty pixel set".to_string()))?;

    for (examined, p) in bounds.iter().enumerate() {
        if examined >= options.search_budget {
            break;
        }
        if set.contains(p) {
            return Ok(BoundaryCell::new(p, Direction4::South));
        }
    }

    Err(RegionError::BoundaryNotFound {
        budget: options.search_budget,
    })
}

/// Next boundary cell around the head corner of `cell`
fn next_cell(set: &PixelSet, rule: AdjacencyRule, cell: BoundaryCell) -> BoundaryCell {
    let t = cell.tangent();
    let ahead = cell.pixel.moved(t);
    let diagonal = ahead.moved(cell.normal);

    let turn_out = BoundaryCell::new(diagonal, t.opposite());
    let straight = BoundaryCell::new(ahead, cell.normal);
    let turn_in = BoundaryCell::new(cell.pixel, t);

    match rule.foreground() {
        Connectivity::Eight => {
            if set.contains(diagonal) {
                turn_out
            } else if set.contains(ahead) {
                straight
            } else {
                turn_in
            }
        }
        Connectivity::Four => {
            if !set.contains(ahead) {
                turn_in
            } else if set.contains(diagonal) {
                turn_out
            } else {
                straight
            }
        }
    }
}

/// Trace the boundary through a given seed cell
///
/// Returns the closed curve of corner points, starting at the tail of
/// `seed`. Under [`AdjacencyRule::EightFour`] a corner shared by two
/// diagonal pixels is visited once per side.
///
/// # Arguments
///
/// * `set` - Pixels of one connected object
/// * `rule` - Foreground/background adjacency
/// * `seed` - A boundary cell of `set`
///
/// # Errors
///
/// Returns [`RegionError::InvalidInput`] if `set` is empty or `seed` is not a
/// boundary cell of `set`.
pub fn trace(set: &PixelSet, rule: AdjacencyRule, seed: BoundaryCell) -> RegionResult<Curve> {
    if set.is_empty() {
        return Err(RegionError::InvalidInput(
            "cannot trace an empty pixel set".to_string(),
        ));
    }
    if !seed.is_boundary_of(set) {
        return Err(RegionError::InvalidInput(format!(
            "seed edge {:?} of pixel ({}, {}) is not on the boundary",
            seed.normal, seed.pixel.x, seed.pixel.y
        )));
    }

    // Each pixel owns at most 4 boundary edges
    let max_steps = 4 * set.len();
    let mut points = Vec::new();
    let mut cell = seed;
    loop {
        points.push(cell.tail());
        cell = next_cell(set, rule, cell);
        if cell == seed {
            break;
        }
        if points.len() > max_steps {
            return Err(RegionError::InvalidInput(
                "boundary walk does not close".to_string(),
            ));
        }
    }

    Ok(Curve::new_unchecked(points))
}

/// Find a seed cell and trace the boundary through it
///
/// # Errors
///
/// See [`find_boundary_cell`] and [`trace`].
pub fn trace_boundary(
    set: &PixelSet,
    rule: AdjacencyRule,
    options: &TraceOptions,
) -> RegionResult<Curve> {
    let seed = find_boundary_cell(set, options)?;
    let curve = trace(set, rule, seed)?;
    tracing::debug!(
        pixels = set.len(),
        points = curve.len(),
        ?rule,
        "traced boundary"
    );
    Ok(curve)
}
