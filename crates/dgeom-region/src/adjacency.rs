//! Pixel adjacency
//!
//! A binary image is analysed with a pair of connectivities: one for the
//! foreground and the complementary one for the background. Mixing 4 and 8
//! this way is what keeps the digital Jordan curve theorem true on the
//! square grid.

use dgeom_core::Point;

/// Connectivity type for component analysis
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Connectivity {
    /// 4-way connectivity (up, down, left, right)
    #[default]
    Four,
    /// 8-way connectivity (includes diagonals)
    Eight,
}

/// Offsets of the 4 edge-adjacent neighbours
const NEIGHBORS_4: [(i32, i32); 4] = [(1, 0), (0, 1), (-1, 0), (0, -1)];

/// Offsets of the 8 edge- and corner-adjacent neighbours
const NEIGHBORS_8: [(i32, i32); 8] = [
    (1, 0),
    (1, 1),
    (0, 1),
    (-1, 1),
    (-1, 0),
    (-1, -1),
    (0, -1),
    (1, -1),
];

impl Connectivity {
    /// Neighbour offsets for this connectivity
    pub fn offsets(self) -> &'static [(i32, i32)] {
        match self {
            Connectivity::Four => &NEIGHBORS_4,
            Connectivity::Eight => &NEIGHBORS_8,
        }
    }

    /// Iterate over the neighbours of `p`
    pub fn neighbors(self, p: Point) -> impl Iterator<Item = Point> {
        self.offsets().iter().map(move |&(dx, dy)| p.offset(dx, dy))
    }

    /// Check whether two distinct points are adjacent
    pub fn are_adjacent(self, p: Point, q: Point) -> bool {
        let d = q - p;
        match self {
            Connectivity::Four => d.x.abs() + d.y.abs() == 1,
            Connectivity::Eight => p != q && d.x.abs() <= 1 && d.y.abs() <= 1,
        }
    }

    /// The other connectivity
    pub fn complement(self) -> Self {
        match self {
            Connectivity::Four => Connectivity::Eight,
            Connectivity::Eight => Connectivity::Four,
        }
    }
}

/// Foreground / background adjacency pair
///
/// Selects between the two boundary-following strategies of the tracer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AdjacencyRule {
    /// 4-connected foreground, 8-connected background
    #[default]
    FourEight,
    /// 8-connected foreground, 4-connected background
    EightFour,
}

impl AdjacencyRule {
    /// Build the rule whose foreground uses `connectivity`
    pub fn with_foreground(connectivity: Connectivity) -> Self {
        match connectivity {
            Connectivity::Four => AdjacencyRule::FourEight,
            Connectivity::Eight => AdjacencyRule::EightFour,
        }
    }

    /// Connectivity of object pixels
    pub fn foreground(self) -> Connectivity {
        match self {
            AdjacencyRule::FourEight => Connectivity::Four,
            AdjacencyRule::EightFour => Connectivity::Eight,
        }
    }

    /// Connectivity of background pixels
    pub fn background(self) -> Connectivity {
        self.foreground().complement()
    }
}
