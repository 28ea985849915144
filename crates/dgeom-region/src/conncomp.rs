//! Connected component analysis
//!
//! This module splits a pixel set into its maximal connected subsets under
//! a chosen connectivity. Components are grown breadth-first from their
//! lexicographically smallest pixel, so the output order is deterministic.

use std::collections::{BTreeSet, VecDeque};

use crate::adjacency::Connectivity;
use dgeom_core::{Domain, PixelSet, Point};

/// A connected component of a pixel set
#[derive(Debug, Clone)]
pub struct ConnectedComponent {
    /// Label of this component, counting from 1
    pub label: u32,
    /// Pixels of the component, over the domain of the source set
    pub pixels: PixelSet,
}

impl ConnectedComponent {
    /// Create a new connected component
    pub fn new(label: u32, pixels: PixelSet) -> Self {
        Self { label, pixels }
    }

    /// Number of pixels in this component
    #[inline]
    pub fn pixel_count(&self) -> usize {
        self.pixels.len()
    }

    /// Bounding box of the component pixels
    pub fn bounds(&self) -> Option<Domain> {
        self.pixels.bounding_box()
    }
}

/// Find all connected components of a pixel set
///
/// Every component keeps the domain of `set`, which later lets callers tell
/// whether it touches the frame of the source image. An empty set yields an
/// empty list.
///
/// # Arguments
///
/// * `set` - Foreground pixels
/// * `connectivity` - Foreground connectivity
pub fn find_connected_components(
    set: &PixelSet,
    connectivity: Connectivity,
) -> Vec<ConnectedComponent> {
    let mut unvisited: BTreeSet<Point> = set.iter().collect();
    let mut components = Vec::new();
    let mut queue = VecDeque::new();

    while let Some(seed) = unvisited.pop_first() {
        let mut members = BTreeSet::new();
        queue.push_back(seed);

        while let Some(p) = queue.pop_front() {
            members.insert(p);
            for q in connectivity.neighbors(p) {
                if unvisited.remove(&q) {
                    queue.push_back(q);
                }
            }
        }

        let label = components.len() as u32 + 1;
        components.push(ConnectedComponent::new(label, set.subset(members)));
    }

    components
}

/// Count the connected components of a pixel set
pub fn count_components(set: &PixelSet, connectivity: Connectivity) -> usize {
    find_connected_components(set, connectivity).len()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create_test_set(width: u32, height: u32, pixels: &[(i32, i32)]) -> PixelSet {
        let mut set = PixelSet::new(Domain::from_size(width, height).unwrap());
        for &(x, y) in pixels {
            set.insert(Point::new(x, y)).unwrap();
        }
        set
    }

    #[test]
    fn test_empty_set_has_no_components() {
        let set = create_test_set(5, 5, &[]);
        assert!(find_connected_components(&set, Connectivity::Four).is_empty());
    }

    #[test]
    fn test_diagonal_pair() {
        let set = create_test_set(5, 5, &[(1, 1), (2, 2)]);
        assert_eq!(count_components(&set, Connectivity::Four), 2);
        assert_eq!(count_components(&set, Connectivity::Eight), 1);
    }

    #[test]
    fn test_components_keep_domain_and_labels() {
        let set = create_test_set(10, 10, &[(0, 0), (1, 0), (5, 5), (5, 6), (6, 6)]);
        let comps = find_connected_components(&set, Connectivity::Four);
        assert_eq!(comps.len(), 2);
        assert_eq!(comps[0].label, 1);
        assert_eq!(comps[0].pixel_count(), 2);
        assert_eq!(comps[1].label, 2);
        assert_eq!(comps[1].pixel_count(), 3);
        assert_eq!(comps[1].pixels.domain(), set.domain());

        let b = comps[1].bounds().unwrap();
        assert_eq!(b.lower(), Point::new(5, 5));
        assert_eq!(b.upper(), Point::new(6, 6));
    }

    #[test]
    fn test_components_partition_the_set() {
        let set = create_test_set(
            8,
            8,
            &[(0, 0), (2, 0), (2, 1), (3, 3), (4, 4), (7, 7), (6, 7)],
        );
        for conn in [Connectivity::Four, Connectivity::Eight] {
            let comps = find_connected_components(&set, conn);
            let total: usize = comps.iter().map(|c| c.pixel_count()).sum();
            assert_eq!(total, set.len());
            for p in set.iter() {
                assert_eq!(comps.iter().filter(|c| c.pixels.contains(p)).count(), 1);
            }
        }
    }

    #[test]
    fn test_components_on_the_domain_edge() {
        // domain not anchored at the origin, pixels on its outer corners
        let domain = Domain::new(Point::new(-3, -2), Point::new(1, 2)).unwrap();
        let mut set = PixelSet::new(domain);
        for p in [Point::new(-3, -2), Point::new(1, 2), Point::new(1, 1)] {
            set.insert(p).unwrap();
        }

        let comps = find_connected_components(&set, Connectivity::Four);
        assert_eq!(comps.len(), 2);
        assert_eq!(
            comps[0].pixels.iter().collect::<Vec<_>>(),
            vec![Point::new(-3, -2)]
        );
        assert_eq!(
            comps[1].pixels.iter().collect::<Vec<_>>(),
            vec![Point::new(1, 1), Point::new(1, 2)]
        );
        assert!(comps.iter().all(|c| c.pixels.domain() == domain));
    }

    #[test]
    fn test_ring_is_one_component() {
        let mut pixels = Vec::new();
        for y in 1..6 {
            for x in 1..6 {
                if x == 1 || x == 5 || y == 1 || y == 5 {
                    pixels.push((x, y));
                }
            }
        }
        let set = create_test_set(7, 7, &pixels);
        assert_eq!(count_components(&set, Connectivity::Four), 1);
    }
}
