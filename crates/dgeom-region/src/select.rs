//! Component selection
//!
//! Objects cut by the image frame have an artificial straight boundary
//! along the frame and distort shape statistics. These helpers drop them.

use crate::conncomp::ConnectedComponent;
use dgeom_core::{Domain, PixelSet};

/// Check if any pixel of `set` lies on the outermost rows or columns of
/// `domain`
pub fn touches_border(set: &PixelSet, domain: &Domain) -> bool {
    set.iter().any(|p| domain.is_on_border(p))
}

/// Keep only the components that do not touch the border of `domain`
pub fn select_interior(
    components: Vec<ConnectedComponent>,
    domain: &Domain,
) -> Vec<ConnectedComponent> {
    components
        .into_iter()
        .filter(|c| !touches_border(&c.pixels, domain))
        .collect()
}
