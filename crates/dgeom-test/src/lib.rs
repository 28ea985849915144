//! dgeom-test - Regression test framework for dgeom
//!
//! This crate provides a small regression test framework: numbered value,
//! point-sequence and string comparisons that are all reported at the end
//! of a test instead of stopping at the first mismatch.
//!
//! # Usage
//!
//! ```ignore
//! use dgeom_test::RegParams;
//!
//! let mut rp = RegParams::new("tracer");
//! rp.compare_values(40.0, curve.len() as f64, 0.0);
//! assert!(rp.cleanup());
//! ```
//!
//! # Environment Variables
//!
//! - `REGTEST_MODE`: Set to "compare" (default) or "display"; display mode
//!   also writes test outputs under `tests/regout`

mod error;
mod params;

pub use error::{TestError, TestResult};
pub use params::{RegParams, RegTestMode};

use dgeom_core::{Domain, PixelSet, Point};

/// Get the path to the workspace root
fn workspace_root() -> String {
    let manifest_dir = env!("CARGO_MANIFEST_DIR");
    // dgeom-test is at crates/dgeom-test, so go up two directories
    format!("{}/../..", manifest_dir)
}

/// Get the path to the regout (regression output) directory
pub fn regout_dir() -> String {
    format!("{}/tests/regout", workspace_root())
}

/// Build a pixel set over a `width x height` domain from ASCII art
///
/// Rows are listed top to bottom, so the last row is `y = 0`. `#` marks a
/// foreground pixel, anything else is background.
///
/// # Panics
///
/// Panics if the art does not fit in the domain.
pub fn pixel_set_from_art(width: u32, height: u32, rows: &[&str]) -> PixelSet {
    let domain = Domain::from_size(width, height).expect("positive test domain");
    let mut set = PixelSet::new(domain);
    let top = rows.len() as i32 - 1;
    for (i, row) in rows.iter().enumerate() {
        for (x, c) in row.chars().enumerate() {
            if c == '#' {
                set.insert(Point::new(x as i32, top - i as i32))
                    .expect("art fits the domain");
            }
        }
    }
    set
}

/// Build a pixel set holding a filled `w x h` rectangle with lower corner
/// `(x0, y0)` inside a `width x height` domain
///
/// # Panics
///
/// Panics if the rectangle does not fit in the domain.
pub fn filled_rect(width: u32, height: u32, x0: i32, y0: i32, w: i32, h: i32) -> PixelSet {
    let domain = Domain::from_size(width, height).expect("positive test domain");
    let mut set = PixelSet::new(domain);
    for y in y0..y0 + h {
        for x in x0..x0 + w {
            set.insert(Point::new(x, y)).expect("rectangle fits the domain");
        }
    }
    set
}

/// Build a pixel set holding the pixels of a digital disk, i.e. the grid
/// points within `radius` of `(cx, cy)`, inside a `width x height` domain
///
/// # Panics
///
/// Panics if the disk does not fit in the domain.
pub fn filled_disk(width: u32, height: u32, cx: i32, cy: i32, radius: i32) -> PixelSet {
    let domain = Domain::from_size(width, height).expect("positive test domain");
    let mut set = PixelSet::new(domain);
    let r2 = radius as i64 * radius as i64;
    for y in cy - radius..=cy + radius {
        for x in cx - radius..=cx + radius {
            let p = Point::new(x, y);
            if p.squared_distance(Point::new(cx, cy)) <= r2 {
                set.insert(p).expect("disk fits the domain");
            }
        }
    }
    set
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pixel_set_from_art() {
        let set = pixel_set_from_art(4, 3, &["#...", ".##.", "...#"]);
        assert_eq!(set.len(), 4);
        assert!(set.contains(Point::new(0, 2)));
        assert!(set.contains(Point::new(1, 1)));
        assert!(set.contains(Point::new(3, 0)));
    }

    #[test]
    fn test_filled_shapes() {
        assert_eq!(filled_rect(10, 10, 1, 2, 3, 4).len(), 12);
        let disk = filled_disk(11, 11, 5, 5, 1);
        assert_eq!(disk.len(), 5);
    }
}
