//! Convex hull regression test
//!
//! Run with:
//! ```
//! cargo test -p dgeom-geometry --test hull_reg
//! ```

use dgeom_core::Point;
use dgeom_geometry::{
    Disk, MelkmanHull, convex_hull, digitize, orientation, polygon_area, random_points,
};
use dgeom_region::{AdjacencyRule, TraceOptions, trace_boundary};
use dgeom_test::{RegParams, filled_rect};

#[test]
fn hull_reg() {
    let mut rp = RegParams::new("hull");
    let options = TraceOptions::default();

    // -----------------------------------------------------------
    // Hull of a square's boundary: its 4 corners
    // -----------------------------------------------------------
    let square = filled_rect(20, 20, 3, 3, 10, 10);
    let curve = trace_boundary(&square, AdjacencyRule::FourEight, &options).expect("square");
    let hull = MelkmanHull::from_polyline(curve.iter());
    let mut corners = hull.vertices();
    corners.sort();
    rp.compare_points(
        &[
            Point::new(3, 3),
            Point::new(3, 13),
            Point::new(13, 3),
            Point::new(13, 13),
        ],
        &corners,
    );
    rp.compare_values(40.0, hull.perimeter(), 0.0);
    rp.compare_values(100.0, hull.area(), 0.0);

    // -----------------------------------------------------------
    // Boundary of a digital disk: both algorithms agree
    // -----------------------------------------------------------
    let disk = digitize(&Disk::new(0.0, 0.0, 25.0), 1.0).expect("disk");
    let curve = trace_boundary(&disk, AdjacencyRule::FourEight, &options).expect("disk");
    let melkman = MelkmanHull::from_polyline(curve.iter());
    let mut online = melkman.vertices();
    let mut offline = convex_hull(curve.points());
    eprintln!("Disk boundary hull: {} vertices", online.len());
    rp.compare_values(offline.len() as f64, online.len() as f64, 0.0);
    rp.compare_values(polygon_area(&offline), melkman.area(), 0.0);
    online.sort();
    offline.sort();
    rp.compare_points(&offline, &online);

    // -----------------------------------------------------------
    // Random point set
    // -----------------------------------------------------------
    let points = random_points(500, 256, 42).expect("points");
    let hull = convex_hull(&points);
    eprintln!("Random hull: {} vertices", hull.len());
    let n = hull.len();
    let mut outside = 0;
    for &p in &points {
        if (0..n).any(|i| orientation(hull[i], hull[(i + 1) % n], p) < 0) {
            outside += 1;
        }
    }
    rp.compare_values(0.0, outside as f64, 0.0);
    let reflex = (0..n)
        .filter(|&i| orientation(hull[i], hull[(i + 1) % n], hull[(i + 2) % n]) <= 0)
        .count();
    rp.compare_values(0.0, reflex as f64, 0.0);

    // same seed, same points
    rp.compare_points(&points, &random_points(500, 256, 42).expect("points"));

    assert!(rp.cleanup(), "hull regression test failed");
}
