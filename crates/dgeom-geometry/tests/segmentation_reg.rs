//! Polygonal segmentation regression test
//!
//! Checks the cover and maximality laws of the greedy segmentation on
//! traced boundaries of squares, rectangles and digitized shapes.
//!
//! Run with:
//! ```
//! cargo test -p dgeom-geometry --test segmentation_reg
//! ```

use dgeom_core::Curve;
use dgeom_geometry::{
    Disk, DssState, Ellipse, Flower, GeometryError, Segmentation, digitize, is_straight, segment,
    segment_points,
};
use dgeom_region::{AdjacencyRule, TraceOptions, trace_boundary};
use dgeom_test::{RegParams, filled_rect};

/// Consecutive segments share endpoints and together cover every point
fn check_cover(rp: &mut RegParams, curve: &Curve, segmentation: &Segmentation) {
    let segments = segmentation.segments();
    rp.compare_values(0.0, segments[0].start_index as f64, 0.0);
    rp.compare_values(
        (curve.len() - 1) as f64,
        segments[segments.len() - 1].end_index as f64,
        0.0,
    );

    let mut rebuilt = vec![curve.points()[0]];
    for s in segments {
        let piece = curve.range(s.start_index, s.end_index).expect("segment range");
        assert_eq!(piece[0], *rebuilt.last().expect("non-empty"));
        assert!(is_straight(piece), "segment {:?} is not straight", s);
        rebuilt.extend_from_slice(&piece[1..]);
    }
    rp.compare_points(curve.points(), &rebuilt);
}

/// No segment but the last can take the next point and stay hook-free
fn check_maximality(curve: &Curve, segmentation: &Segmentation) -> usize {
    let segments = segmentation.segments();
    let mut violations = 0;
    for s in &segments[..segments.len() - 1] {
        let points = curve.range(s.start_index, s.end_index + 1).expect("range");
        let grown = points[1..]
            .iter()
            .try_fold(DssState::new(points[0]), |dss, &p| dss.extended(p));
        if grown.is_some_and(|dss| dss.is_hook_free()) {
            violations += 1;
        }
    }
    violations
}

#[test]
fn segmentation_reg() {
    let mut rp = RegParams::new("segmentation");
    let options = TraceOptions::default();

    // -----------------------------------------------------------
    // 10x10 square: one segment per side
    // -----------------------------------------------------------
    let square = filled_rect(20, 20, 4, 4, 10, 10);
    let curve = trace_boundary(&square, AdjacencyRule::FourEight, &options).expect("square");
    let seg = segment(&curve).expect("segment square");
    eprintln!("Square: {} segments, perimeter {}", seg.len(), seg.perimeter());
    rp.compare_values(4.0, seg.len() as f64, 0.0);
    rp.compare_values(40.0, seg.perimeter(), 0.0);
    rp.compare_values(100.0, seg.area(), 0.0);
    let sides: Vec<f64> = seg.iter().map(|s| s.length()).collect();
    eprintln!("Side lengths: {:?}", sides);
    rp.compare_values(10.0, sides[0], 0.0);
    rp.compare_values(10.0, sides[1], 0.0);
    rp.compare_values(10.0, sides[2], 0.0);
    // the last side stops one point short of the start
    rp.compare_values(9.0, sides[3], 0.0);
    check_cover(&mut rp, &curve, &seg);
    rp.compare_values(0.0, check_maximality(&curve, &seg) as f64, 0.0);

    // -----------------------------------------------------------
    // Rectangles: exact perimeter
    // -----------------------------------------------------------
    for (w, h) in [(1, 1), (1, 9), (9, 1), (2, 2), (13, 5)] {
        let set = filled_rect(20, 20, 3, 3, w, h);
        let curve = trace_boundary(&set, AdjacencyRule::FourEight, &options).expect("rectangle");
        let seg = segment(&curve).expect("segment rectangle");
        eprintln!("{}x{}: {} segments", w, h, seg.len());
        rp.compare_values((2 * (w + h)) as f64, seg.perimeter(), 1e-12);
        rp.compare_values((w * h) as f64, seg.area(), 0.0);
        check_cover(&mut rp, &curve, &seg);
    }

    // -----------------------------------------------------------
    // Curved shapes
    // -----------------------------------------------------------
    let shapes = [
        digitize(&Disk::new(0.0, 0.0, 30.0), 1.0).expect("disk"),
        digitize(&Ellipse::new(0.0, 0.0, 35.0, 12.0, 0.4), 1.0).expect("ellipse"),
        digitize(&Flower::new(0.0, 0.0, 30.0, 8.0, 5, 0.3), 1.0).expect("flower"),
    ];
    for set in &shapes {
        let curve = trace_boundary(set, AdjacencyRule::FourEight, &options).expect("shape");
        let seg = segment(&curve).expect("segment shape");
        eprintln!(
            "{} points -> {} segments, perimeter {:.3}",
            curve.len(),
            seg.len(),
            seg.perimeter()
        );
        check_cover(&mut rp, &curve, &seg);
        rp.compare_values(0.0, check_maximality(&curve, &seg) as f64, 0.0);
        // the polygon is never longer than the staircase it follows
        assert!(seg.perimeter() <= curve.edge_length() as f64);
        // same input, same output
        assert_eq!(seg, segment(&curve).expect("segment again"));
    }

    // -----------------------------------------------------------
    // Short input
    // -----------------------------------------------------------
    let err = segment_points(&[dgeom_core::Point::new(0, 0)]).unwrap_err();
    assert!(matches!(err, GeometryError::InvalidInput(_)), "{}", err);

    assert!(rp.cleanup(), "segmentation regression test failed");
}
