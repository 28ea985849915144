//! Pixel set and curve regression test
//!
//! Run with:
//! ```
//! cargo test -p dgeom-core --test pixset_reg
//! ```

use dgeom_core::{Curve, Direction4, Domain, PixelSet, Point, from_chain_code, to_chain_code};
use dgeom_test::RegParams;

#[test]
fn pixset_reg() {
    let mut rp = RegParams::new("pixset");

    // -----------------------------------------------------------
    // Thresholding a raster
    // -----------------------------------------------------------
    #[rustfmt::skip]
    let raster: [u8; 20] = [
        0,   0,   0,   0, 0,
        0, 200, 255,   0, 0,
        0, 180,  40, 129, 0,
        0,   0,   0,   0, 0,
    ];
    let set = PixelSet::from_raster(5, 4, &raster, 128..=255).expect("raster");
    eprintln!("Foreground pixels: {}", set.len());
    rp.compare_values(4.0, set.len() as f64, 0.0);
    rp.compare_values(5.0, set.domain().width() as f64, 0.0);
    rp.compare_values(4.0, set.domain().height() as f64, 0.0);

    let bounds = set.bounding_box().expect("non-empty");
    rp.compare_points(
        &[Point::new(1, 1), Point::new(3, 2)],
        &[bounds.lower(), bounds.upper()],
    );

    // Length mismatch is rejected
    assert!(PixelSet::from_raster(5, 4, &raster[..19], 128..=255).is_err());

    // Points outside the domain are rejected
    let mut small = PixelSet::new(Domain::from_size(2, 2).expect("domain"));
    assert!(small.insert(Point::new(2, 0)).is_err());
    assert!(small.insert(Point::new(1, 1)).expect("inside"));
    assert!(!small.insert(Point::new(1, 1)).expect("inside"));

    // -----------------------------------------------------------
    // Freeman chain codes
    // -----------------------------------------------------------
    let chain = [
        Direction4::East,
        Direction4::East,
        Direction4::North,
        Direction4::West,
        Direction4::West,
    ];
    let points = from_chain_code(Point::new(1, 1), &chain);
    rp.compare_values(6.0, points.len() as f64, 0.0);
    let curve = Curve::new(points.clone()).expect("closed 4-connected curve");
    rp.compare_values(6.0, curve.edge_length() as f64, 0.0);

    let codes: Vec<u8> = curve.steps().iter().map(|d| d.code()).collect();
    eprintln!("Chain code: {:?}", codes);
    rp.compare_strings(&[0, 0, 1, 2, 2, 3], &codes);

    let back = to_chain_code(curve.points());
    rp.compare_values(chain.len() as f64, back.len() as f64, 0.0);
    rp.compare_points(&points, &from_chain_code(points[0], &back));

    // An open staircase does not close
    let open = from_chain_code(Point::new(0, 0), &[Direction4::East, Direction4::North]);
    assert!(Curve::new(open).is_err());

    assert!(rp.cleanup(), "pixset regression test failed");
}
