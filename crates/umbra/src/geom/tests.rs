use super::*;
use nalgebra::{vector, Vector2};
use proptest::prelude::*;
use std::f64::consts::{FRAC_PI_2, PI};

#[test]
fn angle_convention_starts_up_and_turns_ccw() {
    let o = vector![0.0, 0.0];
    assert!(angle_between(o, vector![0.0, 1.0]).abs() < 1e-12);
    assert!((angle_between(o, vector![-1.0, 0.0]) - FRAC_PI_2).abs() < 1e-12);
    assert!((angle_between(o, vector![0.0, -1.0]) - PI).abs() < 1e-12);
    assert!((angle_between(o, vector![1.0, 0.0]) - 3.0 * FRAC_PI_2).abs() < 1e-12);
    // Translation invariant
    let c = vector![10.0, -4.0];
    assert!((angle_between(c, c + vector![-1.0, 0.0]) - FRAC_PI_2).abs() < 1e-12);
}

#[test]
fn move_at_angle_inverts_angle_between() {
    let o = vector![3.0, 4.0];
    for &theta in &[0.3, 1.9, 3.5, 5.8] {
        let p = move_at_angle(o, theta, 7.5);
        assert!((distance(o, p) - 7.5).abs() < 1e-9);
        assert!((angle_between(o, p) - theta).abs() < 1e-9);
    }
    let q = move_toward(o, vector![3.0, 10.0], 2.0).unwrap();
    assert!((q - vector![3.0, 6.0]).norm() < 1e-12);
    assert!(move_toward(o, o, 1.0).is_none());
}

#[test]
fn intersection_of_diagonals() {
    let p = segment_intersection(
        vector![0.0, 0.0],
        vector![2.0, 2.0],
        vector![0.0, 2.0],
        vector![2.0, 0.0],
        1e-12,
    )
    .expect("diagonals meet");
    assert!((p - vector![1.0, 1.0]).norm() < 1e-12);

    // Ray from a light toward a horizontal wall
    let s = Segment::new(vector![50.0, 10.0], vector![50.0, 1510.0]);
    let w = Segment::new(vector![40.0, 40.0], vector![60.0, 40.0]);
    assert!(s.crosses(&w));
    let hit = s.intersection(&w, GeomCfg::default()).unwrap();
    assert!((hit - vector![50.0, 40.0]).norm() < 1e-9);
}

#[test]
fn parallel_segments_have_no_intersection() {
    let a = vector![0.0, 0.0];
    let b = vector![1.0, 0.0];
    let c = vector![0.0, 1.0];
    let d = vector![1.0, 1.0];
    assert!(segment_intersection(a, b, c, d, 1e-12).is_none());
    assert!(!crosses(a, b, c, d));
    // Collinear overlap is neither a crossing nor a point intersection.
    let e = vector![0.5, 0.0];
    let f = vector![2.0, 0.0];
    assert!(segment_intersection(a, b, e, f, 1e-12).is_none());
    assert!(!crosses(a, b, e, f));
    assert!(segments_intersect(a, b, e, f));
}

#[test]
fn touching_is_not_crossing() {
    // Shared endpoint
    let a = vector![0.0, 0.0];
    let b = vector![1.0, 1.0];
    let c = vector![2.0, 0.0];
    assert!(!crosses(a, b, b, c));
    assert!(segments_intersect(a, b, b, c));
    // T-junction
    let h0 = vector![0.0, 0.0];
    let h1 = vector![2.0, 0.0];
    let v0 = vector![1.0, 0.0];
    let v1 = vector![1.0, 1.0];
    assert!(!crosses(h0, h1, v0, v1));
    assert!(segments_intersect(h0, h1, v0, v1));
    // Disjoint
    assert!(!segments_intersect(h0, h1, vector![0.0, 1.0], vector![2.0, 2.0]));
}

#[test]
fn quadrants_and_halves() {
    let c = vector![0.0, 0.0];
    assert_eq!(Quadrant::of(vector![-1.0, 1.0], c), Quadrant::UpperLeft);
    assert_eq!(Quadrant::of(vector![1.0, 1.0], c), Quadrant::UpperRight);
    assert_eq!(Quadrant::of(vector![-1.0, -1.0], c), Quadrant::LowerLeft);
    assert_eq!(Quadrant::of(vector![1.0, -1.0], c), Quadrant::LowerRight);
    // On-axis points fall through to lower-right.
    assert_eq!(Quadrant::of(vector![0.0, 1.0], c), Quadrant::LowerRight);
    assert_eq!(Quadrant::of(vector![-1.0, 0.0], c), Quadrant::LowerRight);

    assert_eq!(
        Half::shared(vector![-1.0, 5.0], vector![-2.0, -5.0], c),
        Half::Left
    );
    assert_eq!(
        Half::shared(vector![-1.0, 5.0], vector![2.0, 3.0], c),
        Half::Upper
    );
    assert_eq!(
        Half::shared(vector![-1.0, 5.0], vector![2.0, -3.0], c),
        Half::Diagonal
    );
}

#[test]
fn polygon_helpers_on_unit_square() {
    let sq = vec![
        vector![0.0, 0.0],
        vector![1.0, 0.0],
        vector![1.0, 1.0],
        vector![0.0, 1.0],
    ];
    assert!((polygon_area(&sq) - 1.0).abs() < 1e-12);
    let cw: Vec<Vector2<f64>> = sq.iter().rev().copied().collect();
    assert!((polygon_area(&cw) + 1.0).abs() < 1e-12);
    assert!(point_in_polygon(vector![0.5, 0.5], &sq));
    assert!(!point_in_polygon(vector![1.5, 0.5], &sq));
    assert!(!point_in_polygon(vector![0.5, 0.5], &sq[..2]));
    assert!(close_enough(sq[0], sq[1], 1.0));
    assert!(!close_enough(sq[0], sq[2], 1.0));
}

#[test]
fn dedup_policy() {
    let exact = GeomCfg::default();
    let p = vector![1.0, 2.0];
    let q = vector![1.0 + 1e-12, 2.0];
    assert!(exact.same_position(p, p));
    assert!(!exact.same_position(p, q));
    let loose = GeomCfg {
        eps_dedup: 1e-9,
        ..GeomCfg::default()
    };
    assert!(loose.same_position(p, q));
}

fn coord() -> impl Strategy<Value = f64> {
    -100.0..100.0f64
}

proptest! {
    #[test]
    fn crossing_segments_meet_inside_both(
        ax in coord(), ay in coord(), bx in coord(), by in coord(),
        cx in coord(), cy in coord(), dx in coord(), dy in coord(),
    ) {
        let (a, b) = (vector![ax, ay], vector![bx, by]);
        let (c, d) = (vector![cx, cy], vector![dx, dy]);
        prop_assume!(crosses(a, b, c, d));
        let p = segment_intersection(a, b, c, d, 1e-12).expect("crossing implies non-parallel");
        let tol = 1e-6;
        prop_assert!(p.x >= a.x.min(b.x) - tol && p.x <= a.x.max(b.x) + tol);
        prop_assert!(p.y >= a.y.min(b.y) - tol && p.y <= a.y.max(b.y) + tol);
        prop_assert!(p.x >= c.x.min(d.x) - tol && p.x <= c.x.max(d.x) + tol);
        prop_assert!(p.y >= c.y.min(d.y) - tol && p.y <= c.y.max(d.y) + tol);
        prop_assert!(segments_intersect(a, b, c, d));
    }
}
