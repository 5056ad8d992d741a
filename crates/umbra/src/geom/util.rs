use std::f64::consts::TAU;

use nalgebra::Vector2;

/// Euclidean distance in the plane.
#[inline]
pub fn distance(a: Vector2<f64>, b: Vector2<f64>) -> f64 {
    (a - b).norm()
}

#[inline]
pub fn close_enough(a: Vector2<f64>, b: Vector2<f64>, max_distance: f64) -> bool {
    distance(a, b) <= max_distance
}

/// Direction angle from `start` toward `end`, in radians within [0, 2π).
///
/// Zero points along +y and angles grow counter-clockwise, so the angular
/// sweep of the light visits the left half-plane first.
#[inline]
pub fn angle_between(start: Vector2<f64>, end: Vector2<f64>) -> f64 {
    let d = end - start;
    (-d.x.atan2(d.y)).rem_euclid(TAU)
}

/// Vector of length `scalar` pointing at `angle` (same convention as `angle_between`).
#[inline]
pub fn vector_from_angle(angle: f64, scalar: f64) -> Vector2<f64> {
    Vector2::new(-angle.sin() * scalar, angle.cos() * scalar)
}

/// Point at distance `length` from `start` along direction `angle`.
#[inline]
pub fn move_at_angle(start: Vector2<f64>, angle: f64, length: f64) -> Vector2<f64> {
    start + vector_from_angle(angle, length)
}

/// Point at distance `length` from `start` on the ray through `target`.
/// None if `target == start`.
#[inline]
pub fn move_toward(start: Vector2<f64>, target: Vector2<f64>, length: f64) -> Option<Vector2<f64>> {
    let d = target - start;
    let norm = d.norm();
    if !(norm.is_finite()) || norm <= 0.0 {
        return None;
    }
    Some(start + d * (length / norm))
}

/// Signed area of the parallelogram (p→q, p→r).
/// Positive when r lies counter-clockwise of p→q, zero when collinear.
#[inline]
pub fn orientation(p: Vector2<f64>, q: Vector2<f64>, r: Vector2<f64>) -> f64 {
    let pq = q - p;
    let pr = r - p;
    pq.x * pr.y - pq.y * pr.x
}

/// `p` lies in the bounding box of segment `a`–`b` (use after a collinearity test).
#[inline]
pub fn on_segment(a: Vector2<f64>, b: Vector2<f64>, p: Vector2<f64>) -> bool {
    a.x.min(b.x) <= p.x && p.x <= a.x.max(b.x) && a.y.min(b.y) <= p.y && p.y <= a.y.max(b.y)
}

#[inline]
fn opposite_signs(u: f64, v: f64) -> bool {
    (u > 0.0 && v < 0.0) || (u < 0.0 && v > 0.0)
}

/// Strict crossing of segments p1p2 and p3p4.
///
/// True only when the interiors meet in a single point. Touching at an
/// endpoint, T-junctions and collinear overlap are not crossings.
pub fn crosses(p1: Vector2<f64>, p2: Vector2<f64>, p3: Vector2<f64>, p4: Vector2<f64>) -> bool {
    let d1 = orientation(p3, p4, p1);
    let d2 = orientation(p3, p4, p2);
    let d3 = orientation(p1, p2, p3);
    let d4 = orientation(p1, p2, p4);
    opposite_signs(d1, d2) && opposite_signs(d3, d4)
}

/// Closed intersection test: proper crossings plus touching and collinear overlap.
pub fn segments_intersect(
    p1: Vector2<f64>,
    p2: Vector2<f64>,
    p3: Vector2<f64>,
    p4: Vector2<f64>,
) -> bool {
    let d1 = orientation(p3, p4, p1);
    let d2 = orientation(p3, p4, p2);
    let d3 = orientation(p1, p2, p3);
    let d4 = orientation(p1, p2, p4);
    if opposite_signs(d1, d2) && opposite_signs(d3, d4) {
        return true;
    }
    (d1 == 0.0 && on_segment(p3, p4, p1))
        || (d2 == 0.0 && on_segment(p3, p4, p2))
        || (d3 == 0.0 && on_segment(p1, p2, p3))
        || (d4 == 0.0 && on_segment(p1, p2, p4))
}

/// Intersection of the lines through p1p2 and p3p4.
///
/// Solves `p1 + s (p2 - p1)` against the second line with the 2×2 determinant.
/// Returns None when `|det| <= eps_det` (parallel or collinear lines).
pub fn segment_intersection(
    p1: Vector2<f64>,
    p2: Vector2<f64>,
    p3: Vector2<f64>,
    p4: Vector2<f64>,
    eps_det: f64,
) -> Option<Vector2<f64>> {
    let d1 = p2 - p1;
    let d2 = p4 - p3;
    let det = d1.x * d2.y - d1.y * d2.x;
    if !(det.is_finite()) || det.abs() <= eps_det {
        return None;
    }
    let w = p3 - p1;
    let s = (w.x * d2.y - w.y * d2.x) / det;
    Some(p1 + d1 * s)
}

/// Even-odd point-in-polygon test (boundary points may go either way).
pub fn point_in_polygon(p: Vector2<f64>, polygon: &[Vector2<f64>]) -> bool {
    let n = polygon.len();
    if n < 3 {
        return false;
    }
    let mut inside = false;
    let mut j = n - 1;
    for i in 0..n {
        let (vi, vj) = (polygon[i], polygon[j]);
        if (vi.y > p.y) != (vj.y > p.y) {
            let x_cross = (vj.x - vi.x) * (p.y - vi.y) / (vj.y - vi.y) + vi.x;
            if p.x < x_cross {
                inside = !inside;
            }
        }
        j = i;
    }
    inside
}

/// Shoelace area; positive for counter-clockwise vertex order.
pub fn polygon_area(polygon: &[Vector2<f64>]) -> f64 {
    let n = polygon.len();
    if n < 3 {
        return 0.0;
    }
    let mut twice = 0.0;
    for i in 0..n {
        let p = polygon[i];
        let q = polygon[(i + 1) % n];
        twice += p.x * q.y - q.x * p.y;
    }
    0.5 * twice
}
