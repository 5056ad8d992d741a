//! Ray caster: primary rays toward endpoints plus corner-peeking offsets.
//!
//! Sweep
//! - Endpoints arrive sorted by angle around the origin. A running
//!   "blocking edge" (a wall opened by an earlier endpoint that continues
//!   counter-clockwise) lets the sweep skip endpoints hidden behind it: an
//!   endpoint is skipped only when the segment from the origin to it strictly
//!   crosses that wall, so ties and walls wrapping through angle 0 never hide
//!   a visible corner.
//! - Each surviving endpoint gets a primary ray and up to two offset rays at
//!   `±offset_angle`, extended to full range, so the polygon can sweep past
//!   convex corners.
//! - Offset selection compares the angles of the neighbouring walls' far
//!   vertices with the primary angle; the comparison differs per quadrant
//!   because the sweep direction differs.

use std::f64::consts::{PI, TAU};

use nalgebra::Vector2;

use crate::geom::{angle_between, crosses, distance, move_at_angle, Quadrant};
use crate::scene::{Endpoint, Wall, WallId};

use super::ray::{Ray, RayKind};
use super::LightCfg;

/// Which offset endpoint a slot receives.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Side {
    /// `angle - offset_angle`
    Cw,
    /// `angle + offset_angle`
    Ccw,
}

/// Build the candidate ray set for `endpoints` (already sorted by angle).
///
/// Endpoints farther than `max_range` are ignored. The anchor ray is appended
/// once when `cfg.anchor_ray` is set, at least one ray was cast, and no ray
/// already aims at `cfg.anchor`.
pub fn cast_rays(
    endpoints: &[Endpoint],
    walls: &[Wall],
    origin: Vector2<f64>,
    max_range: f64,
    cfg: &LightCfg,
) -> Vec<Ray> {
    let mut rays = Vec::with_capacity(endpoints.len() * 3 + 1);
    let mut edge: Option<WallId> = None;

    for e in endpoints {
        let position = e.position;
        if distance(origin, position) > max_range {
            continue;
        }
        let angle = angle_between(origin, position);

        if let Some(id) = edge {
            let w = &walls[id.0];
            if crosses(origin, position, w.a, w.b) {
                continue;
            }
        }
        edge = e.ends.filter(|id| {
            let sweep = (angle_between(origin, walls[id.0].a) - angle).rem_euclid(TAU);
            sweep > 0.0 && sweep < PI
        });

        rays.push(Ray::new(origin, position, RayKind::Primary, e.begins, e.ends));

        let next_edge_end = e.begins.map(|id| angle_between(origin, walls[id.0].b));
        let this_edge_begin = e.ends.map(|id| angle_between(origin, walls[id.0].a));
        let (slot_a, slot_b) = pick_offsets(
            Quadrant::of(position, origin),
            angle,
            next_edge_end,
            this_edge_begin,
        );
        for side in [slot_a, slot_b].into_iter().flatten() {
            let (theta, kind) = match side {
                Side::Cw => (angle - cfg.offset_angle, RayKind::OffsetCw),
                Side::Ccw => (angle + cfg.offset_angle, RayKind::OffsetCcw),
            };
            let end = move_at_angle(origin, theta, max_range);
            rays.push(Ray::new(origin, end, kind, e.begins, e.ends));
        }
    }

    if cfg.anchor_ray && !rays.is_empty() && !rays.iter().any(|r| r.target == cfg.anchor) {
        rays.push(Ray::anchor(origin, cfg.anchor));
    }
    rays
}

/// Offset slots for one endpoint.
///
/// `next_edge_end` is the angle of the far vertex of the wall the endpoint
/// begins, `this_edge_begin` the angle of the near vertex of the wall it ends.
/// In the upper-left quadrant both tests write slot B, so at most one offset
/// ray is emitted there.
fn pick_offsets(
    quadrant: Quadrant,
    angle: f64,
    next_edge_end: Option<f64>,
    this_edge_begin: Option<f64>,
) -> (Option<Side>, Option<Side>) {
    let above = |v: Option<f64>| v.is_some_and(|v| v > angle);
    let below = |v: Option<f64>| v.is_some_and(|v| v < angle);
    let mut slot_a = None;
    let mut slot_b = None;
    match quadrant {
        Quadrant::UpperLeft => {
            if above(next_edge_end) {
                slot_b = Some(Side::Cw);
            }
            if below(this_edge_begin) {
                slot_b = Some(Side::Ccw);
            }
        }
        Quadrant::UpperRight => {
            if above(next_edge_end) {
                slot_a = Some(Side::Cw);
            }
            if below(this_edge_begin) {
                slot_b = Some(Side::Ccw);
            }
        }
        Quadrant::LowerLeft => {
            if above(next_edge_end) {
                slot_a = Some(Side::Cw);
            }
            if below(this_edge_begin) {
                slot_b = Some(Side::Ccw);
            }
        }
        Quadrant::LowerRight => {
            if above(this_edge_begin) {
                slot_a = Some(Side::Cw);
            }
            if below(next_edge_end) {
                slot_b = Some(Side::Ccw);
            }
        }
    }
    (slot_a, slot_b)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scene::{Area, EndpointId, Geometry, Obstacle};
    use crate::GeomCfg;
    use nalgebra::vector;

    fn no_anchor() -> LightCfg {
        LightCfg {
            anchor_ray: false,
            ..LightCfg::default()
        }
    }

    #[test]
    fn corners_at_equal_distance_all_get_primary_rays() {
        let geo = Geometry::build(Area::new(100.0, 100.0), &[] as &[Obstacle], GeomCfg::default())
            .unwrap();
        let origin = vector![50.0, 50.0];
        let sorted: Vec<Endpoint> = geo
            .endpoints_by_angle(origin)
            .into_iter()
            .map(|i| geo.endpoints()[i])
            .collect();
        let rays = cast_rays(&sorted, geo.walls(), origin, 1500.0, &no_anchor());
        for c in Area::new(100.0, 100.0).corners() {
            assert!(
                rays.iter().any(|r| r.kind == RayKind::Primary && r.target == c),
                "no primary ray toward {c:?}"
            );
        }
        assert_eq!(rays.len(), 4 + 4);
    }

    #[test]
    fn endpoint_behind_the_open_edge_is_skipped() {
        let walls = vec![Wall::new(WallId(0), vector![-10.0, 2.0], vector![-2.0, 10.0])];
        let endpoint = |id, position, begins, ends| Endpoint {
            id: EndpointId(id),
            position,
            begins,
            ends,
        };
        // Sorted by angle: the wall's `b` end opens the edge, the lone point
        // sits behind it, the wall's `a` end closes the sector.
        let endpoints = [
            endpoint(0, vector![-2.0, 10.0], None, Some(WallId(0))),
            endpoint(1, vector![-10.0, 10.0], None, None),
            endpoint(2, vector![-10.0, 2.0], Some(WallId(0)), None),
        ];
        let rays = cast_rays(&endpoints, &walls, vector![0.0, 0.0], 100.0, &no_anchor());
        let targets: Vec<Vector2<f64>> = rays.iter().map(|r| r.target).collect();
        assert_eq!(targets, vec![vector![-2.0, 10.0], vector![-10.0, 2.0]]);
    }

    #[test]
    fn upper_left_keeps_at_most_one_offset() {
        let (a, b) = pick_offsets(Quadrant::UpperLeft, 1.0, Some(2.0), Some(0.5));
        assert_eq!(a, None);
        assert_eq!(b, Some(Side::Ccw));
        let (a, b) = pick_offsets(Quadrant::UpperLeft, 1.0, Some(2.0), Some(1.5));
        assert_eq!((a, b), (None, Some(Side::Cw)));
    }

    #[test]
    fn lower_right_swaps_the_tests() {
        let (a, b) = pick_offsets(Quadrant::LowerRight, 4.0, Some(3.0), Some(5.0));
        assert_eq!((a, b), (Some(Side::Cw), Some(Side::Ccw)));
        let (a, b) = pick_offsets(Quadrant::UpperRight, 4.0, Some(3.0), Some(5.0));
        assert_eq!((a, b), (None, None));
    }

    #[test]
    fn missing_walls_disable_their_test() {
        let (a, b) = pick_offsets(Quadrant::LowerLeft, 2.0, None, Some(1.0));
        assert_eq!((a, b), (None, Some(Side::Ccw)));
        assert_eq!(
            pick_offsets(Quadrant::LowerRight, 2.0, None, None),
            (None, None)
        );
    }
}
