//! Planar geometry primitives for the visibility engine.
//!
//! Purpose
//! - Points are plain `nalgebra::Vector2<f64>`; segments, quadrants and
//!   tolerances live in `types`, free functions in `util`.
//! - Predicates are exact sign tests; only the line intersection needs an
//!   explicit determinant tolerance (`GeomCfg::eps_det`).
//!
//! Angle convention
//! - `angle_between(o, p)` is measured in radians in [0, 2π), zero along +y,
//!   growing counter-clockwise. Every angular sort in the crate uses it.

mod types;
mod util;

pub use types::{GeomCfg, Half, Quadrant, Segment};
pub use util::{
    angle_between, close_enough, crosses, distance, move_at_angle, move_toward, on_segment,
    orientation, point_in_polygon, polygon_area, segment_intersection, segments_intersect,
    vector_from_angle,
};

#[cfg(test)]
mod tests;
