//! Curated API surface (unstable).
//!
//! Re-exports grouped by pipeline stage so callers do not depend on the
//! internal module layout.

// Geometry primitives
pub use crate::geom::{
    angle_between, close_enough, crosses, distance, move_at_angle, move_toward, orientation,
    point_in_polygon, polygon_area, segment_intersection, segments_intersect, GeomCfg, Half,
    Quadrant, Segment,
};
// Walls and endpoints
pub use crate::scene::rand::{draw_layout, Count, LayoutCfg, ReplayToken as LayoutReplay};
pub use crate::scene::{
    build_walls, index_endpoints, Area, Endpoint, EndpointId, Geometry, Obstacle, Occluder,
    SceneError, Wall, WallId,
};
// Light pipeline
pub use crate::light::{
    assemble_polygon, cast_rays, compute_visibility, resolve_rays, Light, LightCfg, LightError,
    LightParams, Ray, RayKind, Visibility, DEFAULT_POWER, OFFSET_ANGLE,
};
