//! 2D visibility polygons for point lights.
//!
//! Pipeline
//! - `scene`: area border + obstacle outlines → walls → distinct endpoints,
//!   bundled into an immutable `Geometry` snapshot.
//! - `light`: rays toward endpoints (plus corner-peeking offsets), clipped at
//!   the nearest wall, sorted by angle into the lit polygon.
//! - `geom`: the planar predicates both build on.
//!
//! API Policy
//! - `api` is the curated surface for callers; module paths may move.

pub mod api;
pub mod geom;
pub mod light;
pub mod scene;

/// Library version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub use geom::GeomCfg;
pub use nalgebra::Vector2 as Vec2;

/// Common exports for quick imports in callers.
pub mod prelude {
    pub use crate::geom::{angle_between, distance, GeomCfg};
    pub use crate::light::{
        compute_visibility, Light, LightCfg, LightError, LightParams, Ray, RayKind, Visibility,
    };
    pub use crate::scene::{Area, Geometry, Obstacle, Occluder, SceneError};
    pub use nalgebra::Vector2 as Vec2;
}
