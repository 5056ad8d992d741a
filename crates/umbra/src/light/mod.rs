//! Point light: visibility polygon by angular ray casting.
//!
//! Purpose
//! - Given a geometry snapshot and a light origin, compute the region lit
//!   directly by the light: cast rays toward wall endpoints (`cast`), cut them
//!   at the nearest occluding wall (`resolve`), and sort the survivors by
//!   angle into a star-shaped polygon (`assemble`).
//!
//! Model
//! - `compute_visibility` is a pure function of `(&Geometry, origin, power)`;
//!   several lights may run it concurrently on one snapshot.
//! - `Light` owns its snapshot and last result; `update` is the per-frame call,
//!   `rebuild` runs only when obstacles change.
//! - Height, arc angle, direction and color are carried for the renderer and
//!   do not restrict which endpoints receive rays.
//!
//! Cost is O(R × W): every ray is tested against walls in centroid-distance
//! order until the first crossing.
//!
//! Code cross-refs: `scene::{Geometry, Wall, Endpoint}`, `geom::{crosses, segment_intersection}`

mod assemble;
mod cast;
mod ray;
mod resolve;

use std::fmt;
use std::time::Instant;

use nalgebra::{Vector2, Vector3};

use crate::scene::{Area, Endpoint, Geometry, Occluder, SceneError};
use crate::GeomCfg;

pub use assemble::{assemble_polygon, Visibility};
pub use cast::cast_rays;
pub use ray::{Ray, RayKind};
pub use resolve::resolve_rays;

/// Default maximum ray range.
pub const DEFAULT_POWER: f64 = 1500.0;
/// Angular offset of corner-peeking rays (radians).
pub const OFFSET_ANGLE: f64 = 1e-4;

/// Light source parameters. Angles are in degrees.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LightParams {
    pub x: f64,
    pub y: f64,
    /// Virtual height above the floor (renderer metadata).
    pub height: f64,
    /// Maximum ray range.
    pub power: f64,
    /// Emission arc; 360 for an omnidirectional light (metadata only).
    pub arc_angle: f64,
    /// Arc center direction (metadata only).
    pub direction: f64,
    /// RGBA.
    pub color: [u8; 4],
}

impl LightParams {
    pub fn at(x: f64, y: f64) -> Self {
        Self {
            x,
            y,
            ..Self::default()
        }
    }
}

impl Default for LightParams {
    fn default() -> Self {
        Self {
            x: 0.0,
            y: 0.0,
            height: 0.0,
            power: DEFAULT_POWER,
            arc_angle: 360.0,
            direction: 0.0,
            color: [255, 255, 255, 255],
        }
    }
}

/// Ray casting configuration.
#[derive(Clone, Copy, Debug)]
pub struct LightCfg {
    /// Angular offset of corner-peeking rays (radians).
    pub offset_angle: f64,
    /// Cast the extra ray toward `anchor` unless another ray already ends there.
    pub anchor_ray: bool,
    pub anchor: Vector2<f64>,
}

impl Default for LightCfg {
    fn default() -> Self {
        Self {
            offset_angle: OFFSET_ANGLE,
            anchor_ray: true,
            anchor: Vector2::zeros(),
        }
    }
}

/// Errors raised when configuring a light.
#[derive(Debug, Clone, PartialEq)]
pub enum LightError {
    Scene(SceneError),
    /// Position must be finite.
    InvalidPosition { x: f64, y: f64 },
    /// Power must be finite and non-negative.
    InvalidPower { power: f64 },
}

impl fmt::Display for LightError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LightError::Scene(e) => write!(f, "invalid scene: {e}"),
            LightError::InvalidPosition { x, y } => {
                write!(f, "light position ({x}, {y}) is not finite")
            }
            LightError::InvalidPower { power } => {
                write!(f, "light power must be finite and >= 0 (got {power})")
            }
        }
    }
}

impl std::error::Error for LightError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            LightError::Scene(e) => Some(e),
            _ => None,
        }
    }
}

impl From<SceneError> for LightError {
    fn from(e: SceneError) -> Self {
        LightError::Scene(e)
    }
}

/// Full recomputation of the visibility polygon for one origin.
///
/// An origin that reaches no endpoint within `power` yields an empty result.
pub fn compute_visibility(
    geometry: &Geometry,
    origin: Vector2<f64>,
    power: f64,
    cfg: &LightCfg,
) -> Visibility {
    let started = Instant::now();
    let endpoints: Vec<Endpoint> = geometry
        .endpoints_by_angle(origin)
        .into_iter()
        .map(|i| geometry.endpoints()[i])
        .collect();
    let rays = cast_rays(&endpoints, geometry.walls(), origin, power, cfg);
    let cast = rays.len();
    let order = geometry.walls_by_distance(origin);
    let rays = resolve_rays(rays, geometry.walls(), &order, geometry.cfg());
    let vis = assemble_polygon(origin, rays);
    tracing::debug!(
        x = origin.x,
        y = origin.y,
        cast,
        clipped = vis.rays.iter().filter(|r| r.hit.is_some()).count(),
        vertices = vis.polygon.len(),
        elapsed_us = started.elapsed().as_micros() as u64,
        "visibility computed"
    );
    vis
}

/// Light source with its own geometry snapshot and last result.
#[derive(Clone, Debug)]
pub struct Light {
    params: LightParams,
    cfg: LightCfg,
    geometry: Geometry,
    visibility: Visibility,
}

impl Light {
    /// Build walls and endpoints for `obstacles` inside `area`.
    ///
    /// The visibility stays empty until the first `update`.
    pub fn new<O: Occluder>(
        params: LightParams,
        area: Area,
        obstacles: &[O],
    ) -> Result<Self, LightError> {
        let geometry = Geometry::build(area, obstacles, GeomCfg::default())?;
        Self::with_geometry(params, LightCfg::default(), geometry)
    }

    /// Use an existing snapshot (e.g. one shared by several lights).
    pub fn with_geometry(
        params: LightParams,
        cfg: LightCfg,
        geometry: Geometry,
    ) -> Result<Self, LightError> {
        validate(&params)?;
        Ok(Self {
            params,
            cfg,
            geometry,
            visibility: Visibility::default(),
        })
    }

    /// Rebuild the snapshot after obstacle geometry changed, keeping the tolerances.
    pub fn rebuild<O: Occluder>(&mut self, area: Area, obstacles: &[O]) -> Result<(), LightError> {
        self.geometry = Geometry::build(area, obstacles, self.geometry.cfg())?;
        Ok(())
    }

    pub fn set_geometry(&mut self, geometry: Geometry) {
        self.geometry = geometry;
    }

    pub fn set_position(&mut self, x: f64, y: f64) -> Result<(), LightError> {
        let next = LightParams { x, y, ..self.params };
        validate(&next)?;
        self.params = next;
        Ok(())
    }

    /// Recompute rays and polygon from scratch. Call once per frame.
    pub fn update(&mut self) -> &Visibility {
        self.visibility =
            compute_visibility(&self.geometry, self.origin(), self.params.power, &self.cfg);
        &self.visibility
    }

    #[inline]
    pub fn params(&self) -> &LightParams {
        &self.params
    }
    #[inline]
    pub fn cfg(&self) -> &LightCfg {
        &self.cfg
    }
    #[inline]
    pub fn origin(&self) -> Vector2<f64> {
        Vector2::new(self.params.x, self.params.y)
    }
    /// `(x, y, height)`.
    #[inline]
    pub fn position(&self) -> Vector3<f64> {
        Vector3::new(self.params.x, self.params.y, self.params.height)
    }
    #[inline]
    pub fn geometry(&self) -> &Geometry {
        &self.geometry
    }
    #[inline]
    pub fn visibility(&self) -> &Visibility {
        &self.visibility
    }
    #[inline]
    pub fn polygon(&self) -> &[Vector2<f64>] {
        &self.visibility.polygon
    }
    #[inline]
    pub fn rays(&self) -> &[Ray] {
        &self.visibility.rays
    }
}

fn validate(params: &LightParams) -> Result<(), LightError> {
    if !(params.x.is_finite() && params.y.is_finite()) {
        return Err(LightError::InvalidPosition {
            x: params.x,
            y: params.y,
        });
    }
    if !params.power.is_finite() || params.power < 0.0 {
        return Err(LightError::InvalidPower {
            power: params.power,
        });
    }
    Ok(())
}
