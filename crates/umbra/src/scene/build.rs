//! Wall builder, endpoint index and the immutable geometry snapshot.

use nalgebra::Vector2;

use crate::geom::{angle_between, distance, GeomCfg};

use super::types::{Area, Endpoint, EndpointId, Occluder, SceneError, Wall, WallId};

/// Walls and endpoints for one obstacle configuration.
///
/// Rebuild it whenever obstacle geometry changes; per-frame light updates only
/// read it, so one snapshot can be shared by many lights.
#[derive(Clone, Debug)]
pub struct Geometry {
    area: Area,
    walls: Vec<Wall>,
    endpoints: Vec<Endpoint>,
    cfg: GeomCfg,
}

impl Geometry {
    /// Build walls from the area border and obstacle outlines, then index their endpoints.
    pub fn build<O: Occluder>(
        area: Area,
        obstacles: &[O],
        cfg: GeomCfg,
    ) -> Result<Self, SceneError> {
        let walls = build_walls(area, obstacles)?;
        let endpoints = index_endpoints(&walls, cfg);
        tracing::debug!(
            obstacles = obstacles.len(),
            walls = walls.len(),
            endpoints = endpoints.len(),
            "geometry built"
        );
        Ok(Self {
            area,
            walls,
            endpoints,
            cfg,
        })
    }

    #[inline]
    pub fn area(&self) -> Area {
        self.area
    }
    /// Border walls first, then obstacle edges in input order.
    #[inline]
    pub fn walls(&self) -> &[Wall] {
        &self.walls
    }
    #[inline]
    pub fn endpoints(&self) -> &[Endpoint] {
        &self.endpoints
    }
    #[inline]
    pub fn cfg(&self) -> GeomCfg {
        self.cfg
    }
    #[inline]
    pub fn wall(&self, id: WallId) -> &Wall {
        &self.walls[id.0]
    }

    /// Endpoint indices sorted by angle around `origin` (stable on ties).
    pub fn endpoints_by_angle(&self, origin: Vector2<f64>) -> Vec<usize> {
        let keys: Vec<f64> = self
            .endpoints
            .iter()
            .map(|e| angle_between(origin, e.position))
            .collect();
        let mut order: Vec<usize> = (0..self.endpoints.len()).collect();
        order.sort_by(|&i, &j| {
            keys[i]
                .partial_cmp(&keys[j])
                .unwrap_or(std::cmp::Ordering::Equal)
        });
        order
    }

    /// Wall indices sorted by centroid distance from `origin` (stable on ties).
    pub fn walls_by_distance(&self, origin: Vector2<f64>) -> Vec<usize> {
        let keys: Vec<f64> = self
            .walls
            .iter()
            .map(|w| distance(w.centroid, origin))
            .collect();
        let mut order: Vec<usize> = (0..self.walls.len()).collect();
        order.sort_by(|&i, &j| {
            keys[i]
                .partial_cmp(&keys[j])
                .unwrap_or(std::cmp::Ordering::Equal)
        });
        order
    }
}

/// One wall per border side, then one per obstacle edge (closing edge included).
///
/// Coincident or collinear edges are kept as separate walls.
pub fn build_walls<O: Occluder>(area: Area, obstacles: &[O]) -> Result<Vec<Wall>, SceneError> {
    if !(area.width.is_finite() && area.height.is_finite()) || area.width <= 0.0 || area.height <= 0.0
    {
        return Err(SceneError::InvalidArea {
            width: area.width,
            height: area.height,
        });
    }
    let total: usize = obstacles.iter().map(|o| o.boundary().len()).sum();
    let mut walls = Vec::with_capacity(4 + total);
    for s in area.borders() {
        walls.push(Wall::new(WallId(walls.len()), s.a, s.b));
    }
    for (k, obstacle) in obstacles.iter().enumerate() {
        let points = obstacle.boundary();
        if points.len() < 2 {
            return Err(SceneError::TooFewPoints {
                obstacle: k,
                points: points.len(),
            });
        }
        if let Some(i) = points
            .iter()
            .position(|p| !(p.x.is_finite() && p.y.is_finite()))
        {
            return Err(SceneError::NonFinite {
                obstacle: k,
                point: i,
            });
        }
        let n = points.len();
        for i in 0..n {
            let a = points[i];
            let b = points[(i + 1) % n];
            if a == b {
                return Err(SceneError::DegenerateEdge {
                    obstacle: k,
                    edge: i,
                });
            }
            walls.push(Wall::new(WallId(walls.len()), a, b));
        }
    }
    Ok(walls)
}

/// Distinct wall endpoints, each tagged with the wall it begins and the wall it ends.
///
/// Positions are merged under `cfg.same_position`. When several walls meet at
/// one endpoint only the last processed wall is remembered per slot.
pub fn index_endpoints(walls: &[Wall], cfg: GeomCfg) -> Vec<Endpoint> {
    let mut endpoints: Vec<Endpoint> = Vec::with_capacity(walls.len() * 2);
    for wall in walls {
        for p in [wall.a, wall.b] {
            if !endpoints.iter().any(|e| cfg.same_position(e.position, p)) {
                endpoints.push(Endpoint {
                    id: EndpointId(endpoints.len()),
                    position: p,
                    begins: None,
                    ends: None,
                });
            }
        }
    }
    for wall in walls {
        for e in endpoints.iter_mut() {
            if cfg.same_position(e.position, wall.a) {
                e.begins = Some(wall.id);
            } else if cfg.same_position(e.position, wall.b) {
                e.ends = Some(wall.id);
            }
        }
    }
    endpoints
}
