//! Basic 2D types and tolerances shared by the wall builder and the light.
//!
//! - `GeomCfg`: centralizes epsilons for determinants and endpoint dedup.
//! - `Segment`: closed segment `a → b` with crossing/intersection helpers.
//! - `Quadrant`, `Half`: coarse position of a point relative to a center.
//!
//! Code cross-refs: `util::{orientation, segment_intersection}`, `scene::Geometry`

use nalgebra::Vector2;

use super::util::{crosses, segment_intersection};

/// Geometry configuration (tolerances).
#[derive(Clone, Copy, Debug)]
pub struct GeomCfg {
    /// Determinants with `|det| <= eps_det` are treated as parallel lines.
    pub eps_det: f64,
    /// Endpoint dedup radius. `0.0` merges only bitwise-equal positions;
    /// a positive value merges corners closer than this distance, which
    /// changes endpoint counts for near-coincident input.
    pub eps_dedup: f64,
}

impl Default for GeomCfg {
    fn default() -> Self {
        Self {
            eps_det: 1e-12,
            eps_dedup: 0.0,
        }
    }
}

impl GeomCfg {
    /// Position equality under the dedup policy.
    #[inline]
    pub fn same_position(&self, p: Vector2<f64>, q: Vector2<f64>) -> bool {
        if self.eps_dedup > 0.0 {
            (p - q).norm() <= self.eps_dedup
        } else {
            p == q
        }
    }
}

/// Closed segment `a → b`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Segment {
    pub a: Vector2<f64>,
    pub b: Vector2<f64>,
}

impl Segment {
    #[inline]
    pub fn new(a: Vector2<f64>, b: Vector2<f64>) -> Self {
        Self { a, b }
    }
    #[inline]
    pub fn length(&self) -> f64 {
        (self.b - self.a).norm()
    }
    #[inline]
    pub fn midpoint(&self) -> Vector2<f64> {
        (self.a + self.b) * 0.5
    }
    #[inline]
    pub fn is_degenerate(&self) -> bool {
        self.a == self.b
    }
    /// Interiors meet in exactly one point; touching and collinear overlap do not count.
    #[inline]
    pub fn crosses(&self, other: &Segment) -> bool {
        crosses(self.a, self.b, other.a, other.b)
    }
    /// Intersection of the supporting lines, or None if (near) parallel.
    #[inline]
    pub fn intersection(&self, other: &Segment, cfg: GeomCfg) -> Option<Vector2<f64>> {
        segment_intersection(self.a, self.b, other.a, other.b, cfg.eps_det)
    }
}

/// Quadrant of a point around a center, split at the center's axes.
///
/// Points on an axis fall through to `LowerRight`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Quadrant {
    UpperLeft,
    UpperRight,
    LowerLeft,
    LowerRight,
}

impl Quadrant {
    pub fn of(p: Vector2<f64>, center: Vector2<f64>) -> Self {
        if p.x < center.x && p.y > center.y {
            Quadrant::UpperLeft
        } else if p.x < center.x && p.y < center.y {
            Quadrant::LowerLeft
        } else if p.x > center.x && p.y > center.y {
            Quadrant::UpperRight
        } else {
            Quadrant::LowerRight
        }
    }
}

/// Half-plane shared by two points relative to a center.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Half {
    Left,
    Right,
    Lower,
    Upper,
    /// No common half-plane.
    Diagonal,
}

impl Half {
    /// Checks left, right, lower, upper in that order; first match wins.
    pub fn shared(p: Vector2<f64>, q: Vector2<f64>, center: Vector2<f64>) -> Self {
        if p.x < center.x && q.x < center.x {
            Half::Left
        } else if p.x > center.x && q.x > center.x {
            Half::Right
        } else if p.y < center.y && q.y < center.y {
            Half::Lower
        } else if p.y > center.y && q.y > center.y {
            Half::Upper
        } else {
            Half::Diagonal
        }
    }
}
