use nalgebra::Vector2;

use crate::geom::{angle_between, Segment};
use crate::scene::WallId;

/// Why a ray was cast.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum RayKind {
    /// Aimed straight at an endpoint.
    Primary,
    /// Offset clockwise from a primary ray (smaller angle), extended to full range.
    OffsetCw,
    /// Offset counter-clockwise from a primary ray (larger angle), extended to full range.
    OffsetCcw,
    /// Fixed extra ray toward the anchor point; not range-limited.
    Anchor,
}

/// Directed segment from the light origin toward a target.
///
/// `begins`/`ends` are the walls of the endpoint that generated the ray.
/// `hit` is set once the ray has been cut at an occluding wall.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Ray {
    pub origin: Vector2<f64>,
    pub target: Vector2<f64>,
    pub kind: RayKind,
    pub begins: Option<WallId>,
    pub ends: Option<WallId>,
    pub hit: Option<WallId>,
}

impl Ray {
    pub fn new(
        origin: Vector2<f64>,
        target: Vector2<f64>,
        kind: RayKind,
        begins: Option<WallId>,
        ends: Option<WallId>,
    ) -> Self {
        Self {
            origin,
            target,
            kind,
            begins,
            ends,
            hit: None,
        }
    }

    pub(crate) fn anchor(origin: Vector2<f64>, target: Vector2<f64>) -> Self {
        Self::new(origin, target, RayKind::Anchor, None, None)
    }

    /// Replacement ray ending at `point` on wall `wall`; kind and tags are kept.
    pub fn clipped(&self, point: Vector2<f64>, wall: WallId) -> Self {
        Self {
            target: point,
            hit: Some(wall),
            ..*self
        }
    }

    #[inline]
    pub fn segment(&self) -> Segment {
        Segment::new(self.origin, self.target)
    }

    #[inline]
    pub fn length(&self) -> f64 {
        (self.target - self.origin).norm()
    }

    #[inline]
    pub fn angle(&self) -> f64 {
        angle_between(self.origin, self.target)
    }

    /// Walls this ray must not be clipped against.
    ///
    /// An uncut primary ray ends on its own endpoint's walls; a cut ray ends on
    /// the wall it was cut at. Offset and anchor rays exclude nothing.
    pub fn excludes(&self, wall: WallId) -> bool {
        match self.hit {
            Some(h) => h == wall,
            None => {
                self.kind == RayKind::Primary
                    && (self.begins == Some(wall) || self.ends == Some(wall))
            }
        }
    }
}
