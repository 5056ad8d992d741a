//! Data types for walls, endpoints and the inputs they are built from.
//!
//! Kept small and explicit to make `build` and the light pipeline easy to read.

use std::fmt;

use nalgebra::Vector2;

use crate::geom::Segment;

/// Arena index of a wall inside one `Geometry` snapshot.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct WallId(pub usize);

/// Arena index of an endpoint inside one `Geometry` snapshot.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct EndpointId(pub usize);

/// Occluding segment: an obstacle edge or one side of the area border.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Wall {
    pub id: WallId,
    pub a: Vector2<f64>,
    pub b: Vector2<f64>,
    pub centroid: Vector2<f64>,
}

impl Wall {
    pub(crate) fn new(id: WallId, a: Vector2<f64>, b: Vector2<f64>) -> Self {
        Self {
            id,
            a,
            b,
            centroid: (a + b) * 0.5,
        }
    }
    #[inline]
    pub fn segment(&self) -> Segment {
        Segment::new(self.a, self.b)
    }
}

/// Distinct position where walls terminate.
///
/// `begins` is the wall whose first vertex sits here, `ends` the wall whose
/// second vertex sits here. Only the last assignment is remembered when
/// several walls meet at one position.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Endpoint {
    pub id: EndpointId,
    pub position: Vector2<f64>,
    pub begins: Option<WallId>,
    pub ends: Option<WallId>,
}

/// Rectangular bounds with the lower-left corner at the origin.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Area {
    pub width: f64,
    pub height: f64,
}

impl Area {
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    /// Corners counter-clockwise, starting at the lower-right one.
    pub fn corners(&self) -> [Vector2<f64>; 4] {
        [
            Vector2::new(self.width, 0.0),
            Vector2::new(self.width, self.height),
            Vector2::new(0.0, self.height),
            Vector2::new(0.0, 0.0),
        ]
    }

    /// The four border segments, each starting where the previous one ends.
    pub fn borders(&self) -> [Segment; 4] {
        let c = self.corners();
        [
            Segment::new(c[0], c[1]),
            Segment::new(c[1], c[2]),
            Segment::new(c[2], c[3]),
            Segment::new(c[3], c[0]),
        ]
    }

    pub fn contains(&self, p: Vector2<f64>) -> bool {
        (0.0..=self.width).contains(&p.x) && (0.0..=self.height).contains(&p.y)
    }
}

/// Anything that exposes a closed boundary outline.
pub trait Occluder {
    /// Ordered boundary points; the closing edge last → first is implied.
    fn boundary(&self) -> &[Vector2<f64>];
}

/// Plain polygonal obstacle.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Obstacle {
    pub points: Vec<Vector2<f64>>,
}

impl Obstacle {
    pub fn new(points: Vec<Vector2<f64>>) -> Self {
        Self { points }
    }

    /// Axis-aligned rectangle, counter-clockwise from `min`.
    pub fn rect(min: Vector2<f64>, max: Vector2<f64>) -> Self {
        Self::new(vec![
            min,
            Vector2::new(max.x, min.y),
            max,
            Vector2::new(min.x, max.y),
        ])
    }
}

impl Occluder for Obstacle {
    fn boundary(&self) -> &[Vector2<f64>] {
        &self.points
    }
}

impl Occluder for Vec<Vector2<f64>> {
    fn boundary(&self) -> &[Vector2<f64>] {
        self
    }
}

impl Occluder for [Vector2<f64>] {
    fn boundary(&self) -> &[Vector2<f64>] {
        self
    }
}

impl<T: Occluder + ?Sized> Occluder for &T {
    fn boundary(&self) -> &[Vector2<f64>] {
        (**self).boundary()
    }
}

/// Malformed scene input.
#[derive(Debug, Clone, PartialEq)]
pub enum SceneError {
    /// Area extents must be finite and strictly positive.
    InvalidArea { width: f64, height: f64 },
    /// Obstacle outline needs at least two points.
    TooFewPoints { obstacle: usize, points: usize },
    /// Two consecutive outline points coincide (edge `edge` would be a point).
    DegenerateEdge { obstacle: usize, edge: usize },
    /// NaN or infinite coordinate.
    NonFinite { obstacle: usize, point: usize },
}

impl fmt::Display for SceneError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SceneError::InvalidArea { width, height } => {
                write!(f, "area extents must be positive and finite (got {width} x {height})")
            }
            SceneError::TooFewPoints { obstacle, points } => write!(
                f,
                "obstacle {obstacle} has {points} point(s); at least 2 are required"
            ),
            SceneError::DegenerateEdge { obstacle, edge } => write!(
                f,
                "obstacle {obstacle} edge {edge} is degenerate (both ends coincide)"
            ),
            SceneError::NonFinite { obstacle, point } => {
                write!(f, "obstacle {obstacle} point {point} is not finite")
            }
        }
    }
}

impl std::error::Error for SceneError {}
