use nalgebra::Vector2;

use crate::geom::{point_in_polygon, polygon_area};

use super::ray::Ray;

/// Result of one light update.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Visibility {
    pub origin: Vector2<f64>,
    /// Final rays sorted by target angle.
    pub rays: Vec<Ray>,
    /// Ray targets in the same order; implicitly closed.
    pub polygon: Vec<Vector2<f64>>,
}

impl Visibility {
    pub fn is_empty(&self) -> bool {
        self.polygon.is_empty()
    }

    /// Signed area (positive: vertices run counter-clockwise).
    pub fn area(&self) -> f64 {
        polygon_area(&self.polygon)
    }

    pub fn contains(&self, p: Vector2<f64>) -> bool {
        point_in_polygon(p, &self.polygon)
    }

    /// Triangle fan around the origin, one triangle per polygon edge.
    pub fn triangles(&self) -> Vec<[Vector2<f64>; 3]> {
        let n = self.polygon.len();
        if n < 2 {
            return Vec::new();
        }
        (0..n)
            .map(|i| [self.origin, self.polygon[i], self.polygon[(i + 1) % n]])
            .collect()
    }
}

/// Sort rays by target angle (stable on ties) and read off the polygon.
pub fn assemble_polygon(origin: Vector2<f64>, rays: Vec<Ray>) -> Visibility {
    let mut keyed: Vec<(f64, Ray)> = rays.into_iter().map(|r| (r.angle(), r)).collect();
    keyed.sort_by(|a, b| a.0.partial_cmp(&b.0).unwrap_or(std::cmp::Ordering::Equal));
    let rays: Vec<Ray> = keyed.into_iter().map(|(_, r)| r).collect();
    let polygon = rays.iter().map(|r| r.target).collect();
    Visibility {
        origin,
        rays,
        polygon,
    }
}
