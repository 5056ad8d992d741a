//! Line-of-sight queries against a geometry snapshot.

use nalgebra::Vector2;

use crate::geom::crosses;

use super::build::Geometry;

impl Geometry {
    /// True when the segment `a`–`b` crosses no wall.
    ///
    /// Grazing a corner or running along a wall does not block sight.
    pub fn visible(&self, a: Vector2<f64>, b: Vector2<f64>) -> bool {
        !self.walls().iter().any(|w| crosses(a, b, w.a, w.b))
    }

    /// Which of `targets` are visible from `from`.
    ///
    /// Returns `(all_visible, visible_targets)` with targets in input order.
    pub fn all_visible_from(
        &self,
        from: Vector2<f64>,
        targets: &[Vector2<f64>],
    ) -> (bool, Vec<Vector2<f64>>) {
        let seen: Vec<Vector2<f64>> = targets
            .iter()
            .copied()
            .filter(|&t| self.visible(from, t))
            .collect();
        (seen.len() == targets.len(), seen)
    }
}
