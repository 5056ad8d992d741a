//! Intersection resolver: cut every ray at the first wall it crosses.

use crate::geom::GeomCfg;
use crate::scene::Wall;

use super::ray::Ray;

/// Clip `rays` against `walls`, visiting walls in `order` (nearest centroid first).
///
/// A crossed ray is dropped and a replacement ending at the crossing point is
/// appended; replacements are resolved again, so every surviving ray ends at
/// its nearest occluder. Only strict crossings count, and a crossing is taken
/// only if it shortens the ray. Parallel walls never clip.
///
/// Survivors keep their relative order: uncut input rays first, then
/// replacements in the order they were made.
pub fn resolve_rays(rays: Vec<Ray>, walls: &[Wall], order: &[usize], cfg: GeomCfg) -> Vec<Ray> {
    let mut work = rays;
    let mut cut = vec![false; work.len()];
    let mut i = 0;
    while i < work.len() {
        let ray = work[i];
        let seg = ray.segment();
        let len = ray.length();
        let hit = order
            .iter()
            .map(|&k| &walls[k])
            .filter(|w| !ray.excludes(w.id))
            .find_map(|w| {
                let ws = w.segment();
                if !seg.crosses(&ws) {
                    return None;
                }
                seg.intersection(&ws, cfg)
                    .filter(|p| (*p - ray.origin).norm() < len)
                    .map(|p| (w.id, p))
            });
        if let Some((wall, point)) = hit {
            cut[i] = true;
            work.push(ray.clipped(point, wall));
            cut.push(false);
        }
        i += 1;
    }
    work.into_iter()
        .zip(cut)
        .filter_map(|(r, c)| (!c).then_some(r))
        .collect()
}
