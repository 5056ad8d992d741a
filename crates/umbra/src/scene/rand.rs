//! Random obstacle layouts (convex blobs + replay tokens).
//!
//! Purpose
//! - Deterministic scenes for property tests and benches: reproducible from a
//!   `(seed, index)` token, no obstacle overlaps, everything inside the area.
//!
//! Model
//! - Each obstacle is a convex polygon: `n` jittered angles around a center,
//!   one radius per obstacle. Centers are drawn by rejection so bounding
//!   circles keep `gap` distance from each other and from the border.

use nalgebra::Vector2;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use super::types::{Area, Obstacle};

/// Count distribution for obstacles or vertices.
#[derive(Clone, Copy, Debug)]
pub enum Count {
    Fixed(usize),
    Uniform { min: usize, max: usize },
}
impl Count {
    fn sample<R: Rng>(&self, rng: &mut R, floor: usize) -> usize {
        match *self {
            Count::Fixed(n) => n.max(floor),
            Count::Uniform { min, max } => {
                let lo = min.max(floor);
                let hi = max.max(lo);
                rng.gen_range(lo..=hi)
            }
        }
    }
}

/// Layout sampler configuration.
#[derive(Clone, Copy, Debug)]
pub struct LayoutCfg {
    pub obstacles: Count,
    /// Vertices per obstacle; at least 3.
    pub vertices: Count,
    pub radius_min: f64,
    pub radius_max: f64,
    /// Minimum clearance between obstacles and to the border.
    pub gap: f64,
    /// Angular jitter as a fraction of the base spacing. Clamped to [0, 0.45].
    pub angle_jitter_frac: f64,
    /// Center draws per obstacle before giving up on it.
    pub max_attempts: usize,
}
impl Default for LayoutCfg {
    fn default() -> Self {
        Self {
            obstacles: Count::Uniform { min: 3, max: 8 },
            vertices: Count::Uniform { min: 3, max: 7 },
            radius_min: 4.0,
            radius_max: 12.0,
            gap: 2.0,
            angle_jitter_frac: 0.3,
            max_attempts: 64,
        }
    }
}

/// Replay token to make draws reproducible and indexable.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ReplayToken {
    pub seed: u64,
    pub index: u64,
}
impl ReplayToken {
    #[inline]
    fn to_std_rng(self) -> StdRng {
        // SplitMix64 finalizer.
        fn mix(mut x: u64) -> u64 {
            x ^= x >> 30;
            x = x.wrapping_mul(0xbf58476d1ce4e5b9);
            x ^= x >> 27;
            x = x.wrapping_mul(0x94d049bb133111eb);
            x ^ (x >> 31)
        }
        let k = mix(self.seed ^ mix(self.index.wrapping_add(0x9e3779b97f4a7c15)));
        StdRng::seed_from_u64(k)
    }
}

/// Draw a layout of non-overlapping convex obstacles inside `area`.
///
/// Obstacles whose center cannot be placed within `max_attempts` are dropped,
/// so the result may hold fewer obstacles than sampled.
pub fn draw_layout(area: Area, cfg: LayoutCfg, tok: ReplayToken) -> Vec<Obstacle> {
    let mut rng = tok.to_std_rng();
    let wanted = cfg.obstacles.sample(&mut rng, 0);
    let r_lo = cfg.radius_min.max(1e-6);
    let r_hi = cfg.radius_max.max(r_lo);
    let gap = cfg.gap.max(0.0);
    let mut placed: Vec<(Vector2<f64>, f64)> = Vec::with_capacity(wanted);
    let mut out = Vec::with_capacity(wanted);
    for _ in 0..wanted {
        let r = rng.gen_range(r_lo..=r_hi);
        let margin = r + gap;
        if 2.0 * margin >= area.width || 2.0 * margin >= area.height {
            continue;
        }
        let mut center = None;
        for _ in 0..cfg.max_attempts.max(1) {
            let c = Vector2::new(
                rng.gen_range(margin..area.width - margin),
                rng.gen_range(margin..area.height - margin),
            );
            if placed
                .iter()
                .all(|&(pc, pr)| (pc - c).norm() > pr + r + gap)
            {
                center = Some(c);
                break;
            }
        }
        let Some(c) = center else {
            continue;
        };
        let n = cfg.vertices.sample(&mut rng, 3);
        out.push(convex_blob(&mut rng, c, r, n, cfg.angle_jitter_frac));
        placed.push((c, r));
    }
    out
}

/// Counter-clockwise polygon with `n` jittered vertices on a circle.
fn convex_blob<R: Rng>(
    rng: &mut R,
    center: Vector2<f64>,
    radius: f64,
    n: usize,
    jitter_frac: f64,
) -> Obstacle {
    let aj = jitter_frac.clamp(0.0, 0.45);
    let delta = std::f64::consts::TAU / (n as f64);
    let phase = rng.gen::<f64>() * delta;
    let points = (0..n)
        .map(|k| {
            let jitter = (rng.gen::<f64>() * 2.0 - 1.0) * aj * delta;
            let th = phase + (k as f64) * delta + jitter;
            center + Vector2::new(th.cos(), th.sin()) * radius
        })
        .collect();
    Obstacle::new(points)
}
