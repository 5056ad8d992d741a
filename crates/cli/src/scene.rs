//! JSON scene input and visibility output.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;
use umbra::prelude::*;

#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
pub struct SceneFile {
    pub area: AreaSpec,
    #[serde(default)]
    pub obstacles: Vec<Vec<[f64; 2]>>,
    pub light: LightSpec,
}

#[derive(Debug, Clone, Copy, Deserialize, Serialize, PartialEq)]
pub struct AreaSpec {
    pub width: f64,
    pub height: f64,
}

/// Light fields other than the position fall back to `LightParams::default()`.
#[derive(Debug, Clone, Copy, Deserialize, Serialize, PartialEq)]
pub struct LightSpec {
    pub x: f64,
    pub y: f64,
    #[serde(default)]
    pub height: Option<f64>,
    #[serde(default)]
    pub power: Option<f64>,
    #[serde(default)]
    pub arc_angle: Option<f64>,
    #[serde(default)]
    pub color: Option<[u8; 4]>,
}

impl LightSpec {
    pub fn params(&self) -> LightParams {
        let d = LightParams::default();
        LightParams {
            x: self.x,
            y: self.y,
            height: self.height.unwrap_or(d.height),
            power: self.power.unwrap_or(d.power),
            arc_angle: self.arc_angle.unwrap_or(d.arc_angle),
            direction: d.direction,
            color: self.color.unwrap_or(d.color),
        }
    }
}

impl SceneFile {
    pub fn load(path: &Path) -> Result<Self> {
        let raw =
            std::fs::read(path).with_context(|| format!("reading scene {}", path.display()))?;
        serde_json::from_slice(&raw).with_context(|| format!("parsing scene {}", path.display()))
    }

    pub fn area(&self) -> Area {
        Area::new(self.area.width, self.area.height)
    }

    pub fn obstacles(&self) -> Vec<Obstacle> {
        self.obstacles
            .iter()
            .map(|pts| Obstacle::new(pts.iter().map(|&[x, y]| Vec2::new(x, y)).collect()))
            .collect()
    }

    /// Build the light and run one update.
    pub fn solve(&self) -> Result<Light> {
        let mut light = Light::new(self.light.params(), self.area(), &self.obstacles())
            .context("building light")?;
        light.update();
        Ok(light)
    }

    /// Light below a 20×20 square in a 100×100 room.
    pub fn demo(x: f64, y: f64) -> Self {
        Self {
            area: AreaSpec {
                width: 100.0,
                height: 100.0,
            },
            obstacles: vec![vec![[40.0, 40.0], [60.0, 40.0], [60.0, 60.0], [40.0, 60.0]]],
            light: LightSpec {
                x,
                y,
                height: None,
                power: None,
                arc_angle: None,
                color: None,
            },
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RayOut {
    pub origin: [f64; 2],
    pub target: [f64; 2],
    pub kind: String,
    pub walls: [Option<usize>; 2],
    pub hit: Option<usize>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct VisibilityOut {
    pub origin: [f64; 2],
    pub polygon: Vec<[f64; 2]>,
    pub rays: Vec<RayOut>,
    pub walls: usize,
    pub endpoints: usize,
    pub area: f64,
}

impl VisibilityOut {
    pub fn from_light(light: &Light) -> Self {
        let vis = light.visibility();
        let kind = |k: RayKind| match k {
            RayKind::Primary => "primary",
            RayKind::OffsetCw => "offset_cw",
            RayKind::OffsetCcw => "offset_ccw",
            RayKind::Anchor => "anchor",
        };
        Self {
            origin: [vis.origin.x, vis.origin.y],
            polygon: vis.polygon.iter().map(|p| [p.x, p.y]).collect(),
            rays: vis
                .rays
                .iter()
                .map(|r| RayOut {
                    origin: [r.origin.x, r.origin.y],
                    target: [r.target.x, r.target.y],
                    kind: kind(r.kind).to_string(),
                    walls: [r.begins.map(|w| w.0), r.ends.map(|w| w.0)],
                    hit: r.hit.map(|w| w.0),
                })
                .collect(),
            walls: light.geometry().walls().len(),
            endpoints: light.geometry().endpoints().len(),
            area: vis.area(),
        }
    }
}
