use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};
use tracing_subscriber::{fmt::SubscriberBuilder, EnvFilter};

mod provenance;
mod scene;

use provenance::{write_sidecar, Payload};
use scene::{SceneFile, VisibilityOut};

#[derive(Parser)]
#[command(name = "cli")]
#[command(about = "Visibility polygons for 2D point lights")]
struct Cmd {
    /// Optional run tag; propagated to outputs and logs
    #[arg(long)]
    tag: Option<String>,

    #[command(subcommand)]
    action: Action,
}

#[derive(Subcommand)]
enum Action {
    /// Solve a JSON scene and write the visibility polygon as JSON
    Run {
        #[arg(long)]
        scene: PathBuf,
        #[arg(long)]
        out: PathBuf,
    },
    /// Solve the built-in square-room scene
    Demo {
        #[arg(long)]
        out: PathBuf,
        #[arg(long, default_value_t = 50.0)]
        x: f64,
        #[arg(long, default_value_t = 10.0)]
        y: f64,
    },
    /// Print a small provenance JSON block
    Report,
}

fn main() -> Result<()> {
    SubscriberBuilder::default()
        .with_env_filter(EnvFilter::from_default_env())
        .with_target(false)
        .init();
    let cmd = Cmd::parse();
    match cmd.action {
        Action::Run { scene, out } => run(&scene, &out, cmd.tag),
        Action::Demo { out, x, y } => demo(x, y, &out, cmd.tag),
        Action::Report => report(cmd.tag),
    }
}

fn run(scene_path: &Path, out: &Path, tag: Option<String>) -> Result<()> {
    tracing::info!(scene = %scene_path.display(), out = %out.display(), tag = ?tag, "run");
    let scene = SceneFile::load(scene_path)?;
    let params = serde_json::json!({
        "scene": scene_path.to_string_lossy(),
        "light": scene.light,
        "obstacles": scene.obstacles.len(),
    });
    solve_and_write(&scene, out, Payload::new(params, tag))
}

fn demo(x: f64, y: f64, out: &Path, tag: Option<String>) -> Result<()> {
    tracing::info!(x, y, out = %out.display(), tag = ?tag, "demo");
    let scene = SceneFile::demo(x, y);
    let params = serde_json::json!({ "scene": "demo", "light": scene.light });
    solve_and_write(&scene, out, Payload::new(params, tag))
}

fn solve_and_write(scene: &SceneFile, out: &Path, payload: Payload) -> Result<()> {
    let light = scene.solve()?;
    let vis = VisibilityOut::from_light(&light);
    tracing::info!(
        walls = vis.walls,
        endpoints = vis.endpoints,
        vertices = vis.polygon.len(),
        area = vis.area,
        "solved"
    );
    write_json(out, &vis)?;
    let prov = write_sidecar(out, payload)?;
    tracing::info!(provenance = %prov.display(), "wrote");
    Ok(())
}

fn write_json<T: serde::Serialize>(out: &Path, value: &T) -> Result<()> {
    if let Some(parent) = out.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("creating output dir {}", parent.display()))?;
        }
    }
    std::fs::write(out, serde_json::to_vec_pretty(value)?)
        .with_context(|| format!("writing {}", out.display()))
}

fn report(tag: Option<String>) -> Result<()> {
    let obj = provenance::provenance_doc(serde_json::json!({}), tag.as_deref(), &[]);
    println!("{}", serde_json::to_string_pretty(&obj)?);
    Ok(())
}
