//! Renders the workspace and configuration-space figures for a robot scene.
//!
//! Usage: `polyplan-viz [CONFIG]`, where `CONFIG` is an optional harness
//! JSON file. Without it the default scene and output paths are used.

mod config;

use std::env;
use std::path::PathBuf;

use anyhow::{Context, Result};

use polyplan_core::{CubicPolynomialSolver, MinkowskiConfigurationSpace, PolynomialPathBuilder, Scene};
use polyplan_renderer::SceneRenderer;

use crate::config::{HarnessConfig, SceneSource};

fn load_scene(source: &SceneSource) -> Result<Scene> {
    match source {
        SceneSource::File { path } => polyplan_io::load_scene(path)
            .with_context(|| format!("failed to load scene {}", path.display())),
        SceneSource::ReferenceExample => {
            log::info!("Using the built-in reference scene");
            Ok(Scene::reference_example())
        }
    }
}

fn run() -> Result<()> {
    let config = match env::args_os().nth(1).map(PathBuf::from) {
        Some(path) => HarnessConfig::load(&path)?,
        None => HarnessConfig::default(),
    };

    let scene = load_scene(&config.scene)?;

    let cspace = MinkowskiConfigurationSpace;
    let solver = CubicPolynomialSolver::default();
    let builder = PolynomialPathBuilder;
    let renderer = SceneRenderer::new(&cspace, &solver, &builder, config.render.clone());

    let report = renderer
        .render(&scene, &config.render_request())
        .context("failed to render scene")?;

    for output in &report.outputs {
        log::info!("Saved {}", output.display());
    }
    log::info!(
        "{} obstacles, {} C-obstacles, path of {} points ({:.4} long)",
        report.obstacle_count,
        report.c_obstacle_count,
        report.path_points,
        report.path_length
    );
    Ok(())
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    run()
}
