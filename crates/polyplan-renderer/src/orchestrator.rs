use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use polyplan_core::cspace::ConfigurationSpaceBuilder;
use polyplan_core::geometry::Point;
use polyplan_core::planning::{polyline_length, CoefficientSolver, PathFunctionBuilder, PathSampler};
use polyplan_core::scene::Scene;

use crate::compose::{conf_space_frame, work_space_frame};
use crate::error::RenderError;
use crate::painter::{paint_frame, OutputFormat};
use crate::render_data::RenderFrame;
use crate::settings::RenderSettings;

/// Start and goal of the path drawn over both views.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PathRequest {
    pub start: Point,
    pub goal: Point,
}

/// What to draw and where to write it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RenderRequest {
    pub work_space_output: PathBuf,
    pub conf_space_output: PathBuf,
    /// Corner markers drawn on both views.
    #[serde(default)]
    pub work_space_limits: Vec<Point>,
    #[serde(default)]
    pub path: Option<PathRequest>,
}

/// Summary of a finished render.
#[derive(Debug, Clone, Serialize)]
pub struct RenderReport {
    pub outputs: Vec<PathBuf>,
    pub obstacle_count: usize,
    pub c_obstacle_count: usize,
    pub path_points: usize,
    pub path_length: f64,
}

/// Both views of a scene, ready to paint.
#[derive(Debug, Clone)]
pub struct ComposedViews {
    pub work_space: RenderFrame,
    pub conf_space: RenderFrame,
    pub path: Option<Vec<Point>>,
    pub c_obstacle_count: usize,
}

/// Drives path sampling, configuration-space construction and painting
/// for one scene at a time.
pub struct SceneRenderer<'a> {
    cspace: &'a dyn ConfigurationSpaceBuilder,
    sampler: PathSampler<'a>,
    settings: RenderSettings,
}

impl<'a> SceneRenderer<'a> {
    pub fn new(
        cspace: &'a dyn ConfigurationSpaceBuilder,
        solver: &'a dyn CoefficientSolver,
        builder: &'a dyn PathFunctionBuilder,
        settings: RenderSettings,
    ) -> Self {
        Self {
            cspace,
            sampler: PathSampler::new(solver, builder),
            settings,
        }
    }

    pub fn settings(&self) -> &RenderSettings {
        &self.settings
    }

    /// Run every collaborator and build both frames. Nothing is written.
    pub fn compose(&self, scene: &Scene, request: &RenderRequest) -> Result<ComposedViews, RenderError> {
        let path = match &request.path {
            Some(p) => {
                let points = self.sampler.find_polynomial_path(p.start, p.goal)?;
                log::info!(
                    "Sampled {} path points, length {:.4}",
                    points.len(),
                    polyline_length(&points)
                );
                Some(points)
            }
            None => None,
        };

        let robot = scene.robot_points();
        let c_obstacles = self
            .cspace
            .make_configuration_space(&robot, &scene.obstacle_points())?;
        log::info!(
            "Configuration space has {} obstacles for {} workspace obstacles",
            c_obstacles.len(),
            scene.obstacles.len()
        );

        let limits = &request.work_space_limits;
        Ok(ComposedViews {
            work_space: work_space_frame(scene, limits, path.as_deref()),
            conf_space: conf_space_frame(scene, &c_obstacles, limits, path.as_deref()),
            c_obstacle_count: c_obstacles.len(),
            path,
        })
    }

    /// Compose both views and write them. Output formats and collaborators
    /// are checked before the first file is touched.
    pub fn render(&self, scene: &Scene, request: &RenderRequest) -> Result<RenderReport, RenderError> {
        OutputFormat::from_path(&request.work_space_output)?;
        OutputFormat::from_path(&request.conf_space_output)?;

        let views = self.compose(scene, request)?;

        paint_frame(&views.work_space, &request.work_space_output, &self.settings)?;
        paint_frame(&views.conf_space, &request.conf_space_output, &self.settings)?;

        let path = views.path.unwrap_or_default();
        Ok(RenderReport {
            outputs: vec![
                request.work_space_output.clone(),
                request.conf_space_output.clone(),
            ],
            obstacle_count: scene.obstacles.len(),
            c_obstacle_count: views.c_obstacle_count,
            path_points: path.len(),
            path_length: polyline_length(&path),
        })
    }
}
