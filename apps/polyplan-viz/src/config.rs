use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use polyplan_core::geometry::Point;
use polyplan_renderer::{PathRequest, RenderRequest, RenderSettings};

/// Where the scene comes from.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum SceneSource {
    File { path: PathBuf },
    /// Built-in triangle robot and square obstacle.
    ReferenceExample,
}

/// Harness settings. Every field is optional in the JSON file.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct HarnessConfig {
    pub scene: SceneSource,
    pub work_space_output: PathBuf,
    pub conf_space_output: PathBuf,
    pub work_space_limits: Vec<Point>,
    pub path: Option<PathRequest>,
    pub render: RenderSettings,
}

impl Default for HarnessConfig {
    fn default() -> Self {
        let output = Path::new("output");
        Self {
            scene: SceneSource::File {
                path: output.join("obstacles_vertices.json"),
            },
            work_space_output: output.join("work_space.svg"),
            conf_space_output: output.join("conf_space.svg"),
            work_space_limits: vec![
                Point::new(-2.1824, 2.1908),
                Point::new(2.1472, 2.1908),
                Point::new(-2.1472, -2.1908),
                Point::new(2.1472, -2.1908),
            ],
            path: Some(PathRequest {
                start: Point::new(-1.2705, 0.047),
                goal: Point::new(-0.3835, 1.322),
            }),
            render: RenderSettings::default(),
        }
    }
}

impl HarnessConfig {
    pub fn load(path: &Path) -> Result<Self> {
        let json = fs::read_to_string(path)
            .with_context(|| format!("failed to read config {}", path.display()))?;
        serde_json::from_str(&json)
            .with_context(|| format!("failed to parse config {}", path.display()))
    }

    pub fn render_request(&self) -> RenderRequest {
        RenderRequest {
            work_space_output: self.work_space_output.clone(),
            conf_space_output: self.conf_space_output.clone(),
            work_space_limits: self.work_space_limits.clone(),
            path: self.path,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_simulation_run() {
        let config = HarnessConfig::default();
        assert_eq!(
            config.scene,
            SceneSource::File {
                path: PathBuf::from("output/obstacles_vertices.json")
            }
        );
        assert_eq!(config.work_space_limits.len(), 4);
        let path = config.path.unwrap();
        assert_eq!(path.start, Point::new(-1.2705, 0.047));
        assert_eq!(config.render.dpi, 1200);
    }

    #[test]
    fn test_partial_file_keeps_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let file = dir.path().join("harness.json");
        fs::write(
            &file,
            r#"{
                "scene": {"kind": "reference_example"},
                "path": null,
                "render": {"dpi": 300}
            }"#,
        )
        .unwrap();

        let config = HarnessConfig::load(&file).unwrap();
        assert_eq!(config.scene, SceneSource::ReferenceExample);
        assert!(config.path.is_none());
        assert_eq!(config.render.dpi, 300);
        assert_eq!(config.conf_space_output, PathBuf::from("output/conf_space.svg"));

        let request = config.render_request();
        assert!(request.path.is_none());
        assert_eq!(request.work_space_limits.len(), 4);
    }

    #[test]
    fn test_missing_config_file_fails() {
        let dir = tempfile::tempdir().unwrap();
        let err = HarnessConfig::load(&dir.path().join("nope.json")).unwrap_err();
        assert!(err.to_string().contains("failed to read config"));
    }
}
