//! JSON scene files.
//!
//! A scene file is an array of `{ "name": ..., "vertices": [{ "x", "y" }] }`
//! objects. The last entry is the robot footprint, every other entry is an
//! obstacle. Only the shape of the document is checked; convexity and
//! duplicate vertices are not.

use std::fs;
use std::io;
use std::path::Path;

use thiserror::Error;

use polyplan_core::geometry::Polygon;
use polyplan_core::scene::Scene;

#[derive(Error, Debug)]
pub enum SceneError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("Malformed scene JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Scene contains no polygons")]
    EmptyScene,
}

/// Parse the polygon array in file order.
pub fn parse_polygons(json: &str) -> Result<Vec<Polygon>, SceneError> {
    Ok(serde_json::from_str(json)?)
}

/// Parse a scene document, taking the last polygon as the robot.
pub fn parse_scene(json: &str) -> Result<Scene, SceneError> {
    let polygons = parse_polygons(json)?;
    for polygon in &polygons {
        log::debug!(
            "polygon '{}' with {} vertices",
            polygon.name,
            polygon.vertex_count()
        );
    }
    Scene::from_polygons(polygons).ok_or(SceneError::EmptyScene)
}

/// Read and parse a scene file.
pub fn load_scene(path: &Path) -> Result<Scene, SceneError> {
    let json = fs::read_to_string(path)?;
    let scene = parse_scene(&json)?;
    log::info!(
        "Loaded scene {}: robot '{}', {} obstacles",
        path.display(),
        scene.robot.name,
        scene.obstacles.len()
    );
    Ok(scene)
}

/// Serialize a scene back into the positional array format.
pub fn scene_to_json(scene: &Scene) -> Result<String, SceneError> {
    let polygons: Vec<&Polygon> = scene
        .obstacles
        .iter()
        .chain(std::iter::once(&scene.robot))
        .collect();
    Ok(serde_json::to_string_pretty(&polygons)?)
}

/// Write a scene file readable by [`load_scene`].
pub fn save_scene(scene: &Scene, path: &Path) -> Result<(), SceneError> {
    fs::write(path, scene_to_json(scene)?)?;
    log::info!("Wrote scene {}", path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use polyplan_core::geometry::Vertex;

    const TWO_POLYGONS: &str = r#"[
        {
            "name": "Cuboid",
            "vertices": [
                {"x": 1.7, "y": 1.5},
                {"x": 1.7, "y": 1.7},
                {"x": 1.5, "y": 1.7},
                {"x": 1.5, "y": 1.5}
            ]
        },
        {
            "name": "Pioneer",
            "vertices": [
                {"x": -1.3, "y": 0.0},
                {"x": -1.2, "y": 0.1},
                {"x": -1.2, "y": -0.1}
            ]
        }
    ]"#;

    #[test]
    fn test_parse_scene_splits_robot() {
        let scene = parse_scene(TWO_POLYGONS).unwrap();
        assert_eq!(scene.robot.name, "Pioneer");
        assert_eq!(scene.robot.vertices[1], Vertex::new(-1.2, 0.1));
        assert_eq!(scene.obstacles.len(), 1);
        assert_eq!(scene.obstacles[0].name, "Cuboid");
        assert_eq!(scene.obstacles[0].vertex_count(), 4);
    }

    #[test]
    fn test_vertices_map_one_to_one_in_order() {
        let polygons = parse_polygons(TWO_POLYGONS).unwrap();
        let xs: Vec<f64> = polygons[0].vertices.iter().map(|v| v.x).collect();
        assert_eq!(xs, vec![1.7, 1.7, 1.5, 1.5]);
    }

    #[test]
    fn test_missing_vertices_is_rejected() {
        let json = r#"[{"name": "a", "vertices": [{"x": 0, "y": 0}]}, {"name": "robot"}]"#;
        let err = parse_scene(json).unwrap_err();
        assert!(matches!(err, SceneError::Json(_)));
        assert!(err.to_string().contains("vertices"));
    }

    #[test]
    fn test_wrong_shape_is_rejected() {
        let json = r#"[{"name": "a", "vertices": [{"x": "zero", "y": 0}]}]"#;
        assert!(matches!(parse_scene(json), Err(SceneError::Json(_))));

        let json = r#"{"name": "a", "vertices": []}"#;
        assert!(matches!(parse_scene(json), Err(SceneError::Json(_))));
    }

    #[test]
    fn test_empty_array_is_rejected() {
        assert!(matches!(parse_scene("[]"), Err(SceneError::EmptyScene)));
    }

    #[test]
    fn test_missing_file_is_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let err = load_scene(&dir.path().join("absent.json")).unwrap_err();
        assert!(matches!(err, SceneError::Io(_)));
    }

    #[test]
    fn test_save_and_load_scene() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("scene.json");
        let scene = parse_scene(TWO_POLYGONS).unwrap();

        save_scene(&scene, &path).unwrap();
        let loaded = load_scene(&path).unwrap();
        assert_eq!(loaded, scene);
    }
}
