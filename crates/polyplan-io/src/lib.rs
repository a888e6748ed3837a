//! # Polyplan I/O
//!
//! Reading and writing the JSON scene files consumed by the renderer.
//! A scene file lists obstacle polygons followed by the robot footprint.

pub mod scene_file;

pub use scene_file::{load_scene, parse_polygons, parse_scene, save_scene, scene_to_json, SceneError};
