//! # Polyplan Core
//!
//! Geometry primitives for robot motion-planning scenes, angular vertex
//! ordering for fan-filled convex polygons, and dense sampling of polynomial
//! paths between oriented poses.
//!
//! Coefficient solving, path-function construction and configuration-space
//! construction sit behind the [`CoefficientSolver`], [`PathFunctionBuilder`]
//! and [`ConfigurationSpaceBuilder`] traits; simple implementations of each
//! are provided for the harness.

pub mod geometry;
pub mod ordering;
pub mod planning;
pub mod polynomial;
pub mod cspace;
pub mod scene;
pub mod error;

pub use geometry::{BBox, Point, Polygon, Position, Vertex};
pub use ordering::{mean_point, sort_by_angle};
pub use planning::{
    CoefficientSolver, Coefficients, PathFunctionBuilder, PathFunctions, PathSampler,
};
pub use polynomial::{CubicPolynomialSolver, PolynomialPathBuilder};
pub use cspace::{ConfigurationSpaceBuilder, MinkowskiConfigurationSpace};
pub use scene::Scene;
pub use error::{PlanError, PlanResult};
