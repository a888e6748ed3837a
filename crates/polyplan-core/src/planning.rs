//! Polynomial path sampling.
//!
//! The sampler does not know how coefficients are produced or how they are
//! turned into functions of `t`; it delegates both to the collaborators
//! below and only owns the sampling of `t` over `[0, 1)`.

use std::f64::consts::FRAC_PI_2;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::PlanResult;
use crate::geometry::{Point, Position};

/// Parameter increment between consecutive samples.
pub const SAMPLE_STEP: f64 = 0.001;
/// Number of samples in `[0, 1)`.
pub const SAMPLE_COUNT: usize = 1000;

/// Heading imposed on the start pose.
pub const INITIAL_HEADING: f64 = 0.0;
/// Heading imposed on the goal pose.
pub const FINAL_HEADING: f64 = FRAC_PI_2;

/// Polynomial coefficients, lowest degree first.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Coefficients(pub Vec<f64>);

impl Coefficients {
    pub fn new(values: Vec<f64>) -> Self {
        Self(values)
    }

    pub fn as_slice(&self) -> &[f64] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Degree of the polynomial, `None` when there are no coefficients.
    pub fn degree(&self) -> Option<usize> {
        self.0.len().checked_sub(1)
    }
}

pub type ScalarFn = Box<dyn Fn(f64) -> f64>;

/// The coordinate functions of a parametric path.
pub struct PathFunctions {
    pub p_x: ScalarFn,
    pub p_y: ScalarFn,
    /// Extra function handed back by the builder. Not used for sampling.
    pub heading: ScalarFn,
}

impl PathFunctions {
    pub fn new(p_x: ScalarFn, p_y: ScalarFn, heading: ScalarFn) -> Self {
        Self { p_x, p_y, heading }
    }

    pub fn point_at(&self, t: f64) -> Point {
        Point::new((self.p_x)(t), (self.p_y)(t))
    }
}

impl fmt::Debug for PathFunctions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PathFunctions").finish_non_exhaustive()
    }
}

/// Produces per-axis coefficients for a path between two poses.
pub trait CoefficientSolver {
    fn find_coefficients(
        &self,
        initial: &Position,
        final_pos: &Position,
    ) -> PlanResult<(Coefficients, Coefficients)>;
}

/// Turns per-axis coefficients into callable coordinate functions.
pub trait PathFunctionBuilder {
    fn create_path_functions(
        &self,
        x_coefficients: &Coefficients,
        y_coefficients: &Coefficients,
    ) -> PlanResult<PathFunctions>;
}

/// Parameter values `i * SAMPLE_STEP` for `i` in `0..SAMPLE_COUNT`.
pub fn sample_parameters() -> Vec<f64> {
    (0..SAMPLE_COUNT).map(|i| i as f64 * SAMPLE_STEP).collect()
}

/// Evaluate both coordinate functions at every sample parameter.
pub fn sample_path(functions: &PathFunctions) -> Vec<Point> {
    sample_parameters()
        .into_iter()
        .map(|t| functions.point_at(t))
        .collect()
}

/// Computes dense polylines between two positions using a solver and a
/// function builder.
pub struct PathSampler<'a> {
    solver: &'a dyn CoefficientSolver,
    builder: &'a dyn PathFunctionBuilder,
}

impl<'a> PathSampler<'a> {
    pub fn new(solver: &'a dyn CoefficientSolver, builder: &'a dyn PathFunctionBuilder) -> Self {
        Self { solver, builder }
    }

    /// Sample the path from `initial_pos` (heading 0) to `final_pos`
    /// (heading π/2). Collaborator errors are returned unchanged.
    pub fn find_polynomial_path(
        &self,
        initial_pos: Point,
        final_pos: Point,
    ) -> PlanResult<Vec<Point>> {
        let init = Position::at(initial_pos, INITIAL_HEADING);
        let goal = Position::at(final_pos, FINAL_HEADING);

        let (x_coefficients, y_coefficients) = self.solver.find_coefficients(&init, &goal)?;
        log::debug!(
            "path coefficients: x degree {:?}, y degree {:?}",
            x_coefficients.degree(),
            y_coefficients.degree()
        );
        let functions = self
            .builder
            .create_path_functions(&x_coefficients, &y_coefficients)?;

        Ok(sample_path(&functions))
    }
}

/// Total length of a polyline.
pub fn polyline_length(points: &[Point]) -> f64 {
    points.windows(2).map(|w| w[0].distance_to(&w[1])).sum()
}
