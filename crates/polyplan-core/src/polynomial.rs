//! Cubic boundary-value polynomials.
//!
//! Each axis is `p(t) = a0 + a1 t + a2 t^2 + a3 t^3` with `p(0)` and `p(1)`
//! at the pose coordinates and end tangents along the pose headings.

use serde::{Deserialize, Serialize};

use crate::error::{PlanError, PlanResult};
use crate::geometry::Position;
use crate::planning::{CoefficientSolver, Coefficients, PathFunctionBuilder, PathFunctions};

/// Evaluate a polynomial (lowest degree first) with Horner's rule.
pub fn evaluate(coefficients: &[f64], t: f64) -> f64 {
    coefficients.iter().rev().fold(0.0, |acc, c| acc * t + c)
}

/// Coefficients of the first derivative.
pub fn derivative(coefficients: &[f64]) -> Vec<f64> {
    coefficients
        .iter()
        .enumerate()
        .skip(1)
        .map(|(power, c)| power as f64 * c)
        .collect()
}

/// Fits a cubic per axis through two oriented poses.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct CubicPolynomialSolver {
    /// Tangent magnitude relative to the start-goal distance.
    pub tangent_scale: f64,
}

impl Default for CubicPolynomialSolver {
    fn default() -> Self {
        Self { tangent_scale: 1.0 }
    }
}

impl CubicPolynomialSolver {
    pub fn new(tangent_scale: f64) -> Self {
        Self { tangent_scale }
    }

    fn cubic(p0: f64, p1: f64, d0: f64, d1: f64) -> Coefficients {
        Coefficients::new(vec![
            p0,
            d0,
            3.0 * (p1 - p0) - 2.0 * d0 - d1,
            2.0 * (p0 - p1) + d0 + d1,
        ])
    }
}

impl CoefficientSolver for CubicPolynomialSolver {
    fn find_coefficients(
        &self,
        initial: &Position,
        final_pos: &Position,
    ) -> PlanResult<(Coefficients, Coefficients)> {
        let values = [
            initial.x,
            initial.y,
            initial.theta_in_rads,
            final_pos.x,
            final_pos.y,
            final_pos.theta_in_rads,
        ];
        if values.iter().any(|v| !v.is_finite()) {
            return Err(PlanError::DegenerateInput(
                "pose contains a non-finite value".into(),
            ));
        }

        let k = initial.point().distance_to(&final_pos.point()) * self.tangent_scale;
        let (sin0, cos0) = initial.theta_in_rads.sin_cos();
        let (sin1, cos1) = final_pos.theta_in_rads.sin_cos();

        let x = Self::cubic(initial.x, final_pos.x, k * cos0, k * cos1);
        let y = Self::cubic(initial.y, final_pos.y, k * sin0, k * sin1);
        Ok((x, y))
    }
}

/// Builds coordinate functions from coefficient vectors.
#[derive(Debug, Clone, Copy, Default)]
pub struct PolynomialPathBuilder;

impl PathFunctionBuilder for PolynomialPathBuilder {
    fn create_path_functions(
        &self,
        x_coefficients: &Coefficients,
        y_coefficients: &Coefficients,
    ) -> PlanResult<PathFunctions> {
        if x_coefficients.is_empty() {
            return Err(PlanError::EmptyCoefficients { axis: 'x' });
        }
        if y_coefficients.is_empty() {
            return Err(PlanError::EmptyCoefficients { axis: 'y' });
        }
        if x_coefficients.len() != y_coefficients.len() {
            return Err(PlanError::CoefficientMismatch {
                x: x_coefficients.len(),
                y: y_coefficients.len(),
            });
        }

        let cx = x_coefficients.as_slice().to_vec();
        let cy = y_coefficients.as_slice().to_vec();
        let dx = derivative(&cx);
        let dy = derivative(&cy);

        Ok(PathFunctions::new(
            Box::new(move |t| evaluate(&cx, t)),
            Box::new(move |t| evaluate(&cy, t)),
            Box::new(move |t| evaluate(&dy, t).atan2(evaluate(&dx, t))),
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::Point;
    use crate::planning::{PathSampler, SAMPLE_COUNT};
    use std::f64::consts::FRAC_PI_2;

    #[test]
    fn test_evaluate_and_derivative() {
        // 1 + 2t + 3t^2
        let c = [1.0, 2.0, 3.0];
        assert!((evaluate(&c, 0.0) - 1.0).abs() < 1e-12);
        assert!((evaluate(&c, 2.0) - 17.0).abs() < 1e-12);
        assert_eq!(derivative(&c), vec![2.0, 6.0]);
        assert!(derivative(&[5.0]).is_empty());
        assert_eq!(evaluate(&[], 3.0), 0.0);
    }

    #[test]
    fn test_cubic_meets_boundary_conditions() {
        let init = Position::new(-1.2705, 0.047, 0.0);
        let goal = Position::new(-0.3835, 1.322, FRAC_PI_2);
        let (x, y) = CubicPolynomialSolver::default()
            .find_coefficients(&init, &goal)
            .unwrap();
        assert_eq!(x.degree(), Some(3));
        assert_eq!(y.degree(), Some(3));

        assert!((evaluate(x.as_slice(), 0.0) - init.x).abs() < 1e-10);
        assert!((evaluate(y.as_slice(), 0.0) - init.y).abs() < 1e-10);
        assert!((evaluate(x.as_slice(), 1.0) - goal.x).abs() < 1e-10);
        assert!((evaluate(y.as_slice(), 1.0) - goal.y).abs() < 1e-10);

        // Start heading 0: tangent along +x. Goal heading π/2: along +y.
        let k = init.point().distance_to(&goal.point());
        assert!((evaluate(&derivative(x.as_slice()), 0.0) - k).abs() < 1e-10);
        assert!(evaluate(&derivative(y.as_slice()), 0.0).abs() < 1e-10);
        assert!(evaluate(&derivative(x.as_slice()), 1.0).abs() < 1e-10);
        assert!((evaluate(&derivative(y.as_slice()), 1.0) - k).abs() < 1e-10);
    }

    #[test]
    fn test_non_finite_pose_rejected() {
        let init = Position::new(f64::NAN, 0.0, 0.0);
        let goal = Position::new(1.0, 1.0, 0.0);
        let err = CubicPolynomialSolver::default()
            .find_coefficients(&init, &goal)
            .unwrap_err();
        assert!(matches!(err, PlanError::DegenerateInput(_)));
    }

    #[test]
    fn test_builder_rejects_mismatched_degrees() {
        let err = PolynomialPathBuilder
            .create_path_functions(
                &Coefficients::new(vec![0.0, 1.0]),
                &Coefficients::new(vec![0.0, 1.0, 2.0]),
            )
            .unwrap_err();
        assert_eq!(err, PlanError::CoefficientMismatch { x: 2, y: 3 });

        let err = PolynomialPathBuilder
            .create_path_functions(&Coefficients::default(), &Coefficients::new(vec![1.0]))
            .unwrap_err();
        assert_eq!(err, PlanError::EmptyCoefficients { axis: 'x' });
    }

    #[test]
    fn test_builder_heading_follows_tangent() {
        let functions = PolynomialPathBuilder
            .create_path_functions(
                &Coefficients::new(vec![0.0, 1.0]),
                &Coefficients::new(vec![0.0, 1.0]),
            )
            .unwrap();
        assert!(((functions.heading)(0.3) - std::f64::consts::FRAC_PI_4).abs() < 1e-12);
        assert_eq!(functions.point_at(0.5), Point::new(0.5, 0.5));
    }

    #[test]
    fn test_sampled_cubic_path_runs_from_start_toward_goal() {
        let solver = CubicPolynomialSolver::default();
        let sampler = PathSampler::new(&solver, &PolynomialPathBuilder);
        let start = Point::new(-1.2705, 0.047);
        let goal = Point::new(-0.3835, 1.322);
        let path = sampler.find_polynomial_path(start, goal).unwrap();

        assert_eq!(path.len(), SAMPLE_COUNT);
        assert!(path[0].distance_to(&start) < 1e-10);
        assert!(path[SAMPLE_COUNT - 1].distance_to(&goal) < 0.01);
    }
}
