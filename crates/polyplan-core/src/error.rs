use thiserror::Error;

/// Failures raised by path and configuration-space collaborators.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum PlanError {
    #[error("Coefficient count mismatch: x has {x}, y has {y}")]
    CoefficientMismatch { x: usize, y: usize },

    #[error("Empty coefficient set for the {axis} axis")]
    EmptyCoefficients { axis: char },

    #[error("Degenerate input: {0}")]
    DegenerateInput(String),

    #[error("Collaborator failed: {0}")]
    Collaborator(String),
}

pub type PlanResult<T> = Result<T, PlanError>;
