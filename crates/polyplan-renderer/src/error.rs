use std::io;
use std::path::PathBuf;

use thiserror::Error;

use polyplan_core::PlanError;

#[derive(Error, Debug)]
pub enum RenderError {
    #[error("Planning failed: {0}")]
    Plan(#[from] PlanError),

    #[error("Drawing failed: {0}")]
    Drawing(String),

    #[error("Unsupported output format for {0}; expected .svg or .png")]
    UnsupportedFormat(PathBuf),

    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
}
