//! # Polyplan Renderer
//!
//! Draws a robot scene twice: the workspace with obstacles, robot and
//! sampled path, and the configuration space with the C-obstacles produced
//! by a [`ConfigurationSpaceBuilder`](polyplan_core::ConfigurationSpaceBuilder).
//!
//! Views are first composed into serializable [`RenderFrame`]s, then painted
//! through plotters to SVG or PNG.

pub mod viewport;
pub mod render_data;
pub mod compose;
pub mod painter;
pub mod orchestrator;
pub mod settings;
pub mod error;

pub use viewport::Viewport;
pub use render_data::{RenderFrame, RenderItem};
pub use painter::{paint_frame, OutputFormat};
pub use orchestrator::{PathRequest, RenderReport, RenderRequest, SceneRenderer};
pub use settings::RenderSettings;
pub use error::RenderError;
