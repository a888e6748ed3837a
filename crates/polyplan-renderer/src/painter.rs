//! Paints a [`RenderFrame`] to an image file through plotters.
//!
//! The backend is picked from the file extension. Each figure owns its
//! drawing area for the duration of one [`paint_frame`] call and is
//! presented before the call returns.

use std::fmt;
use std::fs;
use std::path::Path;

use plotters::coord::Shift;
use plotters::prelude::*;

use polyplan_core::geometry::{BBox, Point};

use crate::error::RenderError;
use crate::render_data::{RenderFrame, RenderItem};
use crate::settings::RenderSettings;
use crate::viewport::Viewport;

const GRID_COLOR: RGBColor = RGBColor(0xd9, 0xd9, 0xd9);

/// Output image formats supported by the painter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Svg,
    Png,
}

impl OutputFormat {
    pub fn from_path(path: &Path) -> Result<Self, RenderError> {
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .map(|e| e.to_ascii_lowercase());
        match ext.as_deref() {
            Some("svg") => Ok(OutputFormat::Svg),
            Some("png") => Ok(OutputFormat::Png),
            _ => Err(RenderError::UnsupportedFormat(path.to_path_buf())),
        }
    }

    pub fn is_raster(&self) -> bool {
        matches!(self, OutputFormat::Png)
    }
}

/// A drawing surface for one output file.
struct Figure<DB: DrawingBackend> {
    area: DrawingArea<DB, Shift>,
}

impl<DB: DrawingBackend> Figure<DB> {
    fn new(area: DrawingArea<DB, Shift>) -> Self {
        Self { area }
    }

    /// Write the figure out. The backend is dropped afterwards either way.
    fn finish(self) -> Result<(), RenderError> {
        self.area.present().map_err(drawing_error)
    }
}

/// Paint `frame` into `path` as SVG or PNG.
pub fn paint_frame(
    frame: &RenderFrame,
    path: &Path,
    settings: &RenderSettings,
) -> Result<(), RenderError> {
    let format = OutputFormat::from_path(path)?;
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)?;
    }

    let size = settings.canvas_size(format.is_raster());
    let scale = settings.scale(format.is_raster());
    let bounds = frame
        .bounds()
        .unwrap_or_else(|| BBox::new(Point::new(0.0, 0.0), Point::new(0.0, 0.0)));
    let viewport = Viewport::fitted(size.0 as f64, size.1 as f64, &bounds, settings.fill_ratio);

    match format {
        OutputFormat::Svg => {
            let figure = Figure::new(SVGBackend::new(path, size).into_drawing_area());
            paint_on(&figure.area, frame, &viewport, settings, scale)?;
            figure.finish()?;
        }
        OutputFormat::Png => {
            let figure = Figure::new(BitMapBackend::new(path, size).into_drawing_area());
            paint_on(&figure.area, frame, &viewport, settings, scale)?;
            figure.finish()?;
        }
    }

    log::info!(
        "Wrote {} ({}x{} px, {} items)",
        path.display(),
        size.0,
        size.1,
        frame.items.len()
    );
    Ok(())
}

fn paint_on<DB: DrawingBackend>(
    area: &DrawingArea<DB, Shift>,
    frame: &RenderFrame,
    viewport: &Viewport,
    settings: &RenderSettings,
    scale: f64,
) -> Result<(), RenderError> {
    area.fill(&WHITE).map_err(drawing_error)?;

    let (min_x, min_y, max_x, max_y) = viewport.visible_bounds();
    let mut chart = ChartBuilder::on(area)
        .build_cartesian_2d(min_x..max_x, min_y..max_y)
        .map_err(drawing_error)?;

    if frame.grid_visible {
        let (xs, ys) = viewport.grid_lines(settings.grid_divisions);
        let grid = GRID_COLOR.stroke_width(1);
        chart
            .draw_series(
                xs.iter()
                    .map(|x| PathElement::new(vec![(*x, min_y), (*x, max_y)], grid))
                    .chain(
                        ys.iter()
                            .map(|y| PathElement::new(vec![(min_x, *y), (max_x, *y)], grid)),
                    ),
            )
            .map_err(drawing_error)?;
    }

    let marker_radius = (settings.marker_radius * scale).round().max(1.0) as u32;
    let path_width = (settings.path_width * scale).round().max(1.0) as u32;

    for item in &frame.items {
        match item {
            RenderItem::Fill { vertices, color, .. } => {
                let style = rgb(color).filled();
                chart
                    .draw_series(std::iter::once(Polygon::new(coords(vertices), style)))
                    .map_err(drawing_error)?;
            }
            RenderItem::Markers { points, color } => {
                let style = rgb(color).filled();
                chart
                    .draw_series(
                        points
                            .iter()
                            .map(|p| Circle::new((p.x, p.y), marker_radius, style)),
                    )
                    .map_err(drawing_error)?;
            }
            RenderItem::Polyline { points, color } => {
                let style = rgb(color).stroke_width(path_width);
                chart
                    .draw_series(std::iter::once(PathElement::new(coords(points), style)))
                    .map_err(drawing_error)?;
            }
        }
    }

    Ok(())
}

fn drawing_error<E: fmt::Display>(e: E) -> RenderError {
    RenderError::Drawing(e.to_string())
}

fn rgb(color: &[u8; 3]) -> RGBColor {
    RGBColor(color[0], color[1], color[2])
}

fn coords(points: &[Point]) -> Vec<(f64, f64)> {
    points.iter().map(|p| (p.x, p.y)).collect()
}
