use serde::{Deserialize, Serialize};

use polyplan_core::geometry::BBox;

/// Smallest span a fitted box is given along either axis.
const MIN_SPAN: f64 = 1.0;

/// Maps workspace coordinates onto a canvas with equal scaling on both axes.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Viewport {
    /// Center X in workspace coordinates.
    pub center_x: f64,
    /// Center Y in workspace coordinates.
    pub center_y: f64,
    /// Pixels per workspace unit.
    pub zoom: f64,
    /// Canvas width in pixels.
    pub canvas_width: f64,
    /// Canvas height in pixels.
    pub canvas_height: f64,
}

impl Viewport {
    pub fn new(canvas_width: f64, canvas_height: f64) -> Self {
        Self {
            center_x: 0.0,
            center_y: 0.0,
            zoom: 1.0,
            canvas_width,
            canvas_height,
        }
    }

    /// Zoom to fit a bounding box, leaving `1 - fill_ratio` of the canvas as margin.
    pub fn fit_bbox(&mut self, bbox: &BBox, fill_ratio: f64) {
        let center = bbox.center();
        self.center_x = center.x;
        self.center_y = center.y;

        let width = bbox.width().max(MIN_SPAN);
        let height = bbox.height().max(MIN_SPAN);
        let zoom_x = self.canvas_width / width * fill_ratio;
        let zoom_y = self.canvas_height / height * fill_ratio;
        self.zoom = zoom_x.min(zoom_y);
    }

    pub fn fitted(canvas_width: f64, canvas_height: f64, bbox: &BBox, fill_ratio: f64) -> Self {
        let mut viewport = Self::new(canvas_width, canvas_height);
        viewport.fit_bbox(bbox, fill_ratio);
        viewport
    }

    /// Visible bounds in workspace coordinates: `(min_x, min_y, max_x, max_y)`.
    pub fn visible_bounds(&self) -> (f64, f64, f64, f64) {
        let half_w = self.canvas_width / (2.0 * self.zoom);
        let half_h = self.canvas_height / (2.0 * self.zoom);
        (
            self.center_x - half_w,
            self.center_y - half_h,
            self.center_x + half_w,
            self.center_y + half_h,
        )
    }

    /// Evenly spaced grid coordinates across the visible bounds, edges included.
    pub fn grid_lines(&self, divisions: u32) -> (Vec<f64>, Vec<f64>) {
        let (min_x, min_y, max_x, max_y) = self.visible_bounds();
        let n = divisions.max(1);
        let step = |lo: f64, hi: f64| -> Vec<f64> {
            (0..=n)
                .map(|i| lo + (hi - lo) * i as f64 / n as f64)
                .collect()
        };
        (step(min_x, max_x), step(min_y, max_y))
    }
}
