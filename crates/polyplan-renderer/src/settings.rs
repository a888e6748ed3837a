use serde::{Deserialize, Serialize};

/// SVG output is sized in points, one pixel per point.
pub const POINTS_PER_INCH: f64 = 72.0;

/// Figure size and stroke settings shared by both views.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderSettings {
    pub figure_width_in: f64,
    pub figure_height_in: f64,
    /// Raster resolution. Only used for PNG output.
    pub dpi: u32,
    /// Fraction of the canvas the fitted content may span.
    pub fill_ratio: f64,
    pub grid_divisions: u32,
    /// Marker radius in points.
    pub marker_radius: f64,
    /// Path stroke width in points.
    pub path_width: f64,
}

impl Default for RenderSettings {
    fn default() -> Self {
        Self {
            figure_width_in: 6.4,
            figure_height_in: 4.8,
            dpi: 1200,
            fill_ratio: 0.9,
            grid_divisions: 10,
            marker_radius: 3.0,
            path_width: 1.5,
        }
    }
}

impl RenderSettings {
    /// Pixels per point for the given output.
    pub fn scale(&self, raster: bool) -> f64 {
        if raster {
            self.dpi as f64 / POINTS_PER_INCH
        } else {
            1.0
        }
    }

    /// Canvas size in pixels.
    pub fn canvas_size(&self, raster: bool) -> (u32, u32) {
        let per_inch = if raster {
            self.dpi as f64
        } else {
            POINTS_PER_INCH
        };
        (
            (self.figure_width_in * per_inch).round().max(1.0) as u32,
            (self.figure_height_in * per_inch).round().max(1.0) as u32,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_canvas_sizes() {
        let settings = RenderSettings::default();
        assert_eq!(settings.canvas_size(false), (461, 346));
        assert_eq!(settings.canvas_size(true), (7680, 5760));
        assert!((settings.scale(true) - 1200.0 / 72.0).abs() < 1e-10);
        assert_eq!(settings.scale(false), 1.0);
    }

    #[test]
    fn test_partial_settings_fill_defaults() {
        let settings: RenderSettings = serde_json::from_str(r#"{"dpi": 300}"#).unwrap();
        assert_eq!(settings.dpi, 300);
        assert_eq!(settings.grid_divisions, 10);
        assert_eq!(settings.canvas_size(true), (1920, 1440));
    }
}
