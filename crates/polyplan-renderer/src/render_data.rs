use serde::{Deserialize, Serialize};

use polyplan_core::geometry::{BBox, Point};

/// Default color cycle (RGB), applied in draw order.
pub const PALETTE: [[u8; 3]; 10] = [
    [0x1f, 0x77, 0xb4],
    [0xff, 0x7f, 0x0e],
    [0x2c, 0xa0, 0x2c],
    [0xd6, 0x27, 0x28],
    [0x94, 0x67, 0xbd],
    [0x8c, 0x56, 0x4b],
    [0xe3, 0x77, 0xc2],
    [0x7f, 0x7f, 0x7f],
    [0xbc, 0xbd, 0x22],
    [0x17, 0xbe, 0xcf],
];

/// Hands out palette colors in order, wrapping around. Each frame starts
/// its own cycle.
#[derive(Debug, Default)]
pub struct ColorCycle {
    next: usize,
}

impl ColorCycle {
    pub fn next_color(&mut self) -> [u8; 3] {
        let color = PALETTE[self.next % PALETTE.len()];
        self.next += 1;
        color
    }
}

/// A single drawable item, in paint order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum RenderItem {
    /// Filled polygon with vertices already in fan order.
    Fill {
        name: String,
        vertices: Vec<Point>,
        color: [u8; 3],
    },
    Markers {
        points: Vec<Point>,
        color: [u8; 3],
    },
    Polyline {
        points: Vec<Point>,
        color: [u8; 3],
    },
}

impl RenderItem {
    pub fn points(&self) -> &[Point] {
        match self {
            RenderItem::Fill { vertices, .. } => vertices,
            RenderItem::Markers { points, .. } => points,
            RenderItem::Polyline { points, .. } => points,
        }
    }
}

/// Everything drawn on one figure.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RenderFrame {
    pub title: String,
    pub items: Vec<RenderItem>,
    pub grid_visible: bool,
}

impl RenderFrame {
    pub fn empty(title: &str) -> Self {
        Self {
            title: title.to_string(),
            items: Vec::new(),
            grid_visible: true,
        }
    }

    pub fn push(&mut self, item: RenderItem) {
        self.items.push(item);
    }

    /// Bounds of every point in the frame.
    pub fn bounds(&self) -> Option<BBox> {
        self.items
            .iter()
            .filter_map(|item| BBox::from_points(item.points()))
            .reduce(|a, b| a.union(&b))
    }

    pub fn fill_count(&self) -> usize {
        self.items
            .iter()
            .filter(|item| matches!(item, RenderItem::Fill { .. }))
            .count()
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}
