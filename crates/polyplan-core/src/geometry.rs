use serde::{Deserialize, Serialize};

/// A 2D point in workspace coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn distance_to(&self, other: &Point) -> f64 {
        ((self.x - other.x).powi(2) + (self.y - other.y).powi(2)).sqrt()
    }

    pub fn translate(&self, dx: f64, dy: f64) -> Self {
        Self {
            x: self.x + dx,
            y: self.y + dy,
        }
    }

    /// Vector from `origin` to this point.
    pub fn offset_from(&self, origin: &Point) -> (f64, f64) {
        (self.x - origin.x, self.y - origin.y)
    }
}

/// An axis-aligned bounding box.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BBox {
    pub min: Point,
    pub max: Point,
}

impl BBox {
    pub fn new(min: Point, max: Point) -> Self {
        Self { min, max }
    }

    pub fn from_points(points: &[Point]) -> Option<Self> {
        if points.is_empty() {
            return None;
        }
        let mut min_x = f64::MAX;
        let mut min_y = f64::MAX;
        let mut max_x = f64::MIN;
        let mut max_y = f64::MIN;
        for p in points {
            min_x = min_x.min(p.x);
            min_y = min_y.min(p.y);
            max_x = max_x.max(p.x);
            max_y = max_y.max(p.y);
        }
        Some(Self {
            min: Point::new(min_x, min_y),
            max: Point::new(max_x, max_y),
        })
    }

    pub fn width(&self) -> f64 {
        self.max.x - self.min.x
    }

    pub fn height(&self) -> f64 {
        self.max.y - self.min.y
    }

    pub fn center(&self) -> Point {
        Point::new(
            (self.min.x + self.max.x) / 2.0,
            (self.min.y + self.max.y) / 2.0,
        )
    }

    pub fn contains_point(&self, p: &Point) -> bool {
        p.x >= self.min.x && p.x <= self.max.x && p.y >= self.min.y && p.y <= self.max.y
    }

    pub fn union(&self, other: &BBox) -> Self {
        Self {
            min: Point::new(self.min.x.min(other.min.x), self.min.y.min(other.min.y)),
            max: Point::new(self.max.x.max(other.max.x), self.max.y.max(other.max.y)),
        }
    }
}

/// A polygon corner as it appears in a scene file.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Vertex {
    pub x: f64,
    pub y: f64,
}

impl Vertex {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn position(&self) -> Point {
        Point::new(self.x, self.y)
    }
}

/// An oriented pose used as a boundary condition for path generation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Position {
    pub x: f64,
    pub y: f64,
    pub theta_in_rads: f64,
}

impl Position {
    pub fn new(x: f64, y: f64, theta_in_rads: f64) -> Self {
        Self { x, y, theta_in_rads }
    }

    pub fn at(point: Point, theta_in_rads: f64) -> Self {
        Self::new(point.x, point.y, theta_in_rads)
    }

    pub fn point(&self) -> Point {
        Point::new(self.x, self.y)
    }
}

/// A named polygon. Vertices keep the order they were read in; rendering
/// expects the shape to be convex.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Polygon {
    pub name: String,
    pub vertices: Vec<Vertex>,
}

impl Polygon {
    pub fn new(name: &str, vertices: Vec<Vertex>) -> Self {
        Self {
            name: name.to_string(),
            vertices,
        }
    }

    pub fn points(&self) -> Vec<Point> {
        self.vertices.iter().map(Vertex::position).collect()
    }

    pub fn bbox(&self) -> Option<BBox> {
        BBox::from_points(&self.points())
    }

    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }
}
