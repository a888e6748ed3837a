use serde::{Deserialize, Serialize};

use crate::geometry::{BBox, Point, Polygon, Vertex};

/// A robot footprint and the obstacles around it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Scene {
    pub robot: Polygon,
    pub obstacles: Vec<Polygon>,
}

impl Scene {
    pub fn new(robot: Polygon, obstacles: Vec<Polygon>) -> Self {
        Self { robot, obstacles }
    }

    /// Split a polygon list whose last element is the robot.
    /// Returns `None` for an empty list.
    pub fn from_polygons(mut polygons: Vec<Polygon>) -> Option<Self> {
        let robot = polygons.pop()?;
        Some(Self {
            robot,
            obstacles: polygons,
        })
    }

    /// Flatten back into the file order: obstacles first, robot last.
    pub fn into_polygons(self) -> Vec<Polygon> {
        let mut polygons = self.obstacles;
        polygons.push(self.robot);
        polygons
    }

    pub fn robot_points(&self) -> Vec<Point> {
        self.robot.points()
    }

    pub fn obstacle_points(&self) -> Vec<Vec<Point>> {
        self.obstacles.iter().map(Polygon::points).collect()
    }

    pub fn polygon_count(&self) -> usize {
        self.obstacles.len() + 1
    }

    pub fn bbox(&self) -> Option<BBox> {
        self.obstacles
            .iter()
            .chain(std::iter::once(&self.robot))
            .filter_map(Polygon::bbox)
            .reduce(|a, b| a.union(&b))
    }

    /// Triangular robot next to a small square obstacle, after the example
    /// in Latombe, *Robot Motion Planning*, ch. 3, fig. 9.
    pub fn reference_example() -> Self {
        let b = 0.2;
        let h = 0.5;
        let robot = Polygon::new(
            "robot",
            vec![
                Vertex::new(b / 3.0, -h / 3.0),
                Vertex::new(b / 3.0 + 0.1, 2.0 * h / 3.0 + 0.1),
                Vertex::new(-2.0 * b / 3.0, -h / 3.0 + 0.2),
            ],
        );
        let obstacle = Polygon::new(
            "obstacle",
            vec![
                Vertex::new(1.7, 1.5),
                Vertex::new(1.7, 1.7),
                Vertex::new(1.5, 1.7),
                Vertex::new(1.5, 1.5),
            ],
        );
        Self::new(robot, vec![obstacle])
    }
}
