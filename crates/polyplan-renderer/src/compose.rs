//! Builds the workspace and configuration-space frames from scene data.
//!
//! Items are emitted in paint order and each one takes the next palette
//! color, so a polygon's centroid marker contrasts with its fill.

use polyplan_core::geometry::Point;
use polyplan_core::ordering::{mean_point, sort_by_angle};
use polyplan_core::scene::Scene;

use crate::render_data::{ColorCycle, RenderFrame, RenderItem};

pub const WORK_SPACE_TITLE: &str = "work space";
pub const CONF_SPACE_TITLE: &str = "configuration space";

/// Accumulates items for one frame with its own color cycle.
struct FrameBuilder {
    frame: RenderFrame,
    colors: ColorCycle,
}

impl FrameBuilder {
    fn new(title: &str) -> Self {
        Self {
            frame: RenderFrame::empty(title),
            colors: ColorCycle::default(),
        }
    }

    fn markers(&mut self, points: &[Point]) {
        if points.is_empty() {
            return;
        }
        let color = self.colors.next_color();
        self.frame.push(RenderItem::Markers {
            points: points.to_vec(),
            color,
        });
    }

    /// Sorted fill followed by a marker at the vertex mean.
    fn polygon(&mut self, name: &str, points: &[Point]) {
        let color = self.colors.next_color();
        self.frame.push(RenderItem::Fill {
            name: name.to_string(),
            vertices: sort_by_angle(points),
            color,
        });
        if let Some(center) = mean_point(points) {
            self.markers(&[center]);
        }
    }

    fn polyline(&mut self, points: &[Point]) {
        let color = self.colors.next_color();
        self.frame.push(RenderItem::Polyline {
            points: points.to_vec(),
            color,
        });
    }

    fn finish(self) -> RenderFrame {
        self.frame
    }
}

/// Workspace limits, every obstacle then the robot, then the path.
pub fn work_space_frame(scene: &Scene, limits: &[Point], path: Option<&[Point]>) -> RenderFrame {
    let mut builder = FrameBuilder::new(WORK_SPACE_TITLE);
    builder.markers(limits);
    for obstacle in &scene.obstacles {
        if obstacle.vertex_count() < 3 {
            log::warn!("obstacle '{}' has fewer than 3 vertices", obstacle.name);
        }
        builder.polygon(&obstacle.name, &obstacle.points());
    }
    builder.polygon(&scene.robot.name, &scene.robot_points());
    if let Some(path) = path {
        builder.polyline(path);
    }
    builder.finish()
}

/// Workspace limits, every C-obstacle, the robot reference point, then the path.
pub fn conf_space_frame(
    scene: &Scene,
    c_obstacles: &[Vec<Point>],
    limits: &[Point],
    path: Option<&[Point]>,
) -> RenderFrame {
    let mut builder = FrameBuilder::new(CONF_SPACE_TITLE);
    builder.markers(limits);
    for (i, c_obstacle) in c_obstacles.iter().enumerate() {
        let name = scene
            .obstacles
            .get(i)
            .map(|o| format!("C-{}", o.name))
            .unwrap_or_else(|| format!("C-obstacle {i}"));
        builder.polygon(&name, c_obstacle);
    }
    if let Some(reference) = mean_point(&scene.robot_points()) {
        builder.markers(&[reference]);
    }
    if let Some(path) = path {
        builder.polyline(path);
    }
    builder.finish()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render_data::PALETTE;
    use polyplan_core::geometry::{Polygon, Vertex};

    fn diamond(name: &str, cx: f64, cy: f64) -> Polygon {
        Polygon::new(
            name,
            vec![
                Vertex::new(cx, cy - 1.0),
                Vertex::new(cx - 1.0, cy),
                Vertex::new(cx + 1.0, cy),
                Vertex::new(cx, cy + 1.0),
            ],
        )
    }

    fn scene() -> Scene {
        Scene::new(diamond("robot", 0.0, 0.0), vec![diamond("rock", 5.0, 5.0)])
    }

    #[test]
    fn test_work_space_items_in_paint_order() {
        let limits = vec![Point::new(-10.0, -10.0), Point::new(10.0, 10.0)];
        let path = vec![Point::new(0.0, 0.0), Point::new(1.0, 1.0)];
        let frame = work_space_frame(&scene(), &limits, Some(&path));

        // limits, rock fill, rock centroid, robot fill, robot centroid, path
        assert_eq!(frame.items.len(), 6);
        assert_eq!(frame.fill_count(), 2);
        assert!(matches!(frame.items[0], RenderItem::Markers { .. }));
        assert!(matches!(frame.items[5], RenderItem::Polyline { .. }));

        match &frame.items[3] {
            RenderItem::Fill { name, vertices, color } => {
                assert_eq!(name, "robot");
                assert_eq!(vertices[0], Point::new(1.0, 0.0));
                assert_eq!(vertices[1], Point::new(0.0, 1.0));
                assert_eq!(*color, PALETTE[3]);
            }
            other => panic!("expected robot fill, got {other:?}"),
        }
        match &frame.items[2] {
            RenderItem::Markers { points, .. } => assert_eq!(points, &vec![Point::new(5.0, 5.0)]),
            other => panic!("expected centroid marker, got {other:?}"),
        }
    }

    #[test]
    fn test_work_space_without_path_or_limits() {
        let frame = work_space_frame(&scene(), &[], None);
        assert_eq!(frame.items.len(), 4);
        assert!(frame
            .items
            .iter()
            .all(|item| !matches!(item, RenderItem::Polyline { .. })));
    }

    #[test]
    fn test_conf_space_sorts_unsorted_obstacles() {
        let unsorted = vec![
            Point::new(0.0, -1.0),
            Point::new(-1.0, 0.0),
            Point::new(1.0, 0.0),
            Point::new(0.0, 1.0),
        ];
        let frame = conf_space_frame(&scene(), &[unsorted], &[], None);

        match &frame.items[0] {
            RenderItem::Fill { name, vertices, .. } => {
                assert_eq!(name, "C-rock");
                assert_eq!(
                    vertices,
                    &vec![
                        Point::new(1.0, 0.0),
                        Point::new(0.0, 1.0),
                        Point::new(-1.0, 0.0),
                        Point::new(0.0, -1.0),
                    ]
                );
            }
            other => panic!("expected fill, got {other:?}"),
        }
        // fill, its centroid, robot reference point
        assert_eq!(frame.items.len(), 3);
        assert_eq!(frame.items[2].points(), &[Point::new(0.0, 0.0)]);
    }
}
