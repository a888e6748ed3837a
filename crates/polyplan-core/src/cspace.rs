use std::cmp::Ordering;

use crate::error::{PlanError, PlanResult};
use crate::geometry::Point;
use crate::ordering::mean_point;

/// Maps a robot footprint and obstacles to configuration-space obstacles.
///
/// Output polygons may come back in any vertex order.
pub trait ConfigurationSpaceBuilder {
    fn make_configuration_space(
        &self,
        robot_vertices: &[Point],
        obstacles_vertices: &[Vec<Point>],
    ) -> PlanResult<Vec<Vec<Point>>>;
}

/// C-obstacles for a robot that translates without rotating.
///
/// The reference point is the mean of the robot vertices, so each
/// C-obstacle is the convex hull of `o - (r - c)` over obstacle vertices
/// `o` and robot vertices `r`.
#[derive(Debug, Clone, Copy, Default)]
pub struct MinkowskiConfigurationSpace;

impl ConfigurationSpaceBuilder for MinkowskiConfigurationSpace {
    fn make_configuration_space(
        &self,
        robot_vertices: &[Point],
        obstacles_vertices: &[Vec<Point>],
    ) -> PlanResult<Vec<Vec<Point>>> {
        let reference = mean_point(robot_vertices)
            .ok_or_else(|| PlanError::DegenerateInput("robot has no vertices".into()))?;
        let offsets: Vec<(f64, f64)> = robot_vertices
            .iter()
            .map(|r| r.offset_from(&reference))
            .collect();

        let mut c_obstacles = Vec::with_capacity(obstacles_vertices.len());
        for obstacle in obstacles_vertices {
            let swept: Vec<Point> = obstacle
                .iter()
                .flat_map(|o| offsets.iter().map(move |(dx, dy)| o.translate(-dx, -dy)))
                .collect();
            c_obstacles.push(convex_hull(&swept));
        }
        log::debug!("built {} C-obstacles", c_obstacles.len());
        Ok(c_obstacles)
    }
}

/// Andrew's monotone chain. Returns the hull counter-clockwise without
/// collinear points; inputs with fewer than three distinct points come back
/// deduplicated.
pub fn convex_hull(points: &[Point]) -> Vec<Point> {
    let mut pts = points.to_vec();
    pts.sort_by(|a, b| match a.x.partial_cmp(&b.x).unwrap_or(Ordering::Equal) {
        Ordering::Equal => a.y.partial_cmp(&b.y).unwrap_or(Ordering::Equal),
        o => o,
    });
    pts.dedup_by(|a, b| a.distance_to(b) < 1e-12);
    if pts.len() < 3 {
        return pts;
    }

    let mut lower: Vec<Point> = Vec::with_capacity(pts.len());
    for p in &pts {
        while lower.len() >= 2 && cross(&lower[lower.len() - 2], &lower[lower.len() - 1], p) <= 0.0
        {
            lower.pop();
        }
        lower.push(*p);
    }
    let mut upper: Vec<Point> = Vec::with_capacity(pts.len());
    for p in pts.iter().rev() {
        while upper.len() >= 2 && cross(&upper[upper.len() - 2], &upper[upper.len() - 1], p) <= 0.0
        {
            upper.pop();
        }
        upper.push(*p);
    }
    lower.pop();
    upper.pop();
    lower.extend(upper);
    lower
}

fn cross(a: &Point, b: &Point, c: &Point) -> f64 {
    (b.x - a.x) * (c.y - a.y) - (b.y - a.y) * (c.x - a.x)
}
