//! Angular vertex ordering for fan-filled convex polygons.
//!
//! Vertices are ordered counter-clockwise from angle 0 about the mean of
//! their coordinates. This is the vertex mean, not the area centroid, so the
//! ordering is only meaningful for convex shapes.

use std::cmp::Ordering;
use std::f64::consts::TAU;

use crate::geometry::{Point, Polygon};

/// Arithmetic mean of the point coordinates. `None` for an empty slice.
pub fn mean_point(points: &[Point]) -> Option<Point> {
    if points.is_empty() {
        return None;
    }
    let n = points.len() as f64;
    let (sx, sy) = points
        .iter()
        .fold((0.0, 0.0), |(sx, sy), p| (sx + p.x, sy + p.y));
    Some(Point::new(sx / n, sy / n))
}

/// Polar angle of `point` about `about`, in `[0, 2π)`.
pub fn normalized_angle(point: &Point, about: &Point) -> f64 {
    let (dx, dy) = point.offset_from(about);
    let theta = dy.atan2(dx);
    if theta >= 0.0 {
        theta
    } else {
        TAU + theta
    }
}

/// Return `points` ordered by ascending angle about their mean.
///
/// The sort is stable: points sharing an angle keep their input order.
/// Degenerate input (a single point, collinear points) is accepted as is.
pub fn sort_by_angle(points: &[Point]) -> Vec<Point> {
    let Some(center) = mean_point(points) else {
        return Vec::new();
    };

    let mut keyed: Vec<(f64, Point)> = points
        .iter()
        .map(|p| (normalized_angle(p, &center), *p))
        .collect();
    keyed.sort_by(|a, b| a.0.partial_cmp(&b.0).unwrap_or(Ordering::Equal));
    keyed.into_iter().map(|(_, p)| p).collect()
}

impl Polygon {
    /// Vertex positions in fan-fill order.
    pub fn sorted_points(&self) -> Vec<Point> {
        if self.vertex_count() < 3 {
            log::warn!(
                "polygon '{}' has {} vertices; fill will be degenerate",
                self.name,
                self.vertex_count()
            );
        }
        sort_by_angle(&self.points())
    }
}
