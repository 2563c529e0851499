use glam::Vec3;

use crate::shapes::shape::ShapeGeometry;

/// Straight segment between two points.
#[must_use]
pub fn create_line(start: Vec3, end: Vec3) -> ShapeGeometry {
    ShapeGeometry::from_points(vec![start, end], false)
}
