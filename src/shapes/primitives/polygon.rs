use glam::Vec3;
use std::f32::consts::TAU;

use crate::shapes::shape::ShapeGeometry;

/// Equilateral triangle with circumradius 1, apex pointing up.
#[must_use]
pub fn create_triangle() -> ShapeGeometry {
    create_regular_polygon(3, 1.0)
}

/// Regular n-gon with the given circumradius, first vertex straight up.
#[must_use]
pub fn create_regular_polygon(sides: u32, circumradius: f32) -> ShapeGeometry {
    let sides = sides.max(3);
    let points = (0..sides)
        .map(|step| {
            #[allow(clippy::cast_precision_loss)]
            let angle = TAU / 4.0 + TAU * (step as f32 / sides as f32);
            Vec3::new(circumradius * angle.cos(), circumradius * angle.sin(), 0.0)
        })
        .collect();
    ShapeGeometry::from_points(points, true)
}

/// Closed polygon through the given vertices, in order.
#[must_use]
pub fn create_polygon(vertices: &[Vec3]) -> ShapeGeometry {
    ShapeGeometry::from_points(vertices.to_vec(), true)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn triangle_apex_points_up() {
        let geometry = create_triangle();
        let apex = geometry.points[0];
        assert!((apex - Vec3::new(0.0, 1.0, 0.0)).length() < 1e-6);
        // Base vertices sit below the center
        assert!(geometry.points[1].y < 0.0);
        assert!(geometry.points[2].y < 0.0);
    }

    #[test]
    fn polygon_preserves_vertex_order() {
        let vertices = [
            Vec3::new(0.0, -0.05, 0.0),
            Vec3::new(0.08, -0.5, 0.0),
            Vec3::new(-0.08, -0.5, 0.0),
        ];
        let geometry = create_polygon(&vertices);
        assert_eq!(geometry.points, vertices.to_vec());
        assert!(geometry.closed);
    }
}
