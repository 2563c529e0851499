//! Spatial primitives, outlined as oriented point rings.
//!
//! Solids are sampled the same way as the planar shapes: the geometry is a
//! boundary point set, good enough for bounds and placement. Generation
//! happens in a Z-aligned frame and is then rotated onto the requested axis.

use glam::{Quat, Vec3};
use std::f32::consts::TAU;

use crate::shapes::shape::ShapeGeometry;

const RING_SEGMENTS: u32 = 32;

fn ring(radius: f32, z: f32) -> impl Iterator<Item = Vec3> {
    (0..RING_SEGMENTS).map(move |step| {
        #[allow(clippy::cast_precision_loss)]
        let angle = TAU * (step as f32 / RING_SEGMENTS as f32);
        Vec3::new(radius * angle.cos(), radius * angle.sin(), z)
    })
}

fn orient(points: Vec<Vec3>, direction: Vec3) -> Vec<Vec3> {
    let axis = direction.normalize_or_zero();
    if axis == Vec3::ZERO || axis == Vec3::Z {
        return points;
    }
    let rotation = Quat::from_rotation_arc(Vec3::Z, axis);
    points.into_iter().map(|p| rotation * p).collect()
}

pub struct CylinderOptions {
    pub radius: f32,
    pub height: f32,
    /// Long axis, toward the top cap. Default is out of the screen.
    pub direction: Vec3,
}

impl Default for CylinderOptions {
    fn default() -> Self {
        Self {
            radius: 1.0,
            height: 2.0,
            direction: Vec3::Z,
        }
    }
}

/// Cylinder centered on the local origin, caps at `±height / 2` along the
/// long axis.
#[must_use]
pub fn create_cylinder(options: CylinderOptions) -> ShapeGeometry {
    let half_h = options.height / 2.0;
    let mut points: Vec<Vec3> = ring(options.radius, -half_h).collect();
    points.extend(ring(options.radius, half_h));
    ShapeGeometry::from_points(orient(points, options.direction), true)
}

pub struct ConeOptions {
    pub base_radius: f32,
    pub height: f32,
    /// Apex direction. Default points out of the screen.
    pub direction: Vec3,
}

impl Default for ConeOptions {
    fn default() -> Self {
        Self {
            base_radius: 1.0,
            height: 1.0,
            direction: Vec3::Z,
        }
    }
}

/// Cone centered on the local origin: base ring at `-height / 2`, apex at
/// `+height / 2` along the apex direction.
#[must_use]
pub fn create_cone(options: ConeOptions) -> ShapeGeometry {
    let half_h = options.height / 2.0;
    let mut points: Vec<Vec3> = ring(options.base_radius, -half_h).collect();
    points.push(Vec3::new(0.0, 0.0, half_h));
    ShapeGeometry::from_points(orient(points, options.direction), true)
}
