use glam::Vec3;
use std::f32::consts::TAU;

use crate::shapes::shape::ShapeGeometry;

/// Samples per full turn. Divisible by four so the axis extremes are hit
/// exactly and circle bounds are tight.
const CIRCLE_SEGMENTS: u32 = 64;

pub struct CircleOptions {
    pub radius: f32,
}

impl Default for CircleOptions {
    fn default() -> Self {
        Self { radius: 1.0 }
    }
}

#[must_use]
pub fn create_circle(options: CircleOptions) -> ShapeGeometry {
    create_ellipse(EllipseOptions {
        width: options.radius * 2.0,
        height: options.radius * 2.0,
    })
}

pub struct EllipseOptions {
    /// Full horizontal extent.
    pub width: f32,
    /// Full vertical extent.
    pub height: f32,
}

impl Default for EllipseOptions {
    fn default() -> Self {
        Self {
            width: 2.0,
            height: 1.0,
        }
    }
}

#[must_use]
pub fn create_ellipse(options: EllipseOptions) -> ShapeGeometry {
    let half_w = options.width / 2.0;
    let half_h = options.height / 2.0;

    let points = (0..CIRCLE_SEGMENTS)
        .map(|step| {
            #[allow(clippy::cast_precision_loss)]
            let angle = TAU * (step as f32 / CIRCLE_SEGMENTS as f32);
            Vec3::new(half_w * angle.cos(), half_h * angle.sin(), 0.0)
        })
        .collect();

    ShapeGeometry::from_points(points, true)
}

pub struct DotOptions {
    pub radius: f32,
}

impl Default for DotOptions {
    fn default() -> Self {
        Self { radius: 0.08 }
    }
}

/// Small filled marker circle.
#[must_use]
pub fn create_dot(options: DotOptions) -> ShapeGeometry {
    create_circle(CircleOptions {
        radius: options.radius,
    })
}

pub struct ArcOptions {
    pub radius: f32,
    pub start_angle: f32,
    /// Swept angle in radians; negative sweeps clockwise.
    pub angle: f32,
}

impl Default for ArcOptions {
    fn default() -> Self {
        Self {
            radius: 1.0,
            start_angle: 0.0,
            angle: TAU / 4.0,
        }
    }
}

/// Open circular arc.
#[must_use]
pub fn create_arc(options: ArcOptions) -> ShapeGeometry {
    #[allow(clippy::cast_precision_loss, clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    let segments = ((CIRCLE_SEGMENTS as f32 * options.angle.abs() / TAU).ceil() as u32).max(2);

    let points = (0..=segments)
        .map(|step| {
            #[allow(clippy::cast_precision_loss)]
            let angle = options.start_angle + options.angle * (step as f32 / segments as f32);
            Vec3::new(
                options.radius * angle.cos(),
                options.radius * angle.sin(),
                0.0,
            )
        })
        .collect();

    ShapeGeometry::from_points(points, false)
}
