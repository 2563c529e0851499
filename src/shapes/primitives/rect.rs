use glam::Vec3;
use std::f32::consts::FRAC_PI_2;

use crate::shapes::shape::ShapeGeometry;

pub struct RectOptions {
    pub width: f32,
    pub height: f32,
}

impl Default for RectOptions {
    fn default() -> Self {
        Self {
            width: 4.0,
            height: 2.0,
        }
    }
}

#[must_use]
pub fn create_rect(options: RectOptions) -> ShapeGeometry {
    let half_w = options.width / 2.0;
    let half_h = options.height / 2.0;

    ShapeGeometry::from_points(
        vec![
            Vec3::new(-half_w, -half_h, 0.0),
            Vec3::new(half_w, -half_h, 0.0),
            Vec3::new(half_w, half_h, 0.0),
            Vec3::new(-half_w, half_h, 0.0),
        ],
        true,
    )
}

pub struct SquareOptions {
    pub side: f32,
}

impl Default for SquareOptions {
    fn default() -> Self {
        Self { side: 2.0 }
    }
}

#[must_use]
pub fn create_square(options: SquareOptions) -> ShapeGeometry {
    create_rect(RectOptions {
        width: options.side,
        height: options.side,
    })
}

pub struct RoundedRectOptions {
    pub width: f32,
    pub height: f32,
    pub corner_radius: f32,
    /// Samples per quarter-arc corner.
    pub corner_segments: u32,
}

impl Default for RoundedRectOptions {
    fn default() -> Self {
        Self {
            width: 4.0,
            height: 2.0,
            corner_radius: 0.5,
            corner_segments: 8,
        }
    }
}

/// Rectangle with quarter-arc corners. The radius is clamped so opposing
/// corners never overlap.
#[must_use]
pub fn create_rounded_rect(options: RoundedRectOptions) -> ShapeGeometry {
    let half_w = options.width / 2.0;
    let half_h = options.height / 2.0;
    let radius = options
        .corner_radius
        .min(half_w.abs())
        .min(half_h.abs())
        .max(0.0);
    let segments = options.corner_segments.max(1);

    // Corner arc centers and start angles, counterclockwise from the
    // bottom-right corner
    let corners = [
        (Vec3::new(half_w - radius, -half_h + radius, 0.0), -FRAC_PI_2),
        (Vec3::new(half_w - radius, half_h - radius, 0.0), 0.0),
        (Vec3::new(-half_w + radius, half_h - radius, 0.0), FRAC_PI_2),
        (
            Vec3::new(-half_w + radius, -half_h + radius, 0.0),
            2.0 * FRAC_PI_2,
        ),
    ];

    let mut points = Vec::with_capacity(4 * (segments as usize + 1));
    for (center, start_angle) in corners {
        for step in 0..=segments {
            #[allow(clippy::cast_precision_loss)]
            let angle = start_angle + FRAC_PI_2 * (step as f32 / segments as f32);
            points.push(center + Vec3::new(radius * angle.cos(), radius * angle.sin(), 0.0));
        }
    }

    ShapeGeometry::from_points(points, true)
}
