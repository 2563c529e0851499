//! Camera Frame
//!
//! The visible window onto the scene. In 2D choreography the frame is an
//! ordinary node (see [`crate::scene::Scene::frame`]) so it can be shifted
//! and scaled by the same tweens as any assembly; this module holds the
//! shared extents plus the spatial pose used by 3D work.

use std::f32::consts::FRAC_PI_2;

/// Vertical extent of the default frame, in scene units.
pub const FRAME_HEIGHT: f32 = 8.0;

/// Horizontal extent of the default frame (16:9).
pub const FRAME_WIDTH: f32 = FRAME_HEIGHT * 16.0 / 9.0;

/// Spatial orientation for 3D scenes.
///
/// `phi` tilts the view down from the vertical axis, `theta` turns it around
/// that axis, and `zoom` scales the frame uniformly. Angles are radians; the
/// default pose looks straight down the depth axis like a 2D scene.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CameraPose {
    pub phi: f32,
    pub theta: f32,
    pub zoom: f32,
}

impl CameraPose {
    #[must_use]
    pub fn new(phi: f32, theta: f32, zoom: f32) -> Self {
        Self { phi, theta, zoom }
    }

    /// Convenience constructor taking `phi` and `theta` in degrees.
    #[must_use]
    pub fn from_degrees(phi_deg: f32, theta_deg: f32, zoom: f32) -> Self {
        Self {
            phi: phi_deg.to_radians(),
            theta: theta_deg.to_radians(),
            zoom,
        }
    }
}

impl Default for CameraPose {
    fn default() -> Self {
        Self {
            phi: 0.0,
            theta: -FRAC_PI_2,
            zoom: 1.0,
        }
    }
}
