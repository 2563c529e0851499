//! Fill and stroke styling, plus the stock color palette.

use glam::Vec3;

use crate::errors::{Result, StageError};

/// How a shape is painted: fill color and opacity, stroke color, width and
/// opacity. Width is in points, colors are linear RGB in `[0, 1]`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Style {
    pub fill: Vec3,
    pub fill_opacity: f32,
    pub stroke: Vec3,
    pub stroke_width: f32,
    pub stroke_opacity: f32,
}

impl Default for Style {
    fn default() -> Self {
        Self {
            fill: WHITE,
            fill_opacity: 0.0,
            stroke: WHITE,
            stroke_width: 2.0,
            stroke_opacity: 1.0,
        }
    }
}

impl Style {
    /// Fill-only style: no stroke.
    #[must_use]
    pub fn fill(color: Vec3, opacity: f32) -> Self {
        Self {
            fill: color,
            fill_opacity: opacity,
            stroke: color,
            stroke_width: 0.0,
            stroke_opacity: 1.0,
        }
    }

    /// Stroke-only style: transparent interior.
    #[must_use]
    pub fn stroke(color: Vec3, width: f32) -> Self {
        Self {
            fill: color,
            fill_opacity: 0.0,
            stroke: color,
            stroke_width: width,
            stroke_opacity: 1.0,
        }
    }

    /// Fully transparent style, for pure layout geometry.
    #[must_use]
    pub fn invisible() -> Self {
        Self {
            fill: WHITE,
            fill_opacity: 0.0,
            stroke: WHITE,
            stroke_width: 0.0,
            stroke_opacity: 0.0,
        }
    }

    #[must_use]
    pub fn with_fill(mut self, color: Vec3, opacity: f32) -> Self {
        self.fill = color;
        self.fill_opacity = opacity;
        self
    }

    #[must_use]
    pub fn with_stroke(mut self, color: Vec3, width: f32) -> Self {
        self.stroke = color;
        self.stroke_width = width;
        self
    }

    #[must_use]
    pub fn with_stroke_opacity(mut self, opacity: f32) -> Self {
        self.stroke_opacity = opacity;
        self
    }
}

// ========================================================================
// Palette
// ========================================================================

const fn rgb8(r: u8, g: u8, b: u8) -> Vec3 {
    Vec3::new(r as f32 / 255.0, g as f32 / 255.0, b as f32 / 255.0)
}

pub const WHITE: Vec3 = Vec3::new(1.0, 1.0, 1.0);
pub const BLACK: Vec3 = Vec3::new(0.0, 0.0, 0.0);
pub const GRAY: Vec3 = rgb8(0x88, 0x88, 0x88);
pub const GRAY_B: Vec3 = rgb8(0xBB, 0xBB, 0xBB);
pub const GRAY_C: Vec3 = GRAY;
pub const GRAY_D: Vec3 = rgb8(0x44, 0x44, 0x44);
pub const GRAY_E: Vec3 = rgb8(0x22, 0x22, 0x22);
pub const DARK_GRAY: Vec3 = GRAY_D;
pub const TEAL: Vec3 = rgb8(0x5C, 0xD0, 0xB3);
pub const ORANGE: Vec3 = rgb8(0xFF, 0x86, 0x2F);
pub const YELLOW: Vec3 = rgb8(0xFF, 0xFF, 0x00);
pub const BLUE: Vec3 = rgb8(0x58, 0xC4, 0xDD);
pub const BLUE_E: Vec3 = rgb8(0x1C, 0x75, 0x8A);

/// Parses a `#RRGGBB` hex string into linear RGB.
pub fn parse_hex(color: &str) -> Result<Vec3> {
    let digits = color
        .strip_prefix('#')
        .ok_or_else(|| StageError::InvalidColor(color.to_owned()))?;
    if digits.len() != 6 || !digits.chars().all(|c| c.is_ascii_hexdigit()) {
        return Err(StageError::InvalidColor(color.to_owned()));
    }
    let channel = |range: std::ops::Range<usize>| {
        u8::from_str_radix(&digits[range], 16).map_or(0.0, |v| f32::from(v) / 255.0)
    };
    Ok(Vec3::new(channel(0..2), channel(2..4), channel(4..6)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_hex_round_trips_channels() {
        let color = parse_hex("#02030A").unwrap();
        assert!((color.x - 2.0 / 255.0).abs() < 1e-6);
        assert!((color.y - 3.0 / 255.0).abs() < 1e-6);
        assert!((color.z - 10.0 / 255.0).abs() < 1e-6);
    }

    #[test]
    fn parse_hex_rejects_malformed_input() {
        assert!(parse_hex("02030A").is_err());
        assert!(parse_hex("#0203").is_err());
        assert!(parse_hex("#02030G").is_err());
    }
}
