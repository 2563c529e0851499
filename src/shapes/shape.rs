//! Shape Component
//!
//! A [`Shape`] is what a node displays: sampled outline geometry plus a
//! paint [`Style`], and optionally a text label. Geometry is stored in the
//! node's local space; world placement comes from the node transform.

use std::borrow::Cow;

use glam::Vec3;

use crate::scene::bounds::BoundingBox;
use crate::shapes::style::Style;

/// Scene units of label height per font-size point.
pub const LABEL_UNIT_HEIGHT: f32 = 0.012;

/// Glyph advance as a fraction of the label height.
const LABEL_ADVANCE_RATIO: f32 = 0.6;

/// Sampled outline of a shape, with its local-space bounds.
///
/// The bounds are computed once at construction; geometry is immutable
/// afterwards except through [`Shape::set_text`], which rebuilds it.
#[derive(Debug, Clone, PartialEq)]
pub struct ShapeGeometry {
    pub points: Vec<Vec3>,
    /// Whether the outline closes back to its first point.
    pub closed: bool,
    pub bounding_box: BoundingBox,
}

impl ShapeGeometry {
    #[must_use]
    pub fn from_points(points: Vec<Vec3>, closed: bool) -> Self {
        let bounding_box = BoundingBox::from_points(&points);
        Self {
            points,
            closed,
            bounding_box,
        }
    }
}

/// Text content attached to a shape.
#[derive(Debug, Clone, PartialEq)]
pub struct Label {
    pub text: String,
    pub font_size: f32,
}

/// A displayable shape: geometry, paint style and optional label.
#[derive(Debug, Clone, PartialEq)]
pub struct Shape {
    pub name: Cow<'static, str>,
    pub geometry: ShapeGeometry,
    pub style: Style,
    pub label: Option<Label>,
}

impl Shape {
    #[must_use]
    pub fn new(
        name: impl Into<Cow<'static, str>>,
        geometry: ShapeGeometry,
        style: Style,
    ) -> Self {
        Self {
            name: name.into(),
            geometry,
            style,
            label: None,
        }
    }

    /// Builds a text label shape. Extents come from a glyph-box metric:
    /// height scales with `font_size`, width with the character count, and
    /// the box is centered on the local origin.
    #[must_use]
    pub fn label(
        name: impl Into<Cow<'static, str>>,
        text: impl Into<String>,
        font_size: f32,
        style: Style,
    ) -> Self {
        let text = text.into();
        let geometry = label_geometry(&text, font_size);
        Self {
            name: name.into(),
            geometry,
            style,
            label: Some(Label { text, font_size }),
        }
    }

    /// Replaces the label text in place, rebuilding the glyph-box geometry
    /// for the new character count. No-op on shapes without a label.
    pub fn set_text(&mut self, text: impl Into<String>) {
        let Some(label) = self.label.as_mut() else {
            return;
        };
        label.text = text.into();
        self.geometry = label_geometry(&label.text, label.font_size);
    }
}

fn label_geometry(text: &str, font_size: f32) -> ShapeGeometry {
    let height = font_size * LABEL_UNIT_HEIGHT;
    let advance = height * LABEL_ADVANCE_RATIO;
    #[allow(clippy::cast_precision_loss)]
    let width = advance * text.chars().count().max(1) as f32;

    let half_w = width * 0.5;
    let half_h = height * 0.5;
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
