//! Bounding Boxes
//!
//! Axis-aligned bounds used by the layout helpers. Every shape carries a
//! local-space box; group bounds are the union of transformed child boxes.
//!
//! ## Anchor queries
//!
//! Layout positions assemblies against each other through anchor points on
//! the box surface: [`BoundingBox::boundary_point`] picks, per axis, the min
//! face, the max face, or the center depending on the sign of the query
//! direction. `boundary_point(UP)` is the top-center of the box.

use glam::{Affine3A, Vec3};

/// Axis-aligned bounding box.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoundingBox {
    pub min: Vec3,
    pub max: Vec3,
}

impl BoundingBox {
    /// A degenerate box at the origin. Used for empty groups.
    pub const ZERO: Self = Self {
        min: Vec3::ZERO,
        max: Vec3::ZERO,
    };

    #[must_use]
    pub fn new(min: Vec3, max: Vec3) -> Self {
        Self { min, max }
    }

    /// Builds the tightest box around a point set. Empty input yields
    /// [`BoundingBox::ZERO`].
    #[must_use]
    pub fn from_points(points: &[Vec3]) -> Self {
        let mut iter = points.iter();
        let Some(&first) = iter.next() else {
            return Self::ZERO;
        };
        let mut min = first;
        let mut max = first;
        for &p in iter {
            min = min.min(p);
            max = max.max(p);
        }
        Self { min, max }
    }

    #[inline]
    #[must_use]
    pub fn center(&self) -> Vec3 {
        (self.min + self.max) * 0.5
    }

    #[inline]
    #[must_use]
    pub fn size(&self) -> Vec3 {
        self.max - self.min
    }

    #[inline]
    #[must_use]
    pub fn width(&self) -> f32 {
        self.max.x - self.min.x
    }

    #[inline]
    #[must_use]
    pub fn height(&self) -> f32 {
        self.max.y - self.min.y
    }

    /// Smallest box containing both operands.
    #[must_use]
    pub fn union(&self, other: &Self) -> Self {
        Self {
            min: self.min.min(other.min),
            max: self.max.max(other.max),
        }
    }

    /// Transforms all eight corners and re-fits the box. Conservative for
    /// rotated content, exact for translation and scale.
    #[must_use]
    pub fn transformed(&self, matrix: &Affine3A) -> Self {
        let corners = [
            Vec3::new(self.min.x, self.min.y, self.min.z),
            Vec3::new(self.max.x, self.min.y, self.min.z),
            Vec3::new(self.min.x, self.max.y, self.min.z),
            Vec3::new(self.max.x, self.max.y, self.min.z),
            Vec3::new(self.min.x, self.min.y, self.max.z),
            Vec3::new(self.max.x, self.min.y, self.max.z),
            Vec3::new(self.min.x, self.max.y, self.max.z),
            Vec3::new(self.max.x, self.max.y, self.max.z),
        ];

        let mut min = matrix.transform_point3(corners[0]);
        let mut max = min;
        for corner in &corners[1..] {
            let p = matrix.transform_point3(*corner);
            min = min.min(p);
            max = max.max(p);
        }
        Self { min, max }
    }

    /// Anchor point on the box surface for a query direction.
    ///
    /// Per axis: positive direction selects the max face, negative the min
    /// face, zero the center. The all-zero direction is the box center.
    #[must_use]
    pub fn boundary_point(&self, direction: Vec3) -> Vec3 {
        let center = self.center();
        let pick = |min: f32, max: f32, mid: f32, d: f32| {
            if d > 0.0 {
                max
            } else if d < 0.0 {
                min
            } else {
                mid
            }
        };
        Vec3::new(
            pick(self.min.x, self.max.x, center.x, direction.x),
            pick(self.min.y, self.max.y, center.y, direction.y),
            pick(self.min.z, self.max.z, center.z, direction.z),
        )
    }

    /// Top-center anchor (`boundary_point(UP)`).
    #[inline]
    #[must_use]
    pub fn top(&self) -> Vec3 {
        Vec3::new(self.center().x, self.max.y, self.center().z)
    }

    /// Bottom-center anchor (`boundary_point(DOWN)`).
    #[inline]
    #[must_use]
    pub fn bottom(&self) -> Vec3 {
        Vec3::new(self.center().x, self.min.y, self.center().z)
    }

    /// Left-center anchor (`boundary_point(LEFT)`).
    #[inline]
    #[must_use]
    pub fn left_edge(&self) -> Vec3 {
        Vec3::new(self.min.x, self.center().y, self.center().z)
    }

    /// Right-center anchor (`boundary_point(RIGHT)`).
    #[inline]
    #[must_use]
    pub fn right_edge(&self) -> Vec3 {
        Vec3::new(self.max.x, self.center().y, self.center().z)
    }
}

impl Default for BoundingBox {
    fn default() -> Self {
        Self::ZERO
    }
}
