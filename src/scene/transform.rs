use glam::{Affine3A, Mat4, Quat, Vec3};

/// Transform component.
///
/// Wraps a node's position, rotation and scale (TRS) together with matrix
/// caching and dirty checking. It is a standalone data component: composed
/// into [`crate::scene::Node`], but usable on its own.
#[derive(Debug, Clone)]
pub struct Transform {
    // === Public properties ===
    pub position: Vec3,
    pub rotation: Quat,
    pub scale: Vec3,

    // === Matrix caches (internal) ===
    // pub(crate) so the scene update pass can read/write them directly.
    pub(crate) local_matrix: Affine3A,
    pub(crate) world_matrix: Affine3A,

    // === Shadow state for dirty checking (private) ===
    last_position: Vec3,
    last_rotation: Quat,
    last_scale: Vec3,
    force_update: bool,
}

impl Transform {
    #[must_use]
    pub fn new() -> Self {
        Self {
            position: Vec3::ZERO,
            rotation: Quat::IDENTITY,
            scale: Vec3::ONE,

            local_matrix: Affine3A::IDENTITY,
            world_matrix: Affine3A::IDENTITY,

            last_position: Vec3::ZERO,
            last_rotation: Quat::IDENTITY,
            last_scale: Vec3::ONE,
            force_update: true,
        }
    }

    // ========================================================================
    // Core logic: shadow-state check
    // ========================================================================

    /// Refreshes the local matrix if the public TRS properties changed since
    /// the last call. Returns whether a recomputation happened.
    pub fn update_local_matrix(&mut self) -> bool {
        // 1. Dirty check: compare public properties against the shadow copies
        let changed = self.position != self.last_position
            || self.rotation != self.last_rotation
            || self.scale != self.last_scale
            || self.force_update;

        if changed {
            // 2. Recompute only on change
            self.local_matrix = Affine3A::from_scale_rotation_translation(
                self.scale,
                self.rotation,
                self.position,
            );

            // 3. Sync shadow state
            self.last_position = self.position;
            self.last_rotation = self.rotation;
            self.last_scale = self.scale;
            self.force_update = false;
        }

        changed
    }

    // ========================================================================
    // Getters & Helpers
    // ========================================================================

    /// Local matrix ([`Affine3A`]).
    #[inline]
    #[must_use]
    pub fn local_matrix(&self) -> &Affine3A {
        &self.local_matrix
    }

    /// World matrix ([`Affine3A`]) for CPU-side layout and bounds math.
    #[inline]
    #[must_use]
    pub fn world_matrix(&self) -> &Affine3A {
        &self.world_matrix
    }

    /// World matrix as a [`Mat4`].
    #[inline]
    #[must_use]
    pub fn world_matrix_as_mat4(&self) -> Mat4 {
        Mat4::from(self.world_matrix)
    }

    /// Written by the scene after the hierarchy update pass.
    pub fn set_world_matrix(&mut self, mat: Affine3A) {
        self.world_matrix = mat;
    }

    /// Forces the next `update_local_matrix` to recompute (e.g. after a
    /// reparent, where the world matrix must refresh even if TRS did not).
    pub fn mark_dirty(&mut self) {
        self.force_update = true;
    }
}

impl Default for Transform {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fresh_transform_is_dirty_once() {
        let mut t = Transform::new();
        assert!(t.update_local_matrix(), "first update must recompute");
        assert!(!t.update_local_matrix(), "unchanged TRS must be clean");
    }

    #[test]
    fn position_change_marks_dirty() {
        let mut t = Transform::new();
        t.update_local_matrix();

        t.position = Vec3::new(1.0, 2.0, 3.0);
        assert!(t.update_local_matrix());
        assert_eq!(t.local_matrix().translation.x, 1.0);
    }

    #[test]
    fn mark_dirty_forces_recompute() {
        let mut t = Transform::new();
        t.update_local_matrix();

        t.mark_dirty();
        assert!(t.update_local_matrix());
    }
}
