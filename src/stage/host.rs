//! Render Host Boundary
//!
//! The stage never draws; it hands scene state across this trait and waits
//! for each frame to be presented. Everything hard (rasterization, text,
//! projection) lives on the far side.

use glam::Vec3;

use crate::errors::{Result, StageError};
use crate::scene::scene::Scene;

/// The renderer the stage drives.
pub trait RenderHost {
    /// Asks the host to adopt a backdrop color. Hosts may refuse.
    fn apply_background(&mut self, color: Vec3) -> Result<()>;

    /// Presents one frame of the current scene state. `dt` is the frame's
    /// share of scripted time, in seconds.
    fn present(&mut self, scene: &Scene, dt: f32) -> Result<()>;

    /// Frames presented so far.
    fn frames_presented(&self) -> u64;

    /// Backdrop currently adopted, if any.
    fn background(&self) -> Option<Vec3> {
        None
    }
}

/// Host that counts frames instead of drawing them.
///
/// Used by tests and offline runs: the timeline plus the final scene state
/// fully describe a choreography, so nothing needs rasterizing.
pub struct HeadlessHost {
    supports_background: bool,
    background: Option<Vec3>,
    frames: u64,
    peak_visible: usize,
}

impl Default for HeadlessHost {
    fn default() -> Self {
        Self::new()
    }
}

impl HeadlessHost {
    #[must_use]
    pub fn new() -> Self {
        Self {
            supports_background: true,
            background: None,
            frames: 0,
            peak_visible: 0,
        }
    }

    /// Variant that refuses backdrop changes, like a host whose surface
    /// color is fixed.
    #[must_use]
    pub fn without_background() -> Self {
        Self {
            supports_background: false,
            ..Self::new()
        }
    }

    /// Most nodes seen visible in any presented frame.
    #[must_use]
    pub fn peak_visible(&self) -> usize {
        self.peak_visible
    }
}

impl RenderHost for HeadlessHost {
    fn apply_background(&mut self, color: Vec3) -> Result<()> {
        if !self.supports_background {
            return Err(StageError::UnsupportedBackground);
        }
        self.background = Some(color);
        Ok(())
    }

    fn present(&mut self, scene: &Scene, _dt: f32) -> Result<()> {
        self.frames += 1;
        self.peak_visible = self.peak_visible.max(scene.visible_count());
        Ok(())
    }

    fn frames_presented(&self) -> u64 {
        self.frames
    }

    fn background(&self) -> Option<Vec3> {
        self.background
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scene::node::Node;

    #[test]
    fn headless_host_counts_frames() {
        let mut host = HeadlessHost::new();
        let scene = Scene::new();
        for _ in 0..5 {
            host.present(&scene, 1.0 / 60.0).unwrap();
        }
        assert_eq!(host.frames_presented(), 5);
    }

    #[test]
    fn background_refusal_is_an_error() {
        let mut host = HeadlessHost::without_background();
        let err = host.apply_background(Vec3::ZERO).unwrap_err();
        assert!(matches!(err, StageError::UnsupportedBackground));
        assert!(host.background().is_none());
    }

    #[test]
    fn peak_visible_tracks_the_fullest_frame() {
        let mut host = HeadlessHost::new();
        let mut scene = Scene::new();
        let a = scene.add_node(Node::new("a"));
        let b = scene.add_node(Node::new("b"));

        scene.set_visible_recursive(a, true);
        scene.set_visible_recursive(b, true);
        host.present(&scene, 1.0 / 60.0).unwrap();

        scene.set_visible_recursive(b, false);
        host.present(&scene, 1.0 / 60.0).unwrap();

        assert_eq!(host.peak_visible(), 2, "the peak survives later fades");
    }
}
