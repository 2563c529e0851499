//! Stage Runtime
//!
//! # Overview
//!
//! [`Stage`] is where a choreography meets a renderer: it owns the scene,
//! resolves play batches into frames, presents each frame through a
//! [`RenderHost`], and records everything it did on a [`Timeline`]. A
//! scripted scene implements [`Choreography`] and issues `add`, `play` and
//! `wait` calls from its `construct` method.
//!
//! # Design Principles
//!
//! - **Sequential windows.** `play` does not return until its window has
//!   fully resolved; concurrency exists only inside a window, never across
//!   windows.
//! - **Validated up front.** A malformed duration aborts the run before a
//!   single frame of the window is produced.
//! - **One quiet failure.** Backdrop assignment is the only operation that
//!   absorbs failure: a host that cannot take a background keeps its own,
//!   with no error, retry or log. Everything else surfaces a [`StageError`].

pub mod host;

pub use host::{HeadlessHost, RenderHost};

use crate::animation::batch::PlayBatch;
use crate::animation::player::BatchPlayer;
use crate::animation::timeline::{BatchRecord, Timeline, TimelineEvent};
use crate::errors::{Result, StageError};
use crate::scene::scene::{Scene, SceneFeatures};
use crate::scene::{CameraPose, NodeHandle};
use crate::shapes::parse_hex;
use crate::utils::ticker::FrameTicker;

/// A scripted scene: builds its assemblies and issues its timeline from
/// `construct`.
pub trait Choreography {
    fn construct(&mut self, stage: &mut Stage) -> Result<()>;
}

/// Drives a choreography against a render host.
pub struct Stage {
    pub scene: Scene,
    timeline: Timeline,
    ticker: FrameTicker,
    host: Box<dyn RenderHost>,
}

impl Stage {
    #[must_use]
    pub fn new(host: Box<dyn RenderHost>) -> Self {
        Self {
            scene: Scene::new(),
            timeline: Timeline::default(),
            ticker: FrameTicker::default(),
            host,
        }
    }

    /// Stage backed by a frame-counting host; the usual entry point for
    /// tests and timeline inspection.
    #[must_use]
    pub fn headless() -> Self {
        Self::new(Box::new(HeadlessHost::new()))
    }

    /// Runs a choreography to completion.
    pub fn run(&mut self, choreography: &mut dyn Choreography) -> Result<()> {
        log::info!("Constructing choreography");
        choreography.construct(self)
    }

    #[must_use]
    pub fn timeline(&self) -> &Timeline {
        &self.timeline
    }

    #[must_use]
    pub fn ticker(&self) -> &FrameTicker {
        &self.ticker
    }

    #[must_use]
    pub fn host(&self) -> &dyn RenderHost {
        self.host.as_ref()
    }

    // ========================================================================
    // Declarative surface
    // ========================================================================

    /// Reveals a subtree immediately, outside any play window.
    pub fn add(&mut self, handle: NodeHandle) {
        let Some(name) = self.scene.get_node(handle).map(|n| n.name.to_string()) else {
            log::warn!("add: unknown node handle");
            return;
        };
        self.scene.set_visible_recursive(handle, true);
        self.timeline.push(TimelineEvent::Added { name });
    }

    /// Reveals a subtree pinned to the frame overlay: it ignores camera
    /// motion and spatial pose, like a screen-space readout.
    pub fn add_fixed_in_frame(&mut self, handle: NodeHandle) {
        if let Some(node) = self.scene.get_node_mut(handle) {
            node.fixed_in_frame = true;
            self.scene.features |= SceneFeatures::FIXED_OVERLAY;
        }
        self.add(handle);
    }

    /// Plays one batch to resolution: validates it, captures endpoints,
    /// presents every frame of the window, then snaps exact end states.
    pub fn play(&mut self, batch: PlayBatch) -> Result<()> {
        batch.validate()?;
        let player = BatchPlayer::resolve(&batch, &mut self.scene)?;
        let record = BatchRecord::of(&batch, &self.scene);

        let frames = self.ticker.frames_for(batch.run_time);
        let dt = self.ticker.dt_seconds();
        log::debug!(
            "play: {} ops over {} frames",
            record.ops.len(),
            frames
        );

        for frame in 1..=frames {
            #[allow(clippy::cast_precision_loss)]
            let t = frame as f32 / frames as f32;
            player.apply(&mut self.scene, t);
            self.scene.update_world();
            self.host.present(&self.scene, dt)?;
        }
        player.finalize(&mut self.scene);

        self.timeline.push(TimelineEvent::Play(record));
        self.ticker.advance(frames);
        Ok(())
    }

    /// Holds the current state on screen for `seconds`.
    pub fn wait(&mut self, seconds: f32) -> Result<()> {
        if !seconds.is_finite() || seconds < 0.0 {
            return Err(StageError::InvalidDuration { seconds });
        }
        self.scene.update_world();

        let frames = self.ticker.frames_for(seconds);
        let dt = self.ticker.dt_seconds();
        for _ in 0..frames {
            self.host.present(&self.scene, dt)?;
        }

        self.timeline.push(TimelineEvent::Wait { seconds });
        self.ticker.advance(frames);
        Ok(())
    }

    /// Applies a backdrop color if the host takes one.
    ///
    /// This is the one quiet failure path: a malformed color or a host
    /// refusal leaves the previous backdrop in place and the run continues.
    pub fn set_background(&mut self, color: &str) {
        let Ok(rgb) = parse_hex(color) else {
            return;
        };
        if self.host.apply_background(rgb).is_ok() {
            self.scene.background = Some(rgb);
            self.scene.features |= SceneFeatures::BACKDROP;
        }
    }

    /// Jumps the spatial camera pose, with no transition.
    pub fn set_camera_orientation(&mut self, pose: CameraPose) {
        self.scene.camera_pose = pose;
        self.scene.features |= SceneFeatures::SPATIAL_POSE;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::animation::tween::Tween;
    use crate::scene::layout::{self, UP};
    use crate::scene::node::Node;
    use crate::shapes::primitives::{RectOptions, create_rect};
    use crate::shapes::{Shape, Style};
    use glam::Vec3;

    fn stage_with_box() -> (Stage, NodeHandle) {
        let mut stage = Stage::headless();
        let handle = stage.scene.add_shape(Shape::new(
            "box",
            create_rect(RectOptions::default()),
            Style::default(),
        ));
        (stage, handle)
    }

    #[test]
    fn add_reveals_and_records() {
        let (mut stage, handle) = stage_with_box();
        assert_eq!(stage.scene.visible_count(), 0);

        stage.add(handle);
        assert_eq!(stage.scene.visible_count(), 1);
        assert_eq!(
            stage.timeline().events(),
            &[TimelineEvent::Added {
                name: "box".to_owned()
            }]
        );
    }

    #[test]
    fn play_presents_run_time_times_frame_rate() {
        let (mut stage, handle) = stage_with_box();
        stage.add(handle);
        stage
            .play(
                PlayBatch::new()
                    .with(Tween::node(handle).shift(UP))
                    .run_time(2.5),
            )
            .unwrap();
        assert_eq!(stage.host().frames_presented(), 150);
        assert_eq!(stage.ticker().frame_count, 150);
    }

    #[test]
    fn invalid_duration_aborts_before_presenting() {
        let (mut stage, handle) = stage_with_box();
        let result = stage.play(
            PlayBatch::new()
                .with(Tween::node(handle).shift(UP))
                .run_time(-1.0),
        );
        assert!(matches!(
            result,
            Err(StageError::InvalidDuration { .. })
        ));
        assert_eq!(stage.host().frames_presented(), 0);
        assert_eq!(stage.timeline().events().len(), 0);
    }

    #[test]
    fn wait_rejects_negative_and_nan() {
        let mut stage = Stage::headless();
        assert!(stage.wait(-0.5).is_err());
        assert!(stage.wait(f32::NAN).is_err());
        assert!(stage.wait(0.8).is_ok());
    }

    #[test]
    fn background_is_adopted_when_supported() {
        let mut stage = Stage::headless();
        stage.set_background("#02030A");
        assert!(stage.scene.background.is_some());
        assert!(stage.host().background().is_some());
        assert!(stage.scene.get_features().contains(SceneFeatures::BACKDROP));
    }

    #[test]
    fn background_refusal_is_absorbed() {
        let mut stage = Stage::new(Box::new(HeadlessHost::without_background()));
        stage.set_background("#02030A");
        // Run continues, nothing adopted, nothing recorded
        assert!(stage.scene.background.is_none());
        assert!(stage.host().background().is_none());
        assert!(!stage.scene.get_features().contains(SceneFeatures::BACKDROP));
        assert!(stage.wait(0.1).is_ok());
    }

    #[test]
    fn malformed_background_color_is_absorbed() {
        let mut stage = Stage::headless();
        stage.set_background("not-a-color");
        assert!(stage.scene.background.is_none());
    }

    #[test]
    fn play_moves_state_to_exact_endpoint() {
        let (mut stage, handle) = stage_with_box();
        stage.add(handle);
        stage
            .play(PlayBatch::new().with(Tween::node(handle).shift(8.0 * UP)))
            .unwrap();
        let center = layout::center_of(&stage.scene, handle);
        assert_eq!(center.y, 8.0);
    }

    #[test]
    fn fixed_overlay_marks_feature() {
        let mut stage = Stage::headless();
        let label = stage
            .scene
            .add_shape(Shape::label("count", "3", 64.0, Style::default()));
        stage.add_fixed_in_frame(label);
        assert!(stage.scene.get_node(label).unwrap().fixed_in_frame);
        assert!(
            stage
                .scene
                .get_features()
                .contains(SceneFeatures::FIXED_OVERLAY)
        );
    }

    #[test]
    fn group_tween_through_stage_carries_children() {
        let mut stage = Stage::headless();
        let group = stage.scene.add_node(Node::new("group"));
        let leaf = stage.scene.add_shape_to_parent(
            Shape::new(
                "leaf",
                create_rect(RectOptions {
                    width: 1.0,
                    height: 1.0,
                }),
                Style::default(),
            ),
            group,
        );
        stage.add(group);
        stage
            .play(
                PlayBatch::new()
                    .with(Tween::node(group).shift(Vec3::new(0.0, -2.8, 0.0)))
                    .run_time(0.5),
            )
            .unwrap();
        let center = layout::center_of(&stage.scene, leaf);
        assert!((center.y + 2.8).abs() < 1e-5);
    }
}
