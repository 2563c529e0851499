//! Batch Player
//!
//! # Overview
//!
//! Turns a declarative [`PlayBatch`] into concrete per-frame mutations.
//! `resolve` captures every endpoint against the live scene once, at the
//! start of the window; `apply` then blends between those fixed endpoints,
//! and `finalize` snaps each property onto its exact resolved end so no
//! floating-point drift survives the window.
//!
//! # Design Principles
//!
//! - **Capture once.** Start states are read a single time. Re-reading
//!   mid-window would feed the blend its own output.
//! - **World deltas, local writes.** Shift and move targets arrive in world
//!   space and are mapped through the parent's world matrix before they
//!   touch a local transform.
//! - **Exact landings.** The final state is assigned, not interpolated;
//!   a there-and-back window assigns the start state instead.

use glam::Vec3;

use crate::animation::batch::PlayBatch;
use crate::animation::easing::RateFunction;
use crate::animation::tween::{TweenOp, TweenTarget};
use crate::animation::values::Interpolatable;
use crate::errors::{Result, StageError};
use crate::scene::layout::{self, world_delta_to_local};
use crate::scene::scene::{Scene, SceneFeatures};
use crate::scene::{CameraPose, NodeHandle};

#[derive(Debug)]
enum Track {
    Position {
        node: NodeHandle,
        start: Vec3,
        end: Vec3,
    },
    Scale {
        node: NodeHandle,
        start: Vec3,
        end: Vec3,
    },
    Opacity {
        node: NodeHandle,
        start: f32,
        end: f32,
    },
    Pose {
        start: CameraPose,
        end: CameraPose,
    },
}

/// A resolved play window, ready to blend frame by frame.
#[derive(Debug)]
pub(crate) struct BatchPlayer {
    rate_func: RateFunction,
    tracks: Vec<Track>,
    /// Subtrees hidden once the window resolves.
    conceal: Vec<NodeHandle>,
}

impl BatchPlayer {
    /// Captures endpoints for every tween in the batch.
    ///
    /// Reveals happen here: a fade-in target becomes visible at zero
    /// opacity before its first frame. Label swaps also land here, at the
    /// start of the window. Fails if a tween addresses a removed node.
    pub(crate) fn resolve(batch: &PlayBatch, scene: &mut Scene) -> Result<Self> {
        scene.update_world();

        let mut tracks = Vec::new();
        let mut conceal = Vec::new();

        for tween in &batch.tweens {
            match tween.target {
                TweenTarget::Node(handle) => {
                    if scene.get_node(handle).is_none() {
                        return Err(StageError::NodeNotFound(format!("{handle:?}")));
                    }
                    for op in &tween.ops {
                        resolve_node_op(scene, handle, op, &mut tracks, &mut conceal);
                    }
                }
                TweenTarget::Pose => {
                    for op in &tween.ops {
                        if let TweenOp::OrientTo(pose) = op {
                            scene.features |= SceneFeatures::SPATIAL_POSE;
                            tracks.push(Track::Pose {
                                start: scene.camera_pose,
                                end: *pose,
                            });
                        } else {
                            log::warn!("Pose tween only supports orientation ops");
                        }
                    }
                }
            }
        }

        Ok(Self {
            rate_func: batch.rate_func,
            tracks,
            conceal,
        })
    }

    /// Writes the blended state for normalized time `t` into the scene.
    pub(crate) fn apply(&self, scene: &mut Scene, t: f32) {
        let progress = self.rate_func.evaluate(t);
        for track in &self.tracks {
            match *track {
                Track::Position { node, start, end } => {
                    if let Some(node) = scene.get_node_mut(node) {
                        node.transform.position = Vec3::interpolate_linear(start, end, progress);
                    }
                }
                Track::Scale { node, start, end } => {
                    if let Some(node) = scene.get_node_mut(node) {
                        node.transform.scale = Vec3::interpolate_linear(start, end, progress);
                    }
                }
                Track::Opacity { node, start, end } => {
                    if let Some(node) = scene.get_node_mut(node) {
                        node.opacity = f32::interpolate_linear(start, end, progress);
                    }
                }
                Track::Pose { start, end } => {
                    scene.camera_pose = CameraPose {
                        phi: f32::interpolate_linear(start.phi, end.phi, progress),
                        theta: f32::interpolate_linear(start.theta, end.theta, progress),
                        zoom: f32::interpolate_linear(start.zoom, end.zoom, progress),
                    };
                }
            }
        }
    }

    /// Assigns exact terminal values and hides concealed subtrees.
    pub(crate) fn finalize(&self, scene: &mut Scene) {
        // A curve ending at zero (there-and-back) lands on its start state
        let at_start = self.rate_func.evaluate(1.0) < 0.5;
        for track in &self.tracks {
            match *track {
                Track::Position { node, start, end } => {
                    if let Some(node) = scene.get_node_mut(node) {
                        node.transform.position = if at_start { start } else { end };
                    }
                }
                Track::Scale { node, start, end } => {
                    if let Some(node) = scene.get_node_mut(node) {
                        node.transform.scale = if at_start { start } else { end };
                    }
                }
                Track::Opacity { node, start, end } => {
                    if let Some(node) = scene.get_node_mut(node) {
                        node.opacity = if at_start { start } else { end };
                    }
                }
                Track::Pose { start, end } => {
                    scene.camera_pose = if at_start { start } else { end };
                }
            }
        }
        for &handle in &self.conceal {
            scene.set_visible_recursive(handle, false);
        }
        scene.update_world();
    }
}

fn resolve_node_op(
    scene: &mut Scene,
    handle: NodeHandle,
    op: &TweenOp,
    tracks: &mut Vec<Track>,
    conceal: &mut Vec<NodeHandle>,
) {
    match op {
        TweenOp::Shift(delta) => {
            let local_delta = world_delta_to_local(scene, handle, *delta);
            if let Some(node) = scene.get_node(handle) {
                let start = node.transform.position;
                tracks.push(Track::Position {
                    node: handle,
                    start,
                    end: start + local_delta,
                });
            }
        }
        TweenOp::MoveTo(point) => {
            let delta = *point - layout::world_bbox(scene, handle).center();
            let local_delta = world_delta_to_local(scene, handle, delta);
            if let Some(node) = scene.get_node(handle) {
                let start = node.transform.position;
                tracks.push(Track::Position {
                    node: handle,
                    start,
                    end: start + local_delta,
                });
            }
        }
        TweenOp::ScaleBy(factor) => {
            if let Some(node) = scene.get_node(handle) {
                let start = node.transform.scale;
                tracks.push(Track::Scale {
                    node: handle,
                    start,
                    end: start * *factor,
                });
            }
        }
        TweenOp::FadeTo(opacity) => {
            if let Some(node) = scene.get_node(handle) {
                tracks.push(Track::Opacity {
                    node: handle,
                    start: node.opacity,
                    end: *opacity,
                });
            }
        }
        TweenOp::FadeIn { shift } => {
            let Some(target_opacity) = scene.get_node(handle).map(|n| n.opacity) else {
                return;
            };
            scene.set_visible_recursive(handle, true);
            if *shift != Vec3::ZERO {
                let local_shift = world_delta_to_local(scene, handle, *shift);
                if let Some(node) = scene.get_node_mut(handle) {
                    let placed = node.transform.position;
                    node.transform.position = placed - local_shift;
                    tracks.push(Track::Position {
                        node: handle,
                        start: placed - local_shift,
                        end: placed,
                    });
                }
            }
            if let Some(node) = scene.get_node_mut(handle) {
                node.opacity = 0.0;
            }
            tracks.push(Track::Opacity {
                node: handle,
                start: 0.0,
                end: target_opacity,
            });
        }
        TweenOp::FadeOut { shift } => {
            if *shift != Vec3::ZERO {
                let local_shift = world_delta_to_local(scene, handle, *shift);
                if let Some(node) = scene.get_node(handle) {
                    let start = node.transform.position;
                    tracks.push(Track::Position {
                        node: handle,
                        start,
                        end: start + local_shift,
                    });
                }
            }
            if let Some(node) = scene.get_node(handle) {
                tracks.push(Track::Opacity {
                    node: handle,
                    start: node.opacity,
                    end: 0.0,
                });
            }
            conceal.push(handle);
        }
        TweenOp::SwapLabel(text) => {
            if let Some(shape) = scene.shape_of_mut(handle) {
                shape.set_text(text.clone());
            }
        }
        TweenOp::OrientTo(_) => {
            log::warn!("Orientation op requires the pose target");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::animation::tween::Tween;
    use crate::scene::layout::UP;
    use crate::scene::node::Node;
    use crate::shapes::primitives::{RectOptions, create_rect};
    use crate::shapes::{Shape, Style};

    fn scene_with_box() -> (Scene, NodeHandle) {
        let mut scene = Scene::new();
        let handle = scene.add_shape(Shape::new(
            "box",
            create_rect(RectOptions {
                width: 1.0,
                height: 1.0,
            }),
            Style::default(),
        ));
        scene.set_visible_recursive(handle, true);
        (scene, handle)
    }

    #[test]
    fn shift_lands_exactly_on_endpoint() {
        let (mut scene, handle) = scene_with_box();
        let batch = PlayBatch::new().with(Tween::node(handle).shift(8.0 * UP));
        let player = BatchPlayer::resolve(&batch, &mut scene).unwrap();

        player.apply(&mut scene, 0.37);
        player.finalize(&mut scene);
        let position = scene.get_node(handle).unwrap().transform.position;
        assert_eq!(position, Vec3::new(0.0, 8.0, 0.0));
    }

    #[test]
    fn there_and_back_returns_to_start() {
        let (mut scene, handle) = scene_with_box();
        let batch = PlayBatch::new()
            .with(Tween::node(handle).shift(0.06 * UP))
            .rate(RateFunction::ThereAndBack);
        let player = BatchPlayer::resolve(&batch, &mut scene).unwrap();

        player.apply(&mut scene, 0.5);
        let peak = scene.get_node(handle).unwrap().transform.position.y;
        assert!((peak - 0.06).abs() < 1e-6);

        player.finalize(&mut scene);
        let settled = scene.get_node(handle).unwrap().transform.position;
        assert_eq!(settled, Vec3::ZERO);
    }

    #[test]
    fn fade_in_reveals_at_zero_opacity() {
        let mut scene = Scene::new();
        let handle = scene.add_node(Node::new("group"));
        assert!(!scene.get_node(handle).unwrap().visible);

        let batch = PlayBatch::new().with(Tween::fade_in_shifted(handle, 0.4 * UP));
        let player = BatchPlayer::resolve(&batch, &mut scene).unwrap();

        let node = scene.get_node(handle).unwrap();
        assert!(node.visible);
        assert!(node.opacity.abs() < 1e-6);
        // Starts displaced opposite the glide direction
        assert!((node.transform.position.y + 0.4).abs() < 1e-6);

        player.finalize(&mut scene);
        let node = scene.get_node(handle).unwrap();
        assert!((node.opacity - 1.0).abs() < 1e-6);
        assert_eq!(node.transform.position, Vec3::ZERO);
    }

    #[test]
    fn fade_out_hides_subtree_after_window() {
        let (mut scene, handle) = scene_with_box();
        let batch = PlayBatch::new().with(Tween::fade_out(handle));
        let player = BatchPlayer::resolve(&batch, &mut scene).unwrap();

        player.apply(&mut scene, 0.5);
        assert!(scene.get_node(handle).unwrap().visible);

        player.finalize(&mut scene);
        let node = scene.get_node(handle).unwrap();
        assert!(!node.visible);
        assert!(node.opacity.abs() < 1e-6);
    }

    #[test]
    fn swap_label_applies_at_resolve() {
        let mut scene = Scene::new();
        let handle = scene.add_shape(Shape::label("count", "3", 64.0, Style::default()));
        let batch = PlayBatch::new().with(Tween::node(handle).become_text("2"));
        let _player = BatchPlayer::resolve(&batch, &mut scene).unwrap();

        let shape = scene.shape_of(handle).unwrap();
        assert_eq!(shape.label.as_ref().unwrap().text, "2");
    }

    #[test]
    fn stale_handle_is_an_error() {
        let (mut scene, handle) = scene_with_box();
        scene.remove_node(handle);
        let batch = PlayBatch::new().with(Tween::node(handle).shift(UP));
        let err = BatchPlayer::resolve(&batch, &mut scene).unwrap_err();
        assert!(matches!(err, StageError::NodeNotFound(_)));
    }

    #[test]
    fn group_shift_carries_children_in_world_space() {
        let mut scene = Scene::new();
        let group = scene.add_node(Node::new("group"));
        let leaf = scene.add_shape_to_parent(
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
        scene.set_visible_recursive(group, true);

        let batch = PlayBatch::new().with(Tween::node(group).shift(Vec3::new(1.6, 0.0, 0.0)));
        let player = BatchPlayer::resolve(&batch, &mut scene).unwrap();
        player.finalize(&mut scene);

        let center = layout::center_of(&scene, leaf);
        assert!((center.x - 1.6).abs() < 1e-5);
    }
}
