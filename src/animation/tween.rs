//! Tween Declarations
//!
//! A [`Tween`] names a target (a node, or the spatial camera pose) and the
//! property transitions applied to it over one play window. Tweens are pure
//! declarations: endpoint capture and per-frame blending happen in the
//! player when the batch is played.

use glam::Vec3;
use smallvec::SmallVec;

use crate::scene::{CameraPose, NodeHandle};

/// What a tween drives.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TweenTarget {
    Node(NodeHandle),
    /// The scene's spatial camera pose.
    Pose,
}

/// One property transition inside a play window.
#[derive(Debug, Clone, PartialEq)]
pub enum TweenOp {
    /// Translate by a world-space delta.
    Shift(Vec3),
    /// Land the subtree's bounding-box center on a world-space point.
    MoveTo(Vec3),
    /// Multiply the node's scale by a factor.
    ScaleBy(f32),
    /// Blend the node's own opacity to a value.
    FadeTo(f32),
    /// Reveal the subtree: opacity rises from zero to the node's own
    /// value while it glides into place along `shift`.
    FadeIn { shift: Vec3 },
    /// Conceal the subtree: opacity falls to zero while it glides out
    /// along `shift`; the subtree is hidden once the window resolves.
    FadeOut { shift: Vec3 },
    /// Replace a text label's content at the start of the window.
    SwapLabel(String),
    /// Blend the spatial camera pose to a new orientation.
    OrientTo(CameraPose),
}

/// A target plus the ops applied to it over one play window.
///
/// Most tweens carry one or two ops (a launch shifts and fades in the same
/// window), so the op list is inline-allocated.
#[derive(Debug, Clone, PartialEq)]
pub struct Tween {
    pub target: TweenTarget,
    pub ops: SmallVec<[TweenOp; 2]>,
}

impl Tween {
    /// Starts a tween on a node; chain ops onto it.
    #[must_use]
    pub fn node(handle: NodeHandle) -> Self {
        Self {
            target: TweenTarget::Node(handle),
            ops: SmallVec::new(),
        }
    }

    /// Reveal with no glide.
    #[must_use]
    pub fn fade_in(handle: NodeHandle) -> Self {
        Self::fade_in_shifted(handle, Vec3::ZERO)
    }

    /// Reveal while gliding into place along `shift`.
    #[must_use]
    pub fn fade_in_shifted(handle: NodeHandle, shift: Vec3) -> Self {
        let mut tween = Self::node(handle);
        tween.ops.push(TweenOp::FadeIn { shift });
        tween
    }

    /// Conceal with no glide.
    #[must_use]
    pub fn fade_out(handle: NodeHandle) -> Self {
        Self::fade_out_shifted(handle, Vec3::ZERO)
    }

    /// Conceal while gliding out along `shift`.
    #[must_use]
    pub fn fade_out_shifted(handle: NodeHandle, shift: Vec3) -> Self {
        let mut tween = Self::node(handle);
        tween.ops.push(TweenOp::FadeOut { shift });
        tween
    }

    /// Blend the spatial camera pose to `pose`.
    #[must_use]
    pub fn orient(pose: CameraPose) -> Self {
        let mut tween = Self {
            target: TweenTarget::Pose,
            ops: SmallVec::new(),
        };
        tween.ops.push(TweenOp::OrientTo(pose));
        tween
    }

    // ===== Chained ops =====

    #[must_use]
    pub fn shift(mut self, delta: Vec3) -> Self {
        self.ops.push(TweenOp::Shift(delta));
        self
    }

    #[must_use]
    pub fn move_to(mut self, target: Vec3) -> Self {
        self.ops.push(TweenOp::MoveTo(target));
        self
    }

    #[must_use]
    pub fn scale(mut self, factor: f32) -> Self {
        self.ops.push(TweenOp::ScaleBy(factor));
        self
    }

    #[must_use]
    pub fn fade_to(mut self, opacity: f32) -> Self {
        self.ops.push(TweenOp::FadeTo(opacity));
        self
    }

    #[must_use]
    pub fn become_text(mut self, text: impl Into<String>) -> Self {
        self.ops.push(TweenOp::SwapLabel(text.into()));
        self
    }
}
