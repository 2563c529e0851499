use std::borrow::Cow;

use glam::Affine3A;

use crate::scene::transform::Transform;
use crate::scene::{NodeHandle, ShapeKey};

/// A scene node containing hierarchy links, spatial data and display state.
///
/// # Design Principles
///
/// - Keeps only the data traversed every frame (hierarchy and transform)
///   plus the small display flags the presenter reads
/// - Shape geometry lives in the scene's component pool and is referenced
///   by key, keeping nodes small and contiguous
///
/// # Hierarchy
///
/// Nodes form a tree through parent-child relationships:
/// - `parent`: Optional handle to parent node (None for root nodes)
/// - `children`: List of child node handles
///
/// A group is nothing more than a node with children: moving, scaling or
/// fading the group node affects the whole rigid assembly.
///
/// # Display state
///
/// Nodes spawn hidden; [`crate::stage::Stage::add`] (or a fade-in tween)
/// reveals them. `opacity` multiplies down the hierarchy, so a group fade
/// scales every descendant's style alpha without touching shape styles.
#[derive(Debug, Clone)]
pub struct Node {
    // === Core Hierarchy ===
    /// Parent node handle (None for root nodes)
    pub(crate) parent: Option<NodeHandle>,
    /// Child node handles
    pub(crate) children: Vec<NodeHandle>,

    // === Core Spatial Data ===
    /// Transform component (hot data accessed every frame)
    pub transform: Transform,

    // === Display State ===
    /// Debug/query name
    pub name: Cow<'static, str>,
    /// Whether the node (and its subtree) is presented
    pub visible: bool,
    /// Group opacity multiplier in `[0, 1]`, propagated to descendants
    pub opacity: f32,
    /// HUD overlay flag: the camera frame transform does not apply
    pub fixed_in_frame: bool,

    // === Components ===
    /// Drawable shape, if any (groups usually carry none)
    pub shape: Option<ShapeKey>,
}

impl Node {
    /// Creates a hidden node with a default transform.
    #[must_use]
    pub fn new(name: impl Into<Cow<'static, str>>) -> Self {
        Self {
            parent: None,
            children: Vec::new(),
            transform: Transform::new(),
            name: name.into(),
            visible: false,
            opacity: 1.0,
            fixed_in_frame: false,
            shape: None,
        }
    }

    /// Returns the parent node handle, if any.
    #[inline]
    #[must_use]
    pub fn parent(&self) -> Option<NodeHandle> {
        self.parent
    }

    /// Returns a read-only slice of child node handles.
    #[inline]
    #[must_use]
    pub fn children(&self) -> &[NodeHandle] {
        &self.children
    }

    /// Returns a reference to the world transformation matrix.
    ///
    /// This matrix transforms local coordinates to world coordinates. It is
    /// refreshed by [`crate::scene::Scene::update_world`].
    #[inline]
    #[must_use]
    pub fn world_matrix(&self) -> &Affine3A {
        &self.transform.world_matrix
    }
}

impl Default for Node {
    fn default() -> Self {
        Self::new("")
    }
}
