//! Scene Container
//!
//! # Overview
//!
//! [`Scene`] owns the node hierarchy and the shapes the nodes display. It is
//! the single mutation point for structure: spawning nodes, parenting them,
//! and removing whole assemblies all go through here so the root list and
//! the arenas never drift apart.
//!
//! # Design Principles
//!
//! - **Handles, not references.** Nodes and shapes live in [`SlotMap`]s and
//!   are addressed by copyable keys. Stale handles fail lookups instead of
//!   dangling.
//! - **Structure is explicit.** A node is either a root or a child; `attach`
//!   moves it between those states and keeps both sides of the relation in
//!   sync.
//! - **The frame is a node.** The camera frame participates in the same
//!   hierarchy and can be repositioned and scaled by the same machinery as
//!   any assembly.

use std::borrow::Cow;

use glam::{Quat, Vec3};
use slotmap::SlotMap;

use crate::scene::frame::{CameraPose, FRAME_HEIGHT, FRAME_WIDTH};
use crate::scene::node::Node;
use crate::scene::transform_system;
use crate::scene::{NodeHandle, ShapeKey};
use crate::shapes::primitives::{RectOptions, create_rect};
use crate::shapes::{Shape, Style};

bitflags::bitflags! {
    /// Capabilities a choreography has exercised, recorded as it runs.
    ///
    /// Hosts read these to decide what they must support: a run that never
    /// sets `SPATIAL_POSE` can be presented by a purely planar backend.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
    pub struct SceneFeatures: u8 {
        /// A background color was applied.
        const BACKDROP = 1 << 0;
        /// At least one node is pinned to the frame overlay.
        const FIXED_OVERLAY = 1 << 1;
        /// The spatial camera pose was changed from its default.
        const SPATIAL_POSE = 1 << 2;
    }
}

/// The scene graph: nodes, their shapes, and the camera frame.
pub struct Scene {
    pub(crate) nodes: SlotMap<NodeHandle, Node>,
    pub(crate) shapes: SlotMap<ShapeKey, Shape>,
    pub(crate) root_nodes: Vec<NodeHandle>,
    pub(crate) features: SceneFeatures,
    frame: NodeHandle,
    /// Applied backdrop color, present only once a host accepted one.
    pub background: Option<Vec3>,
    /// Spatial orientation; stays at its default for planar scenes.
    pub camera_pose: CameraPose,
}

impl Default for Scene {
    fn default() -> Self {
        Self::new()
    }
}

impl Scene {
    #[must_use]
    pub fn new() -> Self {
        let mut nodes = SlotMap::with_key();
        let mut shapes = SlotMap::with_key();

        // The frame node carries an invisible rect matching the frame
        // extents so layout queries against it see the visible window.
        let frame_shape = shapes.insert(Shape::new(
            "frame",
            create_rect(RectOptions {
                width: FRAME_WIDTH,
                height: FRAME_HEIGHT,
            }),
            Style::invisible(),
        ));
        let mut frame_node = Node::new("frame");
        frame_node.shape = Some(frame_shape);
        let frame = nodes.insert(frame_node);

        Self {
            nodes,
            shapes,
            root_nodes: vec![frame],
            features: SceneFeatures::empty(),
            frame,
            background: None,
            camera_pose: CameraPose::default(),
        }
    }

    // ========================================================================
    // Node management
    // ========================================================================

    /// Inserts `node` as a root.
    pub fn add_node(&mut self, node: Node) -> NodeHandle {
        let handle = self.nodes.insert(node);
        self.root_nodes.push(handle);
        handle
    }

    /// Inserts `node` as a child of `parent`.
    ///
    /// Falls back to inserting a root when the parent handle is stale, so
    /// the node is never silently lost.
    pub fn add_to_parent(&mut self, node: Node, parent: NodeHandle) -> NodeHandle {
        if !self.nodes.contains_key(parent) {
            log::error!("add_to_parent: parent not found, inserting as root");
            return self.add_node(node);
        }
        let handle = self.nodes.insert(node);
        self.link(handle, parent);
        handle
    }

    /// Re-parents an existing node under `parent`, detaching it from its
    /// current place in the hierarchy first.
    pub fn attach(&mut self, child: NodeHandle, parent: NodeHandle) {
        if child == parent {
            log::warn!("Cannot attach node to itself!");
            return;
        }
        if !self.nodes.contains_key(child) {
            log::error!("Child node not found during attach!");
            return;
        }
        self.unlink(child);
        if !self.nodes.contains_key(parent) {
            log::error!("Parent node not found during attach!");
            // Put the child back among the roots rather than losing it
            self.root_nodes.push(child);
            return;
        }
        self.link(child, parent);
        if let Some(node) = self.nodes.get_mut(child) {
            // Parent changed, world matrix must be rebuilt
            node.transform.mark_dirty();
        }
    }

    /// Removes a node and its whole subtree, including carried shapes.
    pub fn remove_node(&mut self, handle: NodeHandle) {
        self.unlink(handle);
        self.remove_recursive(handle);
    }

    fn remove_recursive(&mut self, handle: NodeHandle) {
        let Some(node) = self.nodes.remove(handle) else {
            return;
        };
        if let Some(shape_key) = node.shape {
            self.shapes.remove(shape_key);
        }
        for child in node.children {
            self.remove_recursive(child);
        }
    }

    fn link(&mut self, child: NodeHandle, parent: NodeHandle) {
        if let Some(node) = self.nodes.get_mut(child) {
            node.parent = Some(parent);
        }
        if let Some(node) = self.nodes.get_mut(parent) {
            node.children.push(child);
        }
    }

    fn unlink(&mut self, child: NodeHandle) {
        let Some(node) = self.nodes.get(child) else {
            return;
        };
        match node.parent {
            Some(parent) => {
                if let Some(parent_node) = self.nodes.get_mut(parent)
                    && let Some(pos) = parent_node.children.iter().position(|&c| c == child)
                {
                    parent_node.children.remove(pos);
                }
                if let Some(node) = self.nodes.get_mut(child) {
                    node.parent = None;
                }
            }
            None => {
                if let Some(pos) = self.root_nodes.iter().position(|&r| r == child) {
                    self.root_nodes.remove(pos);
                }
            }
        }
    }

    // ========================================================================
    // Shape management
    // ========================================================================

    /// Registers a shape and spawns a root node carrying it. The node takes
    /// the shape's name.
    pub fn add_shape(&mut self, shape: Shape) -> NodeHandle {
        let name = shape.name.clone();
        let key = self.shapes.insert(shape);
        let mut node = Node::new(name);
        node.shape = Some(key);
        self.add_node(node)
    }

    /// Registers a shape and spawns a node carrying it under `parent`.
    pub fn add_shape_to_parent(&mut self, shape: Shape, parent: NodeHandle) -> NodeHandle {
        let name = shape.name.clone();
        let key = self.shapes.insert(shape);
        let mut node = Node::new(name);
        node.shape = Some(key);
        self.add_to_parent(node, parent)
    }

    // ========================================================================
    // Lookups
    // ========================================================================

    #[inline]
    #[must_use]
    pub fn get_node(&self, handle: NodeHandle) -> Option<&Node> {
        self.nodes.get(handle)
    }

    #[inline]
    pub fn get_node_mut(&mut self, handle: NodeHandle) -> Option<&mut Node> {
        self.nodes.get_mut(handle)
    }

    #[inline]
    #[must_use]
    pub fn get_shape(&self, key: ShapeKey) -> Option<&Shape> {
        self.shapes.get(key)
    }

    #[inline]
    pub fn get_shape_mut(&mut self, key: ShapeKey) -> Option<&mut Shape> {
        self.shapes.get_mut(key)
    }

    /// Shape carried by `handle`, if the node exists and has one.
    #[must_use]
    pub fn shape_of(&self, handle: NodeHandle) -> Option<&Shape> {
        let key = self.nodes.get(handle)?.shape?;
        self.shapes.get(key)
    }

    /// Mutable shape carried by `handle`.
    pub fn shape_of_mut(&mut self, handle: NodeHandle) -> Option<&mut Shape> {
        let key = self.nodes.get(handle)?.shape?;
        self.shapes.get_mut(key)
    }

    /// First node with the given name, in arena order.
    #[must_use]
    pub fn find(&self, name: &str) -> Option<NodeHandle> {
        self.nodes
            .iter()
            .find(|(_, node)| node.name == name)
            .map(|(handle, _)| handle)
    }

    /// Handle of the camera-frame node.
    #[inline]
    #[must_use]
    pub fn frame(&self) -> NodeHandle {
        self.frame
    }

    #[inline]
    #[must_use]
    pub fn get_features(&self) -> SceneFeatures {
        self.features
    }

    /// Number of nodes currently shown.
    #[must_use]
    pub fn visible_count(&self) -> usize {
        self.nodes.values().filter(|node| node.visible).count()
    }

    // ========================================================================
    // Display state
    // ========================================================================

    /// Shows or hides a node together with its whole subtree.
    pub fn set_visible_recursive(&mut self, handle: NodeHandle, visible: bool) {
        let children = match self.nodes.get_mut(handle) {
            Some(node) => {
                node.visible = visible;
                node.children.clone()
            }
            None => return,
        };
        for child in children {
            self.set_visible_recursive(child, visible);
        }
    }

    /// Opacity actually displayed for `handle`: its own opacity multiplied
    /// through every ancestor, so fading a group fades its members.
    #[must_use]
    pub fn effective_opacity(&self, handle: NodeHandle) -> f32 {
        let mut opacity = 1.0;
        let mut current = Some(handle);
        while let Some(h) = current {
            let Some(node) = self.nodes.get(h) else {
                break;
            };
            opacity *= node.opacity;
            current = node.parent;
        }
        opacity
    }

    // ========================================================================
    // Transform propagation
    // ========================================================================

    /// Recomputes world matrices for every node, roots downward. Must run
    /// before any world-space bounds query or present call.
    pub fn update_world(&mut self) {
        transform_system::update_hierarchy_iterative(&mut self.nodes, &self.root_nodes);
    }

    /// Recomputes world matrices for one subtree only. Ancestors must
    /// already be current.
    pub fn update_subtree(&mut self, handle: NodeHandle) {
        transform_system::update_subtree(&mut self.nodes, handle);
    }

    // ========================================================================
    // Builders
    // ========================================================================

    /// Starts a chained node build:
    /// `scene.build_node("pad").with_position(..).build()`.
    pub fn build_node(&mut self, name: impl Into<Cow<'static, str>>) -> NodeBuilder<'_> {
        NodeBuilder {
            scene: self,
            node: Node::new(name),
            shape: None,
            parent: None,
        }
    }
}

/// Chained construction of a node, optionally with a shape and parent.
pub struct NodeBuilder<'a> {
    scene: &'a mut Scene,
    node: Node,
    shape: Option<Shape>,
    parent: Option<NodeHandle>,
}

impl NodeBuilder<'_> {
    #[must_use]
    pub fn with_position(mut self, position: Vec3) -> Self {
        self.node.transform.position = position;
        self
    }

    #[must_use]
    pub fn with_rotation(mut self, rotation: Quat) -> Self {
        self.node.transform.rotation = rotation;
        self
    }

    #[must_use]
    pub fn with_scale(mut self, scale: f32) -> Self {
        self.node.transform.scale = Vec3::splat(scale);
        self
    }

    #[must_use]
    pub fn with_opacity(mut self, opacity: f32) -> Self {
        self.node.opacity = opacity;
        self
    }

    #[must_use]
    pub fn with_shape(mut self, shape: Shape) -> Self {
        self.shape = Some(shape);
        self
    }

    #[must_use]
    pub fn with_parent(mut self, parent: NodeHandle) -> Self {
        self.parent = Some(parent);
        self
    }

    /// Finishes the build, inserting the node into the scene.
    pub fn build(self) -> NodeHandle {
        let Self {
            scene,
            mut node,
            shape,
            parent,
        } = self;
        if let Some(shape) = shape {
            node.shape = Some(scene.shapes.insert(shape));
        }
        match parent {
            Some(parent) => scene.add_to_parent(node, parent),
            None => scene.add_node(node),
        }
    }
}
