//! Layout Helpers
//!
//! # Overview
//!
//! Anchor-based placement over the scene graph. All positions are expressed
//! through world-space bounding boxes: `move_to` puts a subtree's box center
//! on a point, `next_to` abuts one box against another along an axis, and
//! `arrange` chains `next_to` over a group's children.
//!
//! # Design Principles
//!
//! - **Boxes, not origins.** Placement reads the union box of a node's
//!   shapes and children, so a group whose local origin sits off-center
//!   still lands exactly where asked.
//! - **World in, local out.** Targets are world-space; the computed
//!   correction is mapped back through the parent's world matrix before it
//!   touches the node's local transform.
//! - **Always current.** Every mutation here refreshes the affected world
//!   matrices, so a query issued right after a placement sees the result.

use glam::Vec3;

use crate::scene::bounds::BoundingBox;
use crate::scene::frame::{FRAME_HEIGHT, FRAME_WIDTH};
use crate::scene::scene::Scene;
use crate::scene::NodeHandle;

// ===== Axis directions =====

pub const ORIGIN: Vec3 = Vec3::ZERO;
pub const UP: Vec3 = Vec3::new(0.0, 1.0, 0.0);
pub const DOWN: Vec3 = Vec3::new(0.0, -1.0, 0.0);
pub const LEFT: Vec3 = Vec3::new(-1.0, 0.0, 0.0);
pub const RIGHT: Vec3 = Vec3::new(1.0, 0.0, 0.0);
/// Toward the viewer.
pub const OUT: Vec3 = Vec3::new(0.0, 0.0, 1.0);
/// Away from the viewer.
pub const IN: Vec3 = Vec3::new(0.0, 0.0, -1.0);

pub const UL: Vec3 = Vec3::new(-1.0, 1.0, 0.0);
pub const UR: Vec3 = Vec3::new(1.0, 1.0, 0.0);
pub const DL: Vec3 = Vec3::new(-1.0, -1.0, 0.0);
pub const DR: Vec3 = Vec3::new(1.0, -1.0, 0.0);

// ===== World-space queries =====

/// World-space bounding box of a node: its own shape's box plus the union
/// of all child boxes, each taken through its world matrix.
///
/// A subtree with no shapes at all collapses to a point box at the node's
/// world translation. World matrices must be current.
#[must_use]
pub fn world_bbox(scene: &Scene, handle: NodeHandle) -> BoundingBox {
    fn collect(scene: &Scene, handle: NodeHandle, acc: &mut Option<BoundingBox>) {
        let Some(node) = scene.get_node(handle) else {
            return;
        };
        if let Some(shape) = node.shape.and_then(|key| scene.get_shape(key)) {
            let world = shape
                .geometry
                .bounding_box
                .transformed(&node.transform.world_matrix);
            *acc = Some(match acc {
                Some(existing) => existing.union(&world),
                None => world,
            });
        }
        for &child in &node.children {
            collect(scene, child, acc);
        }
    }

    let mut acc = None;
    collect(scene, handle, &mut acc);
    acc.unwrap_or_else(|| {
        let point = scene
            .get_node(handle)
            .map_or(Vec3::ZERO, |n| n.transform.world_matrix.translation.into());
        BoundingBox::new(point, point)
    })
}

/// World-space center of a node's bounding box.
#[must_use]
pub fn center_of(scene: &Scene, handle: NodeHandle) -> Vec3 {
    world_bbox(scene, handle).center()
}

/// Top-center anchor of a node's bounding box.
#[must_use]
pub fn top_of(scene: &Scene, handle: NodeHandle) -> Vec3 {
    world_bbox(scene, handle).top()
}

/// Bottom-center anchor of a node's bounding box.
#[must_use]
pub fn bottom_of(scene: &Scene, handle: NodeHandle) -> Vec3 {
    world_bbox(scene, handle).bottom()
}

/// Left-center anchor of a node's bounding box.
#[must_use]
pub fn left_of(scene: &Scene, handle: NodeHandle) -> Vec3 {
    world_bbox(scene, handle).left_edge()
}

/// Right-center anchor of a node's bounding box.
#[must_use]
pub fn right_of(scene: &Scene, handle: NodeHandle) -> Vec3 {
    world_bbox(scene, handle).right_edge()
}

// ===== Placement =====

/// Moves a subtree so its bounding-box center lands exactly on `target`.
pub fn move_to(scene: &mut Scene, handle: NodeHandle, target: Vec3) {
    scene.update_world();
    let delta = target - world_bbox(scene, handle).center();
    shift_unchecked(scene, handle, delta);
}

/// Translates a subtree by a world-space delta.
pub fn shift(scene: &mut Scene, handle: NodeHandle, delta: Vec3) {
    scene.update_world();
    shift_unchecked(scene, handle, delta);
}

/// Maps a world-space delta into the coordinate space the node's local
/// transform lives in. World matrices must be current.
pub(crate) fn world_delta_to_local(scene: &Scene, handle: NodeHandle, delta: Vec3) -> Vec3 {
    let parent = scene
        .get_node(handle)
        .and_then(|node| node.parent)
        .and_then(|parent| scene.get_node(parent));
    match parent {
        Some(parent) => parent
            .transform
            .world_matrix
            .inverse()
            .transform_vector3(delta),
        None => delta,
    }
}

/// Applies a world-space delta assuming world matrices are already current.
fn shift_unchecked(scene: &mut Scene, handle: NodeHandle, delta: Vec3) {
    if scene.get_node(handle).is_none() {
        return;
    }
    let local_delta = world_delta_to_local(scene, handle, delta);
    if let Some(node) = scene.get_node_mut(handle) {
        node.transform.position += local_delta;
    }
    scene.update_subtree(handle);
}

/// Places `handle` beside `anchor` along `direction` with a `buff` gap.
///
/// Axes with a nonzero direction component get edge-to-edge abutment; the
/// remaining axes align box centers. A negative `buff` overlaps the boxes.
pub fn next_to(
    scene: &mut Scene,
    handle: NodeHandle,
    anchor: NodeHandle,
    direction: Vec3,
    buff: f32,
) {
    scene.update_world();
    let anchor_box = world_bbox(scene, anchor);
    let own_box = world_bbox(scene, handle);
    let own_half = own_box.size() * 0.5;
    let anchor_edge = anchor_box.boundary_point(direction);
    let anchor_center = anchor_box.center();

    let pick = |edge: f32, center: f32, half: f32, d: f32| {
        if d == 0.0 {
            center
        } else {
            edge + d * (buff + half)
        }
    };
    let target = Vec3::new(
        pick(anchor_edge.x, anchor_center.x, own_half.x, direction.x),
        pick(anchor_edge.y, anchor_center.y, own_half.y, direction.y),
        pick(anchor_edge.z, anchor_center.z, own_half.z, direction.z),
    );

    let delta = target - own_box.center();
    shift_unchecked(scene, handle, delta);
}

/// Arranges a group's children in order along `direction`: the first child
/// stays put, each following child is placed [`next_to`] its predecessor.
pub fn arrange(scene: &mut Scene, group: NodeHandle, direction: Vec3, buff: f32) {
    let children: Vec<NodeHandle> = match scene.get_node(group) {
        Some(node) => node.children.clone(),
        None => return,
    };
    for pair in children.windows(2) {
        next_to(scene, pair[1], pair[0], direction, buff);
    }
}

/// Tucks a subtree into a frame corner, `buff` in from both edges.
///
/// Uses the static frame extents, so overlay content pinned to the frame
/// keeps its corner while the frame node itself roams.
pub fn to_corner(scene: &mut Scene, handle: NodeHandle, corner: Vec3, buff: f32) {
    scene.update_world();
    let own_box = world_bbox(scene, handle);
    let own_half = own_box.size() * 0.5;
    let own_center = own_box.center();

    let half_extent = Vec3::new(FRAME_WIDTH * 0.5, FRAME_HEIGHT * 0.5, 0.0);
    let pick = |d: f32, frame_half: f32, half: f32, center: f32| {
        if d == 0.0 {
            center
        } else {
            d * (frame_half - buff - half)
        }
    };
    let target = Vec3::new(
        pick(corner.x, half_extent.x, own_half.x, own_center.x),
        pick(corner.y, half_extent.y, own_half.y, own_center.y),
        own_center.z,
    );
    shift_unchecked(scene, handle, target - own_center);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shapes::primitives::{RectOptions, create_rect};
    use crate::shapes::{Shape, Style};

    fn rect_node(scene: &mut Scene, name: &str, width: f32, height: f32) -> NodeHandle {
        scene.add_shape(Shape::new(
            name.to_owned(),
            create_rect(RectOptions { width, height }),
            Style::default(),
        ))
    }

    #[test]
    fn move_to_centers_bbox_on_target() {
        let mut scene = Scene::new();
        let node = rect_node(&mut scene, "box", 2.0, 1.0);
        move_to(&mut scene, node, Vec3::new(3.0, -1.5, 0.0));
        let center = center_of(&scene, node);
        assert!((center - Vec3::new(3.0, -1.5, 0.0)).length() < 1e-5);
    }

    #[test]
    fn next_to_abuts_edges_and_aligns_centers() {
        let mut scene = Scene::new();
        let anchor = rect_node(&mut scene, "anchor", 2.0, 2.0);
        let satellite = rect_node(&mut scene, "satellite", 1.0, 0.5);
        move_to(&mut scene, anchor, Vec3::new(0.0, 1.0, 0.0));

        next_to(&mut scene, satellite, anchor, LEFT, 0.06);
        let sat_box = world_bbox(&scene, satellite);
        // Right edge sits 0.06 left of the anchor's left edge
        assert!((sat_box.max.x - (-1.0 - 0.06)).abs() < 1e-5);
        // Perpendicular centers align
        assert!((sat_box.center().y - 1.0).abs() < 1e-5);
    }

    #[test]
    fn next_to_negative_buff_overlaps() {
        let mut scene = Scene::new();
        let anchor = rect_node(&mut scene, "anchor", 1.0, 1.0);
        let cap = rect_node(&mut scene, "cap", 1.0, 0.2);
        next_to(&mut scene, cap, anchor, UP, -0.02);
        let cap_box = world_bbox(&scene, cap);
        assert!((cap_box.min.y - (0.5 - 0.02)).abs() < 1e-5);
    }

    #[test]
    fn arrange_keeps_first_child_fixed() {
        let mut scene = Scene::new();
        let group = scene.add_node(crate::scene::node::Node::new("group"));
        let first = rect_node(&mut scene, "first", 1.0, 1.0);
        let second = rect_node(&mut scene, "second", 1.0, 1.0);
        scene.attach(first, group);
        scene.attach(second, group);
        move_to(&mut scene, first, Vec3::new(2.0, 0.0, 0.0));

        arrange(&mut scene, group, RIGHT, 0.5);
        assert!((center_of(&scene, first).x - 2.0).abs() < 1e-5);
        assert!((center_of(&scene, second).x - 4.0).abs() < 1e-5);
    }

    #[test]
    fn group_moves_carry_children() {
        let mut scene = Scene::new();
        let group = scene.add_node(crate::scene::node::Node::new("group"));
        let leaf = rect_node(&mut scene, "leaf", 1.0, 1.0);
        scene.attach(leaf, group);
        move_to(&mut scene, leaf, Vec3::new(1.0, 1.0, 0.0));

        shift(&mut scene, group, Vec3::new(0.0, -3.0, 0.0));
        let center = center_of(&scene, leaf);
        assert!((center - Vec3::new(1.0, -2.0, 0.0)).length() < 1e-5);
    }

    #[test]
    fn to_corner_respects_buff() {
        let mut scene = Scene::new();
        let node = rect_node(&mut scene, "label", 1.0, 0.5);
        to_corner(&mut scene, node, UR, 0.5);
        let bbox = world_bbox(&scene, node);
        assert!((bbox.max.x - (FRAME_WIDTH * 0.5 - 0.5)).abs() < 1e-5);
        assert!((bbox.max.y - (FRAME_HEIGHT * 0.5 - 0.5)).abs() < 1e-5);
    }
}
