//! Transform System
//!
//! Hierarchical world-matrix updates for the scene graph, decoupled from
//! [`crate::scene::Scene`] to avoid borrow conflicts: the functions here
//! borrow only the node arena and the root list.

use glam::Affine3A;
use slotmap::SlotMap;

use crate::scene::NodeHandle;
use crate::scene::node::Node;

/// Updates world matrices for the whole scene hierarchy.
///
/// Uses an explicit work stack instead of recursion so deep group nesting
/// cannot overflow the call stack. A node's world matrix is recomputed only
/// when its own local matrix changed or an ancestor's did.
pub fn update_hierarchy_iterative(nodes: &mut SlotMap<NodeHandle, Node>, roots: &[NodeHandle]) {
    // Work stack: (node handle, parent world matrix, parent changed)
    let mut stack: Vec<(NodeHandle, Affine3A, bool)> = Vec::with_capacity(64);

    for &root_handle in roots.iter().rev() {
        stack.push((root_handle, Affine3A::IDENTITY, false));
    }

    while let Some((node_handle, parent_world_matrix, parent_changed)) = stack.pop() {
        let Some(node) = nodes.get_mut(node_handle) else {
            continue;
        };

        // 1. Refresh the local matrix
        let local_changed = node.transform.update_local_matrix();
        let world_needs_update = local_changed || parent_changed;

        // 2. Refresh the world matrix
        if world_needs_update {
            let new_world = parent_world_matrix * *node.transform.local_matrix();
            node.transform.set_world_matrix(new_world);
        }

        // 3. Capture child info before releasing the borrow
        let current_world = node.transform.world_matrix;
        let children_count = node.children.len();

        // 4. Push children in reverse to preserve traversal order
        for i in (0..children_count).rev() {
            if let Some(node) = nodes.get(node_handle)
                && let Some(&child_handle) = node.children.get(i)
            {
                stack.push((child_handle, current_world, world_needs_update));
            }
        }
    }
}

/// Updates world matrices from `root_handle` downwards.
///
/// Used after a layout mutation when only one assembly moved; the parent's
/// world matrix is read as-is, so ancestors must already be current.
pub fn update_subtree(nodes: &mut SlotMap<NodeHandle, Node>, root_handle: NodeHandle) {
    let parent_world = if let Some(node) = nodes.get(root_handle) {
        if let Some(parent_handle) = node.parent {
            nodes
                .get(parent_handle)
                .map_or(Affine3A::IDENTITY, |p| p.transform.world_matrix)
        } else {
            Affine3A::IDENTITY
        }
    } else {
        return;
    };

    update_transform_recursive(nodes, root_handle, parent_world, true);
}

/// Recursive single-subtree update. Fine for subtree refreshes where depth
/// is bounded by assembly nesting; the full-scene pass stays iterative.
fn update_transform_recursive(
    nodes: &mut SlotMap<NodeHandle, Node>,
    node_handle: NodeHandle,
    parent_world_matrix: Affine3A,
    parent_changed: bool,
) {
    let (current_world_matrix, children_handles, world_needs_update) = {
        let Some(node) = nodes.get_mut(node_handle) else {
            return;
        };

        let local_changed = node.transform.update_local_matrix();
        let world_needs_update = local_changed || parent_changed;

        if world_needs_update {
            let new_world = parent_world_matrix * *node.transform.local_matrix();
            node.transform.set_world_matrix(new_world);
        }

        let world = node.transform.world_matrix;
        let children: Vec<NodeHandle> = node.children.clone();

        (world, children, world_needs_update)
    };

    for child_handle in children_handles {
        update_transform_recursive(nodes, child_handle, current_world_matrix, world_needs_update);
    }
}
