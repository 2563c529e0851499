//! Scene graph module.
//!
//! Manages the node hierarchy and everything hanging off it:
//! - Node: scene node (parenting, display state, carried shape)
//! - Transform: TRS component with cached local/world matrices
//! - Scene: the container and mutation point for structure
//! - BoundingBox: axis-aligned bounds behind the layout queries
//! - layout: anchor-based placement (`move_to`, `next_to`, `arrange`)
//! - frame: camera-frame extents and the spatial pose
//! - TransformSystem: decoupled world-matrix propagation

pub mod bounds;
pub mod frame;
pub mod layout;
pub mod node;
pub mod scene;
pub mod transform;
pub mod transform_system;

pub use bounds::BoundingBox;
pub use frame::{CameraPose, FRAME_HEIGHT, FRAME_WIDTH};
pub use node::Node;
pub use scene::{NodeBuilder, Scene, SceneFeatures};
pub use transform::Transform;

use slotmap::new_key_type;

new_key_type! {
    pub struct NodeHandle;
    pub struct ShapeKey;
}
