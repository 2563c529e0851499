//! Star Field
//!
//! Seeded uniform scatter of small dots over a rectangular patch of the
//! backdrop. Generation is pure and deterministic: the same seed always
//! yields the same field, so layouts are reproducible across runs and
//! parallax layers can be rebuilt independently.

use glam::Vec3;
use rand::rngs::StdRng;
use rand::{RngExt, SeedableRng};

use crate::scene::NodeHandle;
use crate::scene::node::Node;
use crate::scene::scene::Scene;
use crate::shapes::primitives::{DotOptions, create_dot};
use crate::shapes::style::WHITE;
use crate::shapes::{Shape, Style};

/// Star dot radius range, in scene units.
const STAR_RADIUS_MIN: f32 = 0.005;
const STAR_RADIUS_MAX: f32 = 0.02;

pub struct StarfieldOptions {
    pub count: u32,
    /// Horizontal extent of the scatter patch, centered on the origin.
    pub width: f32,
    /// Vertical extent of the scatter patch.
    pub height: f32,
    pub seed: u64,
    pub opacity: f32,
}

impl Default for StarfieldOptions {
    fn default() -> Self {
        Self {
            count: 120,
            width: 14.0,
            height: 8.0,
            seed: 0,
            opacity: 0.5,
        }
    }
}

/// One scattered star.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Star {
    pub position: Vec3,
    pub radius: f32,
}

/// Generates the field. Draw order per star is x, then y, then radius, so
/// a given seed pins every value.
#[must_use]
pub fn generate(options: &StarfieldOptions) -> Vec<Star> {
    let mut rng = StdRng::seed_from_u64(options.seed);
    let half_w = options.width / 2.0;
    let half_h = options.height / 2.0;

    (0..options.count)
        .map(|_| {
            let x = rng.random_range(-half_w..half_w);
            let y = rng.random_range(-half_h..half_h);
            let radius = rng.random_range(STAR_RADIUS_MIN..STAR_RADIUS_MAX);
            Star {
                position: Vec3::new(x, y, 0.0),
                radius,
            }
        })
        .collect()
}

/// Spawns the field as dot shapes under a single group node, so the whole
/// layer can be shifted for parallax in one tween. Returns the group.
pub fn spawn(scene: &mut Scene, options: &StarfieldOptions) -> NodeHandle {
    let group = scene.add_node(Node::new("stars"));
    for (index, star) in generate(options).into_iter().enumerate() {
        let dot = Shape::new(
            format!("star_{index}"),
            create_dot(DotOptions {
                radius: star.radius,
            }),
            Style::fill(WHITE, options.opacity),
        );
        let handle = scene.add_shape_to_parent(dot, group);
        if let Some(node) = scene.get_node_mut(handle) {
            node.transform.position = star.position;
        }
    }
    group
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn same_seed_reproduces_field() {
        let options = StarfieldOptions {
            count: 160,
            width: 30.0,
            height: 18.0,
            seed: 3,
            opacity: 0.35,
        };
        assert_eq!(generate(&options), generate(&options));
    }

    #[test]
    fn different_seed_changes_field() {
        let base = StarfieldOptions::default();
        let other = StarfieldOptions {
            seed: 7,
            ..StarfieldOptions::default()
        };
        assert_ne!(generate(&base), generate(&other));
    }

    #[test]
    fn stars_stay_inside_the_patch() {
        let options = StarfieldOptions::default();
        for star in generate(&options) {
            assert!(star.position.x.abs() <= options.width / 2.0);
            assert!(star.position.y.abs() <= options.height / 2.0);
            assert!(star.radius >= STAR_RADIUS_MIN && star.radius < STAR_RADIUS_MAX);
        }
    }

    #[test]
    fn spawn_groups_all_stars() {
        let mut scene = Scene::new();
        let options = StarfieldOptions {
            count: 12,
            ..StarfieldOptions::default()
        };
        let group = spawn(&mut scene, &options);
        assert_eq!(scene.get_node(group).unwrap().children.len(), 12);
        // Spawned hidden until the stage adds them
        assert_eq!(scene.visible_count(), 0);
    }
}
