//! Rocket Launch
//!
//! A spatial launch vignette: a booster stands on a square pad under a
//! tilted camera pose, a corner countdown ticks down in the fixed overlay,
//! the engine flame flares, and the rocket burns away up and out of the
//! frame before the pad fades.

use std::f32::consts::FRAC_PI_2;

use glam::Quat;

use crate::animation::{PlayBatch, RateFunction, Tween};
use crate::errors::Result;
use crate::scene::layout::{self, DOWN, IN, LEFT, OUT, RIGHT, UP, UR};
use crate::scene::{CameraPose, Node, NodeHandle, Scene};
use crate::shapes::Shape;
use crate::shapes::primitives::{
    ConeOptions, CylinderOptions, SquareOptions, create_cone, create_cylinder, create_square,
    create_triangle,
};
use crate::shapes::style::{GRAY, GRAY_B, GRAY_D, ORANGE, Style, WHITE, YELLOW};
use crate::stage::{Choreography, Stage};

use super::run_countdown;

pub const BG_COLOR: &str = "#000000";

pub const PAD_SIDE: f32 = 6.0;
pub const BODY_RADIUS: f32 = 0.22;
pub const BODY_HEIGHT: f32 = 2.2;
pub const NOSE_HEIGHT: f32 = 0.5;

/// Camera tilt for the launch: 65 degrees down from overhead, swung 45
/// degrees off axis.
pub const CAMERA_PHI_DEGREES: f32 = 65.0;
pub const CAMERA_THETA_DEGREES: f32 = -45.0;

// ========================================================================
// Assembly builders
// ========================================================================

/// Builds the booster: a cylindrical body standing along `OUT`, a nose
/// cone flush on its top cap, and two fins at the base. Returns the group
/// together with the body, which later anchors the flame.
pub fn build_rocket(scene: &mut Scene) -> (NodeHandle, NodeHandle) {
    let rocket = scene.add_node(Node::new("rocket"));

    let body = scene
        .build_node("body")
        .with_shape(Shape::new(
            "body",
            create_cylinder(CylinderOptions {
                radius: BODY_RADIUS,
                height: BODY_HEIGHT,
                direction: OUT,
            }),
            Style::fill(GRAY_B, 1.0),
        ))
        .with_parent(rocket)
        .build();

    let nose = scene
        .build_node("nose")
        .with_shape(Shape::new(
            "nose",
            create_cone(ConeOptions {
                base_radius: BODY_RADIUS,
                height: NOSE_HEIGHT,
                direction: OUT,
            }),
            Style::fill(GRAY_B, 1.0),
        ))
        .with_parent(rocket)
        .build();
    let body_top = layout::world_bbox(scene, body).boundary_point(OUT);
    layout::move_to(scene, nose, body_top + (NOSE_HEIGHT / 2.0) * OUT);

    // Fins stand upright in the body's plane, straddling the base.
    let body_base = layout::world_bbox(scene, body).boundary_point(IN);
    for (name, side) in [("fin_left", LEFT), ("fin_right", RIGHT)] {
        let fin = scene
            .build_node(name)
            .with_shape(Shape::new("fin", create_triangle(), Style::fill(GRAY_D, 1.0)))
            .with_scale(0.18)
            .with_rotation(Quat::from_rotation_x(FRAC_PI_2))
            .with_parent(rocket)
            .build();
        layout::move_to(scene, fin, body_base + 0.25 * side + 0.12 * IN);
    }

    (rocket, body)
}

/// Builds the engine flame, an inverted cone pointing down at the pad.
pub fn build_flame(scene: &mut Scene) -> NodeHandle {
    scene.add_shape(Shape::new(
        "flame",
        create_cone(ConeOptions {
            base_radius: 0.18,
            height: 0.7,
            direction: IN,
        }),
        Style::fill(ORANGE, 0.8),
    ))
}

// ========================================================================
// Choreography
// ========================================================================

/// The pad-launch vignette.
#[derive(Debug, Default)]
pub struct RocketLaunch;

impl Choreography for RocketLaunch {
    fn construct(&mut self, stage: &mut Stage) -> Result<()> {
        stage.set_camera_orientation(CameraPose::from_degrees(
            CAMERA_PHI_DEGREES,
            CAMERA_THETA_DEGREES,
            1.0,
        ));
        stage.set_background(BG_COLOR);

        let pad = stage.scene.add_shape(Shape::new(
            "pad",
            create_square(SquareOptions { side: PAD_SIDE }),
            Style::fill(GRAY, 0.8).with_stroke(WHITE, 4.0),
        ));
        layout::move_to(&mut stage.scene, pad, 0.01 * DOWN);
        stage.add(pad);

        let (rocket, body) = build_rocket(&mut stage.scene);
        let pad_center = layout::center_of(&stage.scene, pad);
        layout::move_to(
            &mut stage.scene,
            rocket,
            pad_center + (BODY_HEIGHT / 2.0 + 0.01) * OUT,
        );
        stage.add(rocket);

        // Corner countdown, pinned to the overlay so the pose leaves it alone.
        let countdown = stage.scene.add_shape(Shape::label(
            "countdown",
            "3",
            64.0,
            Style::fill(YELLOW, 1.0),
        ));
        layout::to_corner(&mut stage.scene, countdown, UR, 0.5);
        stage.add_fixed_in_frame(countdown);
        run_countdown(stage, countdown, 3, 0.5)?;

        // Ignition.
        let flame = build_flame(&mut stage.scene);
        let body_base = layout::world_bbox(&stage.scene, body).boundary_point(IN);
        layout::move_to(&mut stage.scene, flame, body_base + 0.35 * IN);
        stage.add(flame);
        stage.play(
            PlayBatch::new()
                .with(Tween::node(flame).scale(1.2))
                .run_time(0.3),
        )?;

        // Burn away up and out of the frame, exhaust dying off.
        let rocket_center = layout::center_of(&stage.scene, rocket);
        let flame_center = layout::center_of(&stage.scene, flame);
        let climb = 6.0 * UP + 4.0 * OUT;
        stage.play(
            PlayBatch::new()
                .with(Tween::node(rocket).move_to(rocket_center + climb))
                .with(Tween::node(flame).move_to(flame_center + climb).fade_to(0.0))
                .run_time(3.0)
                .rate(RateFunction::EaseInSine),
        )?;

        stage.play(
            PlayBatch::new()
                .with(Tween::fade_out(pad))
                .run_time(1.0),
        )?;
        stage.wait(0.5)?;
        stage.wait(0.5)?;

        Ok(())
    }
}
