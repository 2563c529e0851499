//! Starbase Dock
//!
//! A docked-rocket vignette on a planar stage: a striped teal rocket rests
//! on a lift above the landing pad with a service tower at its side, the
//! frame pushes in while the star-field drifts, the rocket bobs on its
//! mount, then lifts off past an orbited planet and fades away.
//!
//! The assembly builders are exported separately so the dock can be staged
//! piece by piece.

use std::f32::consts::{FRAC_PI_6, PI};

use glam::{Quat, Vec3};

use crate::animation::{PlayBatch, RateFunction, Tween};
use crate::errors::Result;
use crate::scene::layout::{self, DOWN, LEFT, ORIGIN, RIGHT, UP};
use crate::scene::{Node, NodeHandle, Scene};
use crate::shapes::Shape;
use crate::shapes::primitives::{
    ArcOptions, CircleOptions, EllipseOptions, RectOptions, RoundedRectOptions, create_arc,
    create_circle, create_ellipse, create_line, create_polygon, create_rect, create_rounded_rect,
    create_triangle,
};
use crate::shapes::style::{
    BLACK, BLUE, BLUE_E, DARK_GRAY, GRAY_B, GRAY_C, GRAY_D, GRAY_E, ORANGE, Style, TEAL, WHITE,
    YELLOW,
};
use crate::stage::{Choreography, Stage};
use crate::starfield::{self, StarfieldOptions};

/// Deep-space backdrop color for the dock.
pub const BG_COLOR: &str = "#02030A";

pub const PAD_WIDTH: f32 = 8.0;
pub const PAD_HEIGHT: f32 = 0.5;
pub const TOWER_WIDTH: f32 = 0.25;
pub const TOWER_HEIGHT: f32 = 2.4;

/// Height of the rocket's center above the pad's top edge while docked.
pub const ROCKET_ALTITUDE: f32 = 0.9;
/// Clearance between the tower's right edge and the rocket's left edge.
pub const TOWER_ROCKET_GAP: f32 = 0.06;

// ========================================================================
// Assembly builders
// ========================================================================

/// Builds the striped rocket: rounded hull, nose cone, cap, stripes,
/// rimmed windows, angled fins, engine bells and a dormant nozzle, all
/// parented under one group.
pub fn make_ship(scene: &mut Scene, color: Vec3) -> NodeHandle {
    let hull_style = Style::fill(color, 1.0).with_stroke(DARK_GRAY, 2.0);
    let ship = scene.add_node(Node::new("rocket"));

    let body = scene
        .build_node("body")
        .with_shape(Shape::new(
            "body",
            create_rounded_rect(RoundedRectOptions {
                width: 0.46,
                height: 1.6,
                corner_radius: 0.12,
                ..RoundedRectOptions::default()
            }),
            hull_style,
        ))
        .with_parent(ship)
        .build();

    let nose = scene
        .build_node("nose")
        .with_shape(Shape::new("nose", create_triangle(), hull_style))
        .with_scale(0.22)
        .with_parent(ship)
        .build();
    // Slight overlap so the cone reads as welded to the hull.
    layout::next_to(scene, nose, body, UP, -0.02);

    let cap = scene
        .build_node("cap")
        .with_shape(Shape::new(
            "cap",
            create_ellipse(EllipseOptions {
                width: 0.36,
                height: 0.12,
            }),
            Style::fill(color, 1.0).with_stroke(DARK_GRAY, 1.0),
        ))
        .with_parent(ship)
        .build();
    let body_top = layout::top_of(scene, body);
    layout::move_to(scene, cap, body_top + 0.02 * DOWN);

    let body_center = layout::center_of(scene, body);
    for (index, (offset, opacity)) in [(0.18, 0.12_f32), (-0.05, 0.08)].into_iter().enumerate() {
        let stripe = scene
            .build_node(format!("stripe_{index}"))
            .with_shape(Shape::new(
                "stripe",
                create_rect(RectOptions {
                    width: 0.34,
                    height: 0.06,
                }),
                Style::fill(WHITE, opacity),
            ))
            .with_parent(ship)
            .build();
        layout::move_to(scene, stripe, body_center + offset * UP);
    }

    for (index, offset) in [0.35_f32, 0.05, -0.25].into_iter().enumerate() {
        let window = scene
            .build_node(format!("window_{index}"))
            .with_shape(Shape::new(
                "window",
                create_circle(CircleOptions { radius: 0.06 }),
                Style::fill(BLACK, 0.85),
            ))
            .with_parent(ship)
            .build();
        layout::move_to(scene, window, body_center + offset * UP);

        let rim = scene
            .build_node(format!("window_rim_{index}"))
            .with_shape(Shape::new(
                "window_rim",
                create_circle(CircleOptions { radius: 0.06 }),
                Style::stroke(WHITE, 1.0).with_stroke_opacity(0.35),
            ))
            .with_parent(ship)
            .build();
        layout::move_to(scene, rim, body_center + offset * UP);
    }

    let body_bottom = layout::bottom_of(scene, body);
    let fin_style = Style::fill(GRAY_D, 1.0).with_stroke(DARK_GRAY, 1.0);
    let fin_left = scene
        .build_node("fin_left")
        .with_shape(Shape::new("fin", create_triangle(), fin_style))
        .with_scale(0.2)
        .with_rotation(Quat::from_rotation_z(FRAC_PI_6))
        .with_parent(ship)
        .build();
    layout::move_to(scene, fin_left, body_bottom + 0.15 * LEFT + 0.06 * DOWN);

    let fin_right = scene
        .build_node("fin_right")
        .with_shape(Shape::new("fin", create_triangle(), fin_style))
        .with_scale(0.2)
        .with_rotation(Quat::from_rotation_z(-FRAC_PI_6))
        .with_parent(ship)
        .build();
    layout::move_to(scene, fin_right, body_bottom + 0.15 * RIGHT + 0.06 * DOWN);

    let bell_style = Style::fill(DARK_GRAY, 1.0).with_stroke(DARK_GRAY, 1.0);
    for (index, offset) in [0.12 * LEFT, ORIGIN, 0.12 * RIGHT].into_iter().enumerate() {
        let bell = scene
            .build_node(format!("bell_{index}"))
            .with_shape(Shape::new(
                "bell",
                create_ellipse(EllipseOptions {
                    width: 0.12,
                    height: 0.08,
                }),
                bell_style,
            ))
            .with_parent(ship)
            .build();
        layout::move_to(scene, bell, body_bottom + offset + 0.08 * DOWN);
    }

    let nozzle = scene
        .build_node("nozzle")
        .with_shape(Shape::new(
            "nozzle",
            create_circle(CircleOptions { radius: 0.04 }),
            Style::fill(ORANGE, 0.0),
        ))
        .with_parent(ship)
        .build();
    layout::move_to(scene, nozzle, body_bottom + 0.08 * DOWN);

    ship
}

/// Builds the landing pad slab.
pub fn make_pad(scene: &mut Scene) -> NodeHandle {
    scene.add_shape(Shape::new(
        "pad",
        create_rect(RectOptions {
            width: PAD_WIDTH,
            height: PAD_HEIGHT,
        }),
        Style::fill(GRAY_D, 1.0).with_stroke(GRAY_B, 2.0),
    ))
}

/// Builds the service tower: a column with a short bracket arm arranged
/// flush beneath it.
pub fn make_tower(scene: &mut Scene) -> NodeHandle {
    let tower = scene.add_node(Node::new("tower"));
    scene
        .build_node("column")
        .with_shape(Shape::new(
            "column",
            create_rect(RectOptions {
                width: TOWER_WIDTH,
                height: TOWER_HEIGHT,
            }),
            Style::fill(GRAY_E, 1.0).with_stroke(GRAY_C, 2.0),
        ))
        .with_parent(tower)
        .build();
    scene
        .build_node("arm")
        .with_shape(Shape::new(
            "arm",
            create_line(0.15 * LEFT + 1.2 * UP, 0.15 * RIGHT + 1.2 * UP),
            Style::stroke(GRAY_C, 3.0),
        ))
        .with_parent(tower)
        .build();
    layout::arrange(scene, tower, DOWN, 0.0);
    tower
}

/// Builds the exhaust flame below a rocket, dimmed to its idle glow.
pub fn make_flame_for(scene: &mut Scene, rocket: NodeHandle) -> NodeHandle {
    let flame = scene
        .build_node("flame")
        .with_shape(Shape::new(
            "flame",
            create_polygon(&[
                Vec3::new(0.0, -0.05, 0.0),
                Vec3::new(0.08, -0.5, 0.0),
                Vec3::new(-0.08, -0.5, 0.0),
            ]),
            Style::fill(ORANGE, 0.6).with_stroke(ORANGE, 4.0),
        ))
        .with_scale(0.9)
        .with_opacity(0.2)
        .build();
    let anchor = layout::bottom_of(scene, rocket) + 0.18 * DOWN;
    layout::move_to(scene, flame, anchor);
    flame
}

/// Docks the rocket above the pad and parks the tower at its side.
///
/// The rocket's center lands exactly `lift` above the pad's top edge; the
/// tower abuts the rocket's left edge separated by `gap`. The pad itself
/// stays where it was placed. Tower and rocket end up grouped under the
/// returned dock node so they can be staged as one.
pub fn layout_dock(
    scene: &mut Scene,
    pad: NodeHandle,
    tower: NodeHandle,
    rocket: NodeHandle,
    gap: f32,
    lift: f32,
) -> NodeHandle {
    let pad_top = layout::top_of(scene, pad);
    layout::move_to(scene, rocket, pad_top + lift * UP);
    layout::next_to(scene, tower, rocket, LEFT, gap);

    let dock = scene.add_node(Node::new("dock"));
    scene.attach(tower, dock);
    scene.attach(rocket, dock);
    dock
}

// ========================================================================
// Choreography
// ========================================================================

/// The docked-rocket vignette.
#[derive(Debug, Default)]
pub struct StarbaseDock;

impl Choreography for StarbaseDock {
    fn construct(&mut self, stage: &mut Stage) -> Result<()> {
        stage.set_background(BG_COLOR);

        let stars = starfield::spawn(
            &mut stage.scene,
            &StarfieldOptions {
                count: 160,
                width: 30.0,
                height: 18.0,
                seed: 3,
                opacity: 0.35,
            },
        );
        stage.add(stars);

        // Assemble the dock.
        let pad = make_pad(&mut stage.scene);
        layout::move_to(&mut stage.scene, pad, 2.8 * DOWN);
        let tower = make_tower(&mut stage.scene);
        let rocket = make_ship(&mut stage.scene, TEAL);
        let dock = layout_dock(
            &mut stage.scene,
            pad,
            tower,
            rocket,
            TOWER_ROCKET_GAP,
            ROCKET_ALTITUDE,
        );

        let sign = stage.scene.add_shape(Shape::label(
            "sign",
            "STARBASE",
            28.0,
            Style::fill(WHITE, 1.0),
        ));
        layout::next_to(&mut stage.scene, sign, pad, UP, 0.15);

        let flood_left = stage.scene.add_shape(Shape::new(
            "flood_left",
            create_circle(CircleOptions { radius: 0.08 }),
            Style::fill(YELLOW, 0.6),
        ));
        let target = layout::left_of(&stage.scene, pad) + 0.8 * RIGHT + 0.2 * UP;
        layout::move_to(&mut stage.scene, flood_left, target);

        let flood_right = stage.scene.add_shape(Shape::new(
            "flood_right",
            create_circle(CircleOptions { radius: 0.08 }),
            Style::fill(YELLOW, 0.6),
        ));
        let target = layout::right_of(&stage.scene, pad) + 0.8 * LEFT + 0.2 * UP;
        layout::move_to(&mut stage.scene, flood_right, target);

        let flame = make_flame_for(&mut stage.scene, rocket);

        let base = stage.scene.add_node(Node::new("base"));
        for part in [pad, dock, sign, flood_left, flood_right, flame] {
            stage.scene.attach(part, base);
        }

        stage.play(
            PlayBatch::new()
                .with(Tween::fade_in_shifted(base, 0.4 * UP))
                .run_time(1.0),
        )?;

        // Push the frame in on the rocket while the stars drift past.
        let frame = stage.scene.frame();
        let rocket_center = layout::center_of(&stage.scene, rocket);
        stage.play(
            PlayBatch::new()
                .with(Tween::node(frame).move_to(rocket_center).scale(0.9))
                .with(Tween::node(stars).shift(1.6 * LEFT))
                .run_time(2.2)
                .rate(RateFunction::EaseInOutQuart),
        )?;

        // Idle bobs on the mount, flame breathing with them.
        stage.play(
            PlayBatch::new()
                .with(Tween::node(rocket).shift(0.06 * UP))
                .with(Tween::node(flame).fade_to(0.45))
                .run_time(0.6)
                .rate(RateFunction::ThereAndBack),
        )?;
        stage.play(
            PlayBatch::new()
                .with(Tween::node(rocket).shift(0.06 * DOWN))
                .with(Tween::node(flame).fade_to(0.2))
                .run_time(0.6)
                .rate(RateFunction::ThereAndBack),
        )?;

        // Pull back out to the full pad.
        let pad_center = layout::center_of(&stage.scene, pad);
        stage.play(
            PlayBatch::new()
                .with(Tween::node(frame).move_to(pad_center).scale(1.1))
                .with(Tween::node(stars).shift(0.8 * RIGHT))
                .run_time(2.0),
        )?;
        stage.wait(0.8)?;

        // Liftoff: ground support sinks away while the rocket climbs.
        stage.play(
            PlayBatch::new()
                .with(Tween::node(rocket).shift(8.0 * UP))
                .with(Tween::node(flame).shift(8.0 * UP).fade_to(0.7))
                .with(Tween::fade_out_shifted(pad, 0.5 * DOWN))
                .with(Tween::fade_out_shifted(tower, 0.5 * DOWN))
                .with(Tween::fade_out_shifted(sign, 0.5 * DOWN))
                .with(Tween::fade_out_shifted(flood_left, 0.5 * DOWN))
                .with(Tween::fade_out_shifted(flood_right, 0.5 * DOWN))
                .run_time(2.5)
                .rate(RateFunction::EaseInCubic),
        )?;

        let earth = stage.scene.add_shape(Shape::new(
            "earth",
            create_circle(CircleOptions { radius: 1.2 }),
            Style::fill(BLUE_E, 1.0).with_stroke(BLUE, 4.0),
        ));
        layout::move_to(&mut stage.scene, earth, 6.0 * UP);
        let earth_center = layout::center_of(&stage.scene, earth);

        let orbit = stage.scene.add_shape(Shape::new(
            "orbit",
            create_arc(ArcOptions {
                radius: 2.2,
                angle: PI,
                ..ArcOptions::default()
            }),
            Style::stroke(WHITE, 3.0),
        ));
        layout::move_to(&mut stage.scene, orbit, earth_center);

        stage.play(
            PlayBatch::new()
                .with(Tween::fade_in(earth))
                .with(Tween::fade_in(orbit))
                .run_time(1.0),
        )?;

        // Coast up to parking altitude, throttling down.
        let flame_center = earth_center + 2.32 * UP;
        stage.play(
            PlayBatch::new()
                .with(Tween::node(rocket).move_to(earth_center + 2.5 * UP))
                .with(Tween::node(flame).move_to(flame_center).fade_to(0.3))
                .run_time(2.0)
                .rate(RateFunction::EaseInOutSine),
        )?;

        stage.play(
            PlayBatch::new()
                .with(Tween::fade_out(rocket))
                .with(Tween::fade_out(flame))
                .run_time(1.0),
        )?;
        stage.wait(0.5)?;

        Ok(())
    }
}
