//! Vignette Tests
//!
//! End-to-end runs of the shipped choreographies against a headless host.
//! Tests for:
//! - Dock assembly: exact lift altitude and tower clearance
//! - StarbaseDock: full timeline shape, durations, rate curves, end state
//! - RocketLaunch: countdown swaps, burn trajectory, spatial pose
//! - Countdown sub-loop in isolation
//! - Frame bookkeeping: presented frames equal the scripted windows

use glam::Vec3;
use stagecraft::animation::{BatchRecord, RateFunction, TweenOp};
use stagecraft::scene::layout::{self, DOWN, UP};
use stagecraft::scene::{Scene, SceneFeatures};
use stagecraft::shapes::style::TEAL;
use stagecraft::shapes::{Shape, Style, parse_hex};
use stagecraft::stage::Stage;
use stagecraft::vignettes::starbase_dock::{
    self, ROCKET_ALTITUDE, StarbaseDock, TOWER_ROCKET_GAP,
};
use stagecraft::vignettes::rocket_launch::{
    BODY_HEIGHT, CAMERA_PHI_DEGREES, CAMERA_THETA_DEGREES, RocketLaunch,
};
use stagecraft::vignettes::run_countdown;
use stagecraft::TimelineEvent;

const EPSILON: f32 = 1e-5;

fn approx_eq(a: f32, b: f32) -> bool {
    (a - b).abs() < EPSILON
}

fn added_names(stage: &Stage) -> Vec<&str> {
    stage
        .timeline()
        .events()
        .iter()
        .filter_map(|event| match event {
            TimelineEvent::Added { name } => Some(name.as_str()),
            _ => None,
        })
        .collect()
}

fn wait_seconds(stage: &Stage) -> Vec<f32> {
    stage
        .timeline()
        .events()
        .iter()
        .filter_map(|event| match event {
            TimelineEvent::Wait { seconds } => Some(*seconds),
            _ => None,
        })
        .collect()
}

/// Frames the scripted windows should have presented, computed with the
/// stage's own clock so rounding matches.
fn scripted_frames(stage: &Stage) -> u64 {
    stage
        .timeline()
        .events()
        .iter()
        .map(|event| match event {
            TimelineEvent::Play(record) => u64::from(stage.ticker().frames_for(record.run_time)),
            TimelineEvent::Wait { seconds } => u64::from(stage.ticker().frames_for(*seconds)),
            TimelineEvent::Added { .. } => 0,
        })
        .sum()
}

fn is_hidden(scene: &Scene, name: &str) -> bool {
    let handle = scene.find(name).unwrap();
    !scene.get_node(handle).unwrap().visible
}

// ============================================================================
// Dock assembly
// ============================================================================

#[test]
fn docked_rocket_rests_exactly_on_its_lift() {
    let mut scene = Scene::new();
    let pad = starbase_dock::make_pad(&mut scene);
    layout::move_to(&mut scene, pad, 2.8 * DOWN);
    let tower = starbase_dock::make_tower(&mut scene);
    let rocket = starbase_dock::make_ship(&mut scene, TEAL);

    let dock = starbase_dock::layout_dock(
        &mut scene,
        pad,
        tower,
        rocket,
        TOWER_ROCKET_GAP,
        ROCKET_ALTITUDE,
    );

    let pad_top = layout::top_of(&scene, pad);
    assert!(approx_eq(pad_top.y, -2.55), "got {}", pad_top.y);

    let rocket_center = layout::center_of(&scene, rocket);
    let expected = pad_top + ROCKET_ALTITUDE * UP;
    assert!(
        (rocket_center - expected).length() < EPSILON,
        "rocket must hover exactly {ROCKET_ALTITUDE} above the pad top, got {rocket_center:?}"
    );

    let clearance = layout::left_of(&scene, rocket).x - layout::right_of(&scene, tower).x;
    assert!(
        approx_eq(clearance, TOWER_ROCKET_GAP),
        "tower clearance must be exactly the gap, got {clearance}"
    );
    assert!(approx_eq(
        layout::center_of(&scene, tower).y,
        rocket_center.y
    ));

    // Tower and rocket ride the dock group; the pad stays grounded.
    assert_eq!(scene.get_node(tower).unwrap().parent(), Some(dock));
    assert_eq!(scene.get_node(rocket).unwrap().parent(), Some(dock));
    assert_eq!(scene.get_node(pad).unwrap().parent(), None);

    layout::shift(&mut scene, dock, 0.5 * UP);
    assert!(approx_eq(layout::center_of(&scene, rocket).y, -1.15));
    assert!(approx_eq(layout::center_of(&scene, pad).y, -2.8));
}

// ============================================================================
// StarbaseDock
// ============================================================================

#[test]
fn starbase_dock_timeline_matches_the_script() {
    let mut stage = Stage::headless();
    stage.run(&mut StarbaseDock).unwrap();

    let events = stage.timeline().events();
    assert_eq!(events.len(), 12, "1 added + 9 plays + 2 waits");
    assert!(matches!(&events[0], TimelineEvent::Added { name } if name == "stars"));

    let plays: Vec<&BatchRecord> = stage.timeline().plays().collect();
    let durations: Vec<f32> = plays.iter().map(|record| record.run_time).collect();
    assert_eq!(durations, vec![1.0, 2.2, 0.6, 0.6, 2.0, 2.5, 1.0, 2.0, 1.0]);

    assert_eq!(plays[0].rate_func, RateFunction::Smooth);
    assert_eq!(plays[1].rate_func, RateFunction::EaseInOutQuart);
    assert_eq!(plays[2].rate_func, RateFunction::ThereAndBack);
    assert_eq!(plays[3].rate_func, RateFunction::ThereAndBack);
    assert_eq!(plays[5].rate_func, RateFunction::EaseInCubic);
    assert_eq!(plays[7].rate_func, RateFunction::EaseInOutSine);

    assert_eq!(wait_seconds(&stage), vec![0.8, 0.5]);
    assert!(approx_eq(stage.timeline().total_duration(), 14.2));

    // The frame and the star layer move together during the push-in.
    assert!(plays[1].ops.iter().any(|op| op.target == "frame"));
    assert!(
        plays[1].has_op(|op| matches!(op, TweenOp::Shift(delta) if delta.x < 0.0)),
        "stars drift left while the frame pushes in"
    );

    assert_eq!(stage.host().frames_presented(), scripted_frames(&stage));
    assert_eq!(stage.host().frames_presented(), stage.ticker().frame_count);
}

#[test]
fn starbase_dock_ends_with_the_rocket_away() {
    let mut stage = Stage::headless();
    stage.run(&mut StarbaseDock).unwrap();
    let scene = &stage.scene;

    let expected_bg = parse_hex(starbase_dock::BG_COLOR).unwrap();
    assert_eq!(scene.background, Some(expected_bg));
    assert_eq!(stage.host().background(), Some(expected_bg));
    let features = scene.get_features();
    assert!(features.contains(SceneFeatures::BACKDROP));
    assert!(!features.contains(SceneFeatures::SPATIAL_POSE));
    assert!(!features.contains(SceneFeatures::FIXED_OVERLAY));

    // Ground support sank away with the launch; the sky remains.
    for name in [
        "pad",
        "tower",
        "sign",
        "flood_left",
        "flood_right",
        "rocket",
        "flame",
    ] {
        assert!(is_hidden(scene, name), "{name} should be concealed");
    }
    for name in ["stars", "earth", "orbit"] {
        assert!(!is_hidden(scene, name), "{name} should still show");
    }

    // The rocket parked at its coast altitude before fading.
    let rocket = scene.find("rocket").unwrap();
    let parked = layout::center_of(scene, rocket);
    assert!((parked - Vec3::new(0.0, 8.5, 0.0)).length() < 1e-4, "got {parked:?}");
    assert!(approx_eq(scene.get_node(rocket).unwrap().opacity, 0.0));

    // Push-in then pull-back leaves the frame slightly widened.
    let frame = scene.frame();
    let frame_scale = scene.get_node(frame).unwrap().transform.scale.x;
    assert!(approx_eq(frame_scale, 0.9 * 1.1), "got {frame_scale}");
}

// ============================================================================
// RocketLaunch
// ============================================================================

#[test]
fn rocket_launch_timeline_counts_down_and_burns() {
    let mut stage = Stage::headless();
    stage.run(&mut RocketLaunch).unwrap();

    assert_eq!(
        added_names(&stage),
        vec!["pad", "rocket", "countdown", "flame"]
    );

    let plays: Vec<&BatchRecord> = stage.timeline().plays().collect();
    assert_eq!(plays.len(), 7);

    // Three descending swaps, then the countdown fades.
    for (index, digit) in ["3", "2", "1"].into_iter().enumerate() {
        assert!(approx_eq(plays[index].run_time, 0.5));
        assert!(
            plays[index]
                .has_op(|op| matches!(op, TweenOp::SwapLabel(text) if text == digit)),
            "swap {index} should show {digit}"
        );
    }
    assert!(plays[3].has_op(|op| matches!(op, TweenOp::FadeOut { .. })));
    assert!(plays[3].ops.iter().all(|op| op.target == "countdown"));

    assert!(approx_eq(plays[4].run_time, 0.3), "ignition flare");
    assert_eq!(plays[5].rate_func, RateFunction::EaseInSine);
    assert!(approx_eq(plays[5].run_time, 3.0));

    assert_eq!(wait_seconds(&stage), vec![0.5, 0.5]);
    assert!(approx_eq(stage.timeline().total_duration(), 7.3));
    assert_eq!(stage.host().frames_presented(), scripted_frames(&stage));
}

#[test]
fn rocket_launch_ends_high_above_the_pad() {
    let mut stage = Stage::headless();
    stage.run(&mut RocketLaunch).unwrap();
    let scene = &stage.scene;

    let features = scene.get_features();
    assert!(features.contains(SceneFeatures::BACKDROP));
    assert!(features.contains(SceneFeatures::FIXED_OVERLAY));
    assert!(features.contains(SceneFeatures::SPATIAL_POSE));

    let pose = scene.camera_pose;
    assert!(approx_eq(pose.phi, CAMERA_PHI_DEGREES.to_radians()));
    assert!(approx_eq(pose.theta, CAMERA_THETA_DEGREES.to_radians()));

    // The countdown read "1" when it faded out.
    let countdown = scene.find("countdown").unwrap();
    assert!(is_hidden(scene, "countdown"));
    assert!(scene.get_node(countdown).unwrap().fixed_in_frame);
    assert_eq!(
        scene.shape_of(countdown).unwrap().label.as_ref().unwrap().text,
        "1"
    );

    assert!(is_hidden(scene, "pad"));

    // Stood on the pad at half its body height, then climbed 6 up, 4 out.
    let rocket = scene.find("rocket").unwrap();
    assert!(!is_hidden(scene, "rocket"));
    let center = layout::center_of(scene, rocket);
    let expected = Vec3::new(0.0, -0.01, BODY_HEIGHT / 2.0 + 0.01) + Vec3::new(0.0, 6.0, 4.0);
    assert!(
        (center - expected).length() < 1e-4,
        "expected {expected:?}, got {center:?}"
    );

    // Exhaust died off over the burn but flared to size at ignition.
    let flame = scene.find("flame").unwrap();
    let flame_node = scene.get_node(flame).unwrap();
    assert!(approx_eq(flame_node.opacity, 0.0));
    assert!(approx_eq(flame_node.transform.scale.x, 1.2));
}

// ============================================================================
// Countdown sub-loop
// ============================================================================

#[test]
fn countdown_swaps_then_fades() {
    let mut stage = Stage::headless();
    let label = stage
        .scene
        .add_shape(Shape::label("tick", "5", 48.0, Style::default()));
    stage.add(label);

    run_countdown(&mut stage, label, 2, 0.25).unwrap();

    let plays: Vec<&BatchRecord> = stage.timeline().plays().collect();
    assert_eq!(plays.len(), 3, "two swaps plus the fade");
    assert!(plays[0].has_op(|op| matches!(op, TweenOp::SwapLabel(text) if text == "2")));
    assert!(plays[1].has_op(|op| matches!(op, TweenOp::SwapLabel(text) if text == "1")));
    assert!(plays[2].has_op(|op| matches!(op, TweenOp::FadeOut { .. })));

    assert_eq!(
        stage.scene.shape_of(label).unwrap().label.as_ref().unwrap().text,
        "1"
    );
    assert!(!stage.scene.get_node(label).unwrap().visible);
    assert!(approx_eq(stage.timeline().total_duration(), 0.75));
}
