//! Rocket Launch demo
//!
//! Plays the spatial launch vignette against the headless host and logs a
//! run summary: requested camera pose, countdown swaps, and total length.

use stagecraft::Stage;
use stagecraft::animation::TweenOp;
use stagecraft::vignettes::RocketLaunch;

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let mut stage = Stage::headless();
    stage.run(&mut RocketLaunch)?;

    let pose = stage.scene.camera_pose;
    log::info!(
        "camera pose: phi {:.1} deg, theta {:.1} deg, zoom {:.2}",
        pose.phi.to_degrees(),
        pose.theta.to_degrees(),
        pose.zoom
    );

    let swaps = stage
        .timeline()
        .plays()
        .filter(|record| record.has_op(|op| matches!(op, TweenOp::SwapLabel(_))))
        .count();
    log::info!(
        "countdown swapped {swaps} times over a {:.2}s run ({} frames)",
        stage.timeline().total_duration(),
        stage.ticker().frame_count
    );
    Ok(())
}
