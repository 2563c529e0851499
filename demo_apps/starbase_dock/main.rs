//! Starbase Dock demo
//!
//! Plays the docked-rocket vignette against the headless host and logs the
//! resulting timeline. Run with `RUST_LOG=info` to see the event listing.

use stagecraft::vignettes::StarbaseDock;
use stagecraft::{Stage, TimelineEvent};

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let mut stage = Stage::headless();
    stage.run(&mut StarbaseDock)?;

    for event in stage.timeline().events() {
        match event {
            TimelineEvent::Added { name } => log::info!("added  {name}"),
            TimelineEvent::Play(record) => log::info!(
                "play   {:.2}s  {:<16} {} ops",
                record.run_time,
                record.rate_func.name(),
                record.ops.len()
            ),
            TimelineEvent::Wait { seconds } => log::info!("wait   {seconds:.2}s"),
        }
    }
    log::info!(
        "played {:.2}s across {} frames",
        stage.timeline().total_duration(),
        stage.ticker().frame_count
    );
    Ok(())
}
