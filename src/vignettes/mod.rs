//! Scripted Vignettes
//!
//! The two shipped choreographies, plus the helpers they share. Each
//! vignette implements [`Choreography`](crate::stage::Choreography) and can
//! be run against any host; the assembly builders are public so tests can
//! stage individual pieces.

pub mod rocket_launch;
pub mod starbase_dock;

pub use rocket_launch::RocketLaunch;
pub use starbase_dock::StarbaseDock;

use crate::animation::{PlayBatch, Tween};
use crate::errors::Result;
use crate::scene::NodeHandle;
use crate::stage::Stage;

/// Counts a label down from `from` to 1, holding each value for `hold`
/// seconds, then fades the label out over the same hold.
///
/// The first swap re-asserts the starting value, so a count from 3 emits
/// three descending swap windows before the fade.
pub fn run_countdown(stage: &mut Stage, label: NodeHandle, from: u32, hold: f32) -> Result<()> {
    for value in (1..=from).rev() {
        stage.play(
            PlayBatch::new()
                .with(Tween::node(label).become_text(value.to_string()))
                .run_time(hold),
        )?;
    }
    stage.play(
        PlayBatch::new()
            .with(Tween::fade_out(label))
            .run_time(hold),
    )
}
