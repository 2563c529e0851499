//! Play Batches
//!
//! A [`PlayBatch`] is one play window: a set of tweens that run
//! concurrently over the same duration under the same rate function.
//! Batches are built fluently and validated before they run; a
//! non-finite or negative duration aborts the run instead of producing
//! frames of garbage.

use crate::animation::easing::RateFunction;
use crate::animation::tween::Tween;
use crate::errors::{Result, StageError};

/// Default play window length, in seconds.
pub const DEFAULT_RUN_TIME: f32 = 1.0;

/// A set of concurrent tweens sharing one duration and rate function.
#[derive(Debug, Clone, PartialEq)]
pub struct PlayBatch {
    pub tweens: Vec<Tween>,
    pub run_time: f32,
    pub rate_func: RateFunction,
}

impl Default for PlayBatch {
    fn default() -> Self {
        Self::new()
    }
}

impl PlayBatch {
    #[must_use]
    pub fn new() -> Self {
        Self {
            tweens: Vec::new(),
            run_time: DEFAULT_RUN_TIME,
            rate_func: RateFunction::default(),
        }
    }

    /// Adds a tween to the window.
    #[must_use]
    pub fn with(mut self, tween: Tween) -> Self {
        self.tweens.push(tween);
        self
    }

    /// Sets the window length in seconds.
    #[must_use]
    pub fn run_time(mut self, seconds: f32) -> Self {
        self.run_time = seconds;
        self
    }

    /// Sets the easing curve shared by every tween in the window.
    #[must_use]
    pub fn rate(mut self, rate_func: RateFunction) -> Self {
        self.rate_func = rate_func;
        self
    }

    /// Checks the window is playable: the duration must be finite and
    /// non-negative. A zero duration is allowed and resolves in a single
    /// frame.
    pub fn validate(&self) -> Result<()> {
        if !self.run_time.is_finite() || self.run_time < 0.0 {
            return Err(StageError::InvalidDuration {
                seconds: self.run_time,
            });
        }
        Ok(())
    }
}
