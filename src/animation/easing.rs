//! Rate Functions
//!
//! The finite set of easing curves a transition may use. Each maps
//! normalized time in `[0, 1]` to interpolation progress; all of them start
//! at 0 and end at 1, except [`RateFunction::ThereAndBack`] which returns
//! to 0 so a property lands back on its starting value.

/// Easing curve applied to a transition's normalized time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RateFunction {
    Linear,
    /// Smootherstep: zero velocity at both ends.
    #[default]
    Smooth,
    /// Out and back again; progress peaks at the halfway point.
    ThereAndBack,
    EaseInSine,
    EaseInOutSine,
    EaseInCubic,
    EaseInOutQuart,
}

impl RateFunction {
    /// Every supported curve, for validation and exhaustive tests.
    pub const ALL: [Self; 7] = [
        Self::Linear,
        Self::Smooth,
        Self::ThereAndBack,
        Self::EaseInSine,
        Self::EaseInOutSine,
        Self::EaseInCubic,
        Self::EaseInOutQuart,
    ];

    /// Maps normalized time to progress. Input is clamped to `[0, 1]`.
    #[must_use]
    pub fn evaluate(self, t: f32) -> f32 {
        use std::f32::consts::{FRAC_PI_2, PI};

        let t = t.clamp(0.0, 1.0);
        match self {
            Self::Linear => t,
            Self::Smooth => smootherstep(t),
            Self::ThereAndBack => {
                if t < 0.5 {
                    smootherstep(2.0 * t)
                } else {
                    smootherstep(2.0 * (1.0 - t))
                }
            }
            Self::EaseInSine => 1.0 - (t * FRAC_PI_2).cos(),
            Self::EaseInOutSine => -((PI * t).cos() - 1.0) / 2.0,
            Self::EaseInCubic => t * t * t,
            Self::EaseInOutQuart => {
                if t < 0.5 {
                    8.0 * t * t * t * t
                } else {
                    let u = -2.0 * t + 2.0;
                    1.0 - u * u * u * u / 2.0
                }
            }
        }
    }

    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Self::Linear => "linear",
            Self::Smooth => "smooth",
            Self::ThereAndBack => "there_and_back",
            Self::EaseInSine => "ease_in_sine",
            Self::EaseInOutSine => "ease_in_out_sine",
            Self::EaseInCubic => "ease_in_cubic",
            Self::EaseInOutQuart => "ease_in_out_quart",
        }
    }

    /// Inverse of [`RateFunction::name`]. Unknown names yield `None`; there
    /// is no fallback curve.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|rf| rf.name() == name)
    }
}

fn smootherstep(t: f32) -> f32 {
    t * t * t * (10.0 - 15.0 * t + 6.0 * t * t)
}
