/// Deterministic frame clock for scripted playback.
///
/// Unlike a wall-clock timer, playback advances by scripted durations: a
/// window of `n` seconds always produces the same frame count at a given
/// frame rate, so runs are reproducible.
pub struct FrameTicker {
    frame_rate: u32,
    /// Total frames advanced so far.
    pub frame_count: u64,
    /// Total presented time in seconds (`frame_count / frame_rate`).
    pub elapsed: f64,
}

impl Default for FrameTicker {
    fn default() -> Self {
        Self::new(DEFAULT_FRAME_RATE)
    }
}

/// Playback rate used when none is configured.
pub const DEFAULT_FRAME_RATE: u32 = 60;

impl FrameTicker {
    #[must_use]
    pub fn new(frame_rate: u32) -> Self {
        Self {
            frame_rate: frame_rate.max(1),
            frame_count: 0,
            elapsed: 0.0,
        }
    }

    #[inline]
    #[must_use]
    pub fn frame_rate(&self) -> u32 {
        self.frame_rate
    }

    /// Seconds covered by one frame.
    #[inline]
    #[must_use]
    pub fn dt_seconds(&self) -> f32 {
        #[allow(clippy::cast_precision_loss)]
        let rate = self.frame_rate as f32;
        1.0 / rate
    }

    /// Frames needed to cover `seconds` of scripted time. Always at least
    /// one, so zero-length windows still resolve.
    #[must_use]
    pub fn frames_for(&self, seconds: f32) -> u32 {
        #[allow(clippy::cast_precision_loss)]
        let rate = self.frame_rate as f32;
        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        let frames = (seconds * rate).ceil() as u32;
        frames.max(1)
    }

    /// Advances the clock by a number of presented frames.
    ///
    /// Elapsed time is derived from the total frame count rather than
    /// accumulated per call, so whole seconds stay exact.
    pub fn advance(&mut self, frames: u32) {
        self.frame_count += u64::from(frames);
        #[allow(clippy::cast_precision_loss)]
        let count = self.frame_count as f64;
        self.elapsed = count / f64::from(self.frame_rate);
    }
}
