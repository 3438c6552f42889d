use std::time::{Duration, Instant};

/// Length of one frame at the reference rate of 60 Hz, in milliseconds.
pub const FRAME_DURATION_MS: f32 = 1000.0 / 60.0;

/// Elapsed wall time expressed in reference frames.
pub fn frame_delta(elapsed: Duration) -> f32 {
    let delta = elapsed.as_secs_f32() * 1000.0 / FRAME_DURATION_MS;
    if delta.is_finite() {
        delta
    } else {
        0.0
    }
}

/// Frame timer for drivers that don't have Bevy's `Time`.
#[derive(Clone, Copy, Debug, Default)]
pub struct FrameClock {
    last_update: Option<Instant>,
}

impl FrameClock {
    pub fn new() -> Self {
        Self::default()
    }

    /// Frames elapsed since the previous tick. The first tick returns 0.
    pub fn tick(&mut self, now: Instant) -> f32 {
        let delta = match self.last_update {
            Some(last) => frame_delta(now.saturating_duration_since(last)),
            None => 0.0,
        };
        self.last_update = Some(now);
        delta
    }
}
