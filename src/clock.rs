use crate::animate::FrameTick;

/// Longest step a single frame may advance, in seconds.
pub const MAX_FRAME_DELTA: f32 = 0.1;

/// Frame clock fed from `requestAnimationFrame` timestamps (milliseconds).
/// Elapsed time only grows; each mount starts a fresh clock.
#[derive(Debug, Default)]
pub struct FrameClock {
    last_ms: Option<f64>,
    elapsed: f64,
}

impl FrameClock {
    pub fn new() -> Self {
        Self::default()
    }

    /// Advance to `timestamp_ms`. The first call anchors the clock at zero;
    /// a timestamp older than the last one yields a zero delta.
    pub fn tick(&mut self, timestamp_ms: f64) -> FrameTick {
        let delta = match self.last_ms {
            Some(last) if timestamp_ms > last => {
                ((timestamp_ms - last) / 1000.0).min(MAX_FRAME_DELTA as f64)
            }
            Some(_) => return self.current(0.0),
            None => 0.0,
        };
        self.last_ms = Some(timestamp_ms);
        self.advance(delta as f32)
    }

    /// Advance by a fixed step in seconds. Negative steps are ignored.
    pub fn advance(&mut self, delta: f32) -> FrameTick {
        let delta = delta.clamp(0.0, MAX_FRAME_DELTA);
        self.elapsed += delta as f64;
        self.current(delta)
    }

    pub fn elapsed(&self) -> f32 {
        self.elapsed as f32
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }

    fn current(&self, delta: f32) -> FrameTick {
        FrameTick {
            elapsed: self.elapsed as f32,
            delta,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_tick_anchors_at_zero() {
        let mut clock = FrameClock::new();
        let tick = clock.tick(12_345.0);
        assert_eq!(tick, FrameTick { elapsed: 0.0, delta: 0.0 });

        let tick = clock.tick(12_345.0 + 16.0);
        assert!((tick.delta - 0.016).abs() < 1e-6);
        assert!((tick.elapsed - 0.016).abs() < 1e-6);
    }

    #[test]
    fn backwards_timestamp_does_not_rewind() {
        let mut clock = FrameClock::new();
        clock.tick(1000.0);
        clock.tick(1050.0);
        let tick = clock.tick(900.0);
        assert_eq!(tick.delta, 0.0);
        assert!((tick.elapsed - 0.05).abs() < 1e-6);
    }

    #[test]
    fn long_gaps_are_clamped() {
        let mut clock = FrameClock::new();
        clock.tick(0.0);
        let tick = clock.tick(5_000.0);
        assert_eq!(tick.delta, MAX_FRAME_DELTA);
    }

    #[test]
    fn clock_resets() {
        let mut clock = FrameClock::new();
        clock.advance(0.05);
        clock.reset();
        assert_eq!(clock.elapsed(), 0.0);
    }
}
