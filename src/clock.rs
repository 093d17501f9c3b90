// Turns the millisecond timestamps handed to requestAnimationFrame callbacks
// into per-tick deltas in seconds

pub const FALLBACK_DELTA: f64 = 1.0 / 60.0;

#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct FrameClock {
    last_ms: Option<f64>,
}

impl FrameClock {
    pub fn new() -> Self {
        FrameClock { last_ms: None }
    }

    /// Seconds since the previous call. The first tick has nothing to measure
    /// against and reports `FALLBACK_DELTA`; a clock that runs backwards
    /// reports zero.
    pub fn tick(&mut self, now_ms: f64) -> f64 {
        let delta = match self.last_ms {
            None => FALLBACK_DELTA,
            Some(last) => ((now_ms - last) / 1000.0).max(0.0),
        };
        self.last_ms = Some(now_ms);
        delta
    }

    // Forget the previous timestamp, e.g. after the page was hidden
    pub fn reset(&mut self) {
        self.last_ms = None;
    }
}
