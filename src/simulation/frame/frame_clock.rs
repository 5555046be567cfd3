/// Largest dt handed to the engine (~30 fps). Longer gaps, such as a
/// backgrounded tab, are treated as one slow frame.
pub const MAX_FRAME_DT: f64 = 0.033;

/// Turns frame timestamps into clamped step durations.
#[derive(Clone, Debug)]
pub struct FrameClock {
    last_ms: Option<f64>,
    max_dt: f64,
}

impl FrameClock {
    pub fn new() -> Self {
        Self {
            last_ms: None,
            max_dt: MAX_FRAME_DT,
        }
    }

    /// Prime the clock, e.g. with `performance.now()` when the loop starts.
    ///
    /// Non-finite timestamps are ignored.
    pub fn start(&mut self, now_ms: f64) {
        if now_ms.is_finite() {
            self.last_ms = Some(now_ms);
        }
    }

    /// Seconds since the previous timestamp, clamped to `[0, max_dt]`.
    ///
    /// `None` for the very first timestamp and for non-finite ones; the latter
    /// leave the previous reference in place.
    pub fn advance(&mut self, now_ms: f64) -> Option<f64> {
        if !now_ms.is_finite() {
            return None;
        }
        let prev = self.last_ms.replace(now_ms)?;
        Some(((now_ms - prev) / 1000.0).clamp(0.0, self.max_dt))
    }

    pub fn max_dt(&self) -> f64 {
        self.max_dt
    }

    pub fn set_max_dt(&mut self, seconds: f64) {
        self.max_dt = seconds;
    }
}

impl Default for FrameClock {
    fn default() -> Self {
        Self::new()
    }
}
