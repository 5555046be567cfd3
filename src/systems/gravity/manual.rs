use crate::core::Vec2;

use super::{clamp_tilt, GravitySource, DEFAULT_GRAVITY};

/// Change per arrow key press.
pub const TILT_KEY_STEP: f64 = 0.1;

/// Desktop tilt control: a drag pad plus arrow keys.
#[derive(Clone, Debug)]
pub struct ManualTilt {
    gravity: Vec2,
}

impl ManualTilt {
    pub fn new() -> Self {
        Self { gravity: DEFAULT_GRAVITY }
    }

    pub fn set(&mut self, x: f64, y: f64) {
        self.gravity = clamp_tilt(Vec2::new(x, y));
    }

    /// Pointer position as fractions of the pad (`0..=1`, origin top-left).
    /// The pad center is zero tilt.
    pub fn set_from_pad(&mut self, fx: f64, fy: f64) {
        self.set((fx - 0.5) * 2.0, (fy - 0.5) * 2.0);
    }

    /// Apply an arrow key (`KeyboardEvent.key`). Returns whether the key was handled.
    pub fn nudge(&mut self, key: &str) -> bool {
        let g = &mut self.gravity;
        match key {
            "ArrowLeft" => g.x = (g.x - TILT_KEY_STEP).max(-1.0),
            "ArrowRight" => g.x = (g.x + TILT_KEY_STEP).min(1.0),
            "ArrowUp" => g.y = (g.y - TILT_KEY_STEP).max(-1.0),
            "ArrowDown" => g.y = (g.y + TILT_KEY_STEP).min(1.0),
            _ => return false,
        }
        true
    }

    pub fn reset(&mut self) {
        self.gravity = DEFAULT_GRAVITY;
    }
}

impl Default for ManualTilt {
    fn default() -> Self {
        Self::new()
    }
}

impl GravitySource for ManualTilt {
    fn gravity(&self) -> Vec2 {
        self.gravity
    }
}
