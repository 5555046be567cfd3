use serde::{Deserialize, Serialize};

/// Acceleration applied to a unit gravity direction (units/s²).
pub const GRAVITY_SCALE: f64 = 500.0;
/// Per-step linear velocity decay.
pub const DAMPING: f64 = 0.98;
/// Per-step angular velocity decay.
pub const ANGULAR_DAMPING: f64 = 0.95;

/// Simulation bounds and global integration constants.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WorldParams {
    pub width: f64,
    pub height: f64,
    pub gravity_scale: f64,
    /// In (0, 1].
    pub damping: f64,
    /// In (0, 1].
    pub angular_damping: f64,
}

impl WorldParams {
    /// World of the given size with the fixed sandbox constants.
    pub fn for_viewport(width: f64, height: f64) -> Self {
        Self {
            width,
            height,
            gravity_scale: GRAVITY_SCALE,
            damping: DAMPING,
            angular_damping: ANGULAR_DAMPING,
        }
    }
}
