//! Gravity sources
//!
//! Device orientation and the desktop tilt pad both reduce to "current
//! gravity direction". The simulation picks one when sampling; the physics
//! engine never knows which.

mod device;
mod manual;

pub use device::{DeviceTilt, PermissionState};
pub use manual::{ManualTilt, TILT_KEY_STEP};

use crate::core::Vec2;

/// Straight down, the resting tilt of both sources.
pub const DEFAULT_GRAVITY: Vec2 = Vec2::new(0.0, 1.0);

/// Anything that can report a tilt vector with components in `[-1, 1]`.
pub trait GravitySource {
    fn gravity(&self) -> Vec2;
}

#[inline]
pub(crate) fn clamp_tilt(v: Vec2) -> Vec2 {
    v.clamp_components(-1.0, 1.0)
}
