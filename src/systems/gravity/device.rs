use crate::core::Vec2;

use super::{clamp_tilt, GravitySource, DEFAULT_GRAVITY};

/// Degrees of side-to-side tilt (gamma) for full horizontal gravity.
const GAMMA_FULL_SCALE: f64 = 45.0;
/// Degrees of front-to-back tilt (beta) for full vertical gravity.
const BETA_FULL_SCALE: f64 = 90.0;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PermissionState {
    Unknown,
    Requesting,
    Granted,
    Denied,
}

/// Tilt from `deviceorientation` events.
///
/// The page detects support, runs the permission prompt and forwards raw
/// `beta`/`gamma` angles; this type keeps the resulting state.
#[derive(Clone, Debug)]
pub struct DeviceTilt {
    available: bool,
    needs_permission: bool,
    permission: PermissionState,
    gravity: Vec2,
}

impl DeviceTilt {
    pub fn new() -> Self {
        Self {
            available: false,
            needs_permission: false,
            permission: PermissionState::Unknown,
            gravity: DEFAULT_GRAVITY,
        }
    }

    /// Record platform support. Without a permission prompt, support alone grants access.
    pub fn detect(&mut self, has_orientation: bool, needs_permission: bool) {
        self.available = has_orientation;
        self.needs_permission = has_orientation && needs_permission;
        if has_orientation && !needs_permission {
            self.permission = PermissionState::Granted;
        }
    }

    /// Returns `false` when no prompt is needed (nothing to request).
    pub fn begin_permission_request(&mut self) -> bool {
        if !self.needs_permission {
            return false;
        }
        self.permission = PermissionState::Requesting;
        true
    }

    pub fn finish_permission_request(&mut self, granted: bool) {
        self.permission = if granted {
            PermissionState::Granted
        } else {
            console_warn!("device orientation permission denied; using manual tilt");
            PermissionState::Denied
        };
    }

    /// Feed one orientation sample (degrees). Missing angles read as 0.
    ///
    /// Ignored until the source is active.
    pub fn on_orientation(&mut self, beta: Option<f64>, gamma: Option<f64>) {
        if !self.is_active() {
            return;
        }
        let beta = beta.unwrap_or(0.0);
        let gamma = gamma.unwrap_or(0.0);
        self.gravity = clamp_tilt(Vec2::new(gamma / GAMMA_FULL_SCALE, beta / BETA_FULL_SCALE));
    }

    pub fn is_available(&self) -> bool {
        self.available
    }

    pub fn needs_permission(&self) -> bool {
        self.needs_permission
    }

    pub fn permission(&self) -> PermissionState {
        self.permission
    }

    /// Available and allowed to deliver samples.
    pub fn is_active(&self) -> bool {
        self.available && self.permission == PermissionState::Granted
    }
}

impl Default for DeviceTilt {
    fn default() -> Self {
        Self::new()
    }
}

impl GravitySource for DeviceTilt {
    fn gravity(&self) -> Vec2 {
        self.gravity
    }
}
