use crate::layout::create_initial_layout;

use super::{render_extract, SandboxCore};

pub(super) fn reset(world: &mut SandboxCore) {
    let (width, height) = (world.width(), world.height());
    let bodies = create_initial_layout(width, height, world.manifest.assets());
    world.engine.replace_bodies(bodies);
    world.manual_tilt.reset();
    render_extract::refresh_render_buffer(world);

    console_log!("sandbox reset: {} bodies in {}x{}", world.engine.body_count(), width, height);
}

pub(super) fn set_manual_gravity(world: &mut SandboxCore, x: f64, y: f64) {
    world.manual_tilt.set(x, y);
}

pub(super) fn set_tilt_from_pad(world: &mut SandboxCore, fx: f64, fy: f64) {
    world.manual_tilt.set_from_pad(fx, fy);
}

pub(super) fn nudge_tilt(world: &mut SandboxCore, key: &str) -> bool {
    world.manual_tilt.nudge(key)
}

pub(super) fn detect_device_tilt(world: &mut SandboxCore, available: bool, needs_permission: bool) {
    world.device_tilt.detect(available, needs_permission);
}

pub(super) fn begin_permission_request(world: &mut SandboxCore) -> bool {
    world.device_tilt.begin_permission_request()
}

pub(super) fn finish_permission_request(world: &mut SandboxCore, granted: bool) {
    world.device_tilt.finish_permission_request(granted);
}

pub(super) fn on_device_orientation(world: &mut SandboxCore, beta: Option<f64>, gamma: Option<f64>) {
    world.device_tilt.on_orientation(beta, gamma);
}
