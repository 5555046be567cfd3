//! Sandbox - composition root of the tilt simulation
//!
//! Wires the asset manifest, the physics engine, both gravity sources and the
//! frame clock together. The page only forwards raw events (timestamps,
//! orientation angles, pointer/keys, reset clicks) and reads render state back.
//!
//! Frame flow: `tick(now)` -> clamped dt -> sample active gravity source ->
//! `PhysicsEngine::step` -> refresh render buffer.

use crate::domain::assets::AssetManifest;
use crate::gravity::{DeviceTilt, GravitySource, ManualTilt};
use crate::rigid_body::{RigidBody, Vec2};
use crate::rigid_body_system::PhysicsEngine;

#[path = "perf/perf_timer.rs"]
mod perf_timer;
#[path = "perf/perf_stats.rs"]
mod perf_stats;
#[path = "frame/frame_clock.rs"]
mod frame_clock;
#[path = "step/step.rs"]
mod step;
#[path = "commands/commands.rs"]
mod commands;
#[path = "render/render_extract.rs"]
mod render_extract;
#[path = "init/init.rs"]
mod init;
#[path = "init/settings.rs"]
mod settings;
mod facade;

pub use facade::{create_initial_layout_json, Sandbox};
pub use frame_clock::{FrameClock, MAX_FRAME_DT};
pub use perf_stats::PerfStats;

use perf_timer::PerfTimer;

/// Floats per body in the render buffer: x, y, rotation, radius.
pub const RENDER_STRIDE: usize = 4;

/// The simulation session
pub struct SandboxCore {
    manifest: AssetManifest,
    engine: PhysicsEngine,
    device_tilt: DeviceTilt,
    manual_tilt: ManualTilt,
    clock: FrameClock,
    render_buffer: Vec<f32>,

    // State
    frame: u64,

    // Perf metrics
    perf_enabled: bool,
    perf_stats: PerfStats,
}

impl SandboxCore {
    /// Create a sandbox with the built-in icon set
    pub fn new(width: f64, height: f64) -> Self {
        init::create_sandbox_core(width, height, AssetManifest::builtin())
    }

    pub fn with_manifest(width: f64, height: f64, manifest: AssetManifest) -> Self {
        init::create_sandbox_core(width, height, manifest)
    }

    pub fn width(&self) -> f64 { self.engine.params().width }

    pub fn height(&self) -> f64 { self.engine.params().height }

    pub fn frame(&self) -> u64 { self.frame }

    pub fn manifest(&self) -> &AssetManifest { &self.manifest }

    pub fn engine(&self) -> &PhysicsEngine { &self.engine }

    pub fn bodies(&self) -> &[RigidBody] { self.engine.bodies() }

    pub fn body_count(&self) -> usize { self.engine.body_count() }

    // === FRAME DRIVING ===

    /// Advance from a frame timestamp (ms, e.g. `requestAnimationFrame` time).
    ///
    /// The first timestamp only primes the clock. Returns whether a step ran.
    pub fn tick(&mut self, now_ms: f64) -> bool {
        step::tick(self, now_ms)
    }

    /// Prime the frame clock so the first `tick` after it already steps
    pub fn start_clock(&mut self, now_ms: f64) {
        step::start_clock(self, now_ms);
    }

    /// Step by an explicit `dt` (seconds) using the active gravity source.
    /// A non-finite `dt` is ignored.
    pub fn step(&mut self, dt: f64) {
        step::step(self, dt);
    }

    /// Replace all bodies with a fresh initial layout and level the manual tilt
    pub fn reset(&mut self) {
        commands::reset(self);
    }

    // === GRAVITY ===

    /// Gravity the next step will use
    pub fn gravity(&self) -> Vec2 {
        self.active_source().gravity()
    }

    pub fn is_using_device_tilt(&self) -> bool {
        self.device_tilt.is_active()
    }

    pub fn device_tilt(&self) -> &DeviceTilt { &self.device_tilt }

    pub fn manual_tilt(&self) -> &ManualTilt { &self.manual_tilt }

    pub fn set_manual_gravity(&mut self, x: f64, y: f64) {
        commands::set_manual_gravity(self, x, y);
    }

    pub fn set_tilt_from_pad(&mut self, fx: f64, fy: f64) {
        commands::set_tilt_from_pad(self, fx, fy);
    }

    pub fn nudge_tilt(&mut self, key: &str) -> bool {
        commands::nudge_tilt(self, key)
    }

    pub fn detect_device_tilt(&mut self, available: bool, needs_permission: bool) {
        commands::detect_device_tilt(self, available, needs_permission);
    }

    pub fn begin_permission_request(&mut self) -> bool {
        commands::begin_permission_request(self)
    }

    pub fn finish_permission_request(&mut self, granted: bool) {
        commands::finish_permission_request(self, granted);
    }

    pub fn on_device_orientation(&mut self, beta: Option<f64>, gamma: Option<f64>) {
        commands::on_device_orientation(self, beta, gamma);
    }

    // === RENDER API ===

    /// Packed `[x, y, rotation, radius]` per body, in body order
    pub fn render_buffer(&self) -> &[f32] {
        &self.render_buffer
    }

    pub fn body_id(&self, index: usize) -> Option<&str> {
        render_extract::body_id(self, index)
    }

    /// Snapshot of all bodies as a JSON array
    pub fn bodies_json(&self) -> String {
        render_extract::bodies_json(self)
    }

    // === SETTINGS ===

    pub fn set_max_frame_dt(&mut self, seconds: f64) {
        settings::set_max_frame_dt(self, seconds);
    }

    pub fn max_frame_dt(&self) -> f64 {
        settings::max_frame_dt(self)
    }

    /// Enable or disable per-step perf metrics (adds timing overhead when enabled)
    pub fn enable_perf_metrics(&mut self, enabled: bool) {
        settings::enable_perf_metrics(self, enabled);
    }

    /// Get last step perf snapshot (zeros when perf disabled)
    pub fn get_perf_stats(&self) -> PerfStats {
        settings::get_perf_stats(self)
    }

    fn active_source(&self) -> &dyn GravitySource {
        if self.device_tilt.is_active() {
            &self.device_tilt
        } else {
            &self.manual_tilt
        }
    }
}

#[cfg(test)]
#[path = "tests/tests.rs"]
mod tests;
