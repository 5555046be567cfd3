use crate::domain::assets::AssetManifest;
use crate::gravity::{DeviceTilt, ManualTilt};
use crate::layout::create_initial_layout;
use crate::rigid_body_system::PhysicsEngine;

use super::frame_clock::FrameClock;
use super::perf_stats::PerfStats;
use super::{render_extract, SandboxCore};

pub(super) fn create_sandbox_core(width: f64, height: f64, manifest: AssetManifest) -> SandboxCore {
    let bodies = create_initial_layout(width, height, manifest.assets());
    let mut world = SandboxCore {
        engine: PhysicsEngine::new(bodies, width, height),
        manifest,
        device_tilt: DeviceTilt::new(),
        manual_tilt: ManualTilt::new(),
        clock: FrameClock::new(),
        render_buffer: Vec::new(),
        frame: 0,
        perf_enabled: false,
        perf_stats: PerfStats::default(),
    };
    render_extract::refresh_render_buffer(&mut world);
    world
}
