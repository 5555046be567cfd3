use super::perf_stats::PerfStats;
use super::SandboxCore;

pub(super) fn set_max_frame_dt(world: &mut SandboxCore, seconds: f64) {
    if !(seconds.is_finite() && seconds > 0.0) {
        console_warn!("ignoring max frame dt {}: must be a positive number of seconds", seconds);
        return;
    }
    world.clock.set_max_dt(seconds);
}

pub(super) fn max_frame_dt(world: &SandboxCore) -> f64 {
    world.clock.max_dt()
}

pub(super) fn enable_perf_metrics(world: &mut SandboxCore, enabled: bool) {
    world.perf_enabled = enabled;
    if !enabled {
        world.perf_stats.reset();
    }
}

pub(super) fn get_perf_stats(world: &SandboxCore) -> PerfStats {
    world.perf_stats.clone()
}
