use super::{render_extract, PerfTimer, SandboxCore};

pub(super) fn tick(world: &mut SandboxCore, now_ms: f64) -> bool {
    match world.clock.advance(now_ms) {
        Some(dt) => {
            step(world, dt);
            true
        }
        None => false,
    }
}

pub(super) fn start_clock(world: &mut SandboxCore, now_ms: f64) {
    world.clock.start(now_ms);
}

pub(super) fn step(world: &mut SandboxCore, dt: f64) {
    if !dt.is_finite() {
        console_warn!("step: ignoring non-finite dt {}", dt);
        return;
    }

    let perf_on = world.perf_enabled;
    let step_start = if perf_on { Some(PerfTimer::start()) } else { None };

    // Sampled once per step, so the whole step sees one direction.
    let gravity = world.gravity();
    world.engine.step(dt, gravity);
    world.frame = world.frame.wrapping_add(1);

    render_extract::refresh_render_buffer(world);

    if let Some(t0) = step_start {
        let contacts = world.engine.last_contacts();
        let stats = &mut world.perf_stats;
        stats.reset();
        stats.dt = dt;
        stats.body_count = world.engine.body_count() as u32;
        stats.bounds_contacts = contacts.bounds_contacts;
        stats.pairs_tested = contacts.pairs_tested;
        stats.pairs_resolved = contacts.pairs_resolved;
        stats.max_speed = world
            .engine
            .bodies()
            .iter()
            .map(|b| b.velocity.length())
            .fold(0.0, f64::max);
        stats.frame = world.frame;
        stats.step_ms = t0.elapsed_ms();
    }
}
