//! Stopwatch for perf metrics. Never feeds simulation time.

#[cfg(target_arch = "wasm32")]
type Stamp = f64;
#[cfg(not(target_arch = "wasm32"))]
type Stamp = std::time::Instant;

#[derive(Clone, Copy)]
pub(crate) struct PerfTimer {
    started_at: Stamp,
}

impl PerfTimer {
    pub(crate) fn start() -> Self {
        Self { started_at: now() }
    }

    pub(crate) fn elapsed_ms(&self) -> f64 {
        elapsed_ms_since(self.started_at)
    }
}

#[cfg(target_arch = "wasm32")]
fn now() -> Stamp {
    js_sys::Date::now()
}

#[cfg(target_arch = "wasm32")]
fn elapsed_ms_since(start: Stamp) -> f64 {
    // Date.now() is wall time and may step backwards.
    (js_sys::Date::now() - start).max(0.0)
}

#[cfg(not(target_arch = "wasm32"))]
fn now() -> Stamp {
    std::time::Instant::now()
}

#[cfg(not(target_arch = "wasm32"))]
fn elapsed_ms_since(start: Stamp) -> f64 {
    start.elapsed().as_secs_f64() * 1000.0
}
