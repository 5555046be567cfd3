use wasm_bindgen::prelude::*;

/// Snapshot of the last step, filled only while perf metrics are enabled.
#[wasm_bindgen]
#[derive(Clone, Debug, Default)]
pub struct PerfStats {
    pub(super) step_ms: f64,
    pub(super) dt: f64,
    pub(super) body_count: u32,
    pub(super) bounds_contacts: u32,
    pub(super) pairs_tested: u32,
    pub(super) pairs_resolved: u32,
    pub(super) max_speed: f64,
    pub(super) frame: u64,
}

impl PerfStats {
    pub(crate) fn reset(&mut self) {
        *self = PerfStats::default();
    }
}

#[wasm_bindgen]
impl PerfStats {
    #[wasm_bindgen(getter)]
    pub fn step_ms(&self) -> f64 { self.step_ms }
    #[wasm_bindgen(getter)]
    pub fn dt(&self) -> f64 { self.dt }
    #[wasm_bindgen(getter)]
    pub fn body_count(&self) -> u32 { self.body_count }
    #[wasm_bindgen(getter)]
    pub fn bounds_contacts(&self) -> u32 { self.bounds_contacts }
    #[wasm_bindgen(getter)]
    pub fn pairs_tested(&self) -> u32 { self.pairs_tested }
    #[wasm_bindgen(getter)]
    pub fn pairs_resolved(&self) -> u32 { self.pairs_resolved }
    /// Fastest body after the step (units/s)
    #[wasm_bindgen(getter)]
    pub fn max_speed(&self) -> f64 { self.max_speed }
    #[wasm_bindgen(getter)]
    pub fn frame(&self) -> u64 { self.frame }
}
