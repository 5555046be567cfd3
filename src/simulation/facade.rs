use wasm_bindgen::prelude::*;

use crate::domain::assets::AssetManifest;
use crate::layout::create_initial_layout;

use super::perf_stats::PerfStats;
use super::SandboxCore;

/// Build a starting layout for `assets_json` and return the bodies as JSON.
#[wasm_bindgen(js_name = createInitialLayout)]
pub fn create_initial_layout_json(width: f64, height: f64, assets_json: String) -> Result<String, JsValue> {
    let manifest = AssetManifest::from_json(&assets_json).map_err(|e| JsValue::from_str(&e))?;
    let bodies = create_initial_layout(width, height, manifest.assets());
    serde_json::to_string(&bodies).map_err(|e| JsValue::from_str(&e.to_string()))
}

#[wasm_bindgen]
pub struct Sandbox {
    core: SandboxCore,
}

#[wasm_bindgen]
impl Sandbox {
    /// Create a sandbox of the given CSS-pixel size with the built-in icons
    #[wasm_bindgen(constructor)]
    pub fn new(width: f64, height: f64) -> Self {
        console_log!("sandbox created: {}x{}", width, height);
        Self {
            core: SandboxCore::new(width, height),
        }
    }

    /// Create a sandbox from an icon manifest (`[{id, label, path}]` or `{icons: [...]}`)
    #[wasm_bindgen(js_name = withAssetsJson)]
    pub fn with_assets_json(width: f64, height: f64, json: String) -> Result<Sandbox, JsValue> {
        let manifest = AssetManifest::from_json(&json).map_err(|e| JsValue::from_str(&e))?;
        console_log!("sandbox created: {}x{} with {} icons", width, height, manifest.len());
        Ok(Self {
            core: SandboxCore::with_manifest(width, height, manifest),
        })
    }

    #[wasm_bindgen(getter)]
    pub fn width(&self) -> f64 { self.core.width() }

    #[wasm_bindgen(getter)]
    pub fn height(&self) -> f64 { self.core.height() }

    #[wasm_bindgen(getter)]
    pub fn frame(&self) -> u64 { self.core.frame() }

    /// Icon manifest as JSON, for the page to load images keyed by id
    pub fn assets_json(&self) -> String {
        self.core.manifest().to_json()
    }

    // === FRAME DRIVING ===

    /// Call once per animation frame with its timestamp (ms)
    pub fn tick(&mut self, now_ms: f64) -> bool {
        self.core.tick(now_ms)
    }

    /// Prime the frame clock when the animation loop starts (`performance.now()`)
    pub fn start_clock(&mut self, now_ms: f64) {
        self.core.start_clock(now_ms);
    }

    pub fn step(&mut self, dt: f64) {
        self.core.step(dt);
    }

    pub fn reset(&mut self) {
        self.core.reset();
    }

    // === GRAVITY ===

    #[wasm_bindgen(getter)]
    pub fn gravity_x(&self) -> f64 { self.core.gravity().x }

    #[wasm_bindgen(getter)]
    pub fn gravity_y(&self) -> f64 { self.core.gravity().y }

    pub fn is_using_device_tilt(&self) -> bool {
        self.core.is_using_device_tilt()
    }

    pub fn set_manual_gravity(&mut self, x: f64, y: f64) {
        self.core.set_manual_gravity(x, y);
    }

    /// Pointer position on the tilt pad as fractions of its size
    pub fn set_tilt_from_pad(&mut self, fx: f64, fy: f64) {
        self.core.set_tilt_from_pad(fx, fy);
    }

    /// Arrow-key tilt. Returns true if the key was consumed (caller should `preventDefault`).
    pub fn nudge_tilt(&mut self, key: &str) -> bool {
        self.core.nudge_tilt(key)
    }

    pub fn detect_device_tilt(&mut self, available: bool, needs_permission: bool) {
        self.core.detect_device_tilt(available, needs_permission);
    }

    pub fn needs_motion_permission(&self) -> bool {
        let tilt = self.core.device_tilt();
        tilt.needs_permission() && !tilt.is_active()
    }

    pub fn begin_permission_request(&mut self) -> bool {
        self.core.begin_permission_request()
    }

    pub fn finish_permission_request(&mut self, granted: bool) {
        self.core.finish_permission_request(granted);
    }

    /// Forward a `deviceorientation` event (`beta`/`gamma` may be null)
    pub fn on_device_orientation(&mut self, beta: Option<f64>, gamma: Option<f64>) {
        self.core.on_device_orientation(beta, gamma);
    }

    // === RENDER API ===

    pub fn body_count(&self) -> usize {
        self.core.body_count()
    }

    /// Pointer to packed `[x, y, rotation, radius]` f32 quadruples
    pub fn render_ptr(&self) -> *const f32 {
        self.core.render_buffer().as_ptr()
    }

    /// Render buffer length in f32 elements
    pub fn render_len(&self) -> usize {
        self.core.render_buffer().len()
    }

    pub fn body_id(&self, index: usize) -> Option<String> {
        self.core.body_id(index).map(str::to_string)
    }

    pub fn bodies_json(&self) -> String {
        self.core.bodies_json()
    }

    // === SETTINGS ===

    pub fn set_max_frame_dt(&mut self, seconds: f64) {
        self.core.set_max_frame_dt(seconds);
    }

    /// Enable or disable per-step perf metrics (adds timing overhead when enabled)
    pub fn enable_perf_metrics(&mut self, enabled: bool) {
        self.core.enable_perf_metrics(enabled);
    }

    /// Get last step perf snapshot (zeros when perf disabled)
    pub fn get_perf_stats(&self) -> PerfStats {
        self.core.get_perf_stats()
    }
}
