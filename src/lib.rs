//! Tumble Engine - rigid-body physics for the home screen tilt sandbox
//!
//! A handful of circular icon bodies fall, bounce off the screen edges and
//! collide with each other under a gravity direction steered by device tilt
//! or a desktop tilt pad.
//!
//! Architecture:
//! - core/        - Logging macros and 2D math
//! - domain/      - Icon asset manifest
//! - systems/     - Physics engine, initial layout, gravity sources
//! - simulation/  - Composition root and the WASM facade

// Logging macros (must be first for macro scoping!)
#[macro_use]
pub mod core;
pub mod domain;
pub mod systems;
pub mod simulation;

// Short paths for the most used systems
pub use systems::gravity;
pub use systems::layout;
pub use systems::rigid_body;
pub use systems::rigid_body_system;

use wasm_bindgen::prelude::*;

// Better error messages in debug mode
#[cfg(feature = "console_error_panic_hook")]
pub fn set_panic_hook() {
    console_error_panic_hook::set_once();
}

/// Initialize the engine
#[wasm_bindgen]
pub fn init() {
    #[cfg(feature = "console_error_panic_hook")]
    set_panic_hook();

    console_log!("Tumble engine {} initialized", env!("CARGO_PKG_VERSION"));
}

/// Get engine version
#[wasm_bindgen]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}

// Re-export main types
pub use crate::core::Vec2;
pub use domain::assets::{AssetManifest, IconAsset};
pub use layout::create_initial_layout;
pub use rigid_body::{RigidBody, WorldParams};
pub use rigid_body_system::{PhysicsEngine, MAX_SPEED};
pub use simulation::{Sandbox, SandboxCore};
