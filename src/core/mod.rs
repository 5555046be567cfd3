//! Core building blocks shared by every system: console logging and 2D math.

// Logging macros must be declared before any module that uses them.
#[macro_use]
#[path = "utils/log.rs"]
mod log;

#[path = "math/vec2.rs"]
pub mod vec2;

pub use vec2::Vec2;
