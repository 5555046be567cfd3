//! PhysicsEngine - Impulse-based circle physics for the tilt sandbox
//!
//! Each step runs, in this order:
//! 1. velocity integration (gravity, damping, speed clamp)
//! 2. position integration
//! 3. bounds collision, per body and per wall
//! 4. pairwise body collision (O(n²), no broad phase)
//!
//! Bounds are only enforced in (3), so the positional correction in (4) can
//! leave a body slightly outside the walls until the next step.

mod collision;
mod system;

pub use collision::ContactCounters;
pub use system::{PhysicsEngine, MAX_SPEED};
