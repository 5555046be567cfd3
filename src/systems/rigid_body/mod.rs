//! RigidBody - A circular solid that moves as a unit
//!
//! Bodies carry no shape beyond their radius. The collection of bodies and
//! the world parameters are owned by `PhysicsEngine`.

mod body;
mod params;

pub use crate::core::Vec2;
pub use body::{RigidBody, DEFAULT_FRICTION, DEFAULT_MASS, DEFAULT_RESTITUTION};
pub use params::{WorldParams, ANGULAR_DAMPING, DAMPING, GRAVITY_SCALE};
