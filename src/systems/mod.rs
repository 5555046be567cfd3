//! Systems - physics, layout and gravity input

pub mod gravity;
pub mod layout;
pub mod rigid_body;
pub mod rigid_body_system;
