use serde::{Deserialize, Serialize};

use super::Vec2;

pub const DEFAULT_MASS: f64 = 1.0;
pub const DEFAULT_RESTITUTION: f64 = 0.4;
pub const DEFAULT_FRICTION: f64 = 0.3;

/// Rigid Body - a circle with linear and angular motion state
///
/// `radius`, `mass`, `restitution` and `friction` are fixed at construction
/// and only readable afterwards.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RigidBody {
    /// Stable key shared with externally owned resources (icon image, label).
    pub id: String,
    /// World position (center of mass)
    pub position: Vec2,
    /// Units per second
    pub velocity: Vec2,
    /// Radians
    pub rotation: f64,
    /// Radians per second
    pub angular_velocity: f64,
    radius: f64,
    mass: f64,
    /// Bounciness (0.0 = no bounce, 1.0 = full elastic)
    restitution: f64,
    /// Tangential impulse damping factor
    friction: f64,
}

impl RigidBody {
    /// Create a circular body at rest.
    ///
    /// The caller upholds `radius > 0`, `mass > 0` and restitution/friction in
    /// `[0, 1]`; nothing here validates them.
    pub fn new_circle(
        id: impl Into<String>,
        position: Vec2,
        radius: f64,
        mass: f64,
        restitution: f64,
        friction: f64,
    ) -> Self {
        Self {
            id: id.into(),
            position,
            velocity: Vec2::ZERO,
            rotation: 0.0,
            angular_velocity: 0.0,
            radius,
            mass,
            restitution,
            friction,
        }
    }

    /// Circle with the sandbox's default material (`mass = 1`, `restitution = 0.4`, `friction = 0.3`).
    pub fn icon(id: impl Into<String>, position: Vec2, radius: f64) -> Self {
        Self::new_circle(id, position, radius, DEFAULT_MASS, DEFAULT_RESTITUTION, DEFAULT_FRICTION)
    }

    pub fn with_velocity(mut self, velocity: Vec2) -> Self {
        self.velocity = velocity;
        self
    }

    #[inline]
    pub fn radius(&self) -> f64 {
        self.radius
    }

    #[inline]
    pub fn mass(&self) -> f64 {
        self.mass
    }

    #[inline]
    pub fn restitution(&self) -> f64 {
        self.restitution
    }

    #[inline]
    pub fn friction(&self) -> f64 {
        self.friction
    }

    /// True when the whole circle lies inside `[0, width] x [0, height]`.
    pub fn is_within(&self, width: f64, height: f64) -> bool {
        let r = self.radius;
        self.position.x >= r
            && self.position.x <= width - r
            && self.position.y >= r
            && self.position.y <= height - r
    }
}
