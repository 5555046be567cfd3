use std::collections::HashMap;

use crate::rigid_body::{RigidBody, Vec2, WorldParams};

use super::collision::{resolve_bounds, resolve_pair, ContactCounters};

/// Speed cap (units/second). Guards against runaway accumulation, not physics.
pub const MAX_SPEED: f64 = 1000.0;

/// Owns all bodies of one simulation session and advances them.
pub struct PhysicsEngine {
    bodies: Vec<RigidBody>,
    /// id -> position in `bodies`, rebuilt whenever the collection is replaced.
    index: HashMap<String, usize>,
    params: WorldParams,
    last_contacts: ContactCounters,
}

impl PhysicsEngine {
    pub fn new(bodies: Vec<RigidBody>, width: f64, height: f64) -> Self {
        let mut engine = Self {
            bodies: Vec::new(),
            index: HashMap::new(),
            params: WorldParams::for_viewport(width, height),
            last_contacts: ContactCounters::default(),
        };
        engine.replace_bodies(bodies);
        engine
    }

    pub fn params(&self) -> &WorldParams {
        &self.params
    }

    pub fn bodies(&self) -> &[RigidBody] {
        &self.bodies
    }

    pub fn body_count(&self) -> usize {
        self.bodies.len()
    }

    /// Look a body up by its stable id.
    pub fn body(&self, id: &str) -> Option<&RigidBody> {
        self.index_of(id).map(|i| &self.bodies[i])
    }

    /// Current position of `id` in `bodies()`.
    pub fn index_of(&self, id: &str) -> Option<usize> {
        self.index.get(id).copied()
    }

    pub fn last_contacts(&self) -> ContactCounters {
        self.last_contacts
    }

    /// Swap in a whole new body collection (reset).
    ///
    /// Ids are expected to be unique; on a duplicate the first body keeps the id.
    pub fn replace_bodies(&mut self, bodies: Vec<RigidBody>) {
        self.index.clear();
        self.index.reserve(bodies.len());
        for (i, body) in bodies.iter().enumerate() {
            if self.index.contains_key(&body.id) {
                console_warn!("duplicate body id '{}' at index {}", body.id, i);
                continue;
            }
            self.index.insert(body.id.clone(), i);
        }
        self.bodies = bodies;
        self.last_contacts = ContactCounters::default();
    }

    /// Advance the world by `dt` seconds under `gravity` (a tilt direction, components in [-1, 1]).
    ///
    /// `dt` is used as given; clamping it is the frame driver's job.
    pub fn step(&mut self, dt: f64, gravity: Vec2) {
        let params = self.params;
        let mut counters = ContactCounters::default();

        for body in self.bodies.iter_mut() {
            integrate_velocity(body, &params, dt, gravity);
            body.position += body.velocity * dt;
            body.rotation += body.angular_velocity * dt;
        }

        for body in self.bodies.iter_mut() {
            counters.bounds_contacts += resolve_bounds(body, params.width, params.height);
        }

        let n = self.bodies.len();
        for i in 0..n {
            let (head, tail) = self.bodies.split_at_mut(i + 1);
            let a = &mut head[i];
            for b in tail.iter_mut() {
                counters.pairs_tested += 1;
                if resolve_pair(a, b) {
                    counters.pairs_resolved += 1;
                }
            }
        }

        self.last_contacts = counters;
    }
}

fn integrate_velocity(body: &mut RigidBody, params: &WorldParams, dt: f64, gravity: Vec2) {
    body.velocity += gravity * params.gravity_scale * dt;
    body.velocity *= params.damping;
    body.angular_velocity *= params.angular_damping;

    let speed = body.velocity.length();
    if speed > MAX_SPEED {
        body.velocity = body.velocity / speed * MAX_SPEED;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const DT: f64 = 1.0 / 60.0;

    fn ball(id: &str, x: f64, y: f64) -> RigidBody {
        RigidBody::icon(id, Vec2::new(x, y), 10.0)
    }

    #[test]
    fn new_engine_uses_sandbox_constants() {
        let engine = PhysicsEngine::new(Vec::new(), 320.0, 480.0);
        let p = engine.params();
        assert_eq!((p.width, p.height), (320.0, 480.0));
        assert_eq!(p.gravity_scale, 500.0);
        assert_eq!(p.damping, 0.98);
        assert_eq!(p.angular_damping, 0.95);
    }

    #[test]
    fn gravity_accelerates_then_damps() {
        let mut engine = PhysicsEngine::new(vec![ball("a", 100.0, 100.0)], 400.0, 400.0);
        engine.step(0.01, Vec2::new(0.0, 1.0));

        let body = &engine.bodies()[0];
        let expected_vy = (0.0 + 1.0 * 500.0 * 0.01) * 0.98;
        assert_eq!(body.velocity.y, expected_vy);
        assert_eq!(body.position.y, 100.0 + expected_vy * 0.01);
        assert_eq!(body.velocity.x, 0.0);
    }

    #[test]
    fn angular_velocity_decays_and_turns_the_body() {
        let mut body = ball("a", 100.0, 100.0);
        body.angular_velocity = 2.0;
        let mut engine = PhysicsEngine::new(vec![body], 400.0, 400.0);
        engine.step(0.1, Vec2::ZERO);

        let body = &engine.bodies()[0];
        assert_eq!(body.angular_velocity, 2.0 * 0.95);
        assert_eq!(body.rotation, 2.0 * 0.95 * 0.1);
    }

    #[test]
    fn lookup_by_id_follows_replacement() {
        let mut engine = PhysicsEngine::new(
            vec![ball("camera", 50.0, 50.0), ball("music", 100.0, 50.0)],
            400.0,
            400.0,
        );
        assert_eq!(engine.index_of("music"), Some(1));
        assert!(engine.body("chat").is_none());

        engine.replace_bodies(vec![ball("music", 30.0, 30.0), ball("chat", 80.0, 30.0)]);
        assert_eq!(engine.index_of("music"), Some(0));
        assert_eq!(engine.body("chat").map(|b| b.position.x), Some(80.0));
        assert!(engine.body("camera").is_none());
    }

    #[test]
    fn duplicate_ids_keep_the_first_body() {
        let engine = PhysicsEngine::new(
            vec![ball("game", 50.0, 50.0), ball("game", 150.0, 50.0)],
            400.0,
            400.0,
        );
        assert_eq!(engine.body_count(), 2);
        assert_eq!(engine.index_of("game"), Some(0));
    }

    #[test]
    fn counters_report_last_step_contacts() {
        let mut engine = PhysicsEngine::new(
            vec![ball("a", 5.0, 200.0), ball("b", 100.0, 200.0), ball("c", 115.0, 200.0)],
            400.0,
            400.0,
        );
        engine.step(DT, Vec2::ZERO);

        let c = engine.last_contacts();
        assert_eq!(c.bounds_contacts, 1);
        assert_eq!(c.pairs_tested, 3);
        assert_eq!(c.pairs_resolved, 1);
    }

    #[test]
    fn empty_world_steps_cleanly() {
        let mut engine = PhysicsEngine::new(Vec::new(), 100.0, 100.0);
        engine.step(DT, Vec2::new(1.0, -1.0));
        assert_eq!(engine.body_count(), 0);
        assert_eq!(engine.last_contacts(), ContactCounters::default());
    }
}
