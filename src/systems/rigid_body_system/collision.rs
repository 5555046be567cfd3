use crate::rigid_body::RigidBody;

/// Contact statistics for the most recent step.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ContactCounters {
    /// Wall penetrations resolved (a corner hit counts twice).
    pub bounds_contacts: u32,
    /// Unordered pairs examined.
    pub pairs_tested: u32,
    /// Pairs that overlapped and were separated.
    pub pairs_resolved: u32,
}

/// Push a body back inside `[0, width] x [0, height]`, one wall at a time.
///
/// Returns the number of walls the body penetrated.
pub(super) fn resolve_bounds(body: &mut RigidBody, width: f64, height: f64) -> u32 {
    let r = body.radius();
    let e = body.restitution();
    let mut hits = 0;

    // Left wall
    if body.position.x - r < 0.0 {
        body.position.x = r;
        body.velocity.x = body.velocity.x.abs() * e;
        body.angular_velocity = -body.velocity.y / r;
        hits += 1;
    }

    // Right wall
    if body.position.x + r > width {
        body.position.x = width - r;
        body.velocity.x = -body.velocity.x.abs() * e;
        body.angular_velocity = -body.velocity.y / r;
        hits += 1;
    }

    // Top wall
    if body.position.y - r < 0.0 {
        body.position.y = r;
        body.velocity.y = body.velocity.y.abs() * e;
        body.angular_velocity = body.velocity.x / r;
        hits += 1;
    }

    // Bottom wall
    if body.position.y + r > height {
        body.position.y = height - r;
        body.velocity.y = -body.velocity.y.abs() * e;
        body.angular_velocity = body.velocity.x / r;
        hits += 1;
    }

    hits
}

/// Separate and bounce two overlapping circles.
///
/// Returns `false` when the pair does not touch, or sits at exactly the same
/// center (no usable normal).
pub(super) fn resolve_pair(a: &mut RigidBody, b: &mut RigidBody) -> bool {
    let delta = b.position - a.position;
    let distance = delta.length();
    let min_distance = a.radius() + b.radius();

    if !(distance < min_distance && distance > 0.0) {
        return false;
    }

    let normal = delta / distance;

    // Split the overlap evenly. One pass only; crowded piles settle over frames.
    let separation = normal * (min_distance - distance) / 2.0;
    a.position -= separation;
    b.position += separation;

    let dv = b.velocity - a.velocity;
    let approach = dv.dot(normal);
    if approach >= 0.0 {
        return true;
    }

    let restitution = a.restitution().min(b.restitution());
    let total_mass = a.mass() + b.mass();
    let impulse = normal * (-(1.0 + restitution) * approach) / total_mass;

    a.velocity -= impulse * b.mass();
    b.velocity += impulse * a.mass();

    // Friction works on the pre-impulse tangential slip.
    let tangent = normal.perp();
    let slip = dv.dot(tangent) * a.friction().min(b.friction());
    a.velocity += tangent * slip * b.mass() / total_mass;
    b.velocity -= tangent * slip * a.mass() / total_mass;

    // Spin from the vertical impulse component only, not a lever-arm torque.
    a.angular_velocity += impulse.y / a.radius();
    b.angular_velocity -= impulse.y / b.radius();

    true
}
