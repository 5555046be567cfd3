use super::{SandboxCore, RENDER_STRIDE};

/// Rewrite the packed render buffer from current body state.
pub(super) fn refresh_render_buffer(world: &mut SandboxCore) {
    let bodies = world.engine.bodies();
    let buffer = &mut world.render_buffer;

    buffer.clear();
    buffer.reserve(bodies.len() * RENDER_STRIDE);
    for body in bodies {
        buffer.push(body.position.x as f32);
        buffer.push(body.position.y as f32);
        buffer.push(body.rotation as f32);
        buffer.push(body.radius() as f32);
    }
}

pub(super) fn body_id(world: &SandboxCore, index: usize) -> Option<&str> {
    world.engine.bodies().get(index).map(|b| b.id.as_str())
}

pub(super) fn bodies_json(world: &SandboxCore) -> String {
    match serde_json::to_string(world.engine.bodies()) {
        Ok(json) => json,
        Err(e) => {
            console_warn!("failed to serialize bodies: {}", e);
            "[]".to_string()
        }
    }
}
