use tumble_engine::{create_initial_layout, IconAsset, Vec2};

fn six_assets() -> Vec<IconAsset> {
    ["camera", "music", "chat", "map", "game", "settings"]
        .iter()
        .map(|id| IconAsset::new(*id, *id, format!("/icons/{}.png", id)))
        .collect()
}

fn assert_close(actual: Vec2, expected: Vec2) {
    assert!(
        (actual.x - expected.x).abs() < 1e-9 && (actual.y - expected.y).abs() < 1e-9,
        "expected {:?}, got {:?}",
        expected,
        actual
    );
}

#[test]
fn portrait_six_icon_grid() {
    let bodies = create_initial_layout(300.0, 600.0, &six_assets());
    assert_eq!(bodies.len(), 6);

    // radius = min(300, 600) * 0.15 / 2; spacing 75 x 150 on a 3 x 2 grid.
    for body in &bodies {
        assert!((body.radius() - 22.5).abs() < 1e-9);
        assert_eq!(body.velocity, Vec2::ZERO);
        assert_eq!(body.rotation, 0.0);
        assert_eq!(body.angular_velocity, 0.0);
        assert_eq!(body.mass(), 1.0);
        assert_eq!(body.restitution(), 0.4);
        assert_eq!(body.friction(), 0.3);
    }

    assert_close(bodies[0].position, Vec2::new(75.0, 225.0));
    assert_close(bodies[1].position, Vec2::new(150.0, 225.0));
    assert_close(bodies[2].position, Vec2::new(225.0, 225.0));
    assert_close(bodies[3].position, Vec2::new(75.0, 375.0));
    assert_close(bodies[5].position, Vec2::new(225.0, 375.0));
}

#[test]
fn ids_are_copied_from_assets() {
    let assets = six_assets();
    let bodies = create_initial_layout(300.0, 600.0, &assets);
    for (body, asset) in bodies.iter().zip(&assets) {
        assert_eq!(body.id, asset.id);
    }
}

#[test]
fn landscape_uses_the_shorter_side() {
    let bodies = create_initial_layout(800.0, 400.0, &six_assets());
    assert!((bodies[0].radius() - 30.0).abs() < 1e-9);
    assert_close(bodies[4].position, Vec2::new(400.0, 250.0));
}
