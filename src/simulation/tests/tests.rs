use super::*;
use crate::domain::assets::IconAsset;
use crate::gravity::DEFAULT_GRAVITY;
use crate::layout::create_initial_layout;

#[test]
fn new_sandbox_lays_out_builtin_icons() {
    let world = SandboxCore::new(300.0, 600.0);

    assert_eq!(world.body_count(), 6);
    assert_eq!(world.body_id(0), Some("camera"));
    assert_eq!(world.body_id(5), Some("settings"));
    assert_eq!(world.body_id(6), None);
    assert_eq!(
        world.bodies(),
        create_initial_layout(300.0, 600.0, AssetManifest::builtin().assets()).as_slice()
    );
}

#[test]
fn render_buffer_mirrors_bodies() {
    let mut world = SandboxCore::new(300.0, 600.0);
    world.step(1.0 / 60.0);

    let buf = world.render_buffer();
    assert_eq!(buf.len(), world.body_count() * RENDER_STRIDE);
    for (i, body) in world.bodies().iter().enumerate() {
        let chunk = &buf[i * RENDER_STRIDE..(i + 1) * RENDER_STRIDE];
        assert_eq!(chunk[0], body.position.x as f32);
        assert_eq!(chunk[1], body.position.y as f32);
        assert_eq!(chunk[2], body.rotation as f32);
        assert_eq!(chunk[3], body.radius() as f32);
    }
}

#[test]
fn tick_primes_clock_then_steps() {
    let mut world = SandboxCore::new(300.0, 600.0);
    let before = world.bodies().to_vec();

    assert!(!world.tick(1000.0));
    assert_eq!(world.frame(), 0);
    assert_eq!(world.bodies(), before.as_slice());

    assert!(world.tick(1016.0));
    assert_eq!(world.frame(), 1);
    // Default gravity pulls everything down.
    assert!(world.bodies().iter().all(|b| b.velocity.y > 0.0));
}

#[test]
fn started_clock_steps_on_the_first_tick() {
    let mut world = SandboxCore::new(300.0, 600.0);
    world.start_clock(1000.0);

    assert!(world.tick(1016.0));
    assert_eq!(world.frame(), 1);
}

#[test]
fn non_finite_time_never_reaches_the_bodies() {
    let mut world = SandboxCore::new(300.0, 600.0);
    world.tick(0.0);
    assert!(!world.tick(f64::NAN));
    assert!(!world.tick(f64::INFINITY));
    world.step(f64::NAN);
    assert_eq!(world.frame(), 0);

    assert!(world.tick(16.0));
    assert_eq!(world.frame(), 1);
    for body in world.bodies() {
        assert!(body.position.is_finite() && body.velocity.is_finite(), "{:?}", body);
    }
    assert!(world.render_buffer().iter().all(|v| v.is_finite()));
}

#[test]
fn perf_frame_matches_the_full_frame_counter() {
    let mut world = SandboxCore::new(300.0, 600.0);
    world.frame = u64::from(u32::MAX);
    world.enable_perf_metrics(true);
    world.step(1.0 / 60.0);

    assert_eq!(world.get_perf_stats().frame(), world.frame());
    assert_eq!(world.frame(), u64::from(u32::MAX) + 1);
}

#[test]
fn manual_tilt_drives_gravity_until_device_is_active() {
    let mut world = SandboxCore::new(300.0, 600.0);
    assert_eq!(world.gravity(), DEFAULT_GRAVITY);

    world.set_manual_gravity(-0.5, 0.25);
    assert_eq!(world.gravity(), Vec2::new(-0.5, 0.25));
    assert!(!world.is_using_device_tilt());

    // Orientation samples only count once permission is granted.
    world.detect_device_tilt(true, true);
    world.on_device_orientation(Some(90.0), Some(45.0));
    assert_eq!(world.gravity(), Vec2::new(-0.5, 0.25));

    assert!(world.begin_permission_request());
    world.finish_permission_request(true);
    world.on_device_orientation(Some(-45.0), Some(45.0));
    assert!(world.is_using_device_tilt());
    assert_eq!(world.gravity(), Vec2::new(1.0, -0.5));

    // Manual input is kept but not used while the device is active.
    assert!(world.nudge_tilt("ArrowLeft"));
    assert_eq!(world.gravity(), Vec2::new(1.0, -0.5));
}

#[test]
fn denied_permission_falls_back_to_manual() {
    let mut world = SandboxCore::new(300.0, 600.0);
    world.detect_device_tilt(true, true);
    world.begin_permission_request();
    world.finish_permission_request(false);

    world.set_tilt_from_pad(1.0, 0.5);
    assert!(!world.is_using_device_tilt());
    assert_eq!(world.gravity(), Vec2::new(1.0, 0.0));
}

#[test]
fn step_uses_sampled_gravity() {
    let mut world = SandboxCore::new(300.0, 600.0);
    world.set_manual_gravity(1.0, 0.0);
    world.step(0.01);

    for body in world.bodies() {
        assert!(body.velocity.x > 0.0);
        assert_eq!(body.velocity.y, 0.0);
    }
}

#[test]
fn reset_restores_layout_and_levels_manual_tilt() {
    let mut world = SandboxCore::new(300.0, 600.0);
    let initial = world.bodies().to_vec();

    world.set_manual_gravity(0.8, -0.3);
    for _ in 0..120 {
        world.step(1.0 / 60.0);
    }
    assert_ne!(world.bodies(), initial.as_slice());

    world.reset();
    assert_eq!(world.bodies(), initial.as_slice());
    assert_eq!(world.gravity(), DEFAULT_GRAVITY);
    assert_eq!(world.engine().index_of("chat"), Some(2));
}

#[test]
fn custom_manifest_controls_body_ids() {
    let manifest = AssetManifest::from_assets(vec![
        IconAsset::new("mail", "Mail", "/mail.png"),
        IconAsset::new("clock", "Clock", "/clock.png"),
    ])
    .unwrap();
    let world = SandboxCore::with_manifest(200.0, 200.0, manifest);

    assert_eq!(world.body_count(), 2);
    assert!(world.engine().body("clock").is_some());
}

#[test]
fn perf_stats_only_fill_when_enabled() {
    let mut world = SandboxCore::new(300.0, 600.0);
    world.step(1.0 / 60.0);
    assert_eq!(world.get_perf_stats().frame(), 0);

    world.enable_perf_metrics(true);
    world.step(1.0 / 60.0);
    let stats = world.get_perf_stats();
    assert_eq!(stats.frame(), 2);
    assert_eq!(stats.body_count(), 6);
    assert_eq!(stats.pairs_tested(), 15);
    assert_eq!(stats.dt(), 1.0 / 60.0);
    assert!(stats.step_ms() >= 0.0);
    assert!(stats.max_speed() > 0.0);

    world.enable_perf_metrics(false);
    assert_eq!(world.get_perf_stats().body_count(), 0);
}

#[test]
fn max_frame_dt_rejects_non_positive_values() {
    let mut world = SandboxCore::new(300.0, 600.0);
    world.set_max_frame_dt(0.0);
    world.set_max_frame_dt(f64::NAN);
    assert_eq!(world.max_frame_dt(), MAX_FRAME_DT);

    world.set_max_frame_dt(0.05);
    world.enable_perf_metrics(true);
    world.tick(0.0);
    assert!(world.tick(1000.0));
    assert_eq!(world.get_perf_stats().dt(), 0.05);
    assert_eq!(world.max_frame_dt(), 0.05);
}

#[test]
fn bodies_json_is_parseable() {
    let world = SandboxCore::new(300.0, 600.0);
    let parsed: Vec<RigidBody> = serde_json::from_str(&world.bodies_json()).unwrap();
    assert_eq!(parsed.as_slice(), world.bodies());
}
