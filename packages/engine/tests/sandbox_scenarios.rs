use gravity_balls_engine::{Body, SimulationState, World};

const DT: f32 = 1.0 / 60.0;

fn approx(a: f32, b: f32, tol: f32) -> bool {
    (a - b).abs() <= tol
}

#[test]
fn resting_overlap_separates_along_x_only() {
    let mut sim = SimulationState::new(800.0, 600.0);
    sim.set_gravity(0.0);
    sim.push_body(Body::new(100.0, 300.0, 20.0, 0));
    sim.push_body(Body::new(130.0, 300.0, 20.0, 0));
    assert_eq!(sim.bodies()[0].mass(), 12.0);
    assert_eq!(sim.bodies()[1].mass(), 12.0);

    sim.tick(DT);

    let (a, b) = (&sim.bodies()[0], &sim.bodies()[1]);
    assert!(approx(a.pos.x, 95.0, 1e-4));
    assert!(approx(b.pos.x, 135.0, 1e-4));
    assert_eq!(a.pos.y, 300.0);
    assert_eq!(b.pos.y, 300.0);
    assert_eq!(a.velocity.y, 0.0);
    assert_eq!(b.velocity.y, 0.0);
}

#[test]
fn collision_adds_no_vertical_velocity_under_gravity() {
    let mut sim = SimulationState::new(800.0, 600.0);
    sim.set_gravity(0.5);
    sim.push_body(Body::new(100.0, 300.0, 20.0, 0));
    sim.push_body(Body::new(130.0, 300.0, 20.0, 0));

    sim.tick(DT);

    let (a, b) = (&sim.bodies()[0], &sim.bodies()[1]);
    assert_eq!(a.velocity.y, b.velocity.y);
    assert_eq!(a.velocity.x, 0.0);
    assert_eq!(b.velocity.x, 0.0);
}

#[test]
fn head_on_pair_separates_after_one_step() {
    let mut sim = SimulationState::new(800.0, 600.0);
    sim.set_gravity(0.0);
    sim.push_body(Body::new(200.0, 300.0, 15.0, 0).with_velocity(3.0, 0.0));
    sim.push_body(Body::new(228.0, 300.0, 15.0, 0).with_velocity(-3.0, 0.0));

    sim.tick(DT);

    let (a, b) = (&sim.bodies()[0], &sim.bodies()[1]);
    let n = b.pos - a.pos;
    let rel = (b.velocity - a.velocity).dot(n / n.length());
    assert!(rel >= 0.0);
    // equal masses, e = 0.9: 6 -> 5.4 along the normal
    assert!(approx(rel, 5.4, 1e-3));
}

#[test]
fn drag_and_fling_through_the_facade() {
    let mut world = World::new(800.0, 600.0);
    let idx = world.spawn_at(400.0, 300.0);
    let r = world.body_radius(idx);

    world.pointer_move(400.0, 300.0, 5000.0);
    assert!(world.pointer_down(400.0, 300.0, 5000.0));
    assert!(world.body_is_kinematic(idx));
    assert_eq!(world.held_index(), idx as i32);

    world.pointer_move(500.0, 300.0, 5100.0);
    world.tick(5100.0);
    assert!(approx(world.body_x(idx), 500.0, 1e-4));
    assert_eq!(world.body_vx(idx), 0.0);

    world.pointer_up(500.0, 300.0, 5100.0);
    assert!(!world.body_is_kinematic(idx));
    assert_eq!(world.held_index(), -1);
    assert!(approx(world.body_vx(idx), 250.0, 1e-2));
    assert!(r >= 8.0);
}

#[test]
fn holding_still_before_release_takes_the_speed_out_of_the_fling() {
    let mut world = World::new(800.0, 600.0);
    let idx = world.spawn_at(200.0, 300.0);

    assert!(world.pointer_down(200.0, 300.0, 0.0));
    world.pointer_move(300.0, 300.0, 100.0);

    let mut now = 100.0;
    for _ in 0..180 {
        now += 1000.0 / 60.0;
        world.tick(now);
    }
    assert!(approx(world.body_x(idx), 300.0, 1e-3));

    world.pointer_up(300.0, 300.0, now);

    // 100 px over roughly 3.1 s, times 0.25
    let vx = world.body_vx(idx);
    assert!(vx > 0.0 && vx < 10.0, "vx = {vx}");
    assert!(approx(vx, (100.0 / (now / 1000.0)) as f32 * 0.25, 1e-3));
}

#[test]
fn pointer_down_on_empty_space_spawns() {
    let mut world = World::new(800.0, 600.0);
    assert!(!world.pointer_down(100.0, 100.0, 0.0));
    assert_eq!(world.body_count(), 1);
    assert_eq!(world.held_index(), -1);
}

#[test]
fn clear_on_fifty_balls_then_step_and_render_are_no_ops() {
    let mut world = World::new(800.0, 600.0);
    world.spawn_batch(50);
    assert_eq!(world.body_count(), 50);

    assert!(world.key_press("KeyC"));
    assert_eq!(world.body_count(), 0);

    assert!(world.step(DT));
    assert_eq!(world.render(), 0);
    assert_eq!(world.instances_len(), 0);
}

#[test]
fn repel_at_near_zero_distance_stays_bounded() {
    let mut sim = SimulationState::new(800.0, 600.0);
    sim.push_body(Body::new(300.0 + 0.011, 300.0, 10.0, 0));

    let pushed = sim.repel(300.0, 300.0, 200.0, 8.0);

    assert_eq!(pushed, 1);
    let v = sim.bodies()[0].velocity;
    assert!(v.x.is_finite() && v.y.is_finite());
    assert!(v.length() <= 8.0);
}

#[test]
fn context_action_uses_configured_repel() {
    let mut world = World::new(800.0, 600.0);
    world
        .load_settings(r#"{ "repelRadius": 100, "repelStrength": 4 }"#.to_string())
        .unwrap();
    let near = world.spawn_at(450.0, 300.0);
    let far = world.spawn_at(700.0, 300.0);
    let far_vx = world.body_vx(far);

    assert_eq!(world.context_action(400.0, 300.0), 1);
    assert!(world.body_vx(near) > 0.9);
    assert_eq!(world.body_vx(far), far_vx);
}

#[test]
fn space_toggles_pause_and_frames_stop() {
    let mut world = World::new(800.0, 600.0);
    world.spawn_at(400.0, 300.0);
    assert!(world.tick(0.0));
    assert!(world.key_press("Space"));
    assert!(world.paused());
    assert!(!world.tick(16.0));
    assert_eq!(world.frame(), 1);
    assert!(!world.key_press("KeyX"));
}

#[test]
fn long_run_stays_finite_and_calm() {
    let mut sim = SimulationState::new(400.0, 300.0);
    sim.set_seed(2024);
    sim.spawn_batch(8);
    for _ in 0..1200 {
        sim.tick(DT);
    }
    for body in sim.bodies() {
        assert!(body.pos.x.is_finite() && body.pos.y.is_finite());
        assert!(body.velocity.length() < 50.0);
    }
}
