use crate::systems::collision::resolve_collisions;
use crate::systems::integrator::{integrate, IntegrateParams};

use super::run_loop::cap_dt;
use super::{PerfTimer, SimulationState};

pub(super) fn tick(world: &mut SimulationState, dt: f32) -> bool {
    if world.run_loop.is_paused() {
        return false;
    }
    step(world, cap_dt(dt));
    true
}

pub(super) fn tick_at(world: &mut SimulationState, timestamp_ms: f64) -> bool {
    match world.run_loop.frame_dt(timestamp_ms) {
        Some(dt) => tick(world, dt),
        None => false,
    }
}

/// One full step: integrate every ball, then resolve every pair once.
fn step(world: &mut SimulationState, dt: f32) {
    let perf_on = world.perf_enabled;
    let mut timer = perf_on.then(PerfTimer::start);
    let step_start = timer;
    if perf_on {
        world.perf_stats.reset();
    }

    let params = IntegrateParams {
        gravity: world.settings.gravity,
        dt,
        bounds: world.bounds,
        hold_target: world.hold_target(),
    };

    // === INTEGRATION ===
    let integrated = integrate(&mut world.bodies, &params);
    if let Some(t) = timer.as_mut() {
        world.perf_stats.integrate_ms = t.lap_ms();
    }

    // === BALL/BALL COLLISIONS ===
    let collisions = resolve_collisions(&mut world.bodies);
    if let Some(t) = timer.as_mut() {
        world.perf_stats.collide_ms = t.lap_ms();
    }

    world.frame += 1;

    if let Some(start) = step_start {
        let stats = &mut world.perf_stats;
        stats.step_ms = start.elapsed_ms();
        stats.dt_ms = dt as f64 * 1000.0;
        stats.body_count = world.bodies.len() as u32;
        stats.kinematic_count = integrated.kinematic;
        stats.pairs_checked = collisions.pairs_checked;
        stats.contacts = collisions.contacts;
        stats.impulses = collisions.impulses;
    }
}
