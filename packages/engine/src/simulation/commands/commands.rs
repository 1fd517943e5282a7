use crate::domain::palette::PALETTE;
use crate::domain::tuning::{BATCH_MARGIN, SPAWN_RADIUS_MAX, SPAWN_RADIUS_MIN, SPAWN_SPEED};
use crate::systems::body::Body;

use super::random::{index, range_f32};
use super::SimulationState;

pub(super) fn spawn_at(world: &mut SimulationState, x: f32, y: f32) -> usize {
    let rng = &mut world.rng_state;
    let radius = range_f32(rng, SPAWN_RADIUS_MIN, SPAWN_RADIUS_MAX);
    let color = PALETTE[index(rng, PALETTE.len())];
    let vx = range_f32(rng, -SPAWN_SPEED, SPAWN_SPEED);
    let vy = range_f32(rng, -SPAWN_SPEED, SPAWN_SPEED);

    push_body(world, Body::new(x, y, radius, color).with_velocity(vx, vy))
}

pub(super) fn push_body(world: &mut SimulationState, body: Body) -> usize {
    world.bodies.push(body);
    world.bodies.len() - 1
}

pub(super) fn spawn_batch(world: &mut SimulationState, n: u32) {
    let width = world.bounds.width;
    let height = world.bounds.height;
    for _ in 0..n {
        let x = range_f32(&mut world.rng_state, BATCH_MARGIN, width - BATCH_MARGIN);
        let y = range_f32(&mut world.rng_state, BATCH_MARGIN, height / 3.0);
        spawn_at(world, x, y);
    }
}

pub(super) fn fill(world: &mut SimulationState) -> u32 {
    let n = world.settings.fill_count;
    spawn_batch(world, n);
    console_log!("fill: spawned {} balls ({} total)", n, world.bodies.len());
    n
}

pub(super) fn clear_all(world: &mut SimulationState) {
    let discarded = world.bodies.len();
    world.bodies.clear();
    world.held = None;
    console_log!("cleared {} balls", discarded);
}
