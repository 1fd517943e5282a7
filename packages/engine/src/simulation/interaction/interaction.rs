use crate::domain::tuning::{FLING_MULTIPLIER, GRAB_REACH};
use crate::systems::body::{Body, Vec2};
use crate::systems::forces::apply_radial_impulse;

use super::commands;
use super::SimulationState;

/// The ball currently pinned to the pointer.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct HeldBody {
    pub index: usize,
    /// Pointer position minus ball centre at grab time
    pub offset: Vec2,
}

/// Result of a primary pointer press.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GrabOutcome {
    /// An existing ball was picked up
    Grabbed(usize),
    /// Nothing in reach; a new ball was spawned at the point
    Spawned(usize),
}

pub(super) fn pointer_move(world: &mut SimulationState, x: f32, y: f32, timestamp_ms: f64) {
    world.pointer.record(x, y, timestamp_ms);
}

/// Index of the ball whose centre is closest to `point`, among those
/// within `radius * GRAB_REACH`. The first ball wins exact ties.
fn nearest_in_reach(bodies: &[Body], point: Vec2) -> Option<usize> {
    let mut nearest = None;
    let mut min_dist = f32::INFINITY;
    for (i, body) in bodies.iter().enumerate() {
        let d = body.pos.distance(point);
        if d < body.radius() * GRAB_REACH && d < min_dist {
            nearest = Some(i);
            min_dist = d;
        }
    }
    nearest
}

pub(super) fn grab(world: &mut SimulationState, x: f32, y: f32) -> GrabOutcome {
    let point = Vec2::new(x, y);
    let Some(index) = nearest_in_reach(&world.bodies, point) else {
        return GrabOutcome::Spawned(commands::spawn_at(world, x, y));
    };

    // A second press without a release drops the old ball in place.
    if let Some(prev) = world.held.take() {
        if let Some(body) = world.bodies.get_mut(prev.index) {
            body.kinematic = false;
        }
    }

    let body = &mut world.bodies[index];
    body.kinematic = true;
    world.held = Some(HeldBody {
        index,
        offset: point - body.pos,
    });
    GrabOutcome::Grabbed(index)
}

/// Releases the held ball. `release_ms` closes the fling interval, so a
/// pointer held still before letting go throws the ball more gently.
/// `None` ends it at the last pointer sample.
pub(super) fn release(world: &mut SimulationState, release_ms: Option<f64>) -> Option<Vec2> {
    let held = world.held.take()?;
    let body = world.bodies.get_mut(held.index)?;
    let pointer_velocity = match release_ms {
        Some(t) => world.pointer.velocity_until(t),
        None => world.pointer.velocity(),
    };
    let velocity = pointer_velocity * FLING_MULTIPLIER;
    body.velocity = velocity;
    body.kinematic = false;
    Some(velocity)
}

pub(super) fn repel(world: &mut SimulationState, x: f32, y: f32, radius: f32, strength: f32) -> u32 {
    apply_radial_impulse(&mut world.bodies, Vec2::new(x, y), radius, strength)
}

pub(super) fn hold_target(world: &SimulationState) -> Vec2 {
    let offset = world.held.map(|h| h.offset).unwrap_or_default();
    world.pointer.position() - offset
}
