//! Physics tuning
//!
//! Velocities are expressed in pixels per 60 fps frame, so every per-step
//! quantity is rescaled by `dt * FRAME_SCALE`.

/// Baseline frames per second the velocity units are expressed in.
pub const FRAME_SCALE: f32 = 60.0;

/// Upper bound for a single step (seconds). Larger frame gaps are clamped
/// so a hitch cannot tunnel balls through walls.
pub const MAX_DT: f32 = 0.05;

/// Vertical energy kept after a floor bounce.
pub const GROUND_FRICTION: f32 = 0.75;

/// Horizontal damping applied on every floor contact.
pub const ROLLING_FRICTION: f32 = 0.98;

/// Below this vertical speed a floor bounce is killed outright.
pub const REST_THRESHOLD: f32 = 0.5;

/// Ball/ball restitution.
pub const RESTITUTION: f32 = 0.9;

/// mass = radius * MASS_PER_RADIUS
pub const MASS_PER_RADIUS: f32 = 0.6;

/// Spawn radius range, `[min, max)`.
pub const SPAWN_RADIUS_MIN: f32 = 8.0;
pub const SPAWN_RADIUS_MAX: f32 = 28.0;

/// Initial velocity components are drawn from `(-SPAWN_SPEED, SPAWN_SPEED)`.
pub const SPAWN_SPEED: f32 = 1.0;

/// Distance kept from the side/top edges when batch spawning.
pub const BATCH_MARGIN: f32 = 20.0;

/// A ball can be grabbed when the pointer is within `radius * GRAB_REACH`.
pub const GRAB_REACH: f32 = 1.4;

/// Scales pointer speed (px/s) into release velocity.
pub const FLING_MULTIPLIER: f32 = 0.25;

/// Sample interval used when the pointer history has no usable time delta.
pub const FALLBACK_SAMPLE_DT: f32 = 0.016;

/// Balls closer than this to a repel origin are left alone.
pub const REPEL_EPSILON: f32 = 0.01;

/// Extra radius of the outline drawn around the held ball.
pub const HELD_OUTLINE_PADDING: f32 = 6.0;
