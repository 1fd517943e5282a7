use crate::domain::tuning::REPEL_EPSILON;
use crate::systems::body::{Body, Vec2};

/// Push every ball within `radius` of `origin` straight away from it.
///
/// The velocity change falls off linearly: `(1 - d / radius) * strength`.
/// Balls closer than `REPEL_EPSILON` have no usable direction and are
/// skipped. Returns how many balls were pushed.
pub fn apply_radial_impulse(bodies: &mut [Body], origin: Vec2, radius: f32, strength: f32) -> u32 {
    let mut pushed = 0;
    for body in bodies.iter_mut() {
        let delta = body.pos - origin;
        let d = delta.length();
        if d < radius && d > REPEL_EPSILON {
            let force = (1.0 - d / radius) * strength;
            body.velocity += (delta / d) * force;
            pushed += 1;
        }
    }
    pushed
}
