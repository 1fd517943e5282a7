use crate::domain::tuning::{GROUND_FRICTION, REST_THRESHOLD, ROLLING_FRICTION};
use crate::systems::body::Body;

/// Viewport size in logical pixels, read fresh every step.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Bounds {
    pub width: f32,
    pub height: f32,
}

impl Bounds {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }
}

/// Clamp a ball back inside the viewport, axis by axis.
///
/// Side and ceiling hits are perfectly elastic. The floor keeps only
/// `GROUND_FRICTION` of the vertical speed, applies rolling friction to
/// the horizontal speed, and kills bounces slower than `REST_THRESHOLD`.
pub fn resolve_walls(body: &mut Body, bounds: Bounds) {
    let r = body.radius();

    if body.pos.x - r < 0.0 {
        body.pos.x = r;
        body.velocity.x = -body.velocity.x;
    }
    if body.pos.x + r > bounds.width {
        body.pos.x = bounds.width - r;
        body.velocity.x = -body.velocity.x;
    }

    if body.pos.y - r < 0.0 {
        body.pos.y = r;
        body.velocity.y = -body.velocity.y;
    }
    if body.pos.y + r > bounds.height {
        body.pos.y = bounds.height - r;
        body.velocity.y = -body.velocity.y * GROUND_FRICTION;
        body.velocity.x *= ROLLING_FRICTION;
        if body.velocity.y.abs() < REST_THRESHOLD {
            body.velocity.y = 0.0;
        }
    }
}
