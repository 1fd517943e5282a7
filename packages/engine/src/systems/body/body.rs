use crate::domain::palette::Rgb;
use crate::domain::tuning::MASS_PER_RADIUS;

use super::vec2::Vec2;

/// Ball - one simulated circle
///
/// Radius and mass are fixed at creation; mass is always
/// `radius * MASS_PER_RADIUS`, so both are only readable.
#[derive(Clone, Debug)]
pub struct Body {
    /// World position of the centre (pixels)
    pub pos: Vec2,
    /// Velocity (pixels per 60 fps frame)
    pub velocity: Vec2,
    /// Base colour for rendering
    pub color: Rgb,
    /// Pinned to the pointer: skipped by integration and impulses
    pub kinematic: bool,
    radius: f32,
    mass: f32,
}

impl Body {
    pub fn new(x: f32, y: f32, radius: f32, color: Rgb) -> Self {
        debug_assert!(radius > 0.0, "ball radius must be positive");
        Self {
            pos: Vec2::new(x, y),
            velocity: Vec2::zero(),
            color,
            kinematic: false,
            radius,
            mass: radius * MASS_PER_RADIUS,
        }
    }

    pub fn with_velocity(mut self, vx: f32, vy: f32) -> Self {
        self.velocity = Vec2::new(vx, vy);
        self
    }

    #[inline]
    pub fn radius(&self) -> f32 {
        self.radius
    }

    #[inline]
    pub fn mass(&self) -> f32 {
        self.mass
    }

    #[inline]
    pub fn inverse_mass(&self) -> f32 {
        1.0 / self.mass
    }

    /// Apply impulse at the centre. Kinematic bodies ignore it.
    pub fn apply_impulse(&mut self, impulse: Vec2) {
        if self.kinematic {
            return;
        }
        self.velocity += impulse * self.inverse_mass();
    }
}
