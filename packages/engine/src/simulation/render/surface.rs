//! Drawing - stateless functions from balls to a drawing surface
//!
//! The engine never talks to a canvas directly. Anything that can draw a
//! gradient-filled, stroked circle implements `Surface`; `InstanceBuffer`
//! is the implementation the JS host reads from.

use crate::domain::palette::{lighten, Rgb, HIGHLIGHT_AMOUNT};
use crate::domain::tuning::HELD_OUTLINE_PADDING;
use crate::systems::body::Body;

/// How one ball should look.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BallStyle {
    /// Outer gradient stop
    pub base: Rgb,
    /// Inner gradient stop (upper-left highlight)
    pub highlight: Rgb,
    pub stroke_width: f32,
}

impl BallStyle {
    pub fn for_body(body: &Body) -> Self {
        Self {
            base: body.color,
            highlight: lighten(body.color, HIGHLIGHT_AMOUNT),
            stroke_width: (body.radius() * 0.08).max(1.0),
        }
    }
}

pub trait Surface {
    /// Filled, stroked circle with a radial gradient from `style.highlight`
    /// to `style.base`.
    fn draw_ball(&mut self, x: f32, y: f32, radius: f32, style: &BallStyle);

    /// Faint ring marking the held ball.
    fn draw_outline(&mut self, x: f32, y: f32, radius: f32);
}

pub fn draw_body<S: Surface + ?Sized>(body: &Body, surface: &mut S) {
    surface.draw_ball(body.pos.x, body.pos.y, body.radius(), &BallStyle::for_body(body));
}

/// Every ball once in collection order, then the outline of `held`.
pub fn draw_bodies<S: Surface + ?Sized>(bodies: &[Body], held: Option<usize>, surface: &mut S) {
    for body in bodies {
        draw_body(body, surface);
    }
    if let Some(body) = held.and_then(|i| bodies.get(i)) {
        surface.draw_outline(body.pos.x, body.pos.y, body.radius() + HELD_OUTLINE_PADDING);
    }
}
