//! Body - a circular ball and the small vector type it is built on
//!
//! Bodies are pure data; drawing lives in `simulation::render` and takes
//! a body plus a drawing surface.

mod vec2;
mod body;

pub use vec2::Vec2;
pub use body::Body;
