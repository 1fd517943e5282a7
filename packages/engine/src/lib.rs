//! Gravity Balls Engine - ball physics core for the sandbox, in WASM
//!
//! Layout:
//! - core/       - logging macros
//! - domain/     - tuning constants, palette, settings document
//! - systems/    - bodies, forces, integration, collisions
//! - simulation/ - explicit sandbox state, input handling, loop, render
//!
//! The JS host owns the canvas and the animation frame callback; it feeds
//! input into `World` and reads draw data back out.

// Logging macros must be declared before the modules that use them.
#[macro_use]
pub mod core;
pub mod domain;
pub mod systems;
pub mod simulation;

pub use domain::palette;
pub use domain::settings;
pub use domain::tuning;
pub use systems::body;
pub use systems::collision;
pub use systems::integrator;

use wasm_bindgen::prelude::*;

// Better error messages in debug mode
#[cfg(feature = "console_error_panic_hook")]
pub fn set_panic_hook() {
    console_error_panic_hook::set_once();
}

/// Initialize the engine
#[wasm_bindgen]
pub fn init() {
    #[cfg(feature = "console_error_panic_hook")]
    set_panic_hook();

    console_log!("Gravity Balls engine v{} initialized", version());
}

/// Get engine version
#[wasm_bindgen]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}

// Re-export main types
pub use simulation::{SimulationState, World};
pub use systems::body::{Body, Vec2};

/// Palette colour by index (0xRRGGBB), for host-side legends
#[wasm_bindgen]
pub fn palette_color(idx: usize) -> u32 {
    palette::PALETTE.get(idx).copied().unwrap_or(0)
}

#[wasm_bindgen]
pub fn palette_len() -> usize {
    palette::PALETTE.len()
}
