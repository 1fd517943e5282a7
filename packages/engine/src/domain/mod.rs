//! Domain data: tuning constants, the colour palette and the
//! user-adjustable settings document.

pub mod palette;
pub mod settings;
pub mod tuning;
