//! Small utilities. `log` must come first so its macros are visible
//! to the rest of the crate.

#[macro_use]
mod log;

pub use log::{log_line, warn_line};
