//! Simulation - explicit state for the ball sandbox
//!
//! `SimulationState` owns everything the host used to keep as loose
//! globals: the ball collection, settings, viewport, pointer/grab state,
//! pause flag and RNG. Each concern lives in its own file and works on
//! the state passed to it:
//! - commands/    spawn, batch spawn, clear
//! - interaction/ pointer samples, grab, release, repel
//! - step/        run/pause loop and the integrate -> collide step
//! - render/      drawing surfaces and the JS instance buffer
//!
//! `facade::World` is the wasm-bindgen wrapper the JS host talks to.

use crate::domain::settings::SimulationSettings;
use crate::systems::body::{Body, Vec2};
use crate::systems::integrator::Bounds;

#[path = "perf/perf_timer.rs"]
mod perf_timer;
#[path = "perf/perf_stats.rs"]
mod perf_stats;
#[path = "init/random.rs"]
mod random;
#[path = "init/init.rs"]
mod init;
#[path = "init/settings.rs"]
mod settings;
#[path = "commands/commands.rs"]
mod commands;
#[path = "interaction/pointer.rs"]
mod pointer;
#[path = "interaction/interaction.rs"]
mod interaction;
#[path = "step/run_loop.rs"]
mod run_loop;
#[path = "step/step.rs"]
mod step;
#[path = "render/surface.rs"]
pub mod surface;
#[path = "render/instances.rs"]
mod instances;
#[path = "render/render_extract.rs"]
mod render_extract;
mod facade;

pub use facade::World;
pub use instances::{InstanceBuffer, INSTANCE_STRIDE};
pub use interaction::{GrabOutcome, HeldBody};
pub use perf_stats::PerfStats;
pub use pointer::{PointerSample, PointerTracker};
pub use run_loop::{LoopState, SimulationLoop};

use perf_timer::PerfTimer;
use surface::Surface;

/// Seed used by `SimulationState::new`; reseed with `set_seed`.
pub const DEFAULT_SEED: u32 = 12345;

/// The whole sandbox: balls plus the state the host feeds into them.
pub struct SimulationState {
    bodies: Vec<Body>,
    settings: SimulationSettings,
    bounds: Bounds,

    // Input
    pointer: PointerTracker,
    held: Option<HeldBody>,

    // Loop
    run_loop: SimulationLoop,
    frame: u64,
    rng_state: u32,

    // Output
    instances: InstanceBuffer,
    perf_enabled: bool,
    perf_stats: PerfStats,
}

impl SimulationState {
    /// Create an empty sandbox for a viewport of `width` x `height` pixels
    pub fn new(width: f32, height: f32) -> Self {
        init::create_simulation_state(width, height, SimulationSettings::default())
    }

    pub fn with_settings(width: f32, height: f32, settings: SimulationSettings) -> Self {
        init::create_simulation_state(width, height, settings)
    }

    // === VIEWPORT ===

    pub fn width(&self) -> f32 { self.bounds.width }

    pub fn height(&self) -> f32 { self.bounds.height }

    /// Resize. Takes effect on the next step; balls are not moved now.
    pub fn set_viewport(&mut self, width: f32, height: f32) {
        settings::set_viewport(self, width, height);
    }

    // === SETTINGS ===

    pub fn settings(&self) -> &SimulationSettings { &self.settings }

    pub fn gravity(&self) -> f32 { self.settings.gravity }

    pub fn set_gravity(&mut self, gravity: f32) {
        settings::set_gravity(self, gravity);
    }

    pub fn fill_count(&self) -> u32 { self.settings.fill_count }

    pub fn set_fill_count(&mut self, count: u32) {
        settings::set_fill_count(self, count);
    }

    /// Replace all settings from a JSON document. On error nothing changes.
    pub fn load_settings_json(&mut self, json: &str) -> Result<(), String> {
        settings::load_settings_json(self, json)
    }

    pub fn settings_json(&self) -> String {
        self.settings.to_json()
    }

    pub fn set_seed(&mut self, seed: u32) {
        settings::set_seed(self, seed);
    }

    // === BODIES ===

    pub fn bodies(&self) -> &[Body] { &self.bodies }

    pub fn body_count(&self) -> usize { self.bodies.len() }

    /// Number of physics steps run so far
    pub fn frame(&self) -> u64 { self.frame }

    /// Spawn one randomised ball at (x, y); returns its index
    pub fn spawn_at(&mut self, x: f32, y: f32) -> usize {
        commands::spawn_at(self, x, y)
    }

    /// Spawn `n` balls across the viewport width, in its top third
    pub fn spawn_batch(&mut self, n: u32) {
        commands::spawn_batch(self, n)
    }

    /// Spawn `fill_count` balls
    pub fn fill(&mut self) -> u32 {
        commands::fill(self)
    }

    /// Discard every ball (and any grab)
    pub fn clear_all(&mut self) {
        commands::clear_all(self)
    }

    /// Insert a prepared ball as-is; returns its index
    pub fn push_body(&mut self, body: Body) -> usize {
        commands::push_body(self, body)
    }

    // === INTERACTION ===

    pub fn pointer(&self) -> &PointerTracker { &self.pointer }

    pub fn pointer_move(&mut self, x: f32, y: f32, timestamp_ms: f64) {
        interaction::pointer_move(self, x, y, timestamp_ms)
    }

    /// Pick up the nearest ball under (x, y), or spawn one there
    pub fn grab(&mut self, x: f32, y: f32) -> GrabOutcome {
        interaction::grab(self, x, y)
    }

    /// Let go of the held ball, flinging it with the pointer's speed.
    /// Returns the release velocity when a ball was held.
    pub fn release(&mut self) -> Option<Vec2> {
        interaction::release(self, None)
    }

    /// Release at host time `timestamp_ms`; idle time since the last
    /// pointer move lowers the fling speed.
    pub fn release_at(&mut self, timestamp_ms: f64) -> Option<Vec2> {
        interaction::release(self, Some(timestamp_ms))
    }

    /// Radial push away from (x, y); returns how many balls were pushed
    pub fn repel(&mut self, x: f32, y: f32, radius: f32, strength: f32) -> u32 {
        interaction::repel(self, x, y, radius, strength)
    }

    pub fn held(&self) -> Option<HeldBody> { self.held }

    /// Where the held ball is pinned: pointer minus grab offset
    pub fn hold_target(&self) -> Vec2 {
        interaction::hold_target(self)
    }

    // === LOOP ===

    pub fn toggle_pause(&mut self) -> LoopState {
        self.run_loop.toggle()
    }

    pub fn is_paused(&self) -> bool { self.run_loop.is_paused() }

    /// Advance by `dt` seconds (capped). Returns false when paused.
    pub fn tick(&mut self, dt: f32) -> bool {
        step::tick(self, dt)
    }

    /// Advance by the wall time since the previous call.
    /// Returns false when paused.
    pub fn tick_at(&mut self, timestamp_ms: f64) -> bool {
        step::tick_at(self, timestamp_ms)
    }

    // === PERF ===

    /// Enable or disable per-step perf metrics (adds timing overhead when enabled)
    pub fn enable_perf_metrics(&mut self, enabled: bool) {
        settings::enable_perf_metrics(self, enabled);
    }

    /// Last step perf snapshot (zeros when perf disabled)
    pub fn get_perf_stats(&self) -> PerfStats {
        self.perf_stats.clone()
    }

    // === RENDER ===

    /// Draw every ball once, then the held ball's outline
    pub fn draw<S: Surface + ?Sized>(&self, target: &mut S) {
        surface::draw_bodies(&self.bodies, self.held.map(|h| h.index), target);
    }

    /// Refill the instance buffer for JS; returns the ball count
    pub fn render(&mut self) -> usize {
        render_extract::render(self)
    }

    pub fn instances(&self) -> &InstanceBuffer { &self.instances }
}

#[cfg(test)]
#[path = "tests/tests.rs"]
mod tests;
