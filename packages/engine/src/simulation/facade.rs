use wasm_bindgen::prelude::*;

use crate::systems::body::Body;

use super::perf_stats::PerfStats;
use super::{GrabOutcome, SimulationState, INSTANCE_STRIDE};

/// JS-facing sandbox. The host forwards input events and calls `tick`
/// from its animation frame callback, then `render` + the instance
/// buffer getters to draw.
#[wasm_bindgen]
pub struct World {
    core: SimulationState,
}

impl World {
    /// Native access to the underlying state (tests, tools).
    pub fn state(&self) -> &SimulationState {
        &self.core
    }

    fn body_value(&self, idx: usize, f: impl Fn(&Body) -> f32) -> f32 {
        self.core.bodies().get(idx).map(f).unwrap_or(0.0)
    }
}

#[wasm_bindgen]
impl World {
    /// Create an empty world for a viewport of the given logical size
    #[wasm_bindgen(constructor)]
    pub fn new(width: f32, height: f32) -> Self {
        Self {
            core: SimulationState::new(width, height),
        }
    }

    #[wasm_bindgen(getter)]
    pub fn width(&self) -> f32 { self.core.width() }

    #[wasm_bindgen(getter)]
    pub fn height(&self) -> f32 { self.core.height() }

    #[wasm_bindgen(getter)]
    pub fn frame(&self) -> u64 { self.core.frame() }

    /// Ball count for the HUD
    #[wasm_bindgen(getter)]
    pub fn body_count(&self) -> usize { self.core.body_count() }

    pub fn set_viewport(&mut self, width: f32, height: f32) {
        self.core.set_viewport(width, height);
    }

    // === SETTINGS ===

    pub fn set_gravity(&mut self, gravity: f32) {
        self.core.set_gravity(gravity);
    }

    pub fn gravity(&self) -> f32 { self.core.gravity() }

    pub fn set_fill_count(&mut self, count: u32) {
        self.core.set_fill_count(count);
    }

    pub fn fill_count(&self) -> u32 { self.core.fill_count() }

    pub fn load_settings(&mut self, json: String) -> Result<(), JsValue> {
        self.core
            .load_settings_json(&json)
            .map_err(|e| JsValue::from_str(&e))?;
        Ok(())
    }

    pub fn settings_json(&self) -> String {
        self.core.settings_json()
    }

    pub fn set_seed(&mut self, seed: u32) {
        self.core.set_seed(seed);
    }

    /// Enable or disable per-step perf metrics (adds timing overhead when enabled)
    pub fn enable_perf_metrics(&mut self, enabled: bool) {
        self.core.enable_perf_metrics(enabled);
    }

    /// Get last step perf snapshot (zeros when perf disabled)
    pub fn get_perf_stats(&self) -> PerfStats {
        self.core.get_perf_stats()
    }

    // === INPUT ===

    pub fn pointer_move(&mut self, x: f32, y: f32, timestamp_ms: f64) {
        self.core.pointer_move(x, y, timestamp_ms);
    }

    /// Primary press: grab the ball under the pointer or spawn one.
    /// Returns true when a ball was grabbed.
    pub fn pointer_down(&mut self, x: f32, y: f32, timestamp_ms: f64) -> bool {
        self.core.pointer_move(x, y, timestamp_ms);
        matches!(self.core.grab(x, y), GrabOutcome::Grabbed(_))
    }

    /// Primary release: fling the held ball, if any
    pub fn pointer_up(&mut self, _x: f32, _y: f32, timestamp_ms: f64) {
        self.core.release_at(timestamp_ms);
    }

    /// Secondary action (context menu): repel nearby balls
    pub fn context_action(&mut self, x: f32, y: f32) -> u32 {
        let settings = self.core.settings();
        let (radius, strength) = (settings.repel_radius, settings.repel_strength);
        self.core.repel(x, y, radius, strength)
    }

    /// Keyboard shortcuts: Space pauses, C clears. Returns true if handled.
    pub fn key_press(&mut self, code: &str) -> bool {
        match code {
            "Space" | " " => {
                self.core.toggle_pause();
                true
            }
            "c" | "C" | "KeyC" => {
                self.core.clear_all();
                true
            }
            _ => false,
        }
    }

    // === COMMANDS ===

    pub fn spawn_at(&mut self, x: f32, y: f32) -> usize {
        self.core.spawn_at(x, y)
    }

    pub fn spawn_batch(&mut self, n: u32) {
        self.core.spawn_batch(n);
    }

    /// Spawn `fill_count` balls (the "fill" button)
    pub fn fill(&mut self) -> u32 {
        self.core.fill()
    }

    pub fn repel(&mut self, x: f32, y: f32, radius: f32, strength: f32) -> u32 {
        self.core.repel(x, y, radius, strength)
    }

    pub fn clear_all(&mut self) {
        self.core.clear_all();
    }

    /// Returns true when the world is now paused
    pub fn toggle_pause(&mut self) -> bool {
        self.core.toggle_pause();
        self.core.is_paused()
    }

    #[wasm_bindgen(getter)]
    pub fn paused(&self) -> bool { self.core.is_paused() }

    // === LOOP ===

    /// Animation frame entry: step by the time since the last call.
    /// Returns true when the host should redraw.
    pub fn tick(&mut self, timestamp_ms: f64) -> bool {
        self.core.tick_at(timestamp_ms)
    }

    /// Step by an explicit `dt` in seconds (capped)
    pub fn step(&mut self, dt: f32) -> bool {
        self.core.tick(dt)
    }

    // === RENDER ===

    /// Refill the instance buffer; returns the number of balls in it
    pub fn render(&mut self) -> usize {
        self.core.render()
    }

    pub fn instances_ptr(&self) -> *const f32 {
        self.core.instances().as_ptr()
    }

    /// Instance buffer length in f32 elements
    pub fn instances_len(&self) -> usize {
        self.core.instances().len()
    }

    pub fn instance_stride(&self) -> usize {
        INSTANCE_STRIDE
    }

    /// Index of the held ball, or -1
    pub fn held_index(&self) -> i32 {
        self.core.held().map(|h| h.index as i32).unwrap_or(-1)
    }

    pub fn has_outline(&self) -> bool {
        self.core.instances().outline().is_some()
    }

    pub fn outline_x(&self) -> f32 {
        self.core.instances().outline().map(|o| o[0]).unwrap_or(0.0)
    }

    pub fn outline_y(&self) -> f32 {
        self.core.instances().outline().map(|o| o[1]).unwrap_or(0.0)
    }

    pub fn outline_radius(&self) -> f32 {
        self.core.instances().outline().map(|o| o[2]).unwrap_or(0.0)
    }

    // === PER-BALL GETTERS (debug / HUD) ===

    pub fn body_x(&self, idx: usize) -> f32 {
        self.body_value(idx, |b| b.pos.x)
    }

    pub fn body_y(&self, idx: usize) -> f32 {
        self.body_value(idx, |b| b.pos.y)
    }

    pub fn body_vx(&self, idx: usize) -> f32 {
        self.body_value(idx, |b| b.velocity.x)
    }

    pub fn body_vy(&self, idx: usize) -> f32 {
        self.body_value(idx, |b| b.velocity.y)
    }

    pub fn body_radius(&self, idx: usize) -> f32 {
        self.body_value(idx, |b| b.radius())
    }

    pub fn body_mass(&self, idx: usize) -> f32 {
        self.body_value(idx, |b| b.mass())
    }

    pub fn body_color(&self, idx: usize) -> u32 {
        self.core.bodies().get(idx).map(|b| b.color).unwrap_or(0)
    }

    pub fn body_is_kinematic(&self, idx: usize) -> bool {
        self.core.bodies().get(idx).map(|b| b.kinematic).unwrap_or(false)
    }
}
