use wasm_bindgen::prelude::*;

/// Timings and counters for the last step. All zero while perf is off.
#[wasm_bindgen]
#[derive(Clone, Debug, Default)]
pub struct PerfStats {
    pub(super) step_ms: f64,
    pub(super) integrate_ms: f64,
    pub(super) collide_ms: f64,
    pub(super) dt_ms: f64,
    pub(super) body_count: u32,
    pub(super) kinematic_count: u32,
    pub(super) pairs_checked: u32,
    pub(super) contacts: u32,
    pub(super) impulses: u32,
}

impl PerfStats {
    pub(crate) fn reset(&mut self) {
        *self = PerfStats::default();
    }
}

#[wasm_bindgen]
impl PerfStats {
    #[wasm_bindgen(getter)]
    pub fn step_ms(&self) -> f64 { self.step_ms }
    #[wasm_bindgen(getter)]
    pub fn integrate_ms(&self) -> f64 { self.integrate_ms }
    #[wasm_bindgen(getter)]
    pub fn collide_ms(&self) -> f64 { self.collide_ms }
    #[wasm_bindgen(getter)]
    pub fn dt_ms(&self) -> f64 { self.dt_ms }
    #[wasm_bindgen(getter)]
    pub fn body_count(&self) -> u32 { self.body_count }
    #[wasm_bindgen(getter)]
    pub fn kinematic_count(&self) -> u32 { self.kinematic_count }
    #[wasm_bindgen(getter)]
    pub fn pairs_checked(&self) -> u32 { self.pairs_checked }
    #[wasm_bindgen(getter)]
    pub fn contacts(&self) -> u32 { self.contacts }
    #[wasm_bindgen(getter)]
    pub fn impulses(&self) -> u32 { self.impulses }
}
