use crate::domain::settings::SimulationSettings;
use crate::systems::body::Vec2;
use crate::systems::integrator::Bounds;

use super::perf_stats::PerfStats;
use super::random::seed_state;
use super::{InstanceBuffer, PointerTracker, SimulationLoop, SimulationState, DEFAULT_SEED};

pub(super) fn create_simulation_state(
    width: f32,
    height: f32,
    settings: SimulationSettings,
) -> SimulationState {
    SimulationState {
        bodies: Vec::new(),
        settings,
        bounds: Bounds::new(width, height),
        // Pointer starts in the middle of the viewport until the host reports it.
        pointer: PointerTracker::new(Vec2::new(width / 2.0, height / 2.0)),
        held: None,
        run_loop: SimulationLoop::new(),
        frame: 0,
        rng_state: seed_state(DEFAULT_SEED),
        instances: InstanceBuffer::with_capacity(256),
        perf_enabled: false,
        perf_stats: PerfStats::default(),
    }
}
