use crate::domain::settings::SimulationSettings;
use crate::systems::integrator::Bounds;

use super::random::seed_state;
use super::SimulationState;

pub(super) fn enable_perf_metrics(world: &mut SimulationState, enabled: bool) {
    world.perf_enabled = enabled;
    if !enabled {
        world.perf_stats.reset();
    }
}

pub(super) fn set_viewport(world: &mut SimulationState, width: f32, height: f32) {
    world.bounds = Bounds::new(width, height);
}

pub(super) fn set_gravity(world: &mut SimulationState, gravity: f32) {
    world.settings.gravity = gravity;
}

pub(super) fn set_fill_count(world: &mut SimulationState, count: u32) {
    world.settings.fill_count = count;
}

pub(super) fn set_seed(world: &mut SimulationState, seed: u32) {
    world.rng_state = seed_state(seed);
}

pub(super) fn load_settings_json(world: &mut SimulationState, json: &str) -> Result<(), String> {
    match SimulationSettings::from_json(json) {
        Ok(settings) => {
            console_log!(
                "settings loaded: gravity={} fillCount={}",
                settings.gravity,
                settings.fill_count
            );
            world.settings = settings;
            Ok(())
        }
        Err(e) => {
            console_warn!("settings rejected: {}", e);
            Err(e)
        }
    }
}
