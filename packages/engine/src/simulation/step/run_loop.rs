use crate::domain::tuning::MAX_DT;

/// Running or paused. Only `toggle` moves between them.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LoopState {
    Running,
    Paused,
}

/// Turns host frame timestamps into capped step lengths.
///
/// While paused the timestamp still advances, so resuming never produces
/// one huge catch-up step.
#[derive(Clone, Debug)]
pub struct SimulationLoop {
    state: LoopState,
    last_tick_ms: Option<f64>,
}

impl SimulationLoop {
    pub fn new() -> Self {
        Self {
            state: LoopState::Running,
            last_tick_ms: None,
        }
    }

    pub fn state(&self) -> LoopState {
        self.state
    }

    pub fn is_paused(&self) -> bool {
        self.state == LoopState::Paused
    }

    pub fn toggle(&mut self) -> LoopState {
        self.state = match self.state {
            LoopState::Running => LoopState::Paused,
            LoopState::Paused => LoopState::Running,
        };
        self.state
    }

    /// Record a frame at `now_ms`. Returns the step length to run, or
    /// `None` while paused. The first frame has nothing to measure
    /// against and yields a zero step.
    pub fn frame_dt(&mut self, now_ms: f64) -> Option<f32> {
        let elapsed = match self.last_tick_ms {
            Some(last) => ((now_ms - last) / 1000.0) as f32,
            None => 0.0,
        };
        self.last_tick_ms = Some(now_ms);
        match self.state {
            LoopState::Running => Some(cap_dt(elapsed)),
            LoopState::Paused => None,
        }
    }
}

impl Default for SimulationLoop {
    fn default() -> Self {
        Self::new()
    }
}

/// Clamp a step length to `[0, MAX_DT]`; NaN becomes zero.
pub fn cap_dt(dt: f32) -> f32 {
    if dt.is_nan() {
        0.0
    } else {
        dt.clamp(0.0, MAX_DT)
    }
}
