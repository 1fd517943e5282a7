/// Lap stopwatch for per-step perf metrics.
///
/// One timer covers a whole step: `lap_ms` closes the current phase
/// (integration, collisions) and starts the next, while a copy taken at
/// the start measures the full step. wasm32 has no `Instant`, so the
/// browser clock is used there.
#[derive(Clone, Copy)]
pub(crate) struct PerfTimer {
    #[cfg(target_arch = "wasm32")]
    mark_ms: f64,
    #[cfg(not(target_arch = "wasm32"))]
    mark: std::time::Instant,
}

impl PerfTimer {
    pub(crate) fn start() -> Self {
        #[cfg(target_arch = "wasm32")]
        {
            PerfTimer { mark_ms: js_sys::Date::now() }
        }
        #[cfg(not(target_arch = "wasm32"))]
        {
            PerfTimer { mark: std::time::Instant::now() }
        }
    }

    /// Milliseconds since the last mark. `Date::now` can step backwards,
    /// so the result is clamped at zero.
    pub(crate) fn elapsed_ms(&self) -> f64 {
        #[cfg(target_arch = "wasm32")]
        {
            (js_sys::Date::now() - self.mark_ms).max(0.0)
        }
        #[cfg(not(target_arch = "wasm32"))]
        {
            self.mark.elapsed().as_secs_f64() * 1000.0
        }
    }

    /// Elapsed time of the current phase; the next phase starts now.
    pub(crate) fn lap_ms(&mut self) -> f64 {
        let elapsed = self.elapsed_ms();
        *self = PerfTimer::start();
        elapsed
    }
}
