use crate::domain::tuning::FALLBACK_SAMPLE_DT;
use crate::systems::body::Vec2;

/// One pointer position report from the host.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PointerSample {
    pub pos: Vec2,
    pub timestamp_ms: f64,
}

/// Keeps the current pointer position and the last two samples, which
/// is all a release fling needs.
#[derive(Clone, Debug)]
pub struct PointerTracker {
    position: Vec2,
    latest: Option<PointerSample>,
    previous: Option<PointerSample>,
}

impl PointerTracker {
    pub fn new(position: Vec2) -> Self {
        Self {
            position,
            latest: None,
            previous: None,
        }
    }

    pub fn record(&mut self, x: f32, y: f32, timestamp_ms: f64) {
        self.previous = self.latest;
        self.latest = Some(PointerSample {
            pos: Vec2::new(x, y),
            timestamp_ms,
        });
        self.position = Vec2::new(x, y);
    }

    pub fn position(&self) -> Vec2 {
        self.position
    }

    pub fn latest(&self) -> Option<PointerSample> {
        self.latest
    }

    /// Pointer speed in px/s over the last sample interval.
    ///
    /// Zero until two samples exist. A non-positive interval (duplicate
    /// timestamps, clock going backwards) uses `FALLBACK_SAMPLE_DT`.
    pub fn velocity(&self) -> Vec2 {
        match self.latest {
            Some(last) => self.velocity_until(last.timestamp_ms),
            None => Vec2::zero(),
        }
    }

    /// Last sample displacement divided by the time from the previous
    /// sample up to `end_ms`. A pointer that stopped before `end_ms`
    /// yields a proportionally slower fling. `end_ms` earlier than the
    /// latest sample is treated as the latest sample's time.
    pub fn velocity_until(&self, end_ms: f64) -> Vec2 {
        let (Some(prev), Some(last)) = (self.previous, self.latest) else {
            return Vec2::zero();
        };
        let end_ms = end_ms.max(last.timestamp_ms);
        let mut dt = ((end_ms - prev.timestamp_ms) / 1000.0) as f32;
        if dt.is_nan() || dt <= 0.0 {
            dt = FALLBACK_SAMPLE_DT;
        }
        (last.pos - prev.pos) / dt
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn velocity_needs_two_samples() {
        let mut tracker = PointerTracker::new(Vec2::zero());
        assert_eq!(tracker.velocity(), Vec2::zero());
        tracker.record(10.0, 10.0, 0.0);
        assert_eq!(tracker.velocity(), Vec2::zero());
        assert_eq!(tracker.position(), Vec2::new(10.0, 10.0));
    }

    #[test]
    fn velocity_is_displacement_over_interval() {
        let mut tracker = PointerTracker::new(Vec2::zero());
        tracker.record(100.0, 50.0, 1000.0);
        tracker.record(150.0, 30.0, 1100.0);
        let v = tracker.velocity();
        assert!((v.x - 500.0).abs() < 1e-2);
        assert!((v.y + 200.0).abs() < 1e-2);
    }

    #[test]
    fn zero_interval_falls_back_to_one_frame() {
        let mut tracker = PointerTracker::new(Vec2::zero());
        tracker.record(0.0, 0.0, 500.0);
        tracker.record(1.6, 0.0, 500.0);
        assert!((tracker.velocity().x - 100.0).abs() < 1e-3);
    }

    #[test]
    fn idle_time_before_release_slows_the_fling() {
        let mut tracker = PointerTracker::new(Vec2::zero());
        tracker.record(200.0, 300.0, 0.0);
        tracker.record(300.0, 300.0, 100.0);

        assert!((tracker.velocity_until(100.0).x - 1000.0).abs() < 1e-2);
        // 100 px over 3.1 s
        assert!((tracker.velocity_until(3100.0).x - 100.0 / 3.1).abs() < 1e-2);
        // a release stamped before the last move counts from that move
        assert!((tracker.velocity_until(50.0).x - 1000.0).abs() < 1e-2);
    }
}
