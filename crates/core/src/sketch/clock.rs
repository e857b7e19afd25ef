use std::time::{Duration, Instant};

/// Weight of the newest sample in the smoothed frame rate
const FRAME_RATE_SMOOTHING: f64 = 0.1;

/// Frame counter and frame-rate meter.
#[derive(Debug, Clone)]
pub struct FrameClock {
    started: Instant,
    last_tick: Option<Instant>,
    frame_count: u64,
    frame_rate: f64,
    target_frame_rate: f64,
}

impl FrameClock {
    pub fn new(target_frame_rate: f64) -> Self {
        Self::starting_at(Instant::now(), target_frame_rate)
    }

    pub fn starting_at(started: Instant, target_frame_rate: f64) -> Self {
        Self {
            started,
            last_tick: None,
            frame_count: 0,
            frame_rate: target_frame_rate,
            target_frame_rate,
        }
    }

    /// Start a new frame now. Returns the new frame number (first frame is 1).
    pub fn tick(&mut self) -> u64 {
        self.tick_at(Instant::now())
    }

    /// Start a new frame at `now`.
    pub fn tick_at(&mut self, now: Instant) -> u64 {
        if let Some(last) = self.last_tick {
            let dt = now.saturating_duration_since(last).as_secs_f64();
            if dt > 0.0 {
                self.frame_rate += (1.0 / dt - self.frame_rate) * FRAME_RATE_SMOOTHING;
            }
        }
        self.last_tick = Some(now);
        self.frame_count += 1;
        self.frame_count
    }

    /// Frames started so far
    pub fn frame_count(&self) -> u64 {
        self.frame_count
    }

    /// Smoothed measured frames per second
    pub fn frame_rate(&self) -> f64 {
        self.frame_rate
    }

    pub fn target_frame_rate(&self) -> f64 {
        self.target_frame_rate
    }

    pub fn set_target_frame_rate(&mut self, fps: f64) {
        self.target_frame_rate = fps;
    }

    /// Time budget of one frame at the target rate.
    pub fn frame_interval(&self) -> Duration {
        if self.target_frame_rate > 0.0 {
            Duration::from_secs_f64(1.0 / self.target_frame_rate)
        } else {
            Duration::ZERO
        }
    }

    /// Milliseconds since the clock started.
    pub fn millis(&self) -> u64 {
        self.started.elapsed().as_millis() as u64
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_frame_count_and_smoothing() {
        let t0 = Instant::now();
        let mut clock = FrameClock::starting_at(t0, 60.0);
        assert_eq!(clock.frame_count(), 0);
        assert_eq!(clock.tick_at(t0), 1);
        assert_eq!(clock.frame_rate(), 60.0);

        // 30 fps sample moves the estimate 10% of the way
        assert_eq!(clock.tick_at(t0 + Duration::from_secs_f64(1.0 / 30.0)), 2);
        assert_relative_eq!(clock.frame_rate(), 57.0, epsilon = 1e-6);
    }

    #[test]
    fn test_frame_interval() {
        let mut clock = FrameClock::new(50.0);
        assert_eq!(clock.frame_interval(), Duration::from_millis(20));
        clock.set_target_frame_rate(0.0);
        assert_eq!(clock.frame_interval(), Duration::ZERO);
        assert!(clock.millis() < 10_000);
    }
}
