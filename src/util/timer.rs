use std::time::Duration;

pub const DEFAULT_INTERVAL: Duration = Duration::from_millis(100);

/// Periodic tick driven by the UI frame clock.
///
/// egui has no timer callbacks, so the app polls once per frame with the
/// current input time. Intervals missed while the window was idle are folded
/// into a single firing.
#[derive(Debug, Clone)]
pub struct RedrawTimer {
    interval: Duration,
    last_fired: Option<f64>,
    running: bool,
}

impl Default for RedrawTimer {
    fn default() -> Self {
        Self::new(DEFAULT_INTERVAL)
    }
}

impl RedrawTimer {
    pub fn new(interval: Duration) -> Self {
        Self {
            interval,
            last_fired: None,
            running: true,
        }
    }

    /// Interval for a rate given in frames per second.
    pub fn interval_for_fps(fps: u32) -> Duration {
        Duration::from_millis(1000 / u64::from(fps.max(1)))
    }

    pub fn set_interval(&mut self, interval: Duration) {
        self.interval = interval;
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    pub fn pause(&mut self) {
        self.running = false;
    }

    pub fn resume(&mut self) {
        self.running = true;
        self.last_fired = None;
    }

    /// Returns true when a tick is due at `now` (seconds).
    pub fn poll(&mut self, now: f64) -> bool {
        if !self.running {
            return false;
        }
        match self.last_fired {
            Some(last) if now - last < self.interval.as_secs_f64() => false,
            _ => {
                self.last_fired = Some(now);
                true
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fires_immediately_then_once_per_interval() {
        let mut timer = RedrawTimer::new(Duration::from_millis(100));
        assert!(timer.poll(0.0));
        assert!(!timer.poll(0.05));
        assert!(!timer.poll(0.099));
        assert!(timer.poll(0.1));
        assert!(!timer.poll(0.15));
        assert!(timer.poll(0.2));
    }

    #[test]
    fn missed_intervals_coalesce() {
        let mut timer = RedrawTimer::new(Duration::from_millis(100));
        assert!(timer.poll(0.0));
        assert!(timer.poll(1.0));
        assert!(!timer.poll(1.05));
    }

    #[test]
    fn paused_timer_never_fires() {
        let mut timer = RedrawTimer::default();
        timer.pause();
        assert!(!timer.poll(0.0));
        assert!(!timer.poll(10.0));

        timer.resume();
        assert!(timer.is_running());
        assert!(timer.poll(10.01));
    }

    #[test]
    fn interval_can_be_retuned() {
        let mut timer = RedrawTimer::default();
        assert!(timer.poll(0.0));
        timer.set_interval(RedrawTimer::interval_for_fps(2));
        assert_eq!(timer.interval, Duration::from_millis(500));
        assert!(!timer.poll(0.2));
        assert!(timer.poll(0.5));
    }

    #[test]
    fn fps_conversion() {
        assert_eq!(RedrawTimer::interval_for_fps(10), DEFAULT_INTERVAL);
        assert_eq!(RedrawTimer::interval_for_fps(60), Duration::from_millis(16));
        assert_eq!(RedrawTimer::interval_for_fps(0), Duration::from_secs(1));
        assert_eq!(RedrawTimer::default().interval, DEFAULT_INTERVAL);
    }
}
