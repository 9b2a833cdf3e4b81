use particles_core::Scheduler;
use std::time::{Duration, Instant};

/// Sleeps so frames start at most `target_fps` times per second.
pub struct FixedRateScheduler {
    frame_interval: Duration,
    next_frame: Instant,
}

impl FixedRateScheduler {
    pub fn new(target_fps: u64) -> Self {
        let frame_interval = Duration::from_secs_f64(1.0 / target_fps.max(1) as f64);
        Self {
            frame_interval,
            next_frame: Instant::now() + frame_interval,
        }
    }

    pub fn frame_interval(&self) -> Duration {
        self.frame_interval
    }
}

impl Scheduler for FixedRateScheduler {
    fn request_next_frame(&mut self) {
        let now = Instant::now();
        if self.next_frame > now {
            std::thread::sleep(self.next_frame - now);
        }
        // Never try to catch up on missed frames.
        self.next_frame = Instant::now().max(self.next_frame) + self.frame_interval;
    }
}

/// Hands out the next frame immediately.
#[derive(Default)]
pub struct UnpacedScheduler {
    requests: u64,
}

impl UnpacedScheduler {
    pub fn requests(&self) -> u64 {
        self.requests
    }
}

impl Scheduler for UnpacedScheduler {
    fn request_next_frame(&mut self) {
        self.requests += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fixed_rate_interval() {
        let scheduler = FixedRateScheduler::new(50);
        assert_eq!(scheduler.frame_interval(), Duration::from_millis(20));
    }

    #[test]
    fn test_fixed_rate_paces_frames() {
        let mut scheduler = FixedRateScheduler::new(100);
        let start = Instant::now();
        scheduler.request_next_frame();
        scheduler.request_next_frame();
        assert!(start.elapsed() >= Duration::from_millis(15));
    }

    #[test]
    fn test_unpaced_counts_requests() {
        let mut scheduler = UnpacedScheduler::default();
        scheduler.request_next_frame();
        scheduler.request_next_frame();
        assert_eq!(scheduler.requests(), 2);
    }
}
