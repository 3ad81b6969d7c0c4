use std::time::{Duration, Instant};

/// Fixed-rate frame clock for the render loop.
///
/// Deadlines advance by one interval per frame. If the loop falls more than
/// a frame behind, the schedule restarts from `now` instead of bursting to
/// catch up.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FramePacer {
    interval: Duration,
    deadline: Instant,
}

impl FramePacer {
    /// # Panics
    /// Panics if `frames_per_second` is zero.
    #[must_use]
    pub fn new(frames_per_second: u32, now: Instant) -> Self {
        assert!(frames_per_second > 0, "frames_per_second must be positive");

        Self {
            interval: Duration::from_secs(1) / frames_per_second,
            deadline: now,
        }
    }

    #[must_use]
    pub fn interval(&self) -> Duration {
        self.interval
    }

    #[must_use]
    pub fn deadline(&self) -> Instant {
        self.deadline
    }

    /// Returns true when a frame is due and schedules the next one.
    pub fn poll(&mut self, now: Instant) -> bool {
        if now < self.deadline {
            return false;
        }

        self.deadline += self.interval;
        if self.deadline <= now {
            self.deadline = now + self.interval;
        }

        true
    }
}
