//! Frame pacing

use std::thread;
use std::time::{Duration, Instant};

/// Paces the main loop
pub trait Clock {
    /// Block until the next frame is due at `target_fps`
    fn tick(&mut self, target_fps: u32);
}

/// Sleeps away whatever is left of each frame's budget
#[derive(Debug)]
pub struct FrameClock {
    last: Instant,
}

impl Default for FrameClock {
    fn default() -> Self {
        Self::new()
    }
}

impl FrameClock {
    pub fn new() -> Self {
        Self {
            last: Instant::now(),
        }
    }

    pub fn frame_budget(target_fps: u32) -> Duration {
        Duration::from_secs(1) / target_fps.max(1)
    }
}

impl Clock for FrameClock {
    fn tick(&mut self, target_fps: u32) {
        let budget = Self::frame_budget(target_fps);
        let elapsed = self.last.elapsed();
        if let Some(remaining) = budget.checked_sub(elapsed) {
            thread::sleep(remaining);
        } else {
            log::trace!("Frame over budget by {:?}", elapsed - budget);
        }
        self.last = Instant::now();
    }
}

/// A clock that never waits (tests, headless runs)
#[derive(Debug, Default, Clone, Copy)]
pub struct NoWait {
    pub ticks: u64,
}

impl Clock for NoWait {
    fn tick(&mut self, _target_fps: u32) {
        self.ticks += 1;
    }
}
