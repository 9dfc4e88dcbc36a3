//! Clocks for the frame loop

use std::thread;
use std::time::{Duration, Instant};

use super::Clock;

/// Wall clock; `wait_frame` sleeps off whatever is left of the frame
#[derive(Debug)]
pub struct SystemClock {
    start: Instant,
    last_frame: Instant,
}

impl Default for SystemClock {
    fn default() -> Self {
        Self::new()
    }
}

impl SystemClock {
    pub fn new() -> Self {
        let now = Instant::now();
        Self {
            start: now,
            last_frame: now,
        }
    }
}

impl Clock for SystemClock {
    fn now(&self) -> Duration {
        self.start.elapsed()
    }

    fn wait_frame(&mut self, fps: u32) {
        let frame = Duration::from_secs_f64(1.0 / fps.max(1) as f64);
        let spent = self.last_frame.elapsed();
        if spent < frame {
            thread::sleep(frame - spent);
        }
        self.last_frame = Instant::now();
    }
}

/// Simulated clock: every frame takes exactly `1 / fps`
#[derive(Debug, Clone, Default)]
pub struct ManualClock {
    now: Duration,
    frames: u64,
}

impl ManualClock {
    pub fn new() -> Self {
        Self::default()
    }

    /// Frames waited so far
    pub fn frames(&self) -> u64 {
        self.frames
    }
}

impl Clock for ManualClock {
    fn now(&self) -> Duration {
        self.now
    }

    fn wait_frame(&mut self, fps: u32) {
        self.now += Duration::from_secs_f64(1.0 / fps.max(1) as f64);
        self.frames += 1;
    }
}
