//! Update-time monitoring against a per-tick budget.

use std::collections::VecDeque;
use std::time::Duration;

const WINDOW: usize = 120;

/// Rolling statistics over the last [`WINDOW`] recorded updates.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct FrameStats {
    /// Updates per second the window's mean duration would sustain.
    pub fps: f64,
    pub mean_ms: f64,
    pub worst_ms: f64,
    /// Overruns since the timer was created.
    pub overruns: u64,
    pub samples: usize,
}

/// Records how long each scene update took and counts budget overruns.
pub struct FrameTimer {
    window: VecDeque<Duration>,
    budget: Duration,
    overruns: u64,
}

impl FrameTimer {
    pub fn new(budget: Duration) -> Self {
        Self {
            window: VecDeque::with_capacity(WINDOW),
            budget,
            overruns: 0,
        }
    }

    /// Record one update. Returns `true` if it overran the budget.
    pub fn record(&mut self, dt: Duration) -> bool {
        if self.window.len() == WINDOW {
            self.window.pop_front();
        }
        self.window.push_back(dt);

        let over = dt > self.budget;
        self.overruns += u64::from(over);
        over
    }

    fn window_secs(&self) -> f64 {
        self.window.iter().map(Duration::as_secs_f64).sum()
    }

    pub fn fps(&self) -> f64 {
        let total = self.window_secs();
        if total > 0.0 {
            self.window.len() as f64 / total
        } else {
            0.0
        }
    }

    /// Mean update time in milliseconds.
    pub fn frame_time_ms(&self) -> f64 {
        match self.window.len() {
            0 => 0.0,
            n => self.window_secs() * 1000.0 / n as f64,
        }
    }

    pub fn worst_frame_ms(&self) -> f64 {
        self.window
            .iter()
            .max()
            .map_or(0.0, |d| d.as_secs_f64() * 1000.0)
    }

    pub fn overruns(&self) -> u64 {
        self.overruns
    }

    pub fn budget(&self) -> Duration {
        self.budget
    }

    pub fn sample_count(&self) -> usize {
        self.window.len()
    }

    pub fn stats(&self) -> FrameStats {
        FrameStats {
            fps: self.fps(),
            mean_ms: self.frame_time_ms(),
            worst_ms: self.worst_frame_ms(),
            overruns: self.overruns,
            samples: self.window.len(),
        }
    }
}

/// 60 Hz budget.
impl Default for FrameTimer {
    fn default() -> Self {
        Self::new(Duration::from_secs_f64(1.0 / 60.0))
    }
}
