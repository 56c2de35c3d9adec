//! Streak counters for consecutive successful days.

use serde::{Deserialize, Serialize};

/// Process-wide streak counters, independent of any single mission.
///
/// `current` counts consecutive successful reports and drops to zero on a
/// miss; `longest` and `total_days_completed` are lifetime counters.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StreakTracker {
    current: u32,
    longest: u32,
    total_days_completed: u32,
}

impl StreakTracker {
    /// Create a tracker with all counters at zero.
    pub fn new() -> Self {
        Self::default()
    }

    /// The current run of consecutive successful days.
    pub fn current(&self) -> u32 {
        self.current
    }

    /// The longest run ever recorded.
    pub fn longest(&self) -> u32 {
        self.longest
    }

    /// Total successful days across all runs.
    pub fn total_days_completed(&self) -> u32 {
        self.total_days_completed
    }

    /// Record a successful day: extends the run and the lifetime total.
    pub fn record_success(&mut self) {
        self.current += 1;
        self.total_days_completed += 1;
        self.longest = self.longest.max(self.current);
    }

    /// Record a missed day: the current run drops to zero.
    pub fn record_failure(&mut self) {
        self.current = 0;
    }

    /// Clear the current run on game reset. Lifetime counters survive.
    pub fn reset_current(&mut self) {
        self.current = 0;
    }
}
