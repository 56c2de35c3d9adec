//! Game mechanics for Questline: the weighted progress die and streak
//! counters.
//!
//! Both pieces are independent of the mission model; the session crate
//! wires them into the daily reporting flow.

pub mod dice;
pub mod streak;

pub use dice::RollMode;
pub use streak::StreakTracker;
