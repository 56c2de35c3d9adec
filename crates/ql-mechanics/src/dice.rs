//! The weighted progress die.
//!
//! The die is biased by how the player reported the day: a completed day
//! rolls from a reward-skewed face table (3-6), a missed day from a
//! penalty-skewed one (1-2). Weights are expressed as a literal six-face
//! multiset and resolved by a uniform pick, so each probability is an exact
//! sixth.

use std::fmt;

use rand::Rng;
use rand::rngs::StdRng;
use serde::{Deserialize, Serialize};

/// How the player reported the day, selecting the dice weighting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RollMode {
    /// The day's goal was completed. Rolls high faces.
    #[default]
    Success,
    /// The day's goal was missed. Rolls low faces.
    Failure,
}

impl RollMode {
    /// The six faces of the die in this mode. A face that appears twice is
    /// twice as likely.
    pub fn faces(self) -> [u32; 6] {
        match self {
            Self::Success => [3, 4, 4, 5, 5, 6],
            Self::Failure => [1, 1, 1, 2, 2, 2],
        }
    }

    /// The value range this mode can produce, for display.
    pub fn display_range(self) -> &'static str {
        match self {
            Self::Success => "3-6",
            Self::Failure => "1-2",
        }
    }

    /// Roll the die once.
    pub fn roll(self, rng: &mut StdRng) -> u32 {
        let faces = self.faces();
        faces[rng.random_range(0..faces.len())]
    }

    /// Parse a mode name, recognizing a few aliases.
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "success" | "made-it" | "made_it" | "hit" => Some(Self::Success),
            "failure" | "not-today" | "not_today" | "miss" => Some(Self::Failure),
            _ => None,
        }
    }
}

impl fmt::Display for RollMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Success => write!(f, "success"),
            Self::Failure => write!(f, "failure"),
        }
    }
}
