use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::{CoreError, CoreResult};

/// Unique identifier for every mission.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MissionId(pub Uuid);

impl MissionId {
    /// Generate a new random mission ID.
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for MissionId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for MissionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", &self.0.to_string()[..8])
    }
}

/// Number of days a mission runs when the creation form leaves it unset.
pub const DEFAULT_DAYS_TOTAL: u32 = 30;

/// The icon attached to a mission, from the fixed set the creation form
/// offers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MissionIcon {
    /// A bullseye, the general-purpose goal icon.
    #[default]
    Target,
    /// Flexed arm, for exercise goals.
    Workout,
    /// A stack of books.
    Book,
    /// A meditating figure.
    Meditation,
    /// A laptop.
    Code,
    /// A runner.
    Run,
    /// A writing hand.
    Write,
    /// A palette.
    Art,
    /// A musical note.
    Music,
    /// A money bag.
    Money,
    /// A salad bowl.
    Food,
    /// A sleeping face.
    Sleep,
    /// A rocket.
    Rocket,
    /// A star.
    Star,
    /// A flame.
    Flame,
}

impl MissionIcon {
    /// All icons in the order the creation form presents them.
    pub const ALL: [MissionIcon; 15] = [
        MissionIcon::Target,
        MissionIcon::Workout,
        MissionIcon::Book,
        MissionIcon::Meditation,
        MissionIcon::Code,
        MissionIcon::Run,
        MissionIcon::Write,
        MissionIcon::Art,
        MissionIcon::Music,
        MissionIcon::Money,
        MissionIcon::Food,
        MissionIcon::Sleep,
        MissionIcon::Rocket,
        MissionIcon::Star,
        MissionIcon::Flame,
    ];

    /// The emoji glyph for this icon.
    pub fn glyph(self) -> &'static str {
        match self {
            Self::Target => "\u{1f3af}",
            Self::Workout => "\u{1f4aa}",
            Self::Book => "\u{1f4da}",
            Self::Meditation => "\u{1f9d8}",
            Self::Code => "\u{1f4bb}",
            Self::Run => "\u{1f3c3}",
            Self::Write => "\u{270d}\u{fe0f}",
            Self::Art => "\u{1f3a8}",
            Self::Music => "\u{1f3b5}",
            Self::Money => "\u{1f4b0}",
            Self::Food => "\u{1f957}",
            Self::Sleep => "\u{1f4a4}",
            Self::Rocket => "\u{1f680}",
            Self::Star => "\u{2b50}",
            Self::Flame => "\u{1f525}",
        }
    }

    /// The accent color paired with this icon when the form leaves it unset.
    pub fn accent(self) -> Accent {
        match self {
            Self::Target | Self::Flame => Accent::Orange,
            Self::Workout | Self::Art => Accent::Pink,
            Self::Book | Self::Code | Self::Rocket => Accent::Cyan,
            Self::Meditation | Self::Food => Accent::Green,
            Self::Run | Self::Music => Accent::Blue,
            Self::Write | Self::Sleep => Accent::Purple,
            Self::Money | Self::Star => Accent::Yellow,
        }
    }
}

impl fmt::Display for MissionIcon {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Target => "target",
            Self::Workout => "workout",
            Self::Book => "book",
            Self::Meditation => "meditation",
            Self::Code => "code",
            Self::Run => "run",
            Self::Write => "write",
            Self::Art => "art",
            Self::Music => "music",
            Self::Money => "money",
            Self::Food => "food",
            Self::Sleep => "sleep",
            Self::Rocket => "rocket",
            Self::Star => "star",
            Self::Flame => "flame",
        };
        f.write_str(name)
    }
}

/// Accent color attached to a mission. Cosmetic only.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Accent {
    /// Neon pink.
    #[default]
    Pink,
    /// Neon cyan.
    Cyan,
    /// Neon orange.
    Orange,
    /// Neon green.
    Green,
    /// Tile purple.
    Purple,
    /// Tile blue.
    Blue,
    /// Neon yellow.
    Yellow,
}

impl fmt::Display for Accent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Pink => "pink",
            Self::Cyan => "cyan",
            Self::Orange => "orange",
            Self::Green => "green",
            Self::Purple => "purple",
            Self::Blue => "blue",
            Self::Yellow => "yellow",
        };
        f.write_str(name)
    }
}

/// A user-defined goal tracked over a fixed number of days.
///
/// `current_day` is kept private so the bound `current_day <= days_total`
/// holds for the whole life of the value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Mission {
    /// Unique identifier, assigned at creation and never reused.
    pub id: MissionId,
    /// Display title, non-empty and trimmed.
    pub title: String,
    /// Icon shown on the mission card.
    pub icon: MissionIcon,
    /// Accent color for the mission card.
    pub accent: Accent,
    /// Free-text description.
    pub description: String,
    days_total: u32,
    current_day: u32,
    /// Timestamp when the mission was created.
    pub created_at: DateTime<Utc>,
}

impl Mission {
    /// Create a mission with the creation-form defaults: 30 days, starting
    /// at day zero, empty description, accent derived from the icon.
    ///
    /// The title is trimmed; a whitespace-only title is rejected.
    pub fn new(title: &str, icon: MissionIcon) -> CoreResult<Self> {
        Self::with_details(title, icon, icon.accent(), "", DEFAULT_DAYS_TOTAL)
    }

    /// Create a mission with full control over its fields.
    pub fn with_details(
        title: &str,
        icon: MissionIcon,
        accent: Accent,
        description: impl Into<String>,
        days_total: u32,
    ) -> CoreResult<Self> {
        let title = title.trim();
        if title.is_empty() {
            return Err(CoreError::EmptyTitle);
        }
        if days_total == 0 {
            return Err(CoreError::ZeroDays);
        }
        Ok(Self {
            id: MissionId::new(),
            title: title.to_string(),
            icon,
            accent,
            description: description.into(),
            days_total,
            current_day: 0,
            created_at: Utc::now(),
        })
    }

    /// Total number of days this mission runs. Fixed at creation.
    pub fn days_total(&self) -> u32 {
        self.days_total
    }

    /// The day the player has reached, 0..=days_total.
    pub fn current_day(&self) -> u32 {
        self.current_day
    }

    /// Set the current day, clamped to the mission length.
    pub fn set_current_day(&mut self, day: u32) {
        self.current_day = day.min(self.days_total);
    }

    /// Put the mission back at day zero.
    pub fn reset_progress(&mut self) {
        self.current_day = 0;
    }

    /// Fraction of the mission completed, 0.0 to 1.0.
    pub fn fraction(&self) -> f64 {
        f64::from(self.current_day) / f64::from(self.days_total)
    }

    /// Returns true once the final day is reached.
    pub fn is_complete(&self) -> bool {
        self.current_day >= self.days_total
    }

    /// The five demo missions, used by `--sample` mode.
    pub fn samples() -> Vec<Self> {
        let sample = |title: &str, icon: MissionIcon, description: &str, days_total, current_day| {
            Self {
                id: MissionId::new(),
                title: title.to_string(),
                icon,
                accent: icon.accent(),
                description: description.to_string(),
                days_total,
                current_day,
                created_at: Utc::now(),
            }
        };
        vec![
            sample(
                "30 Days Workout",
                MissionIcon::Workout,
                "Exercise every day",
                30,
                7,
            ),
            sample("Read 20 Pages", MissionIcon::Book, "Read daily", 30, 12),
            sample(
                "No Sugar Challenge",
                MissionIcon::Food,
                "Avoid sugary foods",
                21,
                5,
            ),
            sample(
                "Meditation",
                MissionIcon::Meditation,
                "10 min meditation",
                30,
                15,
            ),
            sample("Learn Coding", MissionIcon::Code, "Code 1 hour daily", 100, 23),
        ]
    }
}

impl fmt::Display for Mission {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}/{}", self.title, self.current_day, self.days_total)
    }
}
