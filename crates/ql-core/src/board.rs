//! The game board: one tile per mission day, plus position bounding.
//!
//! Tiles are cosmetic: their kind, glyph, and label decorate the board but
//! carry no gameplay rule. The only contract the board enforces is that a
//! player position stays within 0..=days_total.

use std::fmt;

use serde::{Deserialize, Serialize};

/// The cosmetic kind of a board tile.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TileKind {
    /// The launch tile at position zero.
    Start,
    /// An ordinary day tile.
    Normal,
    /// A star tile.
    Reward,
    /// A lightning tile.
    Challenge,
    /// A gift tile.
    Bonus,
    /// A rest-day tile.
    Rest,
    /// A week-boundary tile.
    Milestone,
    /// The trophy tile at the final position.
    Finish,
}

impl TileKind {
    /// The kind for a given day of a mission with the given length.
    ///
    /// Start and finish bracket the board; interior kinds follow fixed
    /// moduli of the day number so boards of any length look alike.
    fn for_day(day: u32, days_total: u32) -> Self {
        if day == 0 {
            Self::Start
        } else if day == days_total {
            Self::Finish
        } else if day % 7 == 0 {
            Self::Milestone
        } else if day % 15 == 0 {
            Self::Rest
        } else if day % 5 == 0 {
            Self::Reward
        } else if day % 9 == 0 {
            Self::Challenge
        } else if day % 11 == 0 {
            Self::Bonus
        } else {
            Self::Normal
        }
    }
}

/// A single tile on the game board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tile {
    /// The day this tile represents, 0..=days_total.
    pub day: u32,
    /// The cosmetic kind of the tile.
    pub kind: TileKind,
}

impl Tile {
    /// The glyph drawn on the tile. Normal tiles show their day number.
    pub fn glyph(&self) -> String {
        match self.kind {
            TileKind::Start => "\u{1f680}".to_string(),
            TileKind::Normal => self.day.to_string(),
            TileKind::Reward => "\u{2b50}".to_string(),
            TileKind::Challenge => "\u{26a1}".to_string(),
            TileKind::Bonus => "\u{1f381}".to_string(),
            TileKind::Rest => "\u{1f4a4}".to_string(),
            TileKind::Milestone => "\u{1f3af}".to_string(),
            TileKind::Finish => "\u{1f3c6}".to_string(),
        }
    }

    /// The label shown under the tile.
    pub fn label(&self) -> String {
        match self.kind {
            TileKind::Start => "START".to_string(),
            TileKind::Normal => format!("Day {}", self.day),
            TileKind::Reward => "REWARD".to_string(),
            TileKind::Challenge => "CHALLENGE".to_string(),
            TileKind::Bonus => "BONUS".to_string(),
            TileKind::Rest => "REST".to_string(),
            TileKind::Milestone => format!("WEEK {}", self.day / 7),
            TileKind::Finish => "FINISH!".to_string(),
        }
    }
}

impl fmt::Display for Tile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.glyph(), self.label())
    }
}

/// The fixed tile sequence for one mission length.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameBoard {
    days_total: u32,
    tiles: Vec<Tile>,
}

impl GameBoard {
    /// Build the board for a mission of `days_total` days: one tile per
    /// position 0..=days_total, bracketed by start and finish tiles.
    pub fn for_days(days_total: u32) -> Self {
        let tiles = (0..=days_total)
            .map(|day| Tile {
                day,
                kind: TileKind::for_day(day, days_total),
            })
            .collect();
        Self { days_total, tiles }
    }

    /// The mission length this board was built for.
    pub fn days_total(&self) -> u32 {
        self.days_total
    }

    /// All tiles in position order.
    pub fn tiles(&self) -> &[Tile] {
        &self.tiles
    }

    /// The tile at a position, if it is on the board.
    pub fn tile(&self, position: u32) -> Option<&Tile> {
        self.tiles.get(position as usize)
    }

    /// Bound a position into 0..=days_total.
    pub fn clamp(&self, position: u32) -> u32 {
        position.min(self.days_total)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn board_has_one_tile_per_position() {
        let board = GameBoard::for_days(30);
        assert_eq!(board.tiles().len(), 31);
        assert_eq!(board.days_total(), 30);
    }

    #[test]
    fn board_is_bracketed_by_start_and_finish() {
        let board = GameBoard::for_days(30);
        assert_eq!(board.tile(0).unwrap().kind, TileKind::Start);
        assert_eq!(board.tile(30).unwrap().kind, TileKind::Finish);
    }

    #[test]
    fn week_boundaries_are_milestones() {
        let board = GameBoard::for_days(30);
        for day in [7, 14, 21, 28] {
            assert_eq!(board.tile(day).unwrap().kind, TileKind::Milestone);
        }
    }

    #[test]
    fn single_day_board_is_start_then_finish() {
        let board = GameBoard::for_days(1);
        assert_eq!(board.tiles().len(), 2);
        assert_eq!(board.tile(0).unwrap().kind, TileKind::Start);
        assert_eq!(board.tile(1).unwrap().kind, TileKind::Finish);
    }

    #[test]
    fn clamp_bounds_positions() {
        let board = GameBoard::for_days(30);
        assert_eq!(board.clamp(0), 0);
        assert_eq!(board.clamp(30), 30);
        assert_eq!(board.clamp(33), 30);
    }

    #[test]
    fn tile_past_the_end_is_none() {
        let board = GameBoard::for_days(10);
        assert!(board.tile(10).is_some());
        assert!(board.tile(11).is_none());
    }

    #[test]
    fn labels() {
        let board = GameBoard::for_days(30);
        assert_eq!(board.tile(0).unwrap().label(), "START");
        assert_eq!(board.tile(1).unwrap().label(), "Day 1");
        assert_eq!(board.tile(14).unwrap().label(), "WEEK 2");
        assert_eq!(board.tile(30).unwrap().label(), "FINISH!");
    }

    #[test]
    fn display() {
        let tile = Tile {
            day: 3,
            kind: TileKind::Normal,
        };
        assert_eq!(tile.to_string(), "3 Day 3");
    }

    proptest! {
        #[test]
        fn clamp_never_exceeds_days_total(days_total in 1u32..=400, position in 0u32..=10_000) {
            let board = GameBoard::for_days(days_total);
            prop_assert!(board.clamp(position) <= days_total);
        }

        #[test]
        fn every_position_has_a_tile(days_total in 1u32..=400) {
            let board = GameBoard::for_days(days_total);
            prop_assert_eq!(board.tiles().len() as u32, days_total + 1);
            for position in 0..=days_total {
                prop_assert!(board.tile(position).is_some());
            }
        }
    }
}
