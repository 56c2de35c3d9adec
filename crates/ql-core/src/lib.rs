//! Core types for Questline: missions, identity, and the game board.
//!
//! This crate defines the data model the rest of the workspace builds on.
//! It has no game logic of its own: dice and streaks live in
//! `ql-mechanics`, the state machine in `ql-session`.

/// The game board and its cosmetic tiles.
pub mod board;
/// Error types used throughout the crate.
pub mod error;
/// Mission entity, identifiers, icons, and accents.
pub mod mission;

/// Re-export board types.
pub use board::{GameBoard, Tile, TileKind};
/// Re-export error types.
pub use error::{CoreError, CoreResult};
/// Re-export mission types.
pub use mission::{Accent, DEFAULT_DAYS_TOTAL, Mission, MissionIcon, MissionId};
