//! Session state machine for Questline.
//!
//! A [`GameSession`] owns the mission collection, the current screen, and
//! the daily reporting flow (progress choice, dice roll, board move). Every
//! operation is a synchronous state transition; animation pacing belongs to
//! the frontend.

/// Error types for session operations.
pub mod error;
/// The game session and its operations.
pub mod session;

/// Re-export error types.
pub use error::{SessionError, SessionResult};
/// Re-export session types.
pub use session::{GameSession, MoveReport, Screen};
