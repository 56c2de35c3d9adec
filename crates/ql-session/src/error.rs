use ql_core::{CoreError, MissionId};

/// Alias for `Result<T, SessionError>`.
pub type SessionResult<T> = Result<T, SessionError>;

/// Precondition failures from session operations.
///
/// None of these are fatal. Frontends surface them as status text at most,
/// never as crashes or error dialogs.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SessionError {
    /// No mission is currently selected.
    #[error("no mission is selected")]
    NoActiveMission,

    /// The mission id does not exist in the collection.
    #[error("mission not found: {0}")]
    MissionNotFound(MissionId),

    /// A prompt is already open; the current step must finish first.
    #[error("a prompt is already open")]
    PromptAlreadyOpen,

    /// The progress-choice prompt is not open.
    #[error("no progress choice is pending")]
    ChoiceNotPending,

    /// The dice prompt is not open, or no roll has been made yet.
    #[error("no dice roll is pending")]
    RollNotPending,

    /// The pending die has already been rolled.
    #[error("the die has already been rolled")]
    AlreadyRolled,

    /// The creation form submitted invalid mission data.
    #[error(transparent)]
    Invalid(#[from] CoreError),
}
