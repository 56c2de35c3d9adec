/// Alias for `Result<T, CoreError>`.
pub type CoreResult<T> = Result<T, CoreError>;

/// Errors that can occur when constructing mission data.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CoreError {
    /// The mission title was empty after trimming whitespace.
    #[error("mission title must not be empty")]
    EmptyTitle,

    /// The mission length was zero days.
    #[error("mission must run for at least one day")]
    ZeroDays,
}
