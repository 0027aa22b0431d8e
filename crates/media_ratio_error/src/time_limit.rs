//! Time limit parsing errors.
//!
//! These never reach the command user: the measurement command logs them
//! and substitutes its default limit.

/// Specific time limit problems.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, derive_more::Display)]
pub enum TimeLimitErrorKind {
    /// Input is not a number
    #[display("Time limit is not numeric: {}", _0)]
    Malformed(String),
    /// Input is a negative number
    #[display("Time limit is negative: {}", _0)]
    Negative(String),
}

/// Time limit error with location tracking.
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Time Limit Error: {} at line {} in {}", kind, line, file)]
pub struct TimeLimitError {
    /// The kind of error that occurred
    pub kind: TimeLimitErrorKind,
    /// Line number where error was created
    pub line: u32,
    /// File where error was created
    pub file: &'static str,
}

impl TimeLimitError {
    /// Create a new time limit error with caller location tracking.
    #[track_caller]
    pub fn new(kind: TimeLimitErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }
}
