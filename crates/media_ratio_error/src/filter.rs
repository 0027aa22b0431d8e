//! Errors raised while parsing media library filter parameters.

/// Specific filter parameter problems.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, derive_more::Display)]
pub enum FilterErrorKind {
    /// Ratio filter is neither `all` nor a decimal ratio key
    #[display("Invalid ratio filter: {}", _0)]
    InvalidRatio(String),
    /// Date label could not be turned into a year and month
    #[display("Invalid date filter: {}", _0)]
    InvalidDate(String),
    /// View mode is not `grid` or `list`
    #[display("Invalid view mode: {}", _0)]
    InvalidMode(String),
}

/// Filter error with location tracking.
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Filter Error: {} at line {} in {}", kind, line, file)]
pub struct FilterError {
    /// The kind of error that occurred
    pub kind: FilterErrorKind,
    /// Line number where error was created
    pub line: u32,
    /// File where error was created
    pub file: &'static str,
}

impl FilterError {
    /// Create a new filter error with caller location tracking.
    #[track_caller]
    pub fn new(kind: FilterErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }
}
