//! One-line command results.

use media_ratio_classifier::{BatchOutcome, BatchStatus};
use std::fmt;

/// A user-facing result line: `Success: ...`, `Warning: ...` or `Error: ...`.
///
/// ```
/// use media_ratio::Notice;
///
/// assert_eq!(Notice::success("Done.").to_string(), "Success: Done.");
/// assert!(Notice::error("boom").is_error());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Notice {
    /// The command did what was asked
    Success(String),
    /// The command ran but needs attention
    Warning(String),
    /// The command failed
    Error(String),
}

impl Notice {
    /// A success line.
    pub fn success(message: impl Into<String>) -> Self {
        Notice::Success(message.into())
    }

    /// A warning line.
    pub fn warning(message: impl Into<String>) -> Self {
        Notice::Warning(message.into())
    }

    /// An error line.
    pub fn error(message: impl fmt::Display) -> Self {
        Notice::Error(message.to_string())
    }

    /// What the measure command reports for an outcome.
    pub fn from_outcome(outcome: &BatchOutcome) -> Self {
        match outcome.status() {
            BatchStatus::Complete => Notice::success("Images measured."),
            BatchStatus::Partial => Notice::warning("Some images measured; run again to proceed."),
            BatchStatus::NothingToDo => Notice::warning("No unmeasured images found."),
        }
    }

    /// Whether this is an error line.
    pub fn is_error(&self) -> bool {
        matches!(self, Notice::Error(_))
    }

    /// Successes go to stdout, warnings and errors to stderr.
    pub fn print(&self) {
        match self {
            Notice::Success(_) => println!("{}", self),
            Notice::Warning(_) | Notice::Error(_) => eprintln!("{}", self),
        }
    }
}

impl fmt::Display for Notice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Notice::Success(message) => write!(f, "Success: {}", message),
            Notice::Warning(message) => write!(f, "Warning: {}", message),
            Notice::Error(message) => write!(f, "Error: {}", message),
        }
    }
}
