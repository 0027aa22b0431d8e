//! Host hook registration errors.

/// Failure to register a handler with the host's event dispatcher.
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Hook Error: {} ({}) at line {} in {}", message, event, line, file)]
pub struct HookError {
    /// Event the handler was being attached to
    pub event: String,
    /// What went wrong
    pub message: String,
    /// Line number where the error occurred
    pub line: u32,
    /// File where the error occurred
    pub file: &'static str,
}

impl HookError {
    /// Create a new HookError for the given event.
    #[track_caller]
    pub fn new(event: impl Into<String>, message: impl Into<String>) -> Self {
        let location = std::panic::Location::caller();
        Self {
            event: event.into(),
            message: message.into(),
            line: location.line(),
            file: location.file(),
        }
    }
}
