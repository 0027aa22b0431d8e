//! Dimension validation errors raised while constructing aspect ratios.

/// Which side of a ratio failed validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, derive_more::Display)]
pub enum Axis {
    /// Horizontal dimension
    #[display("width")]
    Width,
    /// Vertical dimension
    #[display("height")]
    Height,
}

/// Kinds of dimension errors.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, derive_more::Display)]
pub enum DimensionErrorKind {
    /// Width or height was zero or negative
    #[display("Invalid {}: {}", axis, value)]
    InvalidDimension {
        /// The offending axis
        axis: Axis,
        /// The rejected value
        value: i64,
    },
}

/// Dimension error with location tracking.
///
/// # Examples
///
/// ```
/// use media_ratio_error::{Axis, DimensionError, DimensionErrorKind};
///
/// let err = DimensionError::new(DimensionErrorKind::InvalidDimension {
///     axis: Axis::Width,
///     value: 0,
/// });
/// assert!(format!("{}", err).contains("Invalid width: 0"));
/// ```
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Dimension Error: {} at line {} in {}", kind, line, file)]
pub struct DimensionError {
    /// The kind of error that occurred
    pub kind: DimensionErrorKind,
    /// Line number where error was created
    pub line: u32,
    /// File where error was created
    pub file: &'static str,
}

impl DimensionError {
    /// Create a new dimension error with automatic location tracking.
    #[track_caller]
    pub fn new(kind: DimensionErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }

    /// Shorthand for an invalid value on one axis.
    #[track_caller]
    pub fn invalid(axis: Axis, value: i64) -> Self {
        Self::new(DimensionErrorKind::InvalidDimension { axis, value })
    }
}
