//! Top-level error wrapper types.

use crate::{
    ConfigError, DimensionError, FilterError, HookError, JsonError, StorageError,
    StorageErrorKind, TimeLimitError,
};

/// Every error a media_ratio crate can raise.
///
/// # Examples
///
/// ```
/// use media_ratio_error::{ConfigError, MediaRatioError};
///
/// let err: MediaRatioError = ConfigError::new("bad prefix").into();
/// assert!(format!("{}", err).contains("Configuration Error"));
/// ```
#[derive(Debug, derive_more::From, derive_more::Display, derive_more::Error)]
pub enum MediaRatioErrorKind {
    /// Width or height rejected while building an aspect ratio
    #[from(DimensionError)]
    Dimension(DimensionError),
    /// Option, metadata or query store failure
    #[from(StorageError)]
    Storage(StorageError),
    /// Configuration error
    #[from(ConfigError)]
    Config(ConfigError),
    /// JSON serialization/deserialization error
    #[from(JsonError)]
    Json(JsonError),
    /// Media library filter parameters could not be parsed
    #[from(FilterError)]
    Filter(FilterError),
    /// Time limit could not be parsed
    #[from(TimeLimitError)]
    TimeLimit(TimeLimitError),
    /// Host hook registration failed
    #[from(HookError)]
    Hook(HookError),
}

/// media_ratio error with kind discrimination.
#[derive(Debug, derive_more::Display, derive_more::Error)]
#[display("Media Ratio Error: {}", _0)]
pub struct MediaRatioError(Box<MediaRatioErrorKind>);

impl MediaRatioError {
    /// Create a new error from a kind.
    pub fn new(kind: MediaRatioErrorKind) -> Self {
        Self(Box::new(kind))
    }

    /// Get the error kind.
    pub fn kind(&self) -> &MediaRatioErrorKind {
        &self.0
    }

    /// True when a backing store could not be read or written.
    ///
    /// The measurement command treats this as a batch abort, distinct from a
    /// partial or complete run.
    pub fn is_storage_unavailable(&self) -> bool {
        match self.kind() {
            MediaRatioErrorKind::Storage(err) => matches!(
                err.kind,
                StorageErrorKind::Unavailable(_)
                    | StorageErrorKind::FileRead(_)
                    | StorageErrorKind::FileWrite(_)
                    | StorageErrorKind::DirectoryCreation(_)
            ),
            _ => false,
        }
    }
}

// Generic From implementation for any type that converts to MediaRatioErrorKind
impl<T> From<T> for MediaRatioError
where
    T: Into<MediaRatioErrorKind>,
{
    fn from(err: T) -> Self {
        Self::new(err.into())
    }
}

/// Result type for media_ratio operations.
pub type MediaRatioResult<T> = std::result::Result<T, MediaRatioError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn storage_unavailable_is_detected() {
        let err: MediaRatioError = StorageError::unavailable("down").into();
        assert!(err.is_storage_unavailable());

        let err: MediaRatioError =
            StorageError::new(StorageErrorKind::FileWrite("disk full".into())).into();
        assert!(err.is_storage_unavailable());

        let err: MediaRatioError =
            StorageError::new(StorageErrorKind::NotFound("7".into())).into();
        assert!(!err.is_storage_unavailable());
    }

    #[test]
    fn location_is_captured() {
        let err = ConfigError::new("oops");
        assert!(err.file.ends_with("error.rs"));
        assert!(err.line > 0);
    }
}
