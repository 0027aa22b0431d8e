//! Error types for the media_ratio workspace.
//!
//! This crate provides the foundation error types used by every media_ratio crate.
//!
//! # Error Hierarchy
//!
//! All errors follow the `ErrorKind` + wrapper struct pattern:
//! - `*ErrorKind` enum defines specific error conditions
//! - `*Error` struct wraps the kind with source location tracking
//! - All errors use `#[track_caller]` for automatic location capture
//!
//! # Examples
//!
//! ```
//! use media_ratio_error::{MediaRatioResult, StorageError, StorageErrorKind};
//!
//! fn read_catalog() -> MediaRatioResult<String> {
//!     Err(StorageError::new(StorageErrorKind::Unavailable("options store offline".into())))?
//! }
//!
//! let err = read_catalog().unwrap_err();
//! assert!(err.is_storage_unavailable());
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod config;
mod dimension;
mod error;
mod filter;
mod hook;
mod json;
mod storage;
mod time_limit;

pub use config::ConfigError;
pub use dimension::{Axis, DimensionError, DimensionErrorKind};
pub use error::{MediaRatioError, MediaRatioErrorKind, MediaRatioResult};
pub use filter::{FilterError, FilterErrorKind};
pub use hook::HookError;
pub use json::JsonError;
pub use storage::{StorageError, StorageErrorKind};
pub use time_limit::{TimeLimitError, TimeLimitErrorKind};
