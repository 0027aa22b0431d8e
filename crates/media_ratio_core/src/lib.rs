//! Core data types for the media_ratio workspace.
//!
//! This crate owns the pure parts of aspect-ratio classification: the
//! three-decimal [`RatioValue`], named [`AspectRatio`]s, the ordered
//! [`RatioCatalog`], and the [`TimeLimit`] accepted by the measurement command.
//! Nothing here touches storage.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod aspect_ratio;
mod attachment;
mod catalog;
mod constants;
mod ratio;
mod time_limit;

pub use aspect_ratio::AspectRatio;
pub use attachment::{AttachmentId, Classification, Dimensions};
pub use catalog::RatioCatalog;
pub use constants::{
    ASPECT_RATIOS_OPTION, ASPECT_RATIO_META, DEFAULT_TIME_LIMIT_SECS, OPTION_PREFIX, PLUGIN_SLUG,
    PRECISION, SAFETY_MARGIN_SECS,
};
pub use ratio::RatioValue;
pub use time_limit::{Budget, TimeLimit};
