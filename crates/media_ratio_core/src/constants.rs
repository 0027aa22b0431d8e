//! Names and numbers shared with the host CMS.

/// Plugin slug used by the host to namespace commands and stored names.
pub const PLUGIN_SLUG: &str = "media-by-aspect-ratio";

/// Prefix prepended to every option and metadata name this plugin stores.
pub const OPTION_PREFIX: &str = "media-by-aspect-ratio-";

/// Option holding the serialized ratio catalog (before prefixing).
pub const ASPECT_RATIOS_OPTION: &str = "aspect-ratios";

/// Per-attachment metadata attribute holding the measured ratio (before prefixing).
pub const ASPECT_RATIO_META: &str = "aspect-ratio";

/// Decimal places kept for every ratio.
pub const PRECISION: u32 = 3;

/// Default measurement time limit, matching a typical 30 second host execution cap.
pub const DEFAULT_TIME_LIMIT_SECS: u64 = 30;

/// Seconds reserved so a run can report its status before a host hard timeout.
pub const SAFETY_MARGIN_SECS: u64 = 3;
