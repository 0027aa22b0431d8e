//! Media by aspect ratio.
//!
//! Measures the aspect ratio of every image in a media library, stores it
//! as per-image metadata, and lets administrators filter the library by a
//! catalog of named ratios.
//!
//! # Quick Start
//!
//! ```rust
//! use media_ratio::{
//!     AttachmentId, AttachmentRecord, BatchClassifier, BatchStatus, Dimensions,
//!     InMemoryMediaLibrary, RatioCatalog, TimeLimit,
//! };
//!
//! # async fn example() -> media_ratio::MediaRatioResult<()> {
//! let library = InMemoryMediaLibrary::new();
//! library.insert(AttachmentRecord::image(AttachmentId::new(1), "image/jpeg", Dimensions::new(1920, 1080)));
//!
//! let catalog = RatioCatalog::with_defaults();
//! let outcome = BatchClassifier::new(&library, &catalog)
//!     .run(TimeLimit::Seconds(60))
//!     .await?;
//! assert_eq!(*outcome.status(), BatchStatus::Complete);
//! # Ok(())
//! # }
//! ```
//!
//! # Architecture
//!
//! The workspace is split into focused crates:
//!
//! - `media_ratio_error` - Error types
//! - `media_ratio_core` - Ratios, the catalog and time limits
//! - `media_ratio_storage` - Store traits and the in-memory and JSON file backends
//! - `media_ratio_classifier` - Time-boxed batch measurement
//! - `media_ratio_library` - Filter requests, the dropdown view model and hook wiring
//!
//! This crate re-exports everything and adds configuration, logging and the
//! `media-ratio` binary.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod config;
mod notice;
mod observability;

pub use config::{
    LoggingConfig, LoggingConfigBuilder, MeasureConfig, MeasureConfigBuilder, MediaRatioConfig,
    StorageConfig, StorageConfigBuilder,
};
pub use notice::Notice;
pub use observability::{ObservabilityConfig, init_observability, init_observability_with_config};

pub use media_ratio_classifier::{
    BatchClassifier, BatchOutcome, BatchStatus, Clock, ManualClock, SystemClock,
};
pub use media_ratio_core::{
    ASPECT_RATIO_META, ASPECT_RATIOS_OPTION, AspectRatio, AttachmentId, Budget, Classification,
    DEFAULT_TIME_LIMIT_SECS, Dimensions, OPTION_PREFIX, PLUGIN_SLUG, PRECISION, RatioCatalog,
    RatioValue, SAFETY_MARGIN_SECS, TimeLimit,
};
pub use media_ratio_error::{
    Axis, ConfigError, DimensionError, DimensionErrorKind, FilterError, FilterErrorKind,
    HookError, JsonError, MediaRatioError, MediaRatioErrorKind, MediaRatioResult, StorageError,
    StorageErrorKind, TimeLimitError, TimeLimitErrorKind,
};
pub use media_ratio_library::{
    Agent, DateFilter, FilterControl, FilterOption, FilterRequest, HookContext, HookDispatcher,
    HookEvent, HookHandler, HookOutput, HookRegistration, HookTable, HostEnvironment,
    MEASURE_COMMAND, MediaRatioPlugin, RatioFilter, RenderInput, ViewMode,
};
pub use media_ratio_storage::{
    AttachmentIndex, AttachmentMetaStore, AttachmentQuery, AttachmentRecord,
    FileSystemMediaLibrary, InMemoryMediaLibrary, MediaLibrary, MetaEquals, OptionStore,
    StoredNames, YearMonth, load_catalog, save_catalog, seed_default_catalog,
};
