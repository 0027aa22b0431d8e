//! Media library filtering and host wiring for media_ratio.
//!
//! The host CMS hands us raw query-string parameters and an event dispatcher.
//! This crate turns the former into a typed [`FilterRequest`] once, at the
//! boundary, and exposes a single [`FilterRequest::apply`] mapping shared by
//! the grid and list views. [`FilterControl`] is the view model for the ratio
//! dropdown. [`MediaRatioPlugin`] describes which handlers attach to which
//! host events as an explicit [`HookTable`], and
//! [`MediaRatioPlugin::dispatch`] runs the handlers attached to an event.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod agent;
mod control;
mod dispatch;
mod environment;
mod hooks;
mod plugin;
mod request;

pub use agent::Agent;
pub use control::{ALL_RATIOS_TEXT, FilterControl, FilterOption, RenderInput};
pub use dispatch::{HookContext, HookOutput, MEASURE_COMMAND};
pub use environment::{HostEnvironment, HostEnvironmentBuilder, HostEnvironmentBuilderError};
pub use hooks::{DEFAULT_PRIORITY, HookDispatcher, HookEvent, HookHandler, HookRegistration, HookTable};
pub use plugin::MediaRatioPlugin;
pub use request::{
    ALL_DATES, ALL_RATIOS, DATE_FILTER_PARAM, DateFilter, FilterRequest, MODE_PARAM,
    RATIO_FILTER_PARAM, RatioFilter, ViewMode,
};

pub use media_ratio_error::{FilterError, FilterErrorKind, HookError};
