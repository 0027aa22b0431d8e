//! Log output setup for the binary.

use crate::LoggingConfig;
use media_ratio_error::{ConfigError, MediaRatioResult};
use tracing_subscriber::{EnvFilter, Layer, layer::SubscriberExt, util::SubscriberInitExt};

/// How logs are filtered and formatted.
#[derive(Debug, Clone)]
pub struct ObservabilityConfig {
    /// Log level filter (e.g., "info", "media_ratio_classifier=debug")
    pub log_level: String,
    /// Enable JSON-formatted logs for structured logging
    pub json_logs: bool,
}

impl ObservabilityConfig {
    /// Start from the logging section of the configuration.
    pub fn new(logging: &LoggingConfig) -> Self {
        Self {
            log_level: logging.level().clone(),
            json_logs: *logging.json(),
        }
    }

    /// Set the log level.
    pub fn with_log_level(mut self, level: impl Into<String>) -> Self {
        self.log_level = level.into();
        self
    }

    /// Enable JSON-formatted logs.
    pub fn with_json_logs(mut self, enabled: bool) -> Self {
        self.json_logs = enabled;
        self
    }
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self::new(&LoggingConfig::default())
    }
}

/// Initialize logging from the configuration; `verbose` forces debug.
///
/// # Errors
///
/// Returns an error if the level is not a valid filter or a global
/// subscriber is already installed.
pub fn init_observability(logging: &LoggingConfig, verbose: bool) -> MediaRatioResult<()> {
    let mut config = ObservabilityConfig::new(logging);
    if verbose {
        config = config.with_log_level("debug");
    }
    init_observability_with_config(config, verbose)
}

/// Initialize logging with an explicit configuration.
///
/// `RUST_LOG` wins over `log_level` unless `force_level` is set. Logs go to
/// stderr so command output on stdout stays clean.
///
/// # Errors
///
/// Returns an error if the level is not a valid filter or a global
/// subscriber is already installed.
pub fn init_observability_with_config(
    config: ObservabilityConfig,
    force_level: bool,
) -> MediaRatioResult<()> {
    let from_env = if force_level {
        None
    } else {
        EnvFilter::try_from_default_env().ok()
    };
    let env_filter = match from_env {
        Some(filter) => filter,
        None => EnvFilter::try_new(&config.log_level).map_err(|e| {
            ConfigError::new(format!("Invalid log level '{}': {}", config.log_level, e))
        })?,
    };

    let fmt_layer = if config.json_logs {
        tracing_subscriber::fmt::layer()
            .json()
            .with_writer(std::io::stderr)
            .with_target(true)
            .with_level(true)
            .boxed()
    } else {
        tracing_subscriber::fmt::layer()
            .with_writer(std::io::stderr)
            .with_target(false)
            .with_level(true)
            .boxed()
    };

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt_layer)
        .try_init()
        .map_err(|e| ConfigError::new(format!("Failed to initialize logging: {}", e)))?;

    Ok(())
}
