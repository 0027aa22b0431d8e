//! Configuration loading.
//!
//! Settings come from TOML with this precedence (later overrides earlier):
//! 1. Bundled defaults (include_str! from media_ratio.toml)
//! 2. ~/.config/media_ratio/media_ratio.toml
//! 3. ./media_ratio.toml
//!
//! An explicit `--config` file replaces steps 2 and 3.

use config::{Config, File, FileFormat};
use media_ratio_core::{DEFAULT_TIME_LIMIT_SECS, OPTION_PREFIX, SAFETY_MARGIN_SECS};
use media_ratio_error::{ConfigError, MediaRatioError, MediaRatioResult};
use media_ratio_storage::StoredNames;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::{debug, instrument};

const DEFAULT_CONFIG: &str = include_str!("../../../media_ratio.toml");

/// Where library data lives.
#[derive(
    Debug,
    Clone,
    PartialEq,
    Eq,
    Serialize,
    Deserialize,
    derive_getters::Getters,
    derive_setters::Setters,
    derive_builder::Builder,
)]
#[setters(prefix = "with_", into)]
pub struct StorageConfig {
    /// Directory holding the JSON documents
    #[serde(default = "default_data_dir")]
    data_dir: PathBuf,

    /// Prefix for option and metadata names
    #[serde(default = "default_option_prefix")]
    option_prefix: String,
}

fn default_data_dir() -> PathBuf {
    dirs::data_local_dir()
        .map(|dir| dir.join("media_ratio"))
        .unwrap_or_else(|| PathBuf::from(".media_ratio"))
}

fn default_option_prefix() -> String {
    OPTION_PREFIX.to_string()
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            data_dir: default_data_dir(),
            option_prefix: default_option_prefix(),
        }
    }
}

/// Measure command settings.
#[derive(
    Debug,
    Clone,
    PartialEq,
    Eq,
    Serialize,
    Deserialize,
    derive_getters::Getters,
    derive_setters::Setters,
    derive_builder::Builder,
)]
#[setters(prefix = "with_")]
pub struct MeasureConfig {
    /// Time limit when `--time-limit` is absent or unusable (0 = none)
    #[serde(default = "default_time_limit")]
    default_time_limit: u64,

    /// Seconds reserved out of the time limit
    #[serde(default = "default_safety_margin")]
    safety_margin_secs: u64,
}

fn default_time_limit() -> u64 {
    DEFAULT_TIME_LIMIT_SECS
}

fn default_safety_margin() -> u64 {
    SAFETY_MARGIN_SECS
}

impl Default for MeasureConfig {
    fn default() -> Self {
        Self {
            default_time_limit: default_time_limit(),
            safety_margin_secs: default_safety_margin(),
        }
    }
}

/// Log output settings.
#[derive(
    Debug,
    Clone,
    PartialEq,
    Eq,
    Serialize,
    Deserialize,
    derive_getters::Getters,
    derive_setters::Setters,
    derive_builder::Builder,
)]
#[setters(prefix = "with_")]
pub struct LoggingConfig {
    /// Filter used when `RUST_LOG` is unset
    #[serde(default = "default_level")]
    #[setters(into)]
    level: String,

    /// JSON lines instead of text
    #[serde(default)]
    json: bool,
}

fn default_level() -> String {
    "info".to_string()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_level(),
            json: false,
        }
    }
}

/// Top-level media_ratio configuration.
///
/// # Example
///
/// ```no_run
/// use media_ratio::MediaRatioConfig;
///
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let config = MediaRatioConfig::load()?;
/// println!("Data in {}", config.storage().data_dir().display());
/// # Ok(())
/// # }
/// ```
#[derive(
    Debug,
    Clone,
    Default,
    PartialEq,
    Eq,
    Serialize,
    Deserialize,
    derive_getters::Getters,
    derive_setters::Setters,
)]
#[setters(prefix = "with_")]
pub struct MediaRatioConfig {
    /// Storage settings
    #[serde(default)]
    storage: StorageConfig,

    /// Measure command settings
    #[serde(default)]
    measure: MeasureConfig,

    /// Logging settings
    #[serde(default)]
    logging: LoggingConfig,
}

impl MediaRatioConfig {
    /// Bundled defaults only.
    ///
    /// # Errors
    ///
    /// Returns an error if the bundled file does not parse.
    pub fn bundled() -> MediaRatioResult<Self> {
        build(Config::builder().add_source(File::from_str(DEFAULT_CONFIG, FileFormat::Toml)))
    }

    /// Bundled defaults overridden by one explicit file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> MediaRatioResult<Self> {
        debug!("Loading configuration from file");

        if !path.as_ref().exists() {
            return Err(ConfigError::new(format!(
                "Configuration file not found: {}",
                path.as_ref().display()
            ))
            .into());
        }

        build(
            Config::builder()
                .add_source(File::from_str(DEFAULT_CONFIG, FileFormat::Toml))
                .add_source(File::from(path.as_ref()).format(FileFormat::Toml)),
        )
    }

    /// Load configuration with precedence: current dir > home dir > bundled defaults.
    ///
    /// User config files are optional and silently skipped when missing.
    ///
    /// # Errors
    ///
    /// Returns an error if any present file fails to parse.
    #[instrument]
    pub fn load() -> MediaRatioResult<Self> {
        debug!("Loading configuration with precedence: current dir > home dir > bundled defaults");

        let mut builder =
            Config::builder().add_source(File::from_str(DEFAULT_CONFIG, FileFormat::Toml));

        if let Some(home) = dirs::home_dir() {
            let home_config = home.join(".config/media_ratio/media_ratio.toml");
            builder = builder.add_source(File::from(home_config).required(false));
        }

        builder = builder.add_source(File::with_name("media_ratio").required(false));

        build(builder)
    }

    /// Stored-name prefixes for the configured option prefix.
    pub fn names(&self) -> StoredNames {
        StoredNames::new(self.storage.option_prefix.clone())
    }
}

fn build(
    builder: config::ConfigBuilder<config::builder::DefaultState>,
) -> MediaRatioResult<MediaRatioConfig> {
    builder
        .build()
        .map_err(|e| {
            MediaRatioError::from(ConfigError::new(format!(
                "Failed to build configuration: {}",
                e
            )))
        })?
        .try_deserialize()
        .map_err(|e| {
            MediaRatioError::from(ConfigError::new(format!(
                "Failed to parse configuration: {}",
                e
            )))
        })
}
