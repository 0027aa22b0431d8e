//! Command-line interface module.
//!
//! This module provides the CLI structure and command handlers for the
//! media-ratio binary.

mod activate;
mod commands;
mod library;
mod measure;
mod ratios;

pub use activate::handle_activate;
pub use commands::{Cli, Commands, LibraryCommands, OutputFormat, RatioCommands};
pub use library::handle_library_command;
pub use measure::handle_measure;
pub use ratios::handle_ratio_command;

use media_ratio::{
    FileSystemMediaLibrary, JsonError, MediaRatioConfig, MediaRatioResult, StoredNames,
};
use serde::Serialize;

/// What every handler needs.
pub struct Context {
    /// Effective configuration
    pub config: MediaRatioConfig,
    /// Stored-name prefixes
    pub names: StoredNames,
    /// The library on disk
    pub library: FileSystemMediaLibrary,
}

impl Context {
    /// Open the library the configuration points at.
    pub fn open(config: MediaRatioConfig) -> MediaRatioResult<Self> {
        let library = FileSystemMediaLibrary::new(config.storage().data_dir())?;
        Ok(Self {
            names: config.names(),
            config,
            library,
        })
    }
}

/// Pretty-print a value as JSON on stdout.
pub fn print_json<T: Serialize + ?Sized>(value: &T) -> MediaRatioResult<()> {
    let json = serde_json::to_string_pretty(value)
        .map_err(|e| JsonError::new(format!("Failed to serialize output: {}", e)))?;
    println!("{}", json);
    Ok(())
}
