//! CLI command definitions.

use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// media-ratio - Classify media library images by aspect ratio
#[derive(Parser, Debug)]
#[command(name = "media-ratio")]
#[command(about = "Classify media library images by aspect ratio", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Command to execute
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Configuration file to use instead of the user and local ones
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Library data directory (overrides storage.data_dir)
    #[arg(long, global = true)]
    pub data_dir: Option<PathBuf>,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Measure every image that has no stored aspect ratio
    Measure {
        /// Seconds to run before stopping; 0 for no limit
        #[arg(long = "time-limit", visible_alias = "timeout", allow_hyphen_values = true)]
        time_limit: Option<String>,

        /// Output format
        #[arg(long, default_value = "human")]
        format: OutputFormat,
    },

    /// Write the default aspect ratios if none are configured
    Activate,

    /// Aspect ratio catalog commands
    #[command(subcommand)]
    Ratios(RatioCommands),

    /// Media library commands
    #[command(subcommand)]
    Library(LibraryCommands),
}

/// Catalog subcommands
#[derive(Subcommand, Debug)]
pub enum RatioCommands {
    /// List configured aspect ratios in display order
    List {
        /// Output format
        #[arg(long, default_value = "human")]
        format: OutputFormat,
    },

    /// Add an aspect ratio, replacing one with the same value
    Add {
        /// Width component
        #[arg(allow_negative_numbers = true)]
        width: i64,

        /// Height component
        #[arg(allow_negative_numbers = true)]
        height: i64,

        /// Display name
        #[arg(long, default_value = "")]
        name: String,
    },

    /// Remove the aspect ratio with the given key (e.g. 1.778)
    Remove {
        /// Ratio key
        key: String,
    },
}

/// Media library subcommands
#[derive(Subcommand, Debug)]
pub enum LibraryCommands {
    /// Add attachment records from a JSON array
    Import {
        /// Path to the JSON file
        file: PathBuf,
    },

    /// List attachments matching media library filter parameters
    Filter {
        /// Query string, e.g. "media-attachment-ratio-filters=1.778"
        #[arg(long, default_value = "")]
        query: String,

        /// Output format
        #[arg(long, default_value = "human")]
        format: OutputFormat,
    },
}

/// Output format options
#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum OutputFormat {
    /// Human-readable format
    Human,
    /// JSON format
    Json,
}
