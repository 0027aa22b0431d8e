//! media-ratio CLI binary.
//!
//! - Measure unmeasured images within a time limit
//! - Seed and edit the aspect ratio catalog
//! - Import attachments and query the library by ratio and month

use clap::Parser;
use media_ratio::{MediaRatioConfig, MediaRatioResult, Notice, init_observability};
use std::process::ExitCode;

mod cli;

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    // Load environment variables from .env if present
    let _ = dotenvy::dotenv();

    let cli = cli::Cli::parse();

    match run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!(error = %e, "Command failed");
            Notice::error(e.kind()).print();
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: cli::Cli) -> MediaRatioResult<()> {
    use cli::{
        Commands, Context, handle_activate, handle_library_command, handle_measure,
        handle_ratio_command,
    };

    let mut config = match &cli.config {
        Some(path) => MediaRatioConfig::from_file(path)?,
        None => MediaRatioConfig::load()?,
    };

    init_observability(config.logging(), cli.verbose)?;

    if let Some(data_dir) = cli.data_dir {
        let storage = config.storage().clone().with_data_dir(data_dir);
        config = config.with_storage(storage);
    }

    let ctx = Context::open(config)?;

    match cli.command {
        Commands::Measure { time_limit, format } => {
            handle_measure(&ctx, time_limit.as_deref(), format).await
        }
        Commands::Activate => handle_activate(&ctx).await,
        Commands::Ratios(cmd) => handle_ratio_command(&ctx, cmd).await,
        Commands::Library(cmd) => handle_library_command(&ctx, cmd).await,
    }
}
