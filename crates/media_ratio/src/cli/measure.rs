//! The measure command.

use super::{Context, OutputFormat, print_json};
use media_ratio::{BatchClassifier, MediaRatioResult, Notice, load_catalog};

/// Measure unmeasured images within the time limit.
pub async fn handle_measure(
    ctx: &Context,
    time_limit: Option<&str>,
    format: OutputFormat,
) -> MediaRatioResult<()> {
    let catalog = load_catalog(&ctx.library, &ctx.names).await?;
    if catalog.is_empty() {
        tracing::warn!("No aspect ratios configured; images are measured but none will match");
    }

    let measure = ctx.config.measure();
    let outcome = BatchClassifier::new(&ctx.library, &catalog)
        .with_names(ctx.names.clone())
        .with_safety_margin(*measure.safety_margin_secs())
        .run_with_flag(time_limit, *measure.default_time_limit())
        .await?;

    match format {
        OutputFormat::Json => print_json(&outcome)?,
        OutputFormat::Human => Notice::from_outcome(&outcome).print(),
    }
    Ok(())
}
