//! Catalog administration commands.

use super::{Context, OutputFormat, RatioCommands, print_json};
use media_ratio::{
    FilterError, FilterErrorKind, MediaRatioResult, Notice, RatioValue, load_catalog,
    save_catalog,
};

/// Handle catalog commands.
pub async fn handle_ratio_command(ctx: &Context, cmd: RatioCommands) -> MediaRatioResult<()> {
    match cmd {
        RatioCommands::List { format } => list(ctx, format).await,
        RatioCommands::Add {
            width,
            height,
            name,
        } => add(ctx, width, height, name).await,
        RatioCommands::Remove { key } => remove(ctx, &key).await,
    }
}

async fn list(ctx: &Context, format: OutputFormat) -> MediaRatioResult<()> {
    let catalog = load_catalog(&ctx.library, &ctx.names).await?;

    match format {
        OutputFormat::Json => print_json(&catalog)?,
        OutputFormat::Human => {
            if catalog.is_empty() {
                Notice::warning("No aspect ratios configured; run `media-ratio activate`.").print();
            }
            for (key, ratio) in catalog.entries() {
                println!("{:<8} {}", key, ratio.label());
            }
        }
    }
    Ok(())
}

async fn add(ctx: &Context, width: i64, height: i64, name: String) -> MediaRatioResult<()> {
    let mut catalog = load_catalog(&ctx.library, &ctx.names).await?;
    let replaced = catalog.len();
    let ratio = catalog.add(width, height, name)?;
    save_catalog(&ctx.library, &ctx.names, &catalog).await?;

    if catalog.len() == replaced {
        Notice::success(format!("Replaced {} with {}.", ratio.ratio(), ratio.label())).print();
    } else {
        Notice::success(format!("Added {} ({}).", ratio.label(), ratio.ratio())).print();
    }
    Ok(())
}

async fn remove(ctx: &Context, key: &str) -> MediaRatioResult<()> {
    let key: RatioValue = key
        .parse()
        .map_err(|_| FilterError::new(FilterErrorKind::InvalidRatio(key.to_string())))?;

    let mut catalog = load_catalog(&ctx.library, &ctx.names).await?;
    match catalog.remove(key) {
        Some(ratio) => {
            save_catalog(&ctx.library, &ctx.names, &catalog).await?;
            Notice::success(format!("Removed {}.", ratio.label())).print();
        }
        None => Notice::warning(format!("No aspect ratio with key {}.", key)).print(),
    }
    Ok(())
}
