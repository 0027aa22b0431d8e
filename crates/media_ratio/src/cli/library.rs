//! Media library commands.

use super::{Context, LibraryCommands, OutputFormat, print_json};
use media_ratio::{
    AttachmentRecord, FilterRequest, HostEnvironment, JsonError, MediaRatioPlugin,
    MediaRatioResult, Notice, StorageError, StorageErrorKind,
};
use std::path::Path;

/// Handle media library commands.
pub async fn handle_library_command(ctx: &Context, cmd: LibraryCommands) -> MediaRatioResult<()> {
    match cmd {
        LibraryCommands::Import { file } => import(ctx, &file).await,
        LibraryCommands::Filter { query, format } => filter(ctx, &query, format).await,
    }
}

async fn import(ctx: &Context, file: &Path) -> MediaRatioResult<()> {
    let contents = tokio::fs::read_to_string(file).await.map_err(|e| {
        StorageError::new(StorageErrorKind::FileRead(format!("{}: {}", file.display(), e)))
    })?;
    let records: Vec<AttachmentRecord> = serde_json::from_str(&contents)
        .map_err(|e| JsonError::new(format!("Failed to parse {}: {}", file.display(), e)))?;

    let count = ctx.library.import(records).await?;
    Notice::success(format!("Imported {} attachments.", count)).print();
    Ok(())
}

async fn filter(ctx: &Context, query: &str, format: OutputFormat) -> MediaRatioResult<()> {
    let request = FilterRequest::from_query_string(query)?;
    let plugin = MediaRatioPlugin::new(ctx.names.clone(), &HostEnvironment::media_admin());
    let ids = plugin.find_attachments(&ctx.library, &request).await?;

    match format {
        OutputFormat::Json => print_json(&ids)?,
        OutputFormat::Human => {
            if ids.is_empty() {
                Notice::warning("No attachments match.").print();
            }
            for id in &ids {
                println!("{}", id);
            }
        }
    }
    Ok(())
}
