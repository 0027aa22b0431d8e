//! Reading and writing the ratio catalog through an option store.

use crate::{OptionStore, StoredNames};
use media_ratio_core::{ASPECT_RATIOS_OPTION, RatioCatalog};
use media_ratio_error::{JsonError, MediaRatioResult};
use tracing::{debug, info, instrument};

/// Load the catalog; an absent or empty option yields an empty catalog.
///
/// # Errors
///
/// Store failures, or `JsonError` when the stored value is not a catalog.
#[instrument(skip(store, names))]
pub async fn load_catalog<S>(store: &S, names: &StoredNames) -> MediaRatioResult<RatioCatalog>
where
    S: OptionStore + ?Sized,
{
    let name = names.option(ASPECT_RATIOS_OPTION);
    let catalog = match store.get_option(&name).await? {
        None | Some(serde_json::Value::Null) => RatioCatalog::new(),
        Some(serde_json::Value::Array(items)) if items.is_empty() => RatioCatalog::new(),
        Some(value) => serde_json::from_value(value)
            .map_err(|e| JsonError::new(format!("Failed to parse {}: {}", name, e)))?,
    };
    debug!(entries = catalog.len(), "Loaded ratio catalog");
    Ok(catalog)
}

/// Persist the catalog, replacing whatever was stored.
#[instrument(skip(store, names, catalog), fields(entries = catalog.len()))]
pub async fn save_catalog<S>(
    store: &S,
    names: &StoredNames,
    catalog: &RatioCatalog,
) -> MediaRatioResult<()>
where
    S: OptionStore + ?Sized,
{
    let value = serde_json::to_value(catalog)
        .map_err(|e| JsonError::new(format!("Failed to serialize catalog: {}", e)))?;
    store
        .update_option(&names.option(ASPECT_RATIOS_OPTION), value)
        .await?;
    info!("Saved ratio catalog");
    Ok(())
}

/// Write the four default ratios unless a catalog already exists.
///
/// Returns `true` when the defaults were written.
#[instrument(skip(store, names))]
pub async fn seed_default_catalog<S>(store: &S, names: &StoredNames) -> MediaRatioResult<bool>
where
    S: OptionStore + ?Sized,
{
    if !load_catalog(store, names).await?.is_empty() {
        debug!("Ratio catalog already present, not seeding");
        return Ok(false);
    }
    save_catalog(store, names, &RatioCatalog::with_defaults()).await?;
    Ok(true)
}
