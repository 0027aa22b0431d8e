//! Filesystem-based media library.
//!
//! Keeps the option store and the attachment table as two JSON documents so
//! the CLI can run without a host database.

use crate::{AttachmentIndex, AttachmentMetaStore, AttachmentQuery, AttachmentRecord, OptionStore};
use media_ratio_core::{AttachmentId, Dimensions};
use media_ratio_error::{MediaRatioResult, StorageError, StorageErrorKind};
use serde::Serialize;
use serde::de::DeserializeOwned;
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use tokio::sync::{MappedMutexGuard, Mutex, MutexGuard};

const OPTIONS_FILE: &str = "options.json";
const ATTACHMENTS_FILE: &str = "attachments.json";

type AttachmentTable = BTreeMap<AttachmentId, AttachmentRecord>;

/// Filesystem storage backend.
///
/// # Layout
///
/// ```text
/// {base_path}/
/// ├── options.json       {"media-by-aspect-ratio-aspect-ratios": {...}}
/// └── attachments.json   [{"id": 1, "mime_type": "image/png", "meta": {...}}, ...]
/// ```
///
/// Missing files read as empty. Every write goes to a temp file that is then
/// renamed over the original, so a crash never leaves half a document.
///
/// The attachment table is read from disk once and then served from memory;
/// each metadata update rewrites `attachments.json` so progress survives an
/// interrupted batch. One library instance is assumed to own the directory.
#[derive(Debug)]
pub struct FileSystemMediaLibrary {
    base_path: PathBuf,
    options_lock: Mutex<()>,
    attachments: Mutex<Option<AttachmentTable>>,
}

impl FileSystemMediaLibrary {
    /// Open (and create if needed) a library rooted at `base_path`.
    ///
    /// # Errors
    ///
    /// Returns error if the directory cannot be created.
    #[tracing::instrument(skip(base_path))]
    pub fn new(base_path: impl Into<PathBuf>) -> MediaRatioResult<Self> {
        let base_path = base_path.into();

        std::fs::create_dir_all(&base_path).map_err(|e| {
            StorageError::new(StorageErrorKind::DirectoryCreation(format!(
                "{}: {}",
                base_path.display(),
                e
            )))
        })?;

        tracing::info!(path = %base_path.display(), "Opened filesystem media library");
        Ok(Self {
            base_path,
            options_lock: Mutex::new(()),
            attachments: Mutex::new(None),
        })
    }

    /// Root directory of this library.
    pub fn base_path(&self) -> &Path {
        &self.base_path
    }

    /// Add or replace attachments, keyed by identifier. Returns how many were written.
    #[tracing::instrument(skip(self, records), fields(count = records.len()))]
    pub async fn import(&self, records: Vec<AttachmentRecord>) -> MediaRatioResult<usize> {
        let mut table = self.table().await?;
        let mut updated = table.clone();
        let count = records.len();
        for record in records {
            updated.insert(record.id, record);
        }
        self.save_attachments(&updated).await?;
        *table = updated;
        tracing::info!(imported = count, total = table.len(), "Imported attachments");
        Ok(count)
    }

    /// Every stored attachment, ascending by identifier.
    pub async fn records(&self) -> MediaRatioResult<Vec<AttachmentRecord>> {
        Ok(self.table().await?.values().cloned().collect())
    }

    fn options_path(&self) -> PathBuf {
        self.base_path.join(OPTIONS_FILE)
    }

    fn attachments_path(&self) -> PathBuf {
        self.base_path.join(ATTACHMENTS_FILE)
    }

    async fn load_options(&self) -> MediaRatioResult<BTreeMap<String, serde_json::Value>> {
        read_json(&self.options_path()).await
    }

    async fn load_attachments(&self) -> MediaRatioResult<AttachmentTable> {
        let records: Vec<AttachmentRecord> = read_json(&self.attachments_path()).await?;
        Ok(records.into_iter().map(|r| (r.id, r)).collect())
    }

    async fn save_attachments(&self, table: &AttachmentTable) -> MediaRatioResult<()> {
        let records: Vec<&AttachmentRecord> = table.values().collect();
        write_json(&self.attachments_path(), &records).await
    }

    /// The attachment table, loaded on first use. Holding the guard
    /// serializes every other attachment access.
    async fn table(&self) -> MediaRatioResult<MappedMutexGuard<'_, AttachmentTable>> {
        let mut cached = self.attachments.lock().await;
        if cached.is_none() {
            let table = self.load_attachments().await?;
            tracing::debug!(attachments = table.len(), "Loaded attachment table");
            *cached = Some(table);
        }
        Ok(MutexGuard::map(cached, |table| {
            table.get_or_insert_with(AttachmentTable::new)
        }))
    }

    async fn attachment(&self, id: AttachmentId) -> MediaRatioResult<AttachmentRecord> {
        self.table()
            .await?
            .get(&id)
            .cloned()
            .ok_or_else(|| StorageError::new(StorageErrorKind::NotFound(id.to_string())).into())
    }
}

async fn read_json<T>(path: &Path) -> MediaRatioResult<T>
where
    T: DeserializeOwned + Default,
{
    let contents = match tokio::fs::read_to_string(path).await {
        Ok(contents) => contents,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            tracing::debug!(path = %path.display(), "No file yet, reading as empty");
            return Ok(T::default());
        }
        Err(e) => {
            return Err(StorageError::new(StorageErrorKind::FileRead(format!(
                "{}: {}",
                path.display(),
                e
            )))
            .into());
        }
    };

    if contents.trim().is_empty() {
        return Ok(T::default());
    }

    serde_json::from_str(&contents).map_err(|e| {
        StorageError::new(StorageErrorKind::Corrupt(format!("{}: {}", path.display(), e))).into()
    })
}

async fn write_json<T>(path: &Path, value: &T) -> MediaRatioResult<()>
where
    T: Serialize + ?Sized,
{
    let contents = serde_json::to_string_pretty(value).map_err(|e| {
        StorageError::new(StorageErrorKind::Corrupt(format!("{}: {}", path.display(), e)))
    })?;

    // Write to temp file first, then rename for atomicity
    let temp_path = path.with_extension("tmp");
    tokio::fs::write(&temp_path, contents).await.map_err(|e| {
        StorageError::new(StorageErrorKind::FileWrite(format!(
            "{}: {}",
            temp_path.display(),
            e
        )))
    })?;

    tokio::fs::rename(&temp_path, path).await.map_err(|e| {
        StorageError::new(StorageErrorKind::FileWrite(format!(
            "rename {} to {}: {}",
            temp_path.display(),
            path.display(),
            e
        )))
    })?;

    tracing::debug!(path = %path.display(), "Wrote JSON document");
    Ok(())
}

#[async_trait::async_trait]
impl OptionStore for FileSystemMediaLibrary {
    #[tracing::instrument(skip(self))]
    async fn get_option(&self, name: &str) -> MediaRatioResult<Option<serde_json::Value>> {
        Ok(self.load_options().await?.remove(name))
    }

    #[tracing::instrument(skip(self, value))]
    async fn update_option(&self, name: &str, value: serde_json::Value) -> MediaRatioResult<()> {
        let _guard = self.options_lock.lock().await;
        let mut options = self.load_options().await?;
        options.insert(name.to_string(), value);
        write_json(&self.options_path(), &options).await?;
        tracing::info!(option = name, "Updated option");
        Ok(())
    }
}

#[async_trait::async_trait]
impl AttachmentMetaStore for FileSystemMediaLibrary {
    #[tracing::instrument(skip(self), fields(attachment_id = %id))]
    async fn dimensions(&self, id: AttachmentId) -> MediaRatioResult<Dimensions> {
        Ok(self.attachment(id).await?.dimensions)
    }

    #[tracing::instrument(skip(self), fields(attachment_id = %id))]
    async fn get_meta(&self, id: AttachmentId, key: &str) -> MediaRatioResult<Option<String>> {
        Ok(self.attachment(id).await?.meta.remove(key))
    }

    #[tracing::instrument(skip(self), fields(attachment_id = %id))]
    async fn update_meta(&self, id: AttachmentId, key: &str, value: &str) -> MediaRatioResult<()> {
        let mut table = self.table().await?;
        let record = table
            .get_mut(&id)
            .ok_or_else(|| StorageError::new(StorageErrorKind::NotFound(id.to_string())))?;

        if record.meta.get(key).map(String::as_str) == Some(value) {
            tracing::debug!(key, value, "Attribute unchanged");
            return Ok(());
        }

        let previous = record.meta.insert(key.to_string(), value.to_string());
        if let Err(e) = self.save_attachments(&table).await {
            // Keep memory in step with the document on disk.
            if let Some(record) = table.get_mut(&id) {
                match previous {
                    Some(previous) => record.meta.insert(key.to_string(), previous),
                    None => record.meta.remove(key),
                };
            }
            return Err(e);
        }
        tracing::debug!(key, value, "Updated attribute");
        Ok(())
    }
}

#[async_trait::async_trait]
impl AttachmentIndex for FileSystemMediaLibrary {
    #[tracing::instrument(skip(self, query))]
    async fn find_ids(&self, query: &AttachmentQuery) -> MediaRatioResult<Vec<AttachmentId>> {
        let ids: Vec<AttachmentId> = self
            .table()
            .await?
            .values()
            .filter(|record| record.matches(query))
            .map(|record| record.id)
            .collect();
        tracing::debug!(matched = ids.len(), "Queried attachments");
        Ok(ids)
    }
}
