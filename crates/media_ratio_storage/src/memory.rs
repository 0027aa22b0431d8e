//! In-memory backend.

use crate::{AttachmentIndex, AttachmentMetaStore, AttachmentQuery, AttachmentRecord, OptionStore};
use media_ratio_core::{AttachmentId, Dimensions};
use media_ratio_error::{MediaRatioResult, StorageError, StorageErrorKind};
use std::collections::{BTreeMap, HashMap};
use std::sync::{Mutex, MutexGuard};
use tracing::warn;

/// A media library held entirely in memory.
///
/// Useful for tests and for embedding the classifier in a host that hands
/// over a snapshot. Attachments are kept sorted by identifier.
#[derive(Debug, Default)]
pub struct InMemoryMediaLibrary {
    options: Mutex<HashMap<String, serde_json::Value>>,
    attachments: Mutex<BTreeMap<AttachmentId, AttachmentRecord>>,
}

impl InMemoryMediaLibrary {
    /// An empty library.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add or replace an attachment.
    ///
    /// A poisoned store drops the record with a warning; reads then report
    /// the store as unavailable.
    pub fn insert(&self, record: AttachmentRecord) {
        match self.attachments() {
            Ok(mut attachments) => {
                attachments.insert(record.id, record);
            }
            Err(e) => warn!(attachment_id = %record.id, error = %e, "Attachment not inserted"),
        }
    }

    /// A copy of one attachment, if present.
    pub fn record(&self, id: AttachmentId) -> Option<AttachmentRecord> {
        self.attachments.lock().ok()?.get(&id).cloned()
    }

    fn options(&self) -> MediaRatioResult<MutexGuard<'_, HashMap<String, serde_json::Value>>> {
        self.options
            .lock()
            .map_err(|_| StorageError::unavailable("option store lock poisoned").into())
    }

    fn attachments(
        &self,
    ) -> MediaRatioResult<MutexGuard<'_, BTreeMap<AttachmentId, AttachmentRecord>>> {
        self.attachments
            .lock()
            .map_err(|_| StorageError::unavailable("attachment store lock poisoned").into())
    }
}

#[async_trait::async_trait]
impl OptionStore for InMemoryMediaLibrary {
    async fn get_option(&self, name: &str) -> MediaRatioResult<Option<serde_json::Value>> {
        Ok(self.options()?.get(name).cloned())
    }

    async fn update_option(&self, name: &str, value: serde_json::Value) -> MediaRatioResult<()> {
        self.options()?.insert(name.to_string(), value);
        Ok(())
    }
}

#[async_trait::async_trait]
impl AttachmentMetaStore for InMemoryMediaLibrary {
    async fn dimensions(&self, id: AttachmentId) -> MediaRatioResult<Dimensions> {
        self.attachments()?
            .get(&id)
            .map(|record| record.dimensions)
            .ok_or_else(|| StorageError::new(StorageErrorKind::NotFound(id.to_string())).into())
    }

    async fn get_meta(&self, id: AttachmentId, key: &str) -> MediaRatioResult<Option<String>> {
        let attachments = self.attachments()?;
        let record = attachments
            .get(&id)
            .ok_or_else(|| StorageError::new(StorageErrorKind::NotFound(id.to_string())))?;
        Ok(record.meta.get(key).cloned())
    }

    async fn update_meta(&self, id: AttachmentId, key: &str, value: &str) -> MediaRatioResult<()> {
        let mut attachments = self.attachments()?;
        let record = attachments
            .get_mut(&id)
            .ok_or_else(|| StorageError::new(StorageErrorKind::NotFound(id.to_string())))?;
        record.meta.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

#[async_trait::async_trait]
impl AttachmentIndex for InMemoryMediaLibrary {
    async fn find_ids(&self, query: &AttachmentQuery) -> MediaRatioResult<Vec<AttachmentId>> {
        Ok(self
            .attachments()?
            .values()
            .filter(|record| record.matches(query))
            .map(|record| record.id)
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn poisoned_store_is_reported_unavailable() {
        let library = InMemoryMediaLibrary::new();
        std::thread::scope(|scope| {
            let crashed = scope
                .spawn(|| {
                    let _guard = library.attachments.lock().unwrap();
                    panic!("writer crashed while holding the lock");
                })
                .join();
            assert!(crashed.is_err());
        });

        library.insert(AttachmentRecord::image(
            AttachmentId::new(1),
            "image/png",
            Dimensions::new(4, 3),
        ));

        assert!(library.record(AttachmentId::new(1)).is_none());
        let err = library
            .find_ids(&AttachmentQuery::images())
            .await
            .unwrap_err();
        assert!(err.is_storage_unavailable());
        let err = library.dimensions(AttachmentId::new(1)).await.unwrap_err();
        assert!(err.is_storage_unavailable());
    }
}
