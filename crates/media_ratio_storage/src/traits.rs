//! Store trait definitions.

use crate::AttachmentQuery;
use media_ratio_core::{AttachmentId, Dimensions};
use media_ratio_error::MediaRatioResult;

/// Process-wide key/value configuration storage.
///
/// Names passed here are already prefixed (see [`crate::StoredNames`]).
#[async_trait::async_trait]
pub trait OptionStore: Send + Sync {
    /// Read an option; `None` when it was never written.
    async fn get_option(&self, name: &str) -> MediaRatioResult<Option<serde_json::Value>>;

    /// Create or replace an option.
    async fn update_option(&self, name: &str, value: serde_json::Value) -> MediaRatioResult<()>;
}

/// Per-attachment metadata storage.
#[async_trait::async_trait]
pub trait AttachmentMetaStore: Send + Sync {
    /// Width and height the host recorded when the file was uploaded.
    ///
    /// # Errors
    ///
    /// `NotFound` when the attachment does not exist, or a read failure.
    async fn dimensions(&self, id: AttachmentId) -> MediaRatioResult<Dimensions>;

    /// Read one attribute; `None` when absent.
    async fn get_meta(&self, id: AttachmentId, key: &str) -> MediaRatioResult<Option<String>>;

    /// Create or replace one attribute. Writing the same value twice is a no-op.
    async fn update_meta(&self, id: AttachmentId, key: &str, value: &str) -> MediaRatioResult<()>;
}

/// Attachment selection.
#[async_trait::async_trait]
pub trait AttachmentIndex: Send + Sync {
    /// Identifiers of attachments matching every constraint, ascending.
    async fn find_ids(&self, query: &AttachmentQuery) -> MediaRatioResult<Vec<AttachmentId>>;
}

/// A host that provides all three stores.
pub trait MediaLibrary: OptionStore + AttachmentMetaStore + AttachmentIndex {}

impl<T> MediaLibrary for T where T: OptionStore + AttachmentMetaStore + AttachmentIndex {}
