//! Storage seams for media_ratio.
//!
//! The host CMS owns three stores this workspace reads and writes:
//!
//! - an **option store** holding process-wide configuration such as the ratio catalog,
//! - a **metadata store** holding per-attachment attributes such as the measured ratio,
//! - an **attachment index** answering "which attachments match these constraints".
//!
//! Each is a trait so the classifier and the filter mapping never depend on a
//! concrete host. Two backends ship here: [`InMemoryMediaLibrary`] for tests and
//! embedding, and [`FileSystemMediaLibrary`], which keeps JSON files on disk for the CLI.
//!
//! # Example
//!
//! ```rust
//! use media_ratio_core::{AttachmentId, Dimensions};
//! use media_ratio_storage::{
//!     AttachmentIndex, AttachmentQuery, AttachmentRecord, InMemoryMediaLibrary, StoredNames,
//! };
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let library = InMemoryMediaLibrary::new();
//! library.insert(AttachmentRecord::image(AttachmentId::new(7), "image/png", Dimensions::new(4, 3)));
//!
//! let names = StoredNames::default();
//! let ids = library
//!     .find_ids(&AttachmentQuery::unmeasured_images(names.meta("aspect-ratio")))
//!     .await?;
//! assert_eq!(ids, vec![AttachmentId::new(7)]);
//! # Ok(())
//! # }
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod catalog;
mod filesystem;
mod memory;
mod names;
mod query;
mod record;
mod traits;

pub use catalog::{load_catalog, save_catalog, seed_default_catalog};
pub use filesystem::FileSystemMediaLibrary;
pub use memory::InMemoryMediaLibrary;
pub use names::StoredNames;
pub use query::{
    ATTACHMENT_POST_TYPE, AttachmentQuery, IMAGE_MIME_TYPE, INHERIT_STATUS, MetaEquals, YearMonth,
};
pub use record::AttachmentRecord;
pub use traits::{AttachmentIndex, AttachmentMetaStore, MediaLibrary, OptionStore};

pub use media_ratio_error::{StorageError, StorageErrorKind};
