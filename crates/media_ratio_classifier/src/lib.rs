//! Aspect-ratio measurement for media libraries.
//!
//! [`BatchClassifier`] selects every image that has no stored ratio, measures
//! each one in identifier order, writes the result back, and stops early when
//! its wall-clock budget runs out. State lives entirely in the metadata store,
//! so a [`BatchStatus::Partial`] run is continued by simply running again.
//!
//! # Example
//!
//! ```rust
//! use media_ratio_classifier::{BatchClassifier, BatchStatus};
//! use media_ratio_core::{AttachmentId, Dimensions, RatioCatalog, TimeLimit};
//! use media_ratio_storage::{AttachmentRecord, InMemoryMediaLibrary};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let library = InMemoryMediaLibrary::new();
//! library.insert(AttachmentRecord::image(AttachmentId::new(1), "image/png", Dimensions::new(1920, 1080)));
//!
//! let catalog = RatioCatalog::with_defaults();
//! let outcome = BatchClassifier::new(&library, &catalog)
//!     .run(TimeLimit::default())
//!     .await?;
//!
//! assert_eq!(*outcome.status(), BatchStatus::Complete);
//! assert_eq!(*outcome.processed(), 1);
//! # Ok(())
//! # }
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod classifier;
mod clock;
mod outcome;

pub use classifier::BatchClassifier;
pub use clock::{Clock, ManualClock, SystemClock};
pub use outcome::{BatchOutcome, BatchStatus};
