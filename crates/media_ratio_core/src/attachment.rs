//! Host attachment identifiers and what we know about their dimensions.

use crate::RatioValue;
use serde::{Deserialize, Serialize};

/// Identifier of an attachment in the host media library.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    Serialize,
    Deserialize,
    derive_more::Display,
    derive_more::From,
)]
#[serde(transparent)]
pub struct AttachmentId(u64);

impl AttachmentId {
    /// Wrap a raw host identifier.
    pub fn new(id: u64) -> Self {
        Self(id)
    }

    /// The raw host identifier.
    pub fn get(&self) -> u64 {
        self.0
    }
}

/// Width and height recorded by the host for an uploaded image.
///
/// Either side may be missing when the host never extracted it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Dimensions {
    /// Width in pixels
    #[serde(default)]
    pub width: Option<u32>,
    /// Height in pixels
    #[serde(default)]
    pub height: Option<u32>,
}

impl Dimensions {
    /// Both sides known.
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width: Some(width),
            height: Some(height),
        }
    }

    /// Ratio to store for this image.
    ///
    /// Missing sides (and a zero height) yield [`RatioValue::UNMEASURED`] so the
    /// image is still marked as measured and never re-selected.
    pub fn ratio(&self) -> RatioValue {
        match (self.width, self.height) {
            (Some(width), Some(height)) => {
                RatioValue::from_dimensions(width, height).unwrap_or(RatioValue::UNMEASURED)
            }
            _ => RatioValue::UNMEASURED,
        }
    }
}

/// Whether an attachment has been measured yet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Classification {
    /// No ratio stored
    #[default]
    Unclassified,
    /// Ratio stored (possibly the unmeasured sentinel)
    Classified(RatioValue),
}

impl Classification {
    /// The stored ratio, if any.
    pub fn ratio(&self) -> Option<RatioValue> {
        match self {
            Classification::Unclassified => None,
            Classification::Classified(ratio) => Some(*ratio),
        }
    }
}
