//! Named aspect ratios.

use crate::RatioValue;
use media_ratio_error::{Axis, DimensionError};
use serde::{Deserialize, Serialize};

/// A named width:height proportion, such as `16:9`.
///
/// Both sides are strictly positive; construction fails otherwise. The value
/// is immutable: editing a ratio means building a new one.
///
/// # Examples
///
/// ```
/// use media_ratio_core::AspectRatio;
///
/// let wide = AspectRatio::new(16, 9, "Widescreen").unwrap();
/// assert_eq!(wide.ratio().to_string(), "1.778");
/// assert_eq!(wide.label(), "Widescreen (16:9)");
///
/// let square = AspectRatio::new(1, 1, "").unwrap();
/// assert_eq!(square.label(), "1:1");
///
/// assert!(AspectRatio::new(0, 9, "").is_err());
/// ```
#[derive(
    Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, derive_getters::Getters,
)]
#[serde(try_from = "AspectRatioRecord")]
pub struct AspectRatio {
    /// Horizontal proportion
    width: u32,
    /// Vertical proportion
    height: u32,
    /// Optional display name; empty when unnamed
    #[serde(default)]
    name: String,
}

/// Unvalidated shape of a stored ratio.
#[derive(Deserialize)]
struct AspectRatioRecord {
    width: i64,
    height: i64,
    #[serde(default)]
    name: String,
}

impl TryFrom<AspectRatioRecord> for AspectRatio {
    type Error = DimensionError;

    fn try_from(record: AspectRatioRecord) -> Result<Self, Self::Error> {
        AspectRatio::new(record.width, record.height, record.name)
    }
}

impl AspectRatio {
    /// Build a ratio, rejecting non-positive (or out of range) sides.
    ///
    /// # Errors
    ///
    /// Returns `InvalidDimension` naming the first offending axis.
    #[track_caller]
    pub fn new(width: i64, height: i64, name: impl Into<String>) -> Result<Self, DimensionError> {
        let width = positive(width).ok_or_else(|| DimensionError::invalid(Axis::Width, width))?;
        let height =
            positive(height).ok_or_else(|| DimensionError::invalid(Axis::Height, height))?;

        Ok(Self {
            width,
            height,
            name: name.into(),
        })
    }

    /// `width / height` rounded to three places.
    pub fn ratio(&self) -> RatioValue {
        // height is validated non-zero at construction
        RatioValue::from_dimensions(self.width, self.height).unwrap_or(RatioValue::UNMEASURED)
    }

    /// `name (W:H)` when named, otherwise `W:H`.
    pub fn label(&self) -> String {
        let proportion = format!("{}:{}", self.width, self.height);
        if self.name.trim().is_empty() {
            proportion
        } else {
            format!("{} ({})", self.name, proportion)
        }
    }
}

impl std::fmt::Display for AspectRatio {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.label())
    }
}

fn positive(value: i64) -> Option<u32> {
    u32::try_from(value).ok().filter(|v| *v > 0)
}
