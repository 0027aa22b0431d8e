//! Plugin-prefixed option and metadata names.

use media_ratio_core::OPTION_PREFIX;

/// Prepends the plugin prefix to the short names callers use.
///
/// ```
/// use media_ratio_storage::StoredNames;
///
/// let names = StoredNames::default();
/// assert_eq!(names.option("aspect-ratios"), "media-by-aspect-ratio-aspect-ratios");
/// assert_eq!(names.meta("aspect-ratio"), "media-by-aspect-ratio-aspect-ratio");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, derive_getters::Getters)]
pub struct StoredNames {
    prefix: String,
}

impl StoredNames {
    /// Use a custom prefix.
    pub fn new(prefix: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
        }
    }

    /// Full option name.
    pub fn option(&self, name: &str) -> String {
        format!("{}{}", self.prefix, name)
    }

    /// Full metadata attribute name.
    pub fn meta(&self, name: &str) -> String {
        format!("{}{}", self.prefix, name)
    }
}

impl Default for StoredNames {
    fn default() -> Self {
        Self::new(OPTION_PREFIX)
    }
}
