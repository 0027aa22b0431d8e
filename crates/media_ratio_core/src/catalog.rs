//! The ordered set of aspect ratios administrators can filter by.

use crate::{AspectRatio, RatioValue};
use media_ratio_error::DimensionError;
use serde::de::{MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use tracing::{debug, warn};

/// Aspect ratios keyed by their rounded decimal value.
///
/// Keys are unique: adding a ratio whose value is already present replaces
/// the earlier entry in place. Enumeration follows insertion order, which is
/// also the order the filter control shows.
///
/// Serialized as a map of ratio key to `{width, height, name}`:
///
/// ```json
/// {"1": {"width": 1, "height": 1, "name": ""}, "1.333": {"width": 4, "height": 3, "name": ""}}
/// ```
///
/// # Examples
///
/// ```
/// use media_ratio_core::RatioCatalog;
///
/// let mut catalog = RatioCatalog::new();
/// catalog.add(16, 9, "").unwrap();
/// catalog.add(32, 18, "HD").unwrap(); // same ratio, replaces 16:9
///
/// let labels: Vec<String> = catalog.list().map(|r| r.label()).collect();
/// assert_eq!(labels, vec!["HD (32:18)"]);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RatioCatalog {
    entries: Vec<(RatioValue, AspectRatio)>,
}

impl RatioCatalog {
    /// An empty, unseeded catalog.
    pub fn new() -> Self {
        Self::default()
    }

    /// The four ratios written on first activation: 1:1, 4:3, 16:9 and 16:10.
    pub fn with_defaults() -> Self {
        let mut catalog = Self::new();
        for (width, height) in [(1, 1), (4, 3), (16, 9), (16, 10)] {
            if let Ok(ratio) = AspectRatio::new(width, height, "") {
                catalog.insert(ratio);
            }
        }
        catalog
    }

    /// Validate and add a ratio, replacing any entry with the same key.
    ///
    /// # Errors
    ///
    /// Returns `InvalidDimension` when either side is not positive; the
    /// catalog is left untouched.
    #[track_caller]
    pub fn add(
        &mut self,
        width: i64,
        height: i64,
        name: impl Into<String>,
    ) -> Result<AspectRatio, DimensionError> {
        let ratio = AspectRatio::new(width, height, name)?;
        self.insert(ratio.clone());
        Ok(ratio)
    }

    /// Add an already-built ratio, replacing any entry with the same key.
    pub fn insert(&mut self, ratio: AspectRatio) {
        let key = ratio.ratio();
        match self.entries.iter_mut().find(|(existing, _)| *existing == key) {
            Some(slot) => {
                debug!(key = %key, label = %ratio.label(), "Replacing catalog entry");
                slot.1 = ratio;
            }
            None => {
                debug!(key = %key, label = %ratio.label(), "Adding catalog entry");
                self.entries.push((key, ratio));
            }
        }
    }

    /// Remove the entry with the given key.
    pub fn remove(&mut self, key: RatioValue) -> Option<AspectRatio> {
        let index = self.entries.iter().position(|(existing, _)| *existing == key)?;
        Some(self.entries.remove(index).1)
    }

    /// Look up a ratio by key.
    pub fn get(&self, key: RatioValue) -> Option<&AspectRatio> {
        self.entries
            .iter()
            .find(|(existing, _)| *existing == key)
            .map(|(_, ratio)| ratio)
    }

    /// Whether a key is present.
    pub fn contains(&self, key: RatioValue) -> bool {
        self.get(key).is_some()
    }

    /// Ratios in insertion order.
    pub fn list(&self) -> impl Iterator<Item = &AspectRatio> {
        self.entries.iter().map(|(_, ratio)| ratio)
    }

    /// `(key, ratio)` pairs in insertion order.
    pub fn entries(&self) -> impl Iterator<Item = (RatioValue, &AspectRatio)> {
        self.entries.iter().map(|(key, ratio)| (*key, ratio))
    }

    /// Display label for a ratio: `name (W:H)` or `W:H`.
    pub fn label(ratio: &AspectRatio) -> String {
        ratio.label()
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True before the catalog has been seeded.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Serialize for RatioCatalog {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (key, ratio) in &self.entries {
            map.serialize_entry(&key.to_string(), ratio)?;
        }
        map.end()
    }
}

impl<'de> Deserialize<'de> for RatioCatalog {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct CatalogVisitor;

        impl<'de> Visitor<'de> for CatalogVisitor {
            type Value = RatioCatalog;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a map of ratio keys to aspect ratios")
            }

            fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<Self::Value, A::Error> {
                let mut catalog = RatioCatalog::new();
                while let Some((stored_key, ratio)) = access.next_entry::<String, AspectRatio>()? {
                    // The key is derived data; trust the dimensions.
                    if stored_key != ratio.ratio().to_string() {
                        warn!(
                            stored_key = %stored_key,
                            computed_key = %ratio.ratio(),
                            "Stored ratio key does not match its dimensions"
                        );
                    }
                    catalog.insert(ratio);
                }
                Ok(catalog)
            }
        }

        deserializer.deserialize_map(CatalogVisitor)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_in_activation_order() {
        let catalog = RatioCatalog::with_defaults();
        let keys: Vec<String> = catalog.entries().map(|(k, _)| k.to_string()).collect();
        assert_eq!(keys, vec!["1", "1.333", "1.778", "1.6"]);
    }

    #[test]
    fn replacing_keeps_position() {
        let mut catalog = RatioCatalog::with_defaults();
        catalog.add(8, 6, "Standard").unwrap();
        let labels: Vec<String> = catalog.list().map(AspectRatio::label).collect();
        assert_eq!(labels, vec!["1:1", "Standard (8:6)", "16:9", "16:10"]);
        assert_eq!(catalog.len(), 4);
    }

    #[test]
    fn failed_add_leaves_catalog_untouched() {
        let mut catalog = RatioCatalog::with_defaults();
        assert!(catalog.add(0, 5, "Broken").is_err());
        assert_eq!(catalog, RatioCatalog::with_defaults());
    }

    #[test]
    fn remove_and_get() {
        let mut catalog = RatioCatalog::with_defaults();
        let key: RatioValue = "1.6".parse().unwrap();
        assert!(catalog.contains(key));
        let removed = catalog.remove(key).unwrap();
        assert_eq!(removed.label(), "16:10");
        assert!(catalog.get(key).is_none());
        assert!(catalog.remove(key).is_none());
    }

    #[test]
    fn serialized_form_preserves_order() {
        let catalog = RatioCatalog::with_defaults();
        let json = serde_json::to_string(&catalog).unwrap();
        assert!(json.starts_with(r#"{"1":{"width":1,"height":1,"name":""},"1.333""#));

        let back: RatioCatalog = serde_json::from_str(&json).unwrap();
        assert_eq!(back, catalog);
    }

    #[test]
    fn mismatched_keys_are_recomputed() {
        let back: RatioCatalog =
            serde_json::from_str(r#"{"9.999":{"width":4,"height":3,"name":"Standard"}}"#).unwrap();
        let key: RatioValue = "1.333".parse().unwrap();
        assert_eq!(back.get(key).unwrap().label(), "Standard (4:3)");
    }
}
