//! View model for the ratio dropdown.

use crate::RatioFilter;
use media_ratio_core::RatioCatalog;
use serde::Serialize;

/// Text of the leading "no filter" option.
pub const ALL_RATIOS_TEXT: &str = "All aspect ratios";

/// One `<option>` of the dropdown.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, derive_getters::Getters)]
pub struct FilterOption {
    /// Submitted value: `all` or a ratio key
    value: String,
    /// Visible text
    text: String,
    /// Whether this is the current selection
    selected: bool,
}

/// What the rendering collaborator receives.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, derive_getters::Getters)]
pub struct RenderInput {
    /// Current filter value
    current: String,
    /// Catalog labels in catalog order
    ratios: Vec<String>,
}

/// The ratio filter control for one request.
///
/// ```
/// use media_ratio_core::RatioCatalog;
/// use media_ratio_library::{FilterControl, RatioFilter};
///
/// let current = RatioFilter::parse("1.778").unwrap();
/// let control = FilterControl::new(&RatioCatalog::with_defaults(), current);
///
/// let texts: Vec<&str> = control.options().iter().map(|o| o.text().as_str()).collect();
/// assert_eq!(texts, vec!["All aspect ratios", "1:1", "4:3", "16:9", "16:10"]);
/// assert!(*control.options()[3].selected());
/// assert!(control.restrict_type_filter());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, derive_getters::Getters)]
pub struct FilterControl {
    /// Current selection
    current: RatioFilter,
    /// Options in display order, `all` first
    options: Vec<FilterOption>,
}

impl FilterControl {
    /// Build the options for `catalog` with `current` marked selected.
    pub fn new(catalog: &RatioCatalog, current: RatioFilter) -> Self {
        let current_value = current.to_string();
        let mut options = Vec::with_capacity(catalog.len() + 1);
        options.push(FilterOption {
            value: RatioFilter::All.to_string(),
            text: ALL_RATIOS_TEXT.to_string(),
            selected: current == RatioFilter::All,
        });
        options.extend(catalog.entries().map(|(key, ratio)| {
            let value = key.to_string();
            FilterOption {
                selected: value == current_value,
                text: ratio.label(),
                value,
            }
        }));
        Self { current, options }
    }

    /// When a specific ratio is selected the media type filter is pinned to
    /// images, since only images carry a ratio.
    pub fn restrict_type_filter(&self) -> bool {
        self.current != RatioFilter::All
    }

    /// Inline script data: `{"current": ..., "ratios": {key: label, ...}}`.
    pub fn script_data(&self) -> serde_json::Value {
        let ratios: serde_json::Map<String, serde_json::Value> = self
            .options
            .iter()
            .skip(1)
            .map(|option| (option.value.clone(), option.text.clone().into()))
            .collect();
        serde_json::json!({
            "current": self.current.to_string(),
            "ratios": ratios,
        })
    }

    /// Input for the rendering collaborator.
    pub fn render_input(&self) -> RenderInput {
        RenderInput {
            current: self.current.to_string(),
            ratios: self.options.iter().skip(1).map(|o| o.text.clone()).collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_is_selected_by_default() {
        let control = FilterControl::new(&RatioCatalog::with_defaults(), RatioFilter::All);
        let selected: Vec<&str> = control
            .options()
            .iter()
            .filter(|o| *o.selected())
            .map(|o| o.value().as_str())
            .collect();
        assert_eq!(selected, vec!["all"]);
        assert!(!control.restrict_type_filter());
    }

    #[test]
    fn script_data_keeps_catalog_order() {
        let mut catalog = RatioCatalog::new();
        catalog.add(21, 9, "Ultrawide").unwrap();
        catalog.add(1, 1, "").unwrap();
        let control = FilterControl::new(&catalog, RatioFilter::All);

        let json = serde_json::to_string(&control.script_data()).unwrap();
        assert_eq!(
            json,
            r#"{"current":"all","ratios":{"2.333":"Ultrawide (21:9)","1":"1:1"}}"#
        );
    }

    #[test]
    fn render_input_lists_labels() {
        let control = FilterControl::new(&RatioCatalog::with_defaults(), RatioFilter::All);
        let input = control.render_input();
        assert_eq!(input.current(), "all");
        assert_eq!(input.ratios(), &vec!["1:1", "4:3", "16:9", "16:10"]);
    }

    #[test]
    fn unknown_current_selects_nothing() {
        let current = RatioFilter::parse("2.5").unwrap();
        let control = FilterControl::new(&RatioCatalog::with_defaults(), current);
        assert!(control.options().iter().all(|o| !o.selected()));
    }
}
