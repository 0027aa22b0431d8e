//! Attachment selection constraints.

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

/// Post type the host gives to uploaded media.
pub const ATTACHMENT_POST_TYPE: &str = "attachment";

/// Status attachments carry when they follow their parent post.
pub const INHERIT_STATUS: &str = "inherit";

/// Top-level mime type of images.
pub const IMAGE_MIME_TYPE: &str = "image";

/// Constraints an [`crate::AttachmentIndex`] applies; every set field must match.
///
/// Results are always ordered ascending by identifier.
///
/// # Examples
///
/// ```
/// use media_ratio_storage::{AttachmentQuery, YearMonth};
///
/// let query = AttachmentQuery::images()
///     .with_meta_equals(("media-by-aspect-ratio-aspect-ratio", "1.778"))
///     .with_year_month(YearMonth::new(2021, 7).unwrap());
///
/// assert_eq!(query.mime_type.as_deref(), Some("image"));
/// assert_eq!(query.meta_equals.unwrap().value, "1.778");
/// ```
#[derive(
    Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize, derive_setters::Setters,
)]
#[setters(prefix = "with_", strip_option, into)]
pub struct AttachmentQuery {
    /// Host post type, e.g. `attachment`
    pub post_type: Option<String>,
    /// Mime type or top-level type; `image` matches `image/png`
    pub mime_type: Option<String>,
    /// Host status, e.g. `inherit`
    pub status: Option<String>,
    /// Attribute that must be absent
    pub meta_absent: Option<String>,
    /// Attribute that must equal a value
    pub meta_equals: Option<MetaEquals>,
    /// Upload month
    pub year_month: Option<YearMonth>,
}

impl AttachmentQuery {
    /// Every attachment in the library.
    pub fn attachments() -> Self {
        Self::default()
            .with_post_type(ATTACHMENT_POST_TYPE)
            .with_status(INHERIT_STATUS)
    }

    /// Image attachments only.
    pub fn images() -> Self {
        Self::attachments().with_mime_type(IMAGE_MIME_TYPE)
    }

    /// Images that have never been measured: `ratio_meta` is absent.
    pub fn unmeasured_images(ratio_meta: impl Into<String>) -> Self {
        Self::images().with_meta_absent(ratio_meta)
    }

    /// Whether a mime type satisfies the `mime_type` constraint.
    pub fn mime_matches(&self, mime_type: &str) -> bool {
        match &self.mime_type {
            None => true,
            Some(wanted) if wanted.contains('/') => wanted.eq_ignore_ascii_case(mime_type),
            Some(wanted) => mime_type
                .split('/')
                .next()
                .is_some_and(|top| top.eq_ignore_ascii_case(wanted)),
        }
    }
}

/// Attribute equality constraint.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MetaEquals {
    /// Full attribute name
    pub key: String,
    /// Required value
    pub value: String,
}

impl<K: Into<String>, V: Into<String>> From<(K, V)> for MetaEquals {
    fn from((key, value): (K, V)) -> Self {
        Self {
            key: key.into(),
            value: value.into(),
        }
    }
}

/// A calendar month.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
    derive_more::Display,
)]
#[display("{:04}-{:02}", year, month)]
pub struct YearMonth {
    /// Four digit year
    pub year: i32,
    /// Month, 1 through 12
    pub month: u32,
}

impl YearMonth {
    /// Build a month; `None` when `month` is not 1 through 12.
    pub fn new(year: i32, month: u32) -> Option<Self> {
        (1..=12).contains(&month).then_some(Self { year, month })
    }

    /// Whether a date falls in this month.
    pub fn contains(&self, date: NaiveDate) -> bool {
        date.year() == self.year && date.month() == self.month
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn top_level_mime_type_matches_subtypes() {
        let query = AttachmentQuery::images();
        assert!(query.mime_matches("image/png"));
        assert!(query.mime_matches("IMAGE/jpeg"));
        assert!(!query.mime_matches("video/mp4"));
        assert!(!query.mime_matches("imagery/x"));
    }

    #[test]
    fn full_mime_type_matches_exactly() {
        let query = AttachmentQuery::default().with_mime_type("image/png");
        assert!(query.mime_matches("image/png"));
        assert!(!query.mime_matches("image/jpeg"));
    }

    #[test]
    fn unmeasured_query_has_all_predicates() {
        let query = AttachmentQuery::unmeasured_images("prefix-aspect-ratio");
        assert_eq!(query.post_type.as_deref(), Some("attachment"));
        assert_eq!(query.status.as_deref(), Some("inherit"));
        assert_eq!(query.mime_type.as_deref(), Some("image"));
        assert_eq!(query.meta_absent.as_deref(), Some("prefix-aspect-ratio"));
        assert!(query.meta_equals.is_none());
    }

    #[test]
    fn year_month_bounds() {
        assert!(YearMonth::new(2021, 0).is_none());
        assert!(YearMonth::new(2021, 13).is_none());
        let july = YearMonth::new(2021, 7).unwrap();
        assert_eq!(july.to_string(), "2021-07");
        assert!(july.contains(NaiveDate::from_ymd_opt(2021, 7, 31).unwrap()));
        assert!(!july.contains(NaiveDate::from_ymd_opt(2020, 7, 1).unwrap()));
    }
}
