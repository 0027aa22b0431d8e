//! Attachment rows kept by the bundled backends.

use crate::query::{ATTACHMENT_POST_TYPE, INHERIT_STATUS};
use crate::AttachmentQuery;
use chrono::NaiveDate;
use media_ratio_core::{AttachmentId, Dimensions};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// One attachment as the in-memory and filesystem backends store it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AttachmentRecord {
    /// Host identifier
    pub id: AttachmentId,
    /// Host post type
    #[serde(default = "default_post_type")]
    pub post_type: String,
    /// Full mime type, e.g. `image/jpeg`
    pub mime_type: String,
    /// Host status
    #[serde(default = "default_status")]
    pub status: String,
    /// Upload date
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub uploaded: Option<NaiveDate>,
    /// Size recorded at upload
    #[serde(default)]
    pub dimensions: Dimensions,
    /// Attributes by full name
    #[serde(default)]
    pub meta: BTreeMap<String, String>,
}

fn default_post_type() -> String {
    ATTACHMENT_POST_TYPE.to_string()
}

fn default_status() -> String {
    INHERIT_STATUS.to_string()
}

impl AttachmentRecord {
    /// An image attachment with the usual post type and status.
    pub fn image(id: AttachmentId, mime_type: impl Into<String>, dimensions: Dimensions) -> Self {
        Self {
            id,
            post_type: default_post_type(),
            mime_type: mime_type.into(),
            status: default_status(),
            uploaded: None,
            dimensions,
            meta: BTreeMap::new(),
        }
    }

    /// Set the upload date.
    pub fn uploaded_on(mut self, date: NaiveDate) -> Self {
        self.uploaded = Some(date);
        self
    }

    /// Whether this record satisfies every constraint in `query`.
    pub fn matches(&self, query: &AttachmentQuery) -> bool {
        let post_type_ok = query
            .post_type
            .as_ref()
            .is_none_or(|wanted| *wanted == self.post_type);
        let status_ok = query
            .status
            .as_ref()
            .is_none_or(|wanted| *wanted == self.status);
        let absent_ok = query
            .meta_absent
            .as_ref()
            .is_none_or(|key| !self.meta.contains_key(key));
        let equals_ok = query
            .meta_equals
            .as_ref()
            .is_none_or(|eq| self.meta.get(&eq.key) == Some(&eq.value));
        let month_ok = query
            .year_month
            .is_none_or(|month| self.uploaded.is_some_and(|date| month.contains(date)));

        post_type_ok
            && status_ok
            && query.mime_matches(&self.mime_type)
            && absent_ok
            && equals_ok
            && month_ok
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn photo() -> AttachmentRecord {
        AttachmentRecord::image(AttachmentId::new(1), "image/jpeg", Dimensions::new(4, 3))
            .uploaded_on(NaiveDate::from_ymd_opt(2021, 7, 4).unwrap())
    }

    #[test]
    fn unmeasured_query_skips_measured_records() {
        let query = AttachmentQuery::unmeasured_images("ratio");
        let mut record = photo();
        assert!(record.matches(&query));
        record.meta.insert("ratio".into(), "1.333".into());
        assert!(!record.matches(&query));
    }

    #[test]
    fn month_constraint_needs_an_upload_date() {
        let query = AttachmentQuery::images().with_year_month(crate::YearMonth::new(2021, 7).unwrap());
        assert!(photo().matches(&query));
        let mut undated = photo();
        undated.uploaded = None;
        assert!(!undated.matches(&query));
    }

    #[test]
    fn defaults_fill_in_on_deserialize() {
        let record: AttachmentRecord =
            serde_json::from_str(r#"{"id": 3, "mime_type": "image/png"}"#).unwrap();
        assert_eq!(record.post_type, "attachment");
        assert_eq!(record.status, "inherit");
        assert_eq!(record.dimensions, Dimensions::default());
    }
}
