//! Typed media library filter parameters.

use chrono::{Datelike, NaiveDate};
use media_ratio_core::{ASPECT_RATIO_META, RatioValue};
use media_ratio_error::{FilterError, FilterErrorKind};
use media_ratio_storage::{AttachmentQuery, IMAGE_MIME_TYPE, StoredNames, YearMonth};
use serde::Serialize;
use std::fmt;
use std::str::FromStr;

/// Query parameter carrying the selected ratio key.
pub const RATIO_FILTER_PARAM: &str = "media-attachment-ratio-filters";

/// Query parameter carrying the selected month label.
pub const DATE_FILTER_PARAM: &str = "media-attachment-date-filters";

/// Query parameter carrying the view mode.
pub const MODE_PARAM: &str = "mode";

/// Ratio filter value meaning "no ratio constraint".
pub const ALL_RATIOS: &str = "all";

/// Date filter label meaning "no month constraint".
pub const ALL_DATES: &str = "All dates";

/// Selected ratio.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
pub enum RatioFilter {
    /// Every ratio
    #[default]
    All,
    /// Only images with this stored ratio
    Ratio(RatioValue),
}

impl RatioFilter {
    /// Parse a ratio key or `all`. Blank input means `all`.
    #[track_caller]
    pub fn parse(value: &str) -> Result<Self, FilterError> {
        let value = value.trim();
        if value.is_empty() || value.eq_ignore_ascii_case(ALL_RATIOS) {
            return Ok(RatioFilter::All);
        }
        value
            .parse::<RatioValue>()
            .map(RatioFilter::Ratio)
            .map_err(|_| FilterError::new(FilterErrorKind::InvalidRatio(value.to_string())))
    }
}

impl fmt::Display for RatioFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RatioFilter::All => f.write_str(ALL_RATIOS),
            RatioFilter::Ratio(ratio) => write!(f, "{}", ratio),
        }
    }
}

/// Selected upload month.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
pub enum DateFilter {
    /// Every month
    #[default]
    All,
    /// Only attachments uploaded in this month
    Month(YearMonth),
}

impl DateFilter {
    /// Parse a month label.
    ///
    /// Accepts the dropdown text (`July 2021`, `Jul 2021`) and the compact
    /// `202107` form. Blank input and `All dates` mean every month.
    ///
    /// ```
    /// use media_ratio_library::DateFilter;
    ///
    /// let july = DateFilter::parse("July 2021").unwrap();
    /// assert_eq!(july, DateFilter::parse("202107").unwrap());
    /// assert_eq!(DateFilter::parse("All dates").unwrap(), DateFilter::All);
    /// ```
    #[track_caller]
    pub fn parse(label: &str) -> Result<Self, FilterError> {
        let label = label.trim();
        if label.is_empty() || label.eq_ignore_ascii_case(ALL_DATES) || label == "0" {
            return Ok(DateFilter::All);
        }
        parse_month(label)
            .map(DateFilter::Month)
            .ok_or_else(|| FilterError::new(FilterErrorKind::InvalidDate(label.to_string())))
    }
}

fn parse_month(label: &str) -> Option<YearMonth> {
    if label.len() == 6 && label.bytes().all(|b| b.is_ascii_digit()) {
        let year = label[..4].parse().ok()?;
        let month = label[4..].parse().ok()?;
        return YearMonth::new(year, month);
    }

    let date = NaiveDate::parse_from_str(&format!("1 {}", label), "%d %B %Y").ok()?;
    YearMonth::new(date.year(), date.month())
}

/// Media library layout the request came from.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Default,
    Serialize,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
#[serde(rename_all = "lowercase")]
pub enum ViewMode {
    /// Thumbnail grid, filtered through the host's attachment query endpoint
    #[default]
    Grid,
    /// Table, filtered through the host's main listing query
    List,
}

/// Filter parameters parsed once at the request boundary.
///
/// # Examples
///
/// ```
/// use media_ratio_library::{FilterRequest, ViewMode};
/// use media_ratio_storage::{AttachmentQuery, StoredNames};
///
/// let request = FilterRequest::from_query_string(
///     "?media-attachment-ratio-filters=1.778&media-attachment-date-filters=July+2021&mode=list",
/// )
/// .unwrap();
/// assert_eq!(*request.mode(), ViewMode::List);
///
/// let query = request.apply(AttachmentQuery::attachments(), &StoredNames::default());
/// assert_eq!(query.mime_type.as_deref(), Some("image"));
/// assert_eq!(query.meta_equals.unwrap().value, "1.778");
/// assert_eq!(query.year_month.unwrap().to_string(), "2021-07");
/// ```
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Default,
    Serialize,
    derive_getters::Getters,
    derive_setters::Setters,
)]
#[setters(prefix = "with_")]
pub struct FilterRequest {
    /// Selected ratio
    ratio: RatioFilter,
    /// Selected month
    date: DateFilter,
    /// Requesting view
    mode: ViewMode,
}

impl FilterRequest {
    /// Parse a raw query string; a leading `?` is ignored.
    ///
    /// # Errors
    ///
    /// Returns a [`FilterError`] when a recognised parameter has an unusable value.
    pub fn from_query_string(query: &str) -> Result<Self, FilterError> {
        let query = query.strip_prefix('?').unwrap_or(query);
        Self::from_pairs(url::form_urlencoded::parse(query.as_bytes()))
    }

    /// Build from decoded `(name, value)` pairs. Unknown names are ignored and
    /// the last occurrence of a name wins.
    ///
    /// # Errors
    ///
    /// Returns a [`FilterError`] when a recognised parameter has an unusable value.
    pub fn from_pairs<I, K, V>(pairs: I) -> Result<Self, FilterError>
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: AsRef<str>,
    {
        let mut request = Self::default();
        for (name, value) in pairs {
            let value = value.as_ref();
            match name.as_ref() {
                RATIO_FILTER_PARAM => request.ratio = RatioFilter::parse(value)?,
                DATE_FILTER_PARAM => request.date = DateFilter::parse(value)?,
                MODE_PARAM => request.mode = parse_mode(value)?,
                _ => {}
            }
        }
        tracing::debug!(
            ratio = %request.ratio,
            date = ?request.date,
            mode = %request.mode,
            "Parsed filter request"
        );
        Ok(request)
    }

    /// Whether any constraint will be added.
    pub fn is_filtered(&self) -> bool {
        self.ratio != RatioFilter::All || self.date != DateFilter::All
    }

    /// Add this request's constraints to `query`.
    ///
    /// A specific ratio adds an equality constraint on the stored ratio and
    /// restricts results to images. A specific month adds a year-month
    /// constraint. Both views go through here.
    pub fn apply(&self, query: AttachmentQuery, names: &StoredNames) -> AttachmentQuery {
        let mut query = query;
        if let RatioFilter::Ratio(ratio) = self.ratio {
            query = query
                .with_meta_equals((names.meta(ASPECT_RATIO_META), ratio.to_string()))
                .with_mime_type(IMAGE_MIME_TYPE);
        }
        if let DateFilter::Month(month) = self.date {
            query = query.with_year_month(month);
        }
        query
    }
}

#[track_caller]
fn parse_mode(value: &str) -> Result<ViewMode, FilterError> {
    let value = value.trim();
    if value.is_empty() {
        return Ok(ViewMode::default());
    }
    ViewMode::from_str(value)
        .map_err(|_| FilterError::new(FilterErrorKind::InvalidMode(value.to_string())))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ratio_filter_accepts_all_and_keys() {
        assert_eq!(RatioFilter::parse("all").unwrap(), RatioFilter::All);
        assert_eq!(RatioFilter::parse("").unwrap(), RatioFilter::All);
        assert_eq!(RatioFilter::parse("1.333").unwrap().to_string(), "1.333");

        let err = RatioFilter::parse("wide").unwrap_err();
        assert!(matches!(err.kind, FilterErrorKind::InvalidRatio(_)));
    }

    #[test]
    fn month_labels() {
        assert_eq!(parse_month("July 2021"), YearMonth::new(2021, 7));
        assert_eq!(parse_month("Jul 2021"), YearMonth::new(2021, 7));
        assert_eq!(parse_month("December 1999"), YearMonth::new(1999, 12));
        assert_eq!(parse_month("202107"), YearMonth::new(2021, 7));
        assert_eq!(parse_month("202113"), None);
        assert_eq!(parse_month("Smarch 2021"), None);
    }

    #[test]
    fn mode_defaults_to_grid() {
        assert_eq!(parse_mode("").unwrap(), ViewMode::Grid);
        assert_eq!(parse_mode("LIST").unwrap(), ViewMode::List);
        assert!(matches!(
            parse_mode("table").unwrap_err().kind,
            FilterErrorKind::InvalidMode(_)
        ));
    }
}
