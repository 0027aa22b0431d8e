use media_ratio_library::{
    DateFilter, FilterErrorKind, FilterRequest, RatioFilter, ViewMode,
};
use media_ratio_storage::{AttachmentQuery, StoredNames, YearMonth};

#[test]
fn empty_query_adds_no_constraints() {
    let request = FilterRequest::from_query_string("").unwrap();
    assert_eq!(request, FilterRequest::default());
    assert!(!request.is_filtered());

    let base = AttachmentQuery::attachments();
    assert_eq!(request.apply(base.clone(), &StoredNames::default()), base);
}

#[test]
fn all_sentinels_add_no_constraints() {
    let request = FilterRequest::from_query_string(
        "media-attachment-ratio-filters=all&media-attachment-date-filters=All+dates&mode=grid",
    )
    .unwrap();
    assert_eq!(*request.ratio(), RatioFilter::All);
    assert_eq!(*request.date(), DateFilter::All);
    assert!(!request.is_filtered());
}

#[test]
fn ratio_restricts_to_images_with_that_ratio() {
    let request =
        FilterRequest::from_query_string("?action=query-attachments&media-attachment-ratio-filters=1.333")
            .unwrap();
    let query = request.apply(AttachmentQuery::attachments(), &StoredNames::default());

    let equals = query.meta_equals.unwrap();
    assert_eq!(equals.key, "media-by-aspect-ratio-aspect-ratio");
    assert_eq!(equals.value, "1.333");
    assert_eq!(query.mime_type.as_deref(), Some("image"));
    assert!(query.year_month.is_none());
}

#[test]
fn date_label_becomes_year_month() {
    let request =
        FilterRequest::from_query_string("media-attachment-date-filters=July%202021").unwrap();
    let query = request.apply(AttachmentQuery::attachments(), &StoredNames::default());

    assert_eq!(query.year_month, YearMonth::new(2021, 7));
    assert!(query.meta_equals.is_none());
    assert!(query.mime_type.is_none());
}

#[test]
fn grid_and_list_views_share_the_mapping() {
    let grid = FilterRequest::from_query_string(
        "media-attachment-ratio-filters=1.778&media-attachment-date-filters=202107&mode=grid",
    )
    .unwrap();
    let list = grid.with_mode(ViewMode::List);
    let names = StoredNames::default();

    assert_eq!(
        grid.apply(AttachmentQuery::attachments(), &names),
        list.apply(AttachmentQuery::attachments(), &names)
    );
}

#[test]
fn malformed_values_are_rejected() {
    let err = FilterRequest::from_query_string("media-attachment-ratio-filters=square").unwrap_err();
    assert!(matches!(err.kind, FilterErrorKind::InvalidRatio(_)));

    let err = FilterRequest::from_query_string("media-attachment-date-filters=Someday").unwrap_err();
    assert!(matches!(err.kind, FilterErrorKind::InvalidDate(_)));

    let err = FilterRequest::from_query_string("mode=carousel").unwrap_err();
    assert!(matches!(err.kind, FilterErrorKind::InvalidMode(_)));
}

#[test]
fn pairs_use_last_value() {
    let request = FilterRequest::from_pairs([
        ("media-attachment-ratio-filters", "1"),
        ("media-attachment-ratio-filters", "1.6"),
        ("unrelated", "ignored"),
    ])
    .unwrap();
    assert_eq!(request.ratio().to_string(), "1.6");
}
