//! Tests for the in-memory media library backend.

use media_ratio_core::{AttachmentId, Dimensions};
use media_ratio_storage::{
    AttachmentIndex, AttachmentMetaStore, AttachmentQuery, AttachmentRecord, InMemoryMediaLibrary,
    OptionStore,
};
use serde_json::json;

#[tokio::test]
async fn test_options_round_trip() {
    let library = InMemoryMediaLibrary::new();
    library
        .update_option("prefix-thing", json!({"a": 1}))
        .await
        .unwrap();
    assert_eq!(
        library.get_option("prefix-thing").await.unwrap(),
        Some(json!({"a": 1}))
    );
}

#[tokio::test]
async fn test_meta_equality_filter() {
    let library = InMemoryMediaLibrary::new();
    for id in 1..=3 {
        library.insert(AttachmentRecord::image(
            AttachmentId::new(id),
            "image/png",
            Dimensions::new(16, 9),
        ));
    }
    library
        .update_meta(AttachmentId::new(2), "ratio", "1.778")
        .await
        .unwrap();

    let query = AttachmentQuery::images().with_meta_equals(("ratio", "1.778"));
    let ids = library.find_ids(&query).await.unwrap();
    assert_eq!(ids, vec![AttachmentId::new(2)]);

    let record = library.record(AttachmentId::new(2)).unwrap();
    assert_eq!(record.meta.get("ratio").map(String::as_str), Some("1.778"));
}

#[tokio::test]
async fn test_update_meta_on_missing_attachment_fails() {
    let library = InMemoryMediaLibrary::new();
    assert!(
        library
            .update_meta(AttachmentId::new(1), "ratio", "1")
            .await
            .is_err()
    );
}
