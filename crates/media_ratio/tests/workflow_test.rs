use media_ratio::{
    AttachmentId, AttachmentMetaStore, AttachmentRecord, BatchClassifier, BatchStatus,
    Dimensions, FileSystemMediaLibrary, FilterRequest, HostEnvironment, MediaRatioPlugin, Notice,
    StoredNames, TimeLimit, load_catalog,
};

const RATIO_KEY: &str = "media-by-aspect-ratio-aspect-ratio";

#[tokio::test]
async fn activate_measure_and_filter_on_disk() {
    let dir = tempfile::tempdir().unwrap();
    let library = FileSystemMediaLibrary::new(dir.path()).unwrap();
    let names = StoredNames::default();
    let plugin = MediaRatioPlugin::new(names.clone(), &HostEnvironment::cli());

    assert!(plugin.activate(&library).await.unwrap());

    library
        .import(vec![
            AttachmentRecord::image(AttachmentId::new(10), "image/jpeg", Dimensions::new(1920, 1080)),
            AttachmentRecord::image(AttachmentId::new(11), "image/png", Dimensions::default()),
            AttachmentRecord::image(AttachmentId::new(12), "image/png", Dimensions::new(800, 600)),
        ])
        .await
        .unwrap();

    let catalog = load_catalog(&library, &names).await.unwrap();
    let classifier = BatchClassifier::new(&library, &catalog);

    let outcome = classifier.run(TimeLimit::default()).await.unwrap();
    assert_eq!(*outcome.status(), BatchStatus::Complete);
    assert_eq!(*outcome.matched(), 2);
    assert_eq!(
        Notice::from_outcome(&outcome).to_string(),
        "Success: Images measured."
    );

    assert_eq!(
        library
            .get_meta(AttachmentId::new(11), RATIO_KEY)
            .await
            .unwrap()
            .as_deref(),
        Some("0")
    );

    let again = classifier.run(TimeLimit::default()).await.unwrap();
    assert_eq!(
        Notice::from_outcome(&again).to_string(),
        "Warning: No unmeasured images found."
    );

    let request = FilterRequest::from_query_string("media-attachment-ratio-filters=1.333").unwrap();
    let ids = plugin.find_attachments(&library, &request).await.unwrap();
    assert_eq!(ids, vec![AttachmentId::new(12)]);
}

#[tokio::test]
async fn measured_ratios_survive_reopening() {
    let dir = tempfile::tempdir().unwrap();
    {
        let library = FileSystemMediaLibrary::new(dir.path()).unwrap();
        library
            .import(vec![AttachmentRecord::image(
                AttachmentId::new(1),
                "image/webp",
                Dimensions::new(16, 10),
            )])
            .await
            .unwrap();
        let catalog = load_catalog(&library, &StoredNames::default()).await.unwrap();
        BatchClassifier::new(&library, &catalog)
            .run(TimeLimit::Unbounded)
            .await
            .unwrap();
    }

    let reopened = FileSystemMediaLibrary::new(dir.path()).unwrap();
    assert_eq!(
        reopened
            .get_meta(AttachmentId::new(1), RATIO_KEY)
            .await
            .unwrap()
            .as_deref(),
        Some("1.6")
    );
}
