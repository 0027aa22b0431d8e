use chrono::NaiveDate;
use media_ratio_core::{AttachmentId, Dimensions};
use media_ratio_error::HookError;
use media_ratio_library::{
    Agent, FilterRequest, HookContext, HookDispatcher, HookEvent, HookHandler, HookOutput,
    HookRegistration, HookTable, HostEnvironment, MEASURE_COMMAND, MediaRatioPlugin,
};
use media_ratio_storage::{
    AttachmentMetaStore, AttachmentQuery, AttachmentRecord, InMemoryMediaLibrary, StoredNames,
    load_catalog,
};

/// Refuses every registration.
struct BrokenDispatcher;

impl HookDispatcher for BrokenDispatcher {
    fn register(&mut self, registration: HookRegistration) -> Result<(), HookError> {
        Err(HookError::new(
            registration.event().to_string(),
            "dispatcher offline",
        ))
    }
}

#[test]
fn plugin_hooks_seed_and_initialize_agents() {
    let plugin = MediaRatioPlugin::new(StoredNames::default(), &HostEnvironment::cli());
    let mut table = HookTable::new();

    assert!(plugin.initialize(&mut table));
    assert!(table.contains(HookEvent::Activate, HookHandler::SeedCatalog));
    assert_eq!(
        table.handlers_for(HookEvent::Init),
        vec![HookHandler::InitializeAgents]
    );
    assert_eq!(*table.registrations()[1].priority(), 1);
}

#[test]
fn initialization_failure_is_not_fatal() {
    let plugin = MediaRatioPlugin::new(StoredNames::default(), &HostEnvironment::cli());
    assert!(!plugin.initialize(&mut BrokenDispatcher));
    assert!(plugin.try_initialize(&mut BrokenDispatcher).is_err());
}

#[test]
fn media_library_agent_requires_admin_and_upload() {
    let front_end = HostEnvironment::default();
    let plugin = MediaRatioPlugin::new(StoredNames::default(), &front_end);
    assert_eq!(plugin.agents(), &vec![Agent::CommandLine]);

    let mut table = HookTable::new();
    let initialized = plugin.initialize_agents(&mut table, &front_end).unwrap();
    assert!(initialized.is_empty());
    assert!(table.is_empty());

    let viewer = HostEnvironment::builder().is_admin(true).build().unwrap();
    let plugin = MediaRatioPlugin::new(StoredNames::default(), &viewer);
    assert_eq!(plugin.agents(), &vec![Agent::MediaLibrary, Agent::CommandLine]);
    let mut table = HookTable::new();
    assert!(plugin.initialize_agents(&mut table, &viewer).unwrap().is_empty());

    let admin = HostEnvironment::media_admin();
    let plugin = MediaRatioPlugin::new(StoredNames::default(), &admin);
    let mut table = HookTable::new();
    let initialized = plugin.initialize_agents(&mut table, &admin).unwrap();
    assert_eq!(initialized, vec![Agent::MediaLibrary]);
    assert!(table.contains(HookEvent::FilterGridQuery, HookHandler::ApplyFilterRequest));
    assert!(table.contains(HookEvent::FilterListQuery, HookHandler::ApplyFilterRequest));
    assert!(table.contains(HookEvent::RenderRatioFilter, HookHandler::RatioFilterControl));
    assert!(!table.contains(HookEvent::RegisterCommands, HookHandler::MeasureCommand));
}

#[test]
fn command_line_agent_attaches_measure() {
    let env = HostEnvironment::cli();
    let plugin = MediaRatioPlugin::new(StoredNames::default(), &env);
    let mut table = HookTable::new();

    let initialized = plugin.initialize_agents(&mut table, &env).unwrap();
    assert_eq!(initialized, vec![Agent::CommandLine]);
    assert_eq!(
        table.handlers_for(HookEvent::RegisterCommands),
        vec![HookHandler::MeasureCommand]
    );
}

#[tokio::test]
async fn activation_seeds_once() {
    let library = InMemoryMediaLibrary::new();
    let plugin = MediaRatioPlugin::new(StoredNames::default(), &HostEnvironment::media_admin());

    assert!(plugin.activate(&library).await.unwrap());
    assert!(!plugin.activate(&library).await.unwrap());

    let catalog = load_catalog(&library, &StoredNames::default()).await.unwrap();
    assert_eq!(catalog.len(), 4);
}

#[tokio::test]
async fn filter_control_reflects_stored_catalog() {
    let library = InMemoryMediaLibrary::new();
    let plugin = MediaRatioPlugin::new(StoredNames::default(), &HostEnvironment::media_admin());
    plugin.activate(&library).await.unwrap();

    let request = FilterRequest::from_query_string("media-attachment-ratio-filters=1.6").unwrap();
    let control = plugin.filter_control(&library, &request).await.unwrap();

    let selected: Vec<&str> = control
        .options()
        .iter()
        .filter(|o| *o.selected())
        .map(|o| o.text().as_str())
        .collect();
    assert_eq!(selected, vec!["16:10"]);
    assert!(control.restrict_type_filter());
}

#[tokio::test]
async fn find_attachments_by_ratio_and_month() {
    let library = InMemoryMediaLibrary::new();
    let july = NaiveDate::from_ymd_opt(2021, 7, 14).unwrap();
    let august = NaiveDate::from_ymd_opt(2021, 8, 2).unwrap();
    let key = "media-by-aspect-ratio-aspect-ratio";

    for (id, mime, date) in [
        (1, "image/png", july),
        (2, "image/jpeg", august),
        (3, "image/png", july),
        (4, "application/pdf", july),
    ] {
        library.insert(
            AttachmentRecord::image(AttachmentId::new(id), mime, Dimensions::new(16, 9))
                .uploaded_on(date),
        );
    }
    for id in [1, 2, 4] {
        library
            .update_meta(AttachmentId::new(id), key, "1.778")
            .await
            .unwrap();
    }
    library
        .update_meta(AttachmentId::new(3), key, "1")
        .await
        .unwrap();

    let plugin = MediaRatioPlugin::new(StoredNames::default(), &HostEnvironment::media_admin());

    let request = FilterRequest::from_query_string(
        "media-attachment-ratio-filters=1.778&media-attachment-date-filters=July+2021",
    )
    .unwrap();
    let ids = plugin.find_attachments(&library, &request).await.unwrap();
    assert_eq!(ids, vec![AttachmentId::new(1)]);

    let everything = plugin
        .find_attachments(&library, &FilterRequest::default())
        .await
        .unwrap();
    assert_eq!(everything.len(), 4);
}

#[tokio::test]
async fn dispatching_activate_runs_seed_catalog() {
    let library = InMemoryMediaLibrary::new();
    let env = HostEnvironment::cli();
    let plugin = MediaRatioPlugin::new(StoredNames::default(), &env);
    let context = HookContext::new(&library, &env);
    let mut table = HookTable::new();

    let before = plugin
        .dispatch(&mut table, HookEvent::Activate, &context)
        .await
        .unwrap();
    assert!(before.is_empty());
    assert!(load_catalog(&library, &StoredNames::default()).await.unwrap().is_empty());

    assert!(plugin.initialize(&mut table));
    let first = plugin
        .dispatch(&mut table, HookEvent::Activate, &context)
        .await
        .unwrap();
    assert_eq!(first, vec![HookOutput::Seeded(true)]);
    let second = plugin
        .dispatch(&mut table, HookEvent::Activate, &context)
        .await
        .unwrap();
    assert_eq!(second, vec![HookOutput::Seeded(false)]);
    assert_eq!(load_catalog(&library, &StoredNames::default()).await.unwrap().len(), 4);
}

#[tokio::test]
async fn dispatching_init_attaches_agent_hooks() {
    let library = InMemoryMediaLibrary::new();
    let env = HostEnvironment::cli();
    let plugin = MediaRatioPlugin::new(StoredNames::default(), &env);
    let context = HookContext::new(&library, &env);
    let mut table = HookTable::new();
    plugin.initialize(&mut table);

    let outputs = plugin
        .dispatch(&mut table, HookEvent::Init, &context)
        .await
        .unwrap();
    assert_eq!(outputs, vec![HookOutput::AgentsInitialized(vec![Agent::CommandLine])]);

    let commands = plugin
        .dispatch(&mut table, HookEvent::RegisterCommands, &context)
        .await
        .unwrap();
    assert_eq!(commands, vec![HookOutput::Command(MEASURE_COMMAND)]);
}

#[tokio::test]
async fn dispatching_view_events_filters_and_renders() {
    let library = InMemoryMediaLibrary::new();
    let env = HostEnvironment::media_admin();
    let plugin = MediaRatioPlugin::new(StoredNames::default(), &env);
    plugin.activate(&library).await.unwrap();

    let request = FilterRequest::from_query_string("media-attachment-ratio-filters=1.778").unwrap();
    let context = HookContext::new(&library, &env).with_request(request);
    let mut table = HookTable::new();
    plugin.initialize_agents(&mut table, &env).unwrap();

    let expected = AttachmentQuery::attachments()
        .with_meta_equals(("media-by-aspect-ratio-aspect-ratio", "1.778"))
        .with_mime_type("image");
    for event in [HookEvent::FilterGridQuery, HookEvent::FilterListQuery] {
        let outputs = plugin.dispatch(&mut table, event, &context).await.unwrap();
        assert_eq!(outputs, vec![HookOutput::Query(expected.clone())], "{event}");
    }

    let rendered = plugin
        .dispatch(&mut table, HookEvent::RenderRatioFilter, &context)
        .await
        .unwrap();
    match rendered.as_slice() {
        [HookOutput::Control(control)] => assert!(control.restrict_type_filter()),
        other => panic!("unexpected outputs: {other:?}"),
    }
}
