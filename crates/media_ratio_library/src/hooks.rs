//! The event table handed to the host dispatcher.

use media_ratio_error::HookError;

/// Priority the host uses when none is given; lower runs first.
pub const DEFAULT_PRIORITY: i32 = 10;

/// Host events this plugin listens to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, strum::Display)]
#[strum(serialize_all = "snake_case")]
pub enum HookEvent {
    /// Plugin activated by an administrator
    Activate,
    /// Host finished loading
    Init,
    /// Media library toolbar is being rendered
    RenderRatioFilter,
    /// Grid view is querying attachments
    FilterGridQuery,
    /// List view is querying attachments
    FilterListQuery,
    /// Host command line is collecting subcommands
    RegisterCommands,
}

/// Plugin operations a registration points at.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, strum::Display)]
#[strum(serialize_all = "snake_case")]
pub enum HookHandler {
    /// Seed the default catalog when empty
    SeedCatalog,
    /// Attach hooks of the permitted agents
    InitializeAgents,
    /// Build the ratio dropdown
    RatioFilterControl,
    /// Apply the filter request to the attachment query
    ApplyFilterRequest,
    /// Register the `media measure` subcommand
    MeasureCommand,
}

/// One `{event -> handler}` row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, derive_getters::Getters)]
pub struct HookRegistration {
    /// Event to listen to
    event: HookEvent,
    /// Operation to run
    handler: HookHandler,
    /// Ordering among handlers of the same event
    priority: i32,
}

impl HookRegistration {
    /// Register at the default priority.
    pub fn new(event: HookEvent, handler: HookHandler) -> Self {
        Self {
            event,
            handler,
            priority: DEFAULT_PRIORITY,
        }
    }

    /// Override the priority.
    pub fn with_priority(mut self, priority: i32) -> Self {
        self.priority = priority;
        self
    }
}

/// The host side of hook registration.
pub trait HookDispatcher {
    /// Attach one handler.
    ///
    /// # Errors
    ///
    /// Returns a [`HookError`] when the host refuses the registration.
    fn register(&mut self, registration: HookRegistration) -> Result<(), HookError>;
}

/// A dispatcher that simply records registrations.
///
/// Used by the command line, where there is no host, and in tests.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HookTable {
    registrations: Vec<HookRegistration>,
}

impl HookTable {
    /// An empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Every registration, in the order it was made.
    pub fn registrations(&self) -> &[HookRegistration] {
        &self.registrations
    }

    /// Handlers for `event`, lowest priority first; ties keep registration order.
    pub fn handlers_for(&self, event: HookEvent) -> Vec<HookHandler> {
        let mut matching: Vec<&HookRegistration> = self
            .registrations
            .iter()
            .filter(|r| r.event == event)
            .collect();
        matching.sort_by_key(|r| r.priority);
        matching.into_iter().map(|r| r.handler).collect()
    }

    /// Whether `handler` is attached to `event`.
    pub fn contains(&self, event: HookEvent, handler: HookHandler) -> bool {
        self.registrations
            .iter()
            .any(|r| r.event == event && r.handler == handler)
    }

    /// Number of registrations.
    pub fn len(&self) -> usize {
        self.registrations.len()
    }

    /// True when nothing is registered.
    pub fn is_empty(&self) -> bool {
        self.registrations.is_empty()
    }
}

impl HookDispatcher for HookTable {
    fn register(&mut self, registration: HookRegistration) -> Result<(), HookError> {
        if self.registrations.contains(&registration) {
            tracing::debug!(
                event = %registration.event,
                handler = %registration.handler,
                "Hook already registered"
            );
            return Ok(());
        }
        tracing::debug!(
            event = %registration.event,
            handler = %registration.handler,
            priority = registration.priority,
            "Registering hook"
        );
        self.registrations.push(registration);
        Ok(())
    }
}
