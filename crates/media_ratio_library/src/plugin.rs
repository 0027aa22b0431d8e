//! The plugin: hook table plus the operations its handlers run.

use crate::{
    Agent, FilterControl, FilterRequest, HookContext, HookDispatcher, HookEvent, HookHandler,
    HookOutput, HookRegistration, HookTable, HostEnvironment, MEASURE_COMMAND,
};
use media_ratio_core::AttachmentId;
use media_ratio_error::{HookError, MediaRatioResult};
use media_ratio_storage::{
    AttachmentIndex, AttachmentQuery, OptionStore, StoredNames, load_catalog,
    seed_default_catalog,
};
use tracing::{debug, info, instrument, warn};

/// Priority of the `Init` handler, so agents attach before other plugins run.
const INIT_PRIORITY: i32 = 1;

/// Media-by-aspect-ratio plugin.
///
/// Construction decides which agents are registered; [`Self::initialize`]
/// attaches the plugin's own hooks, and [`Self::initialize_agents`] (run on
/// the host's `Init` event) attaches the hooks of the agents the current user
/// is permitted to use.
#[derive(Debug, Clone, PartialEq, Eq, derive_getters::Getters)]
pub struct MediaRatioPlugin {
    /// Stored-name prefixes
    names: StoredNames,
    /// Agents registered for this request
    agents: Vec<Agent>,
}

impl MediaRatioPlugin {
    /// Register the agents appropriate to `env`.
    pub fn new(names: StoredNames, env: &HostEnvironment) -> Self {
        Self {
            names,
            agents: Agent::registered(env),
        }
    }

    /// The plugin's own hooks.
    pub fn hooks(&self) -> Vec<HookRegistration> {
        vec![
            HookRegistration::new(HookEvent::Activate, HookHandler::SeedCatalog),
            HookRegistration::new(HookEvent::Init, HookHandler::InitializeAgents)
                .with_priority(INIT_PRIORITY),
        ]
    }

    /// Attach the plugin's own hooks.
    ///
    /// # Errors
    ///
    /// The first registration the dispatcher refuses.
    pub fn try_initialize(&self, dispatcher: &mut dyn HookDispatcher) -> Result<usize, HookError> {
        let hooks = self.hooks();
        for registration in &hooks {
            dispatcher.register(*registration)?;
        }
        Ok(hooks.len())
    }

    /// Attach the plugin's own hooks, logging instead of failing.
    ///
    /// The host keeps running without this plugin when registration fails.
    /// Returns whether initialization succeeded.
    #[instrument(skip(self, dispatcher))]
    pub fn initialize(&self, dispatcher: &mut dyn HookDispatcher) -> bool {
        match self.try_initialize(dispatcher) {
            Ok(count) => {
                info!(hooks = count, "Plugin initialized");
                true
            }
            Err(e) => {
                warn!(error = %e, "Unable to initialize plugin; continuing without it");
                false
            }
        }
    }

    /// Attach hooks for every registered agent `env` permits. Returns the
    /// agents that were initialized.
    ///
    /// # Errors
    ///
    /// The first registration the dispatcher refuses.
    #[instrument(skip(self, dispatcher))]
    pub fn initialize_agents(
        &self,
        dispatcher: &mut dyn HookDispatcher,
        env: &HostEnvironment,
    ) -> Result<Vec<Agent>, HookError> {
        let mut initialized = Vec::new();
        for agent in &self.agents {
            if !agent.permitted(env) {
                debug!(%agent, "Agent not permitted here");
                continue;
            }
            for registration in agent.hooks() {
                dispatcher.register(registration)?;
            }
            initialized.push(*agent);
        }
        info!(agents = initialized.len(), "Agents initialized");
        Ok(initialized)
    }

    /// Activation handler: write the default catalog if none is stored.
    pub async fn activate<S>(&self, store: &S) -> MediaRatioResult<bool>
    where
        S: OptionStore + ?Sized,
    {
        seed_default_catalog(store, &self.names).await
    }

    /// Dropdown for the current request.
    pub async fn filter_control<S>(
        &self,
        store: &S,
        request: &FilterRequest,
    ) -> MediaRatioResult<FilterControl>
    where
        S: OptionStore + ?Sized,
    {
        let catalog = load_catalog(store, &self.names).await?;
        Ok(FilterControl::new(&catalog, *request.ratio()))
    }

    /// Query handler shared by the grid and list views.
    pub fn filter_query(&self, request: &FilterRequest, query: AttachmentQuery) -> AttachmentQuery {
        request.apply(query, &self.names)
    }

    /// Attachments matching `request`, ascending.
    #[instrument(skip(self, store))]
    pub async fn find_attachments<S>(
        &self,
        store: &S,
        request: &FilterRequest,
    ) -> MediaRatioResult<Vec<AttachmentId>>
    where
        S: AttachmentIndex + ?Sized,
    {
        let query = self.filter_query(request, AttachmentQuery::attachments());
        store.find_ids(&query).await
    }

    /// Run every handler attached to `event`, lowest priority first.
    ///
    /// `InitializeAgents` registers into `hooks` as it runs. Successive
    /// `ApplyFilterRequest` handlers refine the same query.
    ///
    /// # Errors
    ///
    /// The first handler failure; later handlers do not run.
    #[instrument(skip(self, hooks, context))]
    pub async fn dispatch<S>(
        &self,
        hooks: &mut HookTable,
        event: HookEvent,
        context: &HookContext<'_, S>,
    ) -> MediaRatioResult<Vec<HookOutput>>
    where
        S: OptionStore + ?Sized,
    {
        let handlers = hooks.handlers_for(event);
        if handlers.is_empty() {
            debug!("No handlers attached");
        }

        let mut outputs = Vec::with_capacity(handlers.len());
        let mut query = context.query.clone();
        for handler in handlers {
            debug!(%handler, "Running hook");
            let output = match handler {
                HookHandler::SeedCatalog => HookOutput::Seeded(self.activate(context.store).await?),
                HookHandler::InitializeAgents => {
                    HookOutput::AgentsInitialized(self.initialize_agents(hooks, context.env)?)
                }
                HookHandler::RatioFilterControl => HookOutput::Control(
                    self.filter_control(context.store, &context.request).await?,
                ),
                HookHandler::ApplyFilterRequest => {
                    query = self.filter_query(&context.request, query);
                    HookOutput::Query(query.clone())
                }
                HookHandler::MeasureCommand => HookOutput::Command(MEASURE_COMMAND),
            };
            outputs.push(output);
        }
        Ok(outputs)
    }
}
