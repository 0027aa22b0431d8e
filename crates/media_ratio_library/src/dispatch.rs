//! Arguments and results of running hooks for an event.

use crate::{Agent, FilterControl, FilterRequest, HostEnvironment};
use media_ratio_storage::AttachmentQuery;

/// Name of the subcommand the command line agent offers.
pub const MEASURE_COMMAND: &str = "measure";

/// What the host hands to the handlers of one event.
#[derive(Debug)]
pub struct HookContext<'a, S: ?Sized> {
    pub(crate) store: &'a S,
    pub(crate) env: &'a HostEnvironment,
    pub(crate) request: FilterRequest,
    pub(crate) query: AttachmentQuery,
}

impl<'a, S: ?Sized> HookContext<'a, S> {
    /// Context with no filter request and an unconstrained attachment query.
    pub fn new(store: &'a S, env: &'a HostEnvironment) -> Self {
        Self {
            store,
            env,
            request: FilterRequest::default(),
            query: AttachmentQuery::attachments(),
        }
    }

    /// Filter parameters of the current request.
    pub fn with_request(mut self, request: FilterRequest) -> Self {
        self.request = request;
        self
    }

    /// The host's query before filtering.
    pub fn with_query(mut self, query: AttachmentQuery) -> Self {
        self.query = query;
        self
    }
}

/// Result of one handler.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HookOutput {
    /// Catalog seeding ran; `true` when the defaults were written
    Seeded(bool),
    /// Agents whose hooks were attached
    AgentsInitialized(Vec<Agent>),
    /// Ratio dropdown for the toolbar
    Control(FilterControl),
    /// Attachment query with the filter applied
    Query(AttachmentQuery),
    /// Subcommand offered to the host command line
    Command(&'static str),
}
