//! Groups of hooks that attach together.

use crate::{HookEvent, HookHandler, HookRegistration, HostEnvironment};

/// A bundle of hooks with its own gate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, strum::Display)]
#[strum(serialize_all = "kebab-case")]
pub enum Agent {
    /// The `media measure` subcommand
    CommandLine,
    /// Ratio dropdown and query filtering in the media library
    MediaLibrary,
}

impl Agent {
    /// Agents worth registering for this request. The media library agent is
    /// dashboard-only.
    pub fn registered(env: &HostEnvironment) -> Vec<Agent> {
        let mut agents = Vec::with_capacity(2);
        if *env.is_admin() {
            agents.push(Agent::MediaLibrary);
        }
        agents.push(Agent::CommandLine);
        agents
    }

    /// Whether this agent may attach its hooks.
    pub fn permitted(&self, env: &HostEnvironment) -> bool {
        match self {
            Agent::CommandLine => *env.is_cli(),
            Agent::MediaLibrary => *env.is_admin() && *env.can_upload_files(),
        }
    }

    /// Hooks this agent attaches.
    pub fn hooks(&self) -> Vec<HookRegistration> {
        match self {
            Agent::CommandLine => vec![HookRegistration::new(
                HookEvent::RegisterCommands,
                HookHandler::MeasureCommand,
            )],
            Agent::MediaLibrary => vec![
                HookRegistration::new(HookEvent::RenderRatioFilter, HookHandler::RatioFilterControl),
                HookRegistration::new(HookEvent::FilterGridQuery, HookHandler::ApplyFilterRequest),
                HookRegistration::new(HookEvent::FilterListQuery, HookHandler::ApplyFilterRequest),
            ],
        }
    }
}
