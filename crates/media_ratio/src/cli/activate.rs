//! The activate command.

use super::Context;
use media_ratio::{
    HookContext, HookEvent, HookOutput, HookTable, HostEnvironment, MediaRatioPlugin,
    MediaRatioResult, Notice,
};

/// Wire the plugin as a command-line host would, then fire `Activate`.
pub async fn handle_activate(ctx: &Context) -> MediaRatioResult<()> {
    let env = HostEnvironment::cli();
    let plugin = MediaRatioPlugin::new(ctx.names.clone(), &env);
    let hook_context = HookContext::new(&ctx.library, &env);

    let mut hooks = HookTable::new();
    if plugin.initialize(&mut hooks) {
        plugin
            .dispatch(&mut hooks, HookEvent::Init, &hook_context)
            .await?;
    }
    for registration in hooks.registrations() {
        tracing::debug!(
            event = %registration.event(),
            handler = %registration.handler(),
            "Hook attached"
        );
    }

    let outputs = plugin
        .dispatch(&mut hooks, HookEvent::Activate, &hook_context)
        .await?;
    let seeded = outputs
        .iter()
        .any(|output| matches!(output, HookOutput::Seeded(true)));

    if seeded {
        Notice::success("Default aspect ratios added.").print();
    } else {
        Notice::warning("Aspect ratios already configured.").print();
    }
    Ok(())
}
