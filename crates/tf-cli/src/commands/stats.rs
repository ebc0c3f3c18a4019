use crate::cli::GlobalFlags;
use crate::cli::root_commands::StatsArgs;
use crate::commands::shared::identity::require_identity;
use crate::context::AppContext;
use crate::output::output;

/// Handle `taskflow stats`.
pub async fn handle(args: &StatsArgs, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let user_id = match &args.user {
        Some(user) => user.clone(),
        None => require_identity(ctx)?.user_id.clone(),
    };
    let stats = ctx.service.task_stats(&user_id).await;
    output(&stats, flags.format)
}
