use tf_core::responses::DashboardResponse;

use crate::cli::GlobalFlags;
use crate::commands::shared::identity::require_identity;
use crate::context::AppContext;
use crate::output::output;

/// Handle `taskflow dashboard`.
pub async fn handle(ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let user_id = require_identity(ctx)?.user_id.clone();
    let stats = ctx.service.task_stats(&user_id).await;
    let recent_tasks = ctx
        .service
        .recent_tasks(&user_id, ctx.config.general.recent_limit)
        .await;

    output(
        &DashboardResponse {
            user_id,
            stats,
            recent_tasks,
        },
        flags.format,
    )
}
