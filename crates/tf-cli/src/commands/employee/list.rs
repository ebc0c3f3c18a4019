use tf_engine::stats::employee_summaries;

use crate::cli::GlobalFlags;
use crate::commands::shared::identity::require_admin;
use crate::commands::shared::limit::effective_limit;
use crate::context::AppContext;
use crate::output::output;

pub async fn run(limit: Option<u32>, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    require_admin(ctx, "listing employees")?;
    let limit = effective_limit(limit, flags.limit, ctx.config.general.default_limit);

    let tasks = ctx.service.all_tasks().await;
    let mut summaries = employee_summaries(ctx.roster.users(), &tasks);
    summaries.truncate(limit);
    output(&summaries, flags.format)
}
