use tf_core::enums::TaskStatus;
use tf_engine::TaskFilter;
use tf_engine::stats::task_board;

use crate::cli::GlobalFlags;
use crate::cli::root_commands::BoardArgs;
use crate::commands::shared::identity::require_admin;
use crate::commands::shared::limit::effective_limit;
use crate::commands::shared::parse::parse_enum;
use crate::context::AppContext;
use crate::output::output;

/// Handle `taskflow board`.
pub async fn handle(args: &BoardArgs, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    require_admin(ctx, "viewing the task board")?;
    let limit = effective_limit(None, flags.limit, ctx.config.general.default_limit);

    let mut filter = TaskFilter::new();
    if let Some(status) = args.status.as_deref() {
        filter = filter.status(parse_enum::<TaskStatus>(status, "status")?);
    }
    if let Some(search) = args.search.clone() {
        filter = filter.search(search);
    }

    let tasks = ctx.service.filter_tasks(None, &filter).await;
    let running = ctx.service.running_ids().await;
    let mut board = task_board(&tasks, ctx.roster.users(), |id| {
        running.iter().any(|r| r == id)
    });
    board.truncate(limit);
    output(&board, flags.format)
}
