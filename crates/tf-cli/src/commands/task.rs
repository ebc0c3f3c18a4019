mod add;
mod complete;
mod delete;
mod get;
mod list;
mod track;
mod update;

use crate::cli::GlobalFlags;
use crate::cli::subcommands::TaskCommands;
use crate::context::AppContext;

/// Handle `taskflow task`.
pub async fn handle(
    action: &TaskCommands,
    ctx: &mut AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    match action {
        TaskCommands::Add {
            title,
            description,
            deadline,
            priority,
            assignee,
        } => {
            add::run(
                add::Params {
                    title: title.clone(),
                    description: description.clone(),
                    deadline: deadline.clone(),
                    priority: priority.clone(),
                    assignee: assignee.clone(),
                },
                ctx,
                flags,
            )
            .await
        }
        TaskCommands::Update {
            id,
            title,
            description,
            deadline,
            priority,
            assignee,
            time_spent,
        } => {
            update::run(
                update::Params {
                    id: id.clone(),
                    title: title.clone(),
                    description: description.clone(),
                    deadline: deadline.clone(),
                    priority: priority.clone(),
                    assignee: assignee.clone(),
                    time_spent: *time_spent,
                },
                ctx,
                flags,
            )
            .await
        }
        TaskCommands::List {
            status,
            search,
            user,
            all,
            limit,
        } => {
            list::run(
                list::Params {
                    status: status.clone(),
                    search: search.clone(),
                    user: user.clone(),
                    all: *all,
                    limit: *limit,
                },
                ctx,
                flags,
            )
            .await
        }
        TaskCommands::Get { id } => get::run(id, ctx, flags).await,
        TaskCommands::Delete { id } => delete::run(id, ctx, flags).await,
        TaskCommands::Complete { id } => complete::run(id, ctx, flags).await,
        TaskCommands::Track { id } => track::run(id, ctx, flags).await,
    }
}
