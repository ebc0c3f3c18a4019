mod add;
mod list;
mod remove;
mod search;

use crate::cli::GlobalFlags;
use crate::cli::subcommands::EmployeeCommands;
use crate::context::AppContext;

/// Handle `taskflow employee`.
pub async fn handle(
    action: &EmployeeCommands,
    ctx: &mut AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    match action {
        EmployeeCommands::Add {
            name,
            email,
            password,
            department,
            position,
        } => add::run(
            add::Params {
                name: name.clone(),
                email: email.clone(),
                password: password.clone(),
                department: department.clone(),
                position: position.clone(),
            },
            ctx,
            flags,
        ),
        EmployeeCommands::List { limit } => list::run(*limit, ctx, flags).await,
        EmployeeCommands::Remove { id } => remove::run(id, ctx, flags),
        EmployeeCommands::Search { term, limit } => search::run(term, *limit, ctx, flags),
    }
}
