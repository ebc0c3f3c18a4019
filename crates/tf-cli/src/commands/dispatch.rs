use crate::cli::GlobalFlags;
use crate::cli::root_commands::Commands;
use crate::commands;
use crate::context::AppContext;

/// Dispatch a parsed command to the corresponding handler module.
pub async fn dispatch(
    command: Commands,
    ctx: &mut AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    match command {
        Commands::Task { action } => commands::task::handle(&action, ctx, flags).await,
        Commands::Employee { action } => commands::employee::handle(&action, ctx, flags).await,
        Commands::Stats(args) => commands::stats::handle(&args, ctx, flags).await,
        Commands::Dashboard => commands::dashboard::handle(ctx, flags).await,
        Commands::Remaining(args) => commands::remaining::handle(&args, ctx, flags),
        Commands::Board(args) => commands::board::handle(&args, ctx, flags).await,
    }
}
