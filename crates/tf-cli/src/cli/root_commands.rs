use clap::{Args, Subcommand};

use crate::cli::subcommands::{EmployeeCommands, TaskCommands};

/// Top-level command tree.
#[derive(Clone, Debug, Subcommand)]
pub enum Commands {
    /// Task lifecycle and timers.
    Task {
        #[command(subcommand)]
        action: TaskCommands,
    },
    /// Employee roster (admin).
    Employee {
        #[command(subcommand)]
        action: EmployeeCommands,
    },
    /// Task counts for a user.
    Stats(StatsArgs),
    /// Stats plus the most recent tasks of the signed-in user.
    Dashboard,
    /// Time left until a deadline.
    Remaining(RemainingArgs),
    /// Every task with its assignee's name (admin).
    Board(BoardArgs),
}

#[derive(Clone, Debug, Args)]
pub struct StatsArgs {
    /// User to count for (defaults to the signed-in user).
    #[arg(long)]
    pub user: Option<String>,
}

#[derive(Clone, Debug, Args)]
pub struct RemainingArgs {
    /// Deadline: RFC 3339, `YYYY-MM-DDTHH:MM`, `YYYY-MM-DD HH:MM`, or `YYYY-MM-DD`.
    pub deadline: String,
}

#[derive(Clone, Debug, Args)]
pub struct BoardArgs {
    /// Only tasks with this status.
    #[arg(long)]
    pub status: Option<String>,
    /// Case-insensitive match on title or description.
    #[arg(long)]
    pub search: Option<String>,
}
