use clap::Subcommand;

/// Task lifecycle commands.
#[derive(Clone, Debug, Subcommand)]
pub enum TaskCommands {
    /// Create a pending task.
    Add {
        #[arg(long)]
        title: String,
        #[arg(long)]
        description: Option<String>,
        /// RFC 3339, `YYYY-MM-DDTHH:MM`, `YYYY-MM-DD HH:MM`, or `YYYY-MM-DD`.
        #[arg(long)]
        deadline: String,
        /// low, medium, or high.
        #[arg(long)]
        priority: Option<String>,
        /// User id to assign (defaults to the signed-in user).
        #[arg(long)]
        assignee: Option<String>,
    },
    /// Edit task fields. Status is changed with track/complete.
    Update {
        id: String,
        #[arg(long)]
        title: Option<String>,
        #[arg(long)]
        description: Option<String>,
        #[arg(long)]
        deadline: Option<String>,
        #[arg(long)]
        priority: Option<String>,
        #[arg(long)]
        assignee: Option<String>,
        /// Override accrued time, in seconds.
        #[arg(long)]
        time_spent: Option<u64>,
    },
    /// List tasks of the signed-in user.
    List {
        #[arg(long)]
        status: Option<String>,
        #[arg(long)]
        search: Option<String>,
        /// Another user's tasks.
        #[arg(long, conflicts_with = "all")]
        user: Option<String>,
        /// Every task (admin).
        #[arg(long)]
        all: bool,
        #[arg(long)]
        limit: Option<u32>,
    },
    /// Get a task by ID.
    Get { id: String },
    /// Delete a task.
    Delete { id: String },
    /// Mark a task completed.
    Complete { id: String },
    /// Run the task's timer until Ctrl-C, then pause it.
    Track { id: String },
}
