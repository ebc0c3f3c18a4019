use clap::Subcommand;

/// Employee roster commands.
#[derive(Clone, Debug, Subcommand)]
pub enum EmployeeCommands {
    /// Add an employee (admin).
    Add {
        #[arg(long)]
        name: String,
        #[arg(long)]
        email: String,
        #[arg(long)]
        password: String,
        #[arg(long, default_value = "")]
        department: String,
        #[arg(long, default_value = "")]
        position: String,
    },
    /// Employees with their task counts.
    List {
        #[arg(long)]
        limit: Option<u32>,
    },
    /// Remove an employee (admin). Their tasks are kept.
    Remove { id: String },
    /// Find employees by name, email, or department.
    Search {
        term: String,
        #[arg(long)]
        limit: Option<u32>,
    },
}
