#![allow(clippy::nursery)]
#![allow(clippy::pedantic)]
#![allow(clippy::unused_async)]

use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;

mod bootstrap;
mod cli;
mod commands;
mod context;
mod output;
mod ui;
mod write_lock;

#[tokio::main]
async fn main() {
    if let Err(error) = run().await {
        eprintln!("taskflow error: {error:#}");
        std::process::exit(1);
    }
}

async fn run() -> anyhow::Result<()> {
    let cli = cli::Cli::parse();
    init_tracing(cli.quiet, cli.verbose)?;

    let flags = cli.global_flags();
    ui::init(&flags);

    let project_root = resolve_project_root(flags.project.as_deref())?;
    let config = bootstrap::load_config(&project_root)?;
    context::warn_unconfigured(&config);

    let command = cli.command;
    let write_lock = if command_requires_write_lock(&command) {
        let data_dir = config.storage.data_dir_in(&project_root);
        Some(write_lock::acquire(&data_dir).await?)
    } else {
        None
    };

    let mut ctx = context::AppContext::init(&project_root, config)
        .context("failed to initialize taskflow application context")?;

    let result = commands::dispatch::dispatch(command, &mut ctx, &flags).await;
    let stopped = ctx.service.shutdown().await;
    if stopped > 0 {
        tracing::warn!(stopped, "stopped timers left running at exit");
    }
    drop(write_lock);
    result
}

fn init_tracing(quiet: bool, verbose: bool) -> anyhow::Result<()> {
    let level = if quiet {
        "error"
    } else if verbose {
        "debug"
    } else {
        "warn"
    };

    let filter = tracing_subscriber::EnvFilter::try_from_env("TASKFLOW_LOG")
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|error| anyhow::anyhow!("failed to initialize tracing subscriber: {error}"))?;

    Ok(())
}

/// Pick the project root: `--project` if given, else the nearest ancestor
/// holding a `.taskflow` directory, else the current directory.
fn resolve_project_root(project_override: Option<&str>) -> anyhow::Result<PathBuf> {
    if let Some(path) = project_override {
        let explicit = PathBuf::from(path);

        if explicit
            .file_name()
            .and_then(|name| name.to_str())
            .is_some_and(|name| name == tf_config::PROJECT_DIR)
        {
            return explicit
                .parent()
                .map(std::path::Path::to_path_buf)
                .context("invalid --project path: '.taskflow' directory has no parent");
        }

        if explicit.is_dir() {
            return Ok(explicit);
        }

        anyhow::bail!(
            "invalid --project '{}': directory does not exist",
            explicit.display()
        );
    }

    let start = std::env::current_dir().context("failed to read current directory")?;
    Ok(context::find_project_root(&start).unwrap_or(start))
}

fn command_requires_write_lock(command: &cli::Commands) -> bool {
    use crate::cli::subcommands::{EmployeeCommands, TaskCommands};

    match command {
        cli::Commands::Task { action } => !matches!(
            action,
            TaskCommands::List { .. } | TaskCommands::Get { .. }
        ),
        cli::Commands::Employee { action } => matches!(
            action,
            EmployeeCommands::Add { .. } | EmployeeCommands::Remove { .. }
        ),
        cli::Commands::Stats(_)
        | cli::Commands::Dashboard
        | cli::Commands::Remaining(_)
        | cli::Commands::Board(_) => false,
    }
}

#[cfg(test)]
mod tests {
    use clap::Parser;

    use super::command_requires_write_lock;
    use crate::cli::Cli;

    fn requires_lock(args: &[&str]) -> bool {
        let cli = Cli::try_parse_from(args).expect("cli should parse");
        command_requires_write_lock(&cli.command)
    }

    #[test]
    fn mutating_commands_take_the_lock() {
        assert!(requires_lock(&["taskflow", "task", "complete", "tsk-1"]));
        assert!(requires_lock(&["taskflow", "task", "track", "tsk-1"]));
        assert!(requires_lock(&["taskflow", "employee", "remove", "usr-1"]));
    }

    #[test]
    fn read_only_commands_skip_the_lock() {
        assert!(!requires_lock(&["taskflow", "task", "list"]));
        assert!(!requires_lock(&["taskflow", "dashboard"]));
        assert!(!requires_lock(&["taskflow", "employee", "search", "eng"]));
        assert!(!requires_lock(&["taskflow", "remaining", "2026-03-01"]));
    }
}
