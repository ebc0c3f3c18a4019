use clap::ValueEnum;

/// How command results are written to stdout.
#[derive(Clone, Copy, Debug, Eq, PartialEq, ValueEnum)]
pub enum OutputFormat {
    /// Pretty-printed JSON.
    Json,
    /// Aligned columns; second counts such as `time_spent` show as `HH:MM:SS`.
    Table,
    /// Compact single-line JSON, for piping into other tools.
    Raw,
}

/// Flags accepted by every `taskflow` subcommand.
#[derive(Clone, Debug)]
pub struct GlobalFlags {
    pub format: OutputFormat,
    /// Row cap for list commands; falls back to `general.default_limit`.
    pub limit: Option<u32>,
    /// Only errors on stderr.
    pub quiet: bool,
    /// Debug logging on stderr.
    pub verbose: bool,
    /// Project root. Without it the nearest ancestor holding `.taskflow/`
    /// is used, else the current directory.
    pub project: Option<String>,
}
