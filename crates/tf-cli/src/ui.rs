use std::io::IsTerminal;
use std::sync::OnceLock;

use crate::cli::{GlobalFlags, OutputFormat};

#[derive(Clone, Copy, Debug)]
pub struct UiPrefs {
    pub table_color: bool,
    /// Status lines on stderr (e.g. while tracking a timer).
    pub chatter: bool,
    pub term_width: Option<usize>,
}

static UI_PREFS: OnceLock<UiPrefs> = OnceLock::new();

pub fn init(flags: &GlobalFlags) {
    let _ = UI_PREFS.set(prefs_for(
        flags,
        std::io::stdout().is_terminal(),
        std::env::var_os("NO_COLOR").is_some(),
        std::env::var("COLUMNS").ok().as_deref(),
    ));
}

fn prefs_for(
    flags: &GlobalFlags,
    is_tty: bool,
    no_color: bool,
    columns: Option<&str>,
) -> UiPrefs {
    let table = flags.format == OutputFormat::Table;
    UiPrefs {
        table_color: is_tty && table && !flags.quiet && !no_color,
        chatter: !flags.quiet,
        term_width: columns
            .and_then(|value| value.parse::<usize>().ok())
            .filter(|width| *width >= 40),
    }
}

#[must_use]
pub fn prefs() -> UiPrefs {
    *UI_PREFS.get().unwrap_or(&UiPrefs {
        table_color: false,
        chatter: true,
        term_width: None,
    })
}

/// Print a status line to stderr unless `--quiet`.
pub fn status(message: &str) {
    if prefs().chatter {
        eprintln!("{message}");
    }
}

#[cfg(test)]
mod tests {
    use super::prefs_for;
    use crate::cli::{GlobalFlags, OutputFormat};

    fn flags(format: OutputFormat, quiet: bool) -> GlobalFlags {
        GlobalFlags {
            format,
            limit: None,
            quiet,
            verbose: false,
            project: None,
        }
    }

    #[test]
    fn color_only_for_tty_tables() {
        assert!(prefs_for(&flags(OutputFormat::Table, false), true, false, None).table_color);
        assert!(!prefs_for(&flags(OutputFormat::Json, false), true, false, None).table_color);
        assert!(!prefs_for(&flags(OutputFormat::Table, false), false, false, None).table_color);
        assert!(!prefs_for(&flags(OutputFormat::Table, false), true, true, None).table_color);
    }

    #[test]
    fn narrow_columns_are_ignored() {
        let flags = flags(OutputFormat::Table, true);
        assert_eq!(prefs_for(&flags, true, false, Some("120")).term_width, Some(120));
        assert_eq!(prefs_for(&flags, true, false, Some("20")).term_width, None);
        assert!(!prefs_for(&flags, true, false, None).chatter);
    }
}
