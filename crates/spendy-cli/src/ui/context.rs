//! Output mode and terminal facts for one command's rendering.

use std::io::IsTerminal;

use crate::helpers::OutputFormat;

/// How a command prints its result.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputMode {
    /// A single JSON document on stdout
    Json,
    /// Tab-separated rows and `key=value` lines
    #[default]
    Plain,
    /// Headers, tables, badges and bars
    Pretty,
}

impl OutputMode {
    /// `--json` wins over everything. An explicit `--format` is honored next,
    /// except that a dumb or redirected stdout never gets the table layout.
    pub fn resolve(json: bool, format: Option<OutputFormat>, term: &Terminal) -> Self {
        if json {
            return Self::Json;
        }
        match format {
            Some(OutputFormat::Plain) => Self::Plain,
            _ if term.is_tty && !term.dumb => Self::Pretty,
            _ => Self::Plain,
        }
    }

    pub fn is_json(&self) -> bool {
        matches!(self, Self::Json)
    }

    pub fn is_pretty(&self) -> bool {
        matches!(self, Self::Pretty)
    }
}

/// What the process can tell about the terminal it writes to.
#[derive(Debug, Clone, Default)]
pub struct Terminal {
    pub is_tty: bool,
    pub dumb: bool,
    pub no_color: bool,
    /// `COLUMNS`, when set. Tables size themselves to the tty otherwise.
    pub columns: Option<usize>,
}

impl Terminal {
    pub fn detect() -> Self {
        Self {
            is_tty: std::io::stdout().is_terminal(),
            dumb: std::env::var("TERM").is_ok_and(|v| v == "dumb"),
            no_color: std::env::var_os("NO_COLOR").is_some(),
            columns: std::env::var("COLUMNS")
                .ok()
                .and_then(|v| v.parse::<usize>().ok())
                .filter(|&w| w > 0),
        }
    }
}

/// Rendering settings shared by every printer.
#[derive(Debug, Clone)]
pub struct UiContext {
    pub is_tty: bool,
    pub color: bool,
    pub unicode: bool,
    pub width: Option<usize>,
    pub mode: OutputMode,
}

impl UiContext {
    /// Combine terminal facts with the global `--no-color` and `--ascii` flags.
    pub fn new(term: &Terminal, mode: OutputMode, no_color: bool, ascii: bool) -> Self {
        Self {
            is_tty: term.is_tty,
            color: term.is_tty && !term.dumb && !term.no_color && !no_color,
            unicode: !ascii,
            width: term.columns,
            mode,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tty() -> Terminal {
        Terminal {
            is_tty: true,
            ..Terminal::default()
        }
    }

    #[test]
    fn test_json_flag_wins() {
        let mode = OutputMode::resolve(true, Some(OutputFormat::Plain), &tty());
        assert_eq!(mode, OutputMode::Json);
    }

    #[test]
    fn test_plain_format_on_a_tty() {
        let mode = OutputMode::resolve(false, Some(OutputFormat::Plain), &tty());
        assert_eq!(mode, OutputMode::Plain);
    }

    #[test]
    fn test_table_format_needs_a_tty() {
        assert_eq!(
            OutputMode::resolve(false, Some(OutputFormat::Table), &tty()),
            OutputMode::Pretty
        );
        assert_eq!(
            OutputMode::resolve(false, Some(OutputFormat::Table), &Terminal::default()),
            OutputMode::Plain
        );
    }

    #[test]
    fn test_dumb_terminal_is_plain() {
        let term = Terminal {
            dumb: true,
            ..tty()
        };
        assert_eq!(OutputMode::resolve(false, None, &term), OutputMode::Plain);
    }

    #[test]
    fn test_color_needs_tty_and_no_opt_out() {
        let on = UiContext::new(&tty(), OutputMode::Pretty, false, false);
        assert!(on.color);
        assert!(on.unicode);

        let flag = UiContext::new(&tty(), OutputMode::Pretty, true, false);
        assert!(!flag.color);

        let env = Terminal {
            no_color: true,
            ..tty()
        };
        assert!(!UiContext::new(&env, OutputMode::Pretty, false, false).color);

        let piped = UiContext::new(&Terminal::default(), OutputMode::Plain, false, true);
        assert!(!piped.color);
        assert!(!piped.unicode);
    }
}
