//! User-facing stdout messages.

use std::io;

use console::Term;
use owo_colors::OwoColorize;

use crate::cli::GlobalArgs;
use crate::config::AppConfig;

/// Whether ANSI colour is allowed by `--no-color`/`NO_COLOR` and by
/// `output.no_color` in the loaded config.
pub fn color_enabled(args: &GlobalArgs, config: Option<&AppConfig>) -> bool {
    !args.no_color && !config.is_some_and(|c| c.output.no_color)
}

/// Manages CLI output based on flags and configuration.
pub struct OutputManager {
    quiet: bool,
    no_color: bool,
    term: Term,
}

impl OutputManager {
    /// Build an `OutputManager` from parsed CLI flags and loaded config.
    pub fn new(args: &GlobalArgs, config: &AppConfig) -> Self {
        Self {
            quiet: args.quiet,
            no_color: !color_enabled(args, Some(config)),
            term: Term::stdout(),
        }
    }

    /// Success indicator: `✓ <msg>`; suppressed in quiet mode.
    pub fn success(&self, msg: &str) -> io::Result<()> {
        if self.quiet {
            return Ok(());
        }
        self.term.write_line(&self.render_success(msg))
    }

    fn render_success(&self, msg: &str) -> String {
        if !self.supports_color() {
            format!("\u{2713} {msg}") // ✓
        } else {
            format!("{} {}", "\u{2713}".green().bold(), msg.green())
        }
    }

    /// `true` if ANSI colours are enabled.
    pub fn supports_color(&self) -> bool {
        !self.no_color
    }
}
