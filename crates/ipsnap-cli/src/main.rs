//! # ipsnap CLI
//!
//! Writes the machine's public IP address to a file.
//!
//! ## Startup sequence
//!
//! 1. Parse CLI arguments (clap handles `--help` / `--version` early-exit).
//! 2. Load configuration (defaults + file + env).
//! 3. Initialise the tracing subscriber (logging).
//! 4. Build the [`OutputManager`].
//! 5. Run the snapshot.
//! 6. Translate any [`CliError`] into a user-facing message and exit code.
//!
//! ## Exit codes
//!
//! | Code | Meaning                                 |
//! |------|-----------------------------------------|
//! |  0   | Success                                 |
//! |  1   | Lookup, write or other system failure   |
//! |  2   | User / input error                      |
//! |  4   | Configuration error                     |

use std::process::ExitCode;

use clap::Parser;
use tracing::{debug, info};

use crate::{
    cli::Cli,
    config::AppConfig,
    error::{CliError, CliResult},
    logging::init_logging,
    output::{OutputManager, color_enabled},
};

mod cli;
mod commands;
mod config;
mod error;
mod logging;
mod output;

fn main() -> ExitCode {
    // Load .env before anything else, including tracing init.
    // A missing .env is not an error.
    let _ = dotenvy::dotenv();

    // ── 1. Parse arguments ────────────────────────────────────────────────
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => {
            // --help and --version also arrive here and must exit 0.
            let _ = e.print();
            return if e.use_stderr() {
                ExitCode::from(2)
            } else {
                ExitCode::SUCCESS
            };
        }
    };

    // ── 2. Load configuration ─────────────────────────────────────────────
    // Loaded before tracing so `output.no_color` reaches the log layer too.
    let config = AppConfig::load(cli.global.config.as_ref());
    let color = color_enabled(&cli.global, config.as_ref().ok());
    let verbose = cli.global.verbose > 0;

    // ── 3. Initialise tracing ─────────────────────────────────────────────
    if let Err(e) = init_logging(&cli.global, color) {
        eprintln!("Failed to initialise logging: {e}");
        return ExitCode::from(1);
    }

    debug!(
        verbose = cli.global.verbose,
        quiet = cli.global.quiet,
        color,
        "CLI started"
    );

    let config = match config {
        Ok(cfg) => cfg,
        Err(e) => return handle_error(e, verbose, color),
    };

    // ── 4–5. Build output and run ─────────────────────────────────────────
    match run(cli, config) {
        Ok(()) => {
            info!("ipsnap completed successfully");
            ExitCode::SUCCESS
        }
        Err(e) => handle_error(e, verbose, color),
    }
}

fn run(cli: Cli, config: AppConfig) -> CliResult<()> {
    let output = OutputManager::new(&cli.global, &config);

    commands::snapshot::execute_snapshot(cli.snapshot, config, output)
}

/// Translate a `CliError` into a user message and an appropriate exit code.
fn handle_error(err: CliError, verbose: bool, color: bool) -> ExitCode {
    err.log();

    // Straight to stderr so the message survives a redirected stdout.
    let msg = if color && std::io::IsTerminal::is_terminal(&std::io::stderr()) {
        err.format_colored(verbose)
    } else {
        err.format_plain(verbose)
    };
    eprint!("{msg}");

    ExitCode::from(err.exit_code())
}

// ── tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_structure_is_valid() {
        // Clap's internal consistency check: missing values, conflicts, etc.
        Cli::command().debug_assert();
    }

    #[test]
    fn cli_version_matches_cargo() {
        let cmd = Cli::command();
        assert_eq!(cmd.get_version(), Some(env!("CARGO_PKG_VERSION")));
    }

    #[test]
    fn cli_has_author() {
        let cmd = Cli::command();
        assert!(cmd.get_author().is_some());
    }
}
