//! CLI argument definitions using the clap derive API.
//!
//! This module is the *only* place that knows about argument names, help
//! text and value parsers.  No business logic lives here.

use std::path::PathBuf;

use clap::{Args, Parser};

use ipsnap_core::domain::FileMode;

pub mod global;
pub use global::GlobalArgs;

// ── Top-level CLI ─────────────────────────────────────────────────────────────

/// Main CLI entry-point.
#[derive(Debug, Parser)]
#[command(
    name    = "ipsnap",
    bin_name = "ipsnap",
    version  = env!("CARGO_PKG_VERSION"),
    author   = env!("CARGO_PKG_AUTHORS"),
    about    = "Write this machine's public IP address to a file",
    long_about = "ipsnap asks a public lookup service for the machine's IP \
                  address and writes it, byte for byte, to the given file.",
    after_help = "EXAMPLES:\n\
        \x20 ipsnap public-ip.txt\n\
        \x20 ipsnap --mode 600 ~/.cache/public-ip\n\
        \x20 ipsnap --endpoint https://api64.ipify.org?format=json ip.txt",
    arg_required_else_help = true,
)]
pub struct Cli {
    /// Flags available on every invocation.
    #[command(flatten)]
    pub global: GlobalArgs,

    /// What to fetch and where to write it.
    #[command(flatten)]
    pub snapshot: SnapshotArgs,
}

// ── snapshot ──────────────────────────────────────────────────────────────────

/// Arguments for the snapshot run.
#[derive(Debug, Args)]
pub struct SnapshotArgs {
    /// File the address is written to.  Created or truncated.
    #[arg(value_name = "OUTPUT", help = "File to write the public IP address to")]
    pub output: PathBuf,

    /// Lookup endpoint returning `{"ip": "..."}`.
    #[arg(
        long = "endpoint",
        value_name = "URL",
        help = "IP lookup endpoint (overrides config)"
    )]
    pub endpoint: Option<String>,

    /// Request timeout in seconds.
    #[arg(
        long = "timeout",
        value_name = "SECS",
        value_parser = clap::value_parser!(u64).range(1..),
        help = "Lookup timeout in seconds (overrides config)"
    )]
    pub timeout: Option<u64>,

    /// Permission bits for the written file, in octal.
    #[arg(
        long = "mode",
        value_name = "OCTAL",
        value_parser = parse_mode,
        help = "File permission bits, e.g. 644 (overrides config)"
    )]
    pub mode: Option<FileMode>,
}

fn parse_mode(raw: &str) -> Result<FileMode, String> {
    raw.parse::<FileMode>().map_err(|e| e.to_string())
}
