//! Application configuration.
//!
//! [`AppConfig`] is loaded once at startup and passed down by value.  The
//! CLI layer owns config; the core crate never sees it.
//!
//! # Resolution order (highest priority first)
//!
//! 1. CLI flags (handled at the call-site, not here)
//! 2. Environment variables: `IPSNAP_LOOKUP__ENDPOINT`, `IPSNAP_OUTPUT__MODE`, ...
//! 3. Config file (`--config FILE`, else the platform config dir if present)
//! 4. Built-in defaults (always present)

use std::path::PathBuf;
use std::time::Duration;

use config::{Config, Environment, File};
use serde::{Deserialize, Serialize};

use ipsnap_adapters::ip_source::{DEFAULT_ENDPOINT, DEFAULT_TIMEOUT};
use ipsnap_core::domain::FileMode;

use crate::error::{CliError, CliResult};

const ENV_PREFIX: &str = "IPSNAP";

/// Application configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Public address lookup.
    pub lookup: LookupConfig,
    /// Output settings.
    pub output: OutputConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LookupConfig {
    pub endpoint: String,
    pub timeout_secs: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    /// Octal permission bits, e.g. `"644"`.
    pub mode: String,
    pub no_color: bool,
}

impl Default for LookupConfig {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.into(),
            timeout_secs: DEFAULT_TIMEOUT.as_secs(),
        }
    }
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            mode: FileMode::DEFAULT.to_string(),
            no_color: false,
        }
    }
}

impl AppConfig {
    /// Load configuration, layering file and environment over the defaults.
    ///
    /// An explicit `config_file` must exist; the default location is optional.
    pub fn load(config_file: Option<&PathBuf>) -> CliResult<Self> {
        let file = match config_file {
            Some(path) => File::from(path.as_path()).required(true),
            None => File::from(Self::config_path()).required(false),
        };

        Self::load_from(file)
    }

    fn load_from<T>(file: T) -> CliResult<Self>
    where
        T: config::Source + Send + Sync + 'static,
    {
        let defaults = Config::try_from(&Self::default()).map_err(config_error)?;

        let cfg: Self = Config::builder()
            .add_source(defaults)
            .add_source(file)
            .add_source(
                Environment::with_prefix(ENV_PREFIX)
                    .prefix_separator("_")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()
            .and_then(Config::try_deserialize)
            .map_err(config_error)?;

        cfg.validate()?;
        Ok(cfg)
    }

    /// Path to the default configuration file.
    ///
    /// Uses `directories::ProjectDirs` for cross-platform correctness,
    /// falling back to `.ipsnap.toml` in the current directory.
    pub fn config_path() -> PathBuf {
        directories::ProjectDirs::from("com", "ipsnap", "ipsnap")
            .map(|d| d.config_dir().join("config.toml"))
            .unwrap_or_else(|| PathBuf::from(".ipsnap.toml"))
    }

    /// Permission bits configured for the output file.
    pub fn file_mode(&self) -> CliResult<FileMode> {
        self.output
            .mode
            .parse::<FileMode>()
            .map_err(|e| CliError::ConfigError {
                message: format!("output.mode: {e}"),
                source: Some(Box::new(e)),
            })
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.lookup.timeout_secs)
    }

    fn validate(&self) -> CliResult<()> {
        if self.lookup.endpoint.trim().is_empty() {
            return Err(CliError::ConfigError {
                message: "lookup.endpoint must not be empty".into(),
                source: None,
            });
        }
        if self.lookup.timeout_secs == 0 {
            return Err(CliError::ConfigError {
                message: "lookup.timeout_secs must be at least 1".into(),
                source: None,
            });
        }
        self.file_mode().map(|_| ())
    }
}

fn config_error(e: config::ConfigError) -> CliError {
    CliError::ConfigError {
        message: e.to_string(),
        source: Some(Box::new(e)),
    }
}
