//! The snapshot command: resolve settings, wire adapters, run the core.

use tracing::{debug, instrument};

use ipsnap_adapters::{IpifySource, LocalFileSink};
use ipsnap_core::{application::execute, domain::OutputDestination, error::IpsnapError};

use crate::{
    cli::SnapshotArgs,
    config::AppConfig,
    error::{CliResult, IntoCli},
    output::OutputManager,
};

/// Settings after CLI flags are layered over the loaded config.
#[derive(Debug, Clone, PartialEq, Eq)]
struct Resolved {
    endpoint: String,
    timeout: std::time::Duration,
    destination: OutputDestination,
}

fn resolve(args: SnapshotArgs, config: &AppConfig) -> CliResult<Resolved> {
    let mode = match args.mode {
        Some(mode) => mode,
        None => config.file_mode()?,
    };

    let destination = OutputDestination::new(args.output)
        .map_err(IpsnapError::from)?
        .with_mode(mode);

    Ok(Resolved {
        endpoint: args.endpoint.unwrap_or_else(|| config.lookup.endpoint.clone()),
        timeout: args
            .timeout
            .map(std::time::Duration::from_secs)
            .unwrap_or_else(|| config.timeout()),
        destination,
    })
}

/// Fetch the public address and write it to the requested file.
#[instrument(skip_all)]
pub fn execute_snapshot(
    args: SnapshotArgs,
    config: AppConfig,
    output: OutputManager,
) -> CliResult<()> {
    let resolved = resolve(args, &config)?;
    debug!(
        endpoint = %resolved.endpoint,
        timeout_secs = resolved.timeout.as_secs(),
        destination = %resolved.destination,
        "Settings resolved"
    );

    let source =
        IpifySource::with_endpoint(resolved.endpoint, resolved.timeout).map_err(IpsnapError::from)?;
    let sink = LocalFileSink::new();

    execute(&source, &sink, &resolved.destination)?;

    output
        .success(&format!(
            "Public IP written to {}",
            resolved.destination.path().display()
        ))
        .with_cli_context(|| "writing summary to stdout")?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::CliError;
    use ipsnap_core::domain::FileMode;
    use std::path::PathBuf;
    use std::time::Duration;

    fn args(output: &str) -> SnapshotArgs {
        SnapshotArgs {
            output: PathBuf::from(output),
            endpoint: None,
            timeout: None,
            mode: None,
        }
    }

    #[test]
    fn config_values_apply_without_flags() {
        let resolved = resolve(args("ip.txt"), &AppConfig::default()).unwrap();

        assert_eq!(resolved.endpoint, "https://api.ipify.org?format=json");
        assert_eq!(resolved.timeout, Duration::from_secs(10));
        assert_eq!(
            resolved.destination,
            OutputDestination::new("ip.txt").unwrap()
        );
    }

    #[test]
    fn flags_override_config() {
        let mut a = args("ip.txt");
        a.endpoint = Some("http://127.0.0.1:1/".into());
        a.timeout = Some(2);
        a.mode = Some(FileMode::new(0o600).unwrap());

        let resolved = resolve(a, &AppConfig::default()).unwrap();

        assert_eq!(resolved.endpoint, "http://127.0.0.1:1/");
        assert_eq!(resolved.timeout, Duration::from_secs(2));
        assert_eq!(resolved.destination.mode().bits(), 0o600);
    }

    #[test]
    fn empty_output_is_user_error() {
        let err = resolve(args(""), &AppConfig::default()).unwrap_err();
        assert!(matches!(err, CliError::Core(IpsnapError::Domain(_))));
        assert_eq!(err.exit_code(), 2);
    }
}
