//! Local filesystem sink using std::fs.

use std::io::{self, Write};
use std::path::Path;

use tracing::{debug, instrument};

use ipsnap_core::{
    application::{PersistError, ports::OutputSink},
    domain::{FileMode, OutputDestination},
};

/// Production sink writing the payload to a file on disk.
///
/// The file is created or truncated. On Unix the destination's mode is
/// applied before any byte is written, and only when the file's current mode
/// differs, so a failed chmod leaves the old content in place.
#[derive(Debug, Clone, Copy)]
pub struct LocalFileSink;

impl LocalFileSink {
    /// Create a new local file sink.
    pub fn new() -> Self {
        Self
    }
}

impl Default for LocalFileSink {
    fn default() -> Self {
        Self::new()
    }
}

impl OutputSink for LocalFileSink {
    #[instrument(skip_all, fields(path = %destination.path().display(), bytes = payload.len()))]
    fn persist(
        &self,
        destination: &OutputDestination,
        payload: &[u8],
    ) -> Result<(), PersistError> {
        let path = destination.path();

        write_with_mode(path, payload, destination.mode())
            .map_err(|e| map_io_error(path, e, "write file"))?;

        debug!(mode = %destination.mode(), "File written");
        Ok(())
    }
}

#[cfg(unix)]
fn write_with_mode(path: &Path, payload: &[u8], mode: FileMode) -> io::Result<()> {
    use std::fs::{OpenOptions, Permissions};
    use std::os::unix::fs::{OpenOptionsExt, PermissionsExt};

    // Truncation waits until the mode is settled.
    let mut file = OpenOptions::new()
        .write(true)
        .create(true)
        .truncate(false)
        .mode(mode.bits())
        .open(path)?;

    let current = file.metadata()?.permissions().mode();
    if mode_differs(current, mode) {
        file.set_permissions(Permissions::from_mode(mode.bits()))?;
    }

    file.set_len(0)?;
    file.write_all(payload)?;
    file.sync_all()
}

/// Compares permission bits only; the file-type bits of `st_mode` are ignored.
#[cfg(unix)]
fn mode_differs(st_mode: u32, mode: FileMode) -> bool {
    st_mode & 0o7777 != mode.bits()
}

#[cfg(not(unix))]
fn write_with_mode(path: &Path, payload: &[u8], _mode: FileMode) -> io::Result<()> {
    // No Unix permission bits here; the platform default ACL applies.
    let mut file = std::fs::File::create(path)?;
    file.write_all(payload)?;
    file.sync_all()
}

fn map_io_error(path: &Path, e: io::Error, operation: &str) -> PersistError {
    PersistError::new(path, format!("Failed to {}: {}", operation, e))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn writes_payload_verbatim() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("output.txt");
        let destination = OutputDestination::new(&path).unwrap();

        LocalFileSink::new()
            .persist(&destination, b"184.162.7.66")
            .unwrap();

        assert_eq!(std::fs::read(&path).unwrap(), b"184.162.7.66");
    }

    #[test]
    fn truncates_existing_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("output.txt");
        std::fs::write(&path, "2001:0db8:85a3:0000:0000:8a2e:0370:7334").unwrap();
        let destination = OutputDestination::new(&path).unwrap();

        LocalFileSink::new().persist(&destination, b"10.0.0.1").unwrap();

        assert_eq!(std::fs::read_to_string(&path).unwrap(), "10.0.0.1");
    }

    #[cfg(unix)]
    #[test]
    fn applies_requested_mode() {
        use std::os::unix::fs::PermissionsExt;

        let dir = TempDir::new().unwrap();
        let default_path = dir.path().join("default.txt");
        let private_path = dir.path().join("private.txt");

        LocalFileSink::new()
            .persist(&OutputDestination::new(&default_path).unwrap(), b"1.1.1.1")
            .unwrap();
        LocalFileSink::new()
            .persist(
                &OutputDestination::new(&private_path)
                    .unwrap()
                    .with_mode(FileMode::new(0o600).unwrap()),
                b"1.1.1.1",
            )
            .unwrap();

        let mode_of = |p: &Path| std::fs::metadata(p).unwrap().permissions().mode() & 0o7777;
        assert_eq!(mode_of(default_path.as_path()), 0o644);
        assert_eq!(mode_of(private_path.as_path()), 0o600);
    }

    #[cfg(unix)]
    #[test]
    fn mode_comparison_ignores_file_type_bits() {
        assert!(!mode_differs(0o100644, FileMode::DEFAULT));
        assert!(mode_differs(0o100600, FileMode::DEFAULT));
        assert!(mode_differs(0o104644, FileMode::DEFAULT));
    }

    #[cfg(unix)]
    #[test]
    fn existing_file_gets_mode_and_content_replaced() {
        use std::fs::Permissions;
        use std::os::unix::fs::PermissionsExt;

        let dir = TempDir::new().unwrap();
        let path = dir.path().join("output.txt");
        std::fs::write(&path, "255.255.255.255 stale and longer").unwrap();
        std::fs::set_permissions(&path, Permissions::from_mode(0o600)).unwrap();

        LocalFileSink::new()
            .persist(&OutputDestination::new(&path).unwrap(), b"10.0.0.1")
            .unwrap();

        let meta = std::fs::metadata(&path).unwrap();
        assert_eq!(meta.permissions().mode() & 0o7777, 0o644);
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "10.0.0.1");
    }

    #[cfg(unix)]
    #[test]
    fn existing_file_with_matching_mode_is_rewritten() {
        use std::fs::Permissions;
        use std::os::unix::fs::PermissionsExt;

        let dir = TempDir::new().unwrap();
        let path = dir.path().join("output.txt");
        std::fs::write(&path, "old").unwrap();
        std::fs::set_permissions(&path, Permissions::from_mode(0o644)).unwrap();

        LocalFileSink::new()
            .persist(&OutputDestination::new(&path).unwrap(), b"2001:db8::1")
            .unwrap();

        assert_eq!(std::fs::read_to_string(&path).unwrap(), "2001:db8::1");
    }

    #[test]
    fn missing_parent_directory_is_persist_error() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("missing").join("output.txt");
        let destination = OutputDestination::new(&path).unwrap();

        let err = LocalFileSink::new()
            .persist(&destination, b"10.0.0.1")
            .unwrap_err();

        assert_eq!(err.path, path);
        assert!(err.reason.starts_with("Failed to write file"));
    }
}
