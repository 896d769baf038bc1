//! Domain value objects: PublicIp, FileMode, OutputDestination.
//!
//! These are pure value types with equality-by-value and no identity. None of
//! them perform I/O; they only describe what is fetched and where it goes.

use std::fmt;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use crate::domain::error::DomainError;

// ── PublicIp ─────────────────────────────────────────────────────────────────

/// The machine's public address as reported by a lookup service.
///
/// The text is opaque: no IPv4/IPv6 parsing is attempted, and the bytes handed
/// to an output sink are exactly the bytes of this string.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PublicIp(String);

impl PublicIp {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Raw UTF-8 encoding of the address, unmodified.
    pub fn as_bytes(&self) -> &[u8] {
        self.0.as_bytes()
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

impl fmt::Display for PublicIp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<String> for PublicIp {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl From<&str> for PublicIp {
    fn from(value: &str) -> Self {
        Self(value.to_owned())
    }
}

// ── FileMode ─────────────────────────────────────────────────────────────────

/// Unix permission bits applied to the written file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FileMode(u32);

impl FileMode {
    /// Owner read/write, group read, others read.
    pub const DEFAULT: Self = Self(0o644);

    const MAX: u32 = 0o7777;

    pub fn new(bits: u32) -> Result<Self, DomainError> {
        if bits > Self::MAX {
            return Err(DomainError::InvalidFileMode {
                value: format!("{bits:o}"),
                reason: "permission bits exceed 0o7777".into(),
            });
        }
        Ok(Self(bits))
    }

    pub const fn bits(self) -> u32 {
        self.0
    }
}

impl Default for FileMode {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl fmt::Display for FileMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04o}", self.0)
    }
}

impl FromStr for FileMode {
    type Err = DomainError;

    /// Parses octal text such as `644`, `0644` or `0o644`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let digits = trimmed.strip_prefix("0o").unwrap_or(trimmed);

        if digits.is_empty() {
            return Err(DomainError::InvalidFileMode {
                value: s.to_owned(),
                reason: "mode is empty".into(),
            });
        }

        if !digits.bytes().all(|b| b.is_ascii_digit()) {
            return Err(DomainError::InvalidFileMode {
                value: s.to_owned(),
                reason: "only octal digits are allowed".into(),
            });
        }

        let bits = u32::from_str_radix(digits, 8).map_err(|e| DomainError::InvalidFileMode {
            value: s.to_owned(),
            reason: e.to_string(),
        })?;

        Self::new(bits)
    }
}

// ── OutputDestination ────────────────────────────────────────────────────────

/// Where the address is persisted and with which permissions.
///
/// Supplied by the caller of the orchestrator and forwarded untouched to the
/// output sink.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputDestination {
    path: PathBuf,
    mode: FileMode,
}

impl OutputDestination {
    /// Create a destination with the default `0644` mode.
    ///
    /// Fails with [`DomainError::EmptyDestination`] for an empty path.
    pub fn new(path: impl Into<PathBuf>) -> Result<Self, DomainError> {
        let path = path.into();
        if path.as_os_str().is_empty() {
            return Err(DomainError::EmptyDestination);
        }
        Ok(Self {
            path,
            mode: FileMode::DEFAULT,
        })
    }

    pub fn with_mode(mut self, mode: FileMode) -> Self {
        self.mode = mode;
        self
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn mode(&self) -> FileMode {
        self.mode
    }
}

impl fmt::Display for OutputDestination {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} (mode {})", self.path.display(), self.mode)
    }
}
