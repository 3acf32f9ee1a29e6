//! Directory provisioning.

use crate::{Error, Result};

use std::path::Path;
use tokio::fs;
use tracing::debug;

/// What to do when the destination directory is missing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DirectoryPolicy {
    /// Create the directory when it is missing.
    pub create: bool,
    /// Create missing parents as well.
    pub recursive: bool,
    /// Permission bits for created directories (Unix only).
    pub mode: u32,
}

impl DirectoryPolicy {
    /// Default permission bits for created directories.
    pub const DEFAULT_MODE: u32 = 0o755;

    /// Fail when the directory is missing.
    pub fn deny() -> Self {
        Self::default()
    }

    /// Create the directory itself, but not its parents.
    pub fn create() -> Self {
        Self {
            create: true,
            ..Self::default()
        }
    }

    /// Create the directory and any missing parents.
    pub fn create_recursive() -> Self {
        Self {
            create: true,
            recursive: true,
            ..Self::default()
        }
    }

    /// Set the permission bits for created directories.
    pub fn with_mode(self, mode: u32) -> Self {
        Self { mode, ..self }
    }
}

impl Default for DirectoryPolicy {
    fn default() -> Self {
        Self {
            create: false,
            recursive: false,
            mode: Self::DEFAULT_MODE,
        }
    }
}

/// Make sure `directory` exists, creating it if `policy` allows.
///
/// Must run before any temporary file is opened in `directory`.
pub async fn ensure_directory(directory: &Path, policy: &DirectoryPolicy) -> Result<()> {
    if fs::metadata(directory)
        .await
        .map(|m| m.is_dir())
        .unwrap_or(false)
    {
        return Ok(());
    }

    if !policy.create {
        return Err(Error::DirectoryMissing {
            path: directory.to_path_buf(),
        });
    }

    debug!(
        "Creating destination directory {:?} (recursive: {})",
        directory, policy.recursive
    );
    let mut builder = fs::DirBuilder::new();
    builder.recursive(policy.recursive);
    #[cfg(unix)]
    builder.mode(policy.mode);

    builder
        .create(directory)
        .await
        .map_err(|source| Error::DirectoryCreateFailed {
            path: directory.to_path_buf(),
            source,
        })
}
