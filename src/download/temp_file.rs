//! Write-then-rename temporary files.
//!
//! A [`TempFile`] is created with a unique name inside the destination
//! directory, filled through [`TempFile::fill_using`], and then either
//! committed (renamed to its final path) or discarded. Both consume the
//! handle, so a temporary file is finalized at most once. A handle dropped
//! without being finalized removes its file.

use crate::filename::FilenameGenerator;
use crate::{Error, Result};

use std::future::Future;
use std::path::{Path, PathBuf};
use tokio::fs::{self, File, OpenOptions};
use tracing::{debug, warn};

/// A temporary file owned by a single download.
#[derive(Debug)]
pub struct TempFile {
    path: PathBuf,
    finalized: bool,
}

impl TempFile {
    /// Create an empty, uniquely named file in `directory`.
    ///
    /// The directory must exist.
    pub async fn create_in(directory: &Path, generator: &dyn FilenameGenerator) -> Result<Self> {
        let path = directory.join(generator.generate());
        debug!("Creating temporary file {:?}", &path);
        OpenOptions::new()
            .write(true)
            .create_new(true)
            .open(&path)
            .await?;

        Ok(Self {
            path,
            finalized: false,
        })
    }

    /// Path of the temporary file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Hand a writable handle on the file to `callback`.
    ///
    /// The callback owns the handle, which is closed when the callback's
    /// future completes, whether it succeeds or fails. Writers must flush
    /// before returning.
    pub async fn fill_using<F, Fut, T>(&mut self, callback: F) -> Result<T>
    where
        F: FnOnce(File) -> Fut,
        Fut: Future<Output = Result<T>>,
    {
        let file = OpenOptions::new()
            .write(true)
            .truncate(true)
            .open(&self.path)
            .await?;
        callback(file).await
    }

    /// Move the file to `destination`, overwriting whatever is there.
    ///
    /// On failure the temporary file is removed.
    pub async fn commit(mut self, destination: &Path) -> Result<PathBuf> {
        debug!("Committing {:?} to {:?}", &self.path, destination);
        self.finalized = true;
        match fs::rename(&self.path, destination).await {
            Ok(()) => Ok(destination.to_path_buf()),
            Err(source) => {
                if let Err(e) = fs::remove_file(&self.path).await {
                    warn!("Could not remove temporary file {:?}: {}", &self.path, e);
                }
                Err(Error::CommitFailed {
                    path: destination.to_path_buf(),
                    source,
                })
            }
        }
    }

    /// Remove the file.
    pub async fn discard(mut self) -> Result<()> {
        debug!("Discarding temporary file {:?}", &self.path);
        self.finalized = true;
        fs::remove_file(&self.path).await?;
        Ok(())
    }
}

impl Drop for TempFile {
    fn drop(&mut self) {
        if !self.finalized {
            // Blocking, but only reached when a download future is dropped midway.
            let _ = std::fs::remove_file(&self.path);
        }
    }
}
