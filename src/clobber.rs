//! Clobber policy: what to do when the destination file already exists.
//!
//! The policy is evaluated once per download, at one of two points:
//! before the transfer when the destination names the file, or after the
//! transfer when the filename could only be inferred from the response.
//!
//! | Policy    | file missing | file present                                   |
//! |-----------|--------------|------------------------------------------------|
//! | `Fail`    | proceed      | [`Error::FileExists`]                          |
//! | `Skip`    | proceed      | keep the existing file                         |
//! | `Replace` | proceed      | proceed, the commit overwrites                 |
//! | `Update`  | proceed      | conditional request on the file's mtime        |
//!
//! `Update` needs the file path before the transfer; with a directory-like
//! destination it fails with [`Error::FilenameUnresolvable`].

use crate::destination::Destination;
use crate::{Error, Result};

use reqwest::header::{HeaderMap, HeaderValue, IF_MODIFIED_SINCE};
use std::io::ErrorKind;
use std::path::Path;
use std::time::SystemTime;
use tracing::debug;

/// Rule governing an already present destination file.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ClobberPolicy {
    /// Fail with [`Error::FileExists`].
    #[default]
    Fail,
    /// Keep the existing file and return its path.
    Skip,
    /// Download and overwrite the existing file.
    Replace,
    /// Download only if the remote resource changed since the file's
    /// modification time.
    Update,
}

/// What the downloader should do next.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Resolution {
    /// Transfer (or commit) unconditionally.
    Proceed,
    /// Transfer only if the remote resource is newer than `since`.
    Refresh { since: SystemTime },
    /// Leave the existing file untouched.
    KeepExisting,
}

impl Resolution {
    /// Request headers implementing this resolution.
    pub fn conditional_headers(&self) -> HeaderMap {
        let mut headers = HeaderMap::new();
        if let Resolution::Refresh { since } = self {
            // HTTP dates are ASCII, the conversion cannot fail.
            if let Ok(value) = HeaderValue::from_str(&httpdate::fmt_http_date(*since)) {
                headers.insert(IF_MODIFIED_SINCE, value);
            }
        }
        headers
    }
}

impl ClobberPolicy {
    /// Evaluate the policy before the transfer.
    ///
    /// With a directory-like destination there is nothing to check yet, and
    /// the post-transfer check decides, except for `Update` which fails here.
    pub async fn before_transfer(&self, destination: &Destination) -> Result<Resolution> {
        let Some(path) = destination.file() else {
            return match self {
                ClobberPolicy::Update => Err(Error::FilenameUnresolvable {
                    destination: destination.raw().to_string(),
                }),
                _ => Ok(Resolution::Proceed),
            };
        };

        let Some(modified) = existing_file(path).await? else {
            return Ok(Resolution::Proceed);
        };

        debug!("Destination {:?} already exists, policy {:?}", path, self);
        match self {
            ClobberPolicy::Fail => Err(Error::FileExists {
                path: path.to_path_buf(),
            }),
            ClobberPolicy::Skip => Ok(Resolution::KeepExisting),
            ClobberPolicy::Replace => Ok(Resolution::Proceed),
            ClobberPolicy::Update => Ok(Resolution::Refresh { since: modified }),
        }
    }

    /// Evaluate the policy once an inferred path is known.
    pub async fn after_transfer(&self, path: &Path) -> Result<Resolution> {
        if existing_file(path).await?.is_none() {
            return Ok(Resolution::Proceed);
        }

        debug!("Inferred destination {:?} already exists, policy {:?}", path, self);
        match self {
            ClobberPolicy::Fail => Err(Error::FileExists {
                path: path.to_path_buf(),
            }),
            ClobberPolicy::Skip => Ok(Resolution::KeepExisting),
            ClobberPolicy::Replace => Ok(Resolution::Proceed),
            // Rejected by `before_transfer` for directory-like destinations.
            ClobberPolicy::Update => Err(Error::FilenameUnresolvable {
                destination: path.display().to_string(),
            }),
        }
    }
}

/// Modification time of the file at `path`, or `None` when nothing is there.
///
/// A parent that is not a directory also means nothing is there; the
/// provisioner reports it.
async fn existing_file(path: &Path) -> Result<Option<SystemTime>> {
    match tokio::fs::metadata(path).await {
        Ok(metadata) => Ok(Some(metadata.modified()?)),
        Err(e) if matches!(e.kind(), ErrorKind::NotFound | ErrorKind::NotADirectory) => Ok(None),
        Err(e) => Err(e.into()),
    }
}
