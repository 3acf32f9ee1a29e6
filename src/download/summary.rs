//! Download result reporting.
//!
//! A [`Summary`] describes a download that ended well: the file was
//! downloaded, or an existing file was kept because of the clobber policy or
//! because the server reported it as not modified. Failures are reported as
//! [`crate::Error`] instead.
//!
//! ```rust
//! use landing::download::{Status, Summary};
//! use reqwest::Url;
//! use std::path::PathBuf;
//!
//! let url = Url::parse("https://example.com/file.zip").unwrap();
//! let summary = Summary::new(url, PathBuf::from("file.zip"), Status::Downloaded).with_size(1024);
//!
//! match summary.status() {
//!     Status::Downloaded => println!("Downloaded {} bytes", summary.size()),
//!     Status::Skipped => println!("Kept existing file"),
//!     Status::NotModified => println!("Already up to date"),
//! }
//! ```

use reqwest::Url;
use std::path::{Path, PathBuf};

/// How a successful download ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    /// The file was transferred and committed to its final path.
    Downloaded,
    /// The destination existed and the clobber policy kept it.
    Skipped,
    /// The server reported the existing file as up to date.
    NotModified,
}

/// Represents the outcome of a successful download.
#[derive(Debug, Clone)]
pub struct Summary {
    /// Requested URL.
    url: Url,
    /// URL actually served, after redirects.
    effective_url: Option<Url>,
    /// Final path of the file.
    path: PathBuf,
    /// Bytes transferred.
    size: u64,
    /// Status.
    status: Status,
}

impl Summary {
    /// Create a new [`Summary`].
    pub fn new(url: Url, path: PathBuf, status: Status) -> Self {
        Self {
            url,
            effective_url: None,
            path,
            size: 0,
            status,
        }
    }

    /// Attach the number of transferred bytes.
    pub fn with_size(self, size: u64) -> Self {
        Self { size, ..self }
    }

    /// Attach the effective URL.
    pub fn with_effective_url(self, effective_url: Url) -> Self {
        Self {
            effective_url: Some(effective_url),
            ..self
        }
    }

    /// Get the requested URL.
    pub fn url(&self) -> &Url {
        &self.url
    }

    /// Get the effective URL, if a request was made.
    pub fn effective_url(&self) -> Option<&Url> {
        self.effective_url.as_ref()
    }

    /// Get the final path.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Consume the summary, returning the final path.
    pub fn into_path(self) -> PathBuf {
        self.path
    }

    /// Get the number of transferred bytes.
    pub fn size(&self) -> u64 {
        self.size
    }

    /// Get the summary's status.
    pub fn status(&self) -> Status {
        self.status
    }
}
