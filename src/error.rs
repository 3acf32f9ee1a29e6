//! Error handling for the Landing library.
//!
//! Every failure a download can end in has its own variant, so callers can
//! branch on "already exists" vs "directory missing" vs "network failure"
//! instead of inspecting messages. Successful short-circuits (skip, not
//! modified) are not errors; see [`crate::Status`].

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Errors that can happen when using Landing.
#[derive(Error, Debug)]
pub enum Error {
    /// The URL cannot be parsed or does not use the `http`/`https` scheme.
    ///
    /// Raised before any filesystem or network activity.
    #[error("Invalid URL: {0}")]
    InvalidUrl(String),

    /// The destination directory does not exist and creating it is not allowed.
    ///
    /// No temporary file was opened.
    #[error("Directory [{}] does not exist", path.display())]
    DirectoryMissing { path: PathBuf },

    /// The destination directory was missing and could not be created.
    #[error("Directory [{}] could not be created", path.display())]
    DirectoryCreateFailed {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The destination file already exists and the clobber policy is `Fail`.
    #[error("File [{}] already exists", path.display())]
    FileExists { path: PathBuf },

    /// The transfer failed (DNS, TLS, connection, error status...).
    ///
    /// The temporary file has been discarded and the destination is untouched.
    #[error("Transfer of {url} failed: {reason}")]
    TransferFailed { url: String, reason: String },

    /// The `Update` policy needs a concrete file path before the transfer,
    /// but the destination only names a directory.
    #[error("Expected a file path, but [{destination}] is a directory destination")]
    FilenameUnresolvable { destination: String },

    /// The downloaded file could not be moved to its final location.
    ///
    /// The temporary file has been discarded.
    #[error("Could not move the downloaded file to [{}]", path.display())]
    CommitFailed {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// I/O Error.
    ///
    /// Local failures while creating or writing the temporary file.
    #[error("I/O error")]
    IOError {
        #[from]
        source: io::Error,
    },

    /// Error from the Reqwest library, raised while building the HTTP client.
    #[error("Reqwest Error")]
    Reqwest {
        #[from]
        source: reqwest::Error,
    },
}

/// Result type alias for operations that can fail with a Landing error.
pub type Result<T> = std::result::Result<T, Error>;
