//! Landing is a crate providing a safe way to download a single HTTP(S)
//! resource onto the local filesystem.
//!
//! The body is streamed into a temporary file next to its destination and
//! renamed into place only once the transfer succeeded, so a failed
//! download never leaves a partial file behind. What happens when the
//! destination already exists is decided by a [`ClobberPolicy`].
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use landing::{downloader::DownloaderBuilder, Error};
//!
//! # #[tokio::main]
//! # async fn main() -> Result<(), Error> {
//! let downloader = DownloaderBuilder::new()
//!     .allow_directory_creation()
//!     .update_if_exists()
//!     .build();
//!
//! let path = downloader
//!     .download(
//!         "https://github.com/seanmonstar/reqwest/archive/refs/tags/v0.12.4.zip",
//!         "output/reqwest.zip",
//!     )
//!     .await?;
//! println!("{}", path.display());
//! # Ok(())
//! # }
//! ```
//!
//! # Module Organization
//!
//! - [`clobber`] - Policy applied when the destination file already exists
//! - [`destination`] - Destination resolution and directory provisioning
//! - [`download`] - Temporary files and download summaries
//! - [`downloader`] - The main `Downloader` and `DownloaderBuilder`
//! - [`error`] - Centralized error handling with the `Error` enum
//! - [`filename`] - Filename inference and generators
//! - [`http`] - HTTP client creation and the transfer executor
//! - [`progress`] - Progress observer and console bar styling

pub mod clobber;
pub mod destination;
pub mod download;
pub mod downloader;
pub mod error;
pub mod filename;
pub mod http;
pub mod progress;

pub use clobber::{ClobberPolicy, Resolution};
pub use destination::{Destination, DirectoryPolicy};
pub use download::{Status, Summary, TempFile};
pub use downloader::{Downloader, DownloaderBuilder};
pub use error::{Error, Result};
pub use filename::{
    ExtensionGuesser, FilenameGenerator, MimeExtensionGuesser, RandomFilenameGenerator,
    TempFilenameGenerator,
};
pub use http::{create_http_client, HttpClientConfig, TransferOutcome, TransferStatus};
pub use progress::ProgressBarOpts;
