//! Downloader module containing the download state machine, builder pattern, and configuration.
//!
//! - `downloader` - Core Downloader struct driving a single download to completion
//! - `builder` - DownloaderBuilder for flexible configuration using the builder pattern
//! - `config` - Configuration structures and callback types
//!
//! # Examples
//!
//! ## Basic Usage
//!
//! ```rust,no_run
//! use landing::downloader::DownloaderBuilder;
//!
//! # async fn example() -> Result<(), landing::Error> {
//! let downloader = DownloaderBuilder::new().build();
//!
//! // Into an existing directory, the filename is inferred from the response.
//! let path = downloader
//!     .download("https://example.com/files/archive.zip", "downloads/")
//!     .await?;
//! # Ok(())
//! # }
//! ```
//!
//! ## Advanced Configuration
//!
//! ```rust
//! use landing::downloader::DownloaderBuilder;
//! use std::time::Duration;
//!
//! let downloader = DownloaderBuilder::new()
//!     .allow_recursive_directory_creation()
//!     .skip_if_exists()
//!     .max_redirects(3)
//!     .timeout(Duration::from_secs(30))
//!     .on_complete(|summary| {
//!         println!("Saved: {}", summary.path().display());
//!     })
//!     .build();
//! ```

pub mod builder;
pub mod config;
pub mod downloader;

pub use crate::progress::ProgressCallback;
pub use builder::DownloaderBuilder;
pub use config::{DownloadCallback, DownloaderConfig};
pub use downloader::Downloader;
