//! Configuration structures and defaults for the downloader.
//!
//! [`DownloaderConfig`] is filled by the [`DownloaderBuilder`](super::DownloaderBuilder)
//! and stays immutable once the [`Downloader`](super::Downloader) is built:
//! every download call sees the same clobber policy, directory policy and
//! collaborators.
//!
//! # Examples
//!
//! ```rust
//! use landing::downloader::DownloadCallback;
//! use landing::download::{Status, Summary};
//!
//! let callback: DownloadCallback = Box::new(|summary: &Summary| {
//!     match summary.status() {
//!         Status::Downloaded => println!("✓ Downloaded: {}", summary.path().display()),
//!         Status::Skipped => println!("- Kept: {}", summary.path().display()),
//!         Status::NotModified => println!("= Up to date: {}", summary.path().display()),
//!     }
//! });
//! ```

use crate::clobber::ClobberPolicy;
use crate::destination::DirectoryPolicy;
use crate::download::Summary;
use crate::filename::{
    ExtensionGuesser, FilenameGenerator, MimeExtensionGuesser, RandomFilenameGenerator,
    TempFilenameGenerator,
};
use crate::http::HttpClientConfig;
use crate::progress::{ProgressBarOpts, ProgressCallback};

use reqwest::header::HeaderMap;
use std::sync::Arc;
use std::time::Duration;

/// Callback type for download completion events
pub type DownloadCallback = Box<dyn Fn(&Summary) + Send + Sync>;

/// Configuration structure for the downloader
#[derive(Clone)]
pub struct DownloaderConfig {
    /// What to do when the destination file already exists.
    pub clobber: ClobberPolicy,
    /// What to do when the destination directory is missing.
    pub directory_policy: DirectoryPolicy,
    /// Maximum number of redirects to follow.
    pub max_redirects: usize,
    /// Custom HTTP headers.
    pub headers: Option<HeaderMap>,
    /// Optional proxy, passed through to the HTTP client.
    pub proxy: Option<reqwest::Proxy>,
    /// Optional request timeout, passed through to the HTTP client.
    pub timeout: Option<Duration>,
    /// Console progress bar options.
    pub progress_bar: ProgressBarOpts,
    /// Byte-progress observer.
    pub on_progress: Option<Arc<ProgressCallback>>,
    /// Callback for when a download completes successfully.
    pub on_complete: Option<Arc<DownloadCallback>>,
    /// MIME type to extension lookup.
    pub extension_guesser: Arc<dyn ExtensionGuesser>,
    /// Names temporary files.
    pub temp_filename_generator: Arc<dyn FilenameGenerator>,
    /// Names files when nothing else provides a name.
    pub random_filename_generator: Arc<dyn FilenameGenerator>,
}

impl DownloaderConfig {
    /// HTTP client settings derived from this configuration.
    pub fn http_client_config(&self) -> HttpClientConfig {
        HttpClientConfig {
            max_redirects: self.max_redirects,
            proxy: self.proxy.clone(),
            headers: self.headers.clone(),
            timeout: self.timeout,
        }
    }
}

impl std::fmt::Debug for DownloaderConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DownloaderConfig")
            .field("clobber", &self.clobber)
            .field("directory_policy", &self.directory_policy)
            .field("max_redirects", &self.max_redirects)
            .field("headers", &self.headers)
            .field("proxy", &self.proxy)
            .field("timeout", &self.timeout)
            .field("progress_bar", &self.progress_bar)
            .field("on_progress", &self.on_progress.is_some())
            .field("on_complete", &self.on_complete.is_some())
            .field("extension_guesser", &self.extension_guesser)
            .field("temp_filename_generator", &self.temp_filename_generator)
            .field("random_filename_generator", &self.random_filename_generator)
            .finish()
    }
}

impl Default for DownloaderConfig {
    fn default() -> Self {
        Self {
            clobber: ClobberPolicy::default(),
            directory_policy: DirectoryPolicy::default(),
            max_redirects: HttpClientConfig::DEFAULT_MAX_REDIRECTS,
            headers: None,
            proxy: None,
            timeout: None,
            progress_bar: ProgressBarOpts::hidden(),
            on_progress: None,
            on_complete: None,
            extension_guesser: Arc::new(MimeExtensionGuesser),
            temp_filename_generator: Arc::new(TempFilenameGenerator),
            random_filename_generator: Arc::new(RandomFilenameGenerator),
        }
    }
}
