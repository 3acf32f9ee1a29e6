//! [`DownloaderBuilder`]: configuring a [`Downloader`] step by step.
//!
//! Every setter is optional; an untouched builder fails on existing files,
//! refuses to create directories and follows up to ten redirects.
//!
//! ```rust
//! use landing::downloader::DownloaderBuilder;
//! use landing::ClobberPolicy;
//!
//! let downloader = DownloaderBuilder::new()
//!     .allow_recursive_directory_creation()
//!     .replace_if_exists()
//!     .max_redirects(5)
//!     .on_complete(|summary| println!("{:?}: {}", summary.status(), summary.path().display()))
//!     .build();
//! assert_eq!(downloader.clobber(), ClobberPolicy::Replace);
//! ```

use super::{config::DownloaderConfig, downloader::Downloader};
use crate::clobber::ClobberPolicy;
use crate::destination::DirectoryPolicy;
use crate::download::Summary;
use crate::filename::{ExtensionGuesser, FilenameGenerator};
use crate::progress::ProgressBarOpts;

use reqwest::header::{HeaderMap, HeaderValue, IntoHeaderName};
use std::{sync::Arc, time::Duration};

/// Collects the options of a [`Downloader`].
#[derive(Default)]
pub struct DownloaderBuilder {
    config: DownloaderConfig,
}

impl DownloaderBuilder {
    /// A builder holding the defaults of [`DownloaderConfig`].
    pub fn new() -> Self {
        Self::default()
    }

    /// A builder with the console bar explicitly hidden.
    pub fn hidden() -> Self {
        Self::new().progress_bar(ProgressBarOpts::hidden())
    }

    /// Set the clobber policy.
    pub fn clobber(mut self, policy: ClobberPolicy) -> Self {
        self.config.clobber = policy;
        self
    }

    /// Fail when the destination file already exists (the default).
    pub fn fail_if_exists(self) -> Self {
        self.clobber(ClobberPolicy::Fail)
    }

    /// Keep the destination file when it already exists.
    pub fn skip_if_exists(self) -> Self {
        self.clobber(ClobberPolicy::Skip)
    }

    /// Overwrite the destination file when it already exists.
    pub fn replace_if_exists(self) -> Self {
        self.clobber(ClobberPolicy::Replace)
    }

    /// Overwrite the destination file only if the remote resource is newer.
    pub fn update_if_exists(self) -> Self {
        self.clobber(ClobberPolicy::Update)
    }

    /// Set the directory provisioning policy.
    pub fn directory_policy(mut self, policy: DirectoryPolicy) -> Self {
        self.config.directory_policy = policy;
        self
    }

    /// Create the destination directory when it is missing.
    pub fn allow_directory_creation(self) -> Self {
        let mode = self.config.directory_policy.mode;
        self.directory_policy(DirectoryPolicy::create().with_mode(mode))
    }

    /// Create the destination directory and its parents when missing.
    pub fn allow_recursive_directory_creation(self) -> Self {
        let mode = self.config.directory_policy.mode;
        self.directory_policy(DirectoryPolicy::create_recursive().with_mode(mode))
    }

    /// Set the maximum number of redirects to follow (0 disables following).
    pub fn max_redirects(mut self, max_redirects: usize) -> Self {
        self.config.max_redirects = max_redirects;
        self
    }

    /// Set a proxy for all requests.
    pub fn proxy(mut self, proxy: reqwest::Proxy) -> Self {
        self.config.proxy = Some(proxy);
        self
    }

    /// Set a timeout for each request, body included.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.config.timeout = Some(timeout);
        self
    }

    /// Set the console progress bar options.
    pub fn progress_bar(mut self, opts: ProgressBarOpts) -> Self {
        self.config.progress_bar = opts;
        self
    }

    /// Set the byte-progress observer, called with `(total, transferred)`.
    pub fn on_progress<F>(mut self, callback: F) -> Self
    where
        F: Fn(u64, u64) + Send + Sync + 'static,
    {
        self.config.on_progress = Some(Arc::new(Box::new(callback)));
        self
    }

    /// Set callback for when a download completes successfully.
    ///
    /// Called for downloaded files as well as kept ones (skipped or not
    /// modified). Failures are returned to the caller instead.
    pub fn on_complete<F>(mut self, callback: F) -> Self
    where
        F: Fn(&Summary) + Send + Sync + 'static,
    {
        self.config.on_complete = Some(Arc::new(Box::new(callback)));
        self
    }

    /// Set the MIME type to extension lookup.
    pub fn extension_guesser<G>(mut self, guesser: G) -> Self
    where
        G: ExtensionGuesser + 'static,
    {
        self.config.extension_guesser = Arc::new(guesser);
        self
    }

    /// Set the generator naming temporary files.
    pub fn temp_filename_generator<G>(mut self, generator: G) -> Self
    where
        G: FilenameGenerator + 'static,
    {
        self.config.temp_filename_generator = Arc::new(generator);
        self
    }

    /// Set the generator naming files when nothing else provides a name.
    pub fn random_filename_generator<G>(mut self, generator: G) -> Self
    where
        G: FilenameGenerator + 'static,
    {
        self.config.random_filename_generator = Arc::new(generator);
        self
    }

    /// Merge `headers` into the configured request headers.
    ///
    /// Later values replace earlier ones for the same name.
    ///
    /// ```
    /// use landing::downloader::DownloaderBuilder;
    /// use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, USER_AGENT};
    ///
    /// let downloader = DownloaderBuilder::new()
    ///     .headers(HeaderMap::from_iter([
    ///         (USER_AGENT, HeaderValue::from_static("landing/0.1")),
    ///         (ACCEPT, HeaderValue::from_static("*/*")),
    ///     ]))
    ///     .build();
    /// assert_eq!(downloader.headers().map(|h| h.len()), Some(2));
    /// ```
    pub fn headers(mut self, headers: HeaderMap) -> Self {
        self.config
            .headers
            .get_or_insert_with(HeaderMap::new)
            .extend(headers);
        self
    }

    /// Set a single request header, sent with every request including
    /// redirected ones.
    ///
    /// ```
    /// use landing::downloader::DownloaderBuilder;
    /// use reqwest::header::{HeaderValue, AUTHORIZATION};
    ///
    /// let downloader = DownloaderBuilder::new()
    ///     .header(AUTHORIZATION, HeaderValue::from_static("Basic Y2xpZW50OnNlY3JldA=="))
    ///     .build();
    /// ```
    pub fn header<K: IntoHeaderName>(mut self, name: K, value: HeaderValue) -> Self {
        self.config
            .headers
            .get_or_insert_with(HeaderMap::new)
            .insert(name, value);
        self
    }

    /// Freeze the configuration into a [`Downloader`].
    pub fn build(self) -> Downloader {
        Downloader::new(self.config)
    }
}
