//! Core downloader implementation: the download state machine.
//!
//! A call goes through `Resolving → (ConflictCheckPre) → Provisioning →
//! Transferring → (ConflictCheckPost) → Committing | Skipping | Failed`.
//! Once the temporary file exists, every path out of the machine either
//! commits it or discards it; a reported error never leaves it behind.
//!
//! # Examples
//!
//! ```rust,no_run
//! use landing::downloader::DownloaderBuilder;
//!
//! # async fn example() -> Result<(), landing::Error> {
//! let downloader = DownloaderBuilder::new()
//!     .allow_recursive_directory_creation()
//!     .update_if_exists()
//!     .build();
//!
//! let path = downloader
//!     .download("https://example.com/files/report.pdf", "downloads/report.pdf")
//!     .await?;
//! println!("Saved to {}", path.display());
//! # Ok(())
//! # }
//! ```

use super::config::DownloaderConfig;
use crate::clobber::{ClobberPolicy, Resolution};
use crate::destination::{ensure_directory, Destination};
use crate::download::{Status, Summary, TempFile};
use crate::filename::infer_filename;
use crate::http::{self, create_http_client, TransferStatus};
use crate::progress::TransferProgress;
use crate::{Error, Result};

use reqwest::header::HeaderMap;
use reqwest::Url;
use std::fmt;
use std::fmt::Debug;
use std::path::PathBuf;
use tracing::{debug, warn};

/// Represents the download controller.
///
/// A downloader can be created via its builder:
///
/// ```rust
/// # fn main()  {
/// use landing::downloader::DownloaderBuilder;
///
/// let d = DownloaderBuilder::new().build();
/// # }
/// ```
#[derive(Clone)]
pub struct Downloader {
    config: DownloaderConfig,
}

impl Debug for Downloader {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Downloader")
            .field("config", &self.config)
            .finish()
    }
}

impl Downloader {
    /// Creates a new Downloader with the given configuration.
    pub(crate) fn new(config: DownloaderConfig) -> Self {
        Self { config }
    }

    /// Gets the clobber policy.
    pub fn clobber(&self) -> ClobberPolicy {
        self.config.clobber
    }

    /// Gets the full configuration.
    pub fn config(&self) -> &DownloaderConfig {
        &self.config
    }

    /// Gets the custom headers.
    pub fn headers(&self) -> Option<&HeaderMap> {
        self.config.headers.as_ref()
    }

    /// Gets the redirect limit.
    pub fn max_redirects(&self) -> usize {
        self.config.max_redirects
    }

    /// Download `url` to `destination` and return the final path.
    ///
    /// `destination` is either a file path or a directory (empty, ending with
    /// a separator or `/.`, or an existing directory), in which case the
    /// filename is inferred from the response.
    pub async fn download(&self, url: &str, destination: &str) -> Result<PathBuf> {
        self.fetch(url, destination)
            .await
            .map(Summary::into_path)
    }

    /// Same as [`Downloader::download`], reporting how the download ended.
    pub async fn fetch(&self, url: &str, destination: &str) -> Result<Summary> {
        let summary = self.run(url, destination).await?;

        if let Some(ref callback) = self.config.on_complete {
            callback(&summary);
        }

        Ok(summary)
    }

    async fn run(&self, url: &str, destination: &str) -> Result<Summary> {
        let url = parse_url(url)?;

        // Resolving
        let destination = Destination::resolve(destination);
        debug!(
            "Resolved destination {:?}: directory {:?}, file {:?}",
            destination.raw(),
            destination.directory(),
            destination.file()
        );

        // ConflictCheckPre
        let resolution = self.config.clobber.before_transfer(&destination).await?;
        if let (Resolution::KeepExisting, Some(path)) = (resolution, destination.file()) {
            debug!("Keeping existing file {:?}", path);
            return Ok(Summary::new(url, path.to_path_buf(), Status::Skipped));
        }

        // Provisioning
        ensure_directory(destination.directory(), &self.config.directory_policy).await?;

        // Transferring
        let client = create_http_client(self.config.http_client_config())?;
        let mut temp = TempFile::create_in(
            destination.directory(),
            self.config.temp_filename_generator.as_ref(),
        )
        .await?;

        let mut progress = TransferProgress::new(
            self.config.on_progress.clone(),
            &self.config.progress_bar,
            destination
                .filename()
                .map(String::from)
                .unwrap_or_else(|| url.to_string()),
        );
        let headers = resolution.conditional_headers();
        let (client, source, observer) = (&client, &url, &mut progress);
        let fetched = temp
            .fill_using(move |sink| http::fetch(client, source, sink, headers, observer))
            .await;
        progress.finish();

        let outcome = match fetched {
            Ok(outcome) => outcome,
            Err(e) => return Err(abandon(temp, e).await),
        };

        match outcome.status {
            TransferStatus::Success => {}
            TransferStatus::Failed(reason) => {
                let e = Error::TransferFailed {
                    url: url.to_string(),
                    reason,
                };
                return Err(abandon(temp, e).await);
            }
            TransferStatus::NotModified => {
                let Some(path) = destination.file().filter(|_| resolution != Resolution::Proceed)
                else {
                    let e = Error::TransferFailed {
                        url: url.to_string(),
                        reason: "unexpected 304 Not Modified for an unconditional request".into(),
                    };
                    return Err(abandon(temp, e).await);
                };
                debug!("{} not modified, keeping {:?}", url, path);
                temp.discard().await?;
                return Ok(Summary::new(url, path.to_path_buf(), Status::NotModified)
                    .with_effective_url(outcome.effective_url));
            }
        }

        // ConflictCheckPost
        let final_path = match destination.file() {
            Some(path) => path.to_path_buf(),
            None => {
                let filename = infer_filename(
                    &outcome,
                    self.config.extension_guesser.as_ref(),
                    self.config.random_filename_generator.as_ref(),
                );
                let path = destination.join(&filename);
                debug!("Inferred filename {:?} for {}", filename, outcome.effective_url);

                match self.config.clobber.after_transfer(&path).await {
                    Ok(Resolution::KeepExisting) => {
                        // Skipping
                        temp.discard().await?;
                        return Ok(Summary::new(url, path, Status::Skipped)
                            .with_effective_url(outcome.effective_url));
                    }
                    Ok(_) => path,
                    Err(e) => return Err(abandon(temp, e).await),
                }
            }
        };

        // Committing
        let path = temp.commit(&final_path).await?;
        Ok(Summary::new(url, path, Status::Downloaded)
            .with_size(outcome.size)
            .with_effective_url(outcome.effective_url))
    }
}

/// Parse `url`, accepting only `http` and `https`.
fn parse_url(url: &str) -> Result<Url> {
    let parsed = Url::parse(url).map_err(|e| {
        Error::InvalidUrl(format!("The url \"{}\" cannot be parsed: {}", url, e))
    })?;

    match parsed.scheme() {
        "http" | "https" => Ok(parsed),
        scheme => Err(Error::InvalidUrl(format!(
            "The url \"{}\" uses the unsupported scheme \"{}\"",
            url, scheme
        ))),
    }
}

/// Discard `temp` and hand back `error`, the error that caused it.
async fn abandon(temp: TempFile, error: Error) -> Error {
    let path = temp.path().to_path_buf();
    if let Err(e) = temp.discard().await {
        warn!("Could not discard temporary file {:?}: {}", path, e);
    }
    error
}
