//! Progress reporting.
//!
//! - `style` - options for the optional `indicatif` console bar
//! - `observer` - feeding transferred byte counts to the observer callback and the bar
//!
//! # Examples
//!
//! ```rust
//! use landing::downloader::DownloaderBuilder;
//! use landing::progress::ProgressBarOpts;
//!
//! let downloader = DownloaderBuilder::new()
//!     .progress_bar(ProgressBarOpts::with_pip_style())
//!     .on_progress(|total, transferred| {
//!         println!("{}/{} bytes", transferred, total);
//!     })
//!     .build();
//! ```

pub(crate) mod observer;
pub(crate) mod style;

pub use observer::{ProgressCallback, TransferProgress};
pub use style::ProgressBarOpts;
