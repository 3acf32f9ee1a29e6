//! Byte-progress reporting for a single transfer.

use super::ProgressBarOpts;

use indicatif::ProgressBar;
use std::sync::Arc;

/// Byte-progress observer, called with `(total_bytes, transferred_bytes)`.
///
/// `total_bytes` is 0 when the server did not announce a length.
pub type ProgressCallback = Box<dyn Fn(u64, u64) + Send + Sync>;

/// Feeds transfer progress to the observer and the console bar.
pub struct TransferProgress {
    callback: Option<Arc<ProgressCallback>>,
    bar: ProgressBar,
    clear: bool,
    total: u64,
    transferred: u64,
}

impl TransferProgress {
    /// Create a tracker; `message` labels the console bar.
    pub fn new(
        callback: Option<Arc<ProgressCallback>>,
        opts: &ProgressBarOpts,
        message: String,
    ) -> Self {
        let clear = opts.clear;
        let bar = opts.clone().to_progress_bar(0).with_message(message);
        Self {
            callback,
            bar,
            clear,
            total: 0,
            transferred: 0,
        }
    }

    /// A tracker reporting nowhere.
    pub fn hidden() -> Self {
        Self::new(None, &ProgressBarOpts::hidden(), String::new())
    }

    /// Set the expected total, once the response headers are known.
    pub fn start(&mut self, total: Option<u64>) {
        self.total = total.unwrap_or(0);
        self.bar.set_length(self.total);
        self.notify();
    }

    /// Record `bytes` more bytes written.
    pub fn advance(&mut self, bytes: u64) {
        self.transferred += bytes;
        self.bar.inc(bytes);
        self.notify();
    }

    /// Bytes recorded so far.
    pub fn transferred(&self) -> u64 {
        self.transferred
    }

    /// Finish the console bar, clearing it if configured.
    pub fn finish(self) {
        if self.clear {
            self.bar.finish_and_clear();
        } else {
            self.bar.finish();
        }
    }

    fn notify(&self) {
        if let Some(ref callback) = self.callback {
            callback(self.total, self.transferred);
        }
    }
}
