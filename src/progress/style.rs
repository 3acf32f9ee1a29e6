//! Console progress bar options.

use indicatif::{ProgressBar, ProgressStyle};
use tracing::warn;

/// Look of the optional `indicatif` bar drawn while a body is streamed.
///
/// Hidden unless configured; the byte-progress observer
/// ([`crate::downloader::ProgressCallback`]) is independent of it.
#[derive(Debug, Clone)]
pub struct ProgressBarOpts {
    /// `indicatif` template, the library default when `None`.
    template: Option<String>,
    /// Characters for the filled, current and remaining parts (at least 2).
    progress_chars: Option<String>,
    pub(crate) enabled: bool,
    /// Remove the bar from the terminal once the transfer ends.
    pub(crate) clear: bool,
}

impl Default for ProgressBarOpts {
    fn default() -> Self {
        Self::hidden()
    }
}

impl ProgressBarOpts {
    /// Pip-like bar with byte counts, rate and ETA.
    pub const TEMPLATE_PIP: &'static str =
        "{bar:40.green/black} {bytes:>11.green}/{total_bytes:<11.green} {bytes_per_sec:>13.red} eta {eta:.blue}";
    /// Bar prefixed with the destination filename.
    pub const TEMPLATE_NAMED: &'static str =
        "{msg:.bold} {bar:30.cyan/blue} {bytes}/{total_bytes} ({eta})";
    /// Block characters.
    pub const CHARS_FINE: &'static str = "█▉▊▋▌▍▎▏  ";
    /// Line characters.
    pub const CHARS_LINE: &'static str = "━╾╴─";

    /// Create options from an `indicatif` template and a progress
    /// character set.
    ///
    /// `progress_chars` needs at least 2 characters (filled, remaining; a
    /// middle "current" character is optional). A shorter set is ignored with
    /// a warning and the default characters are used.
    pub fn new(
        template: Option<String>,
        progress_chars: Option<String>,
        enabled: bool,
        clear: bool,
    ) -> Self {
        Self {
            template,
            progress_chars,
            enabled,
            clear,
        }
    }

    /// Pip-like bar, cleared when done.
    pub fn with_pip_style() -> Self {
        Self::new(
            Some(Self::TEMPLATE_PIP.to_string()),
            Some(Self::CHARS_LINE.to_string()),
            true,
            true,
        )
    }

    /// No bar at all.
    pub fn hidden() -> Self {
        Self::new(None, None, false, true)
    }

    /// Set to `true` to remove the bar once the transfer ends.
    pub fn set_clear(&mut self, clear: bool) {
        self.clear = clear;
    }

    /// Whether a bar is drawn at all.
    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Build the [`ProgressStyle`]. An invalid template is logged and the
    /// default bar is used instead.
    pub fn to_progress_style(self) -> ProgressStyle {
        let base = ProgressStyle::default_bar();
        let style = match self.template {
            Some(template) => base.clone().template(&template).unwrap_or_else(|e| {
                warn!("Invalid progress bar template {:?}: {}", template, e);
                base
            }),
            None => base,
        };

        match self.progress_chars {
            Some(chars) if chars.chars().count() >= 2 => style.progress_chars(&chars),
            Some(chars) => {
                warn!("Progress characters {:?} need at least 2 characters", chars);
                style
            }
            None => style,
        }
    }

    /// Build a bar of length `len`, hidden when disabled.
    pub fn to_progress_bar(self, len: u64) -> ProgressBar {
        if !self.enabled {
            return ProgressBar::hidden();
        }
        ProgressBar::new(len).with_style(self.to_progress_style())
    }
}
