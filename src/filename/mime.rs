//! MIME type to file extension lookup.

use std::fmt::Debug;

/// Guesses a file extension (without the leading dot) for a MIME type.
pub trait ExtensionGuesser: Debug + Send + Sync {
    /// Return the preferred extension for `mime_type`, if one is known.
    fn extension(&self, mime_type: &str) -> Option<String>;
}

/// Default [`ExtensionGuesser`] backed by `mime_guess`.
///
/// Common types resolve through a short preferred table first, because
/// `mime_guess` lists every known extension for a type in no particular
/// order of preference (`text/plain` has dozens).
#[derive(Debug, Clone, Copy, Default)]
pub struct MimeExtensionGuesser;

impl MimeExtensionGuesser {
    fn preferred(essence: &str) -> Option<&'static str> {
        let ext = match essence {
            "text/plain" => "txt",
            "text/html" => "html",
            "text/css" => "css",
            "text/csv" => "csv",
            "text/markdown" => "md",
            "text/javascript" | "application/javascript" => "js",
            "application/json" => "json",
            "application/xml" | "text/xml" => "xml",
            "application/pdf" => "pdf",
            "application/zip" => "zip",
            "application/gzip" | "application/x-gzip" => "gz",
            "application/x-tar" => "tar",
            "image/jpeg" => "jpg",
            "image/png" => "png",
            "image/gif" => "gif",
            "image/svg+xml" => "svg",
            "image/webp" => "webp",
            "audio/mpeg" => "mp3",
            "video/mp4" => "mp4",
            _ => return None,
        };
        Some(ext)
    }
}

impl ExtensionGuesser for MimeExtensionGuesser {
    fn extension(&self, mime_type: &str) -> Option<String> {
        let essence = essence(mime_type);
        if essence.is_empty() {
            return None;
        }

        if let Some(ext) = Self::preferred(&essence) {
            return Some(ext.to_string());
        }

        mime_guess::get_mime_extensions_str(&essence)
            .and_then(|exts| exts.first())
            .map(|ext| ext.to_string())
    }
}

/// Strip parameters from a `Content-Type` value: `text/plain; charset=utf-8` -> `text/plain`.
pub(crate) fn essence(content_type: &str) -> String {
    content_type
        .split(';')
        .next()
        .unwrap_or("")
        .trim()
        .to_ascii_lowercase()
}
