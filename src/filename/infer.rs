//! Filename inference from a finished transfer.
//!
//! Precedence, used only when the destination did not name the file:
//!
//! 1. the `Content-Disposition` filename of the response;
//! 2. the last path segment of the effective (post-redirect) URL, completed
//!    with an extension guessed from the `Content-Type` when it has none;
//! 3. a generated random name when the URL path has no segment at all.

use super::{ExtensionGuesser, FilenameGenerator};
use crate::http::TransferOutcome;

use reqwest::Url;
use std::path::Path;

/// Infer the filename for a successful transfer.
pub fn infer_filename(
    outcome: &TransferOutcome,
    guesser: &dyn ExtensionGuesser,
    random: &dyn FilenameGenerator,
) -> String {
    if let Some(name) = outcome.content_disposition_filename.as_deref() {
        return name.to_string();
    }

    match url_filename(&outcome.effective_url) {
        Some(segment) if has_extension(&segment) => segment,
        Some(segment) => outcome
            .content_type
            .as_deref()
            .and_then(|mime| guesser.extension(mime))
            .map(|ext| format!("{}.{}", segment, ext))
            .unwrap_or(segment),
        None => random.generate(),
    }
}

/// Return the percent-decoded last path segment of `url`, if it is not empty.
pub fn url_filename(url: &Url) -> Option<String> {
    let segment = url.path_segments()?.next_back()?;
    let decoded = urlencoding::decode(segment)
        .map(|s| s.into_owned())
        .unwrap_or_else(|_| segment.to_string());
    sanitize(&decoded)
}

/// Parse the filename out of a `Content-Disposition` header value.
///
/// Handles:
/// - `attachment; filename="example.pdf"` (`;` and `\"` allowed inside the quotes)
/// - `attachment; filename=example.pdf`
/// - `attachment; filename*=UTF-8''example%20file.pdf` (RFC 5987, preferred)
pub fn parse_content_disposition(header: &str) -> Option<String> {
    let mut plain = None;
    let mut extended = None;

    for (key, value) in disposition_params(header) {
        match key.as_str() {
            "filename*" => {
                // charset'language'percent-encoded
                let encoded = value.splitn(3, '\'').nth(2).unwrap_or(&value);
                extended = urlencoding::decode(encoded).ok().map(|s| s.into_owned());
            }
            "filename" => plain = Some(value),
            _ => {}
        }
    }

    extended
        .and_then(|name| sanitize(&name))
        .or_else(|| plain.and_then(|name| sanitize(&name)))
}

/// Split a header value into lowercased `key=value` parameters.
///
/// A `;` inside a quoted string does not end the parameter. Within quotes a
/// backslash escapes only `"` and `\`; any other backslash is kept as is.
fn disposition_params(header: &str) -> Vec<(String, String)> {
    let mut params = Vec::new();
    let mut chars = header.chars().peekable();

    loop {
        let mut key = String::new();
        while let Some(&c) = chars.peek() {
            if c == '=' || c == ';' {
                break;
            }
            key.push(c);
            chars.next();
        }
        match chars.next() {
            None => break,
            // a bare token such as the disposition type
            Some(';') => continue,
            Some(_) => {}
        }

        while chars.peek().is_some_and(|c| c.is_whitespace()) {
            chars.next();
        }

        let mut value = String::new();
        if chars.peek() == Some(&'"') {
            chars.next();
            while let Some(c) = chars.next() {
                match c {
                    '"' => break,
                    '\\' if matches!(chars.peek(), Some(&'"') | Some(&'\\')) => {
                        value.extend(chars.next());
                    }
                    c => value.push(c),
                }
            }
            // anything left up to the separator is ignored
            for c in chars.by_ref() {
                if c == ';' {
                    break;
                }
            }
        } else {
            for c in chars.by_ref() {
                if c == ';' {
                    break;
                }
                value.push(c);
            }
            value = value.trim().to_string();
        }

        params.push((key.trim().to_ascii_lowercase(), value));
    }

    params
}

/// Whether `name` carries an extension: a dot that is neither leading nor trailing.
pub(crate) fn has_extension(name: &str) -> bool {
    match name.rfind('.') {
        Some(pos) => pos > 0 && pos + 1 < name.len(),
        None => false,
    }
}

/// Keep only the final path component so a name can never leave its directory.
fn sanitize(name: &str) -> Option<String> {
    let name = name.replace('\\', "/");
    let base = Path::new(&name).file_name()?.to_str()?.trim();
    match base {
        "" | "." | ".." => None,
        base => Some(base.to_string()),
    }
}
