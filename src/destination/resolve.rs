//! Destination resolution.
//!
//! A destination string is **directory-like** when it is empty or `.`, ends
//! with a path separator, ends with a separator followed by `.`, or already
//! exists as a directory on disk. A directory-like destination leaves the
//! filename to be inferred after the transfer; any other destination names
//! the file itself, its parent being the directory.
//!
//! Resolution never fails: whether the directory exists is the business of
//! [`crate::destination::ensure_directory`].

use std::path::{is_separator, Path, PathBuf};

/// A parsed destination.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Destination {
    /// The destination as given by the caller.
    raw: String,
    /// Directory the file is written to.
    directory: PathBuf,
    /// Final file path, when the destination names the file.
    file: Option<PathBuf>,
}

impl Destination {
    /// Classify `raw` and split it into a directory and an optional file path.
    pub fn resolve(raw: &str) -> Self {
        if raw.is_empty() || raw == "." {
            return Self::directory_like(raw, PathBuf::from("."));
        }

        // `dir/.` means `dir/`
        if let Some(stripped) = raw.strip_suffix('.') {
            if stripped.ends_with(is_separator) {
                return Self::directory_like(raw, PathBuf::from(stripped));
            }
        }

        if raw.ends_with(is_separator) || Path::new(raw).is_dir() {
            return Self::directory_like(raw, PathBuf::from(raw));
        }

        let path = Path::new(raw);
        if path.file_name().is_none() {
            // `..` and friends
            return Self::directory_like(raw, PathBuf::from(raw));
        }

        let directory = match path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
            _ => PathBuf::from("."),
        };

        Self {
            raw: raw.to_string(),
            directory,
            file: Some(path.to_path_buf()),
        }
    }

    fn directory_like(raw: &str, directory: PathBuf) -> Self {
        Self {
            raw: raw.to_string(),
            directory,
            file: None,
        }
    }

    /// The destination as given by the caller.
    pub fn raw(&self) -> &str {
        &self.raw
    }

    /// The directory the downloaded file lands in.
    pub fn directory(&self) -> &Path {
        &self.directory
    }

    /// The final file path, if the destination named one.
    pub fn file(&self) -> Option<&Path> {
        self.file.as_deref()
    }

    /// The explicit filename, if the destination named one.
    pub fn filename(&self) -> Option<&str> {
        self.file
            .as_deref()
            .and_then(Path::file_name)
            .and_then(|name| name.to_str())
    }

    /// Whether the filename must be inferred after the transfer.
    pub fn is_directory_like(&self) -> bool {
        self.file.is_none()
    }

    /// Join an inferred filename onto the directory.
    pub fn join(&self, filename: &str) -> PathBuf {
        self.directory.join(filename)
    }
}
