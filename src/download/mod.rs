//! Download artifacts.
//!
//! - [`temp_file`] - the write-then-rename temporary file a transfer lands in
//! - [`summary`] - the report of a successful download

pub mod summary;
pub mod temp_file;

pub use summary::{Status, Summary};
pub use temp_file::TempFile;
