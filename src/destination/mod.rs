//! Destination handling.
//!
//! - [`resolve`] - classifying a destination string into a directory and an optional file path
//! - [`provision`] - making sure the destination directory exists

pub mod provision;
pub mod resolve;

pub use provision::{ensure_directory, DirectoryPolicy};
pub use resolve::Destination;
