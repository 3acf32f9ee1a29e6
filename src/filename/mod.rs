//! Filename generation and inference.
//!
//! - [`generator`] - temporary and random fallback filename generators
//! - [`infer`] - picking the final filename from a finished transfer
//! - [`mime`] - MIME type to extension lookup

pub mod generator;
pub mod infer;
pub mod mime;

pub use generator::{FilenameGenerator, RandomFilenameGenerator, TempFilenameGenerator};
pub use infer::{infer_filename, parse_content_disposition, url_filename};
pub use mime::{ExtensionGuesser, MimeExtensionGuesser};
