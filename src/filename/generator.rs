//! Filename generators.
//!
//! Two independent generators are used by the downloader: one names the
//! temporary file a transfer is written to, the other provides a last-resort
//! name when nothing else can be inferred. Both are swappable through the
//! [`FilenameGenerator`] trait.

use rand::distr::Alphanumeric;
use rand::Rng;
use std::fmt::Debug;

/// Produces filesystem-safe filenames.
pub trait FilenameGenerator: Debug + Send + Sync {
    /// Generate a new filename.
    fn generate(&self) -> String;
}

/// Generates names for temporary files: `tmp` followed by 16 alphanumerics.
#[derive(Debug, Clone, Copy, Default)]
pub struct TempFilenameGenerator;

impl TempFilenameGenerator {
    const PREFIX: &'static str = "tmp";
    const LENGTH: usize = 16;
}

impl FilenameGenerator for TempFilenameGenerator {
    fn generate(&self) -> String {
        let suffix: String = rand::rng()
            .sample_iter(&Alphanumeric)
            .take(Self::LENGTH)
            .map(char::from)
            .collect();
        format!("{}{}", Self::PREFIX, suffix)
    }
}

/// Generates random fallback names: 32 lowercase hex characters.
#[derive(Debug, Clone, Copy, Default)]
pub struct RandomFilenameGenerator;

impl FilenameGenerator for RandomFilenameGenerator {
    fn generate(&self) -> String {
        format!("{:032x}", rand::rng().random::<u128>())
    }
}
