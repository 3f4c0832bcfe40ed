//! Errors from loading guides and configuration.
//!
//! Searching itself can't fail; only getting guides and weights off disk can.

use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("failed to read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid JSON in {}: {source}", path.display())]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("unsupported manifest version {found} (expected {expected})")]
    ManifestVersion { found: u32, expected: u32 },

    #[error("failed to serialize results: {0}")]
    Output(#[source] serde_json::Error),

    #[error("{} is neither a guide file nor a directory with manifest.json", .0.display())]
    UnknownSource(PathBuf),
}

pub type Result<T> = std::result::Result<T, Error>;
