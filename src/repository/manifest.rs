use serde::Deserialize;

use crate::error::{Error, Result};

/// Manifest format version this crate reads.
pub const MANIFEST_VERSION: u32 = 1;

/// `manifest.json` at the root of a guide directory.
///
/// Lists one file per guide. The listed order is the order guides are handed
/// to the engine, which is also how equal-score results are ordered.
#[derive(Deserialize, Clone, Debug)]
pub struct GuideManifest {
    pub version: u32,
    pub guides: Vec<String>,
}

impl GuideManifest {
    pub fn validate(&self) -> Result<()> {
        if self.version != MANIFEST_VERSION {
            return Err(Error::ManifestVersion {
                found: self.version,
                expected: MANIFEST_VERSION,
            });
        }
        Ok(())
    }
}
