//! Reading guides off disk.
//!
//! A guide directory holds a `manifest.json` plus one JSON file per guide. With
//! the `parallel` feature the files are read and parsed on the rayon pool;
//! order always follows the manifest.

use std::fs;
use std::path::{Path, PathBuf};

#[cfg(feature = "parallel")]
use indicatif::ProgressBar;
#[cfg(feature = "parallel")]
use rayon::prelude::*;
#[cfg(feature = "parallel")]
use std::sync::atomic::{AtomicUsize, Ordering};
use serde::de::DeserializeOwned;
use tracing::warn;

use super::GuideManifest;
use crate::error::{Error, Result};
use crate::types::DiagnosticGuide;

/// Read and parse a JSON file.
pub fn read_json<T: DeserializeOwned>(path: &Path) -> Result<T> {
    let content = fs::read_to_string(path).map_err(|source| Error::Read {
        path: path.to_path_buf(),
        source,
    })?;
    serde_json::from_str(&content).map_err(|source| Error::Json {
        path: path.to_path_buf(),
        source,
    })
}

/// Read `manifest.json` from a guide directory.
pub fn read_manifest(root: &Path) -> Result<GuideManifest> {
    let manifest: GuideManifest = read_json(&root.join("manifest.json"))?;
    manifest.validate()?;
    Ok(manifest)
}

fn load_one(root: &Path, filename: &str) -> Result<DiagnosticGuide> {
    let path: PathBuf = root.join(filename);
    read_json(&path).inspect_err(|e| warn!(error = %e, "failed to load guide"))
}

/// Load every guide listed in the manifest, in manifest order.
///
/// Fails on the first unreadable or malformed file.
#[cfg(feature = "parallel")]
pub fn load_guides(root: &Path, manifest: &GuideManifest) -> Result<Vec<DiagnosticGuide>> {
    manifest
        .guides
        .par_iter()
        .map(|filename| load_one(root, filename))
        .collect()
}

#[cfg(not(feature = "parallel"))]
pub fn load_guides(root: &Path, manifest: &GuideManifest) -> Result<Vec<DiagnosticGuide>> {
    manifest
        .guides
        .iter()
        .map(|filename| load_one(root, filename))
        .collect()
}

/// Load every guide listed in the manifest while advancing a progress bar.
#[cfg(feature = "parallel")]
pub fn load_guides_with_progress(
    root: &Path,
    manifest: &GuideManifest,
    progress: &ProgressBar,
) -> Result<Vec<DiagnosticGuide>> {
    let counter = AtomicUsize::new(0);
    let total = manifest.guides.len();

    let guides = manifest
        .guides
        .par_iter()
        .map(|filename| {
            let guide = load_one(root, filename)?;

            let count = counter.fetch_add(1, Ordering::Relaxed) + 1;
            progress.set_position(count as u64);
            if count % 50 == 0 || count == total {
                progress.set_message(format!("{}/{}", count, total));
            }

            Ok(guide)
        })
        .collect::<Result<Vec<DiagnosticGuide>>>()?;

    Ok(guides)
}
