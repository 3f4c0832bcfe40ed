//! Where guides come from before they reach the engine.
//!
//! The engine only ever sees a slice of guides. Fetching them, and deciding
//! which ones the current user may see, happens out here. Sources load the
//! whole collection; [`GuideCache`] holds it until something invalidates it.
//!
//! Two on-disk layouts are understood:
//!
//! ```text
//! guides.json            # [ {guide}, ... ], { "guides": [ {guide}, ... ] } or {guide}
//!
//! guides/
//! ├── manifest.json      # { "version": 1, "guides": ["0001.json", ...] }
//! ├── 0001.json          # one guide per file
//! └── ...
//! ```

mod cache;
mod loader;
mod manifest;

pub use cache::GuideCache;
pub use loader::{load_guides, read_json, read_manifest};
#[cfg(feature = "parallel")]
pub use loader::load_guides_with_progress;
pub use manifest::{GuideManifest, MANIFEST_VERSION};

use std::path::{Path, PathBuf};

use serde_json::Value;
use tracing::info;

use crate::error::{Error, Result};
use crate::types::{records_from, DiagnosticGuide};

/// Anything that can hand over the full guide collection.
pub trait GuideSource {
    fn load(&self) -> Result<Vec<DiagnosticGuide>>;
}

impl GuideSource for Vec<DiagnosticGuide> {
    fn load(&self) -> Result<Vec<DiagnosticGuide>> {
        Ok(self.clone())
    }
}

impl<S: GuideSource + ?Sized> GuideSource for Box<S> {
    fn load(&self) -> Result<Vec<DiagnosticGuide>> {
        (**self).load()
    }
}

/// Guides from a parsed guide file: a list, `{"guides": [...]}`, or one guide.
///
/// List entries that aren't objects are skipped, the same as a guide's own
/// malformed entries. A `guides` key that isn't an array is an error.
fn guides_from_value(value: Value) -> std::result::Result<Vec<DiagnosticGuide>, serde_json::Error> {
    let shape_error = <serde_json::Error as serde::de::Error>::custom;
    match value {
        Value::Array(items) => Ok(records_from(items)),
        Value::Object(mut fields) => match fields.remove("guides") {
            Some(Value::Array(items)) => Ok(records_from(items)),
            Some(_) => Err(shape_error("`guides` must be an array of guides")),
            None => Ok(vec![DiagnosticGuide::from(fields)]),
        },
        _ => Err(shape_error("expected a guide, a list of guides or {\"guides\": [...]}")),
    }
}

/// One JSON file holding a guide, a list of guides, or `{"guides": [...]}`.
#[derive(Debug, Clone)]
pub struct JsonFileSource {
    path: PathBuf,
}

impl JsonFileSource {
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl GuideSource for JsonFileSource {
    fn load(&self) -> Result<Vec<DiagnosticGuide>> {
        let guides =
            guides_from_value(read_json(&self.path)?).map_err(|source| Error::Json {
                path: self.path.clone(),
                source,
            })?;
        info!(path = %self.path.display(), count = guides.len(), "loaded guide file");
        Ok(guides)
    }
}

/// A directory with `manifest.json` and one file per guide.
#[derive(Debug, Clone)]
pub struct ManifestDirSource {
    root: PathBuf,
    progress: bool,
}

impl ManifestDirSource {
    pub fn new(root: impl AsRef<Path>) -> Self {
        Self {
            root: root.as_ref().to_path_buf(),
            progress: false,
        }
    }

    /// Show a progress bar on stderr while loading. No-op without `parallel`.
    pub fn with_progress(mut self, progress: bool) -> Self {
        self.progress = progress;
        self
    }

    pub fn root(&self) -> &Path {
        &self.root
    }
}

impl GuideSource for ManifestDirSource {
    fn load(&self) -> Result<Vec<DiagnosticGuide>> {
        let manifest = read_manifest(&self.root)?;

        #[cfg(feature = "parallel")]
        let guides = if self.progress {
            let pb = indicatif::ProgressBar::new(manifest.guides.len() as u64);
            pb.set_style(progress_style());
            pb.set_prefix("Loading");
            let guides = load_guides_with_progress(&self.root, &manifest, &pb)?;
            pb.finish_and_clear();
            guides
        } else {
            load_guides(&self.root, &manifest)?
        };

        #[cfg(not(feature = "parallel"))]
        let guides = load_guides(&self.root, &manifest)?;

        info!(root = %self.root.display(), count = guides.len(), "loaded guide directory");
        Ok(guides)
    }
}

#[cfg(feature = "parallel")]
fn progress_style() -> indicatif::ProgressStyle {
    indicatif::ProgressStyle::with_template(
        "{spinner:.cyan} {prefix:<12} [{bar:40.cyan/dim}] {pos}/{len} {msg}",
    )
    .map(|style| style.progress_chars("━━╸"))
    .unwrap_or_else(|_| indicatif::ProgressStyle::default_bar())
}

/// Pick a source for a path: directories need a `manifest.json`, anything else
/// must be a JSON file.
pub fn open_source(path: impl AsRef<Path>) -> Result<Box<dyn GuideSource + Send + Sync>> {
    let path = path.as_ref();
    if path.is_dir() {
        if path.join("manifest.json").is_file() {
            return Ok(Box::new(ManifestDirSource::new(path)));
        }
        return Err(Error::UnknownSource(path.to_path_buf()));
    }
    if path.is_file() {
        return Ok(Box::new(JsonFileSource::new(path)));
    }
    Err(Error::UnknownSource(path.to_path_buf()))
}
