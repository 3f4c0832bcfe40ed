use std::sync::Arc;

use parking_lot::RwLock;
use tracing::{debug, info, warn};

use super::GuideSource;
use crate::error::Result;
use crate::types::DiagnosticGuide;

/// Fetch-and-hold cache over a [`GuideSource`].
///
/// The first [`guides`](Self::guides) call loads the collection; later calls
/// share the same `Arc` until [`invalidate`](Self::invalidate) drops it (the
/// list screen does this when it regains focus). Readers holding an old `Arc`
/// keep a consistent snapshot.
pub struct GuideCache<S> {
    source: S,
    guides: RwLock<Option<Arc<Vec<DiagnosticGuide>>>>,
}

impl<S: GuideSource> GuideCache<S> {
    pub fn new(source: S) -> Self {
        Self {
            source,
            guides: RwLock::new(None),
        }
    }

    /// Cached guides, loading them on a miss.
    pub fn guides(&self) -> Result<Arc<Vec<DiagnosticGuide>>> {
        if let Some(guides) = self.guides.read().as_ref() {
            return Ok(Arc::clone(guides));
        }

        let mut slot = self.guides.write();
        // another caller may have loaded while we waited for the write lock
        if let Some(guides) = slot.as_ref() {
            return Ok(Arc::clone(guides));
        }

        let loaded = Arc::new(self.source.load()?);
        info!(count = loaded.len(), "guide cache filled");
        *slot = Some(Arc::clone(&loaded));
        Ok(loaded)
    }

    /// Drop the cached collection; the next read reloads.
    pub fn invalidate(&self) {
        if self.guides.write().take().is_some() {
            debug!("guide cache invalidated");
        }
    }

    /// Reload now. On failure the previous collection stays cached.
    pub fn refresh(&self) -> Result<Arc<Vec<DiagnosticGuide>>> {
        let loaded = match self.source.load() {
            Ok(guides) => Arc::new(guides),
            Err(e) => {
                warn!(error = %e, "guide cache refresh failed, keeping previous guides");
                return Err(e);
            }
        };
        *self.guides.write() = Some(Arc::clone(&loaded));
        info!(count = loaded.len(), "guide cache refreshed");
        Ok(loaded)
    }

    pub fn is_loaded(&self) -> bool {
        self.guides.read().is_some()
    }

    pub fn source(&self) -> &S {
        &self.source
    }
}
