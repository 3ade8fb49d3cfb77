//! Long-lived tagger state: the opaque settings block and the calibration
//! resource fetched at job start.

use std::sync::Arc;

use parking_lot::{RwLock, RwLockReadGuard};
use tracing::info;

use crate::setup::TrackBuilder;

/// Configuration and calibration context shared by all tagger calls in a
/// job.
///
/// Constructed once, then read-only for every event. [`refresh`] is the
/// explicit hook for swapping in a newly fetched calibration resource
/// between processing epochs; callers sharing one context across threads
/// should hold it in a [`TaggerContextHandle`] so refresh is synchronized
/// against in-flight events.
///
/// [`refresh`]: TaggerContext::refresh
#[derive(Debug)]
pub struct TaggerContext {
    settings: serde_json::Value,
    builder: Arc<TrackBuilder>,
}

impl TaggerContext {
    /// Creates a context from the opaque tagger settings and the calibration
    /// resource fetched from the setup service.
    pub fn new(settings: serde_json::Value, builder: Arc<TrackBuilder>) -> Self {
        Self { settings, builder }
    }

    /// Opaque configuration block, passed through to the tagger uninspected.
    #[inline]
    pub fn settings(&self) -> &serde_json::Value {
        &self.settings
    }

    /// The current calibration resource.
    #[inline]
    pub fn builder(&self) -> &TrackBuilder {
        &self.builder
    }

    /// Replaces the calibration resource with a newly fetched one.
    pub fn refresh(&mut self, builder: Arc<TrackBuilder>) {
        info!(
            old_epoch = self.builder.epoch,
            new_epoch = builder.epoch,
            "refreshing tagger calibration resource"
        );
        self.builder = builder;
    }
}

/// Shared handle to a [`TaggerContext`].
///
/// Clones share one context. Per-event readers take the read lock;
/// [`refresh`](TaggerContextHandle::refresh) takes the write lock, so a
/// refresh waits for in-flight events holding read guards and vice versa.
#[derive(Clone)]
pub struct TaggerContextHandle {
    inner: Arc<RwLock<TaggerContext>>,
}

impl TaggerContextHandle {
    pub fn new(context: TaggerContext) -> Self {
        Self {
            inner: Arc::new(RwLock::new(context)),
        }
    }

    /// Locks the context for shared read access for the duration of one
    /// event.
    pub fn read(&self) -> RwLockReadGuard<'_, TaggerContext> {
        self.inner.read()
    }

    /// Swaps in a newly fetched calibration resource.
    pub fn refresh(&self, builder: Arc<TrackBuilder>) {
        self.inner.write().refresh(builder);
    }

    pub fn strong_count(&self) -> usize {
        Arc::strong_count(&self.inner)
    }
}

impl std::fmt::Debug for TaggerContextHandle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TaggerContextHandle")
            .field("strong_count", &self.strong_count())
            .finish()
    }
}
