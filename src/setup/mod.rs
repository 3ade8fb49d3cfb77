//! Setup-service contract and the per-run calibration resource.
//!
//! The producer fetches the track-builder resource once at job start and
//! hands it to the tagger context. Whether and when the resource is
//! re-fetched across calibration epochs is the integrating framework's
//! decision, via the explicit refresh hooks.

pub mod error;

#[cfg(any(test, feature = "mock"))]
pub mod mock;

pub use error::{SetupError, SetupResult};
#[cfg(any(test, feature = "mock"))]
pub use mock::MockSetupService;

use std::sync::Arc;

/// Per-run calibration/helper record required by taggers. Opaque to this
/// crate: only its identity and lifetime matter here.
#[derive(Debug, Clone, PartialEq)]
pub struct TrackBuilder {
    /// Magnetic field strength in tesla.
    pub field_tesla: f64,
    /// Calibration epoch this record was built for.
    pub epoch: u64,
}

/// Serves named job-start resources. External collaborator seam.
pub trait SetupService {
    /// Fetches the calibration resource registered under `name`.
    fn track_builder(&self, name: &str) -> SetupResult<Arc<TrackBuilder>>;
}
