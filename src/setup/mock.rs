use std::collections::HashMap;
use std::sync::Arc;

use parking_lot::Mutex;

use super::error::{SetupError, SetupResult};
use super::{SetupService, TrackBuilder};

/// In-memory setup service for tests: serves registered builders and lets a
/// test swap a resource to simulate a calibration-epoch change.
#[derive(Default)]
pub struct MockSetupService {
    resources: Mutex<HashMap<String, Arc<TrackBuilder>>>,
}

impl MockSetupService {
    /// Creates a service with no registered resources; every fetch fails.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Creates a service serving `builder` under `name`.
    pub fn with_builder(name: impl Into<String>, builder: TrackBuilder) -> Self {
        let service = Self::default();
        service.register(name, builder);
        service
    }

    /// Registers or replaces the resource served under `name`.
    pub fn register(&self, name: impl Into<String>, builder: TrackBuilder) {
        self.resources
            .lock()
            .insert(name.into(), Arc::new(builder));
    }
}

impl SetupService for MockSetupService {
    fn track_builder(&self, name: &str) -> SetupResult<Arc<TrackBuilder>> {
        self.resources
            .lock()
            .get(name)
            .cloned()
            .ok_or_else(|| SetupError::ResourceUnavailable {
                name: name.to_string(),
            })
    }
}
