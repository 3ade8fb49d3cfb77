//! Jet input resolution.
//!
//! The jet label is probed against two schemas in priority order: a
//! jets-with-associated-tracks collection, then a plain jet collection whose
//! track sets are all empty. Resolution is all-or-nothing per event; no jet
//! is ever silently dropped.

use tracing::debug;

use super::error::{ResolveError, ResolveResult};
use crate::event::{Dataset, DatasetKind, EventStore, JetRef, TrackRef};

/// Schema kinds probed for the jet label, in priority order.
pub const JET_SCHEMA_PRIORITY: [DatasetKind; 2] = [DatasetKind::AssociatedJets, DatasetKind::Jets];

/// One resolved jet with its ordered track set.
#[derive(Debug, Clone)]
pub struct JetWithTracks {
    jet: JetRef,
    tracks: Vec<TrackRef>,
}

impl JetWithTracks {
    pub fn new(jet: JetRef, tracks: Vec<TrackRef>) -> Self {
        Self { jet, tracks }
    }

    #[inline]
    pub fn jet(&self) -> &JetRef {
        &self.jet
    }

    #[inline]
    pub fn tracks(&self) -> &[TrackRef] {
        &self.tracks
    }
}

/// Resolves the jet label into an ordered list of (jet, track-set) pairs.
///
/// The first schema whose probe matches is decoded exclusively. Order of the
/// source collection is preserved; the resolved list and the track sets are
/// index-aligned with it. Fails with [`ResolveError::MissingInput`] when no
/// probed schema exists under the label.
pub fn resolve_jets(store: &EventStore, label: &str) -> ResolveResult<Vec<JetWithTracks>> {
    for kind in JET_SCHEMA_PRIORITY {
        let Some(dataset) = store.get(label, kind) else {
            continue;
        };
        let resolved = match dataset {
            Dataset::AssociatedJets(entries) => entries
                .iter()
                .map(|entry| JetWithTracks::new(entry.jet.clone(), entry.tracks.clone()))
                .collect::<Vec<_>>(),
            Dataset::Jets(jets) => jets
                .iter()
                .map(|jet| JetWithTracks::new(jet.clone(), Vec::new()))
                .collect::<Vec<_>>(),
            // get() only returns the probed kind
            _ => continue,
        };
        debug!(label, schema = ?kind, jets = resolved.len(), "jet input matched schema");
        return Ok(resolved);
    }

    Err(ResolveError::MissingInput {
        label: label.to_string(),
        tried: &JET_SCHEMA_PRIORITY,
    })
}
