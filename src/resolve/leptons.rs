//! Lepton input resolution.
//!
//! The lepton label is probed against three schemas in fixed priority:
//! electron candidates, muon candidates, raw tracks. The first matching
//! schema is decoded exclusively; later schemas are never attempted, even
//! when some elements of the matched schema are individually unusable.
//! Inside the muon schema, an element with no combined track is a
//! recoverable skip: it is logged and dropped, never escalated to a
//! resolver failure.

use tracing::{debug, warn};

use super::error::{ResolveError, ResolveResult};
use crate::event::{Dataset, DatasetKind, Electron, EventStore, LeptonCandidate, Muon, TrackRef};

/// Source schema a lepton collection was decoded from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LeptonSchema {
    Electrons,
    Muons,
    Tracks,
}

impl LeptonSchema {
    /// Returns the dataset kind this schema probes for.
    pub fn kind(self) -> DatasetKind {
        match self {
            LeptonSchema::Electrons => DatasetKind::Electrons,
            LeptonSchema::Muons => DatasetKind::Muons,
            LeptonSchema::Tracks => DatasetKind::Tracks,
        }
    }
}

/// Schemas probed for the lepton label, in priority order.
pub const LEPTON_SCHEMA_PRIORITY: [LeptonSchema; 3] = [
    LeptonSchema::Electrons,
    LeptonSchema::Muons,
    LeptonSchema::Tracks,
];

/// Dataset kinds corresponding to [`LEPTON_SCHEMA_PRIORITY`].
const LEPTON_KINDS_TRIED: [DatasetKind; 3] = [
    DatasetKind::Electrons,
    DatasetKind::Muons,
    DatasetKind::Tracks,
];

/// Result of lepton resolution: the normalized candidate list, the schema it
/// was decoded from, and how many invalid source elements were dropped.
///
/// The candidate list never contains invalid entries; dropped elements are
/// counted, not represented as placeholders.
#[derive(Debug, Clone)]
pub struct LeptonResolution {
    candidates: Vec<LeptonCandidate>,
    schema: LeptonSchema,
    skipped: usize,
}

impl LeptonResolution {
    fn new(candidates: Vec<LeptonCandidate>, schema: LeptonSchema, skipped: usize) -> Self {
        Self {
            candidates,
            schema,
            skipped,
        }
    }

    #[inline]
    pub fn candidates(&self) -> &[LeptonCandidate] {
        &self.candidates
    }

    pub fn into_candidates(self) -> Vec<LeptonCandidate> {
        self.candidates
    }

    /// Returns the schema the input was decoded from.
    #[inline]
    pub fn schema(&self) -> LeptonSchema {
        self.schema
    }

    /// Number of source elements dropped as individually invalid.
    #[inline]
    pub fn skipped(&self) -> usize {
        self.skipped
    }
}

/// Resolves the lepton label into a normalized list of track references.
///
/// Probes [`LEPTON_SCHEMA_PRIORITY`] in order and decodes only the first
/// schema present under the label. Fails with
/// [`ResolveError::MissingInput`] when none of the schemas exist.
pub fn resolve_leptons(store: &EventStore, label: &str) -> ResolveResult<LeptonResolution> {
    for schema in LEPTON_SCHEMA_PRIORITY {
        let Some(dataset) = store.get(label, schema.kind()) else {
            continue;
        };
        let resolution = match dataset {
            Dataset::Electrons(electrons) => decode_electrons(electrons),
            Dataset::Muons(muons) => decode_muons(label, muons),
            Dataset::Tracks(tracks) => decode_tracks(tracks),
            // get() only returns the probed kind
            _ => continue,
        };
        debug!(
            label,
            schema = ?resolution.schema(),
            candidates = resolution.candidates().len(),
            skipped = resolution.skipped(),
            "lepton input matched schema"
        );
        return Ok(resolution);
    }

    Err(ResolveError::MissingInput {
        label: label.to_string(),
        tried: &LEPTON_KINDS_TRIED,
    })
}

fn decode_electrons(electrons: &[Electron]) -> LeptonResolution {
    let candidates = electrons
        .iter()
        .map(|electron| electron.track.clone())
        .collect();
    LeptonResolution::new(candidates, LeptonSchema::Electrons, 0)
}

fn decode_muons(label: &str, muons: &[Muon]) -> LeptonResolution {
    let mut candidates = Vec::with_capacity(muons.len());
    let mut skipped = 0;
    for (index, muon) in muons.iter().enumerate() {
        match &muon.combined_track {
            Some(track) => candidates.push(track.clone()),
            None => {
                skipped += 1;
                warn!(label, index, "muon has no combined track, skipping it");
            }
        }
    }
    LeptonResolution::new(candidates, LeptonSchema::Muons, skipped)
}

fn decode_tracks(tracks: &[TrackRef]) -> LeptonResolution {
    LeptonResolution::new(tracks.to_vec(), LeptonSchema::Tracks, 0)
}
