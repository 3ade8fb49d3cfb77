//! Tagging orchestration: one tagger call per resolved jet, in order.

pub mod context;
pub mod error;

#[cfg(any(test, feature = "mock"))]
pub mod mock;


pub use context::{TaggerContext, TaggerContextHandle};
pub use error::{TagError, TagResult, TaggerError};
#[cfg(any(test, feature = "mock"))]
pub use mock::{MockTagger, TagCall};

use crate::event::{JetRef, LeptonCandidate, TagInfo, TrackRef, Vertex};
use crate::resolve::JetWithTracks;

/// Scores one jet from its tracks, the event's lepton candidates, and the
/// reference vertex. External collaborator seam: the physics lives outside
/// this crate.
///
/// Implementations must not hold per-event mutable state; one tagger
/// instance is reused read-only across all events of a job.
pub trait Tagger {
    fn tag(
        &self,
        context: &TaggerContext,
        jet: &JetRef,
        tracks: &[TrackRef],
        leptons: &[LeptonCandidate],
        vertex: &Vertex,
    ) -> Result<TagInfo, TaggerError>;
}

/// Runs the tagger once per resolved jet, preserving order.
///
/// The mapping is one-to-one: on success the output length equals the input
/// jet count and index `i` of the output corresponds to jet `i`. The first
/// tagger failure aborts the whole event with no partial output.
pub fn tag_jets<T: Tagger + ?Sized>(
    tagger: &T,
    context: &TaggerContext,
    jets: &[JetWithTracks],
    leptons: &[LeptonCandidate],
    vertex: &Vertex,
) -> TagResult<Vec<TagInfo>> {
    let mut infos = Vec::with_capacity(jets.len());
    for (index, entry) in jets.iter().enumerate() {
        let info = tagger
            .tag(context, entry.jet(), entry.tracks(), leptons, vertex)
            .map_err(|source| TagError::Tagger { index, source })?;
        infos.push(info);
    }
    Ok(infos)
}
