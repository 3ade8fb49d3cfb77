use parking_lot::Mutex;

use super::error::TaggerError;
use super::{Tagger, TaggerContext};
use crate::event::{JetRef, LeptonCandidate, TagInfo, TrackRef, Vertex};

/// What one mock tagger call observed.
#[derive(Debug, Clone, PartialEq)]
pub struct TagCall {
    pub jet_pt: f64,
    pub track_count: usize,
    pub lepton_count: usize,
    pub vertex_ndof: f64,
    pub builder_epoch: u64,
}

/// Recording tagger for tests.
///
/// Produces a deterministic discriminator (`10 * tracks + leptons`) so tests
/// can assert which inputs reached each call, and can be programmed to fail
/// on a given call index.
#[derive(Default)]
pub struct MockTagger {
    calls: Mutex<Vec<TagCall>>,
    fail_at: Option<usize>,
}

impl MockTagger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fails the call with the given zero-based index.
    pub fn failing_at(index: usize) -> Self {
        Self {
            calls: Mutex::new(Vec::new()),
            fail_at: Some(index),
        }
    }

    /// Returns everything observed so far, in call order.
    pub fn calls(&self) -> Vec<TagCall> {
        self.calls.lock().clone()
    }

    pub fn call_count(&self) -> usize {
        self.calls.lock().len()
    }
}

impl Tagger for MockTagger {
    fn tag(
        &self,
        context: &TaggerContext,
        jet: &JetRef,
        tracks: &[TrackRef],
        leptons: &[LeptonCandidate],
        vertex: &Vertex,
    ) -> Result<TagInfo, TaggerError> {
        let mut calls = self.calls.lock();
        let index = calls.len();
        calls.push(TagCall {
            jet_pt: jet.pt,
            track_count: tracks.len(),
            lepton_count: leptons.len(),
            vertex_ndof: vertex.ndof,
            builder_epoch: context.builder().epoch,
        });
        drop(calls);

        if self.fail_at == Some(index) {
            return Err(TaggerError::new(format!("programmed failure at call {index}")));
        }

        let discriminator = 10.0 * tracks.len() as f64 + leptons.len() as f64;
        Ok(TagInfo::new(jet.clone(), discriminator))
    }
}
