//! Per-event data model and the label-keyed product store.

pub mod store;
pub mod types;


pub use store::{Dataset, DatasetKind, EventStore};
pub use types::{
    Electron, Jet, JetRef, JetTracksAssociation, LeptonCandidate, Muon, TagInfo, Track, TrackRef,
    Vertex,
};
