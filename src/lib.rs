//! Soft-lepton tag input resolution and per-jet tagging orchestration.
//!
//! This crate turns heterogeneous per-event input data (jets, a reference
//! vertex, lepton candidates) into a normalized form and runs a scoring
//! tagger once per jet, producing an ordered tag-result dataset. The raw
//! event store may expose the same logical object under several
//! incompatible physical schemas; resolvers probe the stored dataset's
//! declared kind in priority order and decode only the matched branch.
//!
//! # Public API Surface
//!
//! ## Core Types
//! - [`Config`], [`ConfigError`] - Per-producer configuration
//! - [`EventStore`], [`Dataset`], [`DatasetKind`] - Label-keyed product store
//! - [`Jet`], [`Track`], [`Vertex`], [`Electron`], [`Muon`], [`TagInfo`] -
//!   Per-event data records
//!
//! ## Resolution
//! - [`resolve_jets`], [`JetWithTracks`] - Jet input with track association
//!   fallback
//! - [`resolve_leptons`], [`LeptonResolution`], [`LeptonSchema`] - Lepton
//!   schema priority with per-element validity filtering
//! - [`resolve_vertex`], [`select_vertex`], [`VertexSorter`] - Reference
//!   vertex selection with nominal fallback
//!
//! ## Tagging
//! - [`Tagger`], [`tag_jets`] - Per-jet scoring seam and orchestration
//! - [`TaggerContext`], [`TaggerContextHandle`] - Job-lifetime calibration
//!   context with an explicit refresh hook
//! - [`TagProducer`] - The per-event entry point
//!
//! ## Setup
//! - [`SetupService`], [`TrackBuilder`] - Job-start calibration resource
//!   contract
//!
//! ## Constants
//! - [`constants::NOMINAL_VERTEX`] and friends - the immutable fallback
//!   vertex
//!
//! ## Test/Mock Support
//! Mock collaborators are available behind `#[cfg(any(test, feature =
//! "mock"))]`.

pub mod config;
pub mod constants;
pub mod event;
pub mod producer;
pub mod resolve;
pub mod setup;
pub mod tag;

pub use config::{
    Config, ConfigError, DEFAULT_JETS_LABEL, DEFAULT_LEPTONS_LABEL, DEFAULT_OUTPUT_LABEL,
    DEFAULT_VERTEX_LABEL,
};
pub use constants::{
    NOMINAL_LONGITUDINAL_ERROR, NOMINAL_TRANSVERSE_ERROR, NOMINAL_VERTEX, NOMINAL_VERTEX_NDOF,
    TRACK_BUILDER_RESOURCE, VERTEX_DISABLED_LABEL,
};
pub use event::{
    Dataset, DatasetKind, Electron, EventStore, Jet, JetRef, JetTracksAssociation,
    LeptonCandidate, Muon, TagInfo, Track, TrackRef, Vertex,
};
pub use producer::{BuildError, ProduceError, ProduceResult, TagProducer};
pub use resolve::{
    JET_SCHEMA_PRIORITY, JetWithTracks, LEPTON_SCHEMA_PRIORITY, LeptonResolution, LeptonSchema,
    NdofSorter, ResolveError, ResolveResult, VertexSorter, resolve_jets, resolve_leptons,
    resolve_vertex, select_vertex,
};
pub use setup::{SetupError, SetupResult, SetupService, TrackBuilder};
#[cfg(any(test, feature = "mock"))]
pub use setup::MockSetupService;
pub use tag::{
    TagError, TagResult, Tagger, TaggerContext, TaggerContextHandle, TaggerError, tag_jets,
};
#[cfg(any(test, feature = "mock"))]
pub use tag::{MockTagger, TagCall};
