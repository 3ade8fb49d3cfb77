//! Input resolvers: schema-probing dispatch from the event store to
//! normalized per-event views.
//!
//! Each resolver walks an ordered list of candidate schemas, probing the
//! stored dataset's kind first and decoding only the matched branch. Probe
//! misses drive fallback to the next schema; only exhaustion of all
//! candidates becomes a [`ResolveError::MissingInput`].

pub mod error;
pub mod jets;
pub mod leptons;
pub mod vertex;


pub use error::{ResolveError, ResolveResult};
pub use jets::{JET_SCHEMA_PRIORITY, JetWithTracks, resolve_jets};
pub use leptons::{LEPTON_SCHEMA_PRIORITY, LeptonResolution, LeptonSchema, resolve_leptons};
pub use vertex::{NdofSorter, VertexSorter, resolve_vertex, select_vertex};
