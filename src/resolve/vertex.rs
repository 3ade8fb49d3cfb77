//! Reference-vertex selection.
//!
//! One vertex is selected per event before any tagging call. A ranked pick
//! from the vertex collection when one is available; the immutable nominal
//! vertex when the collection is empty or vertex input is disabled.

use tracing::debug;

use super::error::{ResolveError, ResolveResult};
use crate::constants::{NOMINAL_VERTEX, VERTEX_DISABLED_LABEL};
use crate::event::{Dataset, DatasetKind, EventStore, Vertex};

const VERTEX_KINDS_TRIED: [DatasetKind; 1] = [DatasetKind::Vertices];

/// Ranks candidate vertices by quality. External collaborator seam: the
/// production ranking lives outside this crate, only its contract matters
/// here.
pub trait VertexSorter {
    /// Returns the quality score of one vertex; higher is better.
    fn quality(&self, vertex: &Vertex) -> f64;
}

/// Default ranking: prefer the vertex with the most fit degrees of freedom.
#[derive(Debug, Default, Clone, Copy)]
pub struct NdofSorter;

impl VertexSorter for NdofSorter {
    fn quality(&self, vertex: &Vertex) -> f64 {
        vertex.ndof
    }
}

/// Selects the top-ranked vertex, or the nominal vertex if the collection is
/// empty.
///
/// Ties are broken by input order: the earliest vertex with the maximum
/// quality wins, so selection is deterministic for a fixed input order.
pub fn select_vertex<S: VertexSorter + ?Sized>(vertices: &[Vertex], sorter: &S) -> Vertex {
    let mut best: Option<(usize, f64)> = None;
    for (index, vertex) in vertices.iter().enumerate() {
        let quality = sorter.quality(vertex);
        // strict '>' keeps the earliest vertex on ties
        if best.is_none_or(|(_, best_quality)| quality > best_quality) {
            best = Some((index, quality));
        }
    }
    match best {
        Some((index, _)) => vertices[index],
        None => {
            debug!("vertex collection empty, substituting nominal vertex");
            NOMINAL_VERTEX
        }
    }
}

/// Resolves the vertex label into the event's reference vertex.
///
/// The reserved label [`VERTEX_DISABLED_LABEL`] short-circuits to the
/// nominal vertex without touching the store. An enabled label with no
/// vertex dataset is a [`ResolveError::MissingInput`]; an enabled label with
/// an *empty* vertex dataset falls back to the nominal vertex.
pub fn resolve_vertex<S: VertexSorter + ?Sized>(
    store: &EventStore,
    label: &str,
    sorter: &S,
) -> ResolveResult<Vertex> {
    if label == VERTEX_DISABLED_LABEL {
        debug!("vertex input disabled, using nominal vertex");
        return Ok(NOMINAL_VERTEX);
    }

    match store.get(label, DatasetKind::Vertices) {
        Some(Dataset::Vertices(vertices)) => Ok(select_vertex(vertices, sorter)),
        _ => Err(ResolveError::MissingInput {
            label: label.to_string(),
            tried: &VERTEX_KINDS_TRIED,
        }),
    }
}
