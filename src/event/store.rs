//! Label-keyed in-memory event store.
//!
//! The same label may hold several datasets of *different* kinds; that is
//! what makes schema probing meaningful. Resolvers probe a label for a kind
//! via [`EventStore::get`] and only then decode the matched variant; an
//! unmatched branch is never decoded.

use std::collections::HashMap;

use super::types::{Electron, JetRef, JetTracksAssociation, Muon, TagInfo, TrackRef, Vertex};

/// Schema discriminant for a stored dataset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DatasetKind {
    AssociatedJets,
    Jets,
    Vertices,
    Electrons,
    Muons,
    Tracks,
    TagInfos,
}

/// A stored per-event dataset, tagged by physical schema.
#[derive(Debug, Clone)]
pub enum Dataset {
    /// Jets with their associated track sets.
    AssociatedJets(Vec<JetTracksAssociation>),
    /// Plain jet collection without track association.
    Jets(Vec<JetRef>),
    Vertices(Vec<Vertex>),
    Electrons(Vec<Electron>),
    Muons(Vec<Muon>),
    Tracks(Vec<TrackRef>),
    /// Ordered tag results, one per input jet.
    TagInfos(Vec<TagInfo>),
}

impl Dataset {
    /// Returns the schema discriminant without touching the payload.
    pub fn kind(&self) -> DatasetKind {
        match self {
            Dataset::AssociatedJets(_) => DatasetKind::AssociatedJets,
            Dataset::Jets(_) => DatasetKind::Jets,
            Dataset::Vertices(_) => DatasetKind::Vertices,
            Dataset::Electrons(_) => DatasetKind::Electrons,
            Dataset::Muons(_) => DatasetKind::Muons,
            Dataset::Tracks(_) => DatasetKind::Tracks,
            Dataset::TagInfos(_) => DatasetKind::TagInfos,
        }
    }

    pub fn as_associated_jets(&self) -> Option<&[JetTracksAssociation]> {
        match self {
            Dataset::AssociatedJets(entries) => Some(entries),
            _ => None,
        }
    }

    pub fn as_jets(&self) -> Option<&[JetRef]> {
        match self {
            Dataset::Jets(jets) => Some(jets),
            _ => None,
        }
    }

    pub fn as_vertices(&self) -> Option<&[Vertex]> {
        match self {
            Dataset::Vertices(vertices) => Some(vertices),
            _ => None,
        }
    }

    pub fn as_electrons(&self) -> Option<&[Electron]> {
        match self {
            Dataset::Electrons(electrons) => Some(electrons),
            _ => None,
        }
    }

    pub fn as_muons(&self) -> Option<&[Muon]> {
        match self {
            Dataset::Muons(muons) => Some(muons),
            _ => None,
        }
    }

    pub fn as_tracks(&self) -> Option<&[TrackRef]> {
        match self {
            Dataset::Tracks(tracks) => Some(tracks),
            _ => None,
        }
    }

    pub fn as_tag_infos(&self) -> Option<&[TagInfo]> {
        match self {
            Dataset::TagInfos(infos) => Some(infos),
            _ => None,
        }
    }
}

/// In-memory product store for one event.
///
/// Products are keyed by `(label, kind)`: putting a dataset replaces an
/// existing dataset of the same kind under the same label, while datasets of
/// other kinds under that label are untouched.
#[derive(Debug, Default)]
pub struct EventStore {
    products: HashMap<String, Vec<Dataset>>,
}

impl EventStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Stores a dataset under a label, replacing any existing dataset of the
    /// same kind under that label.
    pub fn put(&mut self, label: impl Into<String>, dataset: Dataset) {
        let entries = self.products.entry(label.into()).or_default();
        let kind = dataset.kind();
        match entries.iter().position(|existing| existing.kind() == kind) {
            Some(slot) => entries[slot] = dataset,
            None => entries.push(dataset),
        }
    }

    /// Looks up the dataset of a given kind under a label.
    ///
    /// This is the probe step of schema dispatch: it inspects discriminants
    /// only and never decodes an unmatched variant.
    pub fn get(&self, label: &str, kind: DatasetKind) -> Option<&Dataset> {
        self.products
            .get(label)?
            .iter()
            .find(|dataset| dataset.kind() == kind)
    }

    /// Returns whether a dataset of the given kind exists under a label.
    #[inline]
    pub fn contains(&self, label: &str, kind: DatasetKind) -> bool {
        self.get(label, kind).is_some()
    }

    /// Returns all labels with at least one stored dataset.
    pub fn labels(&self) -> impl Iterator<Item = &str> {
        self.products.keys().map(String::as_str)
    }

    /// Total number of stored datasets across all labels.
    pub fn len(&self) -> usize {
        self.products.values().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }
}
