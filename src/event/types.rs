//! Plain per-event data records.
//!
//! Records are read from the event store and live only for the duration of
//! one event's processing. Shared references (`TrackRef`, `JetRef`) are
//! reference-counted so resolved views can alias store products without
//! copying kinematics around.

use std::sync::Arc;

use serde::{Deserialize, Serialize};

/// Shared reference to a reconstructed track.
pub type TrackRef = Arc<Track>;

/// Shared reference to a reconstructed jet.
pub type JetRef = Arc<Jet>;

/// A track standing in for an identified lepton, regardless of which source
/// schema it was decoded from.
pub type LeptonCandidate = TrackRef;

/// A reconstructed charged-particle track.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Track {
    /// Transverse momentum in GeV.
    pub pt: f64,
    pub eta: f64,
    pub phi: f64,
    /// Electric charge in units of e.
    pub charge: i32,
}

/// A reconstructed jet. Array position within its collection defines the
/// output order of tag results.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Jet {
    /// Transverse momentum in GeV.
    pub pt: f64,
    pub eta: f64,
    pub phi: f64,
    /// Total energy in GeV.
    pub energy: f64,
}

/// One jet plus the ordered set of tracks associated to it (may be empty).
#[derive(Debug, Clone)]
pub struct JetTracksAssociation {
    pub jet: JetRef,
    pub tracks: Vec<TrackRef>,
}

/// An electron candidate. The associated track is always present in this
/// schema.
#[derive(Debug, Clone)]
pub struct Electron {
    pub track: TrackRef,
}

/// A muon candidate. The combined fit may have failed, in which case the
/// element carries no track and is dropped during lepton resolution.
#[derive(Debug, Clone)]
pub struct Muon {
    pub combined_track: Option<TrackRef>,
}

/// A reconstructed interaction point with position and uncertainty.
///
/// The covariance is the symmetric 3×3 position covariance packed
/// lower-triangular row-wise: (xx, xy, yy, xz, yz, zz). The `ndof` field
/// doubles as the marker distinguishing a fitted vertex from the synthetic
/// nominal one ([`crate::constants::NOMINAL_VERTEX`]).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Vertex {
    /// Position (x, y, z) in cm.
    pub position: [f64; 3],
    /// Packed symmetric position covariance, in cm².
    pub covariance: [f64; 6],
    pub chi2: f64,
    pub ndof: f64,
    /// Number of tracks used in the fit; zero for a synthetic vertex.
    pub track_count: u32,
}

impl Vertex {
    /// Returns the diagonal (xx, yy, zz) of the position covariance.
    #[inline]
    pub fn diagonal(&self) -> [f64; 3] {
        [self.covariance[0], self.covariance[2], self.covariance[5]]
    }
}

/// Opaque per-jet output of a tagger. This crate stores and forwards tag
/// results without inspecting their contents; only tagger implementations
/// give the discriminator meaning.
#[derive(Debug, Clone)]
pub struct TagInfo {
    jet: JetRef,
    discriminator: f64,
}

impl TagInfo {
    /// Creates a tag result for one jet. Called by tagger implementations.
    pub fn new(jet: JetRef, discriminator: f64) -> Self {
        Self {
            jet,
            discriminator,
        }
    }

    /// Returns the jet this result belongs to.
    #[inline]
    pub fn jet(&self) -> &JetRef {
        &self.jet
    }

    /// Returns the raw discriminator value.
    #[inline]
    pub fn discriminator(&self) -> f64 {
        self.discriminator
    }
}
