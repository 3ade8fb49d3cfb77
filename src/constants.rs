//! Cross-cutting, shared constants.
//!
//! The nominal vertex is the process-wide fallback used when no fitted vertex
//! is available for an event. It is an immutable `const`; nothing mutates it
//! after process start.

use crate::event::Vertex;

/// Transverse (x, y) position error of the nominal vertex, in cm.
pub const NOMINAL_TRANSVERSE_ERROR: f64 = 0.0015;

/// Longitudinal (z) position error of the nominal vertex, in cm.
pub const NOMINAL_LONGITUDINAL_ERROR: f64 = 15.0;

/// Degrees-of-freedom marker carried by the nominal vertex.
///
/// A fitted vertex gets its ndof from the fit; this constant marks a
/// synthetic vertex so downstream code can tell them apart.
pub const NOMINAL_VERTEX_NDOF: f64 = 1.0;

/// Fallback vertex substituted when vertex input is disabled or the vertex
/// collection is empty: at the origin, with a diagonal covariance of
/// (transverse², transverse², longitudinal²) and no associated tracks.
pub const NOMINAL_VERTEX: Vertex = Vertex {
    position: [0.0, 0.0, 0.0],
    covariance: [
        NOMINAL_TRANSVERSE_ERROR * NOMINAL_TRANSVERSE_ERROR,
        0.0,
        NOMINAL_TRANSVERSE_ERROR * NOMINAL_TRANSVERSE_ERROR,
        0.0,
        0.0,
        NOMINAL_LONGITUDINAL_ERROR * NOMINAL_LONGITUDINAL_ERROR,
    ],
    chi2: 1.0,
    ndof: NOMINAL_VERTEX_NDOF,
    track_count: 0,
};

/// Reserved vertex-label value meaning "vertex input disabled".
pub const VERTEX_DISABLED_LABEL: &str = "none";

/// Name of the calibration resource fetched from the setup service at job
/// start and handed to the tagger context.
pub const TRACK_BUILDER_RESOURCE: &str = "TransientTrackBuilder";
