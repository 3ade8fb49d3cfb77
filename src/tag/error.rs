use thiserror::Error;

/// Opaque failure raised by a tagger implementation while scoring one jet.
#[derive(Debug, Error)]
#[error("tagger failure: {reason}")]
pub struct TaggerError {
    reason: String,
}

impl TaggerError {
    pub fn new(reason: impl Into<String>) -> Self {
        Self {
            reason: reason.into(),
        }
    }
}

/// Errors returned by the tagging orchestrator.
#[derive(Debug, Error)]
pub enum TagError {
    /// A tagger failure on a single jet. Fatal for the whole event: no
    /// partial output is emitted and nothing is retried.
    #[error("tagging jet {index} failed: {source}")]
    Tagger {
        /// Index of the jet that failed, in resolved order.
        index: usize,
        #[source]
        source: TaggerError,
    },
}

impl TagError {
    /// Index of the jet the failure occurred on.
    pub fn jet_index(&self) -> usize {
        match self {
            TagError::Tagger { index, .. } => *index,
        }
    }
}

/// Convenience result type for orchestrator operations.
pub type TagResult<T> = Result<T, TagError>;
