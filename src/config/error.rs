//! Configuration error types.

use thiserror::Error;

/// Errors that can occur during configuration loading and validation.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// A dataset label is empty.
    #[error("configured label '{field}' must not be empty")]
    EmptyLabel { field: &'static str },

    /// The output label collides with one of the input labels, which would
    /// overwrite an input product in the event store.
    #[error("output label '{label}' collides with an input label")]
    OutputLabelCollision { label: String },

    /// The tagger settings block could not be parsed as JSON.
    #[error("failed to parse tagger settings '{value}': {source}")]
    InvalidTaggerSettings {
        value: String,
        #[source]
        source: serde_json::Error,
    },
}
