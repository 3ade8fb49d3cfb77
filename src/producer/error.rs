use thiserror::Error;

use crate::config::ConfigError;
use crate::resolve::ResolveError;
use crate::setup::SetupError;
use crate::tag::TagError;

/// Errors raised while constructing a producer at job start.
#[derive(Debug, Error)]
pub enum BuildError {
    /// The configuration failed validation.
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// The calibration resource could not be fetched from the setup
    /// service.
    #[error(transparent)]
    Setup(#[from] SetupError),
}

/// Errors raised while processing one event. Fatal for that event only; the
/// job continues and no output is published for the failed event.
#[derive(Debug, Error)]
pub enum ProduceError {
    /// An input label matched none of its expected schemas.
    #[error(transparent)]
    Resolve(#[from] ResolveError),

    /// The tagger failed on a jet.
    #[error(transparent)]
    Tag(#[from] TagError),
}

/// Convenience result type for per-event processing.
pub type ProduceResult<T> = Result<T, ProduceError>;
