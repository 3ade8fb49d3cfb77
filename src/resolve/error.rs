use thiserror::Error;

use crate::event::DatasetKind;

/// Errors returned by the input resolvers.
#[derive(Debug, Error)]
pub enum ResolveError {
    /// No dataset under the configured label matched any probed schema.
    ///
    /// Fatal for the current event, not for the job. `tried` lists the
    /// schema kinds probed, in priority order.
    #[error("no dataset under label '{label}' matches any of the probed schemas {tried:?}")]
    MissingInput {
        /// The configured dataset label.
        label: String,
        /// Schema kinds probed, in priority order.
        tried: &'static [DatasetKind],
    },
}

/// Convenience result type for resolver operations.
pub type ResolveResult<T> = Result<T, ResolveError>;
