use thiserror::Error;

/// Errors raised while fetching job-start resources from the setup service.
#[derive(Debug, Error)]
pub enum SetupError {
    /// The named calibration resource could not be served.
    #[error("setup service has no resource named '{name}'")]
    ResourceUnavailable {
        /// The requested resource name.
        name: String,
    },
}

/// Convenience result type for setup-service operations.
pub type SetupResult<T> = Result<T, SetupError>;
