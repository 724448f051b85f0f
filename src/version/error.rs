use thiserror::Error;

#[derive(Debug, Error)]
pub enum LookupError {
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("Rate limited: retry after {retry_after_secs:?} seconds")]
    RateLimited { retry_after_secs: Option<u64> },

    #[error("Release not found: {0}")]
    NotFound(String),

    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    #[error("Invalid release tag: {0:?}")]
    InvalidTag(String),

    #[error("Client pool lock poisoned")]
    LockPoisoned,

    #[error("Current version has not been configured")]
    NotConfigured,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigureError {
    #[error("Current version is already configured as {0}")]
    AlreadyConfigured(String),
}
