//! Error types for the checkout core.

/// Mapping rejected a payload (business-rule violation).
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum InvalidPayload {
    #[error("Unsupported currency: {0}")]
    UnsupportedCurrency(String),

    #[error("Missing required field: {0}")]
    MissingField(&'static str),
}

/// Data source failures (network or backend).
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DataSourceError {
    #[error("Transport error: {0}")]
    Transport(String),

    #[error("Backend error: {status} - {message}")]
    Backend { status: u16, message: String },
}

/// Why a fetch ended in `Failure`.
///
/// Kept for diagnostics only. Callers receive the coarse outcome enums.
#[derive(Debug, thiserror::Error)]
pub enum FetchError {
    #[error(transparent)]
    Source(#[from] DataSourceError),

    #[error("Malformed payload: {0}")]
    Json(#[from] serde_json::Error),

    #[error(transparent)]
    Invalid(#[from] InvalidPayload),
}
