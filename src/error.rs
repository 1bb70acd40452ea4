//! Error types for the DIME SDK.

use thiserror::Error;

/// Errors that can occur when using the DIME SDK.
///
/// Every failure origin — HTTP status, application-level `success:false`
/// envelope, client-side validation, or transport — surfaces as exactly one
/// variant of this enum, so callers can pattern-match on the failure kind.
#[derive(Error, Debug)]
pub enum DimeError {
    /// The server returned a non-2xx HTTP response.
    #[error("API request failed ({status}): {message}")]
    ApiError {
        /// HTTP status code.
        status: u16,
        /// Canonical status text (e.g. "Service Unavailable").
        message: String,
    },

    /// The server returned 2xx but the response envelope carried
    /// `success: false`.
    #[error("API error: {0}")]
    BackendError(String),

    /// A network or transport error occurred (connection refused, DNS
    /// failure, timeout, malformed body).
    #[error("Network error: {0}")]
    NetworkError(#[from] reqwest::Error),

    /// Failed to deserialize a response envelope.
    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    /// Invalid configuration (e.g. malformed base URL).
    #[error("Configuration error: {0}")]
    ConfigError(String),

    /// An invalid argument was provided, detected before any network call.
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// URL parsing error.
    #[error("URL parse error: {0}")]
    UrlParseError(#[from] url::ParseError),
}

impl DimeError {
    /// The HTTP status code, when the failure carries one.
    pub fn status(&self) -> Option<u16> {
        match self {
            DimeError::ApiError { status, .. } => Some(*status),
            DimeError::NetworkError(e) => e.status().map(|s| s.as_u16()),
            _ => None,
        }
    }
}

/// Convenience type alias for SDK results.
pub type DimeResult<T> = Result<T, DimeError>;
