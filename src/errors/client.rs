//! Error types for the bridge information service.

/// Errors that can occur when talking to the bridge information service or
/// a chain-interaction collaborator.
///
/// Upstream failures are propagated unchanged to the caller: they are never
/// cached by the caching decorator and never retried by this crate. Retry
/// and backoff policy belongs to the caller.
#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    /// The wrapped upstream service failed or timed out.
    #[error("Upstream service failure: {details}")]
    Upstream {
        /// Details about the failure from the underlying transport
        details: String,
    },

    /// The upstream service answered, but the payload could not be used.
    ///
    /// Examples: a fee field that is not a decimal integer, a token entry
    /// referencing a chain symbol missing from the payload.
    #[error("Invalid upstream response: {details}")]
    InvalidResponse {
        /// Details about what was malformed
        details: String,
    },
}

impl ClientError {
    /// Create an `Upstream` error with details.
    pub fn upstream(details: impl Into<String>) -> Self {
        ClientError::Upstream {
            details: details.into(),
        }
    }

    /// Create an `InvalidResponse` error with details.
    pub fn invalid_response(details: impl Into<String>) -> Self {
        ClientError::InvalidResponse {
            details: details.into(),
        }
    }
}
