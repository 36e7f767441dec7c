use serde::{Deserialize, Serialize};

/// Unified error type for all DNS API operations.
///
/// All variants are serializable for structured error reporting.
///
/// The API treats every non-2xx response the same way: the raw response body
/// becomes the error message. [`Api`](Self::Api) therefore displays the body
/// text verbatim, with the HTTP status kept alongside for callers that want
/// to branch on it.
#[derive(Debug, Clone, Serialize, Deserialize, thiserror::Error)]
#[serde(tag = "code")]
pub enum ClientError {
    /// The API returned a non-success HTTP status.
    ///
    /// `Display` yields the raw response body, unmodified.
    #[error("{body}")]
    Api {
        /// HTTP status code of the failed response.
        status: u16,
        /// Raw response body text.
        body: String,
    },

    /// A network-level error occurred (DNS resolution failure, connection
    /// refused, etc.).
    #[error("Network error: {detail}")]
    Network {
        /// Error details.
        detail: String,
    },

    /// The HTTP request timed out.
    #[error("Request timeout: {detail}")]
    Timeout {
        /// Error details.
        detail: String,
    },

    /// Failed to parse the API response body as JSON.
    #[error("Parse error: {detail}")]
    Parse {
        /// Details about the parse failure.
        detail: String,
    },

    /// Failed to serialize a request body.
    #[error("Serialization error: {detail}")]
    Serialization {
        /// Details about the serialization failure.
        detail: String,
    },
}

impl ClientError {
    /// HTTP status code of the failed response, if this is an API error.
    #[must_use]
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Api { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// Whether the error is a transient transport failure that may succeed
    /// if the caller retries.
    #[must_use]
    pub fn is_transient(&self) -> bool {
        matches!(self, Self::Network { .. } | Self::Timeout { .. })
    }
}

/// Convenience type alias for `Result<T, ClientError>`.
pub type Result<T> = std::result::Result<T, ClientError>;
