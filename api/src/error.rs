use thiserror::Error;

/// Failure of a single content API request.
///
/// There is no retry policy; callers treat every variant as terminal for the
/// current render cycle.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    /// Connection refused, DNS failure, CORS rejection and the like.
    #[error("request to {endpoint} failed: {detail}")]
    Network { endpoint: String, detail: String },

    /// The server answered with a non-success status.
    #[error("{endpoint} responded with HTTP {status}")]
    Status { endpoint: String, status: u16 },

    /// The body was not JSON at all.
    #[error("could not decode {endpoint} response: {detail}")]
    Decode { endpoint: String, detail: String },
}

impl ApiError {
    pub fn endpoint(&self) -> &str {
        match self {
            ApiError::Network { endpoint, .. }
            | ApiError::Status { endpoint, .. }
            | ApiError::Decode { endpoint, .. } => endpoint,
        }
    }
}
