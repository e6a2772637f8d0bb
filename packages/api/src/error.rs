//! Client-side API errors.

/// Failure of a single API call.
///
/// The `Display` text is what the UI shows inline: the server's `error`
/// message when it sent one, otherwise a fixed fallback for the operation.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// The request never produced a response (DNS, connection refused, CORS).
    #[error("{fallback}")]
    Transport {
        fallback: &'static str,
        #[source]
        source: reqwest::Error,
    },
    /// The server answered with a failure.
    #[error("{message}")]
    Rejected { status: u16, message: String },
    /// A success response whose body was not the expected envelope. The
    /// serde detail is kept for logs; the UI shows the fallback.
    #[error("{fallback}")]
    Decode {
        fallback: &'static str,
        detail: String,
    },
}

impl ApiError {
    /// The server refused the bearer credential.
    pub fn is_unauthorized(&self) -> bool {
        matches!(self, ApiError::Rejected { status: 401, .. })
    }

    /// HTTP status of a rejection, if any.
    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::Rejected { status, .. } => Some(*status),
            _ => None,
        }
    }
}
