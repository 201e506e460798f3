use reqwest::StatusCode;
use thiserror::Error;

/// The single error type returned by every `MoviesClient` operation.
///
/// Callers discriminate failures by inspecting `status_code()` and
/// `message()`, never by matching on distinct types per cause. The
/// underlying transport error is always retained as the source.
#[derive(Debug, Error)]
pub enum MoviesClientError {
    /// The server answered with a status outside the 2xx range.
    #[error("{status_text}")]
    ServerRejected {
        status: u16,
        status_text: String,
        /// Raw response body, kept for diagnostics.
        body: String,
        #[source]
        cause: reqwest::Error,
    },

    /// No response was obtained (network error, timeout) or the response
    /// body could not be decoded.
    #[error("{message}")]
    TransportFailure {
        message: String,
        #[source]
        cause: reqwest::Error,
    },
}

impl MoviesClientError {
    pub(crate) fn server_rejected(status: StatusCode, body: String, cause: reqwest::Error) -> Self {
        MoviesClientError::ServerRejected {
            status: status.as_u16(),
            status_text: status
                .canonical_reason()
                .map(str::to_string)
                .unwrap_or_else(|| status.as_str().to_string()),
            body,
            cause,
        }
    }

    /// Numeric HTTP status, present only when the server returned a response.
    pub fn status_code(&self) -> Option<u16> {
        match self {
            MoviesClientError::ServerRejected { status, .. } => Some(*status),
            MoviesClientError::TransportFailure { .. } => None,
        }
    }

    /// Human-readable summary of the failure.
    pub fn message(&self) -> &str {
        match self {
            MoviesClientError::ServerRejected { status_text, .. } => status_text,
            MoviesClientError::TransportFailure { message, .. } => message,
        }
    }

    /// Raw response body, present only when the server rejected the request.
    pub fn response_body(&self) -> Option<&str> {
        match self {
            MoviesClientError::ServerRejected { body, .. } => Some(body),
            MoviesClientError::TransportFailure { .. } => None,
        }
    }
}

impl From<reqwest::Error> for MoviesClientError {
    fn from(cause: reqwest::Error) -> Self {
        MoviesClientError::TransportFailure {
            message: cause.to_string(),
            cause,
        }
    }
}
