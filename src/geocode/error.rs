//! Error classification for geocoding searches

use thiserror::Error;

/// Closed classification of search failures.
///
/// Transport-level cancellation is not represented here: a cancelled
/// request is suppressed before classification and never reaches the
/// UI channel.
#[derive(Debug, Error)]
pub enum SearchError {
    /// Transport failure: DNS, timeout, connection reset, TLS
    #[error("error sending request: {0}")]
    Networking(#[source] reqwest::Error),

    /// HTTP 5xx; no body detail retained
    #[error("HTTP 500 server error")]
    Server,

    /// HTTP 4xx with the status code and response body text
    #[error("HTTP {status}\n{body}")]
    Request { status: u16, body: String },

    /// Response completed but the body could not be read
    #[error("invalid response")]
    InvalidResponse,

    /// 200 body did not match the expected result envelope
    #[error("decoding error: {0}")]
    Decoding(#[source] serde_json::Error),

    /// Status outside the handled ranges. Kept recoverable rather than
    /// treated as a contract violation.
    #[error("unexpected HTTP status code: {0}")]
    UnexpectedStatus(u16),
}

impl SearchError {
    /// Classify a transport-layer error from the HTTP client.
    ///
    /// Body-read failures on an otherwise completed exchange map to
    /// `InvalidResponse`; everything else is a networking failure.
    pub(crate) fn from_transport(err: reqwest::Error) -> Self {
        if err.is_body() || err.is_decode() {
            Self::InvalidResponse
        } else {
            Self::Networking(err)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_error_display() {
        let err = SearchError::Request {
            status: 404,
            body: "not found".to_string(),
        };
        assert_eq!(err.to_string(), "HTTP 404\nnot found");
    }

    #[test]
    fn test_server_error_display() {
        assert_eq!(SearchError::Server.to_string(), "HTTP 500 server error");
    }

    #[test]
    fn test_unexpected_status_display() {
        let err = SearchError::UnexpectedStatus(302);
        assert_eq!(err.to_string(), "unexpected HTTP status code: 302");
    }
}
