//! Error taxonomy of backend calls

use thiserror::Error;

/// Failure of a single REST call.
///
/// Screens collapse every variant into one message per operation; the
/// distinction only matters for logging and for [`ApiError::server_message`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    /// Network failure, CORS rejection, DNS...
    #[error("request failed: {0}")]
    Transport(String),

    /// Non-2xx response
    #[error("HTTP {status}")]
    Status {
        status: u16,
        server_message: Option<String>,
    },

    /// Body is not the expected JSON shape
    #[error("failed to parse response: {0}")]
    Decode(String),

    /// The owning screen went away before the response arrived
    #[error("request aborted")]
    Aborted,
}

impl ApiError {
    /// Build a status error, picking the message out of the response body
    pub fn from_status(status: u16, body: &str) -> Self {
        Self::Status {
            status,
            server_message: super::wire::extract_server_message(body),
        }
    }

    /// Message supplied by the backend in an error body, if any
    pub fn server_message(&self) -> Option<&str> {
        match self {
            Self::Status {
                server_message: Some(message),
                ..
            } => Some(message.as_str()),
            _ => None,
        }
    }

    pub fn is_aborted(&self) -> bool {
        matches!(self, Self::Aborted)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_error_keeps_server_message() {
        let err = ApiError::from_status(400, r#"{"error":"Client not found"}"#);
        assert_eq!(err.server_message(), Some("Client not found"));
        assert_eq!(err.to_string(), "HTTP 400");
    }

    #[test]
    fn test_transport_error_has_no_server_message() {
        let err = ApiError::Transport("connection refused".into());
        assert_eq!(err.server_message(), None);
        assert!(!err.is_aborted());
        assert!(ApiError::Aborted.is_aborted());
    }
}
