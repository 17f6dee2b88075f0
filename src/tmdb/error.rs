//! Error types for the remote movie service client.
//!
//! Every failure carries its category as structured data so callers can
//! choose user-facing text without re-parsing messages.

use thiserror::Error;

/// Errors returned by [`crate::tmdb::TmdbClient`].
#[derive(Debug, Error)]
pub enum TmdbError {
    /// No API key is configured. Never retryable.
    #[error("API key is missing")]
    MissingCredential,

    /// Caller-supplied parameters were rejected before any request was sent.
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// The service answered with a non-success status.
    #[error("HTTP error! status: {status}, message: {body}")]
    Remote { status: u16, body: String },

    /// The service answered with success but the body lacks expected fields.
    #[error("Malformed response: {0}")]
    MalformedResponse(String),

    /// Login validation was refused with HTTP 401.
    #[error("Invalid username or password")]
    InvalidCredentials,

    /// The request never produced an HTTP response.
    #[error("Connection to movie service failed: {0}")]
    Transport(#[source] reqwest::Error),
}

/// Category of a [`TmdbError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TmdbErrorKind {
    MissingCredential,
    InvalidInput,
    Remote,
    MalformedResponse,
    InvalidCredentials,
    Transport,
}

impl TmdbError {
    pub fn kind(&self) -> TmdbErrorKind {
        match self {
            TmdbError::MissingCredential => TmdbErrorKind::MissingCredential,
            TmdbError::InvalidInput(_) => TmdbErrorKind::InvalidInput,
            TmdbError::Remote { .. } => TmdbErrorKind::Remote,
            TmdbError::MalformedResponse(_) => TmdbErrorKind::MalformedResponse,
            TmdbError::InvalidCredentials => TmdbErrorKind::InvalidCredentials,
            TmdbError::Transport(_) => TmdbErrorKind::Transport,
        }
    }

    /// HTTP status carried by the error, if any.
    pub fn status(&self) -> Option<u16> {
        match self {
            TmdbError::Remote { status, .. } => Some(*status),
            TmdbError::InvalidCredentials => Some(401),
            _ => None,
        }
    }

    /// True when the service refused our API key or credentials.
    pub fn is_unauthorized(&self) -> bool {
        self.status() == Some(401)
    }

    /// Stable identifier for logs.
    pub fn error_type(&self) -> &'static str {
        match self.kind() {
            TmdbErrorKind::MissingCredential => "missing_credential",
            TmdbErrorKind::InvalidInput => "invalid_input",
            TmdbErrorKind::Remote => "remote_error",
            TmdbErrorKind::MalformedResponse => "malformed_response",
            TmdbErrorKind::InvalidCredentials => "invalid_credentials",
            TmdbErrorKind::Transport => "transport_error",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_remote_error_message_carries_status_and_body() {
        let err = TmdbError::Remote {
            status: 404,
            body: "not found".to_string(),
        };
        assert_eq!(err.to_string(), "HTTP error! status: 404, message: not found");
        assert_eq!(err.kind(), TmdbErrorKind::Remote);
        assert_eq!(err.status(), Some(404));
        assert!(!err.is_unauthorized());
    }

    #[test]
    fn test_unauthorized_detection() {
        let err = TmdbError::Remote {
            status: 401,
            body: String::new(),
        };
        assert!(err.is_unauthorized());
        assert!(TmdbError::InvalidCredentials.is_unauthorized());
        assert!(!TmdbError::MissingCredential.is_unauthorized());
    }

    #[test]
    fn test_error_type_strings() {
        assert_eq!(TmdbError::MissingCredential.error_type(), "missing_credential");
        assert_eq!(
            TmdbError::InvalidInput("page".into()).error_type(),
            "invalid_input"
        );
        assert_eq!(
            TmdbError::MalformedResponse("x".into()).error_type(),
            "malformed_response"
        );
    }
}
