// ============================================================================
// ERRORS - client failure taxonomy
// ============================================================================
// Nothing here is allowed to escape to the UI unhandled: hooks turn
// `ApiError` into notifications, `SessionError` and `StorageError` into logs.
// ============================================================================

use serde::Deserialize;
use thiserror::Error;

/// Failure of a call to the bloglist REST API.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    /// `POST /api/login` answered 401.
    #[error("wrong username or password")]
    InvalidCredentials,

    #[error("request failed with status code {status}")]
    Http { status: u16, body: String },

    #[error("network error: {0}")]
    Network(String),

    #[error("parse error: {0}")]
    Parse(String),

    #[error("serialization error: {0}")]
    Serialization(String),

    /// The login response carried a token from which no user id could be read.
    #[error("malformed session: {0}")]
    MalformedSession(String),
}

#[derive(Deserialize)]
struct ErrorBody {
    error: String,
}

impl ApiError {
    /// The `error` field of a JSON error body, when the server sent one.
    pub fn server_message(&self) -> Option<String> {
        match self {
            Self::Http { body, .. } => serde_json::from_str::<ErrorBody>(body)
                .ok()
                .map(|parsed| parsed.error)
                .filter(|message| !message.is_empty()),
            _ => None,
        }
    }

    /// Text shown in the notification banner when `action` failed.
    ///
    /// Invalid credentials always yield the fixed login message so that
    /// nothing about the account leaks.
    pub fn user_message(&self, action: &str) -> String {
        match self {
            Self::InvalidCredentials => self.to_string(),
            _ => format!(
                "Failed to {}: {}",
                action,
                self.server_message().unwrap_or_else(|| self.to_string())
            ),
        }
    }

    pub fn is_invalid_credentials(&self) -> bool {
        matches!(self, Self::InvalidCredentials)
    }
}

impl From<gloo_net::Error> for ApiError {
    fn from(error: gloo_net::Error) -> Self {
        match error {
            gloo_net::Error::SerdeError(e) => Self::Parse(e.to_string()),
            other => Self::Network(other.to_string()),
        }
    }
}

/// Problems decoding a persisted or freshly issued session.
#[derive(Debug, Error)]
pub enum SessionError {
    #[error("stored session is not a valid record: {0}")]
    Record(String),

    #[error("token has no payload segment")]
    MissingPayload,

    #[error("token payload is not valid base64url: {0}")]
    Encoding(#[from] base64::DecodeError),

    #[error("token payload is not valid JSON: {0}")]
    Payload(#[from] serde_json::Error),

    #[error("token payload carries no user id")]
    MissingId,
}

impl From<SessionError> for ApiError {
    fn from(error: SessionError) -> Self {
        Self::MalformedSession(error.to_string())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StorageError {
    #[error("local storage error: {0}")]
    Backend(String),
}

impl From<gloo_storage::errors::StorageError> for StorageError {
    fn from(error: gloo_storage::errors::StorageError) -> Self {
        Self::Backend(error.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn http(status: u16, body: &str) -> ApiError {
        ApiError::Http {
            status,
            body: body.to_string(),
        }
    }

    #[test]
    fn invalid_credentials_message_is_fixed() {
        assert_eq!(
            ApiError::InvalidCredentials.user_message("log in"),
            "wrong username or password"
        );
        assert!(ApiError::InvalidCredentials.is_invalid_credentials());
    }

    #[test]
    fn server_error_text_is_preferred() {
        let error = http(400, r#"{"error":"title or url missing"}"#);
        assert_eq!(error.server_message().as_deref(), Some("title or url missing"));
        assert_eq!(
            error.user_message("create blog"),
            "Failed to create blog: title or url missing"
        );
    }

    #[test]
    fn non_json_body_falls_back_to_status() {
        let error = http(500, "<html>boom</html>");
        assert_eq!(error.server_message(), None);
        assert_eq!(
            error.user_message("update blog"),
            "Failed to update blog: request failed with status code 500"
        );
    }

    #[test]
    fn network_errors_are_described() {
        let error = ApiError::Network("connection refused".to_string());
        assert_eq!(
            error.user_message("remove blog"),
            "Failed to remove blog: network error: connection refused"
        );
    }

    #[test]
    fn session_errors_become_malformed_session() {
        let error: ApiError = SessionError::MissingId.into();
        assert_eq!(
            error,
            ApiError::MalformedSession("token payload carries no user id".to_string())
        );
    }
}
