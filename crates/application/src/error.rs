//! Application error types

use showroom_domain::AuthError;
use thiserror::Error;

/// Failure of a request to the catalog service.
///
/// Non-2xx responses, connection failures and undecodable bodies are all
/// reported through this type; stores treat every variant the same way.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum HttpError {
    /// The service answered with a non-2xx status.
    #[error("{message}")]
    Status {
        /// HTTP status code.
        status_code: u16,
        /// Description of the failure.
        message: String,
    },

    /// The request never produced a response.
    #[error("network error: {0}")]
    Transport(String),

    /// The request exceeded the configured timeout.
    #[error("request timed out after {timeout_ms}ms")]
    Timeout {
        /// Configured timeout.
        timeout_ms: u64,
    },

    /// The response body was not the expected JSON.
    #[error("invalid response body: {0}")]
    Decode(String),

    /// The request could not be built.
    #[error("invalid request: {0}")]
    InvalidRequest(String),

    /// The credential could not be read or written.
    #[error("credential store error: {0}")]
    Credential(String),
}

impl HttpError {
    /// Creates a `Status` error with the standard message for the code.
    #[must_use]
    pub fn status(status_code: u16) -> Self {
        Self::Status {
            status_code,
            message: format!("Request failed with status code {status_code}"),
        }
    }

    /// The HTTP status code, if the service responded.
    #[must_use]
    pub const fn status_code(&self) -> Option<u16> {
        match self {
            Self::Status { status_code, .. } => Some(*status_code),
            _ => None,
        }
    }

    /// Short category name.
    #[must_use]
    pub const fn kind_name(&self) -> &'static str {
        match self {
            Self::Status { .. } => "HttpError",
            Self::Transport(_) => "NetworkError",
            Self::Timeout { .. } => "TimeoutError",
            Self::Decode(_) => "DecodeError",
            Self::InvalidRequest(_) => "RequestError",
            Self::Credential(_) => "CredentialError",
        }
    }

    /// Machine-readable code: the status code, or a transport code.
    #[must_use]
    pub fn code(&self) -> String {
        match self {
            Self::Status { status_code, .. } => status_code.to_string(),
            Self::Transport(_) => "ERR_NETWORK".to_string(),
            Self::Timeout { .. } => "ECONNABORTED".to_string(),
            Self::Decode(_) => "ERR_BAD_RESPONSE".to_string(),
            Self::InvalidRequest(_) => "ERR_BAD_REQUEST".to_string(),
            Self::Credential(_) => "ERR_CREDENTIAL".to_string(),
        }
    }
}

impl From<&HttpError> for AuthError {
    fn from(error: &HttpError) -> Self {
        Self {
            name: error.kind_name().to_string(),
            message: error.to_string(),
            code: error.code(),
            stack: String::new(),
        }
    }
}

impl From<CredentialError> for HttpError {
    fn from(error: CredentialError) -> Self {
        Self::Credential(error.to_string())
    }
}

/// Result type alias for service requests.
pub type HttpResult<T> = Result<T, HttpError>;

/// Errors that can occur while persisting the credential.
#[derive(Debug, Error)]
pub enum CredentialError {
    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization/deserialization error.
    #[error("Serialization error: {0}")]
    Serialization(String),

    /// Could not determine the config directory.
    #[error("Could not determine config directory")]
    NoConfigDir,
}
