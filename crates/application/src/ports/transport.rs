//! Transport port

use std::fmt;
use std::future::Future;

use serde_json::Value;

use crate::HttpResult;

/// HTTP methods used by the catalog service.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HttpMethod {
    /// GET
    Get,
    /// POST
    Post,
    /// PUT
    Put,
    /// DELETE
    Delete,
}

impl HttpMethod {
    /// Uppercase method name.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Get => "GET",
            Self::Post => "POST",
            Self::Put => "PUT",
            Self::Delete => "DELETE",
        }
    }
}

impl fmt::Display for HttpMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Port for talking to the catalog service.
///
/// Implementations resolve `path` against the configured API origin, send
/// `body` as JSON, and attach `Authorization: token <credential>` when
/// `authorized` is set and a credential is stored. They hold no state other
/// than the credential they read.
pub trait Transport: Send + Sync {
    /// Sends one request and returns the decoded response body.
    ///
    /// An empty response body decodes to `Value::Null`.
    ///
    /// # Errors
    ///
    /// Returns `HttpError::Status` for non-2xx responses and another
    /// `HttpError` variant when no usable response was received.
    fn request(
        &self,
        method: HttpMethod,
        path: &str,
        body: Option<Value>,
        authorized: bool,
    ) -> impl Future<Output = HttpResult<Value>> + Send;
}
