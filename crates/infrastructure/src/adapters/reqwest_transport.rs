//! Transport implementation using reqwest.
//!
//! This adapter implements the `Transport` port: it resolves API paths
//! against the configured origin, attaches the stored credential and maps
//! every failure onto `HttpError`.

use std::future::Future;
use std::sync::Arc;
use std::time::{Duration, Instant};

use reqwest::header::AUTHORIZATION;
use reqwest::{Client, Method};
use serde_json::Value;
use showroom_application::{CredentialStore, HttpError, HttpMethod, HttpResult, Transport};
use showroom_domain::ClientSettings;
use tracing::debug;
use url::Url;

/// HTTP transport for the catalog service.
///
/// Holds no state besides its configuration; the credential is read from
/// the [`CredentialStore`] on every authorized request, so a login or
/// logout takes effect on the next call.
pub struct ReqwestTransport {
    client: Client,
    base_url: Url,
    timeout_ms: Option<u64>,
    credentials: Arc<dyn CredentialStore>,
}

impl ReqwestTransport {
    /// Creates a transport for the origin and timeout in `settings`.
    ///
    /// # Errors
    ///
    /// Returns `HttpError::InvalidRequest` if the API URL is unusable and
    /// `HttpError::Transport` if the HTTP client cannot be built.
    pub fn new(
        settings: &ClientSettings,
        credentials: Arc<dyn CredentialStore>,
    ) -> HttpResult<Self> {
        let client = Client::builder()
            .user_agent(concat!("showroom/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| HttpError::Transport(e.to_string()))?;

        Self::with_client(client, settings, credentials)
    }

    /// Creates a transport around an existing reqwest client.
    ///
    /// # Errors
    ///
    /// Returns `HttpError::InvalidRequest` if the API URL is unusable.
    pub fn with_client(
        client: Client,
        settings: &ClientSettings,
        credentials: Arc<dyn CredentialStore>,
    ) -> HttpResult<Self> {
        let base_url = settings
            .base_url()
            .map_err(|e| HttpError::InvalidRequest(e.to_string()))?;

        Ok(Self {
            client,
            base_url,
            timeout_ms: settings.request_timeout_ms,
            credentials,
        })
    }

    /// The origin API paths are resolved against.
    #[must_use]
    pub const fn base_url(&self) -> &Url {
        &self.base_url
    }

    const fn to_reqwest_method(method: HttpMethod) -> Method {
        match method {
            HttpMethod::Get => Method::GET,
            HttpMethod::Post => Method::POST,
            HttpMethod::Put => Method::PUT,
            HttpMethod::Delete => Method::DELETE,
        }
    }

    fn resolve(&self, path: &str) -> HttpResult<Url> {
        self.base_url
            .join(path.trim_start_matches('/'))
            .map_err(|e| HttpError::InvalidRequest(format!("{e}: {path}")))
    }

    fn map_error(error: &reqwest::Error, timeout_ms: Option<u64>) -> HttpError {
        if error.is_timeout() {
            return HttpError::Timeout {
                timeout_ms: timeout_ms.unwrap_or_default(),
            };
        }

        if error.is_builder() {
            return HttpError::InvalidRequest(error.to_string());
        }

        HttpError::Transport(error.to_string())
    }

    fn decode(bytes: &[u8]) -> HttpResult<Value> {
        if bytes.iter().all(u8::is_ascii_whitespace) {
            return Ok(Value::Null);
        }
        serde_json::from_slice(bytes).map_err(|e| HttpError::Decode(e.to_string()))
    }
}

impl Transport for ReqwestTransport {
    fn request(
        &self,
        method: HttpMethod,
        path: &str,
        body: Option<Value>,
        authorized: bool,
    ) -> impl Future<Output = HttpResult<Value>> + Send {
        let path = path.to_string();

        async move {
            let url = self.resolve(&path)?;

            let mut builder = self.client.request(Self::to_reqwest_method(method), url);

            if let Some(timeout_ms) = self.timeout_ms {
                builder = builder.timeout(Duration::from_millis(timeout_ms));
            }

            if authorized && let Some(credential) = self.credentials.get().await? {
                builder = builder.header(AUTHORIZATION, credential.authorization_value());
            }

            if let Some(body) = &body {
                builder = builder.json(body);
            }

            let start = Instant::now();
            let response = builder
                .send()
                .await
                .map_err(|e| Self::map_error(&e, self.timeout_ms))?;

            let status = response.status();
            let bytes = response
                .bytes()
                .await
                .map_err(|e| Self::map_error(&e, self.timeout_ms))?;

            debug!(
                %method,
                path = %path,
                status = status.as_u16(),
                elapsed_ms = u64::try_from(start.elapsed().as_millis()).unwrap_or(u64::MAX),
                "request completed"
            );

            if !status.is_success() {
                return Err(HttpError::status(status.as_u16()));
            }

            Self::decode(&bytes)
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::MemoryCredentialStore;
    use serde_json::json;

    fn transport(api_url: &str) -> ReqwestTransport {
        ReqwestTransport::new(
            &ClientSettings::with_api_url(api_url),
            Arc::new(MemoryCredentialStore::new()),
        )
        .unwrap()
    }

    #[test]
    fn test_to_reqwest_method() {
        assert_eq!(
            ReqwestTransport::to_reqwest_method(HttpMethod::Get),
            Method::GET
        );
        assert_eq!(
            ReqwestTransport::to_reqwest_method(HttpMethod::Post),
            Method::POST
        );
        assert_eq!(
            ReqwestTransport::to_reqwest_method(HttpMethod::Put),
            Method::PUT
        );
        assert_eq!(
            ReqwestTransport::to_reqwest_method(HttpMethod::Delete),
            Method::DELETE
        );
    }

    #[test]
    fn test_paths_resolve_under_origin() {
        let transport = transport("http://localhost:8000/backend");
        assert_eq!(
            transport.resolve("api/brands/3/").unwrap().as_str(),
            "http://localhost:8000/backend/api/brands/3/"
        );
        assert_eq!(
            transport.resolve("/api/profile/").unwrap().as_str(),
            "http://localhost:8000/backend/api/profile/"
        );
    }

    #[test]
    fn test_invalid_origin_is_rejected() {
        let result = ReqwestTransport::new(
            &ClientSettings::with_api_url("not a url"),
            Arc::new(MemoryCredentialStore::new()),
        );
        assert!(matches!(result, Err(HttpError::InvalidRequest(_))));
    }

    #[test]
    fn test_empty_body_decodes_to_null() {
        assert_eq!(ReqwestTransport::decode(b"").unwrap(), Value::Null);
        assert_eq!(ReqwestTransport::decode(b" \n").unwrap(), Value::Null);
        assert_eq!(
            ReqwestTransport::decode(br#"{"token":"abc"}"#).unwrap(),
            json!({ "token": "abc" })
        );
        assert!(matches!(
            ReqwestTransport::decode(b"<html>"),
            Err(HttpError::Decode(_))
        ));
    }
}
