//! Client settings domain model
//!
//! Defines where the catalog service lives and how the client talks to it.

use serde::{Deserialize, Serialize};
use url::Url;

use crate::error::{DomainError, DomainResult};

/// Default origin of the catalog service.
pub const DEFAULT_API_URL: &str = "http://localhost:8000/";

/// Default key under which the credential is persisted.
pub const DEFAULT_CREDENTIAL_KEY: &str = "token";

/// Client settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClientSettings {
    /// Origin of the catalog service; API paths are resolved against it.
    pub api_url: String,

    /// Key the credential is stored under.
    pub credential_key: String,

    /// Per-request timeout in milliseconds. `None` waits indefinitely.
    pub request_timeout_ms: Option<u64>,
}

impl Default for ClientSettings {
    fn default() -> Self {
        Self {
            api_url: DEFAULT_API_URL.to_string(),
            credential_key: DEFAULT_CREDENTIAL_KEY.to_string(),
            request_timeout_ms: None,
        }
    }
}

impl ClientSettings {
    /// Creates settings pointing at the given origin.
    pub fn with_api_url(api_url: impl Into<String>) -> Self {
        Self {
            api_url: api_url.into(),
            ..Self::default()
        }
    }

    /// Parses `api_url` into a base URL that relative API paths join onto.
    ///
    /// A missing trailing slash is added so that `api/brands/` lands under
    /// the configured path instead of replacing its last segment.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidUrl` if the URL does not parse or is not
    /// `http`/`https`.
    pub fn base_url(&self) -> DomainResult<Url> {
        let raw = self.api_url.trim();
        let normalized = if raw.ends_with('/') {
            raw.to_string()
        } else {
            format!("{raw}/")
        };

        let url = Url::parse(&normalized)
            .map_err(|e| DomainError::InvalidUrl(format!("{e}: {raw}")))?;

        match url.scheme() {
            "http" | "https" => Ok(url),
            other => Err(DomainError::InvalidUrl(format!(
                "unsupported scheme {other}: {raw}"
            ))),
        }
    }

    /// Checks that every setting holds a usable value.
    ///
    /// # Errors
    ///
    /// Returns the first invalid setting found.
    pub fn validate(&self) -> DomainResult<()> {
        self.base_url()?;

        if self.credential_key.trim().is_empty() {
            return Err(DomainError::InvalidSetting {
                name: "credential_key".to_string(),
                reason: "must not be empty".to_string(),
            });
        }

        if self.request_timeout_ms == Some(0) {
            return Err(DomainError::InvalidSetting {
                name: "request_timeout_ms".to_string(),
                reason: "must be greater than zero".to_string(),
            });
        }

        Ok(())
    }
}
