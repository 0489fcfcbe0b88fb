//! Credential, profile and authentication failure types

use std::fmt;

use serde::{Deserialize, Serialize};

/// Opaque token issued by the auth endpoint.
///
/// The value is never printed by `Debug` so it does not leak into logs.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Credential(String);

impl Credential {
    /// Wraps a raw token value.
    pub fn new(token: impl Into<String>) -> Self {
        Self(token.into())
    }

    /// Returns the raw token value.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Formats the value sent in the `Authorization` header.
    #[must_use]
    pub fn authorization_value(&self) -> String {
        format!("token {}", self.0)
    }
}

impl fmt::Debug for Credential {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Credential").field(&"<redacted>").finish()
    }
}

/// Body posted to the login and register endpoints.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AccountCredentials {
    /// Account name.
    pub username: String,
    /// Plain-text password, only ever sent over the wire.
    pub password: String,
}

impl AccountCredentials {
    /// Creates a credentials payload.
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
        }
    }
}

/// Successful login response.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct TokenResponse {
    /// The issued token.
    pub token: String,
}

impl From<TokenResponse> for Credential {
    fn from(response: TokenResponse) -> Self {
        Self(response.token)
    }
}

/// The authenticated user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct Profile {
    /// Server-assigned user id, `0` until a profile is fetched.
    pub id: i64,
    /// Display name.
    pub username: String,
}

/// Last authentication failure.
///
/// Every field is empty until the first rejection. A later rejection
/// overwrites the whole record; success leaves it untouched.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct AuthError {
    /// Failure category.
    pub name: String,
    /// Human-readable description.
    pub message: String,
    /// HTTP status code, or a transport code such as `ERR_NETWORK`.
    pub code: String,
    /// Diagnostic trace; empty when none is available.
    pub stack: String,
}

impl AuthError {
    /// Returns true if no failure has been recorded.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.name.is_empty() && self.message.is_empty() && self.code.is_empty()
    }
}

/// Snapshot of the authentication store.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AuthState {
    /// Current profile.
    pub profile: Profile,
    /// Last recorded failure.
    pub error: AuthError,
}
