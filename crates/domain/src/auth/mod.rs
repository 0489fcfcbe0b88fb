//! Authentication domain types

mod types;

pub use types::{AccountCredentials, AuthError, AuthState, Credential, Profile, TokenResponse};
