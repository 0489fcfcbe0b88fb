//! Showroom Application - Stores and ports
//!
//! This crate defines the application layer with:
//! - Port traits (`Transport`, `CredentialStore`) implemented by adapters
//! - `AuthStore`: login, registration and profile state
//! - `CatalogStore`: brands, segments and vehicles kept in sync with the
//!   service, including the delete cascade
//! - Application-level error handling

pub mod auth;
pub mod catalog;
pub mod error;
pub mod ports;

#[cfg(test)]
pub(crate) mod test_support;

pub use auth::{AuthCommand, AuthOutcome, AuthStore};
pub use catalog::{CatalogCommand, CatalogOutcome, CatalogStore};
pub use error::{CredentialError, HttpError, HttpResult};
pub use ports::{CredentialStore, HttpMethod, Transport};
