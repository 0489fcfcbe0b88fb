//! Credential store port
//!
//! Defines the interface for persisting the issued credential.

use async_trait::async_trait;
use showroom_domain::Credential;

use crate::CredentialError;

/// Storage for the single credential shared by every authorized request.
///
/// Only login writes it and only logout clears it; the transport reads it
/// for every authorized call.
#[async_trait]
pub trait CredentialStore: Send + Sync {
    /// Returns the stored credential, or `None` if there is none.
    async fn get(&self) -> Result<Option<Credential>, CredentialError>;

    /// Stores a credential, replacing any previous one.
    ///
    /// # Errors
    /// Returns an error if the credential cannot be persisted.
    async fn set(&self, credential: Credential) -> Result<(), CredentialError>;

    /// Removes the stored credential.
    ///
    /// # Errors
    /// Returns an error if the backing storage cannot be updated.
    async fn clear(&self) -> Result<(), CredentialError>;
}
