//! Port definitions (interfaces)
//!
//! Ports define the boundaries between the stores and external systems.
//! Each port is a trait implemented by adapters in the infrastructure layer.

mod credential_store;
mod transport;

pub use credential_store::CredentialStore;
pub use transport::{HttpMethod, Transport};
