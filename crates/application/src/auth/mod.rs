//! Authentication store.
//!
//! This module provides:
//! - `AuthStore`: login, registration, profile fetch and logout
//! - `AuthCommand`/`AuthOutcome`: the store's operations as a tagged command

mod command;
mod store;

pub use command::{AuthCommand, AuthOutcome};
pub use store::AuthStore;
