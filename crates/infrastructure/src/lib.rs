//! Showroom Infrastructure - Adapters and implementations
//!
//! This crate provides concrete implementations of the ports
//! defined in the application layer:
//! - `ReqwestTransport`: the `Transport` port over HTTP
//! - `MemoryCredentialStore` / `FileCredentialStore`: credential persistence
//! - `SettingsRepository`: client settings on disk plus environment overrides
//! - `JsonFile`: the atomically replaced JSON documents both of them use

pub mod adapters;
pub mod persistence;

pub use adapters::ReqwestTransport;
pub use persistence::{
    API_URL_ENV, FileCredentialStore, JsonFile, JsonFileError, MemoryCredentialStore,
    REQUEST_TIMEOUT_ENV, SettingsError, SettingsRepository, apply_overrides,
};
