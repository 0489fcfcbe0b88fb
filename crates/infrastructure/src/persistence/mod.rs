//! File-backed and in-memory persistence.

mod credential_store;
mod json_file;
mod settings_repository;

pub use credential_store::*;
pub use json_file::{JsonFile, JsonFileError};
pub use settings_repository::*;
