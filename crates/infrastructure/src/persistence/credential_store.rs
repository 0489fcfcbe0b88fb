//! Credential store implementations.
//!
//! `FileCredentialStore` keeps credentials in the platform config directory:
//! - Linux: ~/.config/showroom/credentials.json
//! - macOS: ~/Library/Application Support/showroom/credentials.json
//! - Windows: %APPDATA%/showroom/credentials.json

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use async_trait::async_trait;
use showroom_application::{CredentialError, CredentialStore};
use showroom_domain::Credential;
use tokio::sync::{Mutex, RwLock};
use tracing::debug;

use super::json_file::{JsonFile, JsonFileError};

/// Credential store that lives only as long as the process.
#[derive(Debug, Default)]
pub struct MemoryCredentialStore {
    value: RwLock<Option<Credential>>,
}

impl MemoryCredentialStore {
    /// Creates an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl CredentialStore for MemoryCredentialStore {
    async fn get(&self) -> Result<Option<Credential>, CredentialError> {
        Ok(self.value.read().await.clone())
    }

    async fn set(&self, credential: Credential) -> Result<(), CredentialError> {
        *self.value.write().await = Some(credential);
        Ok(())
    }

    async fn clear(&self) -> Result<(), CredentialError> {
        *self.value.write().await = None;
        Ok(())
    }
}

/// Credential store backed by a JSON file.
///
/// The file maps credential keys to tokens so several configurations can
/// share it:
/// ```json
/// {
///   "token": "9944b09199c62bcf9418ad846dd0e4bbdfc6ee4b"
/// }
/// ```
/// A missing file reads as an empty store. Reads and read-modify-write
/// updates through one store are serialized.
#[derive(Debug)]
pub struct FileCredentialStore {
    file: JsonFile,
    key: String,
    lock: Mutex<()>,
}

impl FileCredentialStore {
    /// Creates a store reading and writing `path`, under `key`.
    pub fn new(path: impl Into<PathBuf>, key: impl Into<String>) -> Self {
        Self {
            file: JsonFile::new(path),
            key: key.into(),
            lock: Mutex::new(()),
        }
    }

    /// Creates a store at the default location in the config directory.
    ///
    /// # Errors
    ///
    /// Returns `CredentialError::NoConfigDir` if the platform has no config
    /// directory.
    pub fn in_config_dir(key: impl Into<String>) -> Result<Self, CredentialError> {
        let path = Self::default_path().ok_or(CredentialError::NoConfigDir)?;
        Ok(Self::new(path, key))
    }

    /// Default location of the credentials file.
    #[must_use]
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("showroom").join("credentials.json"))
    }

    /// The file this store reads and writes.
    #[must_use]
    pub fn path(&self) -> &Path {
        self.file.path()
    }

    async fn read_all(&self) -> Result<BTreeMap<String, String>, CredentialError> {
        Ok(self
            .file
            .read()
            .await
            .map_err(credential_error)?
            .unwrap_or_default())
    }

    async fn write_all(&self, entries: &BTreeMap<String, String>) -> Result<(), CredentialError> {
        self.file.write(entries).await.map_err(credential_error)
    }
}

fn credential_error(error: JsonFileError) -> CredentialError {
    match error {
        JsonFileError::Io { source, .. } => CredentialError::Io(source),
        other => CredentialError::Serialization(other.to_string()),
    }
}

#[async_trait]
impl CredentialStore for FileCredentialStore {
    async fn get(&self) -> Result<Option<Credential>, CredentialError> {
        let _guard = self.lock.lock().await;
        let entries = self.read_all().await?;
        Ok(entries.get(&self.key).map(Credential::new))
    }

    async fn set(&self, credential: Credential) -> Result<(), CredentialError> {
        let _guard = self.lock.lock().await;
        let mut entries = self.read_all().await?;
        entries.insert(self.key.clone(), credential.as_str().to_string());
        self.write_all(&entries).await?;
        debug!(path = %self.path().display(), key = %self.key, "credential stored");
        Ok(())
    }

    async fn clear(&self) -> Result<(), CredentialError> {
        let _guard = self.lock.lock().await;
        let mut entries = self.read_all().await?;
        if entries.remove(&self.key).is_none() {
            return Ok(());
        }
        self.write_all(&entries).await?;
        debug!(path = %self.path().display(), key = %self.key, "credential cleared");
        Ok(())
    }
}
