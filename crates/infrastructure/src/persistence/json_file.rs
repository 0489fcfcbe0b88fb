//! JSON documents on disk.
//!
//! Settings and credentials are small hand-editable files: pretty-printed
//! with 2-space indentation and a trailing newline, replaced atomically so a
//! reader never observes a half-written document.

use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::ser::{PrettyFormatter, Serializer};
use tokio::fs;

/// Failure reading or writing a [`JsonFile`].
#[derive(Debug, thiserror::Error)]
pub enum JsonFileError {
    /// The file could not be read, written or renamed.
    #[error("cannot access {}: {source}", path.display())]
    Io {
        /// File involved.
        path: PathBuf,
        /// Underlying error.
        #[source]
        source: std::io::Error,
    },

    /// The file exists but does not hold the expected document.
    #[error("malformed {}: {source}", path.display())]
    Malformed {
        /// File involved.
        path: PathBuf,
        /// Parse error with line and column.
        #[source]
        source: serde_json::Error,
    },

    /// The value could not be encoded.
    #[error("cannot encode {}: {source}", path.display())]
    Encode {
        /// File involved.
        path: PathBuf,
        /// Encoder error.
        #[source]
        source: serde_json::Error,
    },
}

/// One JSON document at a fixed path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JsonFile {
    path: PathBuf,
}

impl JsonFile {
    /// Points at `path`; nothing is touched until read or written.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// The document's location.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Reads and decodes the document. A missing file is `Ok(None)`.
    ///
    /// # Errors
    ///
    /// Returns `Io` for unreadable files and `Malformed` for content that
    /// does not decode as `T`.
    pub async fn read<T: DeserializeOwned>(&self) -> Result<Option<T>, JsonFileError> {
        let content = match fs::read(&self.path).await {
            Ok(content) => content,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(self.io_error(e)),
        };

        serde_json::from_slice(&content)
            .map(Some)
            .map_err(|source| JsonFileError::Malformed {
                path: self.path.clone(),
                source,
            })
    }

    /// Encodes `value` and replaces the document, creating parent
    /// directories as needed.
    ///
    /// The content goes to a sibling temporary file first and is renamed
    /// over the target.
    ///
    /// # Errors
    ///
    /// Returns `Encode` if `value` cannot be serialized and `Io` if any
    /// filesystem step fails.
    pub async fn write<T: Serialize>(&self, value: &T) -> Result<(), JsonFileError> {
        let content = render(value).map_err(|source| JsonFileError::Encode {
            path: self.path.clone(),
            source,
        })?;

        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)
                .await
                .map_err(|e| self.io_error(e))?;
        }

        let staging = self.staging_path();
        fs::write(&staging, content)
            .await
            .map_err(|e| self.io_error(e))?;
        fs::rename(&staging, &self.path)
            .await
            .map_err(|e| self.io_error(e))
    }

    fn staging_path(&self) -> PathBuf {
        let mut name = self
            .path
            .file_name()
            .map(std::ffi::OsStr::to_os_string)
            .unwrap_or_default();
        name.push(".tmp");
        self.path.with_file_name(name)
    }

    fn io_error(&self, source: std::io::Error) -> JsonFileError {
        JsonFileError::Io {
            path: self.path.clone(),
            source,
        }
    }
}

fn render<T: Serialize>(value: &T) -> Result<Vec<u8>, serde_json::Error> {
    let mut buffer = Vec::new();
    let formatter = PrettyFormatter::with_indent(b"  ");
    let mut serializer = Serializer::with_formatter(&mut buffer, formatter);
    value.serialize(&mut serializer)?;
    buffer.push(b'\n');
    Ok(buffer)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use showroom_domain::ClientSettings;
    use std::collections::BTreeMap;
    use tempfile::TempDir;

    #[tokio::test]
    async fn test_missing_file_reads_as_none() {
        let dir = TempDir::new().unwrap();
        let file = JsonFile::new(dir.path().join("absent.json"));

        let value: Option<ClientSettings> = file.read().await.unwrap();

        assert!(value.is_none());
    }

    #[tokio::test]
    async fn test_write_layout_and_no_leftover_staging_file() {
        let dir = TempDir::new().unwrap();
        let file = JsonFile::new(dir.path().join("nested").join("settings.json"));

        file.write(&ClientSettings::default()).await.unwrap();

        assert_eq!(
            std::fs::read_to_string(file.path()).unwrap(),
            "{\n  \"api_url\": \"http://localhost:8000/\",\n  \"credential_key\": \"token\",\n  \"request_timeout_ms\": null\n}\n"
        );
        let names: Vec<_> = std::fs::read_dir(dir.path().join("nested"))
            .unwrap()
            .map(|entry| entry.unwrap().file_name().to_string_lossy().into_owned())
            .collect();
        assert_eq!(names, vec!["settings.json".to_string()]);
    }

    #[tokio::test]
    async fn test_map_keys_are_written_sorted() {
        let dir = TempDir::new().unwrap();
        let file = JsonFile::new(dir.path().join("credentials.json"));
        let entries = BTreeMap::from([("token", "b"), ("admin_token", "a")]);

        file.write(&entries).await.unwrap();

        assert_eq!(
            std::fs::read_to_string(file.path()).unwrap(),
            "{\n  \"admin_token\": \"a\",\n  \"token\": \"b\"\n}\n"
        );
    }

    #[tokio::test]
    async fn test_malformed_file_names_the_path() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("settings.json");
        std::fs::write(&path, "{not json").unwrap();

        let error = JsonFile::new(&path)
            .read::<ClientSettings>()
            .await
            .unwrap_err();

        assert!(matches!(error, JsonFileError::Malformed { .. }));
        assert!(error.to_string().contains("settings.json"));
    }
}
