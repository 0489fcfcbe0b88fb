//! Client settings persistence.
//!
//! Stores client settings in the platform-specific config directory:
//! - Linux/macOS: ~/.config/showroom/settings.json
//! - Windows: %APPDATA%/showroom/settings.json
//!
//! `SHOWROOM_API_URL` and `SHOWROOM_REQUEST_TIMEOUT_MS` override the file.

use std::path::{Path, PathBuf};

use showroom_domain::{ClientSettings, DomainError};
use tracing::{debug, info};

use super::json_file::{JsonFile, JsonFileError};

/// Environment variable overriding `api_url`.
pub const API_URL_ENV: &str = "SHOWROOM_API_URL";

/// Environment variable overriding `request_timeout_ms`.
pub const REQUEST_TIMEOUT_ENV: &str = "SHOWROOM_REQUEST_TIMEOUT_MS";

/// Error type for settings operations.
#[derive(Debug, thiserror::Error)]
pub enum SettingsError {
    /// The settings file could not be read or written.
    #[error(transparent)]
    File(#[from] JsonFileError),

    /// An environment override could not be parsed.
    #[error("Invalid value for {name}: {value}")]
    InvalidOverride {
        /// Variable name.
        name: &'static str,
        /// Raw value.
        value: String,
    },

    /// The resulting settings are unusable.
    #[error("Invalid settings: {0}")]
    Invalid(#[from] DomainError),

    /// Could not determine config directory.
    #[error("Could not determine config directory")]
    NoConfigDir,
}

/// Repository for client settings.
#[derive(Debug, Clone, Default)]
pub struct SettingsRepository {
    file: Option<JsonFile>,
}

impl SettingsRepository {
    /// Creates a repository using the default config location.
    #[must_use]
    pub fn new() -> Self {
        Self {
            file: Self::default_path().map(JsonFile::new),
        }
    }

    /// Creates a repository reading and writing `path`.
    pub fn at(path: impl Into<PathBuf>) -> Self {
        Self {
            file: Some(JsonFile::new(path)),
        }
    }

    /// Default location of the settings file.
    #[must_use]
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("showroom").join("settings.json"))
    }

    /// The settings file, if a location is known.
    #[must_use]
    pub fn path(&self) -> Option<&Path> {
        self.file.as_ref().map(JsonFile::path)
    }

    /// Loads settings from disk.
    ///
    /// Returns default settings if the file doesn't exist.
    ///
    /// # Errors
    ///
    /// Returns an error if the file exists but cannot be read or parsed.
    pub async fn load(&self) -> Result<ClientSettings, SettingsError> {
        let Some(file) = &self.file else {
            return Ok(ClientSettings::default());
        };

        match file.read().await? {
            Some(settings) => {
                debug!(path = %file.path().display(), "settings loaded");
                Ok(settings)
            }
            None => {
                debug!(path = %file.path().display(), "no settings file, using defaults");
                Ok(ClientSettings::default())
            }
        }
    }

    /// Loads settings, writing the defaults to disk first if no settings
    /// file exists yet.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read, parsed or created.
    pub async fn load_or_init(&self) -> Result<ClientSettings, SettingsError> {
        let Some(file) = &self.file else {
            return Ok(ClientSettings::default());
        };

        if let Some(settings) = file.read().await? {
            return Ok(settings);
        }

        let settings = ClientSettings::default();
        self.save(&settings).await?;
        Ok(settings)
    }

    /// Loads settings (initializing the file on first run), applies
    /// environment overrides and validates the result.
    ///
    /// Overrides are never written back.
    ///
    /// # Errors
    ///
    /// Returns an error if loading fails, an override is malformed, or the
    /// final settings are invalid.
    pub async fn load_effective(&self) -> Result<ClientSettings, SettingsError> {
        let settings = self.load_or_init().await?;
        let settings = apply_overrides(settings, |name| std::env::var(name).ok())?;
        settings.validate()?;
        Ok(settings)
    }

    /// Saves settings to disk.
    ///
    /// # Errors
    ///
    /// Returns an error if no location is known or the file cannot be
    /// written.
    pub async fn save(&self, settings: &ClientSettings) -> Result<(), SettingsError> {
        let Some(file) = &self.file else {
            return Err(SettingsError::NoConfigDir);
        };

        file.write(settings).await?;
        info!(path = %file.path().display(), "settings saved");
        Ok(())
    }
}

/// Applies environment overrides to `settings`.
///
/// `lookup` returns the value of a variable, or `None` if it is unset.
/// Empty values are treated as unset.
///
/// # Errors
///
/// Returns `SettingsError::InvalidOverride` if the timeout is not a number.
pub fn apply_overrides(
    mut settings: ClientSettings,
    lookup: impl Fn(&str) -> Option<String>,
) -> Result<ClientSettings, SettingsError> {
    let lookup = |name: &str| lookup(name).filter(|v| !v.trim().is_empty());

    if let Some(api_url) = lookup(API_URL_ENV) {
        settings.api_url = api_url;
    }

    if let Some(raw) = lookup(REQUEST_TIMEOUT_ENV) {
        let timeout_ms = raw
            .trim()
            .parse::<u64>()
            .map_err(|_| SettingsError::InvalidOverride {
                name: REQUEST_TIMEOUT_ENV,
                value: raw.clone(),
            })?;
        settings.request_timeout_ms = Some(timeout_ms);
    }

    Ok(settings)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::collections::HashMap;
    use tempfile::TempDir;

    fn env(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect();
        move |name| vars.get(name).cloned()
    }

    #[test]
    fn test_default_path_ends_with_app_dir() {
        if let Some(path) = SettingsRepository::default_path() {
            assert!(path.ends_with("showroom/settings.json"));
        }
    }

    #[tokio::test]
    async fn test_load_returns_default_when_no_file() {
        let dir = TempDir::new().unwrap();
        let repo = SettingsRepository::at(dir.path().join("settings.json"));

        assert_eq!(repo.load().await.unwrap(), ClientSettings::default());
    }

    #[tokio::test]
    async fn test_save_then_load() {
        let dir = TempDir::new().unwrap();
        let repo = SettingsRepository::at(dir.path().join("nested").join("settings.json"));
        let settings = ClientSettings {
            api_url: "https://cars.example.com/".to_string(),
            credential_key: "staging".to_string(),
            request_timeout_ms: Some(5_000),
        };

        repo.save(&settings).await.unwrap();

        assert_eq!(repo.load().await.unwrap(), settings);
    }

    #[tokio::test]
    async fn test_load_or_init_writes_defaults_once() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("showroom").join("settings.json");
        let repo = SettingsRepository::at(&path);

        assert_eq!(repo.load_or_init().await.unwrap(), ClientSettings::default());
        assert!(path.exists());

        std::fs::write(&path, r#"{"api_url":"http://10.0.0.5:8000/"}"#).unwrap();
        let settings = repo.load_or_init().await.unwrap();

        assert_eq!(settings.api_url, "http://10.0.0.5:8000/");
        assert_eq!(
            std::fs::read_to_string(&path).unwrap(),
            r#"{"api_url":"http://10.0.0.5:8000/"}"#
        );
    }

    #[tokio::test]
    async fn test_load_rejects_malformed_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("settings.json");
        std::fs::write(&path, "{ api_url: ").unwrap();

        let result = SettingsRepository::at(path).load().await;

        assert!(matches!(
            result,
            Err(SettingsError::File(JsonFileError::Malformed { .. }))
        ));
    }

    #[test]
    fn test_overrides_replace_file_values() {
        let settings = apply_overrides(
            ClientSettings::default(),
            env(&[
                (API_URL_ENV, "http://10.0.0.5:9000/"),
                (REQUEST_TIMEOUT_ENV, "2500"),
            ]),
        )
        .unwrap();

        assert_eq!(settings.api_url, "http://10.0.0.5:9000/");
        assert_eq!(settings.request_timeout_ms, Some(2_500));
        assert_eq!(settings.credential_key, "token");
    }

    #[test]
    fn test_empty_override_is_ignored() {
        let settings =
            apply_overrides(ClientSettings::default(), env(&[(API_URL_ENV, "  ")])).unwrap();
        assert_eq!(settings.api_url, "http://localhost:8000/");
    }

    #[test]
    fn test_malformed_timeout_override() {
        let result = apply_overrides(
            ClientSettings::default(),
            env(&[(REQUEST_TIMEOUT_ENV, "soon")]),
        );
        assert!(matches!(
            result,
            Err(SettingsError::InvalidOverride { name: REQUEST_TIMEOUT_ENV, .. })
        ));
    }
}
