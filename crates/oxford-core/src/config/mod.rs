//! Configuration management for the Oxford client.
//!
//! Configuration lives in a single JSON object at `~/.projectoxford.json`:
//!
//! ```json
//! {
//!   "apikeys": { "face": "...", "vision": "..." },
//!   "oxford_url": "https://api.projectoxford.ai/"
//! }
//! ```
//!
//! It is loaded once at startup into a [`Config`] value that is passed to
//! whatever needs it. The only writers are the `save-api-key` commands, which
//! go through [`save_api_key`].

mod store;
mod types;
mod validate;

pub use store::save_api_key;
pub use types::*;

use crate::api::Service;
use crate::error::ConfigError;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

/// File name of the config file inside the home directory.
pub const CONFIG_FILE_NAME: &str = ".projectoxford.json";

/// Root configuration structure.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Subscription keys by service name ("face", "vision")
    pub apikeys: BTreeMap<String, String>,

    /// Base URL the service version paths are appended to
    pub oxford_url: String,

    /// Logging settings
    pub logging: LoggingConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            apikeys: BTreeMap::new(),
            oxford_url: DEFAULT_OXFORD_URL.to_string(),
            logging: LoggingConfig::default(),
        }
    }
}

impl Config {
    /// Load configuration from a specific file path.
    ///
    /// A missing file is an error rather than an empty default, because no
    /// remote operation can run without a key.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            return Err(ConfigError::Missing(path.to_path_buf()));
        }
        let content = std::fs::read_to_string(path).map_err(ConfigError::ReadError)?;
        let config: Config = serde_json::from_str(&content)?;
        config.validate()?;
        tracing::debug!("Loaded config from {}", path.display());
        Ok(config)
    }

    /// Get the default config file path: `~/.projectoxford.json`.
    pub fn default_path() -> PathBuf {
        directories::BaseDirs::new()
            .map(|dirs| dirs.home_dir().join(CONFIG_FILE_NAME))
            .unwrap_or_else(|| expand_path(&format!("~/{CONFIG_FILE_NAME}")))
    }

    /// Resolve a user-supplied config path, falling back to the default.
    pub fn resolve_path(path: Option<&str>) -> PathBuf {
        match path {
            Some(path) => expand_path(path),
            None => Self::default_path(),
        }
    }

    /// Apply command-line and environment overrides on top of the file.
    pub fn apply_overrides(&mut self, overrides: Overrides) -> Result<(), ConfigError> {
        if let Some(url) = overrides.oxford_url {
            self.oxford_url = url;
        }
        if let Some(key) = overrides.face_key {
            self.set_api_key(Service::Face, key);
        }
        if let Some(key) = overrides.vision_key {
            self.set_api_key(Service::Vision, key);
        }
        self.validate()
    }

    /// Subscription key for a service.
    pub fn api_key(&self, service: Service) -> Result<&str, ConfigError> {
        self.apikeys
            .get(service.name())
            .map(String::as_str)
            .filter(|key| !key.trim().is_empty())
            .ok_or_else(|| ConfigError::MissingApiKey(service.name().to_string()))
    }

    /// Replace the in-memory key for a service. Does not touch the file.
    pub fn set_api_key(&mut self, service: Service, key: impl Into<String>) {
        self.apikeys.insert(service.name().to_string(), key.into());
    }

    /// Serialize the config as pretty JSON with every key masked.
    pub fn to_masked_json(&self) -> Result<String, ConfigError> {
        let mut masked = self.clone();
        for key in masked.apikeys.values_mut() {
            *key = mask_key(key);
        }
        Ok(serde_json::to_string_pretty(&masked)?)
    }
}

/// Expand `~` and return an owned path.
pub fn expand_path(path: &str) -> PathBuf {
    PathBuf::from(shellexpand::tilde(path).into_owned())
}

/// Show only the last four characters of a key.
fn mask_key(key: &str) -> String {
    let visible: String = key
        .chars()
        .rev()
        .take(4)
        .collect::<Vec<_>>()
        .into_iter()
        .rev()
        .collect();
    if key.chars().count() <= 4 {
        "*".repeat(key.chars().count())
    } else {
        format!("****{visible}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn write_config(dir: &tempfile::TempDir, content: &str) -> PathBuf {
        let path = dir.path().join("oxford.json");
        std::fs::write(&path, content).unwrap();
        path
    }

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.oxford_url, DEFAULT_OXFORD_URL);
        assert!(config.apikeys.is_empty());
        assert_eq!(config.logging.level, "warn");
    }

    #[test]
    fn test_load_missing_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("absent.json");
        let err = Config::load_from(&path).unwrap_err();
        assert!(matches!(err, ConfigError::Missing(p) if p == path));
    }

    #[test]
    fn test_load_malformed_file_is_a_parse_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_config(&dir, "{ not json");
        assert!(matches!(
            Config::load_from(&path).unwrap_err(),
            ConfigError::ParseError(_)
        ));
    }

    #[test]
    fn test_load_fills_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_config(&dir, r#"{"apikeys": {"face": "abc123"}}"#);
        let config = Config::load_from(&path).unwrap();
        assert_eq!(config.api_key(Service::Face).unwrap(), "abc123");
        assert_eq!(config.oxford_url, DEFAULT_OXFORD_URL);
        assert!(matches!(
            config.api_key(Service::Vision),
            Err(ConfigError::MissingApiKey(name)) if name == "vision"
        ));
    }

    #[test]
    fn test_blank_key_only_affects_its_service() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_config(&dir, r#"{"apikeys": {"face": "  ", "vision": "v-key"}}"#);
        let config = Config::load_from(&path).unwrap();
        assert_eq!(config.api_key(Service::Vision).unwrap(), "v-key");
        assert!(matches!(
            config.api_key(Service::Face),
            Err(ConfigError::MissingApiKey(name)) if name == "face"
        ));
    }

    #[test]
    fn test_overrides_take_precedence() {
        let mut config = Config::default();
        config.set_api_key(Service::Face, "from-file");
        config
            .apply_overrides(Overrides {
                oxford_url: Some("http://localhost:8080/".to_string()),
                face_key: Some("from-env".to_string()),
                vision_key: None,
            })
            .unwrap();
        assert_eq!(config.oxford_url, "http://localhost:8080/");
        assert_eq!(config.api_key(Service::Face).unwrap(), "from-env");
    }

    #[test]
    fn test_overrides_are_validated() {
        let mut config = Config::default();
        let result = config.apply_overrides(Overrides {
            oxford_url: Some("not a url".to_string()),
            ..Default::default()
        });
        assert!(matches!(result, Err(ConfigError::ValidationError(_))));
    }

    #[test]
    fn test_resolve_path_expands_tilde() {
        let path = Config::resolve_path(Some("~/custom.json"));
        assert!(!path.to_string_lossy().starts_with('~'));
        assert!(path.ends_with("custom.json"));
    }

    #[test]
    fn test_masked_json_hides_keys() {
        let mut config = Config::default();
        config.set_api_key(Service::Vision, "0123456789abcdef");
        let json = config.to_masked_json().unwrap();
        assert!(json.contains("****cdef"));
        assert!(!json.contains("0123456789"));
    }
}
