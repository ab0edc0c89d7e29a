//! Read-merge-write persistence for subscription keys.

use crate::api::Service;
use crate::error::ConfigError;
use serde_json::{Map, Value};
use std::path::Path;

/// Store `key` for `service` in the config file at `path`.
///
/// The existing file is read as a raw JSON object so that the base URL, the
/// other service's key, and any fields this version does not know about
/// survive the rewrite. A missing file starts from an empty object.
pub fn save_api_key(path: &Path, service: Service, key: &str) -> Result<(), ConfigError> {
    if key.trim().is_empty() {
        return Err(ConfigError::ValidationError(
            "API key must not be empty".into(),
        ));
    }

    let mut root = if path.exists() {
        let content = std::fs::read_to_string(path).map_err(ConfigError::ReadError)?;
        match serde_json::from_str::<Value>(&content)? {
            Value::Object(map) => map,
            _ => {
                return Err(ConfigError::ValidationError(format!(
                    "{} does not contain a JSON object; refusing to overwrite it",
                    path.display()
                )))
            }
        }
    } else {
        Map::new()
    };

    let apikeys = root
        .entry("apikeys")
        .or_insert_with(|| Value::Object(Map::new()));
    let Value::Object(apikeys) = apikeys else {
        return Err(ConfigError::ValidationError(
            "apikeys must be a JSON object".into(),
        ));
    };
    apikeys.insert(service.name().to_string(), Value::String(key.to_string()));

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent).map_err(ConfigError::WriteError)?;
    }
    let mut content = serde_json::to_string_pretty(&Value::Object(root))?;
    content.push('\n');
    std::fs::write(path, content).map_err(ConfigError::WriteError)?;

    tracing::info!("Saved {} API key to {}", service.name(), path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;

    #[test]
    fn creates_file_when_missing() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("oxford.json");

        save_api_key(&path, Service::Face, "face-key").unwrap();

        let config = Config::load_from(&path).unwrap();
        assert_eq!(config.api_key(Service::Face).unwrap(), "face-key");
    }

    #[test]
    fn preserves_other_keys_and_url() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("oxford.json");
        std::fs::write(
            &path,
            r#"{"apikeys": {"face": "old-face", "vision": "vision-key"},
                "oxford_url": "http://localhost:9000/",
                "extra": {"kept": true}}"#,
        )
        .unwrap();

        save_api_key(&path, Service::Face, "new-face").unwrap();

        let raw: Value = serde_json::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();
        assert_eq!(raw["apikeys"]["face"], "new-face");
        assert_eq!(raw["apikeys"]["vision"], "vision-key");
        assert_eq!(raw["oxford_url"], "http://localhost:9000/");
        assert_eq!(raw["extra"]["kept"], true);
    }

    #[test]
    fn refuses_to_clobber_non_object() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("oxford.json");
        std::fs::write(&path, "[1, 2, 3]").unwrap();

        assert!(save_api_key(&path, Service::Vision, "k").is_err());
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "[1, 2, 3]");
    }

    #[test]
    fn rejects_empty_key() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("oxford.json");
        assert!(save_api_key(&path, Service::Face, "").is_err());
        assert!(!path.exists());
    }
}
