//! Sub-configuration structs with their defaults.

use serde::{Deserialize, Serialize};

/// Base URL of the hosted Project Oxford REST APIs.
pub const DEFAULT_OXFORD_URL: &str = "https://api.projectoxford.ai/";

/// Logging settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Log level: error, warn, info, debug, trace
    pub level: String,

    /// Log format: pretty or json
    pub format: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "warn".to_string(),
            format: "pretty".to_string(),
        }
    }
}

/// Values supplied on the command line or through the environment that
/// take precedence over the file.
#[derive(Debug, Clone, Default)]
pub struct Overrides {
    /// Replacement base URL (`--oxford-url` / `OXFORD_URL`)
    pub oxford_url: Option<String>,

    /// Face service key (`OXFORD_FACE_APIKEY`)
    pub face_key: Option<String>,

    /// Vision service key (`OXFORD_VISION_APIKEY`)
    pub vision_key: Option<String>,
}
