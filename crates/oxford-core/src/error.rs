//! Error types for the Oxford API client.
//!
//! Every failure a command can hit maps onto one variant of [`OxfordError`].
//! The `Display` text of each variant is the single line shown to the user,
//! so variants carry enough context (paths, operation names) to stand alone.

use std::path::PathBuf;
use thiserror::Error;

/// Top-level error type for Oxford operations.
#[derive(Error, Debug)]
pub enum OxfordError {
    /// A local image argument could not be opened or read
    #[error("Cannot read image file {}: {source}", path.display())]
    FileAccess {
        path: PathBuf,
        source: std::io::Error,
    },

    /// Configuration is missing, malformed, or lacks a required key
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// The remote API answered with a non-success status.
    ///
    /// Displays the service's own `message` verbatim.
    #[error("{message}")]
    Service { status: u16, message: String },

    /// Connection, DNS, TLS or mid-body failure talking to the API
    #[error("Request failed: {0}")]
    Transport(reqwest::Error),

    /// The API reported success but the body could not be decoded
    #[error("Malformed response from {operation}: {message}")]
    MalformedResponse { operation: String, message: String },

    /// The call does not fit the operation descriptor
    #[error("Invalid request for {operation}: {message}")]
    InvalidRequest { operation: String, message: String },

    /// Writing a binary result to its destination failed
    #[error("Failed to write {}: {source}", path.display())]
    Output {
        path: PathBuf,
        source: std::io::Error,
    },
}

impl OxfordError {
    pub(crate) fn invalid_request(operation: &str, message: impl Into<String>) -> Self {
        Self::InvalidRequest {
            operation: operation.to_string(),
            message: message.into(),
        }
    }

    pub(crate) fn malformed(operation: &str, message: impl Into<String>) -> Self {
        Self::MalformedResponse {
            operation: operation.to_string(),
            message: message.into(),
        }
    }
}

/// Configuration-specific errors.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// No config file exists at the resolved path
    #[error(
        "Config file not found at {}. Run `oxford face save-api-key` or `oxford vision save-api-key` to create it.",
        .0.display()
    )]
    Missing(PathBuf),

    /// Failed to read the config file from disk
    #[error("Failed to read config file: {0}")]
    ReadError(#[source] std::io::Error),

    /// Failed to write the config file
    #[error("Failed to write config file: {0}")]
    WriteError(#[source] std::io::Error),

    /// The file is not valid JSON for the expected shape
    #[error("Failed to parse config: {0}")]
    ParseError(#[from] serde_json::Error),

    /// No key is stored or supplied for the service being called
    #[error("No API key configured for the {0} service. Set it with `oxford {0} save-api-key` or --apikey.")]
    MissingApiKey(String),

    /// Configuration values are invalid
    #[error("Invalid configuration: {0}")]
    ValidationError(String),
}

/// Convenience type alias for Oxford results.
pub type Result<T> = std::result::Result<T, OxfordError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn service_error_displays_message_verbatim() {
        let err = OxfordError::Service {
            status: 403,
            message: "invalid key".to_string(),
        };
        assert_eq!(err.to_string(), "invalid key");
    }

    #[test]
    fn config_errors_pass_through_unchanged() {
        let err: OxfordError = ConfigError::MissingApiKey("vision".to_string()).into();
        assert!(err.to_string().starts_with("No API key configured for the vision service"));
    }

    #[test]
    fn file_access_names_the_path() {
        let err = OxfordError::FileAccess {
            path: PathBuf::from("missing.jpg"),
            source: std::io::Error::from(std::io::ErrorKind::NotFound),
        };
        assert!(err.to_string().contains("missing.jpg"));
    }
}
