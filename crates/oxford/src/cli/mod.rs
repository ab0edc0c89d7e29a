//! Command handlers.

pub mod config;
pub mod face;
mod keys;
pub mod person;
pub mod personface;
pub mod persongroup;
pub mod vision;

use oxford_core::config::Overrides;
use oxford_core::{Config, ConfigError, Oxford};
use serde_json::Value;
use std::path::{Path, PathBuf};

/// Startup state shared by every command: where the config lives, what
/// loading it produced, and the global URL override.
pub struct Session {
    config_path: PathBuf,
    config: Result<Config, ConfigError>,
    oxford_url: Option<String>,
}

impl Session {
    pub fn new(
        config_path: PathBuf,
        config: Result<Config, ConfigError>,
        oxford_url: Option<String>,
    ) -> Self {
        Self {
            config_path,
            config,
            oxford_url,
        }
    }

    pub fn config_path(&self) -> &Path {
        &self.config_path
    }

    /// The loaded config, or the reason it could not be loaded.
    pub fn into_config(self) -> Result<Config, ConfigError> {
        self.config
    }

    /// Build a client from the loaded config plus command-line overrides.
    ///
    /// Fails when the config file was missing or invalid: every remote
    /// operation needs it.
    pub fn connect(self, overrides: Overrides) -> anyhow::Result<Oxford> {
        let mut config = self.config?;
        config.apply_overrides(Overrides {
            oxford_url: self.oxford_url,
            ..overrides
        })?;
        Ok(Oxford::new(config)?)
    }
}

/// Print a JSON result to stdout (nothing for an empty body).
pub(crate) fn print_json(value: &Value) -> anyhow::Result<()> {
    oxford_core::output::write_json(std::io::stdout().lock(), value)?;
    Ok(())
}

/// Print a JSON result, or `message` when the service returned no body.
pub(crate) fn report(value: &Value, message: impl std::fmt::Display) -> anyhow::Result<()> {
    if value.is_null() {
        println!("{message}");
        Ok(())
    } else {
        print_json(value)
    }
}
