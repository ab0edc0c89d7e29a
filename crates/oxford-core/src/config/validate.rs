//! Configuration validation.

use crate::error::ConfigError;

use super::Config;

impl Config {
    /// Validate that the base URL is usable.
    ///
    /// Blank keys are not an error here; [`Config::api_key`] reports them as
    /// missing for their own service only.
    pub(crate) fn validate(&self) -> Result<(), ConfigError> {
        let url = reqwest::Url::parse(&self.oxford_url).map_err(|e| {
            ConfigError::ValidationError(format!("oxford_url {:?} is not a URL: {e}", self.oxford_url))
        })?;
        if !matches!(url.scheme(), "http" | "https") || url.cannot_be_a_base() {
            return Err(ConfigError::ValidationError(format!(
                "oxford_url must be an http(s) base URL, got {:?}",
                self.oxford_url
            )));
        }
        Ok(())
    }
}
