//! `save-api-key` for both service families.

use dialoguer::theme::ColorfulTheme;
use dialoguer::Password;
use oxford_core::Service;
use std::path::Path;

/// Store a subscription key, prompting for it when not given.
pub fn save(config_path: &Path, service: Service, key: Option<String>) -> anyhow::Result<()> {
    let key = match key {
        Some(key) => key,
        None => Password::with_theme(&ColorfulTheme::default())
            .with_prompt(format!("{service} API key"))
            .interact()?,
    };

    oxford_core::config::save_api_key(config_path, service, key.trim())?;
    println!("Saved {service} API key to {}", config_path.display());
    Ok(())
}
