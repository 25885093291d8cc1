//! Configuration module
//!
//! Handles loading and validating settings from YAML files and environment variables.

mod settings;

pub use settings::*;

use anyhow::Result;
use std::path::PathBuf;
use tracing::info;

/// Environment variable naming an explicit settings file
pub const SETTINGS_PATH_VAR: &str = "ES_AUTOCOMPLETE_SETTINGS_PATH";

/// Load settings from the first file found, falling back to defaults.
///
/// The lookup order is `$ES_AUTOCOMPLETE_SETTINGS_PATH`, `./autocomplete.yml`,
/// `./config/autocomplete.yml`, then `<user config dir>/es-autocomplete/autocomplete.yml`.
/// Environment overrides are applied last and the result is validated.
pub fn load() -> Result<Settings> {
    let mut settings = match find_settings_file() {
        Some(path) => {
            info!("Loading settings from: {}", path.display());
            Settings::from_file(&path)?
        }
        None => {
            info!("No settings file found, using defaults");
            Settings::default()
        }
    };

    settings.merge_env();
    settings.validate()?;
    Ok(settings)
}

fn find_settings_file() -> Option<PathBuf> {
    if let Ok(path) = std::env::var(SETTINGS_PATH_VAR) {
        let path = PathBuf::from(path);
        if path.exists() {
            return Some(path);
        }
    }

    let mut candidates = vec![
        PathBuf::from("autocomplete.yml"),
        PathBuf::from("config/autocomplete.yml"),
    ];
    if let Some(dir) = dirs::config_dir() {
        candidates.push(dir.join("es-autocomplete/autocomplete.yml"));
    }

    candidates.into_iter().find(|p| p.exists())
}
