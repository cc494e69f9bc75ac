//! Settings parser for `config.toml`
//!
//! The settings file is optional. A missing file means defaults; an
//! unreadable or malformed one is reported as [`Error::Config`] so the caller
//! can warn and carry on with defaults. The alias store is the strict one.

use serde::{Deserialize, Serialize};
use std::path::Path;
use vs_core::prelude::*;

pub const CONFIG_FILENAME: &str = "config.toml";

/// Top-level settings
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct Settings {
    #[serde(default)]
    pub editor: EditorSettings,
}

/// Editor launch settings
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct EditorSettings {
    /// Command that replaces the platform's default VS Code invocation.
    /// Paths are appended after it. Empty means "use the platform default".
    #[serde(default)]
    pub command: String,
}

impl EditorSettings {
    /// The configured override, if any
    pub fn command_override(&self) -> Option<&str> {
        let command = self.command.trim();
        (!command.is_empty()).then_some(command)
    }
}

/// Load settings from `<config_dir>/config.toml`
///
/// A missing file yields defaults. Read and parse failures come back as
/// `Error::Config` naming the file.
pub fn load_settings(config_dir: &Path) -> Result<Settings> {
    let config_path = config_dir.join(CONFIG_FILENAME);

    if !config_path.exists() {
        debug!("No config file at {:?}, using defaults", config_path);
        return Ok(Settings::default());
    }

    let content = std::fs::read_to_string(&config_path).map_err(|e| {
        Error::config(format!("Failed to read {}: {}", config_path.display(), e))
    })?;

    let settings = toml::from_str(&content).map_err(|e| {
        Error::config(format!("Invalid {}: {}", config_path.display(), e))
    })?;

    debug!("Loaded settings from {:?}", config_path);
    Ok(settings)
}
