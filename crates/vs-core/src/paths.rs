//! Path helpers: application directories, home expansion, absolutization

use std::path::{Component, Path, PathBuf};

use crate::error::{Error, Result};

/// Directory name used under the platform config/data directories
pub const APP_DIR_NAME: &str = "vs-alias";

/// Environment variable that relocates the config directory (store + settings)
pub const ALIAS_HOME_ENV: &str = "VS_ALIAS_HOME";

// ─────────────────────────────────────────────────────────────────────────────
// Application Directories
// ─────────────────────────────────────────────────────────────────────────────

/// Directory holding `aliases.json` and `config.toml`.
///
/// `$VS_ALIAS_HOME` wins when set and non-empty, otherwise
/// `<config_dir>/vs-alias` (e.g. `~/.config/vs-alias` on Linux).
pub fn app_config_dir() -> Result<PathBuf> {
    if let Some(dir) = std::env::var_os(ALIAS_HOME_ENV).filter(|v| !v.is_empty()) {
        return Ok(PathBuf::from(dir));
    }

    dirs::config_dir()
        .map(|base| base.join(APP_DIR_NAME))
        .ok_or_else(|| Error::config("Could not determine the user configuration directory"))
}

/// Directory for rolling log files.
///
/// `<$VS_ALIAS_HOME>/logs` when the override is set, so a relocated install
/// keeps everything under one directory; otherwise
/// `<data_local_dir>/vs-alias/logs`.
pub fn log_dir() -> PathBuf {
    if let Some(dir) = std::env::var_os(ALIAS_HOME_ENV).filter(|v| !v.is_empty()) {
        return PathBuf::from(dir).join("logs");
    }

    let base = dirs::data_local_dir().unwrap_or_else(|| PathBuf::from("."));
    base.join(APP_DIR_NAME).join("logs")
}

/// The current user's home directory, if the platform can tell us
pub fn home_dir() -> Option<PathBuf> {
    dirs::home_dir()
}

// ─────────────────────────────────────────────────────────────────────────────
// Home Expansion
// ─────────────────────────────────────────────────────────────────────────────

/// Replace a leading `~` with the home directory.
///
/// Only `~` on its own or followed by `/` or `\` is expanded; `~user/x` and
/// values without a leading tilde come back unchanged, as does everything
/// when `home` is `None`.
pub fn expand_home(value: &str, home: Option<&Path>) -> String {
    let Some(home) = home else {
        return value.to_string();
    };

    if value == "~" {
        return home.to_string_lossy().into_owned();
    }

    let rest = value
        .strip_prefix("~/")
        .or_else(|| value.strip_prefix("~\\"));

    match rest {
        Some(rest) => home.join(rest).to_string_lossy().into_owned(),
        None => value.to_string(),
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Absolutization
// ─────────────────────────────────────────────────────────────────────────────

/// Make `path` absolute against `cwd` without touching the filesystem.
///
/// `.` components are dropped and `..` pops the previous component. Symlinks
/// are not resolved.
pub fn absolutize(path: &Path, cwd: &Path) -> PathBuf {
    let joined = if path.is_absolute() {
        path.to_path_buf()
    } else {
        cwd.join(path)
    };

    let mut normalized = PathBuf::new();
    for component in joined.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => {
                // Never pop past the root/prefix
                if matches!(
                    normalized.components().next_back(),
                    Some(Component::Normal(_))
                ) {
                    normalized.pop();
                }
            }
            other => normalized.push(other.as_os_str()),
        }
    }
    normalized
}
