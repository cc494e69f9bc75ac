//! JSON-backed alias store.
//!
//! The store mirrors a single file holding a JSON object of alias name to
//! path string. Every mutation rewrites the whole file. There is no locking:
//! two invocations mutating the store at the same time may lose an update.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use vs_core::prelude::*;

/// File name of the alias store inside the config directory
pub const STORE_FILENAME: &str = "aliases.json";

const EMPTY_TABLE: &str = "{}";

/// In-memory alias table mirroring the file on disk
#[derive(Debug)]
pub struct AliasStore {
    path: PathBuf,
    aliases: BTreeMap<String, String>,
}

impl AliasStore {
    /// Default store location: `<config dir>/aliases.json`
    pub fn default_path() -> Result<PathBuf> {
        Ok(vs_core::app_config_dir()?.join(STORE_FILENAME))
    }

    /// Load the store from `path`, creating `{}` (and parent directories) if
    /// the file does not exist yet.
    ///
    /// A file that exists but does not hold a JSON object of strings is an
    /// error; it is never reset.
    pub fn load(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();

        if !path.exists() {
            if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
                std::fs::create_dir_all(parent).map_err(|e| {
                    Error::storage(&path, format!("Failed to create directory: {}", e))
                })?;
            }
            std::fs::write(&path, EMPTY_TABLE)
                .map_err(|e| Error::storage(&path, format!("Failed to create store: {}", e)))?;
            info!("Created empty alias store at {:?}", path);

            return Ok(Self {
                path,
                aliases: BTreeMap::new(),
            });
        }

        let content = std::fs::read_to_string(&path)
            .map_err(|e| Error::storage(&path, format!("Failed to read store: {}", e)))?;

        let aliases: BTreeMap<String, String> = serde_json::from_str(&content).map_err(|e| {
            warn!("Refusing to load corrupt alias store {:?}: {}", path, e);
            Error::storage(&path, format!("Invalid alias data: {}", e))
        })?;

        debug!("Loaded {} aliases from {:?}", aliases.len(), path);
        Ok(Self { path, aliases })
    }

    /// Path of the backing file
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Look up an alias. Values are returned verbatim; no chains are followed.
    pub fn get(&self, name: &str) -> Option<&str> {
        self.aliases.get(name).map(String::as_str)
    }

    /// Insert or overwrite an alias and persist the table.
    pub fn set(&mut self, name: impl Into<String>, path: impl Into<String>) -> Result<()> {
        let name = name.into();
        if name.is_empty() {
            return Err(Error::usage("Alias name must not be empty"));
        }

        let path = path.into();
        if let Some(previous) = self.aliases.insert(name.clone(), path.clone()) {
            debug!("Overwriting alias {:?} (was {:?})", name, previous);
        }
        self.save()?;

        info!("Set alias {:?} -> {:?}", name, path);
        Ok(())
    }

    /// Remove an alias. Returns whether it existed; only persists on removal.
    pub fn delete(&mut self, name: &str) -> Result<bool> {
        if self.aliases.remove(name).is_none() {
            debug!("Alias {:?} not present, nothing to delete", name);
            return Ok(false);
        }

        self.save()?;
        info!("Deleted alias {:?}", name);
        Ok(true)
    }

    /// All `(name, path)` pairs, ordered by name.
    pub fn list(&self) -> Vec<(&str, &str)> {
        self.aliases
            .iter()
            .map(|(name, path)| (name.as_str(), path.as_str()))
            .collect()
    }

    pub fn len(&self) -> usize {
        self.aliases.len()
    }

    pub fn is_empty(&self) -> bool {
        self.aliases.is_empty()
    }

    /// Rewrite the whole file.
    ///
    /// Uses atomic write (temp file + rename) so an interrupted write never
    /// leaves a truncated store behind.
    fn save(&self) -> Result<()> {
        let mut content = serde_json::to_string_pretty(&self.aliases)?;
        content.push('\n');

        let temp_path = self.temp_path();

        std::fs::write(&temp_path, &content)
            .map_err(|e| Error::storage(&self.path, format!("Failed to write temp file: {}", e)))?;

        std::fs::rename(&temp_path, &self.path).map_err(|e| {
            Error::storage(&self.path, format!("Failed to rename temp file: {}", e))
        })?;

        debug!("Saved {} aliases to {:?}", self.aliases.len(), self.path);
        Ok(())
    }

    fn temp_path(&self) -> PathBuf {
        let file_name = self
            .path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| STORE_FILENAME.to_string());
        self.path.with_file_name(format!(".{}.tmp", file_name))
    }
}
