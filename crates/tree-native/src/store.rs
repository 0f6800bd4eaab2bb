use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::ffi::OsString;
use std::path::{Path, PathBuf};
use tree_core::{KeyValueStore, StoreError};

pub const PREFS_PATH_ENV: &str = "SPIRAL_TREE_PREFS";
const PREFS_DIR: &str = "spiral-tree";
const PREFS_FILE: &str = "prefs.json";

/// Preferences file location: `$SPIRAL_TREE_PREFS`, else the user config dir.
pub fn default_prefs_path() -> PathBuf {
    prefs_path_from(std::env::var_os(PREFS_PATH_ENV))
}

pub fn prefs_path_from(env_override: Option<OsString>) -> PathBuf {
    match env_override {
        Some(p) if !p.is_empty() => PathBuf::from(p),
        _ => dirs::config_dir()
            .or_else(dirs::home_dir)
            .unwrap_or_default()
            .join(PREFS_DIR)
            .join(PREFS_FILE),
    }
}

#[derive(Debug, Default, Serialize, Deserialize)]
#[serde(transparent)]
struct Prefs {
    entries: BTreeMap<String, String>,
}

/// A JSON object of string preferences, rewritten on every change.
pub struct FileStore {
    path: PathBuf,
    prefs: Prefs,
}

impl FileStore {
    /// Load `path`; a missing file is an empty store.
    pub fn open(path: impl Into<PathBuf>) -> Result<Self, StoreError> {
        let path = path.into();
        let prefs = if path.exists() {
            let raw = std::fs::read_to_string(&path)?;
            serde_json::from_str::<Prefs>(&raw).map_err(std::io::Error::from)?
        } else {
            Prefs::default()
        };
        Ok(Self { path, prefs })
    }

    /// Like [`FileStore::open`], but an unreadable file starts an empty store
    /// that overwrites it on the next change.
    pub fn open_or_empty(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        match Self::open(path.clone()) {
            Ok(store) => store,
            Err(e) => {
                log::warn!("[prefs] ignoring unreadable {}: {}", path.display(), e);
                Self {
                    path,
                    prefs: Prefs::default(),
                }
            }
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn flush(&self) -> Result<(), StoreError> {
        if let Some(dir) = self.path.parent().filter(|d| !d.as_os_str().is_empty()) {
            std::fs::create_dir_all(dir)?;
        }
        let raw = serde_json::to_string_pretty(&self.prefs).map_err(std::io::Error::from)?;
        std::fs::write(&self.path, raw)?;
        Ok(())
    }
}

impl KeyValueStore for FileStore {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        Ok(self.prefs.entries.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StoreError> {
        if key.is_empty() {
            return Err(StoreError::InvalidKey(key.to_string()));
        }
        self.prefs.entries.insert(key.to_string(), value.to_string());
        self.flush()
    }

    fn remove(&mut self, key: &str) -> Result<(), StoreError> {
        if self.prefs.entries.remove(key).is_some() {
            self.flush()?;
        }
        Ok(())
    }
}
