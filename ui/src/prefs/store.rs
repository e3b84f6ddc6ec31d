//! Key/value persistence behind the preference services.
//!
//! Stores are deliberately dumb: strings in, strings out, explicit errors.
//! Deciding what a failure means (ignore, log, fall back) belongs to the
//! service layer, not here.

use std::cell::RefCell;
use std::collections::BTreeMap;

use thiserror::Error;

/// Canonical language key, value ∈ {"en", "ar"}.
pub const LANGUAGE_KEY: &str = "language";
/// Canonical theme key, value ∈ {"light", "dark"}.
pub const THEME_KEY: &str = "theme";
/// Pre-rebrand theme flag ("1" dark, "0" light). Read once for migration,
/// then removed.
pub const LEGACY_DARK_KEY: &str = "app_dark";

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("storage backend unavailable")]
    Unavailable,
    #[error("read failed for {key:?}")]
    Read { key: String },
    #[error("write rejected for {key:?}: {reason}")]
    Write { key: String, reason: String },
}

/// Durable string map. Absent keys come back as `Ok(None)`; absence is a
/// state, not a fault.
pub trait PreferenceStore {
    fn read(&self, key: &str) -> Result<Option<String>, StoreError>;
    fn write(&self, key: &str, value: &str) -> Result<(), StoreError>;
    fn remove(&self, key: &str) -> Result<(), StoreError>;
}

/// In-process store for tests and headless contexts. Nothing survives the
/// process.
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: RefCell<BTreeMap<String, String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seeds an entry before the services boot (test setup helper).
    pub fn seeded(entries: &[(&str, &str)]) -> Self {
        let store = Self::new();
        for (key, value) in entries {
            store
                .entries
                .borrow_mut()
                .insert((*key).to_string(), (*value).to_string());
        }
        store
    }

    pub fn len(&self) -> usize {
        self.entries.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.borrow().is_empty()
    }
}

impl PreferenceStore for MemoryStore {
    fn read(&self, key: &str) -> Result<Option<String>, StoreError> {
        Ok(self.entries.borrow().get(key).cloned())
    }

    fn write(&self, key: &str, value: &str) -> Result<(), StoreError> {
        self.entries
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<(), StoreError> {
        self.entries.borrow_mut().remove(key);
        Ok(())
    }
}

/// Browser-origin localStorage. Survives reloads; scoped per origin.
#[cfg(target_arch = "wasm32")]
#[derive(Debug, Default)]
pub struct BrowserStorage;

#[cfg(target_arch = "wasm32")]
impl BrowserStorage {
    pub fn new() -> Self {
        Self
    }

    fn backend() -> Result<web_sys::Storage, StoreError> {
        web_sys::window()
            .and_then(|window| window.local_storage().ok().flatten())
            .ok_or(StoreError::Unavailable)
    }
}

#[cfg(target_arch = "wasm32")]
impl PreferenceStore for BrowserStorage {
    fn read(&self, key: &str) -> Result<Option<String>, StoreError> {
        Self::backend()?
            .get_item(key)
            .map_err(|_| StoreError::Read {
                key: key.to_string(),
            })
    }

    fn write(&self, key: &str, value: &str) -> Result<(), StoreError> {
        Self::backend()?
            .set_item(key, value)
            .map_err(|_| StoreError::Write {
                key: key.to_string(),
                reason: "localStorage rejected the write".to_string(),
            })
    }

    fn remove(&self, key: &str) -> Result<(), StoreError> {
        Self::backend()?
            .remove_item(key)
            .map_err(|_| StoreError::Write {
                key: key.to_string(),
                reason: "localStorage rejected the removal".to_string(),
            })
    }
}

/// Flat JSON map under the per-user config directory. The desktop analogue of
/// localStorage, not a persistence engine.
#[cfg(not(target_arch = "wasm32"))]
#[derive(Debug)]
pub struct FileStore {
    path: std::path::PathBuf,
    entries: RefCell<BTreeMap<String, String>>,
}

#[cfg(not(target_arch = "wasm32"))]
impl FileStore {
    /// Opens `preferences.json` in the platform config directory, creating
    /// parents as needed. A missing file is an empty store.
    pub fn open_default() -> Result<Self, StoreError> {
        let dirs = directories::ProjectDirs::from("com", "Manasik", "Manasik")
            .ok_or(StoreError::Unavailable)?;
        Self::open(dirs.config_dir().join("preferences.json"))
    }

    pub fn open(path: std::path::PathBuf) -> Result<Self, StoreError> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(|err| StoreError::Write {
                key: path.display().to_string(),
                reason: err.to_string(),
            })?;
        }

        let entries = match std::fs::read_to_string(&path) {
            Ok(raw) => serde_json::from_str(&raw).map_err(|_| StoreError::Read {
                key: path.display().to_string(),
            })?,
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => BTreeMap::new(),
            Err(_) => {
                return Err(StoreError::Read {
                    key: path.display().to_string(),
                })
            }
        };

        Ok(Self {
            path,
            entries: RefCell::new(entries),
        })
    }

    fn flush(&self) -> Result<(), StoreError> {
        let json = serde_json::to_string_pretty(&*self.entries.borrow()).map_err(|err| {
            StoreError::Write {
                key: self.path.display().to_string(),
                reason: err.to_string(),
            }
        })?;
        std::fs::write(&self.path, json).map_err(|err| StoreError::Write {
            key: self.path.display().to_string(),
            reason: err.to_string(),
        })
    }
}

#[cfg(not(target_arch = "wasm32"))]
impl PreferenceStore for FileStore {
    fn read(&self, key: &str) -> Result<Option<String>, StoreError> {
        Ok(self.entries.borrow().get(key).cloned())
    }

    fn write(&self, key: &str, value: &str) -> Result<(), StoreError> {
        self.entries
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        self.flush()
    }

    fn remove(&self, key: &str) -> Result<(), StoreError> {
        let removed = self.entries.borrow_mut().remove(key).is_some();
        if removed {
            self.flush()?;
        }
        Ok(())
    }
}
