//! Key/value persistence for every dashboard model.
//!
//! Each model owns one named record. Reads never fail: a missing key, a
//! backend error, or malformed JSON all hydrate as the type's default. Writes
//! are synchronous and last-write-wins.

mod config;
pub mod database;
mod memory;

pub use config::{Config, FocusConfig, MoodConfig, PomodoroConfig, SearchConfig};
pub use database::Database;
pub use memory::MemoryBackend;

use serde::de::DeserializeOwned;
use serde::Serialize;
use std::path::PathBuf;
use std::rc::Rc;

use crate::error::{Result, StorageError};

/// Store keys, one per persisted entity.
pub mod keys {
    pub const TODOS: &str = "todos";
    pub const QUICK_LINKS: &str = "quickLinks";
    pub const MOOD_HISTORY: &str = "moodHistory";
    pub const FOCUS_HISTORY: &str = "pomodoroFocusHistory";
    pub const POMODORO_STATE: &str = "pomodoroState";
    pub const THEME: &str = "theme";
    pub const BACKGROUND_IMAGE: &str = "backgroundImage";
}

/// Raw string key/value backend.
pub trait Backend {
    fn get_raw(&self, key: &str) -> Result<Option<String>>;
    fn set_raw(&self, key: &str, value: &str) -> Result<()>;
    fn remove_raw(&self, key: &str) -> Result<()>;
}

/// Typed, cheap-to-clone handle over a [`Backend`].
#[derive(Clone)]
pub struct PersistentStore {
    backend: Rc<dyn Backend>,
}

impl PersistentStore {
    pub fn new(backend: impl Backend + 'static) -> Self {
        Self {
            backend: Rc::new(backend),
        }
    }

    /// Store backed by a fresh in-memory map.
    pub fn in_memory() -> Self {
        Self::new(MemoryBackend::default())
    }

    /// Read `key`, falling back to `T::default()` on absence or corruption.
    pub fn load<T>(&self, key: &str) -> T
    where
        T: DeserializeOwned + Default,
    {
        self.try_load(key).unwrap_or_default()
    }

    /// Read `key`, returning `None` on absence or corruption.
    pub fn try_load<T>(&self, key: &str) -> Option<T>
    where
        T: DeserializeOwned,
    {
        let raw = match self.backend.get_raw(key) {
            Ok(raw) => raw?,
            Err(e) => {
                tracing::warn!(key, error = %e, "store read failed, using default");
                return None;
            }
        };
        match serde_json::from_str(&raw) {
            Ok(value) => Some(value),
            Err(e) => {
                tracing::warn!(key, error = %e, "malformed persisted value, using default");
                None
            }
        }
    }

    /// Serialize and write `value` under `key` before returning.
    pub fn save<T>(&self, key: &str, value: &T) -> Result<()>
    where
        T: Serialize + ?Sized,
    {
        let json = serde_json::to_string(value)?;
        self.backend.set_raw(key, &json)
    }

    pub fn remove(&self, key: &str) -> Result<()> {
        self.backend.remove_raw(key)
    }
}

/// Returns the data directory.
///
/// `STARTPAGE_DATA_DIR` wins when set. Otherwise `~/.config/startpage[-dev]/`
/// based on `STARTPAGE_ENV`.
///
/// # Errors
/// Returns an error if creating the directory fails.
pub fn data_dir() -> Result<PathBuf> {
    let dir = match std::env::var_os("STARTPAGE_DATA_DIR") {
        Some(dir) => PathBuf::from(dir),
        None => {
            let base_dir = dirs::home_dir()
                .unwrap_or_else(|| PathBuf::from("."))
                .join(".config");
            let env = std::env::var("STARTPAGE_ENV").unwrap_or_else(|_| "production".to_string());
            if env == "dev" {
                base_dir.join("startpage-dev")
            } else {
                base_dir.join("startpage")
            }
        }
    };

    std::fs::create_dir_all(&dir)
        .map_err(|e| StorageError::DataDir(format!("{}: {e}", dir.display())))?;
    Ok(dir)
}
