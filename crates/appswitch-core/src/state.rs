//! Persisted key-value state
//!
//! Holds small pieces of state that outlive one invocation, most notably
//! the name of the last app opened through `appswitch open`. Located at
//! `~/.appswitch/state.yaml`:
//!
//! ```yaml
//! entries:
//!   last-selected-app:
//!     value: Zed
//!     updated_at: "2026-01-21T10:00:00Z"
//! ```

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashMap};
use std::path::PathBuf;
use tracing::debug;

use crate::error::Result;
use crate::utils::get_state_path;

/// Key under which the last opened app name is stored
pub const LAST_SELECTED_APP_KEY: &str = "last-selected-app";

/// Narrow read/write interface over persisted state
pub trait KeyValueStore {
    /// Read a value
    fn get(&self, key: &str) -> Result<Option<String>>;

    /// Write a value
    fn set(&mut self, key: &str, value: &str) -> Result<()>;

    /// Name of the last app opened via the picker
    fn last_selected_app(&self) -> Result<Option<String>> {
        Ok(self
            .get(LAST_SELECTED_APP_KEY)?
            .filter(|name| !name.is_empty()))
    }

    /// Record the app that was just opened
    fn remember_selected_app(&mut self, name: &str) -> Result<()> {
        self.set(LAST_SELECTED_APP_KEY, name)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
struct StateEntry {
    value: String,
    updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
struct StateFile {
    #[serde(default)]
    entries: BTreeMap<String, StateEntry>,
}

/// YAML-backed store that rewrites its file on every `set`
pub struct FileStateStore {
    path: PathBuf,
    state: StateFile,
}

impl FileStateStore {
    /// Open the store at `path`; a missing file starts empty
    pub fn open(path: PathBuf) -> Result<Self> {
        let state = if path.exists() {
            let content = std::fs::read_to_string(&path)?;
            if content.trim().is_empty() {
                StateFile::default()
            } else {
                serde_yaml_ng::from_str(&content)?
            }
        } else {
            StateFile::default()
        };

        debug!("Opened state store at {:?} ({} entries)", path, state.entries.len());
        Ok(Self { path, state })
    }

    /// Open the store at its default location
    pub fn open_default() -> Result<Self> {
        Self::open(get_state_path()?)
    }

    /// When a key was last written
    pub fn updated_at(&self, key: &str) -> Option<DateTime<Utc>> {
        self.state.entries.get(key).map(|e| e.updated_at)
    }

    fn save(&self) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(&self.path, serde_yaml_ng::to_string(&self.state)?)?;
        Ok(())
    }
}

impl KeyValueStore for FileStateStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        Ok(self.state.entries.get(key).map(|e| e.value.clone()))
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        debug!("Setting state {} = {}", key, value);
        self.state.entries.insert(
            key.to_string(),
            StateEntry {
                value: value.to_string(),
                updated_at: Utc::now(),
            },
        );
        self.save()
    }
}

/// In-memory store for embedding and tests
#[derive(Debug, Clone, Default)]
pub struct MemoryStateStore {
    entries: HashMap<String, String>,
}

impl MemoryStateStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStore for MemoryStateStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        Ok(self.entries.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        self.entries.insert(key.to_string(), value.to_string());
        Ok(())
    }
}
