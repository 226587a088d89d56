//! Durable per-device UI state.
//!
//! Small pieces of UI state (currently only the "asistencia tomada" flag)
//! that survive restarts but are never synchronized with the server. Values
//! are JSON scalars keyed by string, stored in a single file under the user
//! data directory. The store is the one place that reads or writes that
//! file; components go through the typed accessors.

use crate::constants::ASISTENCIA_TOMADA_KEY;
use anyhow::{Context, Result};
use std::collections::HashMap;
use std::path::{Path, PathBuf};

/// String-keyed store of JSON scalars, written back on every change.
#[derive(Debug)]
pub struct UiStateStore {
    path: PathBuf,
    values: HashMap<String, serde_json::Value>,
}

impl UiStateStore {
    /// Open the store at the default per-user location, creating nothing
    /// until the first write. Missing or unreadable files start empty.
    pub fn load() -> Result<Self> {
        Ok(Self::load_from(Self::default_path()?))
    }

    /// Open the store at an explicit path.
    pub fn load_from<P: AsRef<Path>>(path: P) -> Self {
        let path = path.as_ref().to_path_buf();
        let values = std::fs::read_to_string(&path)
            .ok()
            .and_then(|content| serde_json::from_str(&content).ok())
            .unwrap_or_default();

        Self { path, values }
    }

    fn default_path() -> Result<PathBuf> {
        dirs::data_dir()
            .ok_or_else(|| anyhow::anyhow!("Could not determine data directory"))
            .map(|dir| dir.join("campo").join("ui-state.json"))
    }

    /// Read a boolean flag. Absent keys read as `false`; the key is created
    /// lazily on the first write, not here.
    pub fn get_bool(&self, key: &str) -> bool {
        self.values.get(key).and_then(|v| v.as_bool()).unwrap_or(false)
    }

    /// Overwrite a boolean flag and persist the whole store.
    pub fn set_bool(&mut self, key: &str, value: bool) -> Result<()> {
        self.values.insert(key.to_string(), serde_json::Value::Bool(value));
        self.persist()
    }

    /// Whether attendance has been marked as taken on this device.
    pub fn asistencia_tomada(&self) -> bool {
        self.get_bool(ASISTENCIA_TOMADA_KEY)
    }

    pub fn set_asistencia_tomada(&mut self, value: bool) -> Result<()> {
        self.set_bool(ASISTENCIA_TOMADA_KEY, value)
    }

    fn persist(&self) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create data directory: {}", parent.display()))?;
        }
        let content = serde_json::to_string_pretty(&self.values).context("Failed to serialize UI state")?;
        std::fs::write(&self.path, content)
            .with_context(|| format!("Failed to write UI state file: {}", self.path.display()))
    }
}
