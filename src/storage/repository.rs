//! Whole-state repository over a key-value store

use super::StateStore;
use crate::{PaxError, Result};
use manifest::GroupedData;

/// Loads and saves the complete record mapping under one key
///
/// Every save overwrites the stored blob wholesale; there is no per-record
/// update.
pub struct StateRepository<S: StateStore> {
    store: S,
    key: String,
}

impl<S: StateStore> StateRepository<S> {
    pub fn new(store: S, key: impl Into<String>) -> Self {
        Self {
            store,
            key: key.into(),
        }
    }

    /// Key the state lives under
    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Raw stored blob, `None` if nothing has been saved
    pub fn load_raw(&self) -> Result<Option<String>> {
        self.store.get(&self.key)
    }

    /// Decode the stored state
    ///
    /// Returns `None` when nothing has been saved yet and `CorruptState` when
    /// the blob cannot be decoded.
    pub fn load(&self) -> Result<Option<GroupedData>> {
        let Some(blob) = self.load_raw()? else {
            return Ok(None);
        };

        let data = GroupedData::from_json(&blob).map_err(|source| {
            tracing::error!(key = %self.key, error = %source, "Stored state is not valid");
            PaxError::CorruptState {
                key: self.key.clone(),
                source,
            }
        })?;

        tracing::debug!(
            groups = data.group_count(),
            records = data.record_count(),
            "State loaded"
        );
        Ok(Some(data))
    }

    /// Decode the stored state, treating "nothing saved" as empty
    pub fn load_or_empty(&self) -> Result<GroupedData> {
        Ok(self.load()?.unwrap_or_default())
    }

    /// Replace the stored state
    pub fn save(&mut self, data: &GroupedData) -> Result<()> {
        let blob = data.to_json()?;
        self.store.set(&self.key, &blob)?;

        tracing::debug!(
            groups = data.group_count(),
            records = data.record_count(),
            "State saved"
        );
        Ok(())
    }

    /// Discard the stored state entirely
    pub fn clear(&mut self) -> Result<()> {
        self.store.remove(&self.key)
    }

    /// Whether anything is stored
    pub fn exists(&self) -> Result<bool> {
        Ok(self.load_raw()?.is_some())
    }
}
