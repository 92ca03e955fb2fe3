//! Storage layer
//!
//! The whole record mapping is persisted as one JSON blob under a single
//! key. [`StateStore`] is the key-value seam; [`StateRepository`] turns the
//! blob into [`manifest::GroupedData`] and back.

mod memory;
mod repository;
mod sqlite;

pub use memory::MemoryStore;
pub use repository::StateRepository;
pub use sqlite::{SqliteStore, StoreStats};

use crate::Result;

/// Key-value store holding serialized state
pub trait StateStore {
    /// Read the value stored under `key`, `None` if absent
    fn get(&self, key: &str) -> Result<Option<String>>;

    /// Store `value` under `key`, replacing any previous value
    fn set(&mut self, key: &str, value: &str) -> Result<()>;

    /// Delete `key`; deleting a missing key is not an error
    fn remove(&mut self, key: &str) -> Result<()>;
}
