use std::collections::HashMap;
use std::sync::RwLock;

use super::r#trait::{StateStore, StoreError};

/// In-memory slot store.
///
/// Intended for tests/dev. Contents are lost when dropped.
#[derive(Debug, Default)]
pub struct InMemoryStateStore {
    slots: RwLock<HashMap<String, String>>,
}

impl InMemoryStateStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl StateStore for InMemoryStateStore {
    fn read_slot(&self, slot: &str) -> Result<Option<String>, StoreError> {
        let slots = self
            .slots
            .read()
            .map_err(|_| StoreError::Io("state store lock poisoned".to_string()))?;
        Ok(slots.get(slot).cloned())
    }

    fn write_slot(&self, slot: &str, json: String) -> Result<(), StoreError> {
        let mut slots = self
            .slots
            .write()
            .map_err(|_| StoreError::Io("state store lock poisoned".to_string()))?;
        slots.insert(slot.to_string(), json);
        Ok(())
    }

    fn remove_slot(&self, slot: &str) -> Result<(), StoreError> {
        let mut slots = self
            .slots
            .write()
            .map_err(|_| StoreError::Io("state store lock poisoned".to_string()))?;
        slots.remove(slot);
        Ok(())
    }
}
