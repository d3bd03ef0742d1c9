use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use invtrack_core::UserId;
use invtrack_inventory::Inventory;

/// Slot holding the signed-in user record.
pub const USER_SLOT: &str = "inv_user";
/// Slot holding the full inventory list.
pub const INVENTORY_SLOT: &str = "inv_data";

#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UserRole {
    Admin,
    Employee,
}

/// The user record kept in [`USER_SLOT`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: UserId,
    pub username: String,
    pub role: UserRole,
    #[serde(rename = "createdAt")]
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("storage io error: {0}")]
    Io(String),

    #[error("serialization error: {0}")]
    Serialization(String),
}

impl From<std::io::Error> for StoreError {
    fn from(e: std::io::Error) -> Self {
        StoreError::Io(e.to_string())
    }
}

impl From<serde_json::Error> for StoreError {
    fn from(e: serde_json::Error) -> Self {
        StoreError::Serialization(e.to_string())
    }
}

/// Key/value storage of JSON documents.
///
/// Implementors provide raw slot access; the typed helpers are shared.
pub trait StateStore: Send + Sync {
    /// Raw slot contents, `None` when the slot was never written or was removed.
    fn read_slot(&self, slot: &str) -> Result<Option<String>, StoreError>;

    fn write_slot(&self, slot: &str, json: String) -> Result<(), StoreError>;

    /// Removing a missing slot is not an error.
    fn remove_slot(&self, slot: &str) -> Result<(), StoreError>;

    fn load_user(&self) -> Result<Option<User>, StoreError> {
        self.read_slot(USER_SLOT)?
            .map(|json| serde_json::from_str(&json).map_err(StoreError::from))
            .transpose()
    }

    /// `None` signs the user out by clearing the slot.
    fn save_user(&self, user: Option<&User>) -> Result<(), StoreError> {
        match user {
            Some(user) => self.write_slot(USER_SLOT, serde_json::to_string(user)?),
            None => self.remove_slot(USER_SLOT),
        }
    }

    fn load_inventory(&self) -> Result<Option<Inventory>, StoreError> {
        self.read_slot(INVENTORY_SLOT)?
            .map(|json| serde_json::from_str(&json).map_err(StoreError::from))
            .transpose()
    }

    fn save_inventory(&self, inventory: &Inventory) -> Result<(), StoreError> {
        self.write_slot(INVENTORY_SLOT, serde_json::to_string(inventory)?)
    }
}
