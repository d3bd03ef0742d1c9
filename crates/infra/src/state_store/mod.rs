//! Persisted client state.
//!
//! Two key/value slots hold JSON documents: the signed-in user record and the
//! whole inventory list. Slots are rewritten wholesale on every change and are
//! not versioned.

pub mod file;
pub mod in_memory;
pub mod r#trait;

pub use file::FileStateStore;
pub use in_memory::InMemoryStateStore;
pub use r#trait::{INVENTORY_SLOT, StateStore, StoreError, USER_SLOT, User, UserRole};

use chrono::{DateTime, Utc};
use tracing::{info, warn};

use invtrack_inventory::{Inventory, demo_inventory};

/// Load the persisted inventory, or seed and persist the demo list.
///
/// A slot that exists but does not deserialize is treated like a missing one;
/// the seeded list then overwrites it.
pub fn load_or_seed<S>(store: &S, now: DateTime<Utc>) -> Result<Inventory, StoreError>
where
    S: StateStore + ?Sized,
{
    match store.load_inventory() {
        Ok(Some(inventory)) => {
            info!(items = inventory.len(), "loaded persisted inventory");
            return Ok(inventory);
        }
        Ok(None) => {}
        Err(StoreError::Serialization(e)) => {
            warn!(error = %e, "persisted inventory is unreadable; reseeding");
        }
        Err(e) => return Err(e),
    }

    let inventory = demo_inventory(now);
    store.save_inventory(&inventory)?;
    info!(items = inventory.len(), "seeded demo inventory");
    Ok(inventory)
}
