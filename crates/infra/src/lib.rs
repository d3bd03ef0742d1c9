//! Infrastructure layer: persisted client state.

pub mod state_store;

pub use state_store::{
    FileStateStore, INVENTORY_SLOT, InMemoryStateStore, StateStore, StoreError, USER_SLOT, User,
    UserRole, load_or_seed,
};
