//! Inventory domain module.
//!
//! This crate contains the item model and the in-memory catalog the dashboard
//! edits, implemented as deterministic domain logic (no IO, no HTTP, no storage).
//! Callers pass `now` explicitly so timestamps stay testable.

pub mod catalog;
pub mod dashboard;
pub mod item;
pub mod seed;

pub use catalog::Inventory;
pub use dashboard::{DashboardStats, StockLevel};
pub use item::{InventoryItem, ItemUpdate, NewItem, SalesRecord, total_units};
pub use seed::{demo_inventory, trailing_sales_window};
