//! Inventory list view: record schema and summary metrics.
//!
//! This crate contains the inventory record kind and its query-engine
//! configuration, implemented purely as deterministic domain logic (no IO,
//! no HTTP, no storage).

pub mod item;

pub use item::{
    InventoryFilter, InventoryItem, InventoryItemId, InventorySort, InventorySummary,
    StockStatus,
};
