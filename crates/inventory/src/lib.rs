//! Inventory domain module.
//!
//! Typed in-memory repositories for heterogeneous item kinds, plus a stock
//! manager that isolates per-item failures. Pure domain logic: no IO, no
//! formatting beyond `Display`, no persistence.

pub mod item;
pub mod manager;
pub mod repository;
pub mod shared;

pub use item::{ElectronicItem, GroceryItem, InventoryItem};
pub use manager::{StockAdjustment, StockManager, StockOutcome, Stocks, increase_stock, remove_item_by_id};
pub use repository::Repository;
pub use shared::SharedRepository;
