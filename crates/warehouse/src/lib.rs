//! Warehouse driver: seeds a [`StockManager`], prints listings, and walks through
//! each failure kind. Everything here sits outside the inventory core.
//!
//! [`StockManager`]: stockroom_inventory::StockManager

pub mod config;
pub mod demo;
pub mod report;
pub mod seed;

pub use config::{ReportFormat, WarehouseConfig};
