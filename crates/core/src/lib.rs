//! `stockroom-core` — inventory foundation building blocks.
//!
//! This crate contains **pure domain** primitives (no IO, no formatting, no storage).

pub mod entity;
pub mod error;
pub mod id;
pub mod quantity;
pub mod value_object;

pub use entity::Entity;
pub use error::{ErrorKind, InventoryError, InventoryResult};
pub use id::ItemId;
pub use quantity::Quantity;
pub use value_object::ValueObject;
