//! Non-negative stock quantity.

use serde::{Deserialize, Serialize};

use crate::error::{InventoryError, InventoryResult};
use crate::value_object::ValueObject;

/// Stock level of an item. Always `>= 0`.
///
/// The only ways to obtain a `Quantity` are validating constructors, so an item
/// can never hold a negative stock level, whoever holds a mutable reference.
/// Deserialization runs through the same check.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "i64", into = "i64")]
pub struct Quantity(i64);

impl Quantity {
    pub const ZERO: Quantity = Quantity(0);

    pub fn new(value: i64) -> InventoryResult<Self> {
        if value < 0 {
            return Err(InventoryError::invalid_quantity(value));
        }
        Ok(Self(value))
    }

    pub fn value(self) -> i64 {
        self.0
    }

    /// Derive `self + delta`.
    ///
    /// Fails with `InvalidQuantity` when the result is negative or does not fit
    /// in an `i64` (the reported value saturates).
    pub fn checked_adjust(self, delta: i64) -> InventoryResult<Self> {
        match self.0.checked_add(delta) {
            Some(next) => Self::new(next),
            None => Err(InventoryError::invalid_quantity(self.0.saturating_add(delta))),
        }
    }
}

impl ValueObject for Quantity {}

impl TryFrom<i64> for Quantity {
    type Error = InventoryError;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Quantity> for i64 {
    fn from(value: Quantity) -> Self {
        value.0
    }
}

impl core::fmt::Display for Quantity {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        core::fmt::Display::fmt(&self.0, f)
    }
}
