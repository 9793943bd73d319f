use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use stockroom_core::{Entity, ItemId, Quantity};

/// Capability every storable item exposes: identity, display name, stock level.
///
/// Item kinds are independent types; the repository never special-cases one.
/// `set_quantity` only accepts a validated [`Quantity`], so no caller can write
/// a negative stock level, and once an item is added the repository hands out
/// shared references only.
pub trait InventoryItem: Entity + Clone {
    fn name(&self) -> &str;

    fn quantity(&self) -> Quantity;

    fn set_quantity(&mut self, quantity: Quantity);
}

/// Electronic item: brand + warranty period.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ElectronicItem {
    id: ItemId,
    name: String,
    quantity: Quantity,
    brand: String,
    warranty_months: u32,
}

impl ElectronicItem {
    pub fn new(
        id: ItemId,
        name: impl Into<String>,
        quantity: Quantity,
        brand: impl Into<String>,
        warranty_months: u32,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            quantity,
            brand: brand.into(),
            warranty_months,
        }
    }

    pub fn brand(&self) -> &str {
        &self.brand
    }

    pub fn warranty_months(&self) -> u32 {
        self.warranty_months
    }
}

impl Entity for ElectronicItem {
    type Id = ItemId;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}

impl InventoryItem for ElectronicItem {
    fn name(&self) -> &str {
        &self.name
    }

    fn quantity(&self) -> Quantity {
        self.quantity
    }

    fn set_quantity(&mut self, quantity: Quantity) {
        self.quantity = quantity;
    }
}

impl core::fmt::Display for ElectronicItem {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(
            f,
            "ElectronicItem {{ Id={}, Name={}, Brand={}, Warranty={}m, Qty={} }}",
            self.id, self.name, self.brand, self.warranty_months, self.quantity
        )
    }
}

/// Grocery item: perishable, with an expiry date.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GroceryItem {
    id: ItemId,
    name: String,
    quantity: Quantity,
    expiry_date: NaiveDate,
}

impl GroceryItem {
    pub fn new(id: ItemId, name: impl Into<String>, quantity: Quantity, expiry_date: NaiveDate) -> Self {
        Self {
            id,
            name: name.into(),
            quantity,
            expiry_date,
        }
    }

    pub fn expiry_date(&self) -> NaiveDate {
        self.expiry_date
    }

    /// Whether the item has expired as of `today` (expiry day itself still sellable).
    pub fn is_expired(&self, today: NaiveDate) -> bool {
        today > self.expiry_date
    }
}

impl Entity for GroceryItem {
    type Id = ItemId;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}

impl InventoryItem for GroceryItem {
    fn name(&self) -> &str {
        &self.name
    }

    fn quantity(&self) -> Quantity {
        self.quantity
    }

    fn set_quantity(&mut self, quantity: Quantity) {
        self.quantity = quantity;
    }
}

impl core::fmt::Display for GroceryItem {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(
            f,
            "GroceryItem {{ Id={}, Name={}, Expiry={}, Qty={} }}",
            self.id,
            self.name,
            self.expiry_date.format("%Y-%m-%d"),
            self.quantity
        )
    }
}
