//! Typed, in-memory keyed repository for one item kind.

use std::collections::BTreeMap;

use stockroom_core::{InventoryError, InventoryResult, Quantity};

use crate::item::InventoryItem;

/// Keyed store for a single item kind.
///
/// Invariants (hold after every call, successful or not):
/// - ids are unique (a failed `add` never overwrites)
/// - every stored quantity is `>= 0`
/// - a failed call leaves the contents untouched
///
/// Mutations take `&mut self`, so an unshared repository has exactly one writer.
/// See [`crate::SharedRepository`] for the lock-guarded handle.
#[derive(Debug, Clone)]
pub struct Repository<T: InventoryItem> {
    items: BTreeMap<T::Id, T>,
}

impl<T: InventoryItem> Repository<T> {
    pub fn new() -> Self {
        Self {
            items: BTreeMap::new(),
        }
    }

    /// Insert `item`; fails with `DuplicateKey` if its id is already present.
    pub fn add(&mut self, item: T) -> InventoryResult<()> {
        if self.items.contains_key(item.id()) {
            return Err(InventoryError::duplicate_key(item.id()));
        }
        self.items.insert(item.id().clone(), item);
        Ok(())
    }

    pub fn get_by_id(&self, id: &T::Id) -> InventoryResult<&T> {
        self.items.get(id).ok_or_else(|| InventoryError::not_found(id))
    }

    /// Remove and hand back the item stored under `id`.
    pub fn remove(&mut self, id: &T::Id) -> InventoryResult<T> {
        self.items.remove(id).ok_or_else(|| InventoryError::not_found(id))
    }

    /// Snapshot of the current contents, ordered by id.
    pub fn list_all(&self) -> Vec<T> {
        self.items.values().cloned().collect()
    }

    /// Overwrite the stored quantity.
    ///
    /// A negative `new_quantity` is reported as `InvalidQuantity` even when `id`
    /// is also absent: the sign is checked first.
    pub fn update_quantity(&mut self, id: &T::Id, new_quantity: i64) -> InventoryResult<()> {
        let quantity = Quantity::new(new_quantity)?;
        let item = self.items.get_mut(id).ok_or_else(|| InventoryError::not_found(id))?;
        item.set_quantity(quantity);
        Ok(())
    }

    /// Apply `delta` to the stored quantity, returning `(previous, current)`.
    ///
    /// Existence is resolved first (there is no current value to derive from
    /// otherwise), then the derived value must be non-negative.
    pub fn adjust_quantity(&mut self, id: &T::Id, delta: i64) -> InventoryResult<(Quantity, Quantity)> {
        let item = self.items.get_mut(id).ok_or_else(|| InventoryError::not_found(id))?;
        let previous = item.quantity();
        let current = previous.checked_adjust(delta)?;
        item.set_quantity(current);
        Ok((previous, current))
    }

    pub fn contains(&self, id: &T::Id) -> bool {
        self.items.contains_key(id)
    }

    /// Ids currently stored, ordered.
    pub fn ids(&self) -> Vec<T::Id> {
        self.items.keys().cloned().collect()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

impl<T: InventoryItem> Default for Repository<T> {
    fn default() -> Self {
        Self::new()
    }
}
