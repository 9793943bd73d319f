//! Stock manager: adjustment policy on top of typed repositories.
//!
//! Adjustments and removals absorb `NotFound` / `InvalidQuantity` into a
//! [`StockOutcome`] so a caller can run many of them in a row without one
//! failure aborting the rest. Inserts are different: `DuplicateKey` always
//! propagates, since it points at bad seed data rather than a runtime condition.

use serde::{Deserialize, Serialize};

use stockroom_core::{InventoryError, InventoryResult, Quantity};

use crate::item::{ElectronicItem, GroceryItem, InventoryItem};
use crate::repository::Repository;

/// Result of one isolated stock operation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StockOutcome<Id> {
    /// Quantity changed from `previous` to `current`.
    Adjusted {
        id: Id,
        previous: Quantity,
        current: Quantity,
    },
    /// Item was removed.
    Removed { id: Id },
    /// Nothing changed; `error` says why.
    Rejected { id: Id, error: InventoryError },
}

impl<Id> StockOutcome<Id> {
    pub fn id(&self) -> &Id {
        match self {
            StockOutcome::Adjusted { id, .. }
            | StockOutcome::Removed { id }
            | StockOutcome::Rejected { id, .. } => id,
        }
    }

    pub fn is_success(&self) -> bool {
        !matches!(self, StockOutcome::Rejected { .. })
    }

    pub fn error(&self) -> Option<&InventoryError> {
        match self {
            StockOutcome::Rejected { error, .. } => Some(error),
            _ => None,
        }
    }
}

/// One requested stock change (negative `delta` is a decrease).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StockAdjustment<Id> {
    pub id: Id,
    pub delta: i64,
}

impl<Id> StockAdjustment<Id> {
    pub fn new(id: Id, delta: i64) -> Self {
        Self { id, delta }
    }
}

/// Apply `delta` to the item's stock, reporting failures instead of returning them.
pub fn increase_stock<T: InventoryItem>(
    repo: &mut Repository<T>,
    id: &T::Id,
    delta: i64,
) -> StockOutcome<T::Id> {
    match repo.adjust_quantity(id, delta) {
        Ok((previous, current)) => {
            tracing::info!(item_id = %id, %previous, %current, "stock updated");
            StockOutcome::Adjusted {
                id: id.clone(),
                previous,
                current,
            }
        }
        Err(error) => {
            tracing::warn!(item_id = %id, delta, %error, "stock adjustment rejected");
            StockOutcome::Rejected {
                id: id.clone(),
                error,
            }
        }
    }
}

/// Remove the item, reporting `NotFound` instead of returning it.
pub fn remove_item_by_id<T: InventoryItem>(repo: &mut Repository<T>, id: &T::Id) -> StockOutcome<T::Id> {
    match repo.remove(id) {
        Ok(_) => {
            tracing::info!(item_id = %id, "item removed");
            StockOutcome::Removed { id: id.clone() }
        }
        Err(error) => {
            tracing::warn!(item_id = %id, %error, "item removal rejected");
            StockOutcome::Rejected {
                id: id.clone(),
                error,
            }
        }
    }
}

/// Selects the repository holding item kind `T`.
pub trait Stocks<T: InventoryItem> {
    fn repository(&self) -> &Repository<T>;

    fn repository_mut(&mut self) -> &mut Repository<T>;
}

/// Warehouse-wide manager: one repository per item kind.
///
/// Holds no item state of its own; everything goes through the repositories.
#[derive(Debug, Clone, Default)]
pub struct StockManager {
    electronics: Repository<ElectronicItem>,
    groceries: Repository<GroceryItem>,
}

impl StockManager {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn electronics(&self) -> &Repository<ElectronicItem> {
        &self.electronics
    }

    pub fn groceries(&self) -> &Repository<GroceryItem> {
        &self.groceries
    }

    /// Direct repository access; errors from it are the caller's to handle.
    pub fn electronics_mut(&mut self) -> &mut Repository<ElectronicItem> {
        &mut self.electronics
    }

    pub fn groceries_mut(&mut self) -> &mut Repository<GroceryItem> {
        &mut self.groceries
    }

    /// Add a single item; `DuplicateKey` is returned to the caller.
    pub fn add_item<T: InventoryItem>(&mut self, item: T) -> InventoryResult<()>
    where
        Self: Stocks<T>,
    {
        Stocks::<T>::repository_mut(self).add(item)
    }

    /// Bulk-insert initial data. Stops at, and returns, the first `DuplicateKey`.
    pub fn seed(
        &mut self,
        electronics: impl IntoIterator<Item = ElectronicItem>,
        groceries: impl IntoIterator<Item = GroceryItem>,
    ) -> InventoryResult<()> {
        for item in electronics {
            self.electronics.add(item)?;
        }
        for item in groceries {
            self.groceries.add(item)?;
        }
        tracing::debug!(
            electronics = self.electronics.len(),
            groceries = self.groceries.len(),
            "inventory seeded"
        );
        Ok(())
    }

    pub fn increase_stock<T: InventoryItem>(&mut self, id: &T::Id, delta: i64) -> StockOutcome<T::Id>
    where
        Self: Stocks<T>,
    {
        increase_stock(Stocks::<T>::repository_mut(self), id, delta)
    }

    pub fn remove_item_by_id<T: InventoryItem>(&mut self, id: &T::Id) -> StockOutcome<T::Id>
    where
        Self: Stocks<T>,
    {
        remove_item_by_id(Stocks::<T>::repository_mut(self), id)
    }

    /// Apply every adjustment in order; one outcome per input, failures isolated.
    pub fn apply_adjustments<T: InventoryItem>(
        &mut self,
        adjustments: impl IntoIterator<Item = StockAdjustment<T::Id>>,
    ) -> Vec<StockOutcome<T::Id>>
    where
        Self: Stocks<T>,
    {
        let repo = Stocks::<T>::repository_mut(self);
        adjustments
            .into_iter()
            .map(|adj| increase_stock(&mut *repo, &adj.id, adj.delta))
            .collect()
    }
}

impl Stocks<ElectronicItem> for StockManager {
    fn repository(&self) -> &Repository<ElectronicItem> {
        &self.electronics
    }

    fn repository_mut(&mut self) -> &mut Repository<ElectronicItem> {
        &mut self.electronics
    }
}

impl Stocks<GroceryItem> for StockManager {
    fn repository(&self) -> &Repository<GroceryItem> {
        &self.groceries
    }

    fn repository_mut(&mut self) -> &mut Repository<GroceryItem> {
        &mut self.groceries
    }
}
