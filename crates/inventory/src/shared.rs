//! Lock-guarded repository handle for concurrent callers.

use std::sync::{Arc, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use stockroom_core::{InventoryResult, Quantity};

use crate::item::InventoryItem;
use crate::repository::Repository;

/// Cloneable handle to one [`Repository`] behind a reader/writer lock.
///
/// - At most one mutation (`add`, `remove`, `update_quantity`, `adjust_quantity`)
///   is in flight at a time.
/// - Reads run concurrently with each other but never observe a half-applied write.
/// - Reads return owned values, so later writes never affect what a reader holds.
///
/// A poisoned lock is recovered: every repository operation validates before
/// it mutates, so a panicking holder cannot leave a partial change behind.
#[derive(Debug)]
pub struct SharedRepository<T: InventoryItem> {
    inner: Arc<RwLock<Repository<T>>>,
}

impl<T: InventoryItem> SharedRepository<T> {
    pub fn new() -> Self {
        Self::from_repository(Repository::new())
    }

    pub fn from_repository(repository: Repository<T>) -> Self {
        Self {
            inner: Arc::new(RwLock::new(repository)),
        }
    }

    fn read(&self) -> RwLockReadGuard<'_, Repository<T>> {
        self.inner.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, Repository<T>> {
        self.inner.write().unwrap_or_else(PoisonError::into_inner)
    }

    pub fn add(&self, item: T) -> InventoryResult<()> {
        self.write().add(item)
    }

    pub fn get_by_id(&self, id: &T::Id) -> InventoryResult<T> {
        self.read().get_by_id(id).cloned()
    }

    pub fn remove(&self, id: &T::Id) -> InventoryResult<T> {
        self.write().remove(id)
    }

    pub fn list_all(&self) -> Vec<T> {
        self.read().list_all()
    }

    pub fn update_quantity(&self, id: &T::Id, new_quantity: i64) -> InventoryResult<()> {
        self.write().update_quantity(id, new_quantity)
    }

    /// Read-modify-write under a single write lock.
    pub fn adjust_quantity(&self, id: &T::Id, delta: i64) -> InventoryResult<(Quantity, Quantity)> {
        self.write().adjust_quantity(id, delta)
    }

    pub fn len(&self) -> usize {
        self.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.read().is_empty()
    }

    /// Copy of the whole repository taken under one read lock.
    pub fn snapshot(&self) -> Repository<T> {
        self.read().clone()
    }
}

impl<T: InventoryItem> Clone for SharedRepository<T> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<T: InventoryItem> Default for SharedRepository<T> {
    fn default() -> Self {
        Self::new()
    }
}
