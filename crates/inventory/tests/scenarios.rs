//! End-to-end stock scenarios against the public API.

use chrono::NaiveDate;

use stockroom_core::{Entity, ErrorKind, InventoryError, ItemId, Quantity};
use stockroom_inventory::{ElectronicItem, GroceryItem, InventoryItem, Repository, StockManager, StockOutcome};

fn qty(n: i64) -> Quantity {
    Quantity::new(n).unwrap()
}

fn expiry() -> NaiveDate {
    NaiveDate::from_ymd_opt(2027, 10, 19).unwrap()
}

#[test]
fn laptop_stock_increase() {
    let mut manager = StockManager::new();
    manager
        .add_item(ElectronicItem::new(ItemId::new(1), "Laptop", qty(10), "Dell", 24))
        .unwrap();

    let outcome = manager.increase_stock::<ElectronicItem>(&ItemId::new(1), 5);

    assert!(outcome.is_success());
    assert_eq!(
        manager.electronics().get_by_id(&ItemId::new(1)).unwrap().quantity(),
        qty(15)
    );
}

#[test]
fn rice_negative_update_is_rejected() {
    let mut repo = Repository::new();
    repo.add(GroceryItem::new(ItemId::new(100), "Rice", qty(50), expiry()))
        .unwrap();

    let err = repo.update_quantity(&ItemId::new(100), -5).unwrap_err();

    assert_eq!(err.kind(), ErrorKind::InvalidQuantity);
    assert_eq!(repo.get_by_id(&ItemId::new(100)).unwrap().quantity(), qty(50));
}

#[test]
fn removing_unknown_id_leaves_store_unchanged() {
    let mut manager = StockManager::new();
    manager
        .add_item(GroceryItem::new(ItemId::new(100), "Rice", qty(50), expiry()))
        .unwrap();
    let before = manager.groceries().list_all();

    let outcome = manager.remove_item_by_id::<GroceryItem>(&ItemId::new(999));

    assert_eq!(
        outcome,
        StockOutcome::Rejected {
            id: ItemId::new(999),
            error: InventoryError::not_found(999),
        }
    );
    assert_eq!(manager.groceries().list_all(), before);
}

#[test]
fn duplicate_id_keeps_single_entry() {
    let mut repo = Repository::new();
    repo.add(ElectronicItem::new(ItemId::new(1), "Laptop", qty(10), "Dell", 24))
        .unwrap();

    let err = repo
        .add(ElectronicItem::new(ItemId::new(1), "Laptop", qty(10), "Dell", 24))
        .unwrap_err();

    assert_eq!(err.kind(), ErrorKind::DuplicateKey);
    assert_eq!(repo.list_all().len(), 1);
}

#[test]
fn milk_decrease_then_overdraw() {
    let mut manager = StockManager::new();
    manager
        .add_item(GroceryItem::new(ItemId::new(101), "Milk", qty(30), expiry()))
        .unwrap();

    let first = manager.increase_stock::<GroceryItem>(&ItemId::new(101), -10);
    let second = manager.increase_stock::<GroceryItem>(&ItemId::new(101), -100);

    assert!(first.is_success());
    assert_eq!(second.error().map(|e| e.kind()), Some(ErrorKind::InvalidQuantity));
    assert_eq!(
        manager.groceries().get_by_id(&ItemId::new(101)).unwrap().quantity(),
        qty(20)
    );
}

#[test]
fn list_all_reflects_latest_successful_writes() {
    let mut repo = Repository::new();
    for (id, name) in [(3, "Monitor"), (1, "Laptop"), (2, "Smartphone")] {
        repo.add(ElectronicItem::new(ItemId::new(id), name, qty(1), "Acme", 12))
            .unwrap();
    }
    repo.update_quantity(&ItemId::new(2), 7).unwrap();
    let _ = repo.update_quantity(&ItemId::new(2), -7);
    repo.remove(&ItemId::new(3)).unwrap();

    let listed: Vec<(u32, i64)> = repo
        .list_all()
        .iter()
        .map(|i| (i.id().get(), i.quantity().value()))
        .collect();
    assert_eq!(listed, vec![(1, 1), (2, 7)]);
}
