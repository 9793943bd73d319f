//! Initial warehouse contents.

use chrono::{Days, Months, NaiveDate};

use stockroom_core::{InventoryResult, ItemId, Quantity};
use stockroom_inventory::{ElectronicItem, GroceryItem};

pub fn electronics() -> InventoryResult<Vec<ElectronicItem>> {
    Ok(vec![
        ElectronicItem::new(ItemId::new(1), "Laptop", Quantity::new(10)?, "Dell", 24),
        ElectronicItem::new(ItemId::new(2), "Smartphone", Quantity::new(20)?, "Samsung", 12),
    ])
}

/// Groceries with expiry dates relative to `today`.
pub fn groceries(today: NaiveDate) -> InventoryResult<Vec<GroceryItem>> {
    Ok(vec![
        GroceryItem::new(ItemId::new(100), "Rice (5kg)", Quantity::new(50)?, today + Months::new(12)),
        GroceryItem::new(ItemId::new(101), "Milk", Quantity::new(30)?, today + Days::new(20)),
    ])
}

#[cfg(test)]
mod tests {
    use super::*;
    use stockroom_inventory::StockManager;

    #[test]
    fn seed_data_has_unique_ids() {
        let today = NaiveDate::from_ymd_opt(2026, 10, 19).unwrap();
        let mut manager = StockManager::new();
        manager
            .seed(electronics().unwrap(), groceries(today).unwrap())
            .unwrap();

        assert_eq!(manager.electronics().len(), 2);
        assert_eq!(manager.groceries().len(), 2);
    }

    #[test]
    fn expiry_dates_follow_today() {
        let today = NaiveDate::from_ymd_opt(2026, 10, 19).unwrap();
        let items = groceries(today).unwrap();

        assert_eq!(items[0].expiry_date(), NaiveDate::from_ymd_opt(2027, 10, 19).unwrap());
        assert_eq!(items[1].expiry_date(), NaiveDate::from_ymd_opt(2026, 11, 8).unwrap());
    }
}
