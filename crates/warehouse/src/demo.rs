//! The warehouse walkthrough: seed, list, provoke each failure kind, adjust.

use std::io::Write;

use stockroom_core::{ItemId, Quantity};
use stockroom_inventory::{ElectronicItem, GroceryItem, StockManager};

use crate::config::WarehouseConfig;
use crate::report::{describe_outcome, write_listing};
use crate::seed;

/// Run the full walkthrough, writing listings and reports to `out`.
///
/// Inventory failures are reported and the run carries on; only output errors
/// abort it. Returns the manager in its final state.
pub fn run(config: &WarehouseConfig, out: &mut impl Write) -> anyhow::Result<StockManager> {
    let mut manager = StockManager::new();

    // Seeding failures point at bad seed data; report them distinctly.
    if let Err(e) = manager.seed(seed::electronics()?, seed::groceries(config.today)?) {
        tracing::error!(error = %e, "seeding failed");
        writeln!(out, "[SeedData] {e}")?;
    }

    write_listing(out, "Grocery Items", manager.groceries(), config.report_format)?;
    write_listing(out, "Electronic Items", manager.electronics(), config.report_format)?;

    writeln!(out, "== Triggering Errors ==")?;

    let tablet = ElectronicItem::new(ItemId::new(1), "Tablet", Quantity::new(5)?, "Apple", 12);
    if let Err(e) = manager.add_item(tablet) {
        tracing::warn!(error = %e, "duplicate item rejected");
        writeln!(out, "[Duplicate] {e}")?;
    }

    let removal = manager.remove_item_by_id::<GroceryItem>(&ItemId::new(999));
    writeln!(out, "[RemoveItem] {}", describe_outcome(&removal))?;

    if let Err(e) = manager.groceries_mut().update_quantity(&ItemId::new(100), -5) {
        tracing::warn!(error = %e, kind = ?e.kind(), "quantity update rejected");
        writeln!(out, "[UpdateQuantity] {e}")?;
    }

    writeln!(out)?;
    writeln!(out, "== Stock Adjustments ==")?;
    let outcomes = [
        manager.increase_stock::<ElectronicItem>(&ItemId::new(2), 5),
        manager.increase_stock::<GroceryItem>(&ItemId::new(101), -10),
    ];
    for outcome in &outcomes {
        writeln!(out, "[IncreaseStock] {}", describe_outcome(outcome))?;
    }
    writeln!(out)?;

    write_listing(out, "Grocery Items", manager.groceries(), config.report_format)?;
    write_listing(out, "Electronic Items", manager.electronics(), config.report_format)?;

    Ok(manager)
}
