//! Listing and outcome formatting for the driver's output stream.

use std::fmt::Display;
use std::io::Write;

use serde::Serialize;

use stockroom_inventory::{InventoryItem, Repository, StockOutcome};

use crate::config::ReportFormat;

/// Write a titled listing of every item in `repo`.
pub fn write_listing<T>(
    out: &mut impl Write,
    title: &str,
    repo: &Repository<T>,
    format: ReportFormat,
) -> anyhow::Result<()>
where
    T: InventoryItem + Display + Serialize,
{
    let items = repo.list_all();
    writeln!(out, "== {title} ==")?;
    match format {
        ReportFormat::Text => {
            for item in &items {
                writeln!(out, "{item}")?;
            }
        }
        ReportFormat::Json => {
            serde_json::to_writer_pretty(&mut *out, &items)?;
            writeln!(out)?;
        }
    }
    writeln!(out)?;
    Ok(())
}

/// One human-readable line per stock outcome.
pub fn describe_outcome<Id: Display>(outcome: &StockOutcome<Id>) -> String {
    match outcome {
        StockOutcome::Adjusted { id, current, .. } => format!("Updated Id {id} stock to {current}."),
        StockOutcome::Removed { id } => format!("Removed item with Id {id}."),
        StockOutcome::Rejected { id, error } => format!("Rejected Id {id}: {error}"),
    }
}
