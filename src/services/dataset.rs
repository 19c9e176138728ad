//! Embedded Dataset Loading
//!
//! Builds the two process-wide tables from the CSV text in `constants`. Both
//! loads run once at startup; any failure here means the embedded data was
//! edited into an invalid state and the only fix is in source.

use crate::constants::{ACTIVITY_CSV, MARKET_CSV};
use crate::error::{AppError, Result};
use crate::models::Table;
use std::collections::HashSet;

/// Load the altcoin market metrics table.
pub fn load_market() -> Result<Table> {
    let table = Table::from_csv(MARKET_CSV)?;
    ensure_unique_keys(&table)?;
    Ok(table)
}

/// Load the repository activity metrics table.
pub fn load_activity() -> Result<Table> {
    let table = Table::from_csv(ACTIVITY_CSV)?;
    ensure_unique_keys(&table)?;
    Ok(table)
}

/// The first column is the asset-name key; duplicates would silently merge
/// categories in every grouped chart, so reject them at load.
fn ensure_unique_keys(table: &Table) -> Result<()> {
    let names = table.column_names();
    let key = names
        .first()
        .ok_or_else(|| AppError::Parse("table has no columns".to_string()))?;

    let mut seen = HashSet::new();
    for value in table.text(key)? {
        if !seen.insert(value.as_str()) {
            return Err(AppError::Parse(format!(
                "duplicate key '{}' in column '{}'",
                value, key
            )));
        }
    }
    Ok(())
}
