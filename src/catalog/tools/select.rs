use std::cmp::Ordering;

use bigdecimal::BigDecimal;
use tracing::{debug, instrument};

use crate::catalog::tools::config::ColumnSettings;
use crate::catalog::tools::error::Result;
use crate::catalog::tools::model::{Row, Table};
use crate::catalog::tools::normalize::parse_decimal;

/// Result of splitting a table into surviving and discarded rows.
#[derive(Debug, Clone, PartialEq)]
pub struct Selection {
    /// One row per distinct key value.
    pub kept: Table,
    /// Every other row, in source order.
    pub removed: Table,
}

/// Parses a price cell, ignoring thousands separators.
///
/// Blank or unparseable prices yield `None`, which ranks below every parsed
/// price.
pub fn parse_price(raw: &str) -> Option<BigDecimal> {
    let cleaned = raw.trim().replace(',', "");
    if cleaned.is_empty() {
        return None;
    }
    parse_decimal(&cleaned)
}

/// Keeps the highest-priced row of every key group.
///
/// Rows are stably ordered by key ascending, price descending and source
/// position ascending; the first row of each key run survives. Rows with
/// equal key text, including empty keys, share a group.
#[instrument(level = "debug", skip_all, fields(rows = table.len(), key = %settings.key))]
pub fn deduplicate(table: &Table, settings: &ColumnSettings) -> Result<Selection> {
    let key_idx = table.require_column(&settings.key)?;
    let price_idx = table.require_column(&settings.price)?;

    let mut ranked: Vec<(&Row, Option<BigDecimal>)> = table
        .rows
        .iter()
        .map(|row| (row, parse_price(row.get(price_idx))))
        .collect();

    ranked.sort_by(|(lhs, lhs_price), (rhs, rhs_price)| {
        lhs.get(key_idx)
            .cmp(rhs.get(key_idx))
            .then_with(|| rhs_price.cmp(lhs_price))
            .then_with(|| lhs.original_index.cmp(&rhs.original_index))
    });

    let mut kept = Vec::new();
    let mut removed = Vec::new();
    let mut current_key: Option<&str> = None;

    for (row, _) in ranked {
        let key = row.get(key_idx);
        if current_key == Some(key) {
            removed.push(row.clone());
        } else {
            current_key = Some(key);
            kept.push(row.clone());
        }
    }

    removed.sort_by_key(|row| row.original_index);
    debug!(kept = kept.len(), removed = removed.len(), "rows partitioned");

    Ok(Selection {
        kept: table.with_rows(kept),
        removed: table.with_rows(removed),
    })
}

/// Orders a table for presentation.
///
/// With the display column present rows are sorted by its text, blanks last,
/// then by source position. Without it the source order is restored. The
/// returned flag tells whether the display column was used.
pub fn order_for_display(table: &Table, display_column: &str) -> (Table, bool) {
    let mut rows = table.rows.clone();

    match table.column_index(display_column) {
        Some(idx) => {
            rows.sort_by(|lhs, rhs| {
                compare_display(lhs.get(idx), rhs.get(idx))
                    .then_with(|| lhs.original_index.cmp(&rhs.original_index))
            });
            (table.with_rows(rows), true)
        }
        None => {
            rows.sort_by_key(|row| row.original_index);
            (table.with_rows(rows), false)
        }
    }
}

fn compare_display(lhs: &str, rhs: &str) -> Ordering {
    match (lhs.is_empty(), rhs.is_empty()) {
        (true, true) => Ordering::Equal,
        (true, false) => Ordering::Greater,
        (false, true) => Ordering::Less,
        (false, false) => lhs.cmp(rhs),
    }
}
