use std::path::{Path, PathBuf};

use tracing::{debug, info, instrument};

use crate::catalog::tools::config::ColumnSettings;
use crate::catalog::tools::error::Result;
use crate::catalog::tools::io::{excel_read, excel_write, output_paths};
use crate::catalog::tools::normalize::normalize_table;
use crate::catalog::tools::select::{deduplicate, order_for_display};

/// Summary of a completed deduplication run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DedupeReport {
    pub deduped_path: PathBuf,
    pub removed_path: PathBuf,
    pub kept_rows: usize,
    pub removed_rows: usize,
    /// Whether the outputs were ordered by the display column.
    pub sorted_by_display: bool,
    pub display_column: String,
}

/// Deduplicates the workbook at `input`, writing the surviving rows and the
/// discarded rows to two sibling workbooks.
///
/// Nothing is written unless the input loads and carries the key and price
/// columns.
#[instrument(level = "info", skip_all, fields(input = %input.display()))]
pub fn run(input: &Path, settings: &ColumnSettings) -> Result<DedupeReport> {
    let table = excel_read::read_table(input, settings)?;
    info!(rows = table.len(), "read rows from workbook");

    let table = normalize_table(&table);
    let selection = deduplicate(&table, settings)?;
    info!(
        kept = selection.kept.len(),
        removed = selection.removed.len(),
        "selected highest price per key"
    );

    let (kept, sorted_by_display) = order_for_display(&selection.kept, &settings.display);
    let (removed, _) = order_for_display(&selection.removed, &settings.display);
    debug!(sorted_by_display, display = %settings.display, "output ordered");

    let paths = output_paths(input);
    excel_write::write_table(&paths.deduped, &kept)?;
    excel_write::write_table(&paths.removed, &removed)?;

    excel_write::enforce_text_format(&paths.deduped)?;
    excel_write::enforce_text_format(&paths.removed)?;

    Ok(DedupeReport {
        deduped_path: paths.deduped,
        removed_path: paths.removed,
        kept_rows: kept.len(),
        removed_rows: removed.len(),
        sorted_by_display,
        display_column: settings.display.clone(),
    })
}
