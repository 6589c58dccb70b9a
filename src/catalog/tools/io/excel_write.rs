use std::collections::BTreeSet;
use std::fs;
use std::path::Path;

use rust_xlsxwriter::{Format, Workbook};
use tracing::{debug, instrument};

use crate::catalog::tools::error::{Result, ToolError};
use crate::catalog::tools::io::excel_read::{cell_to_string, read_first_sheet};
use crate::catalog::tools::model::Table;
use crate::catalog::tools::normalize::{identifier_columns, to_plain_string};

/// Excel number format code for text cells.
pub const TEXT_FORMAT: &str = "@";

/// Writes the table to a single-sheet workbook at `path`.
///
/// The header row is followed by every row in table order. Empty values are
/// left as blank cells.
#[instrument(level = "info", skip_all, fields(output = %path.display(), rows = table.len()))]
pub fn write_table(path: &Path, table: &Table) -> Result<()> {
    let mut workbook = Workbook::new();
    let worksheet = workbook.add_worksheet();

    for (col_idx, header) in table.columns.iter().enumerate() {
        worksheet.write_string(0, col_idx as u16, header)?;
    }

    for (row_idx, row) in table.rows.iter().enumerate() {
        for (col_idx, cell) in row.values.iter().enumerate() {
            if cell.is_empty() {
                continue;
            }
            worksheet.write_string((row_idx + 1) as u32, col_idx as u16, cell)?;
        }
    }

    workbook.save(path)?;
    Ok(())
}

/// Re-opens a written workbook and stores every identifier-like column as
/// text.
///
/// Identifier values are rewritten through [`to_plain_string`] and receive
/// the `@` number format, header included. The workbook is rendered in
/// memory before the file is replaced, so a failure leaves the previously
/// written data untouched. Returns the number of cells formatted.
#[instrument(level = "info", skip_all, fields(output = %path.display()))]
pub fn enforce_text_format(path: &Path) -> Result<usize> {
    let range = read_first_sheet(path).map_err(format_error)?;
    let (row_offset, col_offset) = range.start().unwrap_or((0, 0));

    let headers: Vec<String> = range
        .rows()
        .next()
        .map(|row| row.iter().map(|cell| cell_to_string(Some(cell))).collect())
        .unwrap_or_default();
    let targets: BTreeSet<usize> = identifier_columns(&headers).into_iter().collect();

    let text = Format::new().set_num_format(TEXT_FORMAT);
    let mut workbook = Workbook::new();
    let worksheet = workbook.add_worksheet();
    let mut formatted = 0usize;

    for (row, col, cell) in range.used_cells() {
        let value = cell_to_string(Some(cell));
        let sheet_row = row_offset + row as u32;
        let sheet_col = (col_offset as usize + col) as u16;
        if value.is_empty() {
            continue;
        }

        if !targets.contains(&col) {
            worksheet
                .write_string(sheet_row, sheet_col, value)
                .map_err(format_error)?;
            continue;
        }

        let value = if row == 0 {
            value
        } else {
            to_plain_string(Some(value.as_str()))
        };
        if value.is_empty() {
            continue;
        }
        worksheet
            .write_string_with_format(sheet_row, sheet_col, value, &text)
            .map_err(format_error)?;
        formatted += 1;
    }

    let buffer = workbook.save_to_buffer().map_err(format_error)?;
    fs::write(path, buffer).map_err(format_error)?;
    debug!(
        columns = targets.len(),
        cells = formatted,
        "identifier columns stored as text"
    );
    Ok(formatted)
}

fn format_error(error: impl std::fmt::Display) -> ToolError {
    ToolError::FormatError(error.to_string())
}
