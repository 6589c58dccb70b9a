use std::path::Path;

use calamine::{DataType, Range, Reader, open_workbook_auto};
use chrono::{NaiveDate, TimeDelta};
use tracing::{debug, instrument};

use crate::catalog::tools::config::ColumnSettings;
use crate::catalog::tools::error::{Result, ToolError};
use crate::catalog::tools::io::ensure_spreadsheet;
use crate::catalog::tools::model::{Row, Table};

/// Reads the first sheet of the workbook at `path` into a [`Table`].
///
/// The first row provides the column names. Every cell is kept as text and
/// rows are numbered from zero in sheet order. Fails with
/// [`ToolError::MissingColumn`] when the key or price column is absent.
#[instrument(level = "info", skip_all, fields(input = %path.display()))]
pub fn read_table(path: &Path, settings: &ColumnSettings) -> Result<Table> {
    let range = read_first_sheet(path)?;
    let table = range_to_table(&range);
    debug!(
        columns = table.columns.len(),
        rows = table.len(),
        "sheet loaded"
    );

    for column in settings.required() {
        table.require_column(column)?;
    }

    Ok(table)
}

/// Opens any supported workbook and returns the cells of its first sheet.
pub fn read_first_sheet(path: &Path) -> Result<Range<DataType>> {
    ensure_spreadsheet(path)?;

    let mut workbook = open_workbook_auto(path)?;
    let range = workbook
        .worksheet_range_at(0)
        .ok_or_else(|| ToolError::InvalidWorkbook("workbook contains no sheets".into()))??;
    Ok(range)
}

/// Converts a sheet range into a table, treating the first row as header.
pub fn range_to_table(range: &Range<DataType>) -> Table {
    let mut rows = range.rows();

    let columns: Vec<String> = match rows.next() {
        Some(header) => header
            .iter()
            .enumerate()
            .map(|(idx, cell)| {
                let name = cell_to_string(Some(cell));
                if name.is_empty() {
                    format!("Unnamed: {idx}")
                } else {
                    name
                }
            })
            .collect(),
        None => Vec::new(),
    };

    let records = rows
        .map(|row| {
            (0..columns.len())
                .map(|idx| cell_to_string(row.get(idx)))
                .collect::<Vec<_>>()
        })
        .filter(|values| values.iter().any(|value| !value.is_empty()))
        .enumerate()
        .map(|(idx, values)| Row::new(idx, values))
        .collect();

    Table::new(columns, records)
}

/// Layout used for date and date-time cells.
pub const DATETIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Renders a cell the way it reads in the spreadsheet, without numeric
/// reinterpretation of strings. Date cells become `YYYY-MM-DD HH:MM:SS`
/// rather than their serial number.
pub fn cell_to_string(cell: Option<&DataType>) -> String {
    match cell {
        Some(DataType::String(value)) => value.clone(),
        Some(DataType::Float(value)) => value.to_string(),
        Some(DataType::Int(value)) => value.to_string(),
        Some(DataType::Bool(true)) => "TRUE".to_string(),
        Some(DataType::Bool(false)) => "FALSE".to_string(),
        Some(DataType::DateTime(serial)) => {
            serial_to_datetime(*serial).unwrap_or_else(|| serial.to_string())
        }
        Some(DataType::DateTimeIso(value)) => value.replacen('T', " ", 1),
        Some(DataType::Empty) | None => String::new(),
        Some(other) => other.to_string(),
    }
}

/// Converts an Excel 1900-system serial into text, rounded to the second.
fn serial_to_datetime(serial: f64) -> Option<String> {
    if !serial.is_finite() {
        return None;
    }
    let epoch = NaiveDate::from_ymd_opt(1899, 12, 30)?.and_hms_opt(0, 0, 0)?;
    let seconds = (serial * 86_400.0).round() as i64;
    let datetime = epoch.checked_add_signed(TimeDelta::try_seconds(seconds)?)?;
    Some(datetime.format(DATETIME_FORMAT).to_string())
}
