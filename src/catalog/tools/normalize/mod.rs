//! Canonical plain-text rendering of identifier-like cells.
//!
//! Spreadsheet tools happily turn long numeric identifiers into floats and
//! print them as `1.23E+10` or `42.0`. Every column classified as
//! identifier-like is rewritten to the plain digits here, both before
//! deduplication and again when the output workbooks are formatted.

use std::str::FromStr;

use bigdecimal::BigDecimal;
use once_cell::sync::Lazy;
use regex::Regex;

use crate::catalog::tools::model::Table;

/// Columns that are always treated as identifiers, in addition to any column
/// whose name contains `id`.
pub const FORCE_TEXT_COLUMNS: [&str; 4] = ["ID", "Variant ID", "Image ID", "Inventory Item ID"];

/// Largest decimal exponent expanded to plain digits.
pub const MAX_PLAIN_EXPONENT: i64 = 4096;

static SCIENTIFIC: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[+-]?\d+(\.\d+)?[eE][+-]?\d+$").expect("valid scientific notation regex")
});

static INTEGRAL_FLOAT: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\d+\.0$").expect("valid integral float regex"));

/// Returns `true` when values of the named column must be stored as text.
pub fn is_identifier_column(name: &str) -> bool {
    name.to_lowercase().contains("id") || FORCE_TEXT_COLUMNS.contains(&name)
}

/// Positions of the identifier-like columns in `columns`.
pub fn identifier_columns<S: AsRef<str>>(columns: &[S]) -> Vec<usize> {
    columns
        .iter()
        .enumerate()
        .filter(|(_, name)| is_identifier_column(name.as_ref()))
        .map(|(idx, _)| idx)
        .collect()
}

/// Renders a cell value as plain text, expanding scientific notation and
/// dropping a spurious `.0` from integral values.
///
/// Missing values, blanks and `nan` collapse to the empty string. Expansion
/// is exact for any number of digits. Values that look like scientific
/// notation but cannot be parsed, or whose exponent exceeds
/// [`MAX_PLAIN_EXPONENT`], are returned unchanged. The function never fails
/// and is idempotent.
pub fn to_plain_string(value: Option<&str>) -> String {
    let Some(value) = value else {
        return String::new();
    };

    let trimmed = value.trim();
    if trimmed.is_empty() || trimmed.eq_ignore_ascii_case("nan") {
        return String::new();
    }

    if !SCIENTIFIC.is_match(trimmed) {
        if INTEGRAL_FLOAT.is_match(trimmed) {
            return trimmed[..trimmed.len() - 2].to_string();
        }
        return trimmed.to_string();
    }

    match parse_decimal(trimmed) {
        Some(decimal) => plain_decimal(&decimal),
        None => trimmed.to_string(),
    }
}

/// Parses plain or scientific decimal text without going through `f64`.
///
/// Exponents beyond [`MAX_PLAIN_EXPONENT`] are rejected so a single cell
/// cannot demand an arbitrarily large expansion.
pub(crate) fn parse_decimal(text: &str) -> Option<BigDecimal> {
    let unsigned = text.strip_prefix('+').unwrap_or(text);
    let decimal = BigDecimal::from_str(unsigned).ok()?;
    let (_, scale) = decimal.as_bigint_and_exponent();
    (scale.abs() <= MAX_PLAIN_EXPONENT).then_some(decimal)
}

/// Renders a decimal in positional notation: integers without a decimal
/// point, fractions without trailing zeros.
fn plain_decimal(decimal: &BigDecimal) -> String {
    let (digits, scale) = decimal.normalized().as_bigint_and_exponent();
    let digits = digits.to_string();
    if digits == "0" {
        return digits;
    }

    let (sign, magnitude) = match digits.strip_prefix('-') {
        Some(magnitude) => ("-", magnitude),
        None => ("", digits.as_str()),
    };

    if scale <= 0 {
        let zeros = "0".repeat(scale.unsigned_abs() as usize);
        return format!("{sign}{magnitude}{zeros}");
    }

    let scale = scale as usize;
    let padded = if magnitude.len() <= scale {
        format!("{}{magnitude}", "0".repeat(scale + 1 - magnitude.len()))
    } else {
        magnitude.to_string()
    };
    let (whole, fraction) = padded.split_at(padded.len() - scale);
    format!("{sign}{whole}.{fraction}")
}

/// Returns a copy of `table` with every identifier-like column rewritten
/// through [`to_plain_string`].
pub fn normalize_table(table: &Table) -> Table {
    let targets = identifier_columns(&table.columns);
    let rows = table
        .rows
        .iter()
        .map(|row| {
            let mut row = row.clone();
            for &idx in &targets {
                if let Some(cell) = row.values.get_mut(idx) {
                    *cell = to_plain_string(Some(cell.as_str()));
                }
            }
            row
        })
        .collect();
    table.with_rows(rows)
}
