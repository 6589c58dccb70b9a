use crate::catalog::tools::error::{Result, ToolError};

/// A single data row of the export.
///
/// Values are positional and line up with the owning [`Table::columns`]. All
/// cells are kept as text so identifiers never pass through a float.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Row {
    /// Zero-based position of the row in the source sheet, header excluded.
    pub original_index: usize,
    /// Cell text, one entry per column.
    pub values: Vec<String>,
}

impl Row {
    /// Creates a new row with the provided position and cell values.
    pub fn new(original_index: usize, values: Vec<String>) -> Self {
        Self {
            original_index,
            values,
        }
    }

    /// Returns the cell at `column`.
    ///
    /// # Panics
    ///
    /// Panics if `column` is outside the row. Rows built through [`Table::new`]
    /// always span the full header.
    pub fn get(&self, column: usize) -> &str {
        &self.values[column]
    }
}

/// Ordered rows sharing one header.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Table {
    pub columns: Vec<String>,
    pub rows: Vec<Row>,
}

impl Table {
    /// Builds a table, padding or truncating each row to the header width.
    pub fn new(columns: Vec<String>, rows: Vec<Row>) -> Self {
        let width = columns.len();
        let rows = rows
            .into_iter()
            .map(|mut row| {
                row.values.resize(width, String::new());
                row
            })
            .collect();
        Self { columns, rows }
    }

    /// Builds a table from plain string rows, numbering them in order.
    pub fn from_records<I, R, S>(columns: &[&str], records: I) -> Self
    where
        I: IntoIterator<Item = R>,
        R: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let columns = columns.iter().map(|name| name.to_string()).collect();
        let rows = records
            .into_iter()
            .enumerate()
            .map(|(idx, record)| Row::new(idx, record.into_iter().map(Into::into).collect()))
            .collect();
        Self::new(columns, rows)
    }

    /// Returns a table sharing this table's header with the given rows.
    pub fn with_rows(&self, rows: Vec<Row>) -> Self {
        Self {
            columns: self.columns.clone(),
            rows,
        }
    }

    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.columns.iter().position(|column| column == name)
    }

    /// Like [`Table::column_index`] but fails with [`ToolError::MissingColumn`].
    pub fn require_column(&self, name: &str) -> Result<usize> {
        self.column_index(name)
            .ok_or_else(|| ToolError::MissingColumn(name.to_string()))
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Iterates over the original indices of the rows in table order.
    pub fn original_indices(&self) -> impl Iterator<Item = usize> + '_ {
        self.rows.iter().map(|row| row.original_index)
    }
}
