/// Default header of the column rows are grouped by.
pub const DEFAULT_KEY_COLUMN: &str = "Variant SKU";
/// Default header of the column rows are ranked by within a group.
pub const DEFAULT_PRICE_COLUMN: &str = "Variant Price";
/// Default header of the column the written workbooks are ordered by.
pub const DEFAULT_DISPLAY_COLUMN: &str = "Title";

/// Column names a deduplication run operates on.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColumnSettings {
    /// Column used to group rows.
    pub key: String,
    /// Column used to pick the surviving row of each group.
    pub price: String,
    /// Optional column used to order the output.
    pub display: String,
}

impl ColumnSettings {
    pub fn new(
        key: impl Into<String>,
        price: impl Into<String>,
        display: impl Into<String>,
    ) -> Self {
        Self {
            key: key.into(),
            price: price.into(),
            display: display.into(),
        }
    }

    /// Columns that must be present in the input header.
    pub fn required(&self) -> [&str; 2] {
        [self.key.as_str(), self.price.as_str()]
    }
}

impl Default for ColumnSettings {
    fn default() -> Self {
        Self::new(
            DEFAULT_KEY_COLUMN,
            DEFAULT_PRICE_COLUMN,
            DEFAULT_DISPLAY_COLUMN,
        )
    }
}
