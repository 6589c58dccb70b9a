use std::path::PathBuf;

use thiserror::Error;

/// Convenient alias for fallible results returned throughout the crate.
pub type Result<T> = std::result::Result<T, ToolError>;

/// Error type covering the different failure cases that can occur while a
/// product export is loaded, deduplicated, or written back out.
///
/// Every variant is terminal for a run: the CLI reports the message and exits
/// with a non-zero status.
#[derive(Debug, Error)]
pub enum ToolError {
    /// Raised when the user provides a path that does not exist.
    #[error("File not found: {}", .0.display())]
    FileNotFound(PathBuf),

    /// Raised when the input does not carry a spreadsheet extension.
    #[error(
        "Input must be an Excel file (.xlsx/.xlsm/.xls): {}",
        .0.display()
    )]
    InvalidFormat(PathBuf),

    /// Errors bubbled up from the Excel reader implementation.
    #[error("Failed to read Excel: {0}")]
    ReadError(#[from] calamine::Error),

    /// Raised when a workbook opens but does not follow the expected layout.
    #[error("Failed to read Excel: {0}")]
    InvalidWorkbook(String),

    /// Raised when the key or price column is absent from the header row.
    #[error("Missing column: '{0}'")]
    MissingColumn(String),

    /// Errors bubbled up from the Excel writer implementation.
    #[error("Failed to write Excel output: {0}")]
    WriteError(#[from] rust_xlsxwriter::XlsxError),

    /// Raised when the output workbooks exist but the text formatting pass
    /// over identifier columns could not be completed.
    #[error("Wrote output, but failed to enforce text formatting: {0}")]
    FormatError(String),

    /// Raised when the tracing subscriber fails to initialise.
    #[error("failed to initialise logging: {0}")]
    Logging(String),
}
