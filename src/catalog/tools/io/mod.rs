//! Workbook adapters and the naming of output files.

pub mod excel_read;
pub mod excel_write;

use std::path::{Path, PathBuf};

use crate::catalog::tools::error::{Result, ToolError};

/// Extensions accepted as input, compared case-insensitively.
pub const SPREADSHEET_EXTENSIONS: [&str; 3] = ["xlsx", "xlsm", "xls"];
/// Extension of every workbook the tool writes.
pub const OUTPUT_EXTENSION: &str = "xlsx";

const DEDUPED_SUFFIX: &str = "_deduped";
const REMOVED_SUFFIX: &str = "_removed_duplicates";

/// Locations of the two workbooks produced for one input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputPaths {
    pub deduped: PathBuf,
    pub removed: PathBuf,
}

/// Derives the output paths next to `input`: `<stem>_deduped.xlsx` and
/// `<stem>_removed_duplicates.xlsx`.
pub fn output_paths(input: &Path) -> OutputPaths {
    let base = input.with_extension("");
    OutputPaths {
        deduped: suffixed(&base, DEDUPED_SUFFIX),
        removed: suffixed(&base, REMOVED_SUFFIX),
    }
}

fn suffixed(base: &Path, suffix: &str) -> PathBuf {
    let mut name = base.as_os_str().to_owned();
    name.push(suffix);
    name.push(".");
    name.push(OUTPUT_EXTENSION);
    PathBuf::from(name)
}

/// Checks that `path` exists and carries a spreadsheet extension.
pub fn ensure_spreadsheet(path: &Path) -> Result<()> {
    if !path.exists() {
        return Err(ToolError::FileNotFound(path.to_path_buf()));
    }

    let supported = path
        .extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| {
            SPREADSHEET_EXTENSIONS
                .iter()
                .any(|known| ext.eq_ignore_ascii_case(known))
        })
        .unwrap_or(false);

    if supported {
        Ok(())
    } else {
        Err(ToolError::InvalidFormat(path.to_path_buf()))
    }
}
