//! Table decoder: file bytes → first sheet as header-keyed rows.
//! The only blocking step of a run; decode is attempted once per file.

mod delimited;
mod merge;
mod spreadsheet;

pub use merge::merge_tables;

use crate::errors::{AppError, AppResult};
use crate::models::Table;
use std::fs;
use std::path::Path;
use tracing::debug;

/// Input family, chosen from the file extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputKind {
    Delimited,
    Spreadsheet,
    Unknown,
}

impl InputKind {
    pub fn from_name(file_name: &str) -> Self {
        let ext = Path::new(file_name)
            .extension()
            .map(|e| e.to_string_lossy().to_ascii_lowercase())
            .unwrap_or_default();

        match ext.as_str() {
            "csv" | "txt" | "tsv" => InputKind::Delimited,
            "xlsx" | "xlsm" | "xlsb" | "xls" | "ods" => InputKind::Spreadsheet,
            _ => InputKind::Unknown,
        }
    }
}

/// Read and decode one file.
pub fn read_table(path: &Path) -> AppResult<Table> {
    let bytes = fs::read(path)
        .map_err(|e| AppError::Decode(format!("{}: {e}", path.display())))?;
    let name = path
        .file_name()
        .map(|n| n.to_string_lossy().to_string())
        .unwrap_or_else(|| path.display().to_string());
    decode(&bytes, &name)
}

/// Decode raw bytes; `file_name` selects the decoder and labels the table.
pub fn decode(bytes: &[u8], file_name: &str) -> AppResult<Table> {
    let table = match InputKind::from_name(file_name) {
        InputKind::Delimited => delimited::decode(bytes, file_name)?,
        InputKind::Spreadsheet => spreadsheet::decode(bytes, file_name)?,
        InputKind::Unknown => spreadsheet::decode(bytes, file_name)
            .or_else(|_| delimited::decode(bytes, file_name))?,
    };

    debug!(rows = table.len(), source = file_name, "table decoded");
    Ok(table)
}

/// Header label for an unnamed column (1-based index).
pub(crate) fn empty_header(index: usize) -> String {
    format!("__EMPTY_{index}")
}
