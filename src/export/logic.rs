// src/export/logic.rs

use crate::errors::AppResult;
use crate::export::fs_utils::{ensure_writable, write_bytes};
use crate::export::json_csv::{encode_csv, encode_json};
use crate::export::model::Sheet;
use crate::export::xlsx::encode_xlsx;
use crate::export::{ExportFormat, notify_export_success};
use crate::ui::messages::{info, warning};
use chrono::{Local, NaiveDateTime};
use std::path::Path;

/// Encode sheets in the requested format.
///
/// csv keeps the first sheet only; json and xlsx keep them all.
pub fn encode(format: ExportFormat, sheets: &[Sheet]) -> AppResult<Vec<u8>> {
    match format {
        ExportFormat::Csv => match sheets.first() {
            Some(sheet) => encode_csv(sheet),
            None => Ok(Vec::new()),
        },
        ExportFormat::Json => encode_json(sheets),
        ExportFormat::Xlsx => encode_xlsx(sheets),
    }
}

/// `<label>_<YYYYmmdd_HHMMSS>.<ext>`
pub fn suggested_filename(label: &str, format: ExportFormat, at: NaiveDateTime) -> String {
    let stem: String = label
        .chars()
        .map(|c| if c.is_alphanumeric() || c == '-' { c } else { '_' })
        .collect();
    format!("{}_{}.{}", stem, at.format("%Y%m%d_%H%M%S"), format.as_str())
}

/// Logica di alto livello per l'export.
pub struct ExportLogic;

impl ExportLogic {
    /// Encode `sheets` and write them to `path` (asks before overwriting
    /// unless `force`). Nothing is written when every sheet is empty.
    pub fn write(
        sheets: &[Sheet],
        format: ExportFormat,
        path: &Path,
        force: bool,
    ) -> AppResult<bool> {
        if sheets.iter().all(Sheet::is_empty) {
            warning("No records to export.");
            return Ok(false);
        }

        if sheets.len() > 1 && !format.supports_sheets() {
            warning(format!(
                "{} keeps only the first sheet ('{}'); use xlsx or json for all {} sheets.",
                format.as_str(),
                sheets[0].name,
                sheets.len()
            ));
        }

        ensure_writable(path, force)?;

        info(format!(
            "Exporting to {}: {}",
            format.as_str().to_uppercase(),
            path.display()
        ));
        let bytes = encode(format, sheets)?;
        write_bytes(path, &bytes)?;

        notify_export_success(&format.as_str().to_uppercase(), path);
        Ok(true)
    }

    /// Default output path inside `dir` for a run labelled `label`.
    pub fn default_path(dir: &Path, label: &str, format: ExportFormat) -> std::path::PathBuf {
        dir.join(suggested_filename(
            label,
            format,
            Local::now().naive_local(),
        ))
    }
}
