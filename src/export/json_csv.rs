// src/export/json_csv.rs

use crate::errors::{AppError, AppResult};
use crate::export::model::Sheet;
use serde_json::{Map, Value};

/// CSV bytes of one sheet (header row included).
pub(crate) fn encode_csv(sheet: &Sheet) -> AppResult<Vec<u8>> {
    let mut wtr = csv::Writer::from_writer(Vec::new());

    wtr.write_record(&sheet.headers)
        .map_err(|e| AppError::Export(format!("CSV write error: {e}")))?;

    for row in &sheet.rows {
        wtr.write_record(row)
            .map_err(|e| AppError::Export(format!("CSV write error: {e}")))?;
    }

    wtr.into_inner()
        .map_err(|e| AppError::Export(format!("CSV flush error: {e}")))
}

fn sheet_to_json(sheet: &Sheet) -> Value {
    let rows = sheet
        .rows
        .iter()
        .map(|row| {
            let obj: Map<String, Value> = sheet
                .headers
                .iter()
                .zip(row.iter())
                .map(|(h, v)| (h.clone(), Value::String(v.clone())))
                .collect();
            Value::Object(obj)
        })
        .collect();
    Value::Array(rows)
}

/// JSON pretty-printed: an array of objects for one sheet, an object keyed
/// by sheet name for several.
pub(crate) fn encode_json(sheets: &[Sheet]) -> AppResult<Vec<u8>> {
    let value = match sheets {
        [single] => sheet_to_json(single),
        many => Value::Object(
            many.iter()
                .map(|s| (s.name.clone(), sheet_to_json(s)))
                .collect(),
        ),
    };

    serde_json::to_vec_pretty(&value)
        .map_err(|e| AppError::Export(format!("JSON serialization error: {e}")))
}
