use super::empty_header;
use crate::errors::{AppError, AppResult};
use crate::models::{CellValue, Row, Table};
use crate::utils::time::parse_datetime;
use calamine::{Data, Reader, open_workbook_auto_from_rs};
use std::io::Cursor;

fn to_cell(data: &Data) -> CellValue {
    match data {
        Data::Empty | Data::Error(_) => CellValue::Empty,
        Data::String(s) => {
            if s.trim().is_empty() {
                CellValue::Empty
            } else {
                CellValue::Text(s.trim().to_string())
            }
        }
        Data::Int(i) => CellValue::Number(*i as f64),
        Data::Float(f) => CellValue::Number(*f),
        Data::Bool(b) => CellValue::Bool(*b),
        Data::DateTime(dt) => dt
            .as_datetime()
            .map(CellValue::DateTime)
            .unwrap_or(CellValue::Number(dt.as_f64())),
        Data::DateTimeIso(s) => parse_datetime(s)
            .map(CellValue::DateTime)
            .unwrap_or_else(|| CellValue::Text(s.clone())),
        Data::DurationIso(s) => CellValue::Text(s.clone()),
    }
}

fn header_text(data: &Data, index: usize) -> String {
    let text = match data {
        Data::String(s) => s.trim().to_string(),
        Data::Empty | Data::Error(_) => String::new(),
        other => to_cell(other).as_text(),
    };
    if text.is_empty() {
        empty_header(index + 1)
    } else {
        text
    }
}

/// Decode the first worksheet of an xlsx/xls/xlsb/ods workbook.
pub(super) fn decode(bytes: &[u8], file_name: &str) -> AppResult<Table> {
    let mut workbook = open_workbook_auto_from_rs(Cursor::new(bytes.to_vec()))
        .map_err(|e| AppError::Decode(format!("{file_name}: {e}")))?;

    let range = workbook
        .worksheet_range_at(0)
        .ok_or_else(|| AppError::Decode(format!("{file_name}: workbook has no sheets")))?
        .map_err(|e| AppError::Decode(format!("{file_name}: {e}")))?;

    let mut lines = range.rows();
    let Some(header_line) = lines.next() else {
        return Ok(Table::new(file_name, Vec::new()));
    };

    let headers: Vec<String> = header_line
        .iter()
        .enumerate()
        .map(|(i, d)| header_text(d, i))
        .collect();

    let mut rows = Vec::new();
    for line in lines {
        let mut row = Row::new();
        for (i, data) in line.iter().enumerate() {
            let cell = to_cell(data);
            if cell.is_empty() {
                continue;
            }
            let header = headers.get(i).cloned().unwrap_or_else(|| empty_header(i + 1));
            row.cells.push((header, cell));
        }
        if !row.cells.is_empty() {
            rows.push(row);
        }
    }

    Ok(Table::new(file_name, rows))
}
