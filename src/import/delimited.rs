use super::empty_header;
use crate::errors::{AppError, AppResult};
use crate::models::{CellValue, Row, Table};

const CANDIDATE_DELIMITERS: [u8; 4] = [b';', b',', b'\t', b'|'];

/// Pick the delimiter occurring most often in the header line (`;` on ties,
/// the usual separator of Brazilian exports).
fn sniff_delimiter(text: &str) -> u8 {
    let header = text.lines().next().unwrap_or_default();
    let mut best = CANDIDATE_DELIMITERS[0];
    let mut best_count = 0;
    for d in CANDIDATE_DELIMITERS {
        let count = header.bytes().filter(|b| *b == d).count();
        if count > best_count {
            best = d;
            best_count = count;
        }
    }
    best
}

/// Delimited cells stay text: ids keep their leading zeros and decimal
/// commas survive a merge. Dates are parsed later by the normalizer.
fn to_cell(raw: &str) -> CellValue {
    let s = raw.trim();
    if s.is_empty() {
        CellValue::Empty
    } else {
        CellValue::Text(s.to_string())
    }
}

/// Decode delimited text (CSV, TSV, `;`-separated). Latin-1 bytes are
/// replaced lossily; the UTF-8 BOM is stripped.
pub(super) fn decode(bytes: &[u8], file_name: &str) -> AppResult<Table> {
    let text = String::from_utf8_lossy(bytes);
    let text = text.trim_start_matches('\u{feff}');

    if text.trim().is_empty() {
        return Ok(Table::new(file_name, Vec::new()));
    }

    let mut rdr = csv::ReaderBuilder::new()
        .delimiter(sniff_delimiter(text))
        .flexible(true)
        .has_headers(true)
        .from_reader(text.as_bytes());

    let headers: Vec<String> = rdr
        .headers()
        .map_err(|e| AppError::Decode(format!("{file_name}: {e}")))?
        .iter()
        .enumerate()
        .map(|(i, h)| {
            let h = h.trim();
            if h.is_empty() {
                empty_header(i + 1)
            } else {
                h.to_string()
            }
        })
        .collect();

    let mut rows = Vec::new();
    for record in rdr.records() {
        let record = record.map_err(|e| AppError::Decode(format!("{file_name}: {e}")))?;

        let mut row = Row::new();
        for (i, field) in record.iter().enumerate() {
            let cell = to_cell(field);
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
