//! Column sniffer: linearises heterogeneous punch tables into one sorted
//! punch stream.
//!
//! A row may carry several time columns side by side (entry, lunch out,
//! lunch in, exit); each accepted cell becomes its own punch and the final
//! sort turns the "horizontal" layout into a vertical one.

use crate::core::keywords::{GROUP, PERSON, SUMMARY};
use crate::models::{CellValue, DEFAULT_GROUP, Punch, Row, Table};
use crate::utils::time::{is_midnight, parse_datetime, round_to_second};
use chrono::{Datelike, NaiveDateTime};
use tracing::debug;

/// Oldest year accepted for a punch. Duration cells misread as dates land in 1899/1900.
pub const MIN_PUNCH_YEAR: i32 = 2020;

/// Text cells of this length or shorter are never dates ("08:00", "12345678").
const MIN_DATE_TEXT_LEN: usize = 8;

pub fn normalize(table: &Table) -> Vec<Punch<'_>> {
    let mut punches = Vec::new();
    let mut skipped = 0usize;

    for (index, row) in table.rows.iter().enumerate() {
        let before = punches.len();
        if !collect_row(row, &mut punches) {
            skipped += 1;
            debug!(row = index, source = %table.source, "no person column, row skipped");
        } else if punches.len() == before {
            debug!(row = index, source = %table.source, "row without punches");
        }
    }

    sort_punches(&mut punches);

    debug!(
        punches = punches.len(),
        skipped,
        source = %table.source,
        "table normalized"
    );
    punches
}

/// Stable sort by person, then timestamp.
pub fn sort_punches(punches: &mut [Punch<'_>]) {
    punches.sort_by(|a, b| {
        a.person
            .cmp(&b.person)
            .then_with(|| a.timestamp.cmp(&b.timestamp))
    });
}

/// Push the row's punches; `false` when the row has no usable person.
fn collect_row<'a>(row: &'a Row, out: &mut Vec<Punch<'a>>) -> bool {
    let Some(person_header) = PERSON.find_header(row) else {
        return false;
    };

    let person = row
        .get(person_header)
        .map(CellValue::as_text)
        .unwrap_or_default();
    if person.is_empty() {
        return false;
    }

    let group_header = GROUP.find_header(row);
    let group = group_header
        .and_then(|h| row.get(h))
        .map(CellValue::as_text)
        .filter(|g| !g.is_empty())
        .unwrap_or_else(|| DEFAULT_GROUP.to_string());

    for (header, value) in &row.cells {
        if header == person_header || Some(header.as_str()) == group_header {
            continue;
        }
        if SUMMARY.matches(header) {
            continue;
        }

        if let Some(ts) = candidate_timestamp(value) {
            out.push(Punch::new(&person, ts, &group, row));
        }
    }

    true
}

/// Date-like cell that survives the midnight and epoch heuristics.
pub fn candidate_timestamp(value: &CellValue) -> Option<NaiveDateTime> {
    let raw = match value {
        CellValue::DateTime(dt) => *dt,
        CellValue::Text(s) if s.trim().chars().count() > MIN_DATE_TEXT_LEN => parse_datetime(s)?,
        _ => return None,
    };

    let ts = round_to_second(raw);

    if is_midnight(&ts) {
        // bare reference date without time
        return None;
    }
    if ts.year() < MIN_PUNCH_YEAR {
        return None;
    }

    Some(ts)
}
