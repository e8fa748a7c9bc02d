// src/export/model.rs

use crate::models::{DailyWorkerRecord, Row, Shift};
use crate::utils::time::{format_datetime, format_duration, format_time};

/// Uniform tabular payload handed to the encoders: one per worksheet.
#[derive(Debug, Clone, PartialEq)]
pub struct Sheet {
    pub name: String,
    pub headers: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

impl Sheet {
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

/// A flat record type with a fixed column layout.
pub trait ExportRecord {
    fn headers() -> Vec<&'static str>;
    fn to_row(&self) -> Vec<String>;
}

pub fn sheet_from_records<T: ExportRecord>(name: &str, records: &[T]) -> Sheet {
    Sheet {
        name: name.to_string(),
        headers: T::headers().into_iter().map(str::to_string).collect(),
        rows: records.iter().map(ExportRecord::to_row).collect(),
    }
}

/// Raw source rows (e.g. intersection output): union of headers in
/// first-seen order, missing cells left blank.
pub fn rows_to_sheet(name: &str, rows: &[&Row]) -> Sheet {
    let mut headers: Vec<String> = Vec::new();
    for row in rows {
        for h in row.headers() {
            if !headers.iter().any(|x| x == h) {
                headers.push(h.to_string());
            }
        }
    }

    let data = rows
        .iter()
        .map(|row| {
            headers
                .iter()
                .map(|h| row.get(h).map(|v| v.as_text()).unwrap_or_default())
                .collect()
        })
        .collect();

    Sheet {
        name: name.to_string(),
        headers,
        rows: data,
    }
}

/// Struttura “piatta” per export dei turni (full detail).
#[derive(Clone, Debug, PartialEq)]
pub struct ShiftExport {
    pub person: String,
    pub group: String,
    pub date: String,
    pub start: String,
    pub end: String,
    pub lunch_start: String,
    pub lunch_end: String,
    pub lunch_kind: String,
    pub lunch_minutes: i64,
    pub worked: String,
    pub punches: String,
    pub warnings: String,
}

impl From<&Shift<'_>> for ShiftExport {
    fn from(s: &Shift<'_>) -> Self {
        Self {
            person: s.person().to_string(),
            group: s.group().to_string(),
            date: s.start.format("%Y-%m-%d").to_string(),
            start: format_datetime(&s.start),
            end: format_datetime(&s.end),
            lunch_start: s.lunch.map(|l| format_datetime(&l.start)).unwrap_or_default(),
            lunch_end: s.lunch.map(|l| format_datetime(&l.end)).unwrap_or_default(),
            lunch_kind: s.lunch_kind.as_str().to_string(),
            lunch_minutes: s.lunch_duration().num_minutes(),
            worked: format_duration(s.worked),
            punches: s
                .punches
                .iter()
                .map(|p| format_time(&p.timestamp))
                .collect::<Vec<_>>()
                .join(" "),
            warnings: s.warnings.join("; "),
        }
    }
}

impl ExportRecord for ShiftExport {
    fn headers() -> Vec<&'static str> {
        vec![
            "person",
            "group",
            "date",
            "start",
            "end",
            "lunch_start",
            "lunch_end",
            "lunch_kind",
            "lunch_minutes",
            "worked",
            "punches",
            "warnings",
        ]
    }

    fn to_row(&self) -> Vec<String> {
        vec![
            self.person.clone(),
            self.group.clone(),
            self.date.clone(),
            self.start.clone(),
            self.end.clone(),
            self.lunch_start.clone(),
            self.lunch_end.clone(),
            self.lunch_kind.clone(),
            self.lunch_minutes.to_string(),
            self.worked.clone(),
            self.punches.clone(),
            self.warnings.clone(),
        ]
    }
}

/// One row of the daily-worker sheet.
#[derive(Clone, Debug, PartialEq)]
pub struct DailyWorkerExport {
    pub name: String,
    pub id_document: String,
    pub date: String,
    pub arrival: String,
    pub departure: String,
    pub net: String,
    pub category: String,
    pub group: String,
}

impl From<&DailyWorkerRecord> for DailyWorkerExport {
    fn from(r: &DailyWorkerRecord) -> Self {
        Self {
            name: r.name.clone(),
            id_document: r.id_document.clone(),
            date: r.date.format("%Y-%m-%d").to_string(),
            arrival: format_datetime(&r.arrival),
            departure: format_datetime(&r.departure),
            net: format_duration(r.net),
            category: r.category.clone(),
            group: r.group.clone(),
        }
    }
}

impl ExportRecord for DailyWorkerExport {
    fn headers() -> Vec<&'static str> {
        vec![
            "name",
            "id_document",
            "date",
            "arrival",
            "departure",
            "net",
            "category",
            "group",
        ]
    }

    fn to_row(&self) -> Vec<String> {
        vec![
            self.name.clone(),
            self.id_document.clone(),
            self.date.clone(),
            self.arrival.clone(),
            self.departure.clone(),
            self.net.clone(),
            self.category.clone(),
            self.group.clone(),
        ]
    }
}
