#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use chrono::NaiveDateTime;
use shiftrecon::models::{CellValue, Punch, Row, Table};
use std::fs;
use std::path::{Path, PathBuf};

pub fn sr() -> Command {
    cargo_bin_cmd!("shiftrecon")
}

/// `YYYY-MM-DD HH:MM`
pub fn dt(s: &str) -> NaiveDateTime {
    NaiveDateTime::parse_from_str(s, "%Y-%m-%d %H:%M").expect("valid datetime")
}

/// One row per punch ("vertical" export): Nome + Batida text.
pub fn vertical_table(punches: &[(&str, &str)]) -> Table {
    let rows = punches
        .iter()
        .map(|(name, ts)| Row::new().with("Nome", *name).with("Batida", *ts))
        .collect();
    Table::new("vertical.csv", rows)
}

/// Punches of one person sharing a single (empty) source row.
pub fn punches<'a>(person: &str, times: &[&str], row: &'a Row) -> Vec<Punch<'a>> {
    times
        .iter()
        .map(|t| Punch::new(person, dt(t), "Default", row))
        .collect()
}

pub fn date_cell(s: &str) -> CellValue {
    CellValue::DateTime(dt(s))
}

/// Write `content` to `dir/name` and return the path.
pub fn write_file(dir: &Path, name: &str, content: &str) -> PathBuf {
    let path = dir.join(name);
    fs::write(&path, content).expect("write input file");
    path
}

/// Config path inside `dir` that does not exist (defaults in use).
pub fn no_config(dir: &Path) -> String {
    dir.join("missing.conf").to_string_lossy().to_string()
}
