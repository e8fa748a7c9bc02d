//! Name-intersection filter: keep the rows of one table whose person also
//! appears in another. Independent of the shift engine.

use crate::core::keywords::NAME;
use crate::models::{Row, Table};
use std::collections::HashSet;
use tracing::debug;

/// Case-insensitive, trimmed name of a row (`None` when the row has no name).
pub fn row_name(row: &Row) -> Option<String> {
    NAME.find_text(row).map(|n| n.to_lowercase())
}

pub fn name_set(table: &Table) -> HashSet<String> {
    table.rows.iter().filter_map(row_name).collect()
}

/// Rows of `a`, in their original order, whose name occurs in `b`.
pub fn filter_by_names<'a>(a: &'a Table, b: &Table) -> Vec<&'a Row> {
    let names = name_set(b);

    let kept: Vec<&'a Row> = a
        .rows
        .iter()
        .filter(|row| row_name(row).is_some_and(|n| names.contains(&n)))
        .collect();

    debug!(
        names = names.len(),
        input = a.len(),
        kept = kept.len(),
        "name intersection"
    );
    kept
}
