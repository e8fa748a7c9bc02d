use crate::errors::{AppError, AppResult};
use crate::models::Table;

/// Concatenate the rows of several decoded tables, in input order.
pub fn merge_tables(tables: Vec<Table>) -> AppResult<Table> {
    let source = tables
        .iter()
        .map(|t| t.source.as_str())
        .collect::<Vec<_>>()
        .join(" + ");

    let rows: Vec<_> = tables.into_iter().flat_map(|t| t.rows).collect();

    if rows.is_empty() {
        return Err(AppError::EmptyTable(source));
    }

    Ok(Table::new(source, rows))
}
