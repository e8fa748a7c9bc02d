//! Header keyword rules.
//!
//! Exports come from many time-clock vendors, so columns are recognised by
//! substring match on the lowercased header. Rules are evaluated in order and
//! the first matching header of a row wins.

use crate::models::{CellValue, Row};

pub struct Rule {
    /// Label used in diagnostics.
    pub field: &'static str,
    pub keywords: &'static [&'static str],
}

pub const PERSON: Rule = Rule {
    field: "person",
    keywords: &["pessoa", "nome", "funcionario", "empregado"],
};

pub const GROUP: Rule = Rule {
    field: "group",
    keywords: &["grupo", "depto"],
};

/// Totals, balances and notes: never punches.
pub const SUMMARY: Rule = Rule {
    field: "summary",
    keywords: &["total", "saldo", "banco", "horas", "hrs", "trab", "obs"],
};

/// Name column used by the intersection filter (wider than `PERSON`).
pub const NAME: Rule = Rule {
    field: "name",
    keywords: &["nome", "pessoa", "funcionario", "empregado", "colaborador"],
};

pub const ID_DOCUMENT: Rule = Rule {
    field: "id_document",
    keywords: &["cpf", "documento"],
};

pub const CATEGORY: Rule = Rule {
    field: "category",
    keywords: &["categoria", "função", "funcao", "cargo"],
};

pub const DEPARTMENT: Rule = Rule {
    field: "department",
    keywords: &["grupo", "depto", "departamento", "setor"],
};

impl Rule {
    pub fn matches(&self, header: &str) -> bool {
        let lower = header.to_lowercase();
        self.keywords.iter().any(|k| lower.contains(k))
    }

    /// First header of the row matching this rule.
    pub fn find_header<'r>(&self, row: &'r Row) -> Option<&'r str> {
        row.headers().find(|h| self.matches(h))
    }

    /// Value of the first matching column.
    pub fn find_value<'r>(&self, row: &'r Row) -> Option<&'r CellValue> {
        row.cells
            .iter()
            .find(|(h, _)| self.matches(h))
            .map(|(_, v)| v)
    }

    /// Trimmed text of the first matching column, `None` when absent or blank.
    pub fn find_text(&self, row: &Row) -> Option<String> {
        self.find_value(row)
            .map(CellValue::as_text)
            .filter(|s| !s.is_empty())
    }
}
