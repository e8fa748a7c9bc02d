use super::table::Row;
use chrono::NaiveDateTime;

/// Group label used when the source row has no department column.
pub const DEFAULT_GROUP: &str = "Default";

/// One clock event of one person.
#[derive(Debug, Clone, PartialEq)]
pub struct Punch<'a> {
    pub person: String,
    pub timestamp: NaiveDateTime,
    pub group: String,
    /// Row the punch was read from (metadata extraction only).
    pub source: &'a Row,
}

impl<'a> Punch<'a> {
    pub fn new(person: &str, timestamp: NaiveDateTime, group: &str, source: &'a Row) -> Self {
        Self {
            person: person.to_string(),
            timestamp,
            group: group.to_string(),
            source,
        }
    }

    pub fn has_default_group(&self) -> bool {
        self.group == DEFAULT_GROUP
    }
}
