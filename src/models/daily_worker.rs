use chrono::{Duration, NaiveDate, NaiveDateTime};

/// Reduced first/last punch record of one shift.
#[derive(Debug, Clone, PartialEq)]
pub struct DailyWorkerRecord {
    pub name: String,
    pub id_document: String,
    pub date: NaiveDate,
    pub arrival: NaiveDateTime,
    pub departure: NaiveDateTime,
    pub net: Duration,
    pub category: String,
    pub group: String,
}
