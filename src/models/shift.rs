use super::punch::Punch;
use crate::core::meal_window::MealPeriod;
use chrono::{Duration, NaiveDateTime};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LunchKind {
    None,
    Normal,
    Artificial,
}

impl LunchKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            LunchKind::None => "NONE",
            LunchKind::Normal => "NORMAL",
            LunchKind::Artificial => "ARTIFICIAL",
        }
    }
}

/// Half-open `[start, end)` interval of a meal break.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BreakInterval {
    pub start: NaiveDateTime,
    pub end: NaiveDateTime,
}

impl BreakInterval {
    pub fn new(start: NaiveDateTime, end: NaiveDateTime) -> Self {
        Self { start, end }
    }

    pub fn duration(&self) -> Duration {
        self.end - self.start
    }

    pub fn midpoint(&self) -> NaiveDateTime {
        self.start + self.duration() / 2
    }

    pub fn contains(&self, other: &BreakInterval) -> bool {
        other.start >= self.start && other.end <= self.end
    }
}

/// A segmented run of one person's punches with its break resolved.
#[derive(Debug, Clone)]
pub struct Shift<'a> {
    pub punches: Vec<Punch<'a>>,
    pub start: NaiveDateTime,
    pub end: NaiveDateTime,
    pub lunch: Option<BreakInterval>,
    pub lunch_kind: LunchKind,
    pub worked: Duration,
    pub warnings: Vec<String>,
    pub period: MealPeriod,
}

impl<'a> Shift<'a> {
    pub fn person(&self) -> &str {
        &self.punches[0].person
    }

    pub fn group(&self) -> &str {
        &self.punches[0].group
    }

    pub fn span(&self) -> Duration {
        self.end - self.start
    }

    pub fn lunch_duration(&self) -> Duration {
        self.lunch.map(|l| l.duration()).unwrap_or_else(Duration::zero)
    }
}
