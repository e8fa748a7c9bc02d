use crate::config::ProcessingConfig;
use crate::core::consolidate::{consolidate_shifts, identify_shifts};
use crate::core::daily::consolidate_daily_workers;
use crate::core::intersect::filter_by_names;
use crate::core::meal_window::MealPeriod;
use crate::models::{DailyWorkerRecord, Row, Shift, Table};
use rand::Rng;

/// Entry points of the engine, one per consolidation path.
pub struct Core;

impl Core {
    pub fn shifts<'a, R: Rng + ?Sized>(
        table: &'a Table,
        cfg: &ProcessingConfig,
        rng: &mut R,
    ) -> Vec<Shift<'a>> {
        consolidate_shifts(table, cfg, rng)
    }

    pub fn identify<'a, R: Rng + ?Sized>(
        table: &'a Table,
        cfg: &ProcessingConfig,
        rng: &mut R,
    ) -> Vec<(MealPeriod, Vec<Shift<'a>>)> {
        identify_shifts(table, cfg, rng)
    }

    pub fn daily_workers(table: &Table, cfg: &ProcessingConfig) -> Vec<DailyWorkerRecord> {
        consolidate_daily_workers(table, cfg)
    }

    pub fn intersect<'a>(a: &'a Table, b: &Table) -> Vec<&'a Row> {
        filter_by_names(a, b)
    }
}
