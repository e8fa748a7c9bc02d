//! Full-detail consolidation: one record per shift, with break annotations.

use crate::config::ProcessingConfig;
use crate::core::breaks;
use crate::core::meal_window::MealPeriod;
use crate::core::normalize::normalize;
use crate::core::segment::{SegmentMode, by_person, segment};
use crate::models::{LunchKind, Shift, Table};
use crate::utils::time::hours;
use rand::Rng;
use tracing::info;

pub fn consolidate_shifts<'a, R: Rng + ?Sized>(
    table: &'a Table,
    cfg: &ProcessingConfig,
    rng: &mut R,
) -> Vec<Shift<'a>> {
    let punches = normalize(table);
    let threshold = hours(cfg.shift_threshold_hours);

    let mut shifts: Vec<Shift<'a>> = by_person(&punches)
        .flat_map(|person| segment(person, threshold, SegmentMode::FullDetail))
        .map(|group| breaks::finalize(group, cfg, &mut *rng))
        .collect();

    shifts.sort_by(|a, b| {
        a.person()
            .cmp(b.person())
            .then_with(|| a.start.cmp(&b.start))
    });

    info!(
        shifts = shifts.len(),
        artificial = shifts
            .iter()
            .filter(|s| s.lunch_kind == LunchKind::Artificial)
            .count(),
        source = %table.source,
        "shifts consolidated"
    );
    shifts
}

/// Shift-identification consolidation: full detail with the identification
/// threshold, grouped by meal period. Empty periods are omitted.
pub fn identify_shifts<'a, R: Rng + ?Sized>(
    table: &'a Table,
    cfg: &ProcessingConfig,
    rng: &mut R,
) -> Vec<(MealPeriod, Vec<Shift<'a>>)> {
    let shifts = consolidate_shifts(table, cfg, rng);

    let mut groups: Vec<(MealPeriod, Vec<Shift<'a>>)> = [
        MealPeriod::Morning,
        MealPeriod::Afternoon,
        MealPeriod::Night,
    ]
    .into_iter()
    .map(|p| (p, Vec::new()))
    .collect();

    for shift in shifts {
        if let Some((_, bucket)) = groups.iter_mut().find(|(p, _)| *p == shift.period) {
            bucket.push(shift);
        }
    }

    groups.retain(|(_, bucket)| !bucket.is_empty());
    groups
}
