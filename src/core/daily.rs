//! Daily-worker consolidation: one first/last punch record per shift.
//!
//! Uses a fixed 12h gap threshold under a 16h cap and only nets out real
//! breaks; nothing is synthesized in this mode.

use crate::config::{IDENTIFY_SHIFT_THRESHOLD_HOURS, ProcessingConfig};
use crate::core::breaks::{Detection, detect};
use crate::core::keywords::{CATEGORY, DEPARTMENT, ID_DOCUMENT};
use crate::core::meal_window;
use crate::core::normalize::normalize;
use crate::core::segment::{SegmentMode, by_person, segment};
use crate::models::{DailyWorkerRecord, Punch, Table};
use crate::utils::time::hours;
use chrono::Duration;
use tracing::info;

/// Gap threshold of the daily-worker mode (hours), not configurable.
pub const DAILY_WORKER_THRESHOLD_HOURS: f64 = IDENTIFY_SHIFT_THRESHOLD_HOURS;

pub fn consolidate_daily_workers(table: &Table, cfg: &ProcessingConfig) -> Vec<DailyWorkerRecord> {
    let punches = normalize(table);
    let threshold = hours(DAILY_WORKER_THRESHOLD_HOURS);

    let mut records: Vec<DailyWorkerRecord> = by_person(&punches)
        .flat_map(|person| segment(person, threshold, SegmentMode::DailyWorker))
        .map(|shift| to_record(&shift, cfg))
        .collect();

    records.sort_by(|a, b| a.name.cmp(&b.name).then_with(|| a.arrival.cmp(&b.arrival)));

    info!(records = records.len(), source = %table.source, "daily workers consolidated");
    records
}

fn to_record(punches: &[Punch<'_>], cfg: &ProcessingConfig) -> DailyWorkerRecord {
    let first = &punches[0];
    let arrival = first.timestamp;
    let departure = punches[punches.len() - 1].timestamp;

    let window = meal_window::resolve(arrival);
    let lunch = match detect(punches, cfg, &window) {
        Detection::Found(gap) => gap.duration(),
        Detection::Incomplete(_) | Detection::NoCandidate => Duration::zero(),
    };
    let net = (departure - arrival - lunch).max(Duration::zero());

    let row = first.source;
    let group = DEPARTMENT.find_text(row).unwrap_or_else(|| {
        if first.has_default_group() {
            String::new()
        } else {
            first.group.clone()
        }
    });

    DailyWorkerRecord {
        name: first.person.clone(),
        id_document: ID_DOCUMENT.find_text(row).unwrap_or_default(),
        date: arrival.date(),
        arrival,
        departure,
        net,
        category: CATEGORY.find_text(row).unwrap_or_default(),
        group,
    }
}
