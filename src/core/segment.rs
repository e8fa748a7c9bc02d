//! Greedy temporal segmentation of punches into shifts.

use crate::models::Punch;
use chrono::Duration;

/// Consolidation mode; selects the hard cap on a shift's span.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SegmentMode {
    FullDetail,
    DailyWorker,
}

impl SegmentMode {
    /// Maximum span of one shift whatever the gap threshold is.
    pub fn hard_cap(&self) -> Duration {
        match self {
            SegmentMode::FullDetail => Duration::hours(18),
            SegmentMode::DailyWorker => Duration::hours(16),
        }
    }
}

/// Split one person's time-sorted punches into shifts.
///
/// A punch joins the current shift when its gap to the previous punch is at
/// most `threshold` and its distance from the shift's first punch is at most
/// the mode's hard cap.
pub fn segment<'a>(
    punches: &[Punch<'a>],
    threshold: Duration,
    mode: SegmentMode,
) -> Vec<Vec<Punch<'a>>> {
    let hard_cap = mode.hard_cap();
    let mut shifts = Vec::new();
    let mut current: Vec<Punch<'a>> = Vec::new();

    for p in punches {
        let joins = match (current.first(), current.last()) {
            (Some(first), Some(last)) => {
                let gap = p.timestamp - last.timestamp;
                let span = p.timestamp - first.timestamp;
                gap <= threshold && span <= hard_cap
            }
            _ => true,
        };

        if !joins {
            shifts.push(std::mem::take(&mut current));
        }
        current.push(p.clone());
    }

    if !current.is_empty() {
        shifts.push(current);
    }

    shifts
}

/// Split a punch stream sorted by (person, timestamp) into per-person runs.
pub fn by_person<'p, 'a>(punches: &'p [Punch<'a>]) -> impl Iterator<Item = &'p [Punch<'a>]> {
    punches.chunk_by(|a, b| a.person == b.person)
}
