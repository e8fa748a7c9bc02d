//! Meal-break detection and synthesis inside one segmented shift.

use crate::config::ProcessingConfig;
use crate::core::meal_window::{self, MealWindow};
use crate::models::{BreakInterval, LunchKind, Punch, Shift};
use chrono::{Duration, NaiveDateTime};
use rand::Rng;

pub const WARN_SINGLE_PUNCH: &str = "Batida única / Single punch";
pub const WARN_SHORT_SHIFT: &str = "Turno muito curto (< 1h) / Shift shorter than 1h";

/// Shortest span on which a break is searched for.
const MIN_BREAK_SEARCH_SPAN: i64 = 60;
/// Synthetic breaks keep this distance from the first and last punch.
const SYNTH_MARGIN_MINUTES: i64 = 15;
/// Spread added to the configured default lunch length when synthesizing.
const SYNTH_SPREAD_MINUTES: i64 = 5;

/// Result of the gap search (detection only).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Detection {
    /// Fewer than two punches or span below one hour.
    Incomplete(&'static str),
    Found(BreakInterval),
    NoCandidate,
}

/// Search the shift's consecutive gaps for a real break.
pub fn detect(punches: &[Punch<'_>], cfg: &ProcessingConfig, window: &MealWindow) -> Detection {
    let (Some(first), Some(last)) = (punches.first(), punches.last()) else {
        return Detection::Incomplete(WARN_SINGLE_PUNCH);
    };
    if punches.len() < 2 {
        return Detection::Incomplete(WARN_SINGLE_PUNCH);
    }
    if last.timestamp - first.timestamp < Duration::minutes(MIN_BREAK_SEARCH_SPAN) {
        return Detection::Incomplete(WARN_SHORT_SHIFT);
    }

    let min = Duration::minutes(cfg.lunch_min_duration);
    let max = Duration::minutes(cfg.lunch_max_duration);

    let candidates: Vec<BreakInterval> = punches
        .windows(2)
        .map(|w| BreakInterval::new(w[0].timestamp, w[1].timestamp))
        .filter(|gap| gap.duration() >= min && gap.duration() <= max)
        .collect();

    match candidates.as_slice() {
        [] => Detection::NoCandidate,
        [only] => Detection::Found(*only),
        many => Detection::Found(pick_candidate(many, &window.window)),
    }
}

/// Several qualifying gaps: the first one inside the window, otherwise the
/// one whose midpoint is nearest the window's midpoint (first on ties).
fn pick_candidate(candidates: &[BreakInterval], window: &BreakInterval) -> BreakInterval {
    if let Some(inside) = candidates.iter().find(|c| window.contains(c)) {
        return *inside;
    }

    let target = window.midpoint();
    let mut best = candidates[0];
    let mut best_dist = (best.midpoint() - target).abs();
    for c in &candidates[1..] {
        let dist = (c.midpoint() - target).abs();
        if dist < best_dist {
            best = *c;
            best_dist = dist;
        }
    }
    best
}

/// Place a plausible break inside `[start+15m, end-15m] ∩ window`.
/// `None` when the usable interval cannot hold the drawn length.
pub fn synthesize<R: Rng + ?Sized>(
    start: NaiveDateTime,
    end: NaiveDateTime,
    window: &BreakInterval,
    cfg: &ProcessingConfig,
    rng: &mut R,
) -> Option<BreakInterval> {
    let base = cfg.default_lunch_duration;
    let length = Duration::minutes(rng.gen_range(base..=base + SYNTH_SPREAD_MINUTES));

    let margin = Duration::minutes(SYNTH_MARGIN_MINUTES);
    let usable_start = (start + margin).max(window.start);
    let usable_end = (end - margin).min(window.end);
    if usable_end <= usable_start {
        return None;
    }

    let usable = usable_end - usable_start;
    if usable < length {
        return None;
    }

    let slack = (usable - length).num_minutes();
    let offset = Duration::minutes(rng.gen_range(0..=slack));
    let lunch_start = usable_start + offset;

    Some(BreakInterval::new(lunch_start, lunch_start + length))
}

/// Worked time of a shift: span minus the break, never negative.
pub fn worked_time(
    start: NaiveDateTime,
    end: NaiveDateTime,
    lunch: Option<&BreakInterval>,
) -> Duration {
    let worked = match lunch {
        Some(l) => (l.start - start) + (end - l.end),
        None => end - start,
    };
    worked.max(Duration::zero())
}

/// Resolve the break of a segmented shift (full-detail mode) and build the
/// final record. Shifts without a qualifying gap get a synthetic break when
/// one fits. `punches` must not be empty.
pub fn finalize<'a, R: Rng + ?Sized>(
    punches: Vec<Punch<'a>>,
    cfg: &ProcessingConfig,
    rng: &mut R,
) -> Shift<'a> {
    let start = punches[0].timestamp;
    let end = punches[punches.len() - 1].timestamp;
    let window = meal_window::resolve(start);

    let mut warnings = Vec::new();
    let (lunch, lunch_kind) = match detect(&punches, cfg, &window) {
        Detection::Incomplete(warning) => {
            warnings.push(warning.to_string());
            (None, LunchKind::None)
        }
        Detection::Found(gap) => (Some(gap), LunchKind::Normal),
        Detection::NoCandidate => match synthesize(start, end, &window.window, cfg, rng) {
            Some(synthetic) => (Some(synthetic), LunchKind::Artificial),
            None => (None, LunchKind::None),
        },
    };

    Shift {
        worked: worked_time(start, end, lunch.as_ref()),
        punches,
        start,
        end,
        lunch,
        lunch_kind,
        warnings,
        period: window.period,
    }
}
