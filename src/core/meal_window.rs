//! Canonical meal window of a shift, chosen by the hour the shift starts.

use crate::models::BreakInterval;
use chrono::{Days, NaiveDateTime, NaiveTime, Timelike};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum MealPeriod {
    Morning,
    Afternoon,
    Night,
}

impl MealPeriod {
    /// Shift category label (sheet name of the identification export).
    pub fn label(&self) -> &'static str {
        match self {
            MealPeriod::Morning => "Manhã",
            MealPeriod::Afternoon => "Tarde",
            MealPeriod::Night => "Noite",
        }
    }

    pub fn for_hour(hour: u32) -> Self {
        match hour {
            5..=12 => MealPeriod::Morning,
            13..=17 => MealPeriod::Afternoon,
            _ => MealPeriod::Night,
        }
    }
}

/// Expected meal break of a shift. Advisory only: it ranks candidate
/// breaks and bounds synthetic ones, it never rejects a shift.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MealWindow {
    pub period: MealPeriod,
    pub window: BreakInterval,
}

fn hm(h: u32, m: u32) -> NaiveTime {
    NaiveTime::from_hms_opt(h, m, 0).unwrap_or(NaiveTime::MIN)
}

pub fn resolve(shift_start: NaiveDateTime) -> MealWindow {
    let hour = shift_start.hour();
    let period = MealPeriod::for_hour(hour);
    let day = shift_start.date();

    let (from, to, day) = match period {
        MealPeriod::Morning => (hm(10, 30), hm(14, 30), day),
        MealPeriod::Afternoon => (hm(17, 30), hm(20, 0), day),
        MealPeriod::Night => {
            // evening starts eat after midnight
            let day = if hour >= 18 {
                day.checked_add_days(Days::new(1)).unwrap_or(day)
            } else {
                day
            };
            (hm(0, 30), hm(3, 0), day)
        }
    };

    MealWindow {
        period,
        window: BreakInterval::new(day.and_time(from), day.and_time(to)),
    }
}
