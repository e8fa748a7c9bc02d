//! Formatting utilities used for CLI summaries.

use chrono::Duration;

/// `07h 55m` style (or `07:55` when `short`).
pub fn mins2readable(mins: i64, want_sign: bool, short: bool) -> String {
    let abs_m = mins.abs();
    let hours = abs_m / 60;
    let minutes = abs_m % 60;

    let sign = if mins > 0 && want_sign {
        "+"
    } else if mins < 0 {
        "-"
    } else {
        ""
    };

    if short {
        format!("{}{:02}:{:02}", sign, hours, minutes)
    } else {
        format!("{}{:02}h {:02}m", sign, hours, minutes)
    }
}

pub fn readable(d: Duration) -> String {
    mins2readable(d.num_minutes(), false, false)
}
