/// ANSI color helper utilities for terminal output.
use crate::models::LunchKind;
use crate::ui::messages::colors_enabled;

pub const RESET: &str = "\x1b[0m";
pub const GREY: &str = "\x1b[90m";
pub const GREEN: &str = "\x1b[32m";
pub const YELLOW: &str = "\x1b[33m";

/// NORMAL → green, ARTIFICIAL → yellow, NONE → grey.
pub fn color_for_lunch(kind: LunchKind) -> &'static str {
    match kind {
        LunchKind::Normal => GREEN,
        LunchKind::Artificial => YELLOW,
        LunchKind::None => GREY,
    }
}

/// Plain `value` when output is piped or `NO_COLOR` is set.
pub fn colorize(value: &str, color: &str) -> String {
    if colors_enabled() {
        format!("{color}{value}{RESET}")
    } else {
        value.to_string()
    }
}
