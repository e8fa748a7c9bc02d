use crate::errors::{AppError, AppResult};

/// Baseline gap threshold of the full-detail mode (hours).
pub const DEFAULT_SHIFT_THRESHOLD_HOURS: f64 = 8.0;
/// Threshold used to identify long overnight / on-call shifts (hours).
pub const IDENTIFY_SHIFT_THRESHOLD_HOURS: f64 = 12.0;
pub const DEFAULT_LUNCH_MIN: i64 = 45;
pub const DEFAULT_LUNCH_MAX: i64 = 75;
pub const DEFAULT_LUNCH_DURATION: i64 = 60;
/// Upper bound of any gap threshold (one year).
pub const MAX_THRESHOLD_HOURS: f64 = 24.0 * 365.0;
/// Upper bound of any break length in minutes (one week).
pub const MAX_DURATION_MINUTES: i64 = 10_080;

/// Per-call engine parameters. Durations are minutes.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ProcessingConfig {
    /// Max gap between consecutive punches of the same shift.
    pub shift_threshold_hours: f64,
    /// Inclusive bounds for a gap to qualify as a break.
    pub lunch_min_duration: i64,
    pub lunch_max_duration: i64,
    /// Seed length of synthetic breaks.
    pub default_lunch_duration: i64,
}

impl Default for ProcessingConfig {
    fn default() -> Self {
        Self::baseline()
    }
}

impl ProcessingConfig {
    pub fn baseline() -> Self {
        Self {
            shift_threshold_hours: DEFAULT_SHIFT_THRESHOLD_HOURS,
            lunch_min_duration: DEFAULT_LUNCH_MIN,
            lunch_max_duration: DEFAULT_LUNCH_MAX,
            default_lunch_duration: DEFAULT_LUNCH_DURATION,
        }
    }

    /// Baseline with the 12h threshold of the shift-identification mode.
    pub fn identification() -> Self {
        Self {
            shift_threshold_hours: IDENTIFY_SHIFT_THRESHOLD_HOURS,
            ..Self::baseline()
        }
    }

    pub fn with_threshold(self, hours: f64) -> Self {
        Self {
            shift_threshold_hours: hours,
            ..self
        }
    }

    pub fn validate(&self) -> AppResult<()> {
        if !self.shift_threshold_hours.is_finite()
            || self.shift_threshold_hours <= 0.0
            || self.shift_threshold_hours > MAX_THRESHOLD_HOURS
        {
            return Err(AppError::Config(format!(
                "shift threshold must be between 0 and {} hours (got {})",
                MAX_THRESHOLD_HOURS, self.shift_threshold_hours
            )));
        }
        let in_range = |m: i64| m > 0 && m <= MAX_DURATION_MINUTES;
        if !in_range(self.lunch_min_duration) || !in_range(self.lunch_max_duration) {
            return Err(AppError::Config(format!(
                "lunch bounds must be between 1 and {MAX_DURATION_MINUTES} minutes"
            )));
        }
        if self.lunch_min_duration > self.lunch_max_duration {
            return Err(AppError::Config(format!(
                "lunch min ({}) is greater than lunch max ({})",
                self.lunch_min_duration, self.lunch_max_duration
            )));
        }
        if !in_range(self.default_lunch_duration) {
            return Err(AppError::Config(format!(
                "default lunch duration must be between 1 and {MAX_DURATION_MINUTES} minutes"
            )));
        }
        Ok(())
    }
}
