//! Settings-editor boundary.
//!
//! The editor collects four numeric text fields and always hands the engine
//! a valid [`ScheduleConfig`]: non-numeric or out-of-range input collapses
//! to 1 instead of being rejected. Cancelling the editor is modeled by the
//! caller simply never calling `apply_schedule`. The engine itself performs
//! no validation.

use std::ops::RangeInclusive;

use crate::timer::ScheduleConfig;

pub const WORK_MIN_BOUNDS: RangeInclusive<u32> = 1..=60;
pub const SHORT_BREAK_MIN_BOUNDS: RangeInclusive<u32> = 1..=30;
pub const LONG_BREAK_MIN_BOUNDS: RangeInclusive<u32> = 1..=60;
pub const LONG_BREAK_INTERVAL_BOUNDS: RangeInclusive<u32> = 1..=10;

/// Raw field values as typed into the editor.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SettingsForm {
    pub work_time: String,
    pub short_break_time: String,
    pub long_break_time: String,
    pub long_break_interval: String,
}

impl SettingsForm {
    /// Pre-fill the form from the schedule currently in effect.
    pub fn from_schedule(schedule: &ScheduleConfig) -> Self {
        Self {
            work_time: schedule.work_min.to_string(),
            short_break_time: schedule.short_break_min.to_string(),
            long_break_time: schedule.long_break_min.to_string(),
            long_break_interval: schedule.long_break_interval.to_string(),
        }
    }

    /// Coerce the raw fields into a schedule the engine can trust.
    pub fn submit(&self) -> ScheduleConfig {
        ScheduleConfig {
            work_min: coerce(&self.work_time, WORK_MIN_BOUNDS),
            short_break_min: coerce(&self.short_break_time, SHORT_BREAK_MIN_BOUNDS),
            long_break_min: coerce(&self.long_break_time, LONG_BREAK_MIN_BOUNDS),
            long_break_interval: coerce(&self.long_break_interval, LONG_BREAK_INTERVAL_BOUNDS),
        }
    }
}

/// Anything that is not a number inside `bounds` collapses to 1.
fn coerce(raw: &str, bounds: RangeInclusive<u32>) -> u32 {
    match raw.trim().parse::<u32>() {
        Ok(value) if bounds.contains(&value) => value,
        _ => 1,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn form(work: &str, short: &str, long: &str, interval: &str) -> SettingsForm {
        SettingsForm {
            work_time: work.into(),
            short_break_time: short.into(),
            long_break_time: long.into(),
            long_break_interval: interval.into(),
        }
    }

    #[test]
    fn in_range_values_pass_through() {
        let schedule = form("45", "10", "20", "3").submit();
        assert_eq!(schedule.work_min, 45);
        assert_eq!(schedule.short_break_min, 10);
        assert_eq!(schedule.long_break_min, 20);
        assert_eq!(schedule.long_break_interval, 3);
    }

    #[test]
    fn surrounding_whitespace_is_tolerated() {
        assert_eq!(form(" 30 ", "5", "15", "4").submit().work_min, 30);
    }

    #[test]
    fn non_numeric_collapses_to_one() {
        let schedule = form("abc", "", "-5", "2.5").submit();
        assert_eq!(schedule.work_min, 1);
        assert_eq!(schedule.short_break_min, 1);
        assert_eq!(schedule.long_break_min, 1);
        assert_eq!(schedule.long_break_interval, 1);
    }

    #[test]
    fn out_of_range_collapses_to_one() {
        let schedule = form("61", "31", "0", "11").submit();
        assert_eq!(schedule.work_min, 1);
        assert_eq!(schedule.short_break_min, 1);
        assert_eq!(schedule.long_break_min, 1);
        assert_eq!(schedule.long_break_interval, 1);
    }

    #[test]
    fn round_trips_a_valid_schedule() {
        let schedule = ScheduleConfig::default();
        assert_eq!(SettingsForm::from_schedule(&schedule).submit(), schedule);
    }
}
