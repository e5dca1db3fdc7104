use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SessionType {
    Work,
    ShortBreak,
    LongBreak,
}

impl SessionType {
    /// Human-readable name for surfaces.
    pub fn label(&self) -> &'static str {
        match self {
            SessionType::Work => "Work",
            SessionType::ShortBreak => "Short Break",
            SessionType::LongBreak => "Long Break",
        }
    }

    pub fn is_break(&self) -> bool {
        !matches!(self, SessionType::Work)
    }
}

/// The configured Pomodoro schedule.
///
/// Invariant: all four fields are >= 1. The engine trusts this; bounds are
/// enforced at the settings boundary (`crate::settings`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScheduleConfig {
    /// Work session length in minutes.
    pub work_min: u32,
    /// Short break length in minutes.
    pub short_break_min: u32,
    /// Long break length in minutes.
    pub long_break_min: u32,
    /// Completed Work sessions between long breaks. A count, not a duration.
    pub long_break_interval: u32,
}

impl ScheduleConfig {
    /// Countdown length in seconds for one session of the given type.
    pub fn duration_secs(&self, session: SessionType) -> u64 {
        let minutes = match session {
            SessionType::Work => self.work_min,
            SessionType::ShortBreak => self.short_break_min,
            SessionType::LongBreak => self.long_break_min,
        };
        u64::from(minutes) * 60
    }
}

impl Default for ScheduleConfig {
    /// The classic 25/5/15 schedule with a long break every 4th session.
    fn default() -> Self {
        Self {
            work_min: 25,
            short_break_min: 5,
            long_break_min: 15,
            long_break_interval: 4,
        }
    }
}
