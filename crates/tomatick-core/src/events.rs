use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::timer::SessionType;

/// Every state change in the engine produces an Event.
/// Surfaces render snapshots; the tick driver publishes them.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum Event {
    TimerStarted {
        session: SessionType,
        remaining_secs: u64,
        at: DateTime<Utc>,
    },
    TimerPaused {
        remaining_secs: u64,
        at: DateTime<Utc>,
    },
    TimerReset {
        at: DateTime<Utc>,
    },
    /// A new schedule took effect; the current session's countdown was
    /// recomputed from it.
    ScheduleApplied {
        session: SessionType,
        remaining_secs: u64,
        at: DateTime<Utc>,
    },
    /// A session counted down to zero and the next one began. Doubles as
    /// the fire-and-forget alert command: the driver plays the completion
    /// sound on receipt.
    SessionCompleted {
        finished: SessionType,
        next: SessionType,
        completed_work_sessions: u32,
        at: DateTime<Utc>,
    },
    /// Full state of the timer, ready for a surface to render.
    StateSnapshot {
        session: SessionType,
        remaining_secs: u64,
        running: bool,
        completed_work_sessions: u32,
        /// `MM:SS`, zero-padded.
        clock: String,
        at: DateTime<Utc>,
    },
}
