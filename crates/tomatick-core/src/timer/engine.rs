//! Timer engine implementation.
//!
//! The engine is a pure state machine over whole seconds. It owns no clock
//! and spawns no tasks - the caller (normally [`super::TimerHandle`]) invokes
//! `tick()` once per elapsed second while the timer is running, so the engine
//! is fully testable headlessly.
//!
//! ## Session sequencing
//!
//! ```text
//! Work -> ShortBreak -> Work -> ShortBreak -> ... -> Work -> LongBreak -> Work -> ...
//! ```
//!
//! Every `long_break_interval`-th completed Work session is followed by a
//! long break, every other one by a short break, and every break by Work.

use chrono::Utc;
use serde::{Deserialize, Serialize};

use super::schedule::{ScheduleConfig, SessionType};
use crate::events::Event;

/// Core timer state machine.
///
/// Commands return `Some(Event)` when state changed and `None` for no-ops.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TimerEngine {
    schedule: ScheduleConfig,
    session: SessionType,
    /// Whole seconds left in the current session.
    remaining_secs: u64,
    running: bool,
    /// Work sessions that have counted down to zero. Breaks never count.
    completed_work_sessions: u32,
}

impl TimerEngine {
    /// Create an engine holding a fresh, paused Work session.
    pub fn new(schedule: ScheduleConfig) -> Self {
        Self {
            remaining_secs: schedule.duration_secs(SessionType::Work),
            schedule,
            session: SessionType::Work,
            running: false,
            completed_work_sessions: 0,
        }
    }

    // ── Queries ──────────────────────────────────────────────────────

    pub fn session(&self) -> SessionType {
        self.session
    }

    pub fn remaining_secs(&self) -> u64 {
        self.remaining_secs
    }

    pub fn running(&self) -> bool {
        self.running
    }

    pub fn completed_work_sessions(&self) -> u32 {
        self.completed_work_sessions
    }

    pub fn schedule(&self) -> &ScheduleConfig {
        &self.schedule
    }

    /// `MM:SS`, zero-padded, floor-divided.
    pub fn clock(&self) -> String {
        format!("{:02}:{:02}", self.remaining_secs / 60, self.remaining_secs % 60)
    }

    /// Build a full state snapshot event for a surface to render.
    pub fn snapshot(&self) -> Event {
        Event::StateSnapshot {
            session: self.session,
            remaining_secs: self.remaining_secs,
            running: self.running,
            completed_work_sessions: self.completed_work_sessions,
            clock: self.clock(),
            at: Utc::now(),
        }
    }

    // ── Commands ─────────────────────────────────────────────────────

    pub fn start(&mut self) -> Option<Event> {
        if self.running {
            return None;
        }
        self.running = true;
        Some(Event::TimerStarted {
            session: self.session,
            remaining_secs: self.remaining_secs,
            at: Utc::now(),
        })
    }

    pub fn pause(&mut self) -> Option<Event> {
        if !self.running {
            return None;
        }
        self.running = false;
        Some(Event::TimerPaused {
            remaining_secs: self.remaining_secs,
            at: Utc::now(),
        })
    }

    pub fn toggle(&mut self) -> Option<Event> {
        if self.running {
            self.pause()
        } else {
            self.start()
        }
    }

    /// Back to a fresh, paused Work session. The schedule is kept.
    pub fn reset(&mut self) -> Option<Event> {
        self.running = false;
        self.session = SessionType::Work;
        self.remaining_secs = self.schedule.duration_secs(SessionType::Work);
        self.completed_work_sessions = 0;
        Some(Event::TimerReset { at: Utc::now() })
    }

    /// Replace the schedule and recompute the countdown for the *current*
    /// session from the new durations. Running state and the work-session
    /// counter are untouched; this neither starts nor stops the timer.
    pub fn apply_schedule(&mut self, schedule: ScheduleConfig) -> Option<Event> {
        self.schedule = schedule;
        self.remaining_secs = self.schedule.duration_secs(self.session);
        Some(Event::ScheduleApplied {
            session: self.session,
            remaining_secs: self.remaining_secs,
            at: Utc::now(),
        })
    }

    /// One elapsed second. Only advances state while running.
    ///
    /// The tick that reaches zero performs the session transition itself,
    /// so the timer never sits at 00:00 while running, and no tick can
    /// trigger two transitions (the next session starts at a full duration).
    /// The returned completion event doubles as the fire-and-forget alert
    /// command handled by the driver.
    pub fn tick(&mut self) -> Option<Event> {
        if !self.running {
            return None;
        }
        if self.remaining_secs > 0 {
            self.remaining_secs -= 1;
        }
        if self.remaining_secs == 0 {
            return Some(self.transition());
        }
        None
    }

    /// Advance to the next session. `running` stays true: the new session
    /// counts down immediately without user action.
    fn transition(&mut self) -> Event {
        let finished = self.session;
        self.session = match finished {
            SessionType::Work => {
                self.completed_work_sessions += 1;
                if self.completed_work_sessions % self.schedule.long_break_interval == 0 {
                    SessionType::LongBreak
                } else {
                    SessionType::ShortBreak
                }
            }
            SessionType::ShortBreak | SessionType::LongBreak => SessionType::Work,
        };
        self.remaining_secs = self.schedule.duration_secs(self.session);
        Event::SessionCompleted {
            finished,
            next: self.session,
            completed_work_sessions: self.completed_work_sessions,
            at: Utc::now(),
        }
    }
}

impl Default for TimerEngine {
    fn default() -> Self {
        Self::new(ScheduleConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn start_pause_toggle() {
        let mut engine = TimerEngine::default();
        assert!(!engine.running());

        assert!(engine.start().is_some());
        assert!(engine.running());
        assert!(engine.start().is_none()); // Already running.

        assert!(engine.pause().is_some());
        assert!(!engine.running());
        assert!(engine.pause().is_none()); // Already paused.

        assert!(engine.toggle().is_some());
        assert!(engine.running());
        assert!(engine.toggle().is_some());
        assert!(!engine.running());
    }

    #[test]
    fn tick_decrements_while_running() {
        let mut engine = TimerEngine::default();
        engine.start();
        assert!(engine.tick().is_none());
        assert_eq!(engine.remaining_secs(), 1499);
    }

    #[test]
    fn tick_is_inert_while_paused() {
        let mut engine = TimerEngine::default();
        assert!(engine.tick().is_none());
        assert_eq!(engine.remaining_secs(), 1500);
    }

    #[test]
    fn work_completion_starts_short_break() {
        let mut engine = TimerEngine::default();
        engine.start();
        for _ in 0..1499 {
            assert!(engine.tick().is_none());
        }
        let event = engine.tick().expect("final tick transitions");
        match event {
            Event::SessionCompleted {
                finished,
                next,
                completed_work_sessions,
                ..
            } => {
                assert_eq!(finished, SessionType::Work);
                assert_eq!(next, SessionType::ShortBreak);
                assert_eq!(completed_work_sessions, 1);
            }
            other => panic!("expected SessionCompleted, got {other:?}"),
        }
        assert!(engine.running()); // Break counts down without user action.
        assert_eq!(engine.remaining_secs(), 300);
    }

    #[test]
    fn break_completion_returns_to_work() {
        let mut engine = TimerEngine::new(ScheduleConfig {
            work_min: 1,
            short_break_min: 1,
            long_break_min: 1,
            long_break_interval: 4,
        });
        engine.start();
        for _ in 0..60 {
            engine.tick();
        }
        assert_eq!(engine.session(), SessionType::ShortBreak);
        for _ in 0..60 {
            engine.tick();
        }
        assert_eq!(engine.session(), SessionType::Work);
        assert_eq!(engine.completed_work_sessions(), 1); // Breaks never count.
    }

    #[test]
    fn interval_of_one_means_every_break_is_long() {
        let mut engine = TimerEngine::new(ScheduleConfig {
            work_min: 1,
            short_break_min: 1,
            long_break_min: 1,
            long_break_interval: 1,
        });
        engine.start();
        for _ in 0..3 {
            loop {
                if let Some(Event::SessionCompleted { finished, next, .. }) = engine.tick() {
                    if finished == SessionType::Work {
                        assert_eq!(next, SessionType::LongBreak);
                        break;
                    }
                }
            }
        }
    }

    #[test]
    fn reset_restores_fresh_work_session() {
        let mut engine = TimerEngine::default();
        engine.start();
        for _ in 0..2000 {
            engine.tick();
        }
        assert_eq!(engine.session(), SessionType::ShortBreak);

        engine.reset();
        assert!(!engine.running());
        assert_eq!(engine.session(), SessionType::Work);
        assert_eq!(engine.remaining_secs(), 1500);
        assert_eq!(engine.completed_work_sessions(), 0);
    }

    #[test]
    fn apply_schedule_recomputes_current_session() {
        let mut engine = TimerEngine::default();
        engine.start();
        engine.tick();

        let new = ScheduleConfig {
            work_min: 50,
            ..ScheduleConfig::default()
        };
        engine.apply_schedule(new);
        assert_eq!(engine.remaining_secs(), 3000);
        assert!(engine.running()); // Neither starts nor stops the timer.
        assert_eq!(engine.schedule().work_min, 50);
    }

    #[test]
    fn clock_is_zero_padded() {
        let mut engine = TimerEngine::default();
        assert_eq!(engine.clock(), "25:00");
        engine.start();
        engine.tick();
        assert_eq!(engine.clock(), "24:59");
        for _ in 0..(24 * 60 + 54) {
            engine.tick();
        }
        assert_eq!(engine.clock(), "00:05");
    }
}
