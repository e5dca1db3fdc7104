//! # Tomatick Core Library
//!
//! Core logic for the Tomatick Pomodoro timer: a countdown alternating
//! Work / Short Break / Long Break sessions on a configurable schedule,
//! advanced one second at a time, with an audible alert on every session
//! transition.
//!
//! ## Architecture
//!
//! - **Timer Engine**: a pure state machine that requires the caller to
//!   invoke `tick()` once per elapsed second while the timer is running
//! - **Tick Driver**: a tokio interval task that owns the engine and
//!   supplies those ticks, re-armed on every command so at most one tick
//!   source is ever live
//! - **Settings**: the editor boundary that coerces raw input into a valid
//!   schedule before it ever reaches the engine
//! - **Notify**: fire-and-forget completion alert delivery
//!
//! Display surfaces render [`Event::StateSnapshot`] values, pulled from
//! [`TimerHandle::snapshot`] or received via [`TimerHandle::subscribe`].
//! Nothing is persisted; the timer lives and dies with the process.

pub mod error;
pub mod events;
pub mod notify;
pub mod settings;
pub mod timer;

pub use error::NotifyError;
pub use events::Event;
pub use notify::{DesktopBell, Notifier};
pub use settings::SettingsForm;
pub use timer::{ScheduleConfig, SessionType, TimerEngine, TimerHandle};
