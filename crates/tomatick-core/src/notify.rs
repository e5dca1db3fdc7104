//! Completion alert delivery.

use notify_rust::Notification;

use crate::error::NotifyError;

/// Plays the fixed completion alert.
///
/// Called by the tick driver on every session transition, fire-and-forget:
/// the driver runs `play` on the blocking pool and only logs a failure.
pub trait Notifier: Send + Sync {
    fn play(&self) -> Result<(), NotifyError>;
}

/// Desktop notification with a sound hint, via the platform notification
/// daemon.
#[derive(Debug, Default)]
pub struct DesktopBell;

impl Notifier for DesktopBell {
    fn play(&self) -> Result<(), NotifyError> {
        Notification::new()
            .summary("Tomatick")
            .body("Session complete")
            .sound_name("alarm-clock-elapsed")
            .show()?;
        Ok(())
    }
}
