//! Error types for tomatick-core.
//!
//! Playing the completion alert is the only fallible operation in the
//! system. The driver logs a failure and carries on; a session transition
//! never blocks on, or fails because of, the alert.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum NotifyError {
    /// The desktop notification backend rejected the alert.
    #[error("failed to deliver completion alert: {0}")]
    Delivery(#[from] notify_rust::error::Error),
}
