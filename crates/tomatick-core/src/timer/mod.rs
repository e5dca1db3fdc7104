mod driver;
mod engine;
mod schedule;

pub use driver::TimerHandle;
pub use engine::TimerEngine;
pub use schedule::{ScheduleConfig, SessionType};
