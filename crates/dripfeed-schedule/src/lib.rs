//! Schedule data model for dripfeed.
//!
//! Pure types shared by the storage and orchestration layers:
//! - [`Slot`]: the four fixed time-of-day buckets and hour resolution
//! - [`ContentCalendar`]: the externally authored posting schedule
//! - [`PublicationLog`]: the at-most-once bookkeeping record

mod calendar;
mod error;
mod log;
mod slots;

pub use calendar::{ContentCalendar, DayEntry, Post};
pub use error::ScheduleError;
pub use log::PublicationLog;
pub use slots::Slot;
