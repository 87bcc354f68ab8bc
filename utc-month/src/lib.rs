#![doc = include_str!("../README.md")]

mod date;
mod month;
mod time_source;


pub use crate::date::CalendarDate;
pub use crate::month::{InvalidMonth, Month};
pub use crate::time_source::{FixedClock, SystemClock, TimeSource};

// Reexport Weekday from chrono as part of the public type.
pub use chrono::Weekday;

/// Number of milliseconds in a day of the UTC calendar, leap seconds are ignored.
pub const MILLIS_PER_DAY: i64 = 86_400_000;

/// Number of days in a week.
pub const DAYS_IN_WEEK: u32 = 7;

/// Largest number of days a month can contain.
pub const MAX_DAYS_IN_MONTH: u32 = 31;

/// Number of months in a year.
pub const MONTHS_IN_YEAR: u32 = 12;
