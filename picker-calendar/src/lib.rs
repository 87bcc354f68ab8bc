#![doc = include_str!("../../README.md")]
// Enable doc_auto_cfg feature when building docs on the nightly channel
// (which will be the case for docs.rs).
#![allow(unexpected_cfgs)]
#![cfg_attr(all(doc, CHANNEL_NIGHTLY), feature(doc_auto_cfg))]

pub mod constraints;
pub mod error;
pub mod format;
pub mod grid;
pub mod pager;
pub mod selector;
pub mod text;
pub mod validator;

mod codec;

#[cfg(test)]
mod tests;

// Public re-exports
pub use crate::constraints::CalendarConstraints;
pub use crate::error::{Error, Result};
pub use crate::format::{DayFormatter, PatternFormatter};
pub use crate::grid::MonthGrid;
pub use crate::pager::{MonthPager, YearGrid};
pub use crate::selector::{DateSelector, RangeDateSelector, SingleDateSelector};
pub use crate::text::{DateParser, PatternParser};
pub use crate::validator::{DateFilter, DateValidator};
pub use utc_month::{
    CalendarDate, FixedClock, Month, SystemClock, TimeSource, Weekday, MILLIS_PER_DAY,
};
