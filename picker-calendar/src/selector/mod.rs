//! Selection state of a picker session.

mod range;
mod single;

use std::io;
use std::ops::RangeInclusive;

use utc_month::CalendarDate;

use crate::error::Result;
use crate::format::DayFormatter;

pub use range::RangeDateSelector;
pub use single::SingleDateSelector;

/// A selection state machine, fed with the days picked by the user.
///
/// Days are canonical by construction, so that any stored value has day granularity.
pub trait DateSelector {
    type Selection;

    /// Handle a day picked on the grid.
    fn select(&mut self, day: CalendarDate);

    /// Replace the whole selection.
    fn set_selection(&mut self, selection: Self::Selection) -> Result<()>;

    fn selection(&self) -> Self::Selection;

    /// Check if the selection has enough information to be accepted.
    fn is_selection_complete(&self) -> bool;

    /// Days that should be highlighted individually.
    fn selected_days(&self) -> Vec<CalendarDate>;

    /// Ranges of days that should be painted as filled ranges.
    fn selected_ranges(&self) -> Vec<RangeInclusive<CalendarDate>>;

    /// Summary of the selection, or `None` if nothing is selected.
    fn selection_display_string<F>(&self, formatter: &F, locale: &str) -> Option<String>
    where
        F: DayFormatter + ?Sized;

    fn serialize(&self, writer: impl io::Write) -> io::Result<()>;

    fn deserialize(reader: impl io::Read) -> Result<Self>
    where
        Self: Sized;
}
