use std::io;
use std::ops::RangeInclusive;

use utc_month::CalendarDate;

use crate::codec::{read_opt_day, write_opt_day};
use crate::error::Result;
use crate::format::DayFormatter;
use crate::selector::DateSelector;
use crate::text::{EntryOutcome, FieldState};

/// Selection of at most one day.
#[derive(Clone, Copy, Debug, Default, Hash, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SingleDateSelector {
    selected: Option<CalendarDate>,
}

impl SingleDateSelector {
    pub fn new(selected: Option<CalendarDate>) -> Self {
        Self { selected }
    }

    /// Update the selection from the content of the text field.
    ///
    /// Only a valid day replaces the selection, anything else leaves it untouched.
    pub fn apply_text(&mut self, field: FieldState) -> EntryOutcome {
        match field {
            FieldState::Valid(day) => {
                self.select(day);
                EntryOutcome::Committed
            }
            _ => EntryOutcome::Incomplete,
        }
    }
}

impl DateSelector for SingleDateSelector {
    type Selection = Option<CalendarDate>;

    fn select(&mut self, day: CalendarDate) {
        self.selected = Some(day);
    }

    fn set_selection(&mut self, selection: Self::Selection) -> Result<()> {
        self.selected = selection;
        Ok(())
    }

    fn selection(&self) -> Self::Selection {
        self.selected
    }

    fn is_selection_complete(&self) -> bool {
        self.selected.is_some()
    }

    fn selected_days(&self) -> Vec<CalendarDate> {
        self.selected.into_iter().collect()
    }

    fn selected_ranges(&self) -> Vec<RangeInclusive<CalendarDate>> {
        Vec::new()
    }

    fn selection_display_string<F>(&self, formatter: &F, locale: &str) -> Option<String>
    where
        F: DayFormatter + ?Sized,
    {
        self.selected.map(|day| formatter.format_day(day, locale))
    }

    fn serialize(&self, writer: impl io::Write) -> io::Result<()> {
        write_opt_day(writer, self.selected)
    }

    fn deserialize(reader: impl io::Read) -> Result<Self> {
        Ok(Self { selected: read_opt_day(reader)? })
    }
}
