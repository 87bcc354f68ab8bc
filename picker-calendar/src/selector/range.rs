use std::hash::{Hash, Hasher};
use std::io;
use std::ops::RangeInclusive;

use utc_month::CalendarDate;

use crate::codec::{read_opt_day, write_opt_day};
use crate::error::{Error, Result};
use crate::format::DayFormatter;
use crate::selector::DateSelector;
use crate::text::{EntryOutcome, FieldState};

/// Selection of a range of days.
///
/// Picking days on the grid goes through the following states:
///
/// ```text
/// Empty --select(d)--> StartOnly(d)
/// StartOnly(s) --select(d), d >= s--> Complete(s, d)
/// StartOnly(s) --select(d), d < s---> StartOnly(d)
/// Complete(s, e) --select(d)--------> StartOnly(d)
/// ```
///
/// Days typed in text fields are kept as proposals until both form a valid range, which is
/// then committed at once. Proposals follow the committed selection whenever it changes, so
/// that a single field can be edited and that stale input is never committed.
#[derive(Clone, Copy, Debug, Default)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(
        into = "(Option<CalendarDate>, Option<CalendarDate>)",
        try_from = "(Option<CalendarDate>, Option<CalendarDate>)"
    )
)]
pub struct RangeDateSelector {
    start: Option<CalendarDate>,
    end: Option<CalendarDate>,
    proposed_start: Option<CalendarDate>,
    proposed_end: Option<CalendarDate>,
}

impl RangeDateSelector {
    /// Create a selector with an initial selection.
    ///
    /// ```
    /// use picker_calendar::{CalendarDate, Error, RangeDateSelector};
    ///
    /// let day1 = CalendarDate::from_ymd(2024, 3, 5).unwrap();
    /// let day2 = CalendarDate::from_ymd(2024, 3, 9).unwrap();
    ///
    /// assert!(RangeDateSelector::new(Some(day1), Some(day2)).is_ok());
    /// assert!(RangeDateSelector::new(None, Some(day2)).is_ok());
    ///
    /// assert!(matches!(
    ///     RangeDateSelector::new(Some(day2), Some(day1)),
    ///     Err(Error::InvalidRange { .. }),
    /// ));
    /// ```
    pub fn new(start: Option<CalendarDate>, end: Option<CalendarDate>) -> Result<Self> {
        let mut res = Self::default();
        res.set_selection((start, end))?;
        Ok(res)
    }

    pub fn start(&self) -> Option<CalendarDate> {
        self.start
    }

    pub fn end(&self) -> Option<CalendarDate> {
        self.end
    }

    /// Update the proposal of the start field, see [`RangeDateSelector::propose_end`].
    pub fn propose_start(&mut self, field: FieldState) -> EntryOutcome {
        self.proposed_start = field.day();
        self.commit_proposals()
    }

    /// Update the proposal of the end field, the selection is replaced only when both
    /// proposals are valid days forming a valid range. The start proposal holds the committed
    /// start until its field is edited.
    ///
    /// ```
    /// use picker_calendar::text::{EntryOutcome, FieldState};
    /// use picker_calendar::{CalendarDate, DateSelector, RangeDateSelector};
    ///
    /// let day1 = CalendarDate::from_ymd(2024, 3, 5).unwrap();
    /// let day2 = CalendarDate::from_ymd(2024, 3, 9).unwrap();
    ///
    /// let mut selector = RangeDateSelector::default();
    /// assert_eq!(selector.propose_end(FieldState::Valid(day1)), EntryOutcome::Incomplete);
    /// assert_eq!(selector.propose_start(FieldState::Valid(day2)), EntryOutcome::InvalidRange);
    /// assert_eq!(selector.selection(), (None, None));
    ///
    /// assert_eq!(selector.propose_start(FieldState::Valid(day1)), EntryOutcome::Committed);
    /// assert_eq!(selector.selection(), (Some(day1), Some(day1)));
    ///
    /// // Only one field is edited
    /// assert_eq!(selector.propose_end(FieldState::Valid(day2)), EntryOutcome::Committed);
    /// assert_eq!(selector.selection(), (Some(day1), Some(day2)));
    /// ```
    pub fn propose_end(&mut self, field: FieldState) -> EntryOutcome {
        self.proposed_end = field.day();
        self.commit_proposals()
    }

    fn commit_proposals(&mut self) -> EntryOutcome {
        match (self.proposed_start, self.proposed_end) {
            (Some(start), Some(end)) if start <= end => {
                self.start = Some(start);
                self.end = Some(end);
                EntryOutcome::Committed
            }
            (Some(_), Some(_)) => EntryOutcome::InvalidRange,
            _ => EntryOutcome::Incomplete,
        }
    }

    /// Reset proposals to the committed selection.
    fn sync_proposals(&mut self) {
        self.proposed_start = self.start;
        self.proposed_end = self.end;
    }
}

impl DateSelector for RangeDateSelector {
    type Selection = (Option<CalendarDate>, Option<CalendarDate>);

    fn select(&mut self, day: CalendarDate) {
        match (self.start, self.end) {
            (None, _) => self.start = Some(day),
            (Some(start), None) if start <= day => self.end = Some(day),
            _ => {
                #[cfg(feature = "log")]
                log::debug!("Restarting range selection at {day}");
                self.start = Some(day);
                self.end = None;
            }
        }

        self.sync_proposals();
    }

    fn set_selection(&mut self, (start, end): Self::Selection) -> Result<()> {
        if let (Some(start), Some(end)) = (start, end) {
            if start > end {
                return Err(Error::InvalidRange { start, end });
            }
        }

        self.start = start;
        self.end = end;
        self.sync_proposals();
        Ok(())
    }

    fn selection(&self) -> Self::Selection {
        (self.start, self.end)
    }

    fn is_selection_complete(&self) -> bool {
        matches!((self.start, self.end), (Some(start), Some(end)) if start <= end)
    }

    fn selected_days(&self) -> Vec<CalendarDate> {
        self.start.into_iter().chain(self.end).collect()
    }

    fn selected_ranges(&self) -> Vec<RangeInclusive<CalendarDate>> {
        match (self.start, self.end) {
            (Some(start), Some(end)) => vec![start..=end],
            _ => Vec::new(),
        }
    }

    fn selection_display_string<F>(&self, formatter: &F, locale: &str) -> Option<String>
    where
        F: DayFormatter + ?Sized,
    {
        let (start, end) = formatter.format_day_range(self.start, self.end, locale);
        formatter.join_day_range(start, end, locale)
    }

    fn serialize(&self, mut writer: impl io::Write) -> io::Result<()> {
        write_opt_day(&mut writer, self.start)?;
        write_opt_day(&mut writer, self.end)
    }

    fn deserialize(mut reader: impl io::Read) -> Result<Self> {
        let start = read_opt_day(&mut reader)?;
        let end = read_opt_day(&mut reader)?;
        Self::new(start, end)
    }
}

// Proposals of text fields are transient input, they are not part of the selection.

impl PartialEq for RangeDateSelector {
    fn eq(&self, other: &Self) -> bool {
        self.selection() == other.selection()
    }
}

impl Eq for RangeDateSelector {}

impl Hash for RangeDateSelector {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.selection().hash(state)
    }
}

impl From<RangeDateSelector> for (Option<CalendarDate>, Option<CalendarDate>) {
    fn from(selector: RangeDateSelector) -> Self {
        selector.selection()
    }
}

impl TryFrom<(Option<CalendarDate>, Option<CalendarDate>)> for RangeDateSelector {
    type Error = Error;

    fn try_from((start, end): (Option<CalendarDate>, Option<CalendarDate>)) -> Result<Self> {
        Self::new(start, end)
    }
}
