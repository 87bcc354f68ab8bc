//! Typing days instead of picking them on the grid.
//!
//! Raw text of each input field is first checked into a [`FieldState`], which selectors then use
//! to decide if their selection can be updated. Invalid input never alters a committed
//! selection.

use chrono::NaiveDate;

use utc_month::CalendarDate;

use crate::constraints::CalendarConstraints;
use crate::error::Result;
use crate::format::check_pattern;
use crate::validator::DateFilter;

/// Turns text typed by a user into a day.
pub trait DateParser {
    fn parse_day(&self, raw: &str) -> Option<CalendarDate>;
}

impl<T: DateParser + ?Sized> DateParser for &T {
    fn parse_day(&self, raw: &str) -> Option<CalendarDate> {
        (**self).parse_day(raw)
    }
}

/// Parse days with a chrono pattern.
///
/// ```
/// use picker_calendar::{CalendarDate, DateParser, PatternParser};
///
/// let parser = PatternParser::new("%m/%d/%Y").unwrap();
/// assert_eq!(parser.parse_day("03/05/2024"), CalendarDate::from_ymd(2024, 3, 5));
/// assert_eq!(parser.parse_day("02/30/2024"), None);
/// assert_eq!(parser.parse_day("2024-03-05"), None);
/// ```
#[derive(Clone, Debug, Hash, PartialEq, Eq)]
pub struct PatternParser {
    pattern: String,
}

impl PatternParser {
    pub fn new(pattern: impl Into<String>) -> Result<Self> {
        let pattern = pattern.into();
        check_pattern(&pattern)?;
        Ok(Self { pattern })
    }

    /// Parse days written as `YYYY-MM-DD`.
    pub fn iso() -> Self {
        Self { pattern: crate::format::PatternFormatter::ISO_PATTERN.to_string() }
    }

    pub fn pattern(&self) -> &str {
        &self.pattern
    }
}

impl Default for PatternParser {
    fn default() -> Self {
        Self::iso()
    }
}

impl DateParser for PatternParser {
    fn parse_day(&self, raw: &str) -> Option<CalendarDate> {
        NaiveDate::parse_from_str(raw.trim(), &self.pattern)
            .ok()
            .map(CalendarDate::from_naive_date)
    }
}

/// What a text field currently holds.
#[derive(Clone, Copy, Debug, Hash, PartialEq, Eq)]
pub enum FieldState {
    /// Nothing was typed yet.
    Empty,
    /// A day that can be picked.
    Valid(CalendarDate),
    /// The text doesn't describe a day.
    InvalidFormat,
    /// The day is out of bounds or rejected by the validator.
    OutOfRange,
}

impl FieldState {
    pub fn day(self) -> Option<CalendarDate> {
        match self {
            Self::Valid(day) => Some(day),
            _ => None,
        }
    }

    pub fn is_valid(self) -> bool {
        matches!(self, Self::Valid(_))
    }
}

/// Effect of text input on the selection of a selector.
#[derive(Clone, Copy, Debug, Hash, PartialEq, Eq)]
pub enum EntryOutcome {
    /// The selection was replaced by the typed input.
    Committed,
    /// Some field is empty or invalid, the selection was left untouched.
    Incomplete,
    /// Both fields hold valid days but the end is before the start, the selection was left
    /// untouched.
    InvalidRange,
}

/// Check text typed in a field against a parser and constraints.
///
/// ```
/// use picker_calendar::text::{check_text, FieldState};
/// use picker_calendar::{CalendarConstraints, CalendarDate, FixedClock, Month, PatternParser};
///
/// let constraints = CalendarConstraints::builder()
///     .with_start(Month::new(2024, 0))
///     .with_end(Month::new(2024, 11))
///     .build(&FixedClock(0))
///     .unwrap();
///
/// let parser = PatternParser::iso();
/// let day = CalendarDate::from_ymd(2024, 3, 5).unwrap();
///
/// assert_eq!(check_text(" ", &parser, &constraints), FieldState::Empty);
/// assert_eq!(check_text("2024-03-05", &parser, &constraints), FieldState::Valid(day));
/// assert_eq!(check_text("2024-03-", &parser, &constraints), FieldState::InvalidFormat);
/// assert_eq!(check_text("2025-03-05", &parser, &constraints), FieldState::OutOfRange);
/// ```
pub fn check_text(
    raw: &str,
    parser: &(impl DateParser + ?Sized),
    constraints: &CalendarConstraints,
) -> FieldState {
    if raw.trim().is_empty() {
        return FieldState::Empty;
    }

    let Some(day) = parser.parse_day(raw) else {
        #[cfg(feature = "log")]
        log::debug!("Could not parse {raw:?} as a day");
        return FieldState::InvalidFormat;
    };

    if !constraints.is_valid(day) {
        #[cfg(feature = "log")]
        log::debug!("Typed day {day} can't be picked");
        return FieldState::OutOfRange;
    }

    FieldState::Valid(day)
}
