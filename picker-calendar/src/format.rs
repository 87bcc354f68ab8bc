use std::fmt::Write;

use chrono::format::{Item, StrftimeItems};

use utc_month::CalendarDate;

use crate::error::{Error, Result};

/// Turns days into human-readable strings for selection summaries.
///
/// The locale is an opaque identifier passed through from the host, this crate never inspects
/// the strings produced.
pub trait DayFormatter {
    fn format_day(&self, day: CalendarDate, locale: &str) -> String;

    fn format_day_range(
        &self,
        start: Option<CalendarDate>,
        end: Option<CalendarDate>,
        locale: &str,
    ) -> (Option<String>, Option<String>) {
        (
            start.map(|day| self.format_day(day, locale)),
            end.map(|day| self.format_day(day, locale)),
        )
    }

    /// Join the formatted bounds of a range into a single summary.
    ///
    /// When only one bound is set, it is displayed alone: implementations can override this to
    /// tell a start from an end in the wording of the locale.
    ///
    /// ```
    /// use picker_calendar::{DayFormatter, PatternFormatter};
    ///
    /// let formatter = PatternFormatter::iso();
    /// let start = Some("2024-03-05".to_string());
    /// let end = Some("2024-03-09".to_string());
    ///
    /// assert_eq!(
    ///     formatter.join_day_range(start.clone(), end, "en").as_deref(),
    ///     Some("2024-03-05 – 2024-03-09"),
    /// );
    ///
    /// assert_eq!(formatter.join_day_range(start, None, "en").as_deref(), Some("2024-03-05"));
    /// assert_eq!(formatter.join_day_range(None, None, "en"), None);
    /// ```
    fn join_day_range(
        &self,
        start: Option<String>,
        end: Option<String>,
        _locale: &str,
    ) -> Option<String> {
        match (start, end) {
            (Some(start), Some(end)) => Some(format!("{start} – {end}")),
            (start, end) => start.or(end),
        }
    }
}

impl<T: DayFormatter + ?Sized> DayFormatter for &T {
    fn format_day(&self, day: CalendarDate, locale: &str) -> String {
        (**self).format_day(day, locale)
    }

    fn format_day_range(
        &self,
        start: Option<CalendarDate>,
        end: Option<CalendarDate>,
        locale: &str,
    ) -> (Option<String>, Option<String>) {
        (**self).format_day_range(start, end, locale)
    }

    fn join_day_range(
        &self,
        start: Option<String>,
        end: Option<String>,
        locale: &str,
    ) -> Option<String> {
        (**self).join_day_range(start, end, locale)
    }
}

/// Check that a chrono pattern only contains items that can be used with dates.
pub(crate) fn check_pattern(pattern: &str) -> Result<()> {
    if pattern.is_empty() || StrftimeItems::new(pattern).any(|item| item == Item::Error) {
        return Err(Error::InvalidPattern(pattern.to_string()));
    }

    Ok(())
}

/// Format days with a chrono pattern, ignoring the locale.
///
/// ```
/// use picker_calendar::{CalendarDate, DayFormatter, PatternFormatter};
///
/// let formatter = PatternFormatter::new("%d/%m/%Y").unwrap();
/// let day = CalendarDate::from_ymd(2024, 3, 5).unwrap();
/// assert_eq!(formatter.format_day(day, "fr-FR"), "05/03/2024");
/// ```
#[derive(Clone, Debug, Hash, PartialEq, Eq)]
pub struct PatternFormatter {
    pattern: String,
}

impl PatternFormatter {
    pub const ISO_PATTERN: &'static str = "%Y-%m-%d";

    pub fn new(pattern: impl Into<String>) -> Result<Self> {
        let pattern = pattern.into();
        check_pattern(&pattern)?;
        Ok(Self { pattern })
    }

    /// Format days as `YYYY-MM-DD`.
    pub fn iso() -> Self {
        Self { pattern: Self::ISO_PATTERN.to_string() }
    }

    pub fn pattern(&self) -> &str {
        &self.pattern
    }
}

impl Default for PatternFormatter {
    fn default() -> Self {
        Self::iso()
    }
}

impl DayFormatter for PatternFormatter {
    fn format_day(&self, day: CalendarDate, _locale: &str) -> String {
        let mut res = String::new();

        // Patterns referring to a time of the day can't be rendered for a date.
        if write!(&mut res, "{}", day.naive_date().format(&self.pattern)).is_err() {
            res.clear();
            res.push_str(&day.to_string());
        }

        res
    }
}
