use std::{fmt, io};

use chrono::{Datelike, NaiveDate};

use crate::{TimeSource, MILLIS_PER_DAY};

/// Value of `NaiveDate::num_days_from_ce` for 1970-01-01.
const EPOCH_DAYS_FROM_CE: i64 = 719_163;

/// A canonical day: the number of milliseconds between the Unix epoch and the midnight (UTC) of
/// the day.
///
/// Any raw timestamp can be turned into a canonical day, sub-day precision is dropped and the
/// timezone the timestamp was produced in does not matter. Two values are the same day if and
/// only if they are equal.
#[derive(Clone, Copy, Eq, PartialEq, Hash, Ord, PartialOrd)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(from = "i64", into = "i64")
)]
pub struct CalendarDate(i64);

impl CalendarDate {
    /// Truncate a raw timestamp to the midnight of its day in UTC.
    ///
    /// ```
    /// use utc_month::{CalendarDate, MILLIS_PER_DAY};
    ///
    /// let noon = 19_000 * MILLIS_PER_DAY + MILLIS_PER_DAY / 2;
    /// assert_eq!(CalendarDate::from_millis(noon).millis(), 19_000 * MILLIS_PER_DAY);
    ///
    /// // Negative timestamps are rounded towards the past
    /// assert_eq!(CalendarDate::from_millis(-1).millis(), -MILLIS_PER_DAY);
    /// ```
    pub const fn from_millis(millis: i64) -> Self {
        let days = millis.div_euclid(MILLIS_PER_DAY);

        match days.checked_mul(MILLIS_PER_DAY) {
            Some(canonical) => Self(canonical),
            // The midnight before `i64::MIN` can't be represented, saturate to the next one.
            None => Self((days + 1) * MILLIS_PER_DAY),
        }
    }

    /// Build the canonical day for a date of the Gregorian calendar, `month` and `day` being
    /// 1-based.
    ///
    /// ```
    /// use utc_month::CalendarDate;
    ///
    /// assert_eq!(CalendarDate::from_ymd(1970, 1, 2).unwrap().millis(), 86_400_000);
    /// assert!(CalendarDate::from_ymd(2023, 2, 29).is_none());
    /// ```
    pub fn from_ymd(year: i32, month: u32, day: u32) -> Option<Self> {
        NaiveDate::from_ymd_opt(year, month, day).map(Self::from_naive_date)
    }

    /// Build the canonical day of a chrono date.
    pub fn from_naive_date(date: NaiveDate) -> Self {
        let days = i64::from(date.num_days_from_ce()) - EPOCH_DAYS_FROM_CE;
        Self(days * MILLIS_PER_DAY)
    }

    /// Get the current day in UTC, as seen by given time source.
    ///
    /// ```
    /// use utc_month::{CalendarDate, FixedClock};
    ///
    /// let clock = FixedClock::from_ymd_hms(2024, 3, 10, 23, 59, 59);
    /// assert_eq!(CalendarDate::today(&clock), CalendarDate::from_ymd(2024, 3, 10).unwrap());
    /// ```
    pub fn today(clock: &impl TimeSource) -> Self {
        Self::from_millis(clock.now_millis())
    }

    /// Milliseconds since epoch of the midnight of this day.
    pub const fn millis(self) -> i64 {
        self.0
    }

    /// Number of days since 1970-01-01.
    pub const fn days_since_epoch(self) -> i64 {
        self.0.div_euclid(MILLIS_PER_DAY)
    }

    /// Get the day `days` after this one, `days` can be negative.
    ///
    /// ```
    /// use utc_month::CalendarDate;
    ///
    /// let day = CalendarDate::from_ymd(2024, 2, 28).unwrap();
    /// assert_eq!(day.days_later(2), CalendarDate::from_ymd(2024, 3, 1).unwrap());
    /// assert_eq!(day.days_later(-28), CalendarDate::from_ymd(2024, 1, 31).unwrap());
    /// ```
    pub const fn days_later(self, days: i64) -> Self {
        Self::from_millis(self.0.saturating_add(days.saturating_mul(MILLIS_PER_DAY)))
    }

    /// Convert this day to a chrono date.
    ///
    /// Days beyond the range supported by chrono saturate to `NaiveDate::MIN` or
    /// `NaiveDate::MAX`.
    pub fn naive_date(self) -> NaiveDate {
        i32::try_from(self.days_since_epoch() + EPOCH_DAYS_FROM_CE)
            .ok()
            .and_then(NaiveDate::from_num_days_from_ce_opt)
            .unwrap_or(if self.0 < 0 { NaiveDate::MIN } else { NaiveDate::MAX })
    }

    /// Year of this day.
    pub fn year(self) -> i32 {
        self.naive_date().year()
    }

    /// Month of this day, starting from 1.
    pub fn month(self) -> u32 {
        self.naive_date().month()
    }

    /// Day of the month, starting from 1.
    pub fn day(self) -> u32 {
        self.naive_date().day()
    }

    /// Serialize this day into a writer.
    pub fn serialize(self, mut writer: impl io::Write) -> io::Result<()> {
        writer.write_all(&self.0.to_le_bytes())
    }

    /// Deserialize a day from a reader, the value is canonicalized if it was not.
    ///
    /// ```
    /// use utc_month::CalendarDate;
    ///
    /// let day = CalendarDate::from_ymd(2022, 8, 12).unwrap();
    ///
    /// let mut buf = Vec::new();
    /// day.serialize(&mut buf).unwrap();
    /// assert_eq!(CalendarDate::deserialize(buf.as_slice()).unwrap(), day);
    /// ```
    pub fn deserialize(mut reader: impl io::Read) -> io::Result<Self> {
        let mut buf = [0; std::mem::size_of::<i64>()];
        reader.read_exact(&mut buf)?;
        Ok(Self::from_millis(i64::from_le_bytes(buf)))
    }
}

impl From<i64> for CalendarDate {
    fn from(millis: i64) -> Self {
        Self::from_millis(millis)
    }
}

impl From<CalendarDate> for i64 {
    fn from(date: CalendarDate) -> Self {
        date.0
    }
}

impl From<NaiveDate> for CalendarDate {
    fn from(date: NaiveDate) -> Self {
        Self::from_naive_date(date)
    }
}

impl fmt::Debug for CalendarDate {
    /// ```
    /// use utc_month::CalendarDate;
    ///
    /// let day = CalendarDate::from_ymd(2022, 8, 12).unwrap();
    /// assert_eq!(format!("{day:?}"), "2022-08-12");
    /// ```
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.naive_date())
    }
}

impl fmt::Display for CalendarDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.naive_date())
    }
}
