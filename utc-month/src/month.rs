use std::cmp::Ordering;
use std::hash::{Hash, Hasher};
use std::{fmt, io};

use chrono::{Datelike, Months, NaiveDate, Weekday};

use crate::{CalendarDate, TimeSource, DAYS_IN_WEEK, MONTHS_IN_YEAR};

// Errors

/// A `(year, month)` pair that doesn't describe a month of the supported calendar.
#[derive(Clone, Copy, Debug, Hash, PartialEq, Eq)]
pub struct InvalidMonth {
    pub year: i64,
    pub month: i64,
}

impl fmt::Display for InvalidMonth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "invalid month {} of year {}: expected a month in 0..12 of a year supported by the \
             Gregorian calendar",
            self.month, self.year,
        )
    }
}

impl std::error::Error for InvalidMonth {}

fn count_days_in_month(first_of_month: NaiveDate) -> u32 {
    let Some(first_next_month) = first_of_month.checked_add_months(Months::new(1)) else {
        // December of last supported year
        return 31;
    };

    (first_next_month - first_of_month)
        .num_days()
        .try_into()
        .expect("time not monotonic while comparing dates")
}

// Month

/// A month of the Gregorian calendar, in UTC.
///
/// Months are identified by their year and their 0-based month number, the derived values (count
/// of days, first day, ...) are computed once at construction. Ordering is chronological.
#[derive(Clone, Copy)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(into = "(i32, u32)", try_from = "(i32, u32)")
)]
pub struct Month {
    year: i32,
    month: u32,
    first_day: CalendarDate,
    first_weekday: Weekday,
    days_in_month: u32,
}

impl Month {
    /// Get the month of year `year`, `month` being counted from 0 (January) to 11 (December).
    ///
    /// # Panics
    ///
    /// If `month` is not in `0..12` or if the year is not supported. See [`Month::try_new`] for
    /// a fallible alternative.
    ///
    /// ```
    /// use utc_month::Month;
    ///
    /// let month = Month::new(2023, 11);
    /// assert_eq!(month.year(), 2023);
    /// assert_eq!(month.month(), 11);
    /// assert_eq!(month.days_in_month(), 31);
    /// ```
    pub fn new(year: i32, month: u32) -> Self {
        match Self::try_new(year, month) {
            Ok(res) => res,
            Err(err) => panic!("{err}"),
        }
    }

    /// Get the month of year `year`, `month` being counted from 0, or an error if the pair is
    /// not a month of the supported calendar.
    ///
    /// ```
    /// use utc_month::Month;
    ///
    /// assert!(Month::try_new(2023, 11).is_ok());
    /// assert!(Month::try_new(2023, 12).is_err());
    /// assert!(Month::try_new(i32::MAX, 0).is_err());
    /// ```
    pub fn try_new(year: i32, month: u32) -> Result<Self, InvalidMonth> {
        let invalid = || InvalidMonth { year: year.into(), month: month.into() };

        if month >= MONTHS_IN_YEAR {
            return Err(invalid());
        }

        let first_of_month = NaiveDate::from_ymd_opt(year, month + 1, 1).ok_or_else(invalid)?;

        Ok(Self {
            year,
            month,
            first_day: CalendarDate::from_naive_date(first_of_month),
            first_weekday: first_of_month.weekday(),
            days_in_month: count_days_in_month(first_of_month),
        })
    }

    /// Get the month containing given timestamp, in UTC.
    ///
    /// Timestamps beyond the range of years supported by chrono saturate to the first or last
    /// supported month.
    ///
    /// ```
    /// use utc_month::{Month, MILLIS_PER_DAY};
    ///
    /// assert_eq!(Month::from_millis(0), Month::new(1970, 0));
    /// assert_eq!(Month::from_millis(-1), Month::new(1969, 11));
    /// assert_eq!(Month::from_millis(31 * MILLIS_PER_DAY), Month::new(1970, 1));
    /// ```
    pub fn from_millis(millis: i64) -> Self {
        Self::from_date(CalendarDate::from_millis(millis))
    }

    /// Get the month containing given day.
    pub fn from_date(date: CalendarDate) -> Self {
        let date = date.naive_date();
        Self::new(date.year(), date.month0())
    }

    /// Get the month containing the current instant, as seen by given time source.
    ///
    /// ```
    /// use utc_month::{FixedClock, Month};
    ///
    /// let clock = FixedClock::from_ymd_hms(2024, 2, 29, 12, 0, 0);
    /// assert_eq!(Month::today(&clock), Month::new(2024, 1));
    /// ```
    pub fn today(clock: &impl TimeSource) -> Self {
        Self::from_millis(clock.now_millis())
    }

    pub fn year(&self) -> i32 {
        self.year
    }

    /// Month of the year, starting from 0 for January.
    pub fn month(&self) -> u32 {
        self.month
    }

    pub fn days_in_month(&self) -> u32 {
        self.days_in_month
    }

    pub fn days_in_week(&self) -> u32 {
        DAYS_IN_WEEK
    }

    /// Canonical day of the first day of this month.
    pub fn first_day(&self) -> CalendarDate {
        self.first_day
    }

    /// Canonical day of the last day of this month.
    pub fn last_day(&self) -> CalendarDate {
        self.get_day(self.days_in_month)
    }

    /// Weekday of the first day of this month.
    pub fn day_of_week_of_first(&self) -> Weekday {
        self.first_weekday
    }

    /// Check if given day belongs to this month.
    pub fn contains(&self, date: CalendarDate) -> bool {
        (self.first_day()..=self.last_day()).contains(&date)
    }

    /// Signed number of months from this month to `other`, which is zero if and only if both
    /// months are equal.
    ///
    /// ```
    /// use utc_month::Month;
    ///
    /// let jan = Month::new(2024, 0);
    /// assert_eq!(jan.months_until(&Month::new(2024, 0)), 0);
    /// assert_eq!(jan.months_until(&Month::new(2025, 2)), 14);
    /// assert_eq!(jan.months_until(&Month::new(2023, 11)), -1);
    /// ```
    pub fn months_until(&self, other: &Month) -> i64 {
        (i64::from(other.year) - i64::from(self.year)) * i64::from(MONTHS_IN_YEAR)
            + (i64::from(other.month) - i64::from(self.month))
    }

    /// Get the month `months` months after this one, `months` can be negative.
    ///
    /// # Panics
    ///
    /// If the resulting month is outside of the supported calendar.
    ///
    /// ```
    /// use utc_month::Month;
    ///
    /// let nov = Month::new(2023, 10);
    /// assert_eq!(nov.months_later(2), Month::new(2024, 0));
    /// assert_eq!(nov.months_later(-11), Month::new(2022, 11));
    /// ```
    pub fn months_later(&self, months: i64) -> Month {
        let total = i64::from(self.year) * i64::from(MONTHS_IN_YEAR)
            + i64::from(self.month)
            + months;

        let year = total.div_euclid(MONTHS_IN_YEAR.into());
        let month = total.rem_euclid(MONTHS_IN_YEAR.into());

        i32::try_from(year)
            .ok()
            .and_then(|year| Self::try_new(year, month as u32).ok())
            .unwrap_or_else(|| panic!("{}", InvalidMonth { year, month }))
    }

    /// Canonical day of the `day_of_month`-th day of this month, starting from 1.
    ///
    /// Values greater than the number of days of this month are accepted and roll over into the
    /// following months: this is what grids use to compute the days displayed after the end of
    /// the month.
    ///
    /// # Panics
    ///
    /// If `day_of_month` is 0.
    ///
    /// ```
    /// use utc_month::{CalendarDate, Month};
    ///
    /// let feb = Month::new(2023, 1);
    /// assert_eq!(feb.get_day(28), CalendarDate::from_ymd(2023, 2, 28).unwrap());
    /// assert_eq!(feb.get_day(30), CalendarDate::from_ymd(2023, 3, 2).unwrap());
    /// ```
    pub fn get_day(&self, day_of_month: u32) -> CalendarDate {
        assert!(day_of_month >= 1, "days of month are counted from 1");
        self.first_day.days_later(i64::from(day_of_month) - 1)
    }

    /// Number of days between the first day of a week starting on `first_day_of_week` and the
    /// first day of this month, in `0..7`.
    ///
    /// ```
    /// use utc_month::{Month, Weekday};
    ///
    /// // 2023-10-01 is a Sunday
    /// let oct = Month::new(2023, 9);
    /// assert_eq!(oct.days_from_start_of_week_to_first_of_month(Weekday::Sun), 0);
    /// assert_eq!(oct.days_from_start_of_week_to_first_of_month(Weekday::Mon), 6);
    /// assert_eq!(oct.days_from_start_of_week_to_first_of_month(Weekday::Sat), 1);
    /// ```
    pub fn days_from_start_of_week_to_first_of_month(&self, first_day_of_week: Weekday) -> u32 {
        (self.first_weekday.num_days_from_monday() + DAYS_IN_WEEK
            - first_day_of_week.num_days_from_monday())
            % DAYS_IN_WEEK
    }

    /// Serialize this month into a writer, as a pair of 32 bits integers.
    pub fn serialize(&self, mut writer: impl io::Write) -> io::Result<()> {
        writer.write_all(&self.year.to_le_bytes())?;
        writer.write_all(&(self.month as i32).to_le_bytes())
    }

    /// Deserialize a month from a reader.
    ///
    /// ```
    /// use utc_month::Month;
    ///
    /// let mut buf = Vec::new();
    /// Month::new(1999, 4).serialize(&mut buf).unwrap();
    /// assert_eq!(Month::deserialize(buf.as_slice()).unwrap(), Month::new(1999, 4));
    ///
    /// buf[4] = 12;
    /// assert!(Month::deserialize(buf.as_slice()).is_err());
    /// ```
    pub fn deserialize(mut reader: impl io::Read) -> io::Result<Self> {
        let mut read_i32 = || -> io::Result<i32> {
            let mut buf = [0; std::mem::size_of::<i32>()];
            reader.read_exact(&mut buf)?;
            Ok(i32::from_le_bytes(buf))
        };

        let year = read_i32()?;
        let month = read_i32()?;

        u32::try_from(month)
            .map_err(|_| InvalidMonth { year: year.into(), month: month.into() })
            .and_then(|month| Self::try_new(year, month))
            .map_err(|err| io::Error::new(io::ErrorKind::InvalidData, err))
    }
}

impl PartialEq for Month {
    fn eq(&self, other: &Self) -> bool {
        (self.year, self.month) == (other.year, other.month)
    }
}

impl Eq for Month {}

impl Hash for Month {
    fn hash<H: Hasher>(&self, state: &mut H) {
        (self.year, self.month).hash(state)
    }
}

impl PartialOrd for Month {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Month {
    fn cmp(&self, other: &Self) -> Ordering {
        (self.year, self.month).cmp(&(other.year, other.month))
    }
}

impl From<Month> for (i32, u32) {
    fn from(month: Month) -> Self {
        (month.year, month.month)
    }
}

impl TryFrom<(i32, u32)> for Month {
    type Error = InvalidMonth;

    fn try_from((year, month): (i32, u32)) -> Result<Self, Self::Error> {
        Self::try_new(year, month)
    }
}

impl fmt::Debug for Month {
    /// ```
    /// use utc_month::Month;
    ///
    /// assert_eq!(format!("{:?}", Month::new(2022, 7)), "Month(2022-08)");
    /// ```
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Month({self})")
    }
}

impl fmt::Display for Month {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}", self.year, self.month + 1)
    }
}
