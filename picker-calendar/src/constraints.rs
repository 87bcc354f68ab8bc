use std::io;

use utc_month::{CalendarDate, Month, TimeSource, Weekday};

use crate::codec::{read_month, read_opt_weekday, read_u8, write_opt_weekday, write_u8};
use crate::error::{Error, Result};
use crate::validator::{DateFilter, DateValidator};

/// Year of the first month of constraints that don't specify a start.
pub const DEFAULT_START_YEAR: i32 = 1900;

/// Year of the last month of constraints that don't specify an end.
pub const DEFAULT_END_YEAR: i32 = 2100;

// CalendarConstraints

/// Bounds and validator of a picker session, along with the month it is displaying.
///
/// Bounds and validator are fixed for the lifetime of the value while the open month can be
/// moved freely by its owner.
#[derive(Clone, Debug, Hash, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(into = "RawConstraints", try_from = "RawConstraints")
)]
pub struct CalendarConstraints {
    start: Month,
    end: Month,
    open_at: Month,
    validator: DateValidator,
    first_day_of_week: Option<Weekday>,
    month_span: u32,
    year_span: u32,
}

impl CalendarConstraints {
    /// Create constraints bounded by `[start, end]` and initially displaying `open_at`.
    ///
    /// ```
    /// use picker_calendar::{CalendarConstraints, DateValidator, Error, Month};
    ///
    /// let start = Month::new(2024, 0);
    /// let end = Month::new(2024, 11);
    ///
    /// let constraints =
    ///     CalendarConstraints::new(start, end, Month::new(2024, 5), DateValidator::accept_all());
    ///
    /// assert_eq!(constraints.unwrap().month_span(), 12);
    ///
    /// assert!(matches!(
    ///     CalendarConstraints::new(start, end, Month::new(2025, 0), DateValidator::accept_all()),
    ///     Err(Error::InvalidOrdering { .. }),
    /// ));
    /// ```
    pub fn new(start: Month, end: Month, open_at: Month, validator: DateValidator) -> Result<Self> {
        if start > open_at || open_at > end {
            return Err(Error::InvalidOrdering { start, open_at, end });
        }

        let month_span = (start.months_until(&end) + 1)
            .try_into()
            .expect("month span can't overflow for supported years");

        let year_span = (i64::from(end.year()) - i64::from(start.year()) + 1)
            .try_into()
            .expect("year span can't overflow for supported years");

        Ok(Self {
            start,
            end,
            open_at,
            validator,
            first_day_of_week: None,
            month_span,
            year_span,
        })
    }

    /// Start building constraints with default values.
    pub fn builder() -> Builder {
        Builder::default()
    }

    /// Get a builder initialized with the values of these constraints.
    pub fn to_builder(&self) -> Builder {
        Builder {
            start: Some(self.start),
            end: Some(self.end),
            open_at: Some(self.open_at),
            validator: Some(self.validator.clone()),
            first_day_of_week: self.first_day_of_week,
        }
    }

    /// Attach a first day of week to these constraints, grids use their own default if it is
    /// not set.
    pub fn with_first_day_of_week(self, first_day_of_week: Option<Weekday>) -> Self {
        Self { first_day_of_week, ..self }
    }

    // --
    // -- Getters
    // --

    pub fn start(&self) -> Month {
        self.start
    }

    pub fn end(&self) -> Month {
        self.end
    }

    /// Month that should currently be displayed.
    pub fn open_at(&self) -> Month {
        self.open_at
    }

    pub fn validator(&self) -> &DateValidator {
        &self.validator
    }

    pub fn first_day_of_week(&self) -> Option<Weekday> {
        self.first_day_of_week
    }

    /// Number of months in `[start, end]`, at least 1.
    pub fn month_span(&self) -> u32 {
        self.month_span
    }

    /// Number of years covered by `[start, end]`, at least 1.
    pub fn year_span(&self) -> u32 {
        self.year_span
    }

    // --
    // -- Queries
    // --

    /// Check if a day belongs to one of the months in the bounds.
    ///
    /// ```
    /// use picker_calendar::{CalendarConstraints, CalendarDate, DateValidator, Month};
    ///
    /// let constraints = CalendarConstraints::new(
    ///     Month::new(2024, 1),
    ///     Month::new(2024, 2),
    ///     Month::new(2024, 1),
    ///     DateValidator::accept_all(),
    /// )
    /// .unwrap();
    ///
    /// assert!(constraints.is_within_bounds(CalendarDate::from_ymd(2024, 2, 1).unwrap()));
    /// assert!(constraints.is_within_bounds(CalendarDate::from_ymd(2024, 3, 31).unwrap()));
    /// assert!(!constraints.is_within_bounds(CalendarDate::from_ymd(2024, 4, 1).unwrap()));
    /// ```
    pub fn is_within_bounds(&self, date: CalendarDate) -> bool {
        (self.start.first_day()..=self.end.last_day()).contains(&date)
    }

    /// Force a month into the bounds.
    pub fn clamp(&self, month: Month) -> Month {
        month.clamp(self.start, self.end)
    }

    // --
    // -- Session cursor
    // --

    /// Replace the month currently displayed.
    ///
    /// This does not check that the month is within the bounds: callers are expected to
    /// [`clamp`](Self::clamp) it first.
    pub fn set_open_at(&mut self, month: Month) {
        if !(self.start..=self.end).contains(&month) {
            #[cfg(feature = "log")]
            log::warn!(
                "Open month {month} is out of bounds [{}, {}]",
                self.start,
                self.end
            );
        }

        self.open_at = month;
    }

    /// Same constraints, displaying another month.
    pub fn with_open_at(mut self, month: Month) -> Self {
        self.set_open_at(month);
        self
    }

    // --
    // -- Serialization
    // --

    /// Serialize these constraints into a writer.
    pub fn serialize(&self, mut writer: impl io::Write) -> io::Result<()> {
        self.start.serialize(&mut writer)?;
        self.end.serialize(&mut writer)?;
        write_u8(&mut writer, 1)?;
        self.open_at.serialize(&mut writer)?;
        self.validator.serialize(&mut writer)?;
        write_opt_weekday(&mut writer, self.first_day_of_week)
    }

    /// Deserialize constraints from a reader, a missing open month falls back to the start.
    pub fn deserialize(mut reader: impl io::Read) -> Result<Self> {
        let start = read_month(&mut reader)?;
        let end = read_month(&mut reader)?;

        let open_at = match read_u8(&mut reader)? {
            0 => start,
            1 => read_month(&mut reader)?,
            flag => return Err(Error::Decode(format!("invalid presence flag {flag}"))),
        };

        let validator = DateValidator::deserialize(&mut reader)?;
        let first_day_of_week = read_opt_weekday(&mut reader)?;

        let res = Self::new(start, end, open_at, validator).inspect_err(|_err| {
            #[cfg(feature = "log")]
            log::warn!("Rejected serialized constraints: {_err}");
        })?;

        Ok(res.with_first_day_of_week(first_day_of_week))
    }
}

impl DateFilter for CalendarConstraints {
    /// A day can be picked if it is within bounds and accepted by the validator.
    fn is_valid(&self, date: CalendarDate) -> bool {
        self.is_within_bounds(date) && self.validator.is_valid(date)
    }
}

// Builder

/// Build [`CalendarConstraints`], filling unspecified values with defaults:
///
///  - bounds from January 1900 to December 2100
///  - a validator accepting every day
///  - open at the current month if it is within bounds, at the start otherwise
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Builder {
    start: Option<Month>,
    end: Option<Month>,
    open_at: Option<Month>,
    validator: Option<DateValidator>,
    first_day_of_week: Option<Weekday>,
}

impl Builder {
    pub fn with_start(self, start: Month) -> Self {
        Self { start: Some(start), ..self }
    }

    pub fn with_end(self, end: Month) -> Self {
        Self { end: Some(end), ..self }
    }

    pub fn with_open_at(self, open_at: Month) -> Self {
        Self { open_at: Some(open_at), ..self }
    }

    pub fn with_validator(self, validator: DateValidator) -> Self {
        Self { validator: Some(validator), ..self }
    }

    pub fn with_first_day_of_week(self, first_day_of_week: Weekday) -> Self {
        Self { first_day_of_week: Some(first_day_of_week), ..self }
    }

    /// Build the constraints, `clock` is only used to find the current month when no open
    /// month was specified.
    ///
    /// ```
    /// use picker_calendar::{CalendarConstraints, FixedClock, Month};
    ///
    /// let clock = FixedClock::from_ymd_hms(2024, 7, 14, 9, 30, 0);
    /// let constraints = CalendarConstraints::builder().build(&clock).unwrap();
    /// assert_eq!(constraints.start(), Month::new(1900, 0));
    /// assert_eq!(constraints.end(), Month::new(2100, 11));
    /// assert_eq!(constraints.open_at(), Month::new(2024, 6));
    ///
    /// let constraints = CalendarConstraints::builder()
    ///     .with_start(Month::new(2030, 0))
    ///     .with_end(Month::new(2030, 11))
    ///     .build(&clock)
    ///     .unwrap();
    ///
    /// assert_eq!(constraints.open_at(), Month::new(2030, 0));
    /// ```
    pub fn build(self, clock: &impl TimeSource) -> Result<CalendarConstraints> {
        let start = self.start.unwrap_or_else(|| Month::new(DEFAULT_START_YEAR, 0));
        let end = self.end.unwrap_or_else(|| Month::new(DEFAULT_END_YEAR, 11));

        let open_at = self.open_at.unwrap_or_else(|| {
            let today = Month::today(clock);

            if (start..=end).contains(&today) {
                today
            } else {
                start
            }
        });

        let validator = self.validator.unwrap_or_else(DateValidator::accept_all);
        let res = CalendarConstraints::new(start, end, open_at, validator)?;
        Ok(res.with_first_day_of_week(self.first_day_of_week))
    }
}

// Serde

#[cfg(feature = "serde")]
#[derive(serde::Serialize, serde::Deserialize)]
struct RawConstraints {
    start: Month,
    end: Month,
    open_at: Option<Month>,
    validator: DateValidator,
    #[serde(default)]
    first_day_of_week: Option<Weekday>,
}

#[cfg(feature = "serde")]
impl From<CalendarConstraints> for RawConstraints {
    fn from(val: CalendarConstraints) -> Self {
        Self {
            start: val.start,
            end: val.end,
            open_at: Some(val.open_at),
            validator: val.validator,
            first_day_of_week: val.first_day_of_week,
        }
    }
}

#[cfg(feature = "serde")]
impl TryFrom<RawConstraints> for CalendarConstraints {
    type Error = Error;

    fn try_from(raw: RawConstraints) -> Result<Self> {
        let open_at = raw.open_at.unwrap_or(raw.start);
        let res = Self::new(raw.start, raw.end, open_at, raw.validator)?;
        Ok(res.with_first_day_of_week(raw.first_day_of_week))
    }
}
