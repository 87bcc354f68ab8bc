use utc_month::Month;

use crate::constraints::CalendarConstraints;

/// Stable identifier of a month: the timestamp of its first day.
///
/// Two `Month` values built independently for the same month share the same identifier.
pub fn stable_id(month: &Month) -> i64 {
    month.first_day().millis()
}

// MonthPager

/// Index of the pages of a calendar, one page per month within the bounds.
#[derive(Clone, Copy, Debug, Hash, PartialEq, Eq)]
pub struct MonthPager {
    start: Month,
    end: Month,
    page_count: usize,
}

impl MonthPager {
    pub fn new(constraints: &CalendarConstraints) -> Self {
        Self {
            start: constraints.start(),
            end: constraints.end(),
            page_count: constraints.month_span() as usize,
        }
    }

    pub fn page_count(&self) -> usize {
        self.page_count
    }

    /// Month displayed on given page.
    ///
    /// # Panics
    ///
    /// If `page` is not lower than the count of pages.
    pub fn month_at(&self, page: usize) -> Month {
        assert!(page < self.page_count, "page {page} is out of bounds");
        self.start.months_later(page as i64)
    }

    /// Page displaying given month.
    ///
    /// # Panics
    ///
    /// If the month is out of bounds, use [`CalendarConstraints::clamp`] first.
    pub fn page_for(&self, month: &Month) -> usize {
        assert!(
            (self.start..=self.end).contains(month),
            "{month} is out of bounds [{}, {}]",
            self.start,
            self.end,
        );

        self.start.months_until(month) as usize
    }

    /// Stable identifier of the month displayed on given page.
    pub fn item_id(&self, page: usize) -> i64 {
        stable_id(&self.month_at(page))
    }

    /// Page that should be displayed first for given constraints.
    pub fn open_page(&self, constraints: &CalendarConstraints) -> usize {
        self.page_for(&constraints.clamp(constraints.open_at()))
    }

    /// Month to display when jumping to `year` while `current` is displayed: the month of the
    /// year is kept and the result is clamped into bounds.
    pub fn jump_to_year(&self, year: i32, current: &Month) -> Month {
        match Month::try_new(year, current.month()) {
            Ok(month) => month.clamp(self.start, self.end),
            Err(_) if year < self.start.year() => self.start,
            Err(_) => self.end,
        }
    }
}

// YearGrid

/// Index of the years that can be jumped to, one position per year within the bounds.
#[derive(Clone, Copy, Debug, Hash, PartialEq, Eq)]
pub struct YearGrid {
    start_year: i32,
    year_count: usize,
}

impl YearGrid {
    pub fn new(constraints: &CalendarConstraints) -> Self {
        Self {
            start_year: constraints.start().year(),
            year_count: constraints.year_span() as usize,
        }
    }

    pub fn year_count(&self) -> usize {
        self.year_count
    }

    /// # Panics
    ///
    /// If `position` is not lower than the count of years.
    pub fn year_at(&self, position: usize) -> i32 {
        assert!(position < self.year_count, "position {position} is out of bounds");
        self.start_year + position as i32
    }

    /// # Panics
    ///
    /// If the year is out of bounds.
    pub fn position_for_year(&self, year: i32) -> usize {
        let position = i64::from(year) - i64::from(self.start_year);

        assert!(
            (0..self.year_count as i64).contains(&position),
            "year {year} is out of bounds",
        );

        position as usize
    }
}
