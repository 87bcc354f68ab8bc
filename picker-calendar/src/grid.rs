//! Mapping between the cells of a fixed-size day grid and the days of a month.
//!
//! The grid has one column per day of the week and always [`MAXIMUM_WEEKS`] rows, whatever the
//! month it displays, so that paging from one month to another never changes its height. Cells
//! before the first day or after the last day of the month are "spillover" cells: positions of
//! these cells translate to day numbers that are not positive or greater than the length of the
//! month, which is expected and lets callers compute the adjacent months' days they stand for.

use std::ops::RangeInclusive;

use utc_month::{CalendarDate, Month, Weekday, DAYS_IN_WEEK, MAX_DAYS_IN_MONTH};

use crate::constraints::CalendarConstraints;

/// First day of the week used when constraints don't specify one.
pub const DEFAULT_FIRST_DAY_OF_WEEK: Weekday = Weekday::Sun;

/// Number of rows of any grid.
pub const MAXIMUM_WEEKS: usize = 6;

/// Smallest number of cells that fits any month under any first day of week.
pub const MIN_GRID_CELLS: usize = (MAX_DAYS_IN_MONTH + DAYS_IN_WEEK - 1) as usize;

/// Number of cells of any grid.
pub const GRID_CELLS: usize = MAXIMUM_WEEKS * WEEK_LEN;

const WEEK_LEN: usize = DAYS_IN_WEEK as usize;

/// The layout of a month in the day grid.
#[derive(Clone, Copy, Debug, Hash, PartialEq, Eq)]
pub struct MonthGrid {
    month: Month,
    first_day_of_week: Weekday,
    first_position: usize,
}

impl MonthGrid {
    pub fn new(month: Month, first_day_of_week: Weekday) -> Self {
        let first_position = month.days_from_start_of_week_to_first_of_month(first_day_of_week);
        Self { month, first_day_of_week, first_position: first_position as usize }
    }

    /// Layout a month with the first day of week of given constraints.
    pub fn for_constraints(month: Month, constraints: &CalendarConstraints) -> Self {
        let first_day_of_week = constraints
            .first_day_of_week()
            .unwrap_or(DEFAULT_FIRST_DAY_OF_WEEK);

        Self::new(month, first_day_of_week)
    }

    pub fn month(&self) -> Month {
        self.month
    }

    pub fn first_day_of_week(&self) -> Weekday {
        self.first_day_of_week
    }

    /// Number of cells in the grid, it doesn't depend on the month.
    pub fn cell_count(&self) -> usize {
        GRID_CELLS
    }

    /// Number of rows that contain at least one day of the month.
    pub fn rows_in_month(&self) -> usize {
        self.last_position_in_month() / WEEK_LEN + 1
    }

    /// Position of the cell of the first day of the month.
    pub fn first_position_in_month(&self) -> usize {
        self.first_position
    }

    /// Position of the cell of the last day of the month.
    pub fn last_position_in_month(&self) -> usize {
        self.first_position + self.month.days_in_month() as usize - 1
    }

    /// Day of the month displayed at given position.
    ///
    /// Positions outside of the month give values that are not positive or that exceed the
    /// length of the month.
    pub fn position_to_day(&self, position: usize) -> i64 {
        position as i64 - self.first_position as i64 + 1
    }

    /// Position of a day of the month, starting from 1.
    pub fn day_to_position(&self, day: u32) -> usize {
        assert!(day >= 1, "days of month are counted from 1");
        self.first_position + (day - 1) as usize
    }

    pub fn within_month(&self, position: usize) -> bool {
        (self.first_position_in_month()..=self.last_position_in_month()).contains(&position)
    }

    pub fn is_first_in_row(&self, position: usize) -> bool {
        position % WEEK_LEN == 0
    }

    pub fn is_last_in_row(&self, position: usize) -> bool {
        (position + 1) % WEEK_LEN == 0
    }

    /// Day displayed at given position, if it belongs to the month.
    pub fn day_at(&self, position: usize) -> Option<CalendarDate> {
        self.within_month(position)
            .then(|| self.spillover_day_at(position))
    }

    /// Day standing at given position, including cells of adjacent months.
    pub fn spillover_day_at(&self, position: usize) -> CalendarDate {
        self.month
            .first_day()
            .days_later(self.position_to_day(position) - 1)
    }

    /// Iterate over all the cells of the grid, together with the day of the month they contain.
    pub fn cells(&self) -> impl Iterator<Item = (usize, Option<CalendarDate>)> + '_ {
        (0..GRID_CELLS).map(move |position| (position, self.day_at(position)))
    }

    /// Split a range of days into the spans of positions it covers on each row of this grid.
    ///
    /// Days of the range that are out of this month are ignored.
    pub fn range_segments(
        &self,
        range: &RangeInclusive<CalendarDate>,
    ) -> Vec<RangeInclusive<usize>> {
        let first = (*range.start()).max(self.month.first_day());
        let last = (*range.end()).min(self.month.last_day());

        if first > last {
            return Vec::new();
        }

        let position_of = |date: CalendarDate| {
            let offset = date.days_since_epoch() - self.month.first_day().days_since_epoch();
            self.first_position + offset as usize
        };

        let first_pos = position_of(first);
        let last_pos = position_of(last);

        (first_pos / WEEK_LEN..=last_pos / WEEK_LEN)
            .map(|row| {
                let row_start = row * WEEK_LEN;
                let row_end = row_start + WEEK_LEN - 1;
                first_pos.max(row_start)..=last_pos.min(row_end)
            })
            .collect()
    }
}
