mod constraints;
mod format;
mod text_entry;

use utc_month::Month;

#[macro_export]
macro_rules! date {
    ( $date: expr ) => {{
        use chrono::NaiveDate;

        $crate::CalendarDate::from_naive_date(
            NaiveDate::parse_from_str($date, "%Y-%m-%d").expect("invalid date literal"),
        )
    }};
}

/// Parse a month written as "YYYY-MM", months being counted from 1.
pub(crate) fn month(raw: &str) -> Month {
    let (year, month) = raw.split_once('-').expect("invalid month literal");
    let year = year.parse().expect("invalid year literal");
    let month: u32 = month.parse().expect("invalid month literal");
    Month::new(year, month - 1)
}

/// Every day from `first` to `last`, included.
pub(crate) fn days(first: &str, last: &str) -> impl Iterator<Item = crate::CalendarDate> {
    let first = date!(first);
    let last = date!(last);
    (0..=last.days_since_epoch() - first.days_since_epoch()).map(move |i| first.days_later(i))
}
