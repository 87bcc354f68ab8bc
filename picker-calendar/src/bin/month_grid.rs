use std::env;

use chrono::{Datelike, NaiveDate};

use picker_calendar::grid::DEFAULT_FIRST_DAY_OF_WEEK;
use picker_calendar::{CalendarDate, DateFilter, DateValidator, Month, MonthGrid, Weekday};

const WEEK_LEN: usize = 7;

fn main() {
    let mut args = env::args().skip(1);
    let usage = "Usage: ./month_grid <YYYY-MM> [FIRST_DAY_OF_WEEK] [MIN_DAY]";

    let month = {
        let raw = args.next().expect(usage);
        let first = NaiveDate::parse_from_str(&format!("{raw}-01"), "%Y-%m-%d")
            .unwrap_or_else(|err| panic!("invalid month {raw:?}: {err}"));

        Month::new(first.year(), first.month0())
    };

    let first_day_of_week = match args.next() {
        Some(raw) => raw
            .parse::<Weekday>()
            .unwrap_or_else(|_| panic!("invalid day of week {raw:?}")),
        None => DEFAULT_FIRST_DAY_OF_WEEK,
    };

    let validator = match args.next() {
        Some(raw) => {
            let day = NaiveDate::parse_from_str(&raw, "%Y-%m-%d")
                .unwrap_or_else(|err| panic!("invalid day {raw:?}: {err}"));

            DateValidator::point_forward(CalendarDate::from_naive_date(day))
        }
        None => DateValidator::accept_all(),
    };

    let grid = MonthGrid::new(month, first_day_of_week);
    println!(" - month: {month}");
    println!(" - days: {}", month.days_in_month());
    println!(" - rows: {}", grid.rows_in_month());
    println!("---");

    let mut wday = first_day_of_week;

    for _ in 0..WEEK_LEN {
        print!("{:>4}", wday.to_string());
        wday = wday.succ();
    }

    println!();

    for (pos, day) in grid.cells().take(grid.rows_in_month() * WEEK_LEN) {
        match day {
            Some(day) if validator.is_valid(day) => print!("{:>4}", day.day()),
            Some(day) => print!("{:>3}x", day.day()),
            None => print!("    "),
        }

        if grid.is_last_in_row(pos) {
            println!()
        }
    }
}
