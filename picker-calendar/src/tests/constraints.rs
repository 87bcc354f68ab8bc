use crate::{
    date, CalendarConstraints, DateFilter, DateValidator, Error, FixedClock, Month, Weekday,
};

use super::month;

fn constraints(start: &str, end: &str, open_at: &str) -> CalendarConstraints {
    CalendarConstraints::new(
        month(start),
        month(end),
        month(open_at),
        DateValidator::accept_all(),
    )
    .unwrap()
}

#[test]
fn ordering_is_checked() {
    let err = CalendarConstraints::new(
        month("2025-01"),
        month("2024-12"),
        month("2024-12"),
        DateValidator::accept_all(),
    );

    assert!(matches!(err, Err(Error::InvalidOrdering { .. })));

    for open_at in ["2023-12", "2025-01"] {
        let err = CalendarConstraints::new(
            month("2024-01"),
            month("2024-12"),
            month(open_at),
            DateValidator::accept_all(),
        );

        assert!(matches!(err, Err(Error::InvalidOrdering { .. })));
    }
}

#[test]
fn spans() {
    let single = constraints("2024-02", "2024-02", "2024-02");
    assert_eq!(single.month_span(), 1);
    assert_eq!(single.year_span(), 1);

    let winter = constraints("2023-11", "2024-02", "2023-12");
    assert_eq!(winter.month_span(), 4);
    assert_eq!(winter.year_span(), 2);

    let century = constraints("1900-01", "2100-12", "2000-06");
    assert_eq!(century.month_span(), 201 * 12);
    assert_eq!(century.year_span(), 201);
}

#[test]
fn within_bounds() {
    let constraints = constraints("2023-11", "2024-02", "2023-12");
    assert!(!constraints.is_within_bounds(date!("2023-10-31")));
    assert!(constraints.is_within_bounds(date!("2023-11-01")));
    assert!(constraints.is_within_bounds(date!("2024-02-29")));
    assert!(!constraints.is_within_bounds(date!("2024-03-01")));
}

#[test]
fn clamp() {
    let constraints = constraints("2023-11", "2024-02", "2023-12");
    assert_eq!(constraints.clamp(month("1999-05")), month("2023-11"));
    assert_eq!(constraints.clamp(month("2024-01")), month("2024-01"));
    assert_eq!(constraints.clamp(month("2024-03")), month("2024-02"));
}

#[test]
fn open_at_is_not_validated() {
    let mut constraints = constraints("2023-11", "2024-02", "2023-12");
    constraints.set_open_at(month("2030-01"));
    assert_eq!(constraints.open_at(), month("2030-01"));
    assert_eq!(constraints.start(), month("2023-11"));
    assert_eq!(constraints.end(), month("2024-02"));

    let clamped = constraints.clamp(constraints.open_at());
    let constraints = constraints.with_open_at(clamped);
    assert_eq!(constraints.open_at(), month("2024-02"));
}

#[test]
fn default_builder() {
    let clock = FixedClock::from_ymd_hms(2024, 7, 14, 9, 30, 0);
    let constraints = CalendarConstraints::builder().build(&clock).unwrap();

    assert_eq!(constraints.start(), Month::new(1900, 0));
    assert_eq!(constraints.end(), Month::new(2100, 11));
    assert_eq!(constraints.open_at(), month("2024-07"));
    assert_eq!(constraints.validator(), &DateValidator::accept_all());
    assert_eq!(constraints.first_day_of_week(), None);
    assert!(constraints.is_valid(date!("1900-01-01")));
    assert!(constraints.is_valid(date!("2100-12-31")));
    assert!(!constraints.is_valid(date!("2101-01-01")));
}

#[test]
fn builder_opens_at_start_when_today_is_out_of_bounds() {
    let clock = FixedClock::from_ymd_hms(2200, 1, 1, 0, 0, 0);
    let constraints = CalendarConstraints::builder().build(&clock).unwrap();
    assert_eq!(constraints.open_at(), Month::new(1900, 0));

    let clock = FixedClock::from_ymd_hms(2024, 7, 14, 9, 30, 0);

    let constraints = CalendarConstraints::builder()
        .with_start(month("2024-08"))
        .with_end(month("2024-10"))
        .build(&clock)
        .unwrap();

    assert_eq!(constraints.open_at(), month("2024-08"));
}

#[test]
fn builder_explicit_values() {
    let clock = FixedClock(0);
    let validator = DateValidator::point_forward(date!("2024-08-15"));

    let constraints = CalendarConstraints::builder()
        .with_start(month("2024-08"))
        .with_end(month("2024-10"))
        .with_open_at(month("2024-09"))
        .with_validator(validator.clone())
        .with_first_day_of_week(Weekday::Mon)
        .build(&clock)
        .unwrap();

    assert_eq!(constraints.open_at(), month("2024-09"));
    assert_eq!(constraints.validator(), &validator);
    assert_eq!(constraints.first_day_of_week(), Some(Weekday::Mon));
    assert_eq!(constraints.to_builder().build(&clock).unwrap(), constraints);

    assert!(!constraints.is_valid(date!("2024-08-14")));
    assert!(constraints.is_valid(date!("2024-08-15")));
    assert!(!constraints.is_valid(date!("2024-11-01")));

    let err = CalendarConstraints::builder()
        .with_start(month("2024-08"))
        .with_end(month("2024-10"))
        .with_open_at(month("2024-11"))
        .build(&clock);

    assert!(matches!(err, Err(Error::InvalidOrdering { .. })));
}
