use crate::{date, DayFormatter, Error, PatternFormatter, PatternParser};

#[test]
fn iso() {
    let formatter = PatternFormatter::default();
    assert_eq!(formatter.pattern(), "%Y-%m-%d");
    assert_eq!(formatter.format_day(date!("2024-03-05"), "en-US"), "2024-03-05");
    assert_eq!(formatter.format_day(date!("0800-12-25"), "en-US"), "0800-12-25");
}

#[test]
fn custom_pattern() {
    let formatter = PatternFormatter::new("%A %e %B %Y").unwrap();
    assert_eq!(formatter.format_day(date!("2024-03-05"), "en-US"), "Tuesday  5 March 2024");
}

#[test]
fn locale_is_ignored() {
    let formatter = PatternFormatter::new("%d/%m/%Y").unwrap();
    let day = date!("2024-03-05");
    assert_eq!(formatter.format_day(day, "en-US"), formatter.format_day(day, "fr-FR"));
}

#[test]
fn range() {
    let formatter = PatternFormatter::iso();

    assert_eq!(
        formatter.format_day_range(Some(date!("2024-03-05")), None, "en"),
        (Some("2024-03-05".to_string()), None),
    );

    assert_eq!(formatter.format_day_range(None, None, "en"), (None, None));
}

#[test]
fn invalid_patterns() {
    assert!(matches!(PatternFormatter::new(""), Err(Error::InvalidPattern(_))));
    assert!(matches!(PatternFormatter::new("%Y-%Q"), Err(Error::InvalidPattern(_))));
    assert!(matches!(PatternParser::new(""), Err(Error::InvalidPattern(_))));
}

#[test]
fn time_fields_fall_back_to_iso() {
    let formatter = PatternFormatter::new("%Y %H:%M").unwrap();
    assert_eq!(formatter.format_day(date!("2024-03-05"), "en"), "2024-03-05");
}

#[test]
fn join_range() {
    let formatter = PatternFormatter::iso();
    let start = || Some("5 mars".to_string());
    let end = || Some("9 mars".to_string());

    assert_eq!(
        formatter.join_day_range(start(), end(), "fr").as_deref(),
        Some("5 mars – 9 mars"),
    );
    assert_eq!(formatter.join_day_range(start(), None, "fr").as_deref(), Some("5 mars"));
    assert_eq!(formatter.join_day_range(None, end(), "fr").as_deref(), Some("9 mars"));
    assert_eq!((&formatter).join_day_range(None, None, "fr"), None);
}
