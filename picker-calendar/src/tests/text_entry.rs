use crate::text::{check_text, EntryOutcome, FieldState};
use crate::{
    date, CalendarConstraints, DateSelector, DateValidator, PatternParser, RangeDateSelector,
    SingleDateSelector,
};

use super::month;

fn constraints() -> CalendarConstraints {
    CalendarConstraints::new(
        month("2024-01"),
        month("2024-12"),
        month("2024-03"),
        DateValidator::point_forward(date!("2024-03-01")),
    )
    .unwrap()
}

#[test]
fn field_states() {
    let constraints = constraints();
    let parser = PatternParser::iso();

    assert_eq!(check_text("", &parser, &constraints), FieldState::Empty);
    assert_eq!(check_text("  \t", &parser, &constraints), FieldState::Empty);
    assert_eq!(check_text("march", &parser, &constraints), FieldState::InvalidFormat);
    assert_eq!(check_text("2024-02-30", &parser, &constraints), FieldState::InvalidFormat);

    // Within bounds but rejected by the validator
    assert_eq!(check_text("2024-02-28", &parser, &constraints), FieldState::OutOfRange);

    // Accepted by the validator but out of bounds
    assert_eq!(check_text("2025-01-01", &parser, &constraints), FieldState::OutOfRange);

    assert_eq!(
        check_text(" 2024-03-01 ", &parser, &constraints),
        FieldState::Valid(date!("2024-03-01")),
    );
}

#[test]
fn custom_parser() {
    let constraints = constraints();
    let parser = PatternParser::new("%d.%m.%Y").unwrap();

    assert_eq!(
        check_text("05.03.2024", &parser, &constraints),
        FieldState::Valid(date!("2024-03-05")),
    );

    assert_eq!(check_text("2024-03-05", &parser, &constraints), FieldState::InvalidFormat);
}

#[test]
fn single_entry() {
    let constraints = constraints();
    let parser = PatternParser::iso();
    let mut selector = SingleDateSelector::new(Some(date!("2024-04-01")));

    for raw in ["", "2024-04-", "2024-02-01"] {
        let outcome = selector.apply_text(check_text(raw, &parser, &constraints));
        assert_eq!(outcome, EntryOutcome::Incomplete);
        assert_eq!(selector.selection(), Some(date!("2024-04-01")));
    }

    let outcome = selector.apply_text(check_text("2024-05-02", &parser, &constraints));
    assert_eq!(outcome, EntryOutcome::Committed);
    assert_eq!(selector.selection(), Some(date!("2024-05-02")));
}

#[test]
fn range_entry() {
    let constraints = constraints();
    let parser = PatternParser::iso();
    let mut selector =
        RangeDateSelector::new(Some(date!("2024-04-01")), Some(date!("2024-04-02"))).unwrap();

    let previous = selector.selection();
    let check = |raw| check_text(raw, &parser, &constraints);

    // The end field still holds the committed end
    assert_eq!(selector.propose_start(check("2024-06-10")), EntryOutcome::InvalidRange);
    assert_eq!(selector.selection(), previous);

    assert_eq!(selector.propose_end(check("2024-06-")), EntryOutcome::Incomplete);
    assert_eq!(selector.selection(), previous);

    assert_eq!(selector.propose_end(check("2024-06-01")), EntryOutcome::InvalidRange);
    assert_eq!(selector.selection(), previous);

    assert_eq!(selector.propose_end(check("2024-06-20")), EntryOutcome::Committed);
    assert_eq!(selector.selection(), (Some(date!("2024-06-10")), Some(date!("2024-06-20"))));

    // Clearing a field keeps the committed range
    assert_eq!(selector.propose_start(check("")), EntryOutcome::Incomplete);
    assert_eq!(selector.selection(), (Some(date!("2024-06-10")), Some(date!("2024-06-20"))));

    assert_eq!(selector.propose_start(check("2024-06-20")), EntryOutcome::Committed);
    assert_eq!(selector.selection(), (Some(date!("2024-06-20")), Some(date!("2024-06-20"))));
}

#[test]
fn range_entry_out_of_range() {
    let constraints = constraints();
    let parser = PatternParser::iso();
    let mut selector = RangeDateSelector::default();

    let start = check_text("2024-02-01", &parser, &constraints);
    let end = check_text("2024-03-10", &parser, &constraints);

    assert_eq!(selector.propose_start(start), EntryOutcome::Incomplete);
    assert_eq!(selector.propose_end(end), EntryOutcome::Incomplete);
    assert_eq!(selector.selection(), (None, None));
}

#[test]
fn edit_one_field_of_range() {
    let mut selector =
        RangeDateSelector::new(Some(date!("2024-04-01")), Some(date!("2024-04-10"))).unwrap();

    let outcome = selector.propose_start(FieldState::Valid(date!("2024-04-05")));
    assert_eq!(outcome, EntryOutcome::Committed);
    assert_eq!(selector.selection(), (Some(date!("2024-04-05")), Some(date!("2024-04-10"))));

    let outcome = selector.propose_end(FieldState::Valid(date!("2024-04-30")));
    assert_eq!(outcome, EntryOutcome::Committed);
    assert_eq!(selector.selection(), (Some(date!("2024-04-05")), Some(date!("2024-04-30"))));
}

#[test]
fn grid_selection_replaces_typed_input() {
    let mut selector = RangeDateSelector::default();

    let outcome = selector.propose_start(FieldState::Valid(date!("2024-03-01")));
    assert_eq!(outcome, EntryOutcome::Incomplete);

    selector.select(date!("2024-05-10"));
    selector.select(date!("2024-05-12"));

    let outcome = selector.propose_end(FieldState::Valid(date!("2024-05-20")));
    assert_eq!(outcome, EntryOutcome::Committed);
    assert_eq!(selector.selection(), (Some(date!("2024-05-10")), Some(date!("2024-05-20"))));
}

#[test]
fn restarted_range_keeps_its_start() {
    let mut selector = RangeDateSelector::default();
    selector.select(date!("2024-05-10"));
    selector.select(date!("2024-05-12"));

    // Restart on the grid, the end is cleared
    selector.select(date!("2024-05-02"));

    let outcome = selector.propose_end(FieldState::Valid(date!("2024-05-04")));
    assert_eq!(outcome, EntryOutcome::Committed);
    assert_eq!(selector.selection(), (Some(date!("2024-05-02")), Some(date!("2024-05-04"))));
}

#[test]
fn replaced_selection_replaces_typed_input() {
    let mut selector = RangeDateSelector::default();
    selector.propose_end(FieldState::Valid(date!("2024-01-31")));

    selector.set_selection((Some(date!("2024-06-01")), None)).unwrap();
    assert_eq!(selector.propose_start(FieldState::Empty), EntryOutcome::Incomplete);

    let outcome = selector.propose_start(FieldState::Valid(date!("2024-06-03")));
    assert_eq!(outcome, EntryOutcome::Incomplete);
    assert_eq!(selector.selection(), (Some(date!("2024-06-01")), None));
}

#[test]
fn decoded_range_can_be_edited() {
    let selector =
        RangeDateSelector::new(Some(date!("2024-04-01")), Some(date!("2024-04-10"))).unwrap();

    let mut buf = Vec::new();
    selector.serialize(&mut buf).unwrap();
    let mut decoded = RangeDateSelector::deserialize(buf.as_slice()).unwrap();

    let outcome = decoded.propose_end(FieldState::Valid(date!("2024-04-15")));
    assert_eq!(outcome, EntryOutcome::Committed);
    assert_eq!(decoded.selection(), (Some(date!("2024-04-01")), Some(date!("2024-04-15"))));
}
