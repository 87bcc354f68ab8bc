use picker_calendar::{DateValidator, Month, MILLIS_PER_DAY};

use crate::{run_fuzz_picker, Data, Operation};

fn encoded_month(year: i32, month: i32) -> Vec<u8> {
    let mut res = year.to_le_bytes().to_vec();
    res.extend(month.to_le_bytes());
    res
}

#[test]
fn empty_input() {
    let data = Data { operation: Operation::DecodeConstraints(Vec::new()) };
    assert!(!run_fuzz_picker(data));
}

#[test]
fn constraints_without_open_month() {
    let mut bytes = encoded_month(2020, 0);
    bytes.extend(encoded_month(2020, 11));
    bytes.push(0);
    DateValidator::accept_all().serialize(&mut bytes).unwrap();
    bytes.extend(0i32.to_le_bytes());

    let data = Data { operation: Operation::DecodeConstraints(bytes) };
    assert!(run_fuzz_picker(data));
}

#[test]
fn open_month_out_of_bounds() {
    let mut bytes = encoded_month(2020, 0);
    bytes.extend(encoded_month(2020, 11));
    bytes.push(1);
    bytes.extend(encoded_month(2021, 0));
    DateValidator::accept_all().serialize(&mut bytes).unwrap();
    bytes.extend(0i32.to_le_bytes());

    let data = Data { operation: Operation::DecodeConstraints(bytes) };
    assert!(!run_fuzz_picker(data));
}

#[test]
fn extreme_validator_points() {
    for millis in [i64::MIN, -1, 0, i64::MAX] {
        let validator = DateValidator::any_of([
            DateValidator::point_backward(i64::MIN),
            DateValidator::range_inclusive(i64::MAX, i64::MIN),
        ]);

        let data = Data { operation: Operation::Validator { validator, millis } };
        assert!(run_fuzz_picker(data));
    }
}

#[test]
fn deep_validator() {
    let mut validator = DateValidator::accept_all();

    for _ in 0..100 {
        validator = DateValidator::All(vec![validator]);
    }

    let data = Data { operation: Operation::Validator { validator, millis: 0 } };
    assert!(!run_fuzz_picker(data));
}

#[test]
fn taps() {
    let first = Month::new(2024, 2).first_day().millis();

    let data = Data {
        operation: Operation::Taps(vec![
            first + 9 * MILLIS_PER_DAY,
            first + 4 * MILLIS_PER_DAY + 1,
            first + 4 * MILLIS_PER_DAY,
            i64::MIN,
            i64::MAX,
            -1,
        ]),
    };

    assert!(run_fuzz_picker(data));
}
