//! Development module that shares the fuzzing logic between unit tests and
//! the actual fuzzing.
#[cfg(test)]
mod tests;

use arbitrary::Arbitrary;

use picker_calendar::{
    CalendarConstraints, CalendarDate, DateFilter, DateSelector, DateValidator, RangeDateSelector,
};

/// A fuzzing example
#[derive(Arbitrary, Clone, Debug)]
pub struct Data {
    pub operation: Operation,
}

/// What operation to perform on the input
#[derive(Arbitrary, Clone, Debug)]
pub enum Operation {
    /// Decode untrusted bytes as constraints.
    DecodeConstraints(Vec<u8>),
    /// Encode a validator and compare the decoded value on a day.
    Validator { validator: DateValidator, millis: i64 },
    /// Feed picked days to a range selector.
    Taps(Vec<i64>),
}

/// Run a fuzzing test and return `true` if the example should be kept in
/// corpus.
pub fn run_fuzz_picker(data: Data) -> bool {
    match data.operation {
        Operation::DecodeConstraints(bytes) => {
            let Ok(constraints) = CalendarConstraints::deserialize(bytes.as_slice()) else {
                return false;
            };

            assert!(constraints.start() <= constraints.open_at());
            assert!(constraints.open_at() <= constraints.end());

            let mut buf = Vec::new();
            constraints.serialize(&mut buf).expect("failed to encode");
            let decoded = CalendarConstraints::deserialize(buf.as_slice()).expect("failed to decode");
            assert_eq!(decoded, constraints);
        }
        Operation::Validator { validator, millis } => {
            let mut buf = Vec::new();
            validator.serialize(&mut buf).expect("failed to encode");

            // Arbitrary validators may be nested deeper than the decoder accepts.
            let Ok(decoded) = DateValidator::deserialize(buf.as_slice()) else {
                return false;
            };

            let date = CalendarDate::from_millis(millis);
            assert_eq!(decoded, validator);
            assert_eq!(decoded.is_valid(date), validator.is_valid(date));
        }
        Operation::Taps(taps) => {
            if taps.is_empty() {
                return false;
            }

            let mut selector = RangeDateSelector::default();

            for millis in taps {
                let day = CalendarDate::from_millis(millis);
                let before = selector.selection();
                selector.select(day);

                match selector.selection() {
                    (Some(start), Some(end)) => {
                        assert!(start <= end);
                        assert_eq!(end, day);
                        assert_eq!(before, (Some(start), None));
                    }
                    (Some(start), None) => assert_eq!(start, day),
                    selection => panic!("unexpected selection {selection:?}"),
                }
            }
        }
    }

    true
}
