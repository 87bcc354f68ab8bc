use std::{fmt, io};

use utc_month::{CalendarDate, InvalidMonth, Month};

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug)]
pub enum Error {
    /// The open month of constraints is not between its bounds.
    InvalidOrdering {
        start: Month,
        open_at: Month,
        end: Month,
    },
    /// A range selection ends before it starts.
    InvalidRange {
        start: CalendarDate,
        end: CalendarDate,
    },
    InvalidMonth(InvalidMonth),
    /// A chrono format pattern that can't be used to format or parse days.
    InvalidPattern(String),
    /// Serialized data that doesn't describe a valid value.
    Decode(String),
    Io(io::Error),
}

impl From<InvalidMonth> for Error {
    fn from(err: InvalidMonth) -> Self {
        Self::InvalidMonth(err)
    }
}

impl From<io::Error> for Error {
    fn from(err: io::Error) -> Self {
        Self::Io(err)
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidOrdering { start, open_at, end } => {
                write!(f, "open month {open_at} is not within bounds [{start}, {end}]")
            }
            Self::InvalidRange { start, end } => {
                write!(f, "invalid range: {end} is before {start}")
            }
            Self::InvalidMonth(err) => write!(f, "{err}"),
            Self::InvalidPattern(pattern) => write!(f, "invalid date pattern `{pattern}`"),
            Self::Decode(desc) => write!(f, "could not decode serialized data: {desc}"),
            Self::Io(err) => write!(f, "{err}"),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::InvalidMonth(err) => Some(err),
            Self::Io(err) => Some(err),
            _ => None,
        }
    }
}
