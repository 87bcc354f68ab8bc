use std::io;

use utc_month::{CalendarDate, TimeSource};

use crate::codec::{read_i64, read_u8, write_i64, write_u8};
use crate::error::{Error, Result};

/// Maximal nesting of composite validators accepted when decoding serialized data.
pub const MAX_VALIDATOR_DEPTH: usize = 64;

const TAG_ABSENT: u8 = 0;
const TAG_POINT_FORWARD: u8 = 1;
const TAG_POINT_BACKWARD: u8 = 2;
const TAG_RANGE_INCLUSIVE: u8 = 3;
const TAG_ALL: u8 = 4;
const TAG_ANY: u8 = 5;

/// Generic trait to specify which days can be picked.
pub trait DateFilter {
    fn is_valid(&self, date: CalendarDate) -> bool;
}

impl<T: DateFilter + ?Sized> DateFilter for &T {
    fn is_valid(&self, date: CalendarDate) -> bool {
        (**self).is_valid(date)
    }
}

/// A predicate over days deciding if they can be selected.
///
/// Points are raw timestamps: a point that is not the midnight of a day excludes that day from
/// `PointForward` and includes it in `PointBackward`.
#[derive(Clone, Debug, Hash, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "fuzzing", derive(arbitrary::Arbitrary))]
pub enum DateValidator {
    /// Days at or after `point`.
    PointForward { point: i64 },
    /// Days at or before `point`.
    PointBackward { point: i64 },
    /// Days in `[lower, upper]`.
    RangeInclusive { lower: i64, upper: i64 },
    /// Days accepted by every child, any day if there is no child.
    All(Vec<DateValidator>),
    /// Days accepted by at least one child, no day if there is no child.
    Any(Vec<DateValidator>),
}

impl DateValidator {
    pub fn point_forward(point: impl Into<i64>) -> Self {
        Self::PointForward { point: point.into() }
    }

    pub fn point_backward(point: impl Into<i64>) -> Self {
        Self::PointBackward { point: point.into() }
    }

    /// Accept today and any later day.
    pub fn point_forward_now(clock: &impl TimeSource) -> Self {
        Self::point_forward(CalendarDate::today(clock))
    }

    pub fn range_inclusive(lower: impl Into<i64>, upper: impl Into<i64>) -> Self {
        Self::RangeInclusive { lower: lower.into(), upper: upper.into() }
    }

    /// Combine validators that must all accept a day, absent children are skipped.
    pub fn all_of(children: impl IntoIterator<Item = impl Into<Option<DateValidator>>>) -> Self {
        Self::All(children.into_iter().filter_map(Into::into).collect())
    }

    /// Combine validators of which at least one must accept a day, absent children are
    /// skipped.
    pub fn any_of(children: impl IntoIterator<Item = impl Into<Option<DateValidator>>>) -> Self {
        Self::Any(children.into_iter().filter_map(Into::into).collect())
    }

    /// A validator accepting every day.
    pub fn accept_all() -> Self {
        Self::point_forward(i64::MIN)
    }

    /// Serialize this validator into a writer, prefixed by the tag of its kind.
    pub fn serialize(&self, mut writer: impl io::Write) -> io::Result<()> {
        self.serialize_dyn(&mut writer)
    }

    fn serialize_dyn(&self, writer: &mut dyn io::Write) -> io::Result<()> {
        match self {
            Self::PointForward { point } => {
                write_u8(&mut *writer, TAG_POINT_FORWARD)?;
                write_i64(writer, *point)
            }
            Self::PointBackward { point } => {
                write_u8(&mut *writer, TAG_POINT_BACKWARD)?;
                write_i64(writer, *point)
            }
            Self::RangeInclusive { lower, upper } => {
                write_u8(&mut *writer, TAG_RANGE_INCLUSIVE)?;
                write_i64(&mut *writer, *lower)?;
                write_i64(writer, *upper)
            }
            Self::All(children) => {
                write_u8(&mut *writer, TAG_ALL)?;
                serialize_children(writer, children)
            }
            Self::Any(children) => {
                write_u8(&mut *writer, TAG_ANY)?;
                serialize_children(writer, children)
            }
        }
    }

    /// Deserialize a validator from a reader.
    pub fn deserialize(mut reader: impl io::Read) -> Result<Self> {
        deserialize_at_depth(&mut reader, 0)?
            .ok_or_else(|| Error::Decode("missing root validator".to_string()))
    }
}

impl Default for DateValidator {
    fn default() -> Self {
        Self::accept_all()
    }
}

impl DateFilter for DateValidator {
    fn is_valid(&self, date: CalendarDate) -> bool {
        match self {
            Self::PointForward { point } => date.millis() >= *point,
            Self::PointBackward { point } => date.millis() <= *point,
            Self::RangeInclusive { lower, upper } => (*lower..=*upper).contains(&date.millis()),
            Self::All(children) => children.iter().all(|child| child.is_valid(date)),
            Self::Any(children) => children.iter().any(|child| child.is_valid(date)),
        }
    }
}

fn serialize_children(writer: &mut dyn io::Write, children: &[DateValidator]) -> io::Result<()> {
    let len: u32 = children
        .len()
        .try_into()
        .map_err(|_| io::Error::new(io::ErrorKind::InvalidInput, "too many validators"))?;

    writer.write_all(&len.to_le_bytes())?;

    for child in children {
        child.serialize_dyn(writer)?;
    }

    Ok(())
}

fn deserialize_at_depth(reader: &mut dyn io::Read, depth: usize) -> Result<Option<DateValidator>> {
    if depth > MAX_VALIDATOR_DEPTH {
        #[cfg(feature = "log")]
        log::warn!("Rejected validator nested deeper than {MAX_VALIDATOR_DEPTH} levels");
        return Err(Error::Decode("validators are nested too deep".to_string()));
    }

    let validator = match read_u8(&mut *reader)? {
        TAG_ABSENT => return Ok(None),
        TAG_POINT_FORWARD => DateValidator::PointForward { point: read_i64(&mut *reader)? },
        TAG_POINT_BACKWARD => DateValidator::PointBackward { point: read_i64(&mut *reader)? },
        TAG_RANGE_INCLUSIVE => DateValidator::RangeInclusive {
            lower: read_i64(&mut *reader)?,
            upper: read_i64(&mut *reader)?,
        },
        TAG_ALL => DateValidator::All(deserialize_children(reader, depth)?),
        TAG_ANY => DateValidator::Any(deserialize_children(reader, depth)?),
        tag => return Err(Error::Decode(format!("unknown validator tag {tag}"))),
    };

    Ok(Some(validator))
}

fn deserialize_children(reader: &mut dyn io::Read, depth: usize) -> Result<Vec<DateValidator>> {
    let len = {
        let mut buf = [0; std::mem::size_of::<u32>()];
        reader.read_exact(&mut buf)?;
        u32::from_le_bytes(buf)
    };

    // Don't preallocate from a length read in untrusted data.
    let mut children = Vec::new();

    for _ in 0..len {
        if let Some(child) = deserialize_at_depth(reader, depth + 1)? {
            children.push(child);
        }
    }

    Ok(children)
}
