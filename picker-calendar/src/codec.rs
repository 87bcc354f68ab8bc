//! Little-endian primitives shared by the binary serialization of constraints, validators and
//! selectors.

use std::io;

use utc_month::{CalendarDate, Month, Weekday};

use crate::error::{Error, Result};

pub(crate) fn write_u8(mut writer: impl io::Write, val: u8) -> io::Result<()> {
    writer.write_all(&[val])
}

pub(crate) fn read_u8(mut reader: impl io::Read) -> Result<u8> {
    let mut buf = [0; 1];
    reader.read_exact(&mut buf)?;
    Ok(buf[0])
}

pub(crate) fn write_i32(mut writer: impl io::Write, val: i32) -> io::Result<()> {
    writer.write_all(&val.to_le_bytes())
}

pub(crate) fn read_i32(mut reader: impl io::Read) -> Result<i32> {
    let mut buf = [0; std::mem::size_of::<i32>()];
    reader.read_exact(&mut buf)?;
    Ok(i32::from_le_bytes(buf))
}

pub(crate) fn write_i64(mut writer: impl io::Write, val: i64) -> io::Result<()> {
    writer.write_all(&val.to_le_bytes())
}

pub(crate) fn read_i64(mut reader: impl io::Read) -> Result<i64> {
    let mut buf = [0; std::mem::size_of::<i64>()];
    reader.read_exact(&mut buf)?;
    Ok(i64::from_le_bytes(buf))
}

/// Write a presence flag, followed by the value if there is one.
pub(crate) fn write_opt_day(
    mut writer: impl io::Write,
    day: Option<CalendarDate>,
) -> io::Result<()> {
    match day {
        None => write_u8(&mut writer, 0),
        Some(day) => {
            write_u8(&mut writer, 1)?;
            write_i64(&mut writer, day.millis())
        }
    }
}

pub(crate) fn read_opt_day(mut reader: impl io::Read) -> Result<Option<CalendarDate>> {
    match read_u8(&mut reader)? {
        0 => Ok(None),
        1 => Ok(Some(CalendarDate::from_millis(read_i64(&mut reader)?))),
        flag => Err(Error::Decode(format!("invalid presence flag {flag}"))),
    }
}

pub(crate) fn read_month(mut reader: impl io::Read) -> Result<Month> {
    let year = read_i32(&mut reader)?;
    let month = read_i32(&mut reader)?;

    let month = u32::try_from(month)
        .map_err(|_| Error::Decode(format!("negative month {month}")))?;

    Ok(Month::try_new(year, month)?)
}

/// Weekdays are numbered from 1 (Sunday) to 7 (Saturday), 0 stands for "unset".
pub(crate) fn write_opt_weekday(writer: impl io::Write, wday: Option<Weekday>) -> io::Result<()> {
    let num = wday.map(|wday| wday.number_from_sunday()).unwrap_or(0);
    write_i32(writer, num as i32)
}

pub(crate) fn read_opt_weekday(reader: impl io::Read) -> Result<Option<Weekday>> {
    match read_i32(reader)? {
        0 => Ok(None),
        num @ 1..=7 => Ok(Some(weekday_from_sunday_number(num as u32))),
        num => Err(Error::Decode(format!("invalid day of week {num}"))),
    }
}

fn weekday_from_sunday_number(num: u32) -> Weekday {
    match num {
        1 => Weekday::Sun,
        2 => Weekday::Mon,
        3 => Weekday::Tue,
        4 => Weekday::Wed,
        5 => Weekday::Thu,
        6 => Weekday::Fri,
        _ => Weekday::Sat,
    }
}
