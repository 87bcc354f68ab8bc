use chrono::Utc;

use crate::CalendarDate;

/// Provides the current instant to APIs that need to know what "today" is.
///
/// Nothing in this crate reads the system clock directly, so that a fixed instant can be
/// injected in tests.
pub trait TimeSource {
    /// Current instant, in milliseconds since the Unix epoch.
    fn now_millis(&self) -> i64;
}

impl<T: TimeSource + ?Sized> TimeSource for &T {
    fn now_millis(&self) -> i64 {
        (**self).now_millis()
    }
}

/// The real clock of the system.
#[derive(Clone, Copy, Debug, Default, Hash, PartialEq, Eq)]
pub struct SystemClock;

impl TimeSource for SystemClock {
    fn now_millis(&self) -> i64 {
        Utc::now().timestamp_millis()
    }
}

/// A clock that is stopped at a given instant.
#[derive(Clone, Copy, Debug, Hash, PartialEq, Eq)]
pub struct FixedClock(pub i64);

impl FixedClock {
    /// Stop the clock at given UTC date and time.
    ///
    /// # Panics
    ///
    /// If the input is not a valid date and time.
    ///
    /// ```
    /// use utc_month::{FixedClock, TimeSource};
    ///
    /// assert_eq!(FixedClock::from_ymd_hms(1970, 1, 1, 0, 0, 1).now_millis(), 1000);
    /// ```
    pub fn from_ymd_hms(year: i32, month: u32, day: u32, hour: u32, min: u32, sec: u32) -> Self {
        assert!(hour < 24 && min < 60 && sec < 60, "invalid time of the day");

        let date = CalendarDate::from_ymd(year, month, day).expect("invalid date for fixed clock");
        let secs_of_day = i64::from((hour * 60 + min) * 60 + sec);
        Self(date.millis() + 1000 * secs_of_day)
    }
}

impl TimeSource for FixedClock {
    fn now_millis(&self) -> i64 {
        self.0
    }
}
