//! Civil calendar date/time with sub-second precision.
//!
//! Provides `CivilMoment`, the canonical input representation for the
//! engine. The moment is interpreted as-is (no timezone handling); callers
//! supplying local time get local-time charts.

use crate::error::TimeError;

/// Civil calendar date with sub-second precision.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CivilMoment {
    pub year: i32,
    pub month: u32,
    pub day: u32,
    pub hour: u32,
    pub minute: u32,
    pub second: f64,
}

/// Number of days in a month, accounting for leap years.
fn days_in_month(year: i32, month: u32) -> u32 {
    match month {
        1 | 3 | 5 | 7 | 8 | 10 | 12 => 31,
        4 | 6 | 9 | 11 => 30,
        2 => {
            if is_leap_year(year) {
                29
            } else {
                28
            }
        }
        _ => 0,
    }
}

/// Gregorian leap year rule.
fn is_leap_year(year: i32) -> bool {
    (year % 4 == 0 && year % 100 != 0) || year % 400 == 0
}

impl CivilMoment {
    pub fn new(year: i32, month: u32, day: u32, hour: u32, minute: u32, second: f64) -> Self {
        Self {
            year,
            month,
            day,
            hour,
            minute,
            second,
        }
    }

    /// Check all calendar fields against their valid ranges.
    ///
    /// The supported year range is 1900-2100. Day validity accounts for
    /// month lengths and leap years. Returns the first violation found.
    pub fn validate(&self) -> Result<(), TimeError> {
        if !(1900..=2100).contains(&self.year) {
            return Err(TimeError::YearOutOfRange(self.year));
        }
        if !(1..=12).contains(&self.month) {
            return Err(TimeError::MonthOutOfRange(self.month));
        }
        if self.day < 1 || self.day > days_in_month(self.year, self.month) {
            return Err(TimeError::DayOutOfRange {
                year: self.year,
                month: self.month,
                day: self.day,
            });
        }
        if self.hour > 23 {
            return Err(TimeError::HourOutOfRange(self.hour));
        }
        if self.minute > 59 {
            return Err(TimeError::MinuteOutOfRange(self.minute));
        }
        if !self.second.is_finite() || !(0.0..60.0).contains(&self.second) {
            return Err(TimeError::SecondOutOfRange(self.second));
        }
        Ok(())
    }
}

impl std::fmt::Display for CivilMoment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let whole = self.second as u32;
        let frac = self.second - whole as f64;
        if frac.abs() < 1e-9 {
            write!(
                f,
                "{:04}-{:02}-{:02}T{:02}:{:02}:{:02}",
                self.year, self.month, self.day, self.hour, self.minute, whole
            )
        } else {
            write!(
                f,
                "{:04}-{:02}-{:02}T{:02}:{:02}:{:09.6}",
                self.year, self.month, self.day, self.hour, self.minute, self.second
            )
        }
    }
}
