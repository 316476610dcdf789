//! Error types for civil time validation.

use std::error::Error;
use std::fmt::{Display, Formatter};

/// Errors from civil moment validation.
#[derive(Debug, Clone, PartialEq)]
#[non_exhaustive]
pub enum TimeError {
    /// Year outside the supported 1900-2100 range.
    YearOutOfRange(i32),
    /// Month outside 1-12.
    MonthOutOfRange(u32),
    /// Day invalid for the given year/month.
    DayOutOfRange { year: i32, month: u32, day: u32 },
    /// Hour outside 0-23.
    HourOutOfRange(u32),
    /// Minute outside 0-59.
    MinuteOutOfRange(u32),
    /// Second outside [0, 60) or non-finite.
    SecondOutOfRange(f64),
}

impl Display for TimeError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::YearOutOfRange(y) => write!(f, "year {y} outside supported range 1900-2100"),
            Self::MonthOutOfRange(m) => write!(f, "month {m} outside 1-12"),
            Self::DayOutOfRange { year, month, day } => {
                write!(f, "day {day} invalid for {year}-{month:02}")
            }
            Self::HourOutOfRange(h) => write!(f, "hour {h} outside 0-23"),
            Self::MinuteOutOfRange(m) => write!(f, "minute {m} outside 0-59"),
            Self::SecondOutOfRange(s) => write!(f, "second {s} outside [0, 60)"),
        }
    }
}

impl Error for TimeError {}
