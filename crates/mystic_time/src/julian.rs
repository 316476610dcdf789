//! Gregorian calendar → Julian Day conversion.
//!
//! Standard Gregorian JD formula (Meeus, "Astronomical Algorithms", Ch. 7),
//! restricted to the supported 1900-2100 range where the adjusted year is
//! always positive, so truncation and floor coincide.

use crate::civil::CivilMoment;

/// Julian Date of the J2000.0 epoch (2000-Jan-01 12:00).
pub const J2000_JD: f64 = 2_451_545.0;

/// Convert a civil moment to a continuous Julian Day number.
///
/// The fractional part of the result encodes the time of day. Monotonically
/// increasing over the supported range; distinct moments map to distinct JDs.
///
/// Field validity is the caller's responsibility; see
/// [`CivilMoment::validate`].
pub fn to_julian_day(moment: &CivilMoment) -> f64 {
    let mut year = moment.year;
    let mut month = moment.month as i32;
    let day = moment.day as f64
        + (moment.hour as f64 + (moment.minute as f64 + moment.second / 60.0) / 60.0) / 24.0;
    if month <= 2 {
        year -= 1;
        month += 12;
    }
    let century = year / 100;
    let gregorian_correction = 2 - century + century / 4;
    (365.25 * (year as f64 + 4716.0)).trunc() + (30.6001 * (month as f64 + 1.0)).trunc() + day
        + gregorian_correction as f64
        - 1524.5
}

/// Days elapsed since the J2000.0 epoch.
pub fn days_since_j2000(jd: f64) -> f64 {
    jd - J2000_JD
}
