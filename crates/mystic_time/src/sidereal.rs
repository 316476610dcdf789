//! Simplified Greenwich Mean Sidereal Time.
//!
//! A linear GMST model with no higher-order polynomial terms, adequate for
//! sign-level (30 degree bucket) precision only. Callers needing
//! sub-arcminute sidereal time should not use this crate.

use crate::julian::days_since_j2000;

/// Greenwich Mean Sidereal Time in degrees at a given Julian Day.
///
/// `gmst = (280.46061837 + 360.98564736629 * d) mod 360` where d is days
/// since J2000.0. Returns degrees in [0, 360).
pub fn gmst_deg(jd: f64) -> f64 {
    let d = days_since_j2000(jd);
    (280.460_618_37 + 360.985_647_366_29 * d).rem_euclid(360.0)
}

/// Local Sidereal Time from GMST and observer east longitude, degrees.
///
/// Returns degrees in [0, 360). The longitude convention (east-positive)
/// must match the one used for the geographic input.
pub fn local_sidereal_time_deg(gmst: f64, longitude_east_deg: f64) -> f64 {
    (gmst + longitude_east_deg).rem_euclid(360.0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::julian::J2000_JD;

    #[test]
    fn gmst_at_j2000_noon() {
        let g = gmst_deg(J2000_JD);
        assert!((g - 280.460_618_37).abs() < 1e-9, "gmst = {g}");
    }

    #[test]
    fn gmst_range() {
        for &jd in &[J2000_JD, 2_415_020.5, 2_460_000.5, 2_488_434.5] {
            let g = gmst_deg(jd);
            assert!((0.0..360.0).contains(&g), "gmst out of range: {g}");
        }
    }

    #[test]
    fn gmst_advances_per_day() {
        // One solar day advances GMST by ~0.9856 deg (one sidereal lap plus a bit)
        let g1 = gmst_deg(J2000_JD);
        let g2 = gmst_deg(J2000_JD + 1.0);
        let adv = (g2 - g1).rem_euclid(360.0);
        assert!((adv - 0.9856).abs() < 0.01, "advance = {adv}");
    }

    #[test]
    fn lst_east_offset() {
        let lst = local_sidereal_time_deg(100.0, 75.77);
        assert!((lst - 175.77).abs() < 1e-12);
    }

    #[test]
    fn lst_wraps() {
        let lst = local_sidereal_time_deg(350.0, 20.0);
        assert!((lst - 10.0).abs() < 1e-12);
    }

    #[test]
    fn lst_west_longitude() {
        let lst = local_sidereal_time_deg(10.0, -30.0);
        assert!((lst - 340.0).abs() < 1e-12);
    }

    #[test]
    fn gmst_1993_scenario() {
        let jd = 2_449_181.018_055_555_4;
        let g = gmst_deg(jd);
        assert!((g - 116.908_040_819).abs() < 1e-5, "gmst = {g}");
    }
}
