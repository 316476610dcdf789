//! Obliquity of the ecliptic.
//!
//! Standard IAU polynomial in Julian centuries from J2000.0, truncated to
//! the sub-arcsecond term.
//!
//! Source: Meeus, "Astronomical Algorithms" (2nd ed), Eq. 22.2.

use mystic_time::days_since_j2000;

/// Days per Julian century.
const DAYS_PER_CENTURY: f64 = 36525.0;

/// Mean obliquity of the ecliptic in degrees at a given Julian Day.
pub fn obliquity_of_ecliptic_deg(jd: f64) -> f64 {
    let t = days_since_j2000(jd) / DAYS_PER_CENTURY;
    23.0 + (26.0 + (21.448 - t * (46.815 + t * (0.00059 - t * 0.001813))) / 60.0) / 60.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use mystic_time::J2000_JD;

    #[test]
    fn obliquity_at_j2000() {
        // 23 deg 26' 21.448" = 23.439291... deg
        let eps = obliquity_of_ecliptic_deg(J2000_JD);
        assert!((eps - 23.439_291_111).abs() < 1e-8, "eps = {eps}");
    }

    #[test]
    fn obliquity_at_1900() {
        let eps = obliquity_of_ecliptic_deg(2_415_020.5);
        assert!((eps - 23.452_294_43).abs() < 1e-6, "eps = {eps}");
    }

    #[test]
    fn obliquity_decreases_over_time() {
        // Mean obliquity decreases by ~47" per century in the current era
        let e1900 = obliquity_of_ecliptic_deg(2_415_020.5);
        let e2100 = obliquity_of_ecliptic_deg(2_488_434.5);
        assert!(e2100 < e1900, "e1900 = {e1900}, e2100 = {e2100}");
        let drop_arcsec = (e1900 - e2100) * 3600.0;
        assert!((drop_arcsec - 93.6).abs() < 2.0, "drop = {drop_arcsec} arcsec");
    }

    #[test]
    fn obliquity_plausible_range() {
        for &jd in &[2_415_020.5, J2000_JD, 2_488_434.5] {
            let eps = obliquity_of_ecliptic_deg(jd);
            assert!((23.0..24.0).contains(&eps), "eps = {eps}");
        }
    }
}
