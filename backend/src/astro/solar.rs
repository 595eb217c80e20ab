//! Low-precision solar position (apparent ecliptic longitude, equinox of
//! date) and the equatorial conversion used by rise/set search.
//!
//! Standard spherical-astronomy series: mean longitude plus equation of
//! center, with the aberration and longitude-nutation corrections folded
//! in. Good to well under an arc-minute over the supported epoch range.

use crate::astro::normalize_deg;
use crate::models::JulianDate;

/// Apparent ecliptic longitude of the Sun in degrees, equinox of date.
pub fn apparent_longitude(jd: JulianDate) -> f64 {
    let t = jd.centuries_since_j2000();

    // Geometric mean longitude and mean anomaly.
    let l0 = 280.46646 + 36000.76983 * t + 0.0003032 * t * t;
    let m_deg = 357.52911 + 35999.05029 * t - 0.0001537 * t * t;
    let m = m_deg.to_radians();

    // Equation of center.
    let c = (1.914602 - 0.004817 * t - 0.000014 * t * t) * m.sin()
        + (0.019993 - 0.000101 * t) * (2.0 * m).sin()
        + 0.000289 * (3.0 * m).sin();

    let true_lon = l0 + c;

    // Apparent longitude: aberration and nutation in longitude.
    let omega = (125.04 - 1934.136 * t).to_radians();
    normalize_deg(true_lon - 0.00569 - 0.00478 * omega.sin())
}

/// Mean obliquity of the ecliptic in degrees.
pub fn mean_obliquity_deg(jd: JulianDate) -> f64 {
    let t = jd.centuries_since_j2000();
    23.439291111 - 0.013004167 * t - 1.638e-7 * t * t
}

/// Apparent equatorial coordinates of the Sun: (RA, Dec) in degrees.
pub fn equatorial(jd: JulianDate) -> (f64, f64) {
    let lambda = apparent_longitude(jd).to_radians();
    let eps = mean_obliquity_deg(jd).to_radians();

    let ra = (eps.cos() * lambda.sin()).atan2(lambda.cos());
    let dec = (eps.sin() * lambda.sin()).asin();
    (normalize_deg(ra.to_degrees()), dec.to_degrees())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{DateTime, Utc};

    #[test]
    fn longitude_at_j2000() {
        // Apparent solar longitude at J2000.0 is close to 280.37 deg.
        let lon = apparent_longitude(JulianDate::new(2_451_545.0));
        assert!((lon - 280.37).abs() < 0.1, "got {lon}");
    }

    #[test]
    fn longitude_at_march_equinox() {
        // 2024 March equinox: 2024-03-20 03:06 UTC, solar longitude = 0.
        let dt = DateTime::parse_from_rfc3339("2024-03-20T03:06:00Z")
            .unwrap()
            .with_timezone(&Utc);
        let lon = apparent_longitude(JulianDate::from_datetime(dt));
        let dist_to_zero = lon.min(360.0 - lon);
        assert!(dist_to_zero < 0.05, "got {lon}");
    }

    #[test]
    fn longitude_at_june_solstice() {
        // 2024 June solstice: 2024-06-20 20:51 UTC, solar longitude = 90.
        let dt = DateTime::parse_from_rfc3339("2024-06-20T20:51:00Z")
            .unwrap()
            .with_timezone(&Utc);
        let lon = apparent_longitude(JulianDate::from_datetime(dt));
        assert!((lon - 90.0).abs() < 0.05, "got {lon}");
    }

    #[test]
    fn obliquity_near_23_44() {
        let eps = mean_obliquity_deg(JulianDate::new(2_451_545.0));
        assert!((eps - 23.4393).abs() < 0.001, "got {eps}");
    }

    #[test]
    fn declination_bounded_by_obliquity() {
        // Sample through a year: |dec| never exceeds the obliquity.
        for day in 0..366 {
            let jd = JulianDate::new(2_460_310.5 + day as f64);
            let (_, dec) = equatorial(jd);
            assert!(dec.abs() <= 23.45, "day {day}: dec {dec}");
        }
    }

    #[test]
    fn declination_sign_by_season() {
        // Mid-July: northern summer, positive declination.
        let (_, dec_summer) = equatorial(JulianDate::new(2_460_506.5));
        assert!(dec_summer > 15.0, "got {dec_summer}");
        // Mid-January: negative.
        let (_, dec_winter) = equatorial(JulianDate::new(2_460_325.5));
        assert!(dec_winter < -15.0, "got {dec_winter}");
    }
}
