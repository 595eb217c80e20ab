//! Greenwich and local sidereal time.

use crate::astro::normalize_deg;
use crate::models::{JulianDate, J2000_JD};

/// Greenwich mean sidereal time in degrees for a UT instant.
pub fn gmst_deg(jd_ut: JulianDate) -> f64 {
    let jd = jd_ut.value();
    let t = jd_ut.centuries_since_j2000();
    normalize_deg(
        280.460_618_37 + 360.985_647_366_29 * (jd - J2000_JD) + 0.000_387_933 * t * t
            - t * t * t / 38_710_000.0,
    )
}

/// Local sidereal time in degrees: GMST plus east longitude.
pub fn lst_deg(jd_ut: JulianDate, longitude_east_deg: f64) -> f64 {
    normalize_deg(gmst_deg(jd_ut) + longitude_east_deg)
}
