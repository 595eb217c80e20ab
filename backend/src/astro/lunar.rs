//! Low-precision lunar position: ecliptic longitude/latitude of date from
//! a truncated periodic series (principal elongation, evection, variation
//! and annual-equation terms).
//!
//! Worst-case longitude error of the truncation is a few arc-minutes,
//! far inside the 6-degree karana segment that is the narrowest consumer.

use crate::astro::normalize_deg;
use crate::astro::solar::mean_obliquity_deg;
use crate::models::JulianDate;

/// Fundamental lunar arguments at a given instant, in radians.
struct Arguments {
    /// Mean elongation of the Moon from the Sun.
    d: f64,
    /// Sun's mean anomaly.
    m: f64,
    /// Moon's mean anomaly.
    mp: f64,
    /// Moon's argument of latitude.
    f: f64,
    /// Eccentricity damping factor for terms involving the solar anomaly.
    e: f64,
    /// Moon's mean longitude in degrees (kept in degrees for the final sum).
    lp_deg: f64,
}

fn arguments(t: f64) -> Arguments {
    let lp_deg = normalize_deg(218.3164477 + 481_267.88123421 * t - 0.0015786 * t * t);
    let d = normalize_deg(297.8501921 + 445_267.1114034 * t - 0.0018819 * t * t).to_radians();
    let m = normalize_deg(357.5291092 + 35_999.0502909 * t - 0.0001536 * t * t).to_radians();
    let mp = normalize_deg(134.9633964 + 477_198.8675055 * t + 0.0087414 * t * t).to_radians();
    let f = normalize_deg(93.2720950 + 483_202.0175233 * t - 0.0036539 * t * t).to_radians();
    let e = 1.0 - 0.002516 * t - 0.0000074 * t * t;
    Arguments {
        d,
        m,
        mp,
        f,
        e,
        lp_deg,
    }
}

/// Geocentric ecliptic longitude of the Moon in degrees, equinox of date.
pub fn longitude(jd: JulianDate) -> f64 {
    let t = jd.centuries_since_j2000();
    let a = arguments(t);
    let (d, m, mp, f, e) = (a.d, a.m, a.mp, a.f, a.e);

    // Principal periodic terms, coefficients in degrees.
    let sum = 6.288774 * mp.sin()
        + 1.274027 * (2.0 * d - mp).sin()
        + 0.658314 * (2.0 * d).sin()
        + 0.213618 * (2.0 * mp).sin()
        - 0.185116 * e * m.sin()
        - 0.114332 * (2.0 * f).sin()
        + 0.058793 * (2.0 * d - 2.0 * mp).sin()
        + 0.057066 * e * (2.0 * d - m - mp).sin()
        + 0.053322 * (2.0 * d + mp).sin()
        + 0.045758 * e * (2.0 * d - m).sin()
        - 0.040923 * e * (m - mp).sin()
        - 0.034720 * d.sin()
        - 0.030383 * e * (m + mp).sin()
        + 0.015327 * (2.0 * d - 2.0 * f).sin()
        - 0.012528 * (mp + 2.0 * f).sin()
        + 0.010980 * (mp - 2.0 * f).sin()
        + 0.010675 * (4.0 * d - mp).sin()
        + 0.010034 * (3.0 * mp).sin();

    normalize_deg(a.lp_deg + sum)
}

/// Geocentric ecliptic latitude of the Moon in degrees.
pub fn latitude(jd: JulianDate) -> f64 {
    let t = jd.centuries_since_j2000();
    let a = arguments(t);
    let (d, mp, f) = (a.d, a.mp, a.f);

    5.128122 * f.sin()
        + 0.280602 * (mp + f).sin()
        + 0.277693 * (mp - f).sin()
        + 0.173237 * (2.0 * d - f).sin()
        + 0.055413 * (2.0 * d + f - mp).sin()
        + 0.046271 * (2.0 * d - f - mp).sin()
        + 0.032573 * (2.0 * d + f).sin()
        + 0.017198 * (2.0 * mp + f).sin()
        + 0.009267 * (2.0 * d + mp - f).sin()
        + 0.008823 * (2.0 * mp - f).sin()
}

/// Apparent equatorial coordinates of the Moon: (RA, Dec) in degrees.
pub fn equatorial(jd: JulianDate) -> (f64, f64) {
    let lambda = longitude(jd).to_radians();
    let beta = latitude(jd).to_radians();
    let eps = mean_obliquity_deg(jd).to_radians();

    let ra = (lambda.sin() * eps.cos() - beta.tan() * eps.sin()).atan2(lambda.cos());
    let dec = (beta.sin() * eps.cos() + beta.cos() * eps.sin() * lambda.sin()).asin();
    (normalize_deg(ra.to_degrees()), dec.to_degrees())
}
