//! Position astronomy: low-precision Sun/Moon ephemerides, sidereal time,
//! the ayanamsa correction, and rise/set event search.
//!
//! Accuracy targets are set by the consumers: the narrowest downstream
//! segment is the 6-degree karana division, and the Moon series here is
//! good to a few arc-minutes, so every derived index is stable. All
//! longitudes are apparent, equinox of date, in degrees.

pub mod ayanamsa;
pub mod lunar;
pub mod riseset;
pub mod sidereal;
pub mod solar;

pub use riseset::{day_events, next_event, Body, DayEvents, EventKind, RiseSet};

use crate::models::JulianDate;

/// Apparent ecliptic longitude of a body in degrees, equinox of date.
pub fn ecliptic_longitude(body: Body, jd: JulianDate) -> f64 {
    match body {
        Body::Sun => solar::apparent_longitude(jd),
        Body::Moon => lunar::longitude(jd),
    }
}

/// Normalize an angle to [0, 360) degrees.
///
/// Every angle used as a table-index numerator must pass through this
/// first; raw differences and sums can be negative or reach exactly 360.
pub fn normalize_deg(deg: f64) -> f64 {
    deg.rem_euclid(360.0)
}
