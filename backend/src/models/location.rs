//! Geographic locations and the static city directory.
//!
//! The directory is reference data owned by the wider platform; the engine
//! only consumes a resolved coordinate pair. Unknown names fail fast with
//! [`EngineError::UnknownLocation`] instead of silently falling back to a
//! default city.

use chrono::{DateTime, Duration, NaiveDateTime, NaiveTime, Utc};
use serde::Serialize;

use crate::error::EngineError;

/// A resolved observer location.
#[derive(Debug, Clone, Serialize)]
pub struct Location {
    /// City name as registered in the directory.
    pub name: String,
    /// Geodetic latitude in degrees, north positive.
    pub latitude_deg: f64,
    /// Geodetic longitude in degrees, east positive.
    pub longitude_deg: f64,
    /// Offset of local civil time from UTC, in minutes.
    pub utc_offset_minutes: i32,
}

/// IST offset in minutes (UTC+05:30). All directory cities use it.
const IST_OFFSET_MINUTES: i32 = 330;

/// City directory: name, latitude, longitude.
const CITY_DIRECTORY: &[(&str, f64, f64)] = &[
    ("Delhi", 28.6139, 77.2090),
    ("Mumbai", 19.0760, 72.8777),
    ("Kolkata", 22.5726, 88.3639),
    ("Chennai", 13.0827, 80.2707),
    ("Bangalore", 12.9716, 77.5946),
    ("Hyderabad", 17.3850, 78.4867),
    ("Ahmedabad", 23.0225, 72.5714),
    ("Pune", 18.5204, 73.8567),
    ("Jaipur", 26.9124, 75.7873),
    ("Lucknow", 26.8467, 80.9462),
    ("Varanasi", 25.3176, 82.9739),
    ("Ayodhya", 26.7922, 82.1998),
    ("Mathura", 27.4924, 77.6737),
    ("Haridwar", 29.9457, 78.1642),
    ("Rishikesh", 30.0869, 78.2676),
    ("Ujjain", 23.1765, 75.7885),
    ("Nashik", 19.9975, 73.7898),
    ("Prayagraj", 25.4358, 81.8463),
    ("Bhubaneswar", 20.2961, 85.8245),
    ("Guwahati", 26.1445, 91.7362),
];

impl Location {
    /// Construct a location directly from coordinates (IST offset).
    pub fn new(name: impl Into<String>, latitude_deg: f64, longitude_deg: f64) -> Self {
        Self {
            name: name.into(),
            latitude_deg,
            longitude_deg,
            utc_offset_minutes: IST_OFFSET_MINUTES,
        }
    }

    /// Resolve a city name through the directory (case-insensitive).
    pub fn resolve(name: &str) -> Result<Self, EngineError> {
        CITY_DIRECTORY
            .iter()
            .find(|(city, _, _)| city.eq_ignore_ascii_case(name))
            .map(|&(city, lat, lon)| Location::new(city, lat, lon))
            .ok_or_else(|| EngineError::UnknownLocation(name.to_string()))
    }

    /// Local civil clock time for a UTC instant.
    pub fn local_time(&self, utc: DateTime<Utc>) -> NaiveTime {
        (utc.naive_utc() + Duration::minutes(self.utc_offset_minutes as i64)).time()
    }

    /// UTC instant for a local civil date-time.
    pub fn utc_from_local(&self, local: NaiveDateTime) -> DateTime<Utc> {
        DateTime::from_naive_utc_and_offset(
            local - Duration::minutes(self.utc_offset_minutes as i64),
            Utc,
        )
    }

    /// All registered city names, in directory order.
    pub fn directory_names() -> impl Iterator<Item = &'static str> {
        CITY_DIRECTORY.iter().map(|(city, _, _)| *city)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    #[test]
    fn resolve_known_city() {
        let loc = Location::resolve("Delhi").unwrap();
        assert!((loc.latitude_deg - 28.6139).abs() < 1e-9);
        assert!((loc.longitude_deg - 77.2090).abs() < 1e-9);
        assert_eq!(loc.utc_offset_minutes, 330);
    }

    #[test]
    fn resolve_is_case_insensitive() {
        assert!(Location::resolve("varanasi").is_ok());
        assert!(Location::resolve("UJJAIN").is_ok());
    }

    #[test]
    fn resolve_unknown_city_fails_fast() {
        let err = Location::resolve("Gotham").unwrap_err();
        assert!(matches!(err, EngineError::UnknownLocation(_)));
    }

    #[test]
    fn local_time_applies_ist_offset() {
        let loc = Location::resolve("Delhi").unwrap();
        let utc = NaiveDate::from_ymd_opt(2026, 1, 15)
            .unwrap()
            .and_hms_opt(1, 0, 0)
            .unwrap()
            .and_utc();
        // 01:00 UTC = 06:30 IST
        assert_eq!(loc.local_time(utc), NaiveTime::from_hms_opt(6, 30, 0).unwrap());
    }

    #[test]
    fn utc_from_local_roundtrip() {
        let loc = Location::resolve("Delhi").unwrap();
        let local = NaiveDate::from_ymd_opt(2026, 1, 15)
            .unwrap()
            .and_hms_opt(6, 0, 0)
            .unwrap();
        let utc = loc.utc_from_local(local);
        assert_eq!(loc.local_time(utc), local.time());
    }

    #[test]
    fn directory_has_twenty_cities() {
        assert_eq!(Location::directory_names().count(), 20);
    }
}
