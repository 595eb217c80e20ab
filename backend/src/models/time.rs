use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use crate::error::EngineError;

/// Julian Date representation.
/// JD 0 = 4713-01-01 BCE 12:00 (proleptic Julian calendar); the Unix epoch
/// is JD 2440587.5.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
pub struct JulianDate(f64);

/// JD of the J2000.0 epoch (2000-01-01 12:00 TT).
pub const J2000_JD: f64 = 2_451_545.0;

/// JD of the Unix epoch (1970-01-01 00:00 UTC).
const UNIX_EPOCH_JD: f64 = 2_440_587.5;

impl JulianDate {
    /// Create a new JD value.
    pub fn new(v: f64) -> Self {
        Self(v)
    }

    /// Raw JD value as f64.
    pub fn value(&self) -> f64 {
        self.0
    }

    /// Julian centuries elapsed since J2000.0.
    pub fn centuries_since_j2000(&self) -> f64 {
        (self.0 - J2000_JD) / 36525.0
    }

    /// Convert to Unix timestamp (seconds since 1970-01-01 00:00:00 UTC).
    pub fn to_unix_timestamp(&self) -> f64 {
        (self.0 - UNIX_EPOCH_JD) * 86400.0
    }

    /// Create from Unix timestamp (seconds since 1970-01-01 00:00:00 UTC).
    pub fn from_unix_timestamp(timestamp: f64) -> Self {
        Self(timestamp / 86400.0 + UNIX_EPOCH_JD)
    }

    /// Convert to chrono DateTime<Utc>.
    pub fn to_datetime(&self) -> DateTime<Utc> {
        let secs = self.to_unix_timestamp();
        let secs_i64 = secs.floor() as i64;
        let nanos = ((secs - secs.floor()) * 1e9) as u32;
        DateTime::from_timestamp(secs_i64, nanos).unwrap_or(DateTime::UNIX_EPOCH)
    }

    /// Create from chrono DateTime<Utc>.
    pub fn from_datetime(dt: DateTime<Utc>) -> Self {
        Self::from_unix_timestamp(dt.timestamp() as f64 + dt.timestamp_subsec_nanos() as f64 / 1e9)
    }
}

impl From<f64> for JulianDate {
    fn from(v: f64) -> Self {
        JulianDate::new(v)
    }
}

/// Parse an ISO calendar date (YYYY-MM-DD).
///
/// Fails fast with a descriptive error; nothing downstream ever sees a
/// malformed date.
pub fn parse_date(s: &str) -> Result<NaiveDate, EngineError> {
    NaiveDate::parse_from_str(s, "%Y-%m-%d")
        .map_err(|e| EngineError::InvalidDate(format!("{s}: {e}")))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_jd_new() {
        let jd = JulianDate::new(2_451_545.0);
        assert_eq!(jd.value(), 2_451_545.0);
    }

    #[test]
    fn test_jd_from_f64() {
        let jd: JulianDate = 2_460_000.5.into();
        assert_eq!(jd.value(), 2_460_000.5);
    }

    #[test]
    fn test_jd_unix_epoch() {
        // JD 2440587.5 corresponds to the Unix epoch (1970-01-01)
        let jd = JulianDate::new(2_440_587.5);
        assert!(jd.to_unix_timestamp().abs() < 1.0);
    }

    #[test]
    fn test_jd_roundtrip_unix() {
        let original = JulianDate::new(2_460_123.25);
        let roundtrip = JulianDate::from_unix_timestamp(original.to_unix_timestamp());
        assert!((original.value() - roundtrip.value()).abs() < 1e-9);
    }

    #[test]
    fn test_jd_centuries_at_j2000() {
        let jd = JulianDate::new(J2000_JD);
        assert_eq!(jd.centuries_since_j2000(), 0.0);
    }

    #[test]
    fn test_jd_centuries_one_century() {
        let jd = JulianDate::new(J2000_JD + 36525.0);
        assert!((jd.centuries_since_j2000() - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_jd_datetime_roundtrip() {
        let dt = DateTime::parse_from_rfc3339("2026-01-15T06:30:00Z")
            .unwrap()
            .with_timezone(&Utc);
        let jd = JulianDate::from_datetime(dt);
        let back = jd.to_datetime();
        assert!((back - dt).num_seconds().abs() <= 1);
    }

    #[test]
    fn test_jd_j2000_datetime() {
        // J2000.0 = 2000-01-01 12:00 (UTC at our precision)
        let dt = DateTime::parse_from_rfc3339("2000-01-01T12:00:00Z")
            .unwrap()
            .with_timezone(&Utc);
        let jd = JulianDate::from_datetime(dt);
        assert!((jd.value() - J2000_JD).abs() < 1e-6);
    }

    #[test]
    fn test_parse_date_valid() {
        let d = parse_date("2026-03-01").unwrap();
        assert_eq!(d, NaiveDate::from_ymd_opt(2026, 3, 1).unwrap());
    }

    #[test]
    fn test_parse_date_invalid() {
        assert!(parse_date("2026-13-01").is_err());
        assert!(parse_date("not-a-date").is_err());
    }
}
