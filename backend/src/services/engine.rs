//! Daily record assembly.
//!
//! [`PanchangEngine`] wires the position provider, sidereal corrector and
//! the pure derivers into the flat daily record. It carries only immutable
//! configuration: identical (date, city) inputs always produce identical
//! records, and independent calls may run with unbounded parallelism.

use chrono::{DateTime, Datelike, NaiveDate, NaiveTime, Utc};
use tracing::debug;

use crate::astro::{self, ayanamsa, lunar, solar, DayEvents, RiseSet};
use crate::config::EngineConfig;
use crate::error::EngineError;
use crate::models::{DailyPanchang, JulianDate, Location, Muhurat};
use crate::services::muhurat::{self, RankedDate, SuitabilityScorer};
use crate::services::{elements, festivals, periods};

/// The calculation engine: an effectively-immutable service value.
#[derive(Debug, Clone, Default)]
pub struct PanchangEngine {
    config: EngineConfig,
}

impl PanchangEngine {
    pub fn new(config: EngineConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Sunrise instant used for element derivation.
    ///
    /// When the ephemeris is degenerate the documented fallback applies:
    /// the configured local civil time (06:00 by default) on the query
    /// date, and the record is marked approximate.
    fn element_instant(
        &self,
        date: NaiveDate,
        location: &Location,
        events: &DayEvents,
    ) -> (DateTime<Utc>, bool) {
        match events.sunrise {
            RiseSet::At(instant) => (instant, false),
            RiseSet::AlwaysUp | RiseSet::AlwaysDown => (
                location.utc_from_local(date.and_time(self.config.fallback_sunrise)),
                true,
            ),
        }
    }

    /// Compute the full daily record for a date and directory city.
    pub fn calculate(&self, date: NaiveDate, city: &str) -> Result<DailyPanchang, EngineError> {
        let location = Location::resolve(city)?;
        let events = astro::day_events(date, &location);
        let (sunrise_utc, approximate) = self.element_instant(date, &location, &events);

        // All four longitudes are sampled at the same sunrise instant.
        let jd = JulianDate::from_datetime(sunrise_utc);
        let sun_lon = solar::apparent_longitude(jd);
        let moon_lon = lunar::longitude(jd);
        let sidereal_sun = ayanamsa::sidereal_of(sun_lon, jd);
        let sidereal_moon = ayanamsa::sidereal_of(moon_lon, jd);

        let elements = elements::derive(sun_lon, moon_lon, sidereal_sun, sidereal_moon);
        debug!(
            %date,
            city = %location.name,
            tithi = elements.tithi,
            nakshatra = elements.nakshatra,
            approximate,
            "derived calendar elements"
        );

        let sunrise_local = events.sunrise.instant().map(|t| location.local_time(t));
        let sunset_local = events.sunset.instant().map(|t| location.local_time(t));
        let periods = periods::inauspicious_periods(
            date.weekday(),
            sunrise_local,
            events.daylight_minutes,
        );

        let observances = festivals::observances(elements.tithi, elements.paksha);

        Ok(DailyPanchang {
            date,
            city: location.name.clone(),
            sunrise: sunrise_local,
            sunset: sunset_local,
            moonrise: events.moonrise.instant().map(|t| location.local_time(t)),
            moonset: events.moonset.instant().map(|t| location.local_time(t)),
            day_duration: format_duration(events.daylight_minutes),
            elements,
            periods: periods.to_vec(),
            festival: observances.festival,
            vrat: observances.vrat,
            festivals: observances.labels(),
            approximate,
        })
    }

    /// The three daily auspicious windows for a date and city.
    pub fn calculate_muhurats(
        &self,
        date: NaiveDate,
        city: &str,
    ) -> Result<Vec<Muhurat>, EngineError> {
        let location = Location::resolve(city)?;
        let events = astro::day_events(date, &location);

        let sunrise_local = events.sunrise.instant().map(|t| location.local_time(t));
        let sunset_local = events.sunset.instant().map(|t| location.local_time(t));

        Ok(muhurat::daily_muhurats(
            date.weekday(),
            sunrise_local,
            sunset_local,
            events.daylight_minutes,
        ))
    }

    /// Rank pre-computed daily records as candidates for an activity.
    ///
    /// The activity's configured tithi exclusions filter the candidates;
    /// scores come from the supplied collaborator.
    pub fn select_best_dates(
        &self,
        activity: &str,
        days: &[DailyPanchang],
        scorer: &dyn SuitabilityScorer,
        top_n: usize,
    ) -> Vec<RankedDate> {
        let excluded = self.config.exclusions_for(activity);
        if excluded.is_empty() {
            debug!(activity, "no exclusion set configured for activity");
        }
        muhurat::select_best(days, &excluded, scorer, top_n)
    }

    /// Local sunrise fallback clock time, exposed for callers that render
    /// approximate records.
    pub fn fallback_sunrise(&self) -> NaiveTime {
        self.config.fallback_sunrise
    }
}

/// Format a daylight span as "Xh Ym"; degenerate spans render "0h 0m".
fn format_duration(daylight_minutes: Option<f64>) -> String {
    let minutes = daylight_minutes.unwrap_or(0.0).max(0.0);
    format!("{}h {}m", (minutes / 60.0) as u64, (minutes % 60.0) as u64)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn format_duration_rounds_down() {
        assert_eq!(format_duration(Some(675.0)), "11h 15m");
        assert_eq!(format_duration(Some(60.0)), "1h 0m");
        assert_eq!(format_duration(None), "0h 0m");
    }

    #[test]
    fn unknown_city_is_rejected_before_astronomy() {
        let engine = PanchangEngine::default();
        let err = engine.calculate(date(2026, 1, 1), "Nowhere").unwrap_err();
        assert!(matches!(err, EngineError::UnknownLocation(_)));
    }

    #[test]
    fn delhi_record_is_complete() {
        let engine = PanchangEngine::default();
        let record = engine.calculate(date(2024, 1, 15), "Delhi").unwrap();

        assert_eq!(record.city, "Delhi");
        assert!(record.sunrise.is_some());
        assert!(record.sunset.is_some());
        assert!(record.elements.tithi_index <= 29);
        assert!(record.elements.nakshatra_index <= 26);
        assert!(record.elements.yoga_index <= 26);
        assert_eq!(record.periods.len(), 3);
        assert!(record.periods.iter().all(|p| p.window.is_some()));
        assert!(!record.approximate);
        assert_ne!(record.day_duration, "0h 0m");
    }

    #[test]
    fn polar_record_uses_fallback_and_is_marked_approximate() {
        // No directory city is polar, so exercise the fallback path
        // through element_instant directly.
        let engine = PanchangEngine::default();
        let tromso = Location::new("Tromso", 69.6492, 18.9553);
        let events = astro::day_events(date(2024, 1, 1), &tromso);
        let (instant, approximate) = engine.element_instant(date(2024, 1, 1), &tromso, &events);

        assert!(approximate);
        // Fallback is local 06:00 = 00:30 UTC at the IST offset.
        assert_eq!(tromso.local_time(instant), engine.fallback_sunrise());
    }

    #[test]
    fn calculate_is_idempotent() {
        let engine = PanchangEngine::default();
        let a = engine.calculate(date(2024, 3, 8), "Varanasi").unwrap();
        let b = engine.calculate(date(2024, 3, 8), "Varanasi").unwrap();
        assert_eq!(
            serde_json::to_string(&a).unwrap(),
            serde_json::to_string(&b).unwrap()
        );
    }

    #[test]
    fn festivals_follow_elements() {
        // Scan a month of records: every Ekadashi day carries the vrat.
        let engine = PanchangEngine::default();
        for day in 1..=30 {
            let record = engine.calculate(date(2024, 4, day), "Delhi").unwrap();
            if record.elements.tithi == "Ekadashi" {
                assert_eq!(record.vrat, Some("Ekadashi"));
                assert!(record.festivals.contains(&"Ekadashi"));
            }
        }
    }

    #[test]
    fn muhurats_present_for_normal_day() {
        let engine = PanchangEngine::default();
        let muhurats = engine.calculate_muhurats(date(2024, 1, 15), "Delhi").unwrap();
        assert_eq!(muhurats.len(), 3);
        for m in &muhurats {
            assert!((1.0..=5.0).contains(&m.score));
            assert!(!m.reasoning.is_empty());
        }
    }

    #[test]
    fn wednesday_abhijit_scores_lower() {
        let engine = PanchangEngine::default();
        // 2024-01-17 was a Wednesday, 2024-01-18 a Thursday.
        let wed = engine.calculate_muhurats(date(2024, 1, 17), "Delhi").unwrap();
        let thu = engine.calculate_muhurats(date(2024, 1, 18), "Delhi").unwrap();

        let score = |ms: &[Muhurat]| {
            ms.iter()
                .find(|m| m.kind == crate::models::MuhuratKind::Abhijit)
                .map(|m| m.score)
                .unwrap_or(0.0)
        };
        assert!(score(&wed) < score(&thu));
    }
}
