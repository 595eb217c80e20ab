//! Rise/set event search for the Sun and Moon.
//!
//! The day is anchored at local civil midnight of the query date; for each
//! body the next rise and next set events after that anchor are located by
//! a forward altitude scan refined with bisection. A UTC-midnight anchor
//! would push the day's sunrise onto the following civil date whenever it
//! falls before 05:30 local at Indian longitudes, inverting the daylight
//! span for most of the summer. Polar conditions where a body never
//! crosses the horizon are first-class results, not errors: the caller
//! sees [`RiseSet::AlwaysUp`] or [`RiseSet::AlwaysDown`] and decides on
//! its documented fallback.

use chrono::{DateTime, NaiveDate, NaiveTime, Utc};
use serde::Serialize;

use crate::astro::{lunar, sidereal, solar};
use crate::models::{JulianDate, Location};

/// Bodies tracked by the provider.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Body {
    Sun,
    Moon,
}

/// Rising or setting.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventKind {
    Rise,
    Set,
}

/// Outcome of a rise/set search.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum RiseSet {
    /// The event occurs at the given UTC instant.
    At(DateTime<Utc>),
    /// The body stays above the event horizon through the search window.
    AlwaysUp,
    /// The body stays below the event horizon through the search window.
    AlwaysDown,
}

impl RiseSet {
    /// The event instant, if one occurred.
    pub fn instant(&self) -> Option<DateTime<Utc>> {
        match self {
            RiseSet::At(t) => Some(*t),
            _ => None,
        }
    }
}

/// Rise/set events and daylight span for one (date, location) query.
#[derive(Debug, Clone, Serialize)]
pub struct DayEvents {
    pub sunrise: RiseSet,
    pub sunset: RiseSet,
    pub moonrise: RiseSet,
    pub moonset: RiseSet,
    /// Sunset minus sunrise in minutes. `None` when either event is missing
    /// or the span is non-positive; no daylight division may happen then.
    pub daylight_minutes: Option<f64>,
}

/// Scan step: 5 minutes, small enough that no real rise/set pair can hide
/// inside one step outside of grazing polar geometries.
const SCAN_STEP_DAYS: f64 = 5.0 / 1440.0;

/// Forward search window in days. The Moon rises ~50 minutes later each
/// day, so two days always contain the next event when one exists.
const SEARCH_WINDOW_DAYS: f64 = 2.0;

/// Bisection stops below half a second.
const REFINE_TOLERANCE_DAYS: f64 = 0.5 / 86_400.0;

/// Target altitude at the event horizon, in degrees.
///
/// Sun: upper limb with standard refraction (34' + 16' semidiameter).
/// Moon: net of mean parallax, refraction and semidiameter.
fn target_altitude_deg(body: Body) -> f64 {
    match body {
        Body::Sun => -50.0 / 60.0,
        Body::Moon => 0.125,
    }
}

/// Geocentric altitude of a body above the horizon, in degrees.
fn altitude_deg(body: Body, jd: JulianDate, location: &Location) -> f64 {
    let (ra, dec) = match body {
        Body::Sun => solar::equatorial(jd),
        Body::Moon => lunar::equatorial(jd),
    };
    let lst = sidereal::lst_deg(jd, location.longitude_deg);
    let hour_angle = (lst - ra).to_radians();
    let phi = location.latitude_deg.to_radians();
    let dec = dec.to_radians();

    (phi.sin() * dec.sin() + phi.cos() * dec.cos() * hour_angle.cos())
        .asin()
        .to_degrees()
}

/// Find the next rise or set of `body` after `after`.
///
/// Total: every input produces a tagged result, never an error.
pub fn next_event(
    body: Body,
    kind: EventKind,
    after: DateTime<Utc>,
    location: &Location,
) -> RiseSet {
    let jd0 = JulianDate::from_datetime(after).value();
    let target = target_altitude_deg(body);
    let relative = |jd: f64| altitude_deg(body, JulianDate::new(jd), location) - target;

    let steps = (SEARCH_WINDOW_DAYS / SCAN_STEP_DAYS) as usize;
    let mut prev_jd = jd0;
    let mut prev = relative(jd0);
    let mut saw_above = prev > 0.0;

    for i in 1..=steps {
        let jd = jd0 + i as f64 * SCAN_STEP_DAYS;
        let cur = relative(jd);
        saw_above |= cur > 0.0;

        let crossed = match kind {
            EventKind::Rise => prev < 0.0 && cur >= 0.0,
            EventKind::Set => prev > 0.0 && cur <= 0.0,
        };
        if crossed {
            let event_jd = refine(&relative, prev_jd, jd);
            return RiseSet::At(JulianDate::new(event_jd).to_datetime());
        }
        prev_jd = jd;
        prev = cur;
    }

    if saw_above {
        RiseSet::AlwaysUp
    } else {
        RiseSet::AlwaysDown
    }
}

/// Bisect a sign change of `relative` down to sub-second precision.
fn refine(relative: &dyn Fn(f64) -> f64, mut lo: f64, mut hi: f64) -> f64 {
    let rising = relative(lo) < 0.0;
    while hi - lo > REFINE_TOLERANCE_DAYS {
        let mid = 0.5 * (lo + hi);
        let v = relative(mid);
        let before_event = if rising { v < 0.0 } else { v > 0.0 };
        if before_event {
            lo = mid;
        } else {
            hi = mid;
        }
    }
    0.5 * (lo + hi)
}

/// Rise/set events for the Sun and Moon on a calendar date, anchored at
/// local civil midnight, each searched independently.
pub fn day_events(date: NaiveDate, location: &Location) -> DayEvents {
    let anchor = location.utc_from_local(date.and_time(NaiveTime::MIN));

    let sunrise = next_event(Body::Sun, EventKind::Rise, anchor, location);
    let sunset = next_event(Body::Sun, EventKind::Set, anchor, location);
    let moonrise = next_event(Body::Moon, EventKind::Rise, anchor, location);
    let moonset = next_event(Body::Moon, EventKind::Set, anchor, location);

    let daylight_minutes = match (sunrise.instant(), sunset.instant()) {
        (Some(rise), Some(set)) => {
            let minutes = (set - rise).num_seconds() as f64 / 60.0;
            // The next set can precede the next rise when the sun is up at
            // the anchor instant; that span is not a daylight length.
            (minutes > 0.0).then_some(minutes)
        }
        _ => None,
    };

    DayEvents {
        sunrise,
        sunset,
        moonrise,
        moonset,
        daylight_minutes,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Timelike;

    fn delhi() -> Location {
        Location::resolve("Delhi").unwrap()
    }

    fn tromso() -> Location {
        Location::new("Tromso", 69.6492, 18.9553)
    }

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn delhi_winter_sunrise_and_sunset() {
        let events = day_events(date(2024, 1, 1), &delhi());

        // Sunrise ~07:14 IST = ~01:44 UTC
        let sunrise = events.sunrise.instant().expect("sunrise expected");
        let minutes = sunrise.hour() * 60 + sunrise.minute();
        assert!(
            (90..=120).contains(&minutes),
            "sunrise UTC {sunrise} out of expected band"
        );

        // Sunset ~17:35 IST = ~12:05 UTC
        let sunset = events.sunset.instant().expect("sunset expected");
        let minutes = sunset.hour() * 60 + sunset.minute();
        assert!(
            (710..=745).contains(&minutes),
            "sunset UTC {sunset} out of expected band"
        );

        // Day length in Delhi on Jan 1 is close to 10h20m.
        let daylight = events.daylight_minutes.expect("daylight expected");
        assert!(
            (600.0..=645.0).contains(&daylight),
            "daylight {daylight} out of range"
        );
    }

    #[test]
    fn delhi_summer_days_are_longer() {
        let winter = day_events(date(2024, 1, 1), &delhi());
        let summer = day_events(date(2024, 6, 21), &delhi());
        assert!(
            summer.daylight_minutes.unwrap() > winter.daylight_minutes.unwrap() + 120.0,
            "summer day should be much longer"
        );
    }

    #[test]
    fn moon_events_found_for_delhi() {
        let events = day_events(date(2024, 1, 1), &delhi());
        assert!(matches!(events.moonrise, RiseSet::At(_)));
        assert!(matches!(events.moonset, RiseSet::At(_)));
    }

    #[test]
    fn polar_night_is_always_down() {
        let events = day_events(date(2024, 1, 1), &tromso());
        assert_eq!(events.sunrise, RiseSet::AlwaysDown);
        assert_eq!(events.sunset, RiseSet::AlwaysDown);
        assert_eq!(events.daylight_minutes, None);
    }

    #[test]
    fn midnight_sun_is_always_up() {
        let events = day_events(date(2024, 6, 21), &tromso());
        assert_eq!(events.sunrise, RiseSet::AlwaysUp);
        assert_eq!(events.sunset, RiseSet::AlwaysUp);
        assert_eq!(events.daylight_minutes, None);
    }

    #[test]
    fn rise_precedes_set_in_delhi_morning() {
        // From local midnight the next rise always comes before the next
        // set, in any season.
        let events = day_events(date(2024, 3, 15), &delhi());
        let rise = events.sunrise.instant().unwrap();
        let set = events.sunset.instant().unwrap();
        assert!(rise < set);
    }

    #[test]
    fn daylight_is_positive_when_present() {
        for day in [1, 15, 28] {
            let events = day_events(date(2024, 2, day), &delhi());
            if let Some(minutes) = events.daylight_minutes {
                assert!(minutes > 0.0);
            }
        }
    }
}
