//! Auspicious windows (muhurats) and best-date selection.
//!
//! Three daily windows are derived: Abhijit from a 15-way split of the
//! daylight span, Brahma and Godhuli from fixed offsets around sunrise and
//! sunset. Each carries a suitability score in [1.0, 5.0] and a rationale.
//!
//! Best-of-range selection filters candidate dates through a per-activity
//! tithi exclusion set, then ranks them by an externally supplied score.
//! The engine owns only the exclusion filter and the deterministic sort
//! contract; the score itself comes from a collaborator.

use std::cmp::Ordering;
use std::collections::BTreeSet;

use chrono::{Duration, NaiveDate, NaiveTime, Weekday};
use serde::Serialize;

use crate::models::{DailyPanchang, Muhurat, MuhuratKind, TimeWindow};

/// Daylight parts for the Abhijit division.
const ABHIJIT_PARTS: f64 = 15.0;

/// Abhijit occupies the 8th part (0-based index 7).
const ABHIJIT_PART_INDEX: f64 = 7.0;

/// Brahma muhurat starts 96 minutes before sunrise.
const BRAHMA_START_BEFORE_SUNRISE_MIN: i64 = 96;

/// Brahma muhurat ends 48 minutes before sunrise.
const BRAHMA_END_BEFORE_SUNRISE_MIN: i64 = 48;

/// Godhuli extends 12 minutes on either side of sunset.
const GODHULI_HALF_WIDTH_MIN: i64 = 12;

fn shift(t: NaiveTime, minutes: i64) -> NaiveTime {
    t.overflowing_add_signed(Duration::minutes(minutes)).0
}

fn shift_seconds(t: NaiveTime, seconds: i64) -> NaiveTime {
    t.overflowing_add_signed(Duration::seconds(seconds)).0
}

/// The three named daily muhurats.
///
/// Returns an empty list when sunrise or sunset is unavailable; every
/// window here is anchored on the daylight span.
pub fn daily_muhurats(
    weekday: Weekday,
    sunrise: Option<NaiveTime>,
    sunset: Option<NaiveTime>,
    daylight_minutes: Option<f64>,
) -> Vec<Muhurat> {
    let (sunrise, sunset, daylight) = match (sunrise, sunset, daylight_minutes) {
        (Some(rise), Some(set), Some(minutes)) if minutes > 0.0 => (rise, set, minutes),
        _ => return Vec::new(),
    };

    let mut muhurats = Vec::with_capacity(3);

    // Abhijit: the midday 8th of 15 daylight parts. On Wednesday the
    // window is still reported, with a reduced score and a caution.
    let part_seconds = daylight * 60.0 / ABHIJIT_PARTS;
    let abhijit = TimeWindow {
        start: shift_seconds(sunrise, (ABHIJIT_PART_INDEX * part_seconds).round() as i64),
        end: shift_seconds(
            sunrise,
            ((ABHIJIT_PART_INDEX + 1.0) * part_seconds).round() as i64,
        ),
    };
    let (score, reasoning) = if weekday == Weekday::Wed {
        (2.0, "Abhijit is generally avoided on Wednesdays.")
    } else {
        (
            4.5,
            "Excellent for most auspicious activities. Midday power.",
        )
    };
    muhurats.push(Muhurat {
        kind: MuhuratKind::Abhijit,
        window: abhijit,
        score,
        reasoning,
    });

    // Brahma: two muhurats before sunrise down to one muhurat before.
    muhurats.push(Muhurat {
        kind: MuhuratKind::Brahma,
        window: TimeWindow {
            start: shift(sunrise, -BRAHMA_START_BEFORE_SUNRISE_MIN),
            end: shift(sunrise, -BRAHMA_END_BEFORE_SUNRISE_MIN),
        },
        score: 5.0,
        reasoning: "Best for meditation, learning, and spiritual practices.",
    });

    // Godhuli: the cow-dust twilight straddling sunset.
    muhurats.push(Muhurat {
        kind: MuhuratKind::Godhuli,
        window: TimeWindow {
            start: shift(sunset, -GODHULI_HALF_WIDTH_MIN),
            end: shift(sunset, GODHULI_HALF_WIDTH_MIN),
        },
        score: 4.0,
        reasoning: "Auspicious for cattle, weddings, and evening prayers.",
    });

    muhurats
}

/// Supplies suitability scores for candidate dates. Implemented by an
/// external collaborator (in production, the content-generation service);
/// the engine only consumes the numbers.
pub trait SuitabilityScorer {
    fn score(&self, day: &DailyPanchang) -> f64;
}

impl<F> SuitabilityScorer for F
where
    F: Fn(&DailyPanchang) -> f64,
{
    fn score(&self, day: &DailyPanchang) -> f64 {
        self(day)
    }
}

/// A ranked candidate date for an activity.
#[derive(Debug, Clone, Serialize)]
pub struct RankedDate {
    pub date: NaiveDate,
    pub score: f64,
}

/// Select the best dates for an activity from pre-computed daily records.
///
/// Days whose tithi index is in `excluded_tithis` are dropped; the rest
/// are ranked by descending score with ties broken by earliest date, and
/// the first `top_n` are returned.
pub fn select_best(
    days: &[DailyPanchang],
    excluded_tithis: &BTreeSet<u8>,
    scorer: &dyn SuitabilityScorer,
    top_n: usize,
) -> Vec<RankedDate> {
    let mut ranked: Vec<RankedDate> = days
        .iter()
        .filter(|day| !excluded_tithis.contains(&day.elements.tithi_index))
        .map(|day| RankedDate {
            date: day.date,
            score: scorer.score(day),
        })
        .collect();

    ranked.sort_by(|a, b| {
        b.score
            .partial_cmp(&a.score)
            .unwrap_or(Ordering::Equal)
            .then_with(|| a.date.cmp(&b.date))
    });
    ranked.truncate(top_n);
    ranked
}
