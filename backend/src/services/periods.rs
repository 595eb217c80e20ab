//! Daily inauspicious periods: Rahu Kaal, Yamaganda and Gulika.
//!
//! The daylight span is divided into 8 equal segments; each period
//! occupies one weekday-selected segment. The segment tables are fixed;
//! only the sunrise anchor and daylight length vary by date and place.

use chrono::{Duration, NaiveTime, Weekday};

use crate::models::{InauspiciousKind, NamedPeriod, TimeWindow};

/// Rahu Kaal segment per weekday, Monday = 0.
const RAHU_SEGMENTS: [u8; 7] = [1, 6, 4, 5, 3, 2, 7];

/// Yamaganda segment per weekday, Monday = 0.
const YAMA_SEGMENTS: [u8; 7] = [3, 2, 1, 0, 5, 4, 6];

/// Gulika segment per weekday, Monday = 0.
const GULIKA_SEGMENTS: [u8; 7] = [5, 4, 3, 2, 1, 0, 6];

/// Daylight segments per day.
const SEGMENTS_PER_DAY: f64 = 8.0;

/// One segment of the daylight span as a clock window.
fn segment_window(sunrise: NaiveTime, daylight_minutes: f64, index: u8) -> TimeWindow {
    let segment_seconds = daylight_minutes * 60.0 / SEGMENTS_PER_DAY;
    let start_offset = (index as f64 * segment_seconds).round() as i64;
    let end_offset = ((index as f64 + 1.0) * segment_seconds).round() as i64;

    TimeWindow {
        start: sunrise
            .overflowing_add_signed(Duration::seconds(start_offset))
            .0,
        end: sunrise
            .overflowing_add_signed(Duration::seconds(end_offset))
            .0,
    }
}

/// The three inauspicious periods for a weekday and daylight span.
///
/// On a degenerate daylight span (missing sunrise or non-positive length)
/// the periods are returned with `window: None`; no division happens.
pub fn inauspicious_periods(
    weekday: Weekday,
    sunrise: Option<NaiveTime>,
    daylight_minutes: Option<f64>,
) -> [NamedPeriod; 3] {
    let wd = weekday.num_days_from_monday() as usize;
    let window_for = |index: u8| -> Option<TimeWindow> {
        match (sunrise, daylight_minutes) {
            (Some(rise), Some(minutes)) if minutes > 0.0 => {
                Some(segment_window(rise, minutes, index))
            }
            _ => None,
        }
    };

    [
        NamedPeriod {
            kind: InauspiciousKind::RahuKaal,
            window: window_for(RAHU_SEGMENTS[wd]),
        },
        NamedPeriod {
            kind: InauspiciousKind::Yamaganda,
            window: window_for(YAMA_SEGMENTS[wd]),
        },
        NamedPeriod {
            kind: InauspiciousKind::Gulika,
            window: window_for(GULIKA_SEGMENTS[wd]),
        },
    ]
}
