//! Output records produced by the engine.
//!
//! These are the flat, serde-serializable structures handed to downstream
//! collaborators (persistence, natural-language enrichment). Clock times
//! serialize as local "HH:MM" strings, matching the platform's record
//! format.

use std::fmt;

use chrono::{NaiveDate, NaiveTime};
use serde::{Serialize, Serializer};

/// Serialize a clock time as "HH:MM".
fn hhmm<S: Serializer>(t: &NaiveTime, s: S) -> Result<S::Ok, S::Error> {
    s.collect_str(&t.format("%H:%M"))
}

/// Serialize an optional clock time as "HH:MM" or null.
fn hhmm_opt<S: Serializer>(t: &Option<NaiveTime>, s: S) -> Result<S::Ok, S::Error> {
    match t {
        Some(t) => hhmm(t, s),
        None => s.serialize_none(),
    }
}

/// Bright (waxing) or dark (waning) half of the lunar month.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Paksha {
    Shukla,
    Krishna,
}

impl fmt::Display for Paksha {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Paksha::Shukla => write!(f, "Shukla"),
            Paksha::Krishna => write!(f, "Krishna"),
        }
    }
}

/// The five classical calendar elements derived at the sunrise instant.
///
/// Pure data: fully determined by the Sun/Moon longitudes (tropical and
/// sidereal) at one instant, with no hidden state.
#[derive(Debug, Clone, Serialize)]
pub struct CalendarElements {
    /// Tithi index in [0, 29]; 0 = Shukla Pratipada.
    pub tithi_index: u8,
    pub tithi: &'static str,
    pub tithi_hindi: &'static str,
    pub paksha: Paksha,
    /// Nakshatra index in [0, 26]; 0 = Ashwini.
    pub nakshatra_index: u8,
    pub nakshatra: &'static str,
    pub nakshatra_hindi: &'static str,
    /// Yoga index in [0, 26]; 0 = Vishkambha.
    pub yoga_index: u8,
    pub yoga: &'static str,
    pub yoga_hindi: &'static str,
    /// Karana counter in [1, 60] across the lunar month.
    pub karana_counter: u8,
    pub karana: &'static str,
    pub karana_hindi: &'static str,
}

/// A half-open local-time window [start, end).
///
/// Always derived from a fractional split of the daylight span or a fixed
/// minute offset from sunrise/sunset, never from wall-clock "now".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TimeWindow {
    #[serde(serialize_with = "hhmm")]
    pub start: NaiveTime,
    #[serde(serialize_with = "hhmm")]
    pub end: NaiveTime,
}

impl fmt::Display for TimeWindow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}-{}",
            self.start.format("%H:%M"),
            self.end.format("%H:%M")
        )
    }
}

/// The three daily inauspicious periods.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum InauspiciousKind {
    RahuKaal,
    Yamaganda,
    Gulika,
}

impl fmt::Display for InauspiciousKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InauspiciousKind::RahuKaal => write!(f, "Rahu Kaal"),
            InauspiciousKind::Yamaganda => write!(f, "Yamaganda"),
            InauspiciousKind::Gulika => write!(f, "Gulika"),
        }
    }
}

/// A named inauspicious period. `window` is `None` when the daylight span
/// is degenerate (no sunrise/sunset, or non-positive duration).
#[derive(Debug, Clone, Copy, Serialize)]
pub struct NamedPeriod {
    pub kind: InauspiciousKind,
    pub window: Option<TimeWindow>,
}

/// The three daily named auspicious windows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum MuhuratKind {
    Abhijit,
    Brahma,
    Godhuli,
}

impl fmt::Display for MuhuratKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MuhuratKind::Abhijit => write!(f, "Abhijit"),
            MuhuratKind::Brahma => write!(f, "Brahma"),
            MuhuratKind::Godhuli => write!(f, "Godhuli"),
        }
    }
}

/// A named auspicious window with its suitability score and rationale.
#[derive(Debug, Clone, Serialize)]
pub struct Muhurat {
    #[serde(rename = "type")]
    pub kind: MuhuratKind,
    pub window: TimeWindow,
    /// Suitability in [1.0, 5.0].
    pub score: f64,
    pub reasoning: &'static str,
}

/// Zero-or-more observance labels for a date, split into the platform's
/// festival/vrat columns.
#[derive(Debug, Clone, Default, Serialize)]
pub struct Observances {
    pub festival: Option<&'static str>,
    pub vrat: Option<&'static str>,
}

impl Observances {
    /// Combined label list: festival first, then vrat when distinct.
    pub fn labels(&self) -> Vec<&'static str> {
        let mut labels = Vec::new();
        if let Some(f) = self.festival {
            labels.push(f);
        }
        if let Some(v) = self.vrat {
            if Some(v) != self.festival {
                labels.push(v);
            }
        }
        labels
    }
}

/// The merged daily record: everything the engine derives for one
/// (date, city) pair. Identical inputs always produce a byte-identical
/// serialization of this record.
#[derive(Debug, Clone, Serialize)]
pub struct DailyPanchang {
    pub date: NaiveDate,
    pub city: String,
    #[serde(serialize_with = "hhmm_opt")]
    pub sunrise: Option<NaiveTime>,
    #[serde(serialize_with = "hhmm_opt")]
    pub sunset: Option<NaiveTime>,
    #[serde(serialize_with = "hhmm_opt")]
    pub moonrise: Option<NaiveTime>,
    #[serde(serialize_with = "hhmm_opt")]
    pub moonset: Option<NaiveTime>,
    /// Daylight duration formatted "Xh Ym"; "0h 0m" when degenerate.
    pub day_duration: String,
    #[serde(flatten)]
    pub elements: CalendarElements,
    pub periods: Vec<NamedPeriod>,
    pub festival: Option<&'static str>,
    pub vrat: Option<&'static str>,
    pub festivals: Vec<&'static str>,
    /// Set when a degenerate rise/set condition forced the documented
    /// fallback sunrise instant.
    pub approximate: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn t(h: u32, m: u32) -> NaiveTime {
        NaiveTime::from_hms_opt(h, m, 0).unwrap()
    }

    #[test]
    fn window_displays_as_clock_range() {
        let w = TimeWindow {
            start: t(7, 30),
            end: t(9, 0),
        };
        assert_eq!(w.to_string(), "07:30-09:00");
    }

    #[test]
    fn window_serializes_hhmm() {
        let w = TimeWindow {
            start: t(4, 14),
            end: t(5, 2),
        };
        let json = serde_json::to_string(&w).unwrap();
        assert_eq!(json, r#"{"start":"04:14","end":"05:02"}"#);
    }

    #[test]
    fn observance_labels_deduplicate() {
        let o = Observances {
            festival: Some("Purnima"),
            vrat: Some("Purnima Vrat"),
        };
        assert_eq!(o.labels(), vec!["Purnima", "Purnima Vrat"]);

        let o = Observances {
            festival: Some("Amavasya"),
            vrat: Some("Amavasya"),
        };
        assert_eq!(o.labels(), vec!["Amavasya"]);
    }

    #[test]
    fn kind_display_names() {
        assert_eq!(InauspiciousKind::RahuKaal.to_string(), "Rahu Kaal");
        assert_eq!(MuhuratKind::Abhijit.to_string(), "Abhijit");
        assert_eq!(Paksha::Krishna.to_string(), "Krishna");
    }
}
