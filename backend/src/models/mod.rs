//! Core data model: time scales, locations, and output records.

pub mod location;
pub mod panchang;
pub mod time;

pub use location::Location;
pub use panchang::{
    CalendarElements, DailyPanchang, InauspiciousKind, Muhurat, MuhuratKind, NamedPeriod,
    Observances, Paksha, TimeWindow,
};
pub use time::{parse_date, JulianDate, J2000_JD};
