//! Engine error taxonomy.
//!
//! Only pre-computation input failures are errors. Degenerate ephemeris
//! conditions (polar always-up/always-down) are data, carried in
//! [`crate::astro::riseset::RiseSet`] tags and recovered with a documented
//! fallback; they never surface here.

use thiserror::Error;

/// Errors that abort a calculation before any astronomy runs.
#[derive(Debug, Clone, Error)]
pub enum EngineError {
    /// Unparseable calendar date.
    #[error("invalid date: {0}")]
    InvalidDate(String),

    /// City name not present in the location directory. The engine never
    /// substitutes a default location for an unresolved name.
    #[error("unknown city: {0}")]
    UnknownLocation(String),
}
