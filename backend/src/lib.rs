//! # Panchang Engine
//!
//! Vedic calendrical ("panchang") and auspicious-timing calculation engine.
//! Given a calendar date and a directory city, it derives the classical
//! calendar elements (tithi, nakshatra, yoga, karana), the three daily
//! inauspicious periods scaled to the actual daylight span, the named
//! auspicious windows with suitability scores, and the recurring
//! fast/festival labels.
//!
//! ## Architecture
//!
//! The crate is organized into several logical modules:
//!
//! - [`models`]: time scales, locations, and the serde-serializable
//!   output records consumed by downstream collaborators
//! - [`astro`]: position astronomy (Sun/Moon longitudes, sidereal time,
//!   ayanamsa, rise/set search)
//! - [`services`]: the pure derivers and the [`services::PanchangEngine`]
//!   that assembles the daily record, plus the bulk range driver
//! - [`store`]: the persistence collaborator seam and an in-memory
//!   implementation
//! - [`config`]: TOML-loadable configuration with complete defaults
//!
//! ## Determinism
//!
//! The engine is purely functional: output depends only on the (date,
//! city) inputs and static tables. Nothing reads the wall clock, so
//! identical inputs serialize byte-identically, and independent calls can
//! fan out across workers without coordination. Degenerate polar
//! rise/set conditions are tagged data with a documented fallback, never
//! errors.

pub mod astro;
pub mod config;
pub mod error;
pub mod models;
pub mod services;
pub mod store;

pub use config::EngineConfig;
pub use error::EngineError;
pub use models::{DailyPanchang, Location, Muhurat};
pub use services::PanchangEngine;
pub use store::{MemoryStore, PanchangStore};
