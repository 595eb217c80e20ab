//! Tithi-driven observance heuristic.
//!
//! A static rule table over (tithi name, paksha) for the commonly observed
//! fasts and festivals that recur every lunar month. Total and
//! deterministic; date-specific annual festivals are the enrichment
//! collaborator's concern, not this table's.

use crate::models::{Observances, Paksha};

/// Observance labels for a tithi/paksha combination.
pub fn observances(tithi: &str, paksha: Paksha) -> Observances {
    match (tithi, paksha) {
        ("Ekadashi", _) => Observances {
            festival: None,
            vrat: Some("Ekadashi"),
        },
        ("Purnima", _) => Observances {
            festival: Some("Purnima"),
            vrat: Some("Purnima Vrat"),
        },
        ("Amavasya", _) => Observances {
            festival: Some("Amavasya"),
            vrat: Some("Amavasya"),
        },
        ("Chaturthi", Paksha::Krishna) => Observances {
            festival: None,
            vrat: Some("Sankashti Chaturthi"),
        },
        ("Chaturthi", Paksha::Shukla) => Observances {
            festival: None,
            vrat: Some("Vinayaka Chaturthi"),
        },
        ("Trayodashi", _) => Observances {
            festival: None,
            vrat: Some("Pradosh Vrat"),
        },
        ("Ashtami", Paksha::Shukla) => Observances {
            festival: None,
            vrat: Some("Durga Ashtami"),
        },
        ("Ashtami", Paksha::Krishna) => Observances {
            festival: None,
            vrat: Some("Kalashtami"),
        },
        _ => Observances::default(),
    }
}
