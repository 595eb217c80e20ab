//! Engine configuration.
//!
//! Everything has a working default; a TOML file can override any subset.
//!
//! ```toml
//! default_city = "Varanasi"
//! fallback_sunrise = "06:00:00"
//! bulk_concurrency = 16
//!
//! [activity_exclusions]
//! vivah = [3, 8, 13, 18, 23, 28, 29]
//! ```

use std::collections::{BTreeMap, BTreeSet};
use std::path::Path;

use chrono::NaiveTime;
use serde::{Deserialize, Serialize};

/// Engine configuration, TOML-loadable with full defaults.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// City used when a caller does not specify one.
    pub default_city: String,

    /// Local civil time substituted for sunrise when the ephemeris is
    /// degenerate (polar always-up/always-down). Records built on this
    /// fallback are marked approximate.
    pub fallback_sunrise: NaiveTime,

    /// Worker fan-out for bulk range generation.
    pub bulk_concurrency: usize,

    /// Tithi indices (0-29) excluded per activity type in best-date
    /// selection. Keys are lower-case activity names.
    pub activity_exclusions: BTreeMap<String, Vec<u8>>,
}

impl Default for EngineConfig {
    fn default() -> Self {
        let mut activity_exclusions = BTreeMap::new();
        // Rikta tithis (Chaturthi, Navami, Chaturdashi of each fortnight)
        // plus Amavasya are avoided for marriages; housewarming also
        // avoids Purnima.
        activity_exclusions.insert(
            "vivah".to_string(),
            vec![3, 8, 13, 18, 23, 28, 29],
        );
        activity_exclusions.insert(
            "griha_pravesh".to_string(),
            vec![3, 8, 13, 14, 18, 23, 28, 29],
        );

        Self {
            default_city: "Delhi".to_string(),
            fallback_sunrise: NaiveTime::from_hms_opt(6, 0, 0)
                .unwrap_or(NaiveTime::MIN),
            bulk_concurrency: 8,
            activity_exclusions,
        }
    }
}

impl EngineConfig {
    /// Load configuration from a TOML file.
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        let text = std::fs::read_to_string(path)?;
        Ok(toml::from_str(&text)?)
    }

    /// Exclusion set for an activity; unknown activities exclude nothing.
    pub fn exclusions_for(&self, activity: &str) -> BTreeSet<u8> {
        self.activity_exclusions
            .get(&activity.to_ascii_lowercase())
            .map(|v| v.iter().copied().collect())
            .unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn defaults_are_complete() {
        let cfg = EngineConfig::default();
        assert_eq!(cfg.default_city, "Delhi");
        assert_eq!(cfg.fallback_sunrise, NaiveTime::from_hms_opt(6, 0, 0).unwrap());
        assert!(cfg.bulk_concurrency > 0);
        assert!(cfg.exclusions_for("vivah").contains(&29));
    }

    #[test]
    fn unknown_activity_excludes_nothing() {
        let cfg = EngineConfig::default();
        assert!(cfg.exclusions_for("naamkaran").is_empty());
    }

    #[test]
    fn activity_lookup_is_case_insensitive() {
        let cfg = EngineConfig::default();
        assert_eq!(cfg.exclusions_for("Vivah"), cfg.exclusions_for("vivah"));
    }

    #[test]
    fn partial_toml_overrides_defaults() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "default_city = \"Ujjain\"").unwrap();
        writeln!(file, "bulk_concurrency = 2").unwrap();

        let cfg = EngineConfig::load(file.path()).unwrap();
        assert_eq!(cfg.default_city, "Ujjain");
        assert_eq!(cfg.bulk_concurrency, 2);
        // Untouched fields keep their defaults.
        assert!(!cfg.exclusions_for("vivah").is_empty());
    }

    #[test]
    fn exclusions_override_via_toml() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[activity_exclusions]").unwrap();
        writeln!(file, "mundan = [7, 22]").unwrap();

        let cfg = EngineConfig::load(file.path()).unwrap();
        let set = cfg.exclusions_for("mundan");
        assert!(set.contains(&7) && set.contains(&22));
    }
}
