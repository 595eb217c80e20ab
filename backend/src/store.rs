//! Persistence seam.
//!
//! The engine is storage-agnostic: downstream platforms own real
//! persistence and its concurrency controls. This module defines the
//! minimal collaborator contract the bulk driver writes through, keyed by
//! (date, city) with insert-vs-update semantics, plus an in-memory
//! implementation used by tests and the default CLI run.

use std::collections::BTreeMap;
use std::sync::Mutex;

use chrono::NaiveDate;

use crate::models::DailyPanchang;

/// Upsert-style record sink keyed by (date, city).
pub trait PanchangStore: Send + Sync {
    /// Insert the record, or replace an existing one for the same key.
    fn upsert(&self, record: DailyPanchang) -> anyhow::Result<()>;

    /// Fetch a stored record, if any.
    fn get(&self, date: NaiveDate, city: &str) -> Option<DailyPanchang>;

    /// Number of stored records.
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// In-memory store backed by a BTreeMap.
#[derive(Debug, Default)]
pub struct MemoryStore {
    records: Mutex<BTreeMap<(NaiveDate, String), DailyPanchang>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl PanchangStore for MemoryStore {
    fn upsert(&self, record: DailyPanchang) -> anyhow::Result<()> {
        let mut records = self
            .records
            .lock()
            .map_err(|_| anyhow::anyhow!("memory store lock poisoned"))?;
        records.insert((record.date, record.city.clone()), record);
        Ok(())
    }

    fn get(&self, date: NaiveDate, city: &str) -> Option<DailyPanchang> {
        self.records
            .lock()
            .ok()?
            .get(&(date, city.to_string()))
            .cloned()
    }

    fn len(&self) -> usize {
        self.records.lock().map(|r| r.len()).unwrap_or(0)
    }
}
