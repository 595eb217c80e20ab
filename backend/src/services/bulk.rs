//! Bulk range generation.
//!
//! Sweeps an inclusive date range for one city, fanning calculations out
//! across a bounded number of concurrent workers and delivering each
//! record to the store collaborator. A failed date is logged and counted,
//! never fatal to the sweep; the engine itself has no transient failure
//! mode, so there is no retry logic here.

use std::sync::Arc;

use chrono::{Duration, NaiveDate};
use futures::stream::{self, StreamExt};
use tracing::{error, info};

use crate::services::engine::PanchangEngine;
use crate::store::PanchangStore;

/// Outcome counters for a bulk sweep.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BulkOutcome {
    pub generated: usize,
    pub failed: usize,
}

/// Inclusive date range, oldest first. Empty when `end < start`.
fn date_range(start: NaiveDate, end: NaiveDate) -> Vec<NaiveDate> {
    let mut dates = Vec::new();
    let mut current = start;
    while current <= end {
        dates.push(current);
        current += Duration::days(1);
    }
    dates
}

/// Generate and store records for every date in `[start, end]`.
pub async fn generate_range(
    engine: Arc<PanchangEngine>,
    store: Arc<dyn PanchangStore>,
    start: NaiveDate,
    end: NaiveDate,
    city: &str,
    concurrency: usize,
) -> BulkOutcome {
    let dates = date_range(start, end);
    info!(%start, %end, city, days = dates.len(), "starting bulk generation");

    let results: Vec<bool> = stream::iter(dates)
        .map(|date| {
            let engine = Arc::clone(&engine);
            let store = Arc::clone(&store);
            let city = city.to_string();
            async move {
                match engine.calculate(date, &city) {
                    Ok(record) => match store.upsert(record) {
                        Ok(()) => {
                            info!(%date, %city, "generated");
                            true
                        }
                        Err(e) => {
                            error!(%date, %city, error = %e, "store rejected record");
                            false
                        }
                    },
                    Err(e) => {
                        error!(%date, %city, error = %e, "calculation failed");
                        false
                    }
                }
            }
        })
        .buffer_unordered(concurrency.max(1))
        .collect()
        .await;

    let generated = results.iter().filter(|ok| **ok).count();
    let outcome = BulkOutcome {
        generated,
        failed: results.len() - generated,
    };
    info!(
        generated = outcome.generated,
        failed = outcome.failed,
        "bulk generation complete"
    );
    outcome
}
