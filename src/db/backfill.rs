//! Background worker that re-derives stored ASP slugs in SQL.
//!
//! Rows written before a normalization table change (or by a crawler that
//! bypassed [`crate::db::upsert_product`]) carry a missing or stale
//! `asp_slug`. The worker updates them in batches until none remain.

use std::time::Duration;

use tracing::{debug, info, warn};

use crate::db::{backfill_asp_slugs, count_products_needing_asp_backfill, Database};

/// Configuration for the backfill worker.
#[derive(Debug, Clone)]
pub struct BackfillConfig {
    /// Number of rows updated per batch.
    pub batch_size: i64,
    /// Delay between batches.
    pub batch_delay: Duration,
    /// Delay before retrying a failed batch.
    pub error_delay: Duration,
    /// Consecutive failed batches before giving up.
    pub max_errors: u32,
}

impl Default for BackfillConfig {
    fn default() -> Self {
        Self {
            batch_size: 500,
            batch_delay: Duration::from_millis(200),
            error_delay: Duration::from_secs(30),
            max_errors: 5,
        }
    }
}

/// Run the ASP slug backfill worker.
///
/// Exits when a batch updates no rows, or after `max_errors` consecutive
/// failures. Returns the number of rows updated.
pub async fn run_asp_backfill(db: Database, config: BackfillConfig) -> u64 {
    match count_products_needing_asp_backfill(db.pool()).await {
        Ok(pending) => info!(pending, "Starting ASP slug backfill worker"),
        Err(e) => warn!(error = %e, "Starting ASP slug backfill worker, pending count unavailable"),
    }

    let mut total_updated: u64 = 0;
    let mut consecutive_errors: u32 = 0;

    loop {
        let updated = match backfill_asp_slugs(db.pool(), config.batch_size).await {
            Ok(updated) => {
                consecutive_errors = 0;
                updated
            }
            Err(e) => {
                consecutive_errors += 1;
                if consecutive_errors >= config.max_errors {
                    warn!(
                        error = %e,
                        consecutive_errors,
                        total = total_updated,
                        "ASP slug backfill giving up"
                    );
                    break;
                }
                warn!(
                    error = %e,
                    consecutive_errors,
                    retry_in_secs = config.error_delay.as_secs(),
                    "Failed to backfill ASP slug batch"
                );
                tokio::time::sleep(config.error_delay).await;
                continue;
            }
        };

        if updated == 0 {
            info!(
                total = total_updated,
                "ASP slug backfill complete - no more products to process"
            );
            break;
        }

        total_updated += updated;
        debug!(updated, total = total_updated, "Processed ASP slug backfill batch");

        tokio::time::sleep(config.batch_delay).await;
    }

    total_updated
}
