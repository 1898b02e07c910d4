use crate::ArkMarket;
use chrono::Utc;
use std::sync::Arc;
use tokio::task::JoinHandle;
use tokio::time::{interval, Duration, MissedTickBehavior};

/// Collect market prices every `every`, starting immediately.
///
/// Each run is awaited before the next tick is taken and missed ticks are
/// skipped, so two runs never overlap.
pub fn start_market_price_sync_job(market: Arc<ArkMarket>, every: Duration) -> JoinHandle<()> {
    tokio::spawn(async move {
        let mut ticker = interval(every.max(Duration::from_secs(1)));
        ticker.set_missed_tick_behavior(MissedTickBehavior::Skip);

        loop {
            ticker.tick().await;
            let run_at = Utc::now();
            tracing::info!(%run_at, "starting market price collection");
            let report = market.collect(run_at).await;
            if report.errors.is_empty() {
                tracing::info!(
                    snapshots = report.snapshots_written,
                    "market price collection finished"
                );
            } else {
                tracing::warn!(
                    snapshots = report.snapshots_written,
                    errors = report.errors.len(),
                    "market price collection finished with errors"
                );
            }
        }
    })
}
