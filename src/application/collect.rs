use crate::application::browse::fetch_plan;
use crate::application::market_fetch::MarketFetcher;
use crate::domain::entities::item_meta::ItemRef;
use crate::domain::entities::market_item::MarketItem;
use crate::domain::ports::price_history_repository::PriceHistoryRepository;
use crate::domain::values::category::MarketCategory;
use crate::domain::values::fetch_plan::FetchPlan;
use chrono::{DateTime, Utc};
use serde::Serialize;
use std::collections::HashMap;
use std::sync::Arc;

/// Outcome of one ingestion run.
#[derive(Debug, Clone, Serialize)]
pub struct CollectReport {
    pub run_at: DateTime<Utc>,
    pub categories: Vec<CategoryReport>,
    pub snapshots_written: usize,
    pub errors: Vec<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct CategoryReport {
    pub category: MarketCategory,
    pub category_code: i64,
    pub records_fetched: usize,
    pub items_recorded: usize,
}

/// Fetches each tracked category and appends one price snapshot per
/// observed item.
pub struct CollectUseCase {
    fetcher: Arc<MarketFetcher>,
    repo: Arc<dyn PriceHistoryRepository>,
    tracked: Vec<MarketCategory>,
}

impl CollectUseCase {
    pub fn new(
        fetcher: Arc<MarketFetcher>,
        repo: Arc<dyn PriceHistoryRepository>,
        tracked: Vec<MarketCategory>,
    ) -> Self {
        Self {
            fetcher,
            repo,
            tracked,
        }
    }

    /// Run one ingestion pass, category by category. Every snapshot of the
    /// run is stamped with `run_at`.
    pub async fn execute(&self, run_at: DateTime<Utc>) -> CollectReport {
        let mut report = CollectReport {
            run_at,
            categories: Vec::new(),
            snapshots_written: 0,
            errors: Vec::new(),
        };

        for &category in &self.tracked {
            let plan = FetchPlan::for_category(category, None, None);
            let raws = fetch_plan(&self.fetcher, &plan).await;
            let items: Vec<MarketItem> = raws
                .iter()
                .enumerate()
                .map(|(i, raw)| MarketItem::normalize(raw, format!("{}-{i}", run_at.timestamp_millis())))
                .collect();
            let observed = cheapest_per_name(items);

            let mut recorded = 0;
            for item in &observed {
                let item_ref = ItemRef::new(&item.name, &item.grade, plan.category_code);
                match self
                    .repo
                    .append(&item_ref, item.min_price, item.trade_count, run_at)
                {
                    Ok(_) => recorded += 1,
                    Err(e) => {
                        tracing::warn!(item = %item.name, "failed to record snapshot: {e}");
                        report.errors.push(format!("{}: {e}", item.name));
                    }
                }
            }

            tracing::info!(
                %category,
                fetched = raws.len(),
                recorded,
                "collected market prices"
            );
            report.snapshots_written += recorded;
            report.categories.push(CategoryReport {
                category,
                category_code: plan.category_code,
                records_fetched: raws.len(),
                items_recorded: recorded,
            });
        }

        report
    }
}

/// Collapse repeated names (auction lots of the same gem, for example) to the
/// lowest-priced entry, keeping first-seen order.
fn cheapest_per_name(items: Vec<MarketItem>) -> Vec<MarketItem> {
    let mut index: HashMap<String, usize> = HashMap::new();
    let mut out: Vec<MarketItem> = Vec::new();
    for item in items {
        match index.get(&item.name) {
            Some(&pos) => {
                if item.min_price < out[pos].min_price {
                    out[pos] = item;
                }
            }
            None => {
                index.insert(item.name.clone(), out.len());
                out.push(item);
            }
        }
    }
    out
}
