use crate::application::market_fetch::MarketFetcher;
use crate::domain::entities::market_item::MarketItem;
use crate::domain::entities::raw_record::{Endpoint, RawRecord};
use crate::domain::values::fetch_plan::FetchPlan;
use std::sync::Arc;

/// Current market listings for a user-facing category tab.
pub struct BrowseUseCase {
    fetcher: Arc<MarketFetcher>,
}

impl BrowseUseCase {
    pub fn new(fetcher: Arc<MarketFetcher>) -> Self {
        Self { fetcher }
    }

    pub async fn get_items(
        &self,
        category: Option<&str>,
        sub_category: Option<&str>,
        tier: Option<u8>,
    ) -> Vec<MarketItem> {
        let plan = FetchPlan::resolve(category, sub_category, tier);
        tracing::info!(
            category = category.unwrap_or("-"),
            sub_category = sub_category.unwrap_or("-"),
            category_code = plan.category_code,
            "fetching market items"
        );

        let raws = fetch_plan(&self.fetcher, &plan).await;
        let items = raws
            .iter()
            .map(|raw| MarketItem::normalize(raw, uuid::Uuid::new_v4().to_string()))
            .collect();
        plan.finish(items)
    }
}

/// Run every remote query a plan calls for and concatenate the results in
/// name-filter order.
pub(crate) async fn fetch_plan(fetcher: &MarketFetcher, plan: &FetchPlan) -> Vec<RawRecord> {
    let names: Vec<Option<&str>> = if plan.name_filters.is_empty() {
        vec![None]
    } else {
        plan.name_filters.iter().map(|n| Some(n.as_str())).collect()
    };

    let mut raws = Vec::new();
    for name in names {
        let batch = match plan.endpoint {
            Endpoint::Listing => {
                fetcher
                    .fetch_listings(plan.category_code, name, plan.tier, plan.grade.as_deref())
                    .await
            }
            Endpoint::Auction => fetcher.fetch_auctions(plan.category_code, name, plan.tier).await,
        };
        raws.extend(batch);
    }
    raws
}
