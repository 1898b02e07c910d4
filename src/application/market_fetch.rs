//! Paged, fail-soft queries against the remote market endpoints.

use crate::domain::entities::raw_record::{Endpoint, RawRecord};
use crate::domain::ports::market_api::{MarketApi, SearchRequest};
use crate::domain::values::category::is_tier_agnostic;
use std::sync::Arc;

pub const MAX_PAGES: u32 = 5;
pub const DEFAULT_TIER: u8 = 3;

const LISTING_SORT: (&str, &str) = ("GRADE", "DESC");
const AUCTION_SORT: (&str, &str) = ("BUY_PRICE", "ASC");

pub struct MarketFetcher {
    api: Arc<dyn MarketApi>,
    max_pages: u32,
    default_tier: u8,
}

impl MarketFetcher {
    pub fn new(api: Arc<dyn MarketApi>) -> Self {
        Self::with_limits(api, MAX_PAGES, DEFAULT_TIER)
    }

    pub fn with_limits(api: Arc<dyn MarketApi>, max_pages: u32, default_tier: u8) -> Self {
        Self {
            api,
            max_pages: max_pages.max(1),
            default_tier,
        }
    }

    /// Query the listing market. The tier filter is dropped for tier-agnostic
    /// categories and defaults to the configured tier otherwise.
    pub async fn fetch_listings(
        &self,
        category_code: i64,
        item_name: Option<&str>,
        tier: Option<u8>,
        grade: Option<&str>,
    ) -> Vec<RawRecord> {
        let item_tier = if is_tier_agnostic(category_code) {
            None
        } else {
            Some(tier.unwrap_or(self.default_tier))
        };
        let template = SearchRequest {
            sort: LISTING_SORT.0,
            sort_condition: LISTING_SORT.1,
            category_code,
            item_tier,
            item_name: item_name.map(String::from),
            item_grade: grade.map(String::from),
            page_no: 1,
        };
        self.fetch_pages(Endpoint::Listing, template).await
    }

    /// Query the auction house. The tier is passed through as given.
    pub async fn fetch_auctions(
        &self,
        category_code: i64,
        item_name: Option<&str>,
        tier: Option<u8>,
    ) -> Vec<RawRecord> {
        let template = SearchRequest {
            sort: AUCTION_SORT.0,
            sort_condition: AUCTION_SORT.1,
            category_code,
            item_tier: tier,
            item_name: item_name.map(String::from),
            item_grade: None,
            page_no: 1,
        };
        self.fetch_pages(Endpoint::Auction, template).await
    }

    /// Walk pages 1..=max_pages, stopping at the first empty page. A failed
    /// page ends the walk and whatever was collected so far is returned.
    async fn fetch_pages(&self, endpoint: Endpoint, template: SearchRequest) -> Vec<RawRecord> {
        let mut records = Vec::new();
        for page_no in 1..=self.max_pages {
            let request = SearchRequest {
                page_no,
                ..template.clone()
            };
            match self.api.search(endpoint, &request).await {
                Ok(page) if page.is_empty() => break,
                Ok(page) => records.extend(page),
                Err(e) => {
                    tracing::warn!(
                        %endpoint,
                        category_code = request.category_code,
                        page_no,
                        "market page fetch failed, keeping {} records: {e}",
                        records.len()
                    );
                    break;
                }
            }
        }
        records
    }
}
