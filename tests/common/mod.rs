//! Shared test helpers.
#![allow(dead_code)]

use arkmarket::config::Settings;
use arkmarket::domain::entities::raw_record::{AuctionInfo, Endpoint, RawAuction, RawListing, RawRecord};
use arkmarket::domain::ports::market_api::{MarketApi, MarketApiError, SearchRequest};
use arkmarket::ArkMarket;
use async_trait::async_trait;
use std::sync::{Arc, Mutex};

type Responder =
    Box<dyn Fn(Endpoint, &SearchRequest) -> Result<Vec<RawRecord>, MarketApiError> + Send + Sync>;

/// Scripted stand-in for the remote market API that records every request.
pub struct FakeMarketApi {
    responder: Responder,
    calls: Mutex<Vec<(Endpoint, SearchRequest)>>,
}

impl FakeMarketApi {
    pub fn new(
        responder: impl Fn(Endpoint, &SearchRequest) -> Result<Vec<RawRecord>, MarketApiError>
            + Send
            + Sync
            + 'static,
    ) -> Arc<Self> {
        Arc::new(Self {
            responder: Box::new(responder),
            calls: Mutex::new(Vec::new()),
        })
    }

    /// Serves `records` on page 1 and nothing afterwards.
    pub fn single_page(records: Vec<RawRecord>) -> Arc<Self> {
        Self::new(move |_, req| {
            if req.page_no == 1 {
                Ok(records.clone())
            } else {
                Ok(vec![])
            }
        })
    }

    pub fn calls(&self) -> Vec<(Endpoint, SearchRequest)> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl MarketApi for FakeMarketApi {
    async fn search(
        &self,
        endpoint: Endpoint,
        request: &SearchRequest,
    ) -> Result<Vec<RawRecord>, MarketApiError> {
        self.calls.lock().unwrap().push((endpoint, request.clone()));
        (self.responder)(endpoint, request)
    }
}

pub fn setup(api: Arc<FakeMarketApi>) -> ArkMarket {
    setup_with(api, Settings::default())
}

pub fn setup_with(api: Arc<FakeMarketApi>, settings: Settings) -> ArkMarket {
    ArkMarket::with_providers(":memory:", api, &settings).unwrap()
}

pub fn listing(name: &str, min_price: i64, recent_price: i64, avg: f64) -> RawRecord {
    RawRecord::Listing(RawListing {
        name: name.to_string(),
        grade: "유물".to_string(),
        icon: format!("{name}.png"),
        bundle_count: Some(1),
        current_min_price: Some(min_price),
        recent_price: Some(recent_price),
        y_day_avg_price: Some(avg),
        trade_count: Some(7),
    })
}

pub fn auction(name: &str, buy_price: Option<i64>, start_price: Option<i64>) -> RawRecord {
    RawRecord::Auction(RawAuction {
        name: name.to_string(),
        grade: "고대".to_string(),
        icon: format!("{name}.png"),
        auction_info: Some(AuctionInfo {
            buy_price,
            start_price,
        }),
    })
}
