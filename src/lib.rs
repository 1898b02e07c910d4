pub mod application;
pub mod cli;
pub mod config;
pub mod domain;
pub mod infrastructure;
pub mod jobs;

use crate::application::browse::BrowseUseCase;
use crate::application::collect::{CollectReport, CollectUseCase};
use crate::application::history::HistoryUseCase;
use crate::application::market_fetch::MarketFetcher;
use crate::application::predict::PredictUseCase;
use crate::config::Settings;
use crate::domain::entities::item_meta::ItemMeta;
use crate::domain::entities::market_item::MarketItem;
use crate::domain::entities::prediction_record::PredictionRecord;
use crate::domain::entities::price_snapshot::PriceSnapshot;
use crate::domain::error::DomainError;
use crate::domain::ports::market_api::MarketApi;
use crate::domain::ports::prediction_repository::PredictionRepository;
use crate::domain::ports::price_history_repository::PriceHistoryRepository;
use crate::domain::values::forecast::Prediction;
use crate::infrastructure::lostark::LostArkClient;
use crate::infrastructure::sqlite::open_shared;
use crate::infrastructure::sqlite::prediction_repo::SqlitePredictionRepo;
use crate::infrastructure::sqlite::price_history_repo::SqlitePriceHistoryRepo;
use chrono::{DateTime, NaiveDate, Utc};
use std::collections::BTreeSet;
use std::sync::Arc;

pub struct ArkMarket {
    browse_uc: BrowseUseCase,
    collect_uc: CollectUseCase,
    history_uc: HistoryUseCase,
    predict_uc: PredictUseCase,
}

impl ArkMarket {
    pub fn new(settings: &Settings) -> Result<Self, DomainError> {
        if settings.api_key.is_empty() {
            tracing::warn!("ARKMARKET_API_KEY is not set; remote market calls will be rejected");
        }
        let api: Arc<dyn MarketApi> = Arc::new(LostArkClient::new(
            settings.api_url.clone(),
            settings.api_key.clone(),
        ));
        Self::with_providers(&settings.db_path, api, settings)
    }

    pub fn with_providers(
        db_path: &str,
        api: Arc<dyn MarketApi>,
        settings: &Settings,
    ) -> Result<Self, DomainError> {
        let conn = open_shared(db_path)?;
        let history_repo: Arc<dyn PriceHistoryRepository> =
            Arc::new(SqlitePriceHistoryRepo::new(conn.clone()));
        let prediction_repo: Arc<dyn PredictionRepository> =
            Arc::new(SqlitePredictionRepo::new(conn));

        let fetcher = Arc::new(MarketFetcher::with_limits(
            api,
            settings.max_pages,
            settings.default_tier,
        ));

        Ok(Self {
            browse_uc: BrowseUseCase::new(fetcher.clone()),
            collect_uc: CollectUseCase::new(fetcher, history_repo.clone(), settings.tracked()?),
            history_uc: HistoryUseCase::new(history_repo.clone()),
            predict_uc: PredictUseCase::new(history_repo, prediction_repo),
        })
    }

    pub async fn get_items(
        &self,
        category: Option<&str>,
        sub_category: Option<&str>,
        tier: Option<u8>,
    ) -> Vec<MarketItem> {
        self.browse_uc.get_items(category, sub_category, tier).await
    }

    pub async fn collect(&self, run_at: DateTime<Utc>) -> CollectReport {
        self.collect_uc.execute(run_at).await
    }

    pub fn price_history(&self, item_name: &str) -> Result<Vec<PriceSnapshot>, DomainError> {
        self.history_uc.price_history(item_name)
    }

    pub fn latest_price(&self, item_name: &str) -> Result<Option<PriceSnapshot>, DomainError> {
        self.history_uc.latest(item_name)
    }

    pub fn item(&self, item_name: &str) -> Result<Option<ItemMeta>, DomainError> {
        self.history_uc.item(item_name)
    }

    pub fn item_names(&self) -> Result<BTreeSet<String>, DomainError> {
        self.history_uc.item_names()
    }

    pub fn predict(&self, item_name: &str) -> Result<Prediction, DomainError> {
        self.predict_uc.predict(item_name)
    }

    pub fn predict_and_save(
        &self,
        item_name: &str,
        date: NaiveDate,
    ) -> Result<(Prediction, Option<PredictionRecord>), DomainError> {
        self.predict_uc.predict_and_save(item_name, date)
    }

    pub fn saved_predictions(&self, item_name: &str) -> Result<Vec<PredictionRecord>, DomainError> {
        self.predict_uc.saved(item_name)
    }
}
