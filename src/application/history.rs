use crate::domain::entities::item_meta::ItemMeta;
use crate::domain::entities::price_snapshot::PriceSnapshot;
use crate::domain::error::DomainError;
use crate::domain::ports::price_history_repository::PriceHistoryRepository;
use std::collections::BTreeSet;
use std::sync::Arc;

pub struct HistoryUseCase {
    repo: Arc<dyn PriceHistoryRepository>,
}

impl HistoryUseCase {
    pub fn new(repo: Arc<dyn PriceHistoryRepository>) -> Self {
        Self { repo }
    }

    pub fn price_history(&self, item_name: &str) -> Result<Vec<PriceSnapshot>, DomainError> {
        self.repo.list_by_item(item_name)
    }

    pub fn latest(&self, item_name: &str) -> Result<Option<PriceSnapshot>, DomainError> {
        self.repo.latest_by_item(item_name)
    }

    pub fn item(&self, item_name: &str) -> Result<Option<ItemMeta>, DomainError> {
        self.repo.get_item(item_name)
    }

    pub fn item_names(&self) -> Result<BTreeSet<String>, DomainError> {
        self.repo.item_names()
    }
}
