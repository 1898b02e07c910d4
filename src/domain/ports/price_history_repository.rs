use crate::domain::entities::item_meta::{ItemMeta, ItemRef};
use crate::domain::entities::price_snapshot::PriceSnapshot;
use crate::domain::error::DomainError;
use chrono::{DateTime, Utc};
use std::collections::BTreeSet;

/// Append-only price time series keyed by item name.
pub trait PriceHistoryRepository: Send + Sync {
    /// Look up or create the item by its unique name, then append one snapshot.
    /// Both steps happen atomically.
    fn append(
        &self,
        item: &ItemRef,
        price: i64,
        trade_count: Option<i64>,
        collected_at: DateTime<Utc>,
    ) -> Result<PriceSnapshot, DomainError>;

    /// Snapshots of an item, oldest first. Empty for unknown items.
    fn list_by_item(&self, item_name: &str) -> Result<Vec<PriceSnapshot>, DomainError>;

    /// Most recent snapshot of an item.
    fn latest_by_item(&self, item_name: &str) -> Result<Option<PriceSnapshot>, DomainError>;

    fn get_item(&self, item_name: &str) -> Result<Option<ItemMeta>, DomainError>;

    fn item_names(&self) -> Result<BTreeSet<String>, DomainError>;
}
