use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One observed price of an item. Append-only.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PriceSnapshot {
    pub history_id: i64,
    pub item_id: i64,
    pub price: i64,
    pub trade_count: Option<i64>,
    pub collected_at: DateTime<Utc>,
}
