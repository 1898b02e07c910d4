use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Persisted identity of an item, created the first time ingestion sees its name.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ItemMeta {
    pub item_id: i64,
    pub item_name: String,
    pub grade: String,
    pub category_code: i64,
    pub created_at: DateTime<Utc>,
}

/// What the store needs to know to look up or create an [`ItemMeta`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ItemRef {
    pub name: String,
    pub grade: String,
    pub category_code: i64,
}

impl ItemRef {
    pub fn new(name: impl Into<String>, grade: impl Into<String>, category_code: i64) -> Self {
        Self {
            name: name.into(),
            grade: grade.into(),
            category_code,
        }
    }
}
