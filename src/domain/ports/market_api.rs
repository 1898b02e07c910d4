use crate::domain::entities::raw_record::{Endpoint, RawRecord};
use async_trait::async_trait;
use serde::Serialize;
use thiserror::Error;

/// Filter document sent to either market endpoint for one page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct SearchRequest {
    pub sort: &'static str,
    pub sort_condition: &'static str,
    pub category_code: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub item_tier: Option<u8>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub item_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub item_grade: Option<String>,
    pub page_no: u32,
}

#[derive(Debug, Error)]
pub enum MarketApiError {
    /// HTTP or network error
    #[error("Network error: {0}")]
    Network(String),
    /// Non-success status code
    #[error("Remote API returned {0}")]
    Status(u16),
    /// Response body could not be decoded
    #[error("Parse error: {0}")]
    Parse(String),
}

/// One page of a remote market search.
///
/// Implementations return the records of the requested page, tagged with the
/// endpoint they came from. A page with no items is `Ok(vec![])`.
#[async_trait]
pub trait MarketApi: Send + Sync {
    async fn search(
        &self,
        endpoint: Endpoint,
        request: &SearchRequest,
    ) -> Result<Vec<RawRecord>, MarketApiError>;
}
