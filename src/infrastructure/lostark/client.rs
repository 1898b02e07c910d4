use crate::domain::entities::raw_record::{Endpoint, RawAuction, RawListing, RawRecord};
use crate::domain::ports::market_api::{MarketApi, MarketApiError, SearchRequest};
use async_trait::async_trait;
use serde::de::DeserializeOwned;

pub const DEFAULT_BASE_URL: &str = "https://developer-lostark.game.onstove.com";

/// Lost Ark open API client for the listing and auction search endpoints.
/// Issues exactly one POST per call; paging is the caller's job.
pub struct LostArkClient {
    base_url: String,
    api_key: String,
    client: reqwest::Client,
}

impl LostArkClient {
    pub fn new(base_url: impl Into<String>, api_key: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            api_key: api_key.into(),
            client: reqwest::Client::builder()
                .user_agent("arkmarket/0.1")
                .build()
                .unwrap_or_default(),
        }
    }

    fn url(&self, endpoint: Endpoint) -> String {
        let path = match endpoint {
            Endpoint::Listing => "markets/items",
            Endpoint::Auction => "auctions/items",
        };
        format!("{}/{path}", self.base_url)
    }

    async fn post_page<T: DeserializeOwned>(
        &self,
        endpoint: Endpoint,
        request: &SearchRequest,
    ) -> Result<Vec<T>, MarketApiError> {
        let mut builder = self
            .client
            .post(self.url(endpoint))
            .header("accept", "application/json")
            .json(request);
        if !self.api_key.is_empty() {
            builder = builder.bearer_auth(&self.api_key);
        }

        let resp = builder
            .send()
            .await
            .map_err(|e| MarketApiError::Network(e.to_string()))?;
        if !resp.status().is_success() {
            return Err(MarketApiError::Status(resp.status().as_u16()));
        }

        let body = resp
            .text()
            .await
            .map_err(|e| MarketApiError::Network(e.to_string()))?;
        parse_page(&body)
    }
}

#[derive(Debug, serde::Deserialize)]
#[serde(rename_all = "PascalCase")]
struct SearchResponse<T> {
    page_no: Option<u32>,
    total_count: Option<u64>,
    items: Option<Vec<T>>,
}

/// Decode a search response body. A blank or `null` body, or `"Items": null`,
/// is an empty page.
fn parse_page<T: DeserializeOwned>(body: &str) -> Result<Vec<T>, MarketApiError> {
    if body.trim().is_empty() {
        return Ok(Vec::new());
    }
    let parsed: Option<SearchResponse<T>> =
        serde_json::from_str(body).map_err(|e| MarketApiError::Parse(e.to_string()))?;
    let Some(page) = parsed else {
        return Ok(Vec::new());
    };
    tracing::trace!(page_no = ?page.page_no, total = ?page.total_count, "decoded search page");
    Ok(page.items.unwrap_or_default())
}

#[async_trait]
impl MarketApi for LostArkClient {
    async fn search(
        &self,
        endpoint: Endpoint,
        request: &SearchRequest,
    ) -> Result<Vec<RawRecord>, MarketApiError> {
        match endpoint {
            Endpoint::Listing => Ok(self
                .post_page::<RawListing>(endpoint, request)
                .await?
                .into_iter()
                .map(RawRecord::Listing)
                .collect()),
            Endpoint::Auction => Ok(self
                .post_page::<RawAuction>(endpoint, request)
                .await?
                .into_iter()
                .map(RawRecord::Auction)
                .collect()),
        }
    }
}
