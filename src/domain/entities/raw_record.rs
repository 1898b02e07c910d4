//! Item records exactly as the Lost Ark open API returns them.
//!
//! The listing market (`/markets/items`) and the auction house
//! (`/auctions/items`) describe items with different field sets, so each
//! shape gets its own struct and [`RawRecord`] tags which one a record is.

use serde::Deserialize;

/// Which remote market a record (or a fetch plan) targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Endpoint {
    /// Fixed-price marketplace.
    Listing,
    /// Bid / buy-now auction house.
    Auction,
}

impl std::fmt::Display for Endpoint {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Endpoint::Listing => write!(f, "listing"),
            Endpoint::Auction => write!(f, "auction"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct RawListing {
    pub name: String,
    #[serde(default)]
    pub grade: String,
    #[serde(default)]
    pub icon: String,
    #[serde(default)]
    pub bundle_count: Option<i64>,
    #[serde(default)]
    pub current_min_price: Option<i64>,
    #[serde(default)]
    pub recent_price: Option<i64>,
    #[serde(default, rename = "YDayAvgPrice")]
    pub y_day_avg_price: Option<f64>,
    #[serde(default)]
    pub trade_count: Option<i64>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct AuctionInfo {
    #[serde(default)]
    pub buy_price: Option<i64>,
    #[serde(default)]
    pub start_price: Option<i64>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct RawAuction {
    pub name: String,
    #[serde(default)]
    pub grade: String,
    #[serde(default)]
    pub icon: String,
    #[serde(default)]
    pub auction_info: Option<AuctionInfo>,
}

/// A raw record tagged with the endpoint it came from.
#[derive(Debug, Clone, PartialEq)]
pub enum RawRecord {
    Listing(RawListing),
    Auction(RawAuction),
}

impl RawRecord {
    pub fn endpoint(&self) -> Endpoint {
        match self {
            RawRecord::Listing(_) => Endpoint::Listing,
            RawRecord::Auction(_) => Endpoint::Auction,
        }
    }
}
