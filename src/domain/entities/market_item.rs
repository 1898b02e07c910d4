use crate::domain::entities::raw_record::{RawAuction, RawListing, RawRecord};
use serde::{Deserialize, Serialize};

/// Canonical view of one market entry, whichever endpoint it came from.
///
/// Not persisted. `id` is assigned per fetch and carries no meaning across
/// calls.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MarketItem {
    pub id: String,
    pub name: String,
    pub grade: String,
    pub bundle_size: i64,
    pub min_price: i64,
    pub recent_price: i64,
    pub avg_price_yesterday: f64,
    pub change_rate_percent: f64,
    pub icon: String,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub trade_count: Option<i64>,
}

impl MarketItem {
    /// Map a raw record into the canonical shape.
    ///
    /// Pure: the same record and id always produce the same item.
    pub fn normalize(raw: &RawRecord, id: impl Into<String>) -> Self {
        match raw {
            RawRecord::Listing(listing) => Self::from_listing(listing, id.into()),
            RawRecord::Auction(auction) => Self::from_auction(auction, id.into()),
        }
    }

    fn from_listing(l: &RawListing, id: String) -> Self {
        let min_price = l.current_min_price.unwrap_or(0).max(0);
        let avg = l.y_day_avg_price.unwrap_or(0.0).max(0.0);
        Self {
            id,
            name: l.name.clone(),
            grade: l.grade.clone(),
            bundle_size: l.bundle_count.unwrap_or(1).max(1),
            min_price,
            recent_price: l.recent_price.unwrap_or(0).max(0),
            avg_price_yesterday: avg,
            change_rate_percent: change_rate_percent(min_price, avg),
            icon: l.icon.clone(),
            trade_count: l.trade_count,
        }
    }

    fn from_auction(a: &RawAuction, id: String) -> Self {
        let info = a.auction_info.clone().unwrap_or_default();
        // Buy-now price when offered, otherwise the opening bid.
        let price = match info.buy_price {
            Some(p) if p > 0 => p,
            _ => info.start_price.unwrap_or(0),
        };
        Self {
            id,
            name: a.name.clone(),
            grade: a.grade.clone(),
            bundle_size: 1,
            min_price: price.max(0),
            recent_price: 0,
            avg_price_yesterday: 0.0,
            change_rate_percent: 0.0,
            icon: a.icon.clone(),
            trade_count: None,
        }
    }
}

/// Day-over-day change of `min_price` against yesterday's average, in percent
/// rounded to one decimal. Zero when there is no positive average to compare to.
pub fn change_rate_percent(min_price: i64, avg_price_yesterday: f64) -> f64 {
    if avg_price_yesterday <= 0.0 {
        return 0.0;
    }
    let rate = (min_price as f64 - avg_price_yesterday) / avg_price_yesterday * 100.0;
    (rate * 10.0).round() / 10.0
}
