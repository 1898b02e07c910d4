use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Remote category codes used by the market endpoints.
pub mod codes {
    pub const REFORGE: i64 = 50010;
    pub const REFORGE_ADDITIVE: i64 = 50020;
    pub const ENGRAVING: i64 = 40000;
    pub const BATTLE: i64 = 60000;
    pub const LIFE: i64 = 90000;
    pub const GEM: i64 = 210000;
}

/// User-facing market tabs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MarketCategory {
    Reforge,
    Gem,
    Engraving,
    Life,
    Battle,
}

impl MarketCategory {
    pub const ALL: [MarketCategory; 5] = [
        MarketCategory::Reforge,
        MarketCategory::Gem,
        MarketCategory::Engraving,
        MarketCategory::Life,
        MarketCategory::Battle,
    ];
}

impl fmt::Display for MarketCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MarketCategory::Reforge => write!(f, "reforge"),
            MarketCategory::Gem => write!(f, "gem"),
            MarketCategory::Engraving => write!(f, "engraving"),
            MarketCategory::Life => write!(f, "life"),
            MarketCategory::Battle => write!(f, "battle"),
        }
    }
}

impl FromStr for MarketCategory {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "reforge" => Ok(MarketCategory::Reforge),
            "gem" => Ok(MarketCategory::Gem),
            "engraving" => Ok(MarketCategory::Engraving),
            "life" => Ok(MarketCategory::Life),
            "battle" => Ok(MarketCategory::Battle),
            _ => Err(format!("Unknown market category: {s}")),
        }
    }
}

/// Categories whose listings are not split by tier; the tier filter is omitted
/// for them.
pub fn is_tier_agnostic(category_code: i64) -> bool {
    matches!(
        category_code,
        codes::ENGRAVING | codes::LIFE | codes::BATTLE
    )
}
