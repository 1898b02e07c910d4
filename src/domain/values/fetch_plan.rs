//! Resolution of a user-facing market tab into remote queries, and the
//! post-fetch filtering and ordering each tab needs.

use crate::domain::entities::market_item::MarketItem;
use crate::domain::entities::raw_record::Endpoint;
use crate::domain::values::category::{codes, MarketCategory};
use crate::domain::values::keyword_rules::{self, KeywordRule, ALL, BATTLE_RULES, LIFE_RULES};

/// Battle items priced at or above this are treated as outliers.
pub const BATTLE_PRICE_CAP: i64 = 1000;

/// Grade filter applied to engraving books.
pub const ENGRAVING_GRADE: &str = "유물";

/// Gem levels queried, in order, when the gem tab shows everything.
pub const GEM_LEVELS: [&str; 4] = ["10레벨", "9레벨", "8레벨", "7레벨"];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PostFilter {
    None,
    /// Keep items whose name matches the rule.
    Keywords(KeywordRule),
    /// Optional bucket rule, then drop items at or above [`BATTLE_PRICE_CAP`].
    Battle(Option<KeywordRule>),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortPolicy {
    /// Keep the order the remote API returned.
    Remote,
    MinPriceAsc,
    RecentPriceDesc,
}

/// Everything needed to answer one market tab query.
#[derive(Debug, Clone, PartialEq)]
pub struct FetchPlan {
    pub endpoint: Endpoint,
    pub category_code: i64,
    pub tier: Option<u8>,
    pub grade: Option<String>,
    /// One remote query per name; an empty list means one unfiltered query.
    pub name_filters: Vec<String>,
    pub post_filter: PostFilter,
    pub sort: SortPolicy,
}

impl FetchPlan {
    fn listing(category_code: i64, tier: Option<u8>) -> Self {
        Self {
            endpoint: Endpoint::Listing,
            category_code,
            tier,
            grade: None,
            name_filters: Vec::new(),
            post_filter: PostFilter::None,
            sort: SortPolicy::Remote,
        }
    }

    /// Resolve a tab selection. Unknown or missing categories fall back to the
    /// reforge material listing.
    pub fn resolve(category: Option<&str>, sub_category: Option<&str>, tier: Option<u8>) -> Self {
        let parsed = category.map(|c| c.parse::<MarketCategory>());
        match parsed {
            Some(Ok(cat)) => Self::for_category(cat, sub_category, tier),
            Some(Err(e)) => {
                tracing::debug!("{e}; using default category code {}", codes::REFORGE);
                Self::listing(codes::REFORGE, tier)
            }
            None => Self::listing(codes::REFORGE, tier),
        }
    }

    pub fn for_category(category: MarketCategory, sub_category: Option<&str>, tier: Option<u8>) -> Self {
        let sub = sub_category.map(str::trim).filter(|s| !s.is_empty());
        match category {
            MarketCategory::Reforge => {
                let code = match sub {
                    Some(s) if s.contains("보조 재료") => codes::REFORGE_ADDITIVE,
                    _ => codes::REFORGE,
                };
                Self::listing(code, tier)
            }
            MarketCategory::Gem => {
                let mut plan = Self::listing(codes::GEM, tier);
                plan.endpoint = Endpoint::Auction;
                match sub {
                    None | Some(ALL) => {
                        plan.name_filters = GEM_LEVELS.iter().map(|l| l.to_string()).collect();
                        plan.sort = SortPolicy::MinPriceAsc;
                    }
                    Some(level) if level.contains("레벨") => {
                        plan.name_filters = vec![level.to_string()];
                    }
                    Some(_) => {}
                }
                plan
            }
            MarketCategory::Engraving => {
                let mut plan = Self::listing(codes::ENGRAVING, None);
                plan.grade = Some(ENGRAVING_GRADE.to_string());
                plan
            }
            MarketCategory::Life => {
                let mut plan = Self::listing(codes::LIFE, None);
                if let Some(rule) = keyword_rules::lookup(LIFE_RULES, sub) {
                    plan.post_filter = PostFilter::Keywords(rule);
                }
                plan
            }
            MarketCategory::Battle => {
                let mut plan = Self::listing(codes::BATTLE, None);
                plan.post_filter = PostFilter::Battle(keyword_rules::lookup(BATTLE_RULES, sub));
                plan.sort = SortPolicy::RecentPriceDesc;
                plan
            }
        }
    }

    /// Apply the plan's post-filter and ordering to normalized items.
    pub fn finish(&self, mut items: Vec<MarketItem>) -> Vec<MarketItem> {
        match self.post_filter {
            PostFilter::None => {}
            PostFilter::Keywords(rule) => items.retain(|i| rule.matches(&i.name)),
            PostFilter::Battle(rule) => {
                if let Some(rule) = rule {
                    items.retain(|i| rule.matches(&i.name));
                }
                items.retain(|i| i.min_price < BATTLE_PRICE_CAP && i.recent_price < BATTLE_PRICE_CAP);
            }
        }
        match self.sort {
            SortPolicy::Remote => {}
            SortPolicy::MinPriceAsc => items.sort_by_key(|i| i.min_price),
            SortPolicy::RecentPriceDesc => items.sort_by(|a, b| b.recent_price.cmp(&a.recent_price)),
        }
        items
    }
}
