use crate::application::market_fetch::{DEFAULT_TIER, MAX_PAGES};
use crate::domain::error::DomainError;
use crate::domain::values::category::MarketCategory;
use crate::infrastructure::lostark::client::DEFAULT_BASE_URL;
use serde::{Deserialize, Deserializer};

/// Runtime settings, read from `ARKMARKET_*` environment variables (a `.env`
/// file is honoured).
#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    pub api_url: String,
    pub api_key: String,
    pub db_path: String,
    pub max_pages: u32,
    pub default_tier: u8,
    pub collect_interval_secs: u64,
    /// Category names collected by each ingestion run. The environment
    /// gives them as one comma-separated value.
    #[serde(deserialize_with = "comma_list")]
    pub tracked_categories: Vec<String>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            api_url: DEFAULT_BASE_URL.into(),
            api_key: String::new(),
            db_path: "./arkmarket.db".into(),
            max_pages: MAX_PAGES,
            default_tier: DEFAULT_TIER,
            collect_interval_secs: 3600,
            tracked_categories: vec!["engraving".into()],
        }
    }
}

impl Settings {
    pub fn from_env() -> Result<Self, DomainError> {
        dotenvy::dotenv().ok();
        let d = Settings::default();
        let c = config::Config::builder()
            .set_default("api_url", d.api_url)
            .and_then(|b| b.set_default("api_key", d.api_key))
            .and_then(|b| b.set_default("db_path", d.db_path))
            .and_then(|b| b.set_default("max_pages", i64::from(d.max_pages)))
            .and_then(|b| b.set_default("default_tier", i64::from(d.default_tier)))
            .and_then(|b| b.set_default("collect_interval_secs", d.collect_interval_secs as i64))
            .and_then(|b| b.set_default("tracked_categories", d.tracked_categories))
            .map_err(|e| DomainError::Config(e.to_string()))?
            .add_source(
                // Values stay strings; numeric fields are converted on deserialize.
                config::Environment::with_prefix("ARKMARKET"),
            )
            .build()
            .map_err(|e| DomainError::Config(e.to_string()))?;
        c.try_deserialize()
            .map_err(|e| DomainError::Config(e.to_string()))
    }

    pub fn tracked(&self) -> Result<Vec<MarketCategory>, DomainError> {
        self.tracked_categories
            .iter()
            .filter(|c| !c.trim().is_empty())
            .map(|c| c.parse().map_err(DomainError::Config))
            .collect()
    }
}

fn comma_list<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Vec<String>, D::Error> {
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw {
        List(Vec<String>),
        Csv(String),
    }

    Ok(match Raw::deserialize(deserializer)? {
        Raw::List(items) => items,
        Raw::Csv(csv) => csv
            .split(',')
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(String::from)
            .collect(),
    })
}
