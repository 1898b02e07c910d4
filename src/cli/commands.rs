use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "arkmarket", about = "Lost Ark market prices, history and forecasts")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// List current market items for a category tab
    Items {
        /// Category (reforge, gem, engraving, life, battle)
        category: Option<String>,
        /// Sub-category tab, e.g. "재련 보조 재료", "7레벨", "채광", "회복형"
        #[arg(long)]
        sub: Option<String>,
        /// Item tier (1-4)
        #[arg(long, default_value = "3")]
        tier: u8,
    },
    /// Show the recorded price history of an item
    History {
        /// Exact item name
        name: String,
    },
    /// Forecast the next price of an item
    Predict {
        /// Exact item name
        name: String,
        /// Store the forecast for today
        #[arg(long)]
        save: bool,
    },
    /// List stored forecasts of an item
    Predictions {
        name: String,
    },
    /// List every item that has price history
    Names,
    /// Run one ingestion pass over the tracked categories
    Collect,
    /// Run ingestion on a fixed interval until interrupted
    Watch {
        /// Seconds between runs (defaults to ARKMARKET_COLLECT_INTERVAL_SECS)
        #[arg(long)]
        interval_secs: Option<u64>,
    },
}
