use arkmarket::cli::commands::{Cli, Commands};
use arkmarket::config::Settings;
use arkmarket::jobs::market_price_sync::start_market_price_sync_job;
use arkmarket::ArkMarket;
use clap::Parser;
use std::sync::Arc;
use std::time::Duration;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let settings = match Settings::from_env() {
        Ok(s) => s,
        Err(e) => {
            tracing::error!("Error loading settings: {e}");
            std::process::exit(1);
        }
    };

    let market = match ArkMarket::new(&settings) {
        Ok(m) => m,
        Err(e) => {
            tracing::error!("Error initializing arkmarket: {e}");
            std::process::exit(1);
        }
    };

    let result = run_command(market, &settings, cli.command).await;
    if let Err(e) = result {
        tracing::error!("Error: {e}");
        std::process::exit(1);
    }
}

async fn run_command(
    market: ArkMarket,
    settings: &Settings,
    cmd: Commands,
) -> Result<(), Box<dyn std::error::Error>> {
    match cmd {
        Commands::Items { category, sub, tier } => {
            let items = market
                .get_items(category.as_deref(), sub.as_deref(), Some(tier))
                .await;
            println!("{}", serde_json::to_string_pretty(&items)?);
        }
        Commands::History { name } => {
            let history = market.price_history(&name)?;
            println!("{}", serde_json::to_string_pretty(&history)?);
        }
        Commands::Predict { name, save } => {
            if save {
                let today = chrono::Utc::now().date_naive();
                let (prediction, record) = market.predict_and_save(&name, today)?;
                if record.is_none() {
                    tracing::warn!("no history for '{name}', forecast not stored");
                }
                println!("{}", serde_json::to_string_pretty(&prediction)?);
            } else {
                let prediction = market.predict(&name)?;
                println!("{}", serde_json::to_string_pretty(&prediction)?);
            }
        }
        Commands::Predictions { name } => {
            let records = market.saved_predictions(&name)?;
            println!("{}", serde_json::to_string_pretty(&records)?);
        }
        Commands::Names => {
            for name in market.item_names()? {
                println!("{name}");
            }
        }
        Commands::Collect => {
            let report = market.collect(chrono::Utc::now()).await;
            println!("{}", serde_json::to_string_pretty(&report)?);
        }
        Commands::Watch { interval_secs } => {
            let every = Duration::from_secs(interval_secs.unwrap_or(settings.collect_interval_secs));
            let job = start_market_price_sync_job(Arc::new(market), every);
            tokio::signal::ctrl_c().await?;
            tracing::info!("shutting down");
            job.abort();
        }
    }
    Ok(())
}
