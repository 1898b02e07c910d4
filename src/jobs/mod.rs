pub mod market_price_sync;
