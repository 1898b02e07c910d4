pub mod market_api;
pub mod prediction_repository;
pub mod price_history_repository;
