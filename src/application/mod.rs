pub mod browse;
pub mod collect;
pub mod history;
pub mod market_fetch;
pub mod predict;
