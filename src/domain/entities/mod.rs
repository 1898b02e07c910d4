pub mod item_meta;
pub mod market_item;
pub mod prediction_record;
pub mod price_snapshot;
pub mod raw_record;
