use crate::domain::entities::prediction_record::PredictionRecord;
use crate::domain::error::DomainError;
use chrono::NaiveDate;

pub trait PredictionRepository: Send + Sync {
    /// Store a forecast for a known item. `Ok(None)` when the item has never
    /// been collected.
    fn save(
        &self,
        item_name: &str,
        predicted_price: i64,
        confidence_score: Option<f64>,
        prediction_date: NaiveDate,
    ) -> Result<Option<PredictionRecord>, DomainError>;

    /// Saved forecasts of an item, newest first.
    fn list(&self, item_name: &str) -> Result<Vec<PredictionRecord>, DomainError>;
}
