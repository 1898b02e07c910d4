use crate::domain::entities::prediction_record::PredictionRecord;
use crate::domain::error::DomainError;
use crate::domain::ports::prediction_repository::PredictionRepository;
use crate::domain::ports::price_history_repository::PriceHistoryRepository;
use crate::domain::values::forecast::{fit_trend, predict_next, Prediction};
use chrono::NaiveDate;
use std::sync::Arc;

pub struct PredictUseCase {
    history: Arc<dyn PriceHistoryRepository>,
    predictions: Arc<dyn PredictionRepository>,
}

impl PredictUseCase {
    pub fn new(
        history: Arc<dyn PriceHistoryRepository>,
        predictions: Arc<dyn PredictionRepository>,
    ) -> Self {
        Self {
            history,
            predictions,
        }
    }

    fn series(&self, item_name: &str) -> Result<Vec<i64>, DomainError> {
        Ok(self
            .history
            .list_by_item(item_name)?
            .into_iter()
            .map(|s| s.price)
            .collect())
    }

    /// Forecast the next price of an item. Unknown items hold at 0.
    pub fn predict(&self, item_name: &str) -> Result<Prediction, DomainError> {
        Ok(predict_next(&self.series(item_name)?))
    }

    /// Forecast and store the result for `date`. Nothing is stored for items
    /// without history.
    pub fn predict_and_save(
        &self,
        item_name: &str,
        date: NaiveDate,
    ) -> Result<(Prediction, Option<PredictionRecord>), DomainError> {
        let series = self.series(item_name)?;
        let prediction = predict_next(&series);
        if series.is_empty() {
            return Ok((prediction, None));
        }
        let confidence = fit_trend(&series).map(|fit| fit.r_squared);
        let record = self
            .predictions
            .save(item_name, prediction.predicted_price, confidence, date)?;
        Ok((prediction, record))
    }

    pub fn saved(&self, item_name: &str) -> Result<Vec<PredictionRecord>, DomainError> {
        self.predictions.list(item_name)
    }
}
