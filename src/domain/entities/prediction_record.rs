use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

/// A saved forecast for an item on a given day.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PredictionRecord {
    pub prediction_id: i64,
    pub item_id: i64,
    pub predicted_price: i64,
    /// r² of the trend fit, when one could be computed.
    pub confidence_score: Option<f64>,
    pub prediction_date: NaiveDate,
    pub created_at: DateTime<Utc>,
}
