use super::{decode_ts, encode_ts, SharedConnection};
use crate::domain::entities::prediction_record::PredictionRecord;
use crate::domain::error::DomainError;
use crate::domain::ports::prediction_repository::PredictionRepository;
use chrono::{NaiveDate, Utc};
use rusqlite::{params, OptionalExtension};

pub struct SqlitePredictionRepo {
    conn: SharedConnection,
}

impl SqlitePredictionRepo {
    pub fn new(conn: SharedConnection) -> Self {
        Self { conn }
    }

    fn row_to_record(row: &rusqlite::Row) -> Result<PredictionRecord, rusqlite::Error> {
        let date_str: String = row.get(4)?;
        let created_str: String = row.get(5)?;
        Ok(PredictionRecord {
            prediction_id: row.get(0)?,
            item_id: row.get(1)?,
            predicted_price: row.get(2)?,
            confidence_score: row.get(3)?,
            prediction_date: NaiveDate::parse_from_str(&date_str, "%Y-%m-%d").map_err(|e| {
                rusqlite::Error::FromSqlConversionFailure(4, rusqlite::types::Type::Text, Box::new(e))
            })?,
            created_at: decode_ts(&created_str),
        })
    }
}

impl PredictionRepository for SqlitePredictionRepo {
    fn save(
        &self,
        item_name: &str,
        predicted_price: i64,
        confidence_score: Option<f64>,
        prediction_date: NaiveDate,
    ) -> Result<Option<PredictionRecord>, DomainError> {
        let conn = self
            .conn
            .lock()
            .map_err(|e| DomainError::Database(e.to_string()))?;
        let item_id: Option<i64> = conn
            .query_row(
                "SELECT item_id FROM item_meta WHERE item_name = ?1",
                params![item_name],
                |row| row.get(0),
            )
            .optional()
            .map_err(|e| DomainError::Database(e.to_string()))?;
        let Some(item_id) = item_id else {
            return Ok(None);
        };

        let created_at = Utc::now();
        conn.execute(
            "INSERT INTO market_prediction (item_id, predicted_price, confidence_score, prediction_date, created_at)
             VALUES (?1, ?2, ?3, ?4, ?5)",
            params![
                item_id,
                predicted_price,
                confidence_score,
                prediction_date.format("%Y-%m-%d").to_string(),
                encode_ts(&created_at),
            ],
        )
        .map_err(|e| DomainError::Database(format!("Failed to save prediction: {e}")))?;

        Ok(Some(PredictionRecord {
            prediction_id: conn.last_insert_rowid(),
            item_id,
            predicted_price,
            confidence_score,
            prediction_date,
            created_at,
        }))
    }

    fn list(&self, item_name: &str) -> Result<Vec<PredictionRecord>, DomainError> {
        let conn = self
            .conn
            .lock()
            .map_err(|e| DomainError::Database(e.to_string()))?;
        let mut stmt = conn
            .prepare(
                "SELECT p.prediction_id, p.item_id, p.predicted_price, p.confidence_score, p.prediction_date, p.created_at
                 FROM market_prediction p
                 JOIN item_meta m ON m.item_id = p.item_id
                 WHERE m.item_name = ?1
                 ORDER BY p.prediction_date DESC, p.prediction_id DESC",
            )
            .map_err(|e| DomainError::Database(e.to_string()))?;
        let records = stmt
            .query_map(params![item_name], Self::row_to_record)
            .map_err(|e| DomainError::Database(e.to_string()))?
            .filter_map(|r| r.ok())
            .collect();
        Ok(records)
    }
}
