use crate::domain::error::DomainError;
use rusqlite::Connection;

pub fn run_migrations(conn: &Connection) -> Result<(), DomainError> {
    conn.execute_batch(
        "
        CREATE TABLE IF NOT EXISTS item_meta (
            item_id INTEGER PRIMARY KEY AUTOINCREMENT,
            item_name TEXT NOT NULL UNIQUE,
            grade TEXT NOT NULL,
            category_code INTEGER NOT NULL,
            created_at TEXT NOT NULL
        );

        CREATE TABLE IF NOT EXISTS price_history (
            history_id INTEGER PRIMARY KEY AUTOINCREMENT,
            item_id INTEGER NOT NULL REFERENCES item_meta(item_id),
            price INTEGER NOT NULL,
            trade_count INTEGER,
            collected_at TEXT NOT NULL
        );

        CREATE TABLE IF NOT EXISTS market_prediction (
            prediction_id INTEGER PRIMARY KEY AUTOINCREMENT,
            item_id INTEGER NOT NULL REFERENCES item_meta(item_id),
            predicted_price INTEGER NOT NULL,
            confidence_score REAL,
            prediction_date TEXT NOT NULL,
            created_at TEXT NOT NULL
        );

        CREATE INDEX IF NOT EXISTS idx_item_date ON price_history(item_id, collected_at);
        CREATE INDEX IF NOT EXISTS idx_prediction_item ON market_prediction(item_id, prediction_date);
        ",
    )
    .map_err(|e| DomainError::Database(format!("Migration failed: {e}")))
}
