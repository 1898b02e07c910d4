use super::{decode_ts, encode_ts, SharedConnection};
use crate::domain::entities::item_meta::{ItemMeta, ItemRef};
use crate::domain::entities::price_snapshot::PriceSnapshot;
use crate::domain::error::DomainError;
use crate::domain::ports::price_history_repository::PriceHistoryRepository;
use chrono::{DateTime, Utc};
use rusqlite::{params, OptionalExtension};
use std::collections::BTreeSet;

const SNAPSHOT_COLS: &str =
    "h.history_id, h.item_id, h.price, h.trade_count, h.collected_at";

pub struct SqlitePriceHistoryRepo {
    conn: SharedConnection,
}

impl SqlitePriceHistoryRepo {
    pub fn new(conn: SharedConnection) -> Self {
        Self { conn }
    }

    fn row_to_snapshot(row: &rusqlite::Row) -> Result<PriceSnapshot, rusqlite::Error> {
        let collected_str: String = row.get(4)?;
        Ok(PriceSnapshot {
            history_id: row.get(0)?,
            item_id: row.get(1)?,
            price: row.get(2)?,
            trade_count: row.get(3)?,
            collected_at: decode_ts(&collected_str),
        })
    }

    fn row_to_meta(row: &rusqlite::Row) -> Result<ItemMeta, rusqlite::Error> {
        let created_str: String = row.get(4)?;
        Ok(ItemMeta {
            item_id: row.get(0)?,
            item_name: row.get(1)?,
            grade: row.get(2)?,
            category_code: row.get(3)?,
            created_at: decode_ts(&created_str),
        })
    }
}

impl PriceHistoryRepository for SqlitePriceHistoryRepo {
    fn append(
        &self,
        item: &ItemRef,
        price: i64,
        trade_count: Option<i64>,
        collected_at: DateTime<Utc>,
    ) -> Result<PriceSnapshot, DomainError> {
        let mut conn = self
            .conn
            .lock()
            .map_err(|e| DomainError::Database(e.to_string()))?;
        let tx = conn
            .transaction()
            .map_err(|e| DomainError::Database(e.to_string()))?;

        // Upsert by unique name; an existing row is left untouched. A new item
        // is dated by the snapshot that first saw it.
        tx.execute(
            "INSERT INTO item_meta (item_name, grade, category_code, created_at)
             VALUES (?1, ?2, ?3, ?4)
             ON CONFLICT(item_name) DO NOTHING",
            params![item.name, item.grade, item.category_code, encode_ts(&collected_at)],
        )
        .map_err(|e| DomainError::Database(format!("Failed to upsert item: {e}")))?;
        let item_id: i64 = tx
            .query_row(
                "SELECT item_id FROM item_meta WHERE item_name = ?1",
                params![item.name],
                |row| row.get(0),
            )
            .map_err(|e| DomainError::Database(format!("Failed to load item id: {e}")))?;

        tx.execute(
            "INSERT INTO price_history (item_id, price, trade_count, collected_at)
             VALUES (?1, ?2, ?3, ?4)",
            params![item_id, price, trade_count, encode_ts(&collected_at)],
        )
        .map_err(|e| DomainError::Database(format!("Failed to append snapshot: {e}")))?;
        let history_id = tx.last_insert_rowid();
        tx.commit()
            .map_err(|e| DomainError::Database(format!("Commit failed: {e}")))?;

        Ok(PriceSnapshot {
            history_id,
            item_id,
            price,
            trade_count,
            collected_at,
        })
    }

    fn list_by_item(&self, item_name: &str) -> Result<Vec<PriceSnapshot>, DomainError> {
        let conn = self
            .conn
            .lock()
            .map_err(|e| DomainError::Database(e.to_string()))?;
        let sql = format!(
            "SELECT {SNAPSHOT_COLS} FROM price_history h
             JOIN item_meta m ON m.item_id = h.item_id
             WHERE m.item_name = ?1
             ORDER BY h.collected_at ASC, h.history_id ASC"
        );
        let mut stmt = conn
            .prepare(&sql)
            .map_err(|e| DomainError::Database(e.to_string()))?;
        let snapshots = stmt
            .query_map(params![item_name], Self::row_to_snapshot)
            .map_err(|e| DomainError::Database(e.to_string()))?
            .filter_map(|r| r.ok())
            .collect();
        Ok(snapshots)
    }

    fn latest_by_item(&self, item_name: &str) -> Result<Option<PriceSnapshot>, DomainError> {
        let conn = self
            .conn
            .lock()
            .map_err(|e| DomainError::Database(e.to_string()))?;
        let sql = format!(
            "SELECT {SNAPSHOT_COLS} FROM price_history h
             JOIN item_meta m ON m.item_id = h.item_id
             WHERE m.item_name = ?1
             ORDER BY h.collected_at DESC, h.history_id DESC
             LIMIT 1"
        );
        conn.query_row(&sql, params![item_name], Self::row_to_snapshot)
            .optional()
            .map_err(|e| DomainError::Database(e.to_string()))
    }

    fn get_item(&self, item_name: &str) -> Result<Option<ItemMeta>, DomainError> {
        let conn = self
            .conn
            .lock()
            .map_err(|e| DomainError::Database(e.to_string()))?;
        conn.query_row(
            "SELECT item_id, item_name, grade, category_code, created_at
             FROM item_meta WHERE item_name = ?1",
            params![item_name],
            Self::row_to_meta,
        )
        .optional()
        .map_err(|e| DomainError::Database(e.to_string()))
    }

    fn item_names(&self) -> Result<BTreeSet<String>, DomainError> {
        let conn = self
            .conn
            .lock()
            .map_err(|e| DomainError::Database(e.to_string()))?;
        let mut stmt = conn
            .prepare("SELECT item_name FROM item_meta")
            .map_err(|e| DomainError::Database(e.to_string()))?;
        let names = stmt
            .query_map([], |row| row.get::<_, String>(0))
            .map_err(|e| DomainError::Database(e.to_string()))?
            .filter_map(|r| r.ok())
            .collect();
        Ok(names)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::sqlite::open_shared;
    use chrono::{Duration, TimeZone};

    fn repo() -> SqlitePriceHistoryRepo {
        SqlitePriceHistoryRepo::new(open_shared(":memory:").unwrap())
    }

    #[test]
    fn test_append_creates_item_once() {
        let repo = repo();
        let item = ItemRef::new("아비도스 융화 재료", "희귀", 50010);
        let t0 = Utc::now();
        let a = repo.append(&item, 80, Some(10), t0).unwrap();
        let b = repo.append(&item, 85, None, t0 + Duration::minutes(1)).unwrap();
        assert_eq!(a.item_id, b.item_id);
        assert_ne!(a.history_id, b.history_id);
        assert_eq!(repo.item_names().unwrap().len(), 1);
    }

    #[test]
    fn test_meta_created_at_matches_first_snapshot() {
        let repo = repo();
        let item = ItemRef::new("원한 각인서", "유물", 40000);
        let first = Utc.with_ymd_and_hms(2026, 3, 1, 12, 0, 0).unwrap();
        repo.append(&item, 5000, None, first).unwrap();
        repo.append(&item, 5100, None, first + Duration::hours(1)).unwrap();

        let meta = repo.get_item("원한 각인서").unwrap().unwrap();
        assert_eq!(meta.created_at, first);
        assert_eq!(repo.list_by_item("원한 각인서").unwrap()[0].collected_at, meta.created_at);
    }

    #[test]
    fn test_existing_meta_not_overwritten() {
        let repo = repo();
        let t0 = Utc::now();
        repo.append(&ItemRef::new("x", "전설", 40000), 1, None, t0).unwrap();
        repo.append(&ItemRef::new("x", "유물", 50010), 2, None, t0).unwrap();
        let meta = repo.get_item("x").unwrap().unwrap();
        assert_eq!(meta.grade, "전설");
        assert_eq!(meta.category_code, 40000);
    }

    #[test]
    fn test_list_orders_by_collected_at() {
        let repo = repo();
        let item = ItemRef::new("y", "일반", 90000);
        let t0 = Utc::now();
        // Inserted out of order on purpose.
        repo.append(&item, 3, None, t0 + Duration::hours(2)).unwrap();
        repo.append(&item, 1, None, t0).unwrap();
        repo.append(&item, 2, None, t0 + Duration::hours(1)).unwrap();

        let prices: Vec<i64> = repo.list_by_item("y").unwrap().iter().map(|s| s.price).collect();
        assert_eq!(prices, vec![1, 2, 3]);
        assert_eq!(repo.latest_by_item("y").unwrap().unwrap().price, 3);
    }

    #[test]
    fn test_unknown_item_is_empty() {
        let repo = repo();
        assert!(repo.list_by_item("nope").unwrap().is_empty());
        assert!(repo.latest_by_item("nope").unwrap().is_none());
        assert!(repo.get_item("nope").unwrap().is_none());
    }
}
