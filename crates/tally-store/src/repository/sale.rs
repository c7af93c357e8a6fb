//! # Sale Repository
//!
//! Database operations for recorded sales.
//!
//! ## Snapshot Column
//! A sale's line items are stored as one JSON string column, the exact
//! cart snapshot taken at submit time. Listing deserializes it back
//! into typed [`CartItem`]s; the round trip is field-for-field
//! lossless. The collection is append-only: no update, no delete.

use chrono::{DateTime, Utc};
use sqlx::SqlitePool;
use tracing::debug;

use crate::error::StoreResult;
use crate::repository::generate_id;
use tally_core::cart::CartItem;
use tally_core::types::{SaleDraft, SaleRecord};

/// Raw row shape; `items` is still JSON text here.
#[derive(Debug, sqlx::FromRow)]
struct SaleRow {
    id: String,
    receipt_no: String,
    date: String,
    recorded_at: DateTime<Utc>,
    items: String,
    total_minor: i64,
}

impl SaleRow {
    fn into_record(self) -> StoreResult<SaleRecord> {
        let items: Vec<CartItem> = serde_json::from_str(&self.items)?;
        Ok(SaleRecord {
            id: self.id,
            receipt_no: self.receipt_no,
            date: self.date,
            recorded_at: self.recorded_at,
            items,
            total_minor: self.total_minor,
        })
    }
}

/// Repository for the sales collection.
#[derive(Debug, Clone)]
pub struct SaleRepository {
    pool: SqlitePool,
}

impl SaleRepository {
    /// Creates a new SaleRepository.
    pub fn new(pool: SqlitePool) -> Self {
        SaleRepository { pool }
    }

    /// Records a finalized sale, assigning its id.
    pub async fn insert(&self, draft: SaleDraft) -> StoreResult<SaleRecord> {
        let record = draft.into_record(generate_id());
        let items_json = serde_json::to_string(&record.items)?;

        debug!(
            id = %record.id,
            receipt_no = %record.receipt_no,
            total = record.total_minor,
            "Recording sale"
        );

        sqlx::query(
            r#"
            INSERT INTO sales (id, receipt_no, date, recorded_at, items, total_minor)
            VALUES (?1, ?2, ?3, ?4, ?5, ?6)
            "#,
        )
        .bind(&record.id)
        .bind(&record.receipt_no)
        .bind(&record.date)
        .bind(record.recorded_at)
        .bind(&items_json)
        .bind(record.total_minor)
        .execute(&self.pool)
        .await?;

        Ok(record)
    }

    /// Returns all recorded sales, newest first, items deserialized.
    pub async fn list_all(&self) -> StoreResult<Vec<SaleRecord>> {
        let rows = sqlx::query_as::<_, SaleRow>(
            r#"
            SELECT id, receipt_no, date, recorded_at, items, total_minor
            FROM sales
            ORDER BY recorded_at DESC
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        debug!(count = rows.len(), "Listed sales");

        rows.into_iter().map(SaleRow::into_record).collect()
    }

    /// Counts recorded sales.
    pub async fn count(&self) -> StoreResult<i64> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM sales")
            .fetch_one(&self.pool)
            .await?;

        Ok(count)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pool::{Store, StoreConfig};
    use chrono::TimeZone;
    use tally_core::cart::Cart;
    use tally_core::receipt::{format_receipt_date, receipt_number};
    use tally_core::types::Product;

    async fn test_store() -> Store {
        Store::new(StoreConfig::in_memory()).await.unwrap()
    }

    fn snapshot_cart() -> Cart {
        let mut cart = Cart::new();
        cart.add_product(&Product {
            id: "p1".to_string(),
            name: "Es Teh Manis".to_string(),
            price_minor: 5_000,
            image: "img/es-teh.png".to_string(),
            option: Some("dingin".to_string()),
        });
        cart.add_product(&Product {
            id: "p2".to_string(),
            name: "Nasi Goreng".to_string(),
            price_minor: 20_000,
            image: "img/nasgor.png".to_string(),
            option: None,
        });
        cart.change_qty("p1", 1); // qty 2
        cart
    }

    fn draft_at(cart: &Cart, unix_secs: i64) -> SaleDraft {
        let time = Utc.timestamp_opt(unix_secs, 0).unwrap();
        SaleDraft {
            receipt_no: receipt_number("TALLY-POS", time),
            date: format_receipt_date(time),
            recorded_at: time,
            items: cart.items().to_vec(),
            total_minor: cart.total_price().minor(),
        }
    }

    #[tokio::test]
    async fn items_snapshot_roundtrips_losslessly() {
        let repo = test_store().await.sales();
        let cart = snapshot_cart();

        repo.insert(draft_at(&cart, 1_700_000_000)).await.unwrap();
        let sales = repo.list_all().await.unwrap();

        assert_eq!(sales.len(), 1);
        assert_eq!(sales[0].items, cart.items());
        assert_eq!(sales[0].total_minor, cart.total_price().minor());
    }

    #[tokio::test]
    async fn listing_is_newest_first() {
        let repo = test_store().await.sales();
        let cart = snapshot_cart();

        repo.insert(draft_at(&cart, 1_700_000_000)).await.unwrap();
        repo.insert(draft_at(&cart, 1_700_000_090)).await.unwrap();
        repo.insert(draft_at(&cart, 1_700_000_030)).await.unwrap();

        let sales = repo.list_all().await.unwrap();
        assert_eq!(sales.len(), 3);
        assert!(sales[0].recorded_at > sales[1].recorded_at);
        assert!(sales[1].recorded_at > sales[2].recorded_at);
        assert_eq!(sales[0].receipt_no, "TALLY-POS-1700000090");
    }

    #[tokio::test]
    async fn duplicate_receipt_number_is_rejected() {
        let repo = test_store().await.sales();
        let cart = snapshot_cart();

        repo.insert(draft_at(&cart, 1_700_000_000)).await.unwrap();
        let dup = repo.insert(draft_at(&cart, 1_700_000_000)).await;

        assert!(dup.is_err());
        assert_eq!(repo.count().await.unwrap(), 1);
    }
}
