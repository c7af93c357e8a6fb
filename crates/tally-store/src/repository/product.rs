//! # Product Repository
//!
//! Database operations for the catalog.
//!
//! ## Key Operations
//! - Get-all in name order (the keyword filter runs in memory, in
//!   tally-core, over this list)
//! - Insert with store-assigned id
//! - Update and hard delete for catalog edits

use sqlx::SqlitePool;
use tracing::debug;

use crate::error::{StoreError, StoreResult};
use crate::repository::generate_id;
use tally_core::types::{Product, ProductDraft};

/// Repository for the products collection.
///
/// ## Usage
/// ```rust,ignore
/// let repo = store.products();
/// let product = repo.insert(&draft).await?;
/// let all = repo.list_all().await?;
/// ```
#[derive(Debug, Clone)]
pub struct ProductRepository {
    pool: SqlitePool,
}

impl ProductRepository {
    /// Creates a new ProductRepository.
    pub fn new(pool: SqlitePool) -> Self {
        ProductRepository { pool }
    }

    /// Returns the full catalog, sorted by name.
    pub async fn list_all(&self) -> StoreResult<Vec<Product>> {
        let products = sqlx::query_as::<_, Product>(
            r#"
            SELECT id, name, price_minor, image, option
            FROM products
            ORDER BY name
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        debug!(count = products.len(), "Listed products");
        Ok(products)
    }

    /// Gets a product by id.
    ///
    /// ## Returns
    /// * `Ok(Some(Product))` - found
    /// * `Ok(None)` - no such id
    pub async fn get_by_id(&self, id: &str) -> StoreResult<Option<Product>> {
        let product = sqlx::query_as::<_, Product>(
            r#"
            SELECT id, name, price_minor, image, option
            FROM products
            WHERE id = ?1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(product)
    }

    /// Inserts a new product, assigning its id.
    ///
    /// The draft is assumed validated (its constructor enforces the
    /// field rules); the schema CHECK on price is the backstop.
    pub async fn insert(&self, draft: &ProductDraft) -> StoreResult<Product> {
        let product = draft.clone().into_product(generate_id());
        debug!(id = %product.id, name = %product.name, "Inserting product");

        sqlx::query(
            r#"
            INSERT INTO products (id, name, price_minor, image, option)
            VALUES (?1, ?2, ?3, ?4, ?5)
            "#,
        )
        .bind(&product.id)
        .bind(&product.name)
        .bind(product.price_minor)
        .bind(&product.image)
        .bind(&product.option)
        .execute(&self.pool)
        .await?;

        Ok(product)
    }

    /// Replaces an existing product's fields.
    ///
    /// ## Returns
    /// * `Err(StoreError::NotFound)` - id doesn't exist
    pub async fn update(&self, product: &Product) -> StoreResult<()> {
        debug!(id = %product.id, "Updating product");

        let result = sqlx::query(
            r#"
            UPDATE products
            SET name = ?2, price_minor = ?3, image = ?4, option = ?5
            WHERE id = ?1
            "#,
        )
        .bind(&product.id)
        .bind(&product.name)
        .bind(product.price_minor)
        .bind(&product.image)
        .bind(&product.option)
        .execute(&self.pool)
        .await?;

        if result.rows_affected() == 0 {
            return Err(StoreError::not_found("product", &product.id));
        }

        Ok(())
    }

    /// Removes a product from the catalog.
    ///
    /// Recorded sales are unaffected: their line items are frozen
    /// snapshots, not references into this table.
    pub async fn delete(&self, id: &str) -> StoreResult<()> {
        debug!(id = %id, "Deleting product");

        let result = sqlx::query("DELETE FROM products WHERE id = ?1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(StoreError::not_found("product", id));
        }

        Ok(())
    }

    /// Counts catalog entries.
    pub async fn count(&self) -> StoreResult<i64> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM products")
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
    use crate::pool::{Store, StoreConfig};
    use tally_core::types::ProductDraft;

    async fn test_store() -> Store {
        Store::new(StoreConfig::in_memory()).await.unwrap()
    }

    fn draft(name: &str, price: i64) -> ProductDraft {
        ProductDraft::new(name, price, format!("img/{}.png", name), None).unwrap()
    }

    #[tokio::test]
    async fn insert_assigns_distinct_ids() {
        let repo = test_store().await.products();

        let a = repo.insert(&draft("Es Teh", 5_000)).await.unwrap();
        let b = repo.insert(&draft("Kopi", 8_000)).await.unwrap();

        assert_ne!(a.id, b.id);
        assert_eq!(repo.count().await.unwrap(), 2);
    }

    #[tokio::test]
    async fn list_all_is_name_ordered() {
        let repo = test_store().await.products();
        repo.insert(&draft("Kopi", 8_000)).await.unwrap();
        repo.insert(&draft("Es Teh", 5_000)).await.unwrap();

        let all = repo.list_all().await.unwrap();
        assert_eq!(all.len(), 2);
        assert_eq!(all[0].name, "Es Teh");
        assert_eq!(all[1].name, "Kopi");
    }

    #[tokio::test]
    async fn get_update_delete_cycle() {
        let repo = test_store().await.products();
        let mut product = repo.insert(&draft("Es Teh", 5_000)).await.unwrap();

        product.price_minor = 6_000;
        repo.update(&product).await.unwrap();
        let fetched = repo.get_by_id(&product.id).await.unwrap().unwrap();
        assert_eq!(fetched.price_minor, 6_000);

        repo.delete(&product.id).await.unwrap();
        assert!(repo.get_by_id(&product.id).await.unwrap().is_none());
        assert_eq!(repo.count().await.unwrap(), 0);
    }

    #[tokio::test]
    async fn update_unknown_id_is_not_found() {
        let repo = test_store().await.products();
        let ghost = draft("Ghost", 1_000).into_product("no-such-id".to_string());

        assert!(repo.update(&ghost).await.is_err());
        assert!(repo.delete("no-such-id").await.is_err());
    }
}
