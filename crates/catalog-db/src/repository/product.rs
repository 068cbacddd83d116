//! # Product Repository
//!
//! Database operations for products.
//!
//! ## Key Operations
//! - CRUD: `create`, `update`, `delete`, `find`, `all`
//! - Attribute lookups: name, availability, category, price
//!
//! ## Lifecycle Mapping
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Product ⇄ products row                                │
//! │                                                                         │
//! │  Transient (id = None)                                                 │
//! │       │                                                                 │
//! │       │ create(&mut p)   BEGIN; INSERT; COMMIT; p.id = Some(uuid)      │
//! │       ▼                                                                 │
//! │  Persisted (id = Some)  ◄──┐                                            │
//! │       │                    │ update(&p)  BEGIN; UPDATE; COMMIT         │
//! │       │                    │             (no row → NotFound, ROLLBACK) │
//! │       │                  ──┘                                            │
//! │       │ delete(&p)       DELETE WHERE id = ?  (missing row → no-op)    │
//! │       ▼                                                                 │
//! │  Deleted (handle stale)                                                │
//! │                                                                         │
//! │  find / all / find_by_* always read fresh rows from storage            │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use sqlx::SqlitePool;
use tracing::{debug, info};
use uuid::Uuid;

use crate::error::{DbError, DbResult};
use catalog_core::validation::require_id;
use catalog_core::{Category, IntoMoney, Money, Product, ValidationError};

/// One row of the `products` table.
#[derive(Debug, sqlx::FromRow)]
struct ProductRow {
    id: String,
    name: String,
    description: String,
    price_cents: Money,
    available: bool,
    category: Category,
}

impl From<ProductRow> for Product {
    fn from(row: ProductRow) -> Self {
        Product {
            id: Some(row.id),
            name: row.name,
            description: row.description,
            price: row.price_cents,
            available: row.available,
            category: row.category,
        }
    }
}

fn into_products(rows: Vec<ProductRow>) -> Vec<Product> {
    rows.into_iter().map(Product::from).collect()
}

/// Repository for product database operations.
///
/// ## Usage
/// ```rust,ignore
/// let repo = db.products();
///
/// let mut hat = Product::new("Hat", "Wool", Money::from_cents(1500), true, Category::Cloths);
/// repo.create(&mut hat).await?;
///
/// let found = repo.find(hat.id.as_deref().unwrap()).await?;
/// let cheap = repo.find_by_price("15.00").await?;
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

    // =========================================================================
    // Writes
    // =========================================================================

    /// Persists a transient product and assigns its id.
    ///
    /// ## Returns
    /// * `Ok(())` - Row committed, `product.id` is now set
    /// * `Err(DbError::Validation)` - Product already has an id, or invalid attributes
    /// * `Err(DbError)` - Insert or commit failed; `product.id` stays `None`
    pub async fn create(&self, product: &mut Product) -> DbResult<()> {
        if product.id.is_some() {
            return Err(ValidationError::invalid_format("id", "must be unset before create").into());
        }
        product.validate()?;

        let id = generate_product_id();
        info!(name = %product.name, id = %id, "Creating product");

        let mut tx = self.pool.begin().await.map_err(DbError::transaction)?;

        sqlx::query(
            r#"
            INSERT INTO products (id, name, description, price_cents, available, category)
            VALUES (?1, ?2, ?3, ?4, ?5, ?6)
            "#,
        )
        .bind(&id)
        .bind(&product.name)
        .bind(&product.description)
        .bind(product.price)
        .bind(product.available)
        .bind(product.category)
        .execute(&mut *tx)
        .await?;

        tx.commit().await.map_err(DbError::transaction)?;

        product.id = Some(id);
        Ok(())
    }

    /// Writes the product's current attributes over its existing row.
    ///
    /// ## Returns
    /// * `Ok(())` - Update committed
    /// * `Err(DbError::Validation)` - Product has no id, or invalid attributes
    /// * `Err(DbError::NotFound)` - No row has this id (nothing is written)
    pub async fn update(&self, product: &Product) -> DbResult<()> {
        let id = require_id(product.id.as_deref())?;
        product.validate()?;

        debug!(id = %id, "Updating product");

        let mut tx = self.pool.begin().await.map_err(DbError::transaction)?;

        let result = sqlx::query(
            r#"
            UPDATE products SET
                name = ?2,
                description = ?3,
                price_cents = ?4,
                available = ?5,
                category = ?6
            WHERE id = ?1
            "#,
        )
        .bind(id)
        .bind(&product.name)
        .bind(&product.description)
        .bind(product.price)
        .bind(product.available)
        .bind(product.category)
        .execute(&mut *tx)
        .await?;

        // Dropping `tx` without commit rolls back
        if result.rows_affected() == 0 {
            return Err(DbError::not_found("Product", id));
        }

        tx.commit().await.map_err(DbError::transaction)?;
        Ok(())
    }

    /// Removes the product's row.
    ///
    /// Deleting a transient product or an id with no row is a no-op.
    pub async fn delete(&self, product: &Product) -> DbResult<()> {
        let Some(id) = product.id.as_deref() else {
            debug!(name = %product.name, "Delete of transient product ignored");
            return Ok(());
        };

        info!(id = %id, "Deleting product");

        let result = sqlx::query("DELETE FROM products WHERE id = ?1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            debug!(id = %id, "No row to delete");
        }

        Ok(())
    }

    /// Removes every product. Returns the number of rows removed.
    ///
    /// ## Usage
    /// Resetting a shared database between test cases.
    pub async fn delete_all(&self) -> DbResult<u64> {
        let result = sqlx::query("DELETE FROM products")
            .execute(&self.pool)
            .await?;

        debug!(removed = result.rows_affected(), "Deleted all products");
        Ok(result.rows_affected())
    }

    // =========================================================================
    // Reads
    // =========================================================================

    /// Returns every product in insertion order.
    pub async fn all(&self) -> DbResult<Vec<Product>> {
        let rows: Vec<ProductRow> = sqlx::query_as(
            r#"
            SELECT id, name, description, price_cents, available, category
            FROM products
            ORDER BY rowid
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        debug!(count = rows.len(), "Listed all products");
        Ok(into_products(rows))
    }

    /// Gets a product by its id.
    ///
    /// ## Returns
    /// * `Ok(Some(Product))` - Product found
    /// * `Ok(None)` - No product has this id
    pub async fn find(&self, id: &str) -> DbResult<Option<Product>> {
        debug!(id = %id, "Finding product");

        let row: Option<ProductRow> = sqlx::query_as(
            r#"
            SELECT id, name, description, price_cents, available, category
            FROM products
            WHERE id = ?1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(Product::from))
    }

    /// Returns all products whose name matches exactly (case-sensitive).
    pub async fn find_by_name(&self, name: &str) -> DbResult<Vec<Product>> {
        debug!(name = %name, "Finding products by name");

        let rows: Vec<ProductRow> = sqlx::query_as(
            r#"
            SELECT id, name, description, price_cents, available, category
            FROM products
            WHERE name = ?1
            ORDER BY rowid
            "#,
        )
        .bind(name)
        .fetch_all(&self.pool)
        .await?;

        Ok(into_products(rows))
    }

    /// Returns all products with the given availability.
    pub async fn find_by_availability(&self, available: bool) -> DbResult<Vec<Product>> {
        debug!(available = available, "Finding products by availability");

        let rows: Vec<ProductRow> = sqlx::query_as(
            r#"
            SELECT id, name, description, price_cents, available, category
            FROM products
            WHERE available = ?1
            ORDER BY rowid
            "#,
        )
        .bind(available)
        .fetch_all(&self.pool)
        .await?;

        Ok(into_products(rows))
    }

    /// Returns all products in the given category.
    pub async fn find_by_category(&self, category: Category) -> DbResult<Vec<Product>> {
        debug!(category = %category, "Finding products by category");

        let rows: Vec<ProductRow> = sqlx::query_as(
            r#"
            SELECT id, name, description, price_cents, available, category
            FROM products
            WHERE category = ?1
            ORDER BY rowid
            "#,
        )
        .bind(category)
        .fetch_all(&self.pool)
        .await?;

        Ok(into_products(rows))
    }

    /// Returns all products priced exactly at `price`.
    ///
    /// `price` may be a [`Money`] or its text (`"19.99"`, `" \"19.99\" "`);
    /// text is parsed to exact cents before the query is built, so both
    /// forms match the same rows.
    ///
    /// ## Returns
    /// * `Err(DbError::Validation)` - Text is not a decimal amount
    pub async fn find_by_price(&self, price: impl IntoMoney) -> DbResult<Vec<Product>> {
        let price = price.into_money()?;

        debug!(price = %price, "Finding products by price");

        let rows: Vec<ProductRow> = sqlx::query_as(
            r#"
            SELECT id, name, description, price_cents, available, category
            FROM products
            WHERE price_cents = ?1
            ORDER BY rowid
            "#,
        )
        .bind(price)
        .fetch_all(&self.pool)
        .await?;

        Ok(into_products(rows))
    }

    /// Counts persisted products (for diagnostics).
    pub async fn count(&self) -> DbResult<i64> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM products")
            .fetch_one(&self.pool)
            .await?;

        Ok(count)
    }
}

/// Helper to generate a new product ID.
pub fn generate_product_id() -> String {
    Uuid::new_v4().to_string()
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pool::{Database, DbConfig};

    async fn repo() -> ProductRepository {
        Database::new(DbConfig::in_memory()).await.unwrap().products()
    }

    fn hat() -> Product {
        Product::new("Hat", "Wool", Money::from_cents(1500), true, Category::Cloths)
    }

    #[tokio::test]
    async fn test_create_assigns_uuid() {
        let repo = repo().await;
        let mut product = hat();

        repo.create(&mut product).await.unwrap();

        let id = product.id.as_deref().unwrap();
        assert!(Uuid::parse_str(id).is_ok());
    }

    #[tokio::test]
    async fn test_create_rejects_persisted_product() {
        let repo = repo().await;
        let mut product = hat();
        repo.create(&mut product).await.unwrap();

        let err = repo.create(&mut product).await.unwrap_err();

        assert!(matches!(err, DbError::Validation(_)));
        assert_eq!(repo.count().await.unwrap(), 1);
    }

    #[tokio::test]
    async fn test_create_rejects_invalid_product() {
        let repo = repo().await;
        let mut product = hat();
        product.name = String::new();

        let err = repo.create(&mut product).await.unwrap_err();

        assert!(matches!(err, DbError::Validation(ValidationError::Required { .. })));
        assert!(product.id.is_none());
        assert_eq!(repo.count().await.unwrap(), 0);
    }

    #[tokio::test]
    async fn test_update_without_id_is_validation_error() {
        let repo = repo().await;

        let err = repo.update(&hat()).await.unwrap_err();

        assert!(matches!(
            err,
            DbError::Validation(ValidationError::Required { ref field }) if field == "id"
        ));
    }

    #[tokio::test]
    async fn test_update_missing_row_is_not_found() {
        let repo = repo().await;
        let mut product = hat();
        product.id = Some(generate_product_id());

        let err = repo.update(&product).await.unwrap_err();

        assert!(matches!(err, DbError::NotFound { .. }));
        assert_eq!(repo.count().await.unwrap(), 0);
    }

    #[tokio::test]
    async fn test_delete_is_idempotent() {
        let repo = repo().await;
        let mut product = hat();
        repo.create(&mut product).await.unwrap();

        repo.delete(&product).await.unwrap();
        repo.delete(&product).await.unwrap();
        repo.delete(&hat()).await.unwrap();

        assert_eq!(repo.count().await.unwrap(), 0);
    }

    #[tokio::test]
    async fn test_find_unknown_id_is_none() {
        let repo = repo().await;

        assert!(repo.find("never-used").await.unwrap().is_none());
        assert!(repo.find(&generate_product_id()).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_find_by_price_rejects_bad_text() {
        let repo = repo().await;

        let err = repo.find_by_price("cheap").await.unwrap_err();

        assert!(matches!(err, DbError::Validation(_)));
    }

    #[tokio::test]
    async fn test_delete_all_reports_rows() {
        let repo = repo().await;
        for _ in 0..3 {
            repo.create(&mut hat()).await.unwrap();
        }

        assert_eq!(repo.delete_all().await.unwrap(), 3);
        assert!(repo.all().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_closed_pool_surfaces_connection_error() {
        let db = Database::new(DbConfig::in_memory()).await.unwrap();
        let repo = db.products();
        db.close().await;

        let mut product = hat();
        let err = repo.create(&mut product).await.unwrap_err();

        assert!(matches!(err, DbError::ConnectionFailed(_)));
        assert!(product.id.is_none());
    }
}
