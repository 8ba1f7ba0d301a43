use async_trait::async_trait;
use sqlx::{Error as SqlxError, PgPool};
use tracing::{error, instrument};

use super::{ProductStore, StoreError};
use crate::models::product::{NewProduct, Product};

const PRODUCT_COLUMNS: &str = "id, name, sku, quantity, created_at";

#[derive(Clone)]
pub struct PgProductStore {
    pool: PgPool,
}

impl PgProductStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

fn map_unique_violation(err: SqlxError, sku: &str) -> StoreError {
    match err {
        SqlxError::Database(db_err) if db_err.code().as_deref() == Some("23505") => {
            StoreError::Duplicate(sku.to_string())
        }
        other => other.into(),
    }
}

#[async_trait]
impl ProductStore for PgProductStore {
    #[instrument(skip(self))]
    async fn find_by_sku(&self, sku: &str) -> Result<Option<Product>, StoreError> {
        let product = sqlx::query_as::<_, Product>(&format!(
            "SELECT {PRODUCT_COLUMNS} FROM products WHERE sku = $1"
        ))
        .bind(sku)
        .fetch_optional(&self.pool)
        .await?;

        Ok(product)
    }

    #[instrument(skip(self, record), fields(sku = %record.sku))]
    async fn insert(&self, record: NewProduct) -> Result<Product, StoreError> {
        let product = sqlx::query_as::<_, Product>(&format!(
            "INSERT INTO products (name, sku, quantity)
             VALUES ($1, $2, $3) RETURNING {PRODUCT_COLUMNS}"
        ))
        .bind(&record.name)
        .bind(&record.sku)
        .bind(record.quantity)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| map_unique_violation(e, &record.sku))?;

        Ok(product)
    }

    #[instrument(skip(self))]
    async fn delete_by_sku(&self, sku: &str) -> Result<(), StoreError> {
        let result = sqlx::query("DELETE FROM products WHERE sku = $1")
            .bind(sku)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(StoreError::NotFound(sku.to_string()));
        }

        Ok(())
    }

    #[instrument(skip(self))]
    async fn list(&self) -> Result<Vec<Product>, StoreError> {
        match sqlx::query_as::<_, Product>(&format!(
            "SELECT {PRODUCT_COLUMNS} FROM products ORDER BY sku"
        ))
        .fetch_all(&self.pool)
        .await
        {
            Ok(products) => Ok(products),
            Err(e) => {
                error!(?e, "Failed to fetch products");
                Err(e.into())
            }
        }
    }
}
