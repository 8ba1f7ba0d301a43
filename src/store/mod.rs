//! Durable keyed storage for product records.
//!
//! The inventory service only talks to storage through [`ProductStore`], so the
//! Postgres-backed store and the in-memory store are interchangeable.

pub mod memory;
pub mod postgres;

use async_trait::async_trait;
use thiserror::Error;

use crate::models::product::{NewProduct, Product};

pub use memory::InMemoryProductStore;
pub use postgres::PgProductStore;

#[derive(Debug, Error)]
pub enum StoreError {
    /// The store's own uniqueness constraint rejected the sku.
    #[error("Product with SKU {0} already exists")]
    Duplicate(String),
    #[error("Product with SKU {0} not found")]
    NotFound(String),
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),
}

#[async_trait]
pub trait ProductStore: Send + Sync {
    async fn find_by_sku(&self, sku: &str) -> Result<Option<Product>, StoreError>;

    /// Persists a new record, returning it with the store-assigned `id` and `created_at`.
    async fn insert(&self, record: NewProduct) -> Result<Product, StoreError>;

    /// Fails with [`StoreError::NotFound`] if nothing was deleted.
    async fn delete_by_sku(&self, sku: &str) -> Result<(), StoreError>;

    /// All products ordered by sku.
    async fn list(&self) -> Result<Vec<Product>, StoreError>;
}
