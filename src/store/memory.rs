use std::collections::BTreeMap;

use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::RwLock;

use super::{ProductStore, StoreError};
use crate::models::product::{NewProduct, Product};

/// Process-local store keyed by sku. Nothing survives a restart.
#[derive(Default)]
pub struct InMemoryProductStore {
    inner: RwLock<Inner>,
}

#[derive(Default)]
struct Inner {
    next_id: i64,
    products: BTreeMap<String, Product>,
}

impl InMemoryProductStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl ProductStore for InMemoryProductStore {
    async fn find_by_sku(&self, sku: &str) -> Result<Option<Product>, StoreError> {
        Ok(self.inner.read().await.products.get(sku).cloned())
    }

    async fn insert(&self, record: NewProduct) -> Result<Product, StoreError> {
        let mut inner = self.inner.write().await;
        if inner.products.contains_key(&record.sku) {
            return Err(StoreError::Duplicate(record.sku));
        }

        inner.next_id += 1;
        let product = Product {
            id: inner.next_id,
            name: record.name,
            sku: record.sku,
            quantity: record.quantity,
            created_at: Utc::now(),
        };
        inner.products.insert(product.sku.clone(), product.clone());

        Ok(product)
    }

    async fn delete_by_sku(&self, sku: &str) -> Result<(), StoreError> {
        match self.inner.write().await.products.remove(sku) {
            Some(_) => Ok(()),
            None => Err(StoreError::NotFound(sku.to_string())),
        }
    }

    async fn list(&self) -> Result<Vec<Product>, StoreError> {
        Ok(self.inner.read().await.products.values().cloned().collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(name: &str, sku: &str, quantity: i64) -> NewProduct {
        NewProduct {
            name: name.to_string(),
            sku: sku.to_string(),
            quantity,
        }
    }

    #[tokio::test]
    async fn insert_assigns_increasing_ids() {
        let store = InMemoryProductStore::new();
        let first = store.insert(record("Laptop", "LAP-001", 10)).await.unwrap();
        let second = store.insert(record("Mouse", "MOU-001", 3)).await.unwrap();

        assert_eq!(first.id, 1);
        assert_eq!(second.id, 2);
        assert!(second.created_at >= first.created_at);
    }

    #[tokio::test]
    async fn insert_rejects_existing_sku() {
        let store = InMemoryProductStore::new();
        store.insert(record("Laptop", "LAP-001", 10)).await.unwrap();

        let err = store.insert(record("Desktop", "LAP-001", 5)).await.unwrap_err();
        assert!(matches!(err, StoreError::Duplicate(sku) if sku == "LAP-001"));
        assert_eq!(store.list().await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn delete_missing_sku_is_not_found() {
        let store = InMemoryProductStore::new();
        let err = store.delete_by_sku("NOPE").await.unwrap_err();
        assert!(matches!(err, StoreError::NotFound(_)));
    }

    #[tokio::test]
    async fn list_is_ordered_by_sku() {
        let store = InMemoryProductStore::new();
        store.insert(record("Mouse", "MOU-001", 3)).await.unwrap();
        store.insert(record("Laptop", "LAP-001", 10)).await.unwrap();

        let skus: Vec<String> = store.list().await.unwrap().into_iter().map(|p| p.sku).collect();
        assert_eq!(skus, vec!["LAP-001", "MOU-001"]);
    }
}
