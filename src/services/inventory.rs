use std::sync::Arc;

use thiserror::Error;
use tracing::{info, instrument};

use crate::models::product::{
    low_stock_message, LowStockCheck, NewProduct, OperationResult, Product,
    DEFAULT_LOW_STOCK_THRESHOLD, PRODUCT_REMOVED_MESSAGE,
};
use crate::notify::{NotificationSender, NotifyError};
use crate::store::{ProductStore, StoreError};

#[derive(Debug, Error)]
pub enum InventoryError {
    #[error("{0}")]
    Validation(String),
    #[error("{0}")]
    Conflict(String),
    #[error("{0}")]
    NotFound(String),
    #[error(transparent)]
    Store(#[from] StoreError),
    #[error(transparent)]
    Notification(#[from] NotifyError),
}

/// Validates inventory requests and dispatches them to the product store and the
/// alert channel. Both collaborators are fixed at construction.
#[derive(Clone)]
pub struct InventoryService {
    store: Arc<dyn ProductStore>,
    notifier: Arc<dyn NotificationSender>,
    low_stock_threshold: i64,
}

impl InventoryService {
    pub fn new(store: Arc<dyn ProductStore>, notifier: Arc<dyn NotificationSender>) -> Self {
        Self {
            store,
            notifier,
            low_stock_threshold: DEFAULT_LOW_STOCK_THRESHOLD,
        }
    }

    pub fn with_threshold(mut self, threshold: i64) -> Self {
        self.low_stock_threshold = threshold;
        self
    }

    pub fn low_stock_threshold(&self) -> i64 {
        self.low_stock_threshold
    }

    #[instrument(skip(self))]
    pub async fn add_product(
        &self,
        name: &str,
        sku: &str,
        quantity: i64,
    ) -> Result<Product, InventoryError> {
        if quantity < 0 {
            return Err(InventoryError::Validation("Quantity cannot be negative".into()));
        }
        if name.trim().is_empty() {
            return Err(InventoryError::Validation("Product name is required".into()));
        }
        if sku.trim().is_empty() {
            return Err(InventoryError::Validation("SKU is required".into()));
        }

        if self.store.find_by_sku(sku).await?.is_some() {
            return Err(InventoryError::Conflict(format!(
                "Product with SKU {sku} already exists"
            )));
        }

        // Two concurrent adds can both get past the lookup; the store's own
        // constraint decides and surfaces as StoreError::Duplicate.
        let product = self
            .store
            .insert(NewProduct {
                name: name.to_string(),
                sku: sku.to_string(),
                quantity,
            })
            .await?;

        info!(id = product.id, "Product added");
        Ok(product)
    }

    #[instrument(skip(self))]
    pub async fn remove_product(&self, sku: &str) -> Result<OperationResult, InventoryError> {
        self.require(sku).await?;
        self.store.delete_by_sku(sku).await?;

        info!("Product removed");
        Ok(OperationResult::new(PRODUCT_REMOVED_MESSAGE))
    }

    pub async fn check_low_stock(&self, sku: &str) -> Result<LowStockCheck, InventoryError> {
        self.check_low_stock_with_threshold(sku, self.low_stock_threshold)
            .await
    }

    #[instrument(skip(self))]
    pub async fn check_low_stock_with_threshold(
        &self,
        sku: &str,
        threshold: i64,
    ) -> Result<LowStockCheck, InventoryError> {
        let product = self.require(sku).await?;

        if product.quantity >= threshold {
            return Ok(LowStockCheck { alert_sent: false });
        }

        self.notifier
            .send_alert(&low_stock_message(&product.sku, product.quantity))
            .await?;

        info!(quantity = product.quantity, "Low stock alert sent");
        Ok(LowStockCheck { alert_sent: true })
    }

    #[instrument(skip(self))]
    pub async fn get_product(&self, sku: &str) -> Result<Product, InventoryError> {
        self.require(sku).await
    }

    #[instrument(skip(self))]
    pub async fn list_products(&self) -> Result<Vec<Product>, InventoryError> {
        Ok(self.store.list().await?)
    }

    async fn require(&self, sku: &str) -> Result<Product, InventoryError> {
        self.store
            .find_by_sku(sku)
            .await?
            .ok_or_else(|| InventoryError::NotFound(format!("Product with SKU {sku} not found")))
    }
}
