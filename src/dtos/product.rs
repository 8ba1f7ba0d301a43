// src/dtos/product.rs
use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize)]
pub struct CreateProductRequest {
    pub name: String,
    pub sku: String,
    pub quantity: i64,
}

#[derive(Debug, Deserialize)]
pub struct LowStockQuery {
    pub threshold: Option<i64>,
}

#[derive(Debug, Serialize)]
pub struct ProductResponse {
    pub id: i64,
    pub name: String,
    pub sku: String,
    pub quantity: i64,
    pub created_at: String,
}

// Convert from Model to Response DTO
impl From<crate::models::product::Product> for ProductResponse {
    fn from(product: crate::models::product::Product) -> Self {
        Self {
            id: product.id,
            name: product.name,
            sku: product.sku,
            quantity: product.quantity,
            created_at: product.created_at.to_rfc3339(),
        }
    }
}
