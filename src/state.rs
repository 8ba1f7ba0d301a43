use std::sync::Arc;

use crate::services::inventory::InventoryService;

#[derive(Clone)]
pub struct AppState {
    pub inventory: Arc<InventoryService>,
    pub jwt_secret: Arc<str>,
}

impl AppState {
    pub fn new(inventory: InventoryService, jwt_secret: impl Into<Arc<str>>) -> Self {
        Self {
            inventory: Arc::new(inventory),
            jwt_secret: jwt_secret.into(),
        }
    }
}
