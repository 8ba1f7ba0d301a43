// src/main.rs
use std::net::SocketAddr;
use std::sync::Arc;

use dotenvy::dotenv;
use stockwatch::config::AppConfig;
use stockwatch::notify::LogNotifier;
use stockwatch::services::inventory::InventoryService;
use stockwatch::store::{InMemoryProductStore, PgProductStore, ProductStore};
use stockwatch::{database, routes, state};
use tokio::net::TcpListener;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    // Load environment variables
    dotenv().ok();

    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let config = match AppConfig::from_env() {
        Ok(c) => c,
        Err(e) => {
            tracing::error!(error=%e, "Invalid configuration");
            return;
        }
    };

    // Pick the product store
    let store: Arc<dyn ProductStore> = match &config.database_url {
        Some(url) => match database::create_pool(url, config.db_max_connections).await {
            Ok(pool) => Arc::new(PgProductStore::new(pool)),
            Err(e) => {
                tracing::error!(error=%e, "Failed to create database pool");
                return;
            }
        },
        None => {
            tracing::warn!("DATABASE_URL not set, products are kept in memory only");
            Arc::new(InMemoryProductStore::new())
        }
    };

    let inventory = InventoryService::new(store, Arc::new(LogNotifier))
        .with_threshold(config.low_stock_threshold);

    // Create application state
    let app_state = state::AppState::new(inventory, config.jwt_secret.as_str());
    let app = routes::create_app(app_state);

    // Try port..port+20 to avoid crash when address is in use
    let listener = {
        let mut bound = None;
        for offset in 0u16..=20 {
            let port = config.port.saturating_add(offset);
            let addr = SocketAddr::from((config.host, port));
            match TcpListener::bind(addr).await {
                Ok(l) => { bound = Some((l, addr)); break; }
                Err(e) => {
                    if offset == 0 { tracing::warn!(%addr, error=%e, "Port in use, trying next"); }
                }
            }
        }
        match bound {
            Some((l, addr)) => {
                tracing::info!("Server running on {}", addr);
                l
            }
            None => {
                tracing::error!("Failed to bind to any port starting at {} on {}", config.port, config.host);
                return;
            }
        }
    };

    if let Err(e) = axum::serve(listener, app).await {
        tracing::error!(error=%e, "Server error");
    }
}
