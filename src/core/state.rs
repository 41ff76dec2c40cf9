// Application state (AppState)

use crate::core::config::Config;
use crate::models::product::Product;
use crate::security::session_gate::SessionGate;
use crate::stores::product_store::ProductStore;
use std::sync::Arc;

/// Shared application state
///
/// Handed to every handler through axum's `State` extractor.
#[derive(Clone)]
pub struct AppState {
    /// Product catalog
    pub store: Arc<ProductStore>,

    /// Admin password check
    pub session_gate: Arc<SessionGate>,

    /// Configuration
    pub config: Arc<Config>,
}

impl AppState {
    pub fn new(config: Config, products: Vec<Product>, id_counter: i64) -> Self {
        let config = Arc::new(config);

        Self {
            store: Arc::new(ProductStore::with_products(products, id_counter)),
            session_gate: Arc::new(SessionGate::from_config(&config.auth)),
            config,
        }
    }
}
