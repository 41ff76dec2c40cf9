// HTTP routes configuration

use crate::core::state::AppState;
use axum::{
    routing::{any, delete, get, post},
    Router,
};
use std::sync::Arc;

pub fn build_router(state: Arc<AppState>) -> Router {
    Router::new()
        // Admin page
        .route("/", any(crate::handlers::view::index_handler))

        // Catalog API
        .route("/api/products", get(crate::handlers::products::get_products_handler))
        .route("/api/product/save", post(crate::handlers::products::save_product_handler))
        .route("/api/product/delete", delete(crate::handlers::products::delete_product_handler))
        .route("/api/login", post(crate::handlers::login::login_handler))

        // Unmatched paths render the admin page
        .fallback(crate::handlers::view::index_handler)

        .with_state(state)
}
