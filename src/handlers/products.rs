use crate::core::error::AppError;
use crate::core::state::AppState;
use crate::models::admin::DeleteQuery;
use crate::models::product::Product;
use crate::stores::product_store::Upsert;
use crate::utils::json::decode_object;
use axum::{
    body::Bytes,
    extract::{RawQuery, State},
    http::StatusCode,
    response::{IntoResponse, Json},
};
use std::sync::Arc;
use tracing::{debug, info, warn};

/// List the whole catalog
///
/// GET /api/products
pub async fn get_products_handler(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    let products = state.store.list();

    debug!(count = products.len(), "Products listed");

    (StatusCode::OK, Json(products))
}

/// Create (id 0) or update a product
///
/// POST /api/product/save
///
/// The body is decoded as JSON whatever the Content-Type says, with
/// case-insensitive keys. Updating an id that does not exist still answers 200.
pub async fn save_product_handler(
    State(state): State<Arc<AppState>>,
    body: Bytes,
) -> Result<StatusCode, AppError> {
    let product: Product = decode_object(&body).map_err(|e| {
        warn!(error = %e, "Rejected product body");
        AppError::from(e)
    })?;

    match state.store.upsert(product) {
        Upsert::Created(id) => info!(product_id = id, "Product created"),
        Upsert::Updated(id) => info!(product_id = id, "Product updated"),
        Upsert::Ignored(id) => warn!(product_id = id, "Update for unknown product ignored"),
    }

    Ok(StatusCode::OK)
}

/// Delete a product by id
///
/// DELETE /api/product/delete?id=<id>
///
/// A missing or non-numeric id is read as 0 and deletes nothing.
pub async fn delete_product_handler(
    State(state): State<Arc<AppState>>,
    RawQuery(query): RawQuery,
) -> StatusCode {
    let id = DeleteQuery::product_id(query.as_deref());
    let removed = state.store.delete(id);

    info!(product_id = id, removed = removed, "Product delete processed");

    StatusCode::OK
}
