use crate::core::error::AppError;
use crate::core::state::AppState;
use axum::{extract::State, response::Html};
use std::sync::Arc;
use tracing::error;

/// Admin page
///
/// GET / (also every path no other route matches)
///
/// The template is read on each request, so edits show up without a restart.
pub async fn index_handler(State(state): State<Arc<AppState>>) -> Result<Html<String>, AppError> {
    let path = &state.config.views.index_template;

    match tokio::fs::read_to_string(path).await {
        Ok(page) => Ok(Html(page)),
        Err(e) => {
            error!(path = %path.display(), error = %e, "Failed to load template");
            Err(AppError::TemplateLoad(e))
        }
    }
}
