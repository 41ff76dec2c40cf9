// Centralized error handling for the admin API

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

/// Errors that end a request. Bodies are plain text.
#[derive(Error, Debug)]
pub enum AppError {
    /// Request body did not decode; carries the decoder's message
    #[error("{0}")]
    InvalidBody(String),

    #[error("Invalid password")]
    Unauthorized,

    #[error("Error loading template")]
    TemplateLoad(#[source] std::io::Error),
}

impl AppError {
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::InvalidBody(_) => StatusCode::BAD_REQUEST,
            AppError::Unauthorized => StatusCode::UNAUTHORIZED,
            AppError::TemplateLoad(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<serde_json::Error> for AppError {
    fn from(e: serde_json::Error) -> Self {
        AppError::InvalidBody(e.to_string())
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        (self.status(), self.to_string()).into_response()
    }
}
