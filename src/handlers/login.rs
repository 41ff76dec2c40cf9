use crate::core::error::AppError;
use crate::core::state::AppState;
use crate::models::admin::{LoginRequest, LoginResponse};
use crate::utils::json::decode_object;
use axum::{
    body::Bytes,
    extract::State,
    response::Json,
};
use axum_extra::extract::cookie::CookieJar;
use std::sync::Arc;
use tracing::{info, warn};

/// Admin login
///
/// POST /api/login
///
/// A body that fails to decode is treated as an empty password, which never
/// matches. On success the response carries `Set-Cookie: admin_session=true`.
/// No other route reads that cookie.
pub async fn login_handler(
    State(state): State<Arc<AppState>>,
    jar: CookieJar,
    body: Bytes,
) -> Result<(CookieJar, Json<LoginResponse>), AppError> {
    let request: LoginRequest = decode_object(&body).unwrap_or_default();

    let cookie = match state.session_gate.login(&request.password) {
        Ok(cookie) => cookie,
        Err(e) => {
            warn!("Rejected admin login attempt");
            return Err(e);
        }
    };

    info!("Admin logged in");

    Ok((
        jar.add(cookie),
        Json(LoginResponse {
            status: "success".to_string(),
        }),
    ))
}
