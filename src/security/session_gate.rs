use crate::core::config::AuthConfig;
use crate::core::error::AppError;
use axum_extra::extract::cookie::Cookie;
use time::{Duration, OffsetDateTime};

pub const SESSION_COOKIE: &str = "admin_session";

/// Shared-secret password check
///
/// A successful login only produces a client-held `admin_session=true`
/// cookie. Nothing is recorded server-side and no route checks the cookie,
/// so presenting it grants nothing beyond what an anonymous client can do.
pub struct SessionGate {
    password: String,
    ttl: Duration,
}

impl SessionGate {
    pub fn new(password: impl Into<String>, ttl_hours: i64) -> Self {
        Self {
            password: password.into(),
            ttl: Duration::hours(ttl_hours),
        }
    }

    pub fn from_config(config: &AuthConfig) -> Self {
        Self::new(config.admin_password.clone(), config.session_ttl_hours)
    }

    // Same answer as `==`, without an early exit on the first differing byte
    fn matches(&self, password: &str) -> bool {
        let expected = self.password.as_bytes();
        let provided = password.as_bytes();

        if provided.len() != expected.len() {
            return false;
        }

        let diff = provided
            .iter()
            .zip(expected)
            .map(|(a, b)| a ^ b)
            .fold(0u8, |acc, x| acc | x);
        diff == 0
    }

    /// Check `password` and return the session cookie to set
    pub fn login(&self, password: &str) -> Result<Cookie<'static>, AppError> {
        self.login_at(password, OffsetDateTime::now_utc())
    }

    pub fn login_at(
        &self,
        password: &str,
        now: OffsetDateTime,
    ) -> Result<Cookie<'static>, AppError> {
        if !self.matches(password) {
            return Err(AppError::Unauthorized);
        }

        Ok(Cookie::build((SESSION_COOKIE, "true"))
            .expires(now + self.ttl)
            .build())
    }
}
