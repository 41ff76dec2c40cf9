use crate::utils::json::JsonFields;
use serde::{Deserialize, Serialize};

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct LoginRequest {
    pub password: String,
}

impl JsonFields for LoginRequest {
    const FIELDS: &'static [&'static str] = &["password"];
}

#[derive(Debug, Serialize, Deserialize)]
pub struct LoginResponse {
    pub status: String,
}

/// Query string of `DELETE /api/product/delete`
pub struct DeleteQuery;

impl DeleteQuery {
    /// Id from the first `id` pair of a raw query string. Anything
    /// unparsable yields id 0.
    pub fn product_id(raw: Option<&str>) -> i64 {
        raw.and_then(|q| serde_urlencoded::from_str::<Vec<(String, String)>>(q).ok())
            .and_then(|pairs| pairs.into_iter().find(|(key, _)| key == "id"))
            .and_then(|(_, id)| id.parse::<i64>().ok())
            .unwrap_or(0)
    }
}
