use crate::utils::json::JsonFields;
use serde::{Deserialize, Serialize};

/// A catalog item.
///
/// Fields missing from an incoming JSON body decode to their zero value,
/// so `{"name":"X"}` is a create request (`id == 0`).
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Product {
    /// Store-assigned identifier, 0 means unassigned
    pub id: i64,
    pub name: String,
    pub category: String,
    /// Price in the smallest currency unit
    pub price: i64,
    /// Image URI
    pub img: String,
}

impl Product {
    pub fn new(id: i64, name: &str, category: &str, price: i64, img: &str) -> Self {
        Self {
            id,
            name: name.to_string(),
            category: category.to_string(),
            price,
            img: img.to_string(),
        }
    }
}

impl JsonFields for Product {
    const FIELDS: &'static [&'static str] = &["id", "name", "category", "price", "img"];
}
