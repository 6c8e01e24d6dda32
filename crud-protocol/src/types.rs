//! Types shared across product requests and responses

use serde::{Deserialize, Serialize};

/// A product as stored by the backend. `info` is omitted by the server when empty and
/// is not selected by the list query.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: i64,
    pub name: String,
    pub price: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub info: Option<String>,
}

/// Product returned by a single-product query or mutation. `None` when the server answers
/// null for the selected field.
#[derive(Clone, Debug, PartialEq)]
pub struct ProductResponse {
    pub product: Option<Product>,
}
