use super::types::ListProductsResponse;
use crate::types::Product;
use serde::Deserialize;

/// Raw `data` object returned for the list query
#[derive(Deserialize, Debug)]
pub struct ListProductsData {
    // the server answers null instead of [] before any product exists
    #[serde(default)]
    pub list: Option<Vec<Product>>,
}

impl From<ListProductsData> for ListProductsResponse {
    fn from(response: ListProductsData) -> Self {
        Self {
            products: response.list.unwrap_or_default(),
        }
    }
}
