use crate::types::{Product, ProductResponse};
use serde::Deserialize;

#[derive(Deserialize, Debug)]
pub struct GetProductData {
    pub product: Option<Product>,
}

impl From<GetProductData> for ProductResponse {
    fn from(response: GetProductData) -> Self {
        Self {
            product: response.product,
        }
    }
}
