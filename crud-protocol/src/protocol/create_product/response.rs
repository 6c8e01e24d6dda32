use crate::types::{Product, ProductResponse};
use serde::Deserialize;

#[derive(Deserialize, Debug)]
pub struct CreateProductData {
    pub create: Option<Product>,
}

impl From<CreateProductData> for ProductResponse {
    fn from(response: CreateProductData) -> Self {
        Self {
            product: response.create,
        }
    }
}
