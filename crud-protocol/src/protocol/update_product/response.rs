use crate::types::{Product, ProductResponse};
use serde::Deserialize;

#[derive(Deserialize, Debug)]
pub struct UpdateProductData {
    pub update: Option<Product>,
}

impl From<UpdateProductData> for ProductResponse {
    fn from(response: UpdateProductData) -> Self {
        Self {
            product: response.update,
        }
    }
}
