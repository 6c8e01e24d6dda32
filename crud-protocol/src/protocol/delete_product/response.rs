use crate::types::{Product, ProductResponse};
use serde::Deserialize;

#[derive(Deserialize, Debug)]
pub struct DeleteProductData {
    pub delete: Option<Product>,
}

impl From<DeleteProductData> for ProductResponse {
    fn from(response: DeleteProductData) -> Self {
        Self {
            product: response.delete,
        }
    }
}
