use super::response::UpdateProductData;
use crate::errors::Result;
use crate::protocol::{try_response_from_json, CrudProtocol, Operation, ResponseOrError};
use crate::types::ProductResponse;

/// Request to overwrite a product. An unknown id comes back as a zeroed product.
#[derive(Clone, Debug)]
pub struct UpdateProductRequest {
    pub id: i64,
    pub name: String,
    pub info: Option<String>,
    pub price: f64,
}

impl CrudProtocol for UpdateProductRequest {
    type Response = ProductResponse;

    fn operation(&self) -> Operation {
        Operation::Update
    }

    fn graphql(&self) -> Result<serde_json::Value> {
        self.make_query().to_json()
    }

    fn response_from_json(
        &self,
        response: serde_json::Value,
    ) -> Result<ResponseOrError<Self::Response>> {
        try_response_from_json::<ProductResponse, UpdateProductData>(response)
    }
}
