use super::response::CreateProductData;
use crate::errors::Result;
use crate::protocol::{try_response_from_json, CrudProtocol, Operation, ResponseOrError};
use crate::types::ProductResponse;

#[derive(Clone, Debug)]
pub struct CreateProductRequest {
    pub name: String,
    pub info: Option<String>,
    pub price: f64,
}

impl CrudProtocol for CreateProductRequest {
    type Response = ProductResponse;

    fn operation(&self) -> Operation {
        Operation::Create
    }

    fn graphql(&self) -> Result<serde_json::Value> {
        self.make_query().to_json()
    }

    fn response_from_json(
        &self,
        response: serde_json::Value,
    ) -> Result<ResponseOrError<Self::Response>> {
        try_response_from_json::<ProductResponse, CreateProductData>(response)
    }
}
