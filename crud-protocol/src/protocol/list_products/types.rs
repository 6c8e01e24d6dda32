use super::response::ListProductsData;
use crate::errors::Result;
use crate::protocol::{try_response_from_json, CrudProtocol, Operation, ResponseOrError};
use crate::types::Product;

#[derive(Clone, Debug, PartialEq)]
pub struct ListProductsResponse {
    pub products: Vec<Product>,
}

#[derive(Clone, Debug)]
pub struct ListProductsRequest;

impl CrudProtocol for ListProductsRequest {
    type Response = ListProductsResponse;

    fn operation(&self) -> Operation {
        Operation::List
    }

    fn graphql(&self) -> Result<serde_json::Value> {
        self.make_query().to_json()
    }

    fn response_from_json(
        &self,
        response: serde_json::Value,
    ) -> Result<ResponseOrError<Self::Response>> {
        try_response_from_json::<ListProductsResponse, ListProductsData>(response)
    }
}
