use super::response::GetProductData;
use crate::errors::Result;
use crate::protocol::{try_response_from_json, CrudProtocol, Operation, ResponseOrError};
use crate::types::ProductResponse;

/// Request a single product. The server answers null for unknown ids.
#[derive(Clone, Debug)]
pub struct GetProductRequest {
    pub id: i64,
}

impl CrudProtocol for GetProductRequest {
    type Response = ProductResponse;

    fn operation(&self) -> Operation {
        Operation::Get
    }

    fn graphql(&self) -> Result<serde_json::Value> {
        self.make_query().to_json()
    }

    fn response_from_json(
        &self,
        response: serde_json::Value,
    ) -> Result<ResponseOrError<Self::Response>> {
        try_response_from_json::<ProductResponse, GetProductData>(response)
    }
}

#[cfg(test)]
mod tests {
    use super::{CrudProtocol, GetProductRequest};
    use serde_json::json;

    #[test]
    fn serialize_get_product() {
        let body = GetProductRequest { id: 3 }.graphql().unwrap();
        assert_eq!(body["variables"], json!({"id": 3}));
        assert_eq!(body["query"], json!(super::super::QUERY));
    }

    #[test]
    fn decode_missing_product() {
        let response = GetProductRequest { id: 42 }
            .response_from_json(json!({"data": {"product": null}}))
            .unwrap()
            .response_or_error()
            .unwrap();
        assert_eq!(response.product, None);
    }

    #[test]
    fn decode_graphql_error() {
        let response = GetProductRequest { id: 1 }
            .response_from_json(json!({
                "data": null,
                "errors": [{"message": "Variable \"$id\" got invalid value"}]
            }))
            .unwrap();
        assert!(response.is_error());
    }
}
