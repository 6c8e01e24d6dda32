use super::response::DeleteProductData;
use crate::errors::Result;
use crate::protocol::{try_response_from_json, CrudProtocol, Operation, ResponseOrError};
use crate::types::ProductResponse;

#[derive(Clone, Debug)]
pub struct DeleteProductRequest {
    pub id: i64,
}

impl CrudProtocol for DeleteProductRequest {
    type Response = ProductResponse;

    fn operation(&self) -> Operation {
        Operation::Delete
    }

    fn graphql(&self) -> Result<serde_json::Value> {
        self.make_query().to_json()
    }

    fn response_from_json(
        &self,
        response: serde_json::Value,
    ) -> Result<ResponseOrError<Self::Response>> {
        try_response_from_json::<ProductResponse, DeleteProductData>(response)
    }
}

#[cfg(test)]
mod tests {
    use super::{CrudProtocol, DeleteProductRequest};
    use serde_json::json;

    #[test]
    fn delete_round_trip() {
        let request = DeleteProductRequest { id: 2 };
        assert_eq!(request.graphql().unwrap()["variables"], json!({"id": 2}));
        let deleted = request
            .response_from_json(json!({"data": {"delete": {
                "id": 2, "name": "Chicha de jora", "price": 5.95
            }}}))
            .unwrap()
            .consume_response()
            .unwrap();
        assert_eq!(deleted.product.unwrap().id, 2);
    }
}
