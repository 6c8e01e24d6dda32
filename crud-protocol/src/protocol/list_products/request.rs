use super::types::ListProductsRequest;
use crate::protocol::GraphQLRequest;

pub(crate) const QUERY: &str = "\n    query getProductList {\n      list {\n        id, name, price\n      }\n    }";

impl ListProductsRequest {
    pub fn make_query(&self) -> GraphQLRequest {
        GraphQLRequest::new(QUERY)
    }
}
