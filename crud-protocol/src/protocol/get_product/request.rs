use super::types::GetProductRequest;
use crate::protocol::{GraphQLRequest, Variables};

pub(crate) const QUERY: &str = "\n    query getProductList($id: Int!) {\n      product(id: $id) {\n        id,\n        name,\n        price,\n        info\n      }\n    }";

impl GetProductRequest {
    pub fn make_query(&self) -> GraphQLRequest {
        let mut variables = Variables::new();
        variables.insert("id".to_string(), self.id.into());
        GraphQLRequest::new(QUERY).with_variables(variables)
    }
}
