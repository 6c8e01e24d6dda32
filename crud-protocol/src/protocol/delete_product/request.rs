use super::types::DeleteProductRequest;
use crate::protocol::{GraphQLRequest, Variables};

pub(crate) const QUERY: &str = "\n    mutation deleteProduct($id: Int!) {\n      delete(id: $id) {\n        id,\n        name,\n        price,\n        info\n      }\n    }";

impl DeleteProductRequest {
    pub fn make_query(&self) -> GraphQLRequest {
        let mut variables = Variables::new();
        variables.insert("id".to_string(), self.id.into());
        GraphQLRequest::new(QUERY).with_variables(variables)
    }
}
