use super::types::CreateProductRequest;
use crate::protocol::{GraphQLRequest, Variables};

pub(crate) const QUERY: &str = "\n    mutation createProduct($name: String!, $info: String, $price: Float!) {\n      create(name: $name, info: $info, price: $price) {\n        id,\n        name,\n        price,\n        info\n      }\n    }";

impl CreateProductRequest {
    pub fn make_query(&self) -> GraphQLRequest {
        let mut variables = Variables::new();
        variables.insert("name".to_string(), self.name.clone().into());
        if let Some(info) = &self.info {
            variables.insert("info".to_string(), info.clone().into());
        }
        variables.insert("price".to_string(), self.price.into());
        GraphQLRequest::new(QUERY).with_variables(variables)
    }
}
