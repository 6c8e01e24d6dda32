//! The five fixed GraphQL documents understood by the product endpoint

use super::{create_product, delete_product, get_product, list_products, update_product};
use crate::errors::{ProtocolError, Result};

/// Operations exposed by the product endpoint. Each maps to exactly one literal document;
/// documents are never assembled at runtime.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Operation {
    List,
    Get,
    Create,
    Update,
    Delete,
}

impl Operation {
    pub const ALL: [Operation; 5] = [
        Operation::List,
        Operation::Get,
        Operation::Create,
        Operation::Update,
        Operation::Delete,
    ];

    /// Literal GraphQL document sent as `query`
    pub fn query(&self) -> &'static str {
        match self {
            Self::List => list_products::QUERY,
            Self::Get => get_product::QUERY,
            Self::Create => create_product::QUERY,
            Self::Update => update_product::QUERY,
            Self::Delete => delete_product::QUERY,
        }
    }

    /// Variable names declared by the document, in declaration order
    pub fn parameters(&self) -> &'static [&'static str] {
        match self {
            Self::List => &[],
            Self::Get => &["id"],
            Self::Create => &["name", "info", "price"],
            Self::Update => &["id", "name", "info", "price"],
            Self::Delete => &["id"],
        }
    }

    /// Root field selected by the document
    pub fn field(&self) -> &'static str {
        match self {
            Self::List => "list",
            Self::Get => "product",
            Self::Create => "create",
            Self::Update => "update",
            Self::Delete => "delete",
        }
    }

    /// Reject variable names the document does not declare
    pub fn check_variables<'a>(&self, names: impl IntoIterator<Item = &'a str>) -> Result<()> {
        let parameters = self.parameters();
        for name in names {
            if !parameters.contains(&name) {
                return Err(ProtocolError::new(format!(
                    "Variable `{}` is not declared by the {} operation",
                    name,
                    self.field()
                )));
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::Operation;

    #[test]
    fn every_parameter_is_declared_in_the_document() {
        for operation in Operation::ALL.iter() {
            let query = operation.query();
            assert!(!query.trim().is_empty());
            for parameter in operation.parameters() {
                assert!(
                    query.contains(&format!("${}:", parameter)),
                    "{:?} is missing ${}",
                    operation,
                    parameter
                );
            }
            assert!(query.contains(operation.field()));
        }
    }

    #[test]
    fn queries_and_mutations() {
        let starts = |operation: Operation, head: &str| {
            assert!(operation.query().starts_with(head), "{:?}", operation)
        };
        starts(Operation::List, "\n    query getProductList {");
        starts(Operation::Get, "\n    query getProductList($id: Int!)");
        starts(Operation::Create, "\n    mutation createProduct(");
        starts(Operation::Update, "\n    mutation updateProduct(");
        starts(Operation::Delete, "\n    mutation deleteProduct(");
    }

    #[test]
    fn documents_match_page_script_text() {
        assert_eq!(
            Operation::List.query(),
            "\n    query getProductList {\n      list {\n        id, name, price\n      }\n    }"
        );
        assert_eq!(
            Operation::Delete.query(),
            concat!(
                "\n    mutation deleteProduct($id: Int!) {\n",
                "      delete(id: $id) {\n",
                "        id,\n",
                "        name,\n",
                "        price,\n",
                "        info\n",
                "      }\n",
                "    }"
            )
        );
        for operation in Operation::ALL.iter() {
            assert!(operation.query().ends_with("\n    }"), "{:?}", operation);
        }
    }

    #[test]
    fn check_variables() {
        assert!(Operation::Update
            .check_variables(vec!["id", "name", "info", "price"])
            .is_ok());
        assert!(Operation::List.check_variables(Vec::new()).is_ok());
        let err = Operation::Delete.check_variables(vec!["name"]).unwrap_err();
        assert_eq!(
            err.message(),
            "Variable `name` is not declared by the delete operation"
        );
    }
}
