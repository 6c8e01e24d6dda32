//! Implementation of the product CRUD protocol. Each operation module contains submodules
//! for request and response logic. The `types.rs` submodule is a good place to start to
//! understand any given request. All requests follow logic described by the `CrudProtocol`
//! trait, and the fixed GraphQL documents are enumerated by `Operation`.

pub mod create_product;
pub mod delete_product;
pub mod get_product;
pub mod list_products;
pub mod update_product;

mod graphql;
mod operation;
mod traits;

pub use graphql::*;
pub use operation::Operation;
pub use traits::*;
