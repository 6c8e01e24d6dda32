//! Delete a product by id. The server answers with the removed product.

mod request;
mod response;
mod types;

pub(crate) use request::QUERY;
pub use types::DeleteProductRequest;
