//! Update name, info and price of an existing product.

mod request;
mod response;
mod types;

pub(crate) use request::QUERY;
pub use types::UpdateProductRequest;
