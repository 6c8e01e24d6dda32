//! Fetch a single product by id, selecting id, name, price and info.

mod request;
mod response;
mod types;

pub(crate) use request::QUERY;
pub use types::GetProductRequest;
