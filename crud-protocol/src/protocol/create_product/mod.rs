//! Create a product. The server assigns the id.

mod request;
mod response;
mod types;

pub(crate) use request::QUERY;
pub use types::CreateProductRequest;
