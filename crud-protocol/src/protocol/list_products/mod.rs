//! List every product known to the server, selecting id, name and price.

mod request;
mod response;
mod types;

pub(crate) use request::QUERY;
pub use types::{ListProductsRequest, ListProductsResponse};
