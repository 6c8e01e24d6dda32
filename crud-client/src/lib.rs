//! Client for the product CRUD GraphQL endpoint over HTTP. `HttpClient::run` executes the
//! typed requests of `crud_protocol`; the `form` module binds the five product forms of a
//! page to the same endpoint and renders raw responses into their output elements.

pub mod form;
mod http_client;
mod types;

pub use form::{
    default_bindings, Document, EventKind, FormBinding, FormBridge, FormEvent, Page, Submission,
};
pub use http_client::HttpClient;
pub use types::{ClientConfig, Environment};
