//! Library that handles request construction and response decoding for the product CRUD
//! GraphQL endpoint. High level behaviors are exposed via the `CrudProtocol` trait, and the
//! fixed operation documents via `protocol::Operation`.
//! For a client that sends these requests and binds them to forms, see `crud-client`.

pub mod errors;
pub mod protocol;
pub mod types;
