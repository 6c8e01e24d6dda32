//! These traits describe the high level behavior of the product protocol. Clients can use
//! them to provide a generic implementation across requests
use super::{Operation, ResponseOrError};
use crate::errors::Result;
use std::fmt::Debug;

/// Trait that all product protocol requests implement. Enforces transformation to a GraphQL
/// request body as well as decoding of the response envelope.
pub trait CrudProtocol: Debug + Sync {
    type Response: Send + Sync;
    /// The fixed operation this request executes
    fn operation(&self) -> Operation;
    /// Convert the request to a GraphQL body for the product endpoint
    fn graphql(&self) -> Result<serde_json::Value>;
    /// Convert JSON response to the request's associated type
    fn response_from_json(
        &self,
        response: serde_json::Value,
    ) -> Result<ResponseOrError<Self::Response>>;
}
