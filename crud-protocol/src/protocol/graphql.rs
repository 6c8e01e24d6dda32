//! Share protocol logic for structuring GraphQL requests and parsing responses

use crate::errors::{ProtocolError, Result};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use std::convert::TryFrom;
use std::fmt::Display;
use tracing::debug;

/// Path of the single GraphQL endpoint, relative to the server origin
pub const PRODUCT_ENDPOINT: &str = "/product";

//****************************************//
//  GraphQL request body                  //
//****************************************//

/// Named variables of a request, in insertion order. Form submissions only ever insert
/// strings; the server is trusted to coerce them to the declared types.
pub type Variables = serde_json::Map<String, serde_json::Value>;

/// Body of a GraphQL-over-HTTP request. `variables` is left out of the JSON entirely when
/// the operation declares none.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct GraphQLRequest {
    pub query: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub variables: Option<Variables>,
}

impl GraphQLRequest {
    pub fn new(query: impl Into<String>) -> Self {
        Self {
            query: query.into(),
            variables: None,
        }
    }

    pub fn with_variables(self, variables: Variables) -> Self {
        Self {
            variables: Some(variables),
            ..self
        }
    }

    pub fn to_json(&self) -> Result<serde_json::Value> {
        serializable_to_json(self)
    }
}

//****************************************//
//  GraphQL response parsing              //
//****************************************//

/// Helper to convert JSON to a response or error
pub fn json_to_type_or_error<T: DeserializeOwned>(
    response: serde_json::Value,
) -> Result<ResponseOrError<T>> {
    serde_json::from_value(response)
        .map_err(|e| ProtocolError::new(format!("Could not convert JSON to response: {}", e)))
}

pub fn serializable_to_json<T: Serialize>(obj: &T) -> Result<serde_json::Value> {
    serde_json::to_value(obj)
        .map_err(|e| ProtocolError::new(format!("Unexpected problem serializing to JSON: {}", e)))
}

/// Helper to convert data corresponding to raw GraphQL types (B) into
/// nicer library managed types A when failure is possible
pub fn try_response_from_json<A, B>(response: serde_json::Value) -> Result<ResponseOrError<A>>
where
    A: TryFrom<B>,
    <A as TryFrom<B>>::Error: Display,
    B: DeserializeOwned,
{
    match json_to_type_or_error::<B>(response)? {
        ResponseOrError::Response(DataResponse { data }) => A::try_from(data)
            .map(ResponseOrError::from_data)
            .map_err(|err| ProtocolError::new(err.to_string())),
        ResponseOrError::Error(e) => {
            debug!(errors = %e, "server answered with GraphQL errors");
            Ok(ResponseOrError::Error(e))
        }
    }
}

/// Wrapper type to account for GraphQL errors
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
#[serde(untagged)]
pub enum ResponseOrError<T> {
    Response(DataResponse<T>),
    Error(ErrorResponse),
}

impl<T> ResponseOrError<T> {
    /// Build from data
    pub fn from_data(data: T) -> Self {
        Self::Response(DataResponse { data })
    }

    /// Get response from wrapper if it exists
    pub fn response(&self) -> Option<&T> {
        match self {
            Self::Response(DataResponse { data }) => Some(data),
            Self::Error(_) => None,
        }
    }

    /// Get response from wrapper if it exists, will destroy wrapper
    pub fn consume_response(self) -> Option<T> {
        match self {
            Self::Response(DataResponse { data }) => Some(data),
            Self::Error(_) => None,
        }
    }

    /// Get response or else error
    pub fn response_or_error(self) -> Result<T> {
        match self {
            Self::Response(DataResponse { data }) => Ok(data),
            Self::Error(e) => Err(ProtocolError::new(e.to_string())),
        }
    }

    /// Get error from wrapper if it exists
    pub fn error(&self) -> Option<&ErrorResponse> {
        match self {
            Self::Response(_) => None,
            Self::Error(error) => Some(error),
        }
    }

    /// Is the response a GraphQL error?
    pub fn is_error(&self) -> bool {
        matches!(self, Self::Error(_))
    }

    /// Transform the inner value of a valid response. Will not transform an error
    pub fn map<M, F: FnOnce(T) -> M>(self, f: F) -> ResponseOrError<M> {
        match self {
            Self::Error(e) => ResponseOrError::Error(e),
            Self::Response(DataResponse { data }) => ResponseOrError::from_data(f(data)),
        }
    }
}

/// Inner wrapper on valid GraphQL response data
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
pub struct DataResponse<T> {
    pub data: T,
}

/// Inner wrapper on error GraphQL response data
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
pub struct ErrorResponse {
    pub errors: Vec<GraphQLError>,
}

impl Display for ErrorResponse {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        let messages: Vec<&str> = self.errors.iter().map(|e| e.message.as_str()).collect();
        write!(f, "GraphQL errors: {}", messages.join("; "))
    }
}

#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
pub struct GraphQLError {
    pub message: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn request_without_variables_omits_key() {
        let body = GraphQLRequest::new("query { list { id } }").to_json().unwrap();
        assert_eq!(body, json!({"query": "query { list { id } }"}));
        assert!(body.get("variables").is_none());
    }

    #[test]
    fn variables_keep_insertion_order_and_types() {
        let mut variables = Variables::new();
        variables.insert("name".to_string(), json!("Pisco"));
        variables.insert("price".to_string(), json!(9.95));
        variables.insert("id".to_string(), json!(3));
        variables.insert("name".to_string(), json!("Chicha"));
        let body = GraphQLRequest::new("q").with_variables(variables).to_json().unwrap();
        assert_eq!(
            serde_json::to_string(&body["variables"]).unwrap(),
            r#"{"name":"Chicha","price":9.95,"id":3}"#
        );
    }

    #[test]
    fn numeric_strings_stay_strings() {
        let mut variables = Variables::new();
        variables.insert("id".to_string(), json!("3"));
        let body = GraphQLRequest::new("q").with_variables(variables).to_json().unwrap();
        assert_eq!(body["variables"]["id"], json!("3"));
    }

    #[test]
    fn parses_data_and_error_envelopes() {
        let ok: ResponseOrError<serde_json::Value> =
            json_to_type_or_error(json!({"data": {"list": []}})).unwrap();
        assert_eq!(ok.response(), Some(&json!({"list": []})));

        let err: ResponseOrError<serde_json::Value> =
            json_to_type_or_error(json!({"errors": [{"message": "boom"}]})).unwrap();
        assert!(err.is_error());
        assert_eq!(
            err.response_or_error().unwrap_err().message(),
            "GraphQL errors: boom"
        );
    }

    #[test]
    fn map_leaves_errors_alone() {
        let err: ResponseOrError<u32> = ResponseOrError::Error(ErrorResponse {
            errors: vec![GraphQLError {
                message: "nope".to_string(),
            }],
        });
        let mapped = err.map(|n| n + 1);
        assert_eq!(mapped.error().unwrap().errors[0].message, "nope");
        assert_eq!(ResponseOrError::from_data(1u32).map(|n| n + 1).consume_response(), Some(2));
    }
}
