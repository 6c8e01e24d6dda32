//! Client implementation of the product API over http

use std::any::type_name;

use rand::Rng;
use serde::Serialize;
use tracing::{error, trace, Instrument};

use crud_protocol::errors::{ProtocolError, Result};
use crud_protocol::protocol::{CrudProtocol, GraphQLRequest, ResponseOrError, PRODUCT_ENDPOINT};

use crate::types::ClientConfig;

/// Sends GraphQL bodies to the product endpoint. Cheap to share behind an `Arc`.
#[derive(Clone, Debug)]
pub struct HttpClient {
    client: reqwest::Client,
    api_url: String,
}

impl HttpClient {
    pub fn new(config: ClientConfig) -> Result<Self> {
        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = config.timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder.build().map_err(|e| {
            ProtocolError::new(format!("Could not initialize reqwest client: {}", e))
        })?;
        let api_url = format!(
            "{}{}",
            config.environment.url().trim_end_matches('/'),
            PRODUCT_ENDPOINT
        );
        Ok(Self { client, api_url })
    }

    pub fn api_url(&self) -> &str {
        &self.api_url
    }

    /// POST a GraphQL body as JSON. Any HTTP status counts as a response; only transport
    /// failures are errors.
    pub async fn send_request(&self, request: &GraphQLRequest) -> Result<reqwest::Response> {
        self.post(request).await
    }

    /// Read a response body as JSON
    pub async fn read_json(&self, response: reqwest::Response) -> Result<serde_json::Value> {
        response.json().await.map_err(|e| {
            ProtocolError::new(format!("Could not parse response as JSON: {}", e))
        })
    }

    async fn post<B: Serialize + ?Sized>(&self, body: &B) -> Result<reqwest::Response> {
        trace!(url = %self.api_url, "POST");
        self.client
            .post(&self.api_url)
            .json(body)
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    ProtocolError::new("Request timeout")
                } else {
                    ProtocolError::new(format!("Failed HTTP request: {}", e))
                }
            })
    }

    /// Execute a serialized request and return the JSON body
    async fn request_http(&self, request: serde_json::Value) -> Result<serde_json::Value> {
        let response = self.post(&request).await?;
        self.read_json(response).await
    }

    async fn execute_protocol_http<T: CrudProtocol>(
        &self,
        request: &T,
    ) -> Result<ResponseOrError<T::Response>> {
        let query = request.graphql()?;
        let json_payload = self.request_http(query).await?;
        request.response_from_json(json_payload)
    }

    /// Main entry point to execute typed product requests. GraphQL errors reported by the
    /// server come back as `ResponseOrError::Error`; transport and decoding failures as `Err`.
    pub async fn run<T: CrudProtocol>(&self, request: T) -> Result<ResponseOrError<T::Response>> {
        let id: u32 = rand::thread_rng().gen();
        async {
            let response = self.execute_protocol_http(&request).await;
            if let Err(ref e) = response {
                error!(error = %e, "request error");
            }
            response
        }
        .instrument(tracing::info_span!(
            "RUN (http)",
            request = type_name::<T>(),
            operation = request.operation().field(),
            id = %id
        ))
        .await
    }
}

#[cfg(test)]
mod tests {
    use super::HttpClient;
    use crate::types::{ClientConfig, Environment};

    #[test]
    fn endpoint_is_product_path() {
        let client = HttpClient::new(ClientConfig::default()).unwrap();
        assert_eq!(client.api_url(), "http://localhost:8080/product");
        let client = HttpClient::new(ClientConfig::new(Environment::Custom(
            "http://127.0.0.1:4000/".to_string(),
        )))
        .unwrap();
        assert_eq!(client.api_url(), "http://127.0.0.1:4000/product");
    }
}
