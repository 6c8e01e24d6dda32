//! Error types defined for crud_protocol

use std::borrow::Cow;

use thiserror::Error;

/// Expose custom Result type that wraps ProtocolError
pub type Result<T> = std::result::Result<T, ProtocolError>;

/// Wrapper over string that describes error condition
#[derive(Debug, Error, Clone, PartialEq)]
#[error("{0}")]
pub struct ProtocolError(pub Cow<'static, str>);

impl ProtocolError {
    pub fn new(message: impl Into<Cow<'static, str>>) -> Self {
        ProtocolError(message.into())
    }

    pub fn message(&self) -> &str {
        &self.0
    }
}

impl From<serde_json::Error> for ProtocolError {
    fn from(err: serde_json::Error) -> Self {
        ProtocolError::new(format!("JSON error: {}", err))
    }
}
