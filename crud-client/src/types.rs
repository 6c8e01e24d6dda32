use std::time::Duration;

use crud_protocol::errors::{ProtocolError, Result};

/// Variable holding the server origin, e.g. `http://localhost:8080`
pub const API_URL_VAR: &str = "CRUD_API_URL";
/// Variable holding an optional request timeout in seconds
pub const API_TIMEOUT_VAR: &str = "CRUD_API_TIMEOUT_SECS";

#[derive(Clone, Debug, PartialEq)]
pub enum Environment {
    Local,
    Custom(String),
}

impl Environment {
    pub fn url(&self) -> &str {
        match self {
            Self::Local => "http://localhost:8080",
            Self::Custom(url) => url.as_str(),
        }
    }
}

/// Settings used to build an `HttpClient`. Requests have no timeout unless one is set.
#[derive(Clone, Debug, PartialEq)]
pub struct ClientConfig {
    pub environment: Environment,
    pub timeout: Option<Duration>,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self::new(Environment::Local)
    }
}

impl ClientConfig {
    pub fn new(environment: Environment) -> Self {
        Self {
            environment,
            timeout: None,
        }
    }

    pub fn with_timeout(self, timeout: Duration) -> Self {
        Self {
            timeout: Some(timeout),
            ..self
        }
    }

    /// Read `CRUD_API_URL` and `CRUD_API_TIMEOUT_SECS`, loading a `.env` file first if present
    pub fn from_env() -> Result<Self> {
        dotenv::dotenv().ok();
        Self::from_vars(
            std::env::var(API_URL_VAR).ok(),
            std::env::var(API_TIMEOUT_VAR).ok(),
        )
    }

    fn from_vars(url: Option<String>, timeout_secs: Option<String>) -> Result<Self> {
        let environment = match url {
            Some(url) if !url.trim().is_empty() => Environment::Custom(url),
            _ => Environment::Local,
        };
        let mut config = Self::new(environment);
        if let Some(secs) = timeout_secs {
            let timeout = secs
                .trim()
                .parse::<f32>()
                .ok()
                .and_then(|parsed| Duration::try_from_secs_f32(parsed).ok())
                .ok_or_else(|| {
                    ProtocolError::new(format!(
                        "{} is not a number of seconds: {}",
                        API_TIMEOUT_VAR, secs
                    ))
                })?;
            config = config.with_timeout(timeout);
        }
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::{ClientConfig, Environment};
    use std::time::Duration;

    #[test]
    fn defaults_to_local_without_timeout() {
        let config = ClientConfig::from_vars(None, None).unwrap();
        assert_eq!(config, ClientConfig::default());
        assert_eq!(config.environment.url(), "http://localhost:8080");
        assert_eq!(config.timeout, None);
    }

    #[test]
    fn reads_url_and_timeout() {
        let config = ClientConfig::from_vars(
            Some("http://shop.internal:9000".to_string()),
            Some("2.5".to_string()),
        )
        .unwrap();
        assert_eq!(
            config.environment,
            Environment::Custom("http://shop.internal:9000".to_string())
        );
        assert_eq!(config.timeout, Some(Duration::from_secs_f32(2.5)));
    }

    #[test]
    fn rejects_bad_timeout() {
        for secs in &["soon", "-1", "NaN", "inf"] {
            let err = ClientConfig::from_vars(None, Some(secs.to_string())).unwrap_err();
            assert_eq!(
                err.message(),
                format!("CRUD_API_TIMEOUT_SECS is not a number of seconds: {}", secs)
            );
        }
    }

    #[test]
    fn zero_timeout_is_accepted() {
        let config = ClientConfig::from_vars(None, Some("0".to_string())).unwrap();
        assert_eq!(config.timeout, Some(Duration::from_secs(0)));
    }
}
