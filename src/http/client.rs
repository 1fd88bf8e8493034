//! HTTP client configuration and request execution

use crate::error::{Error, Result};
use reqwest::header::{HeaderMap, HeaderName, HeaderValue, ACCEPT, AUTHORIZATION};
use reqwest::{Client, Response};
use std::collections::HashMap;
use std::time::Duration;
use tracing::debug;
use url::Url;

/// Media type requested from the search API
pub const DEFAULT_ACCEPT: &str = "application/vnd.github+json";

/// Configuration for the HTTP client
#[derive(Debug, Clone)]
pub struct HttpClientConfig {
    /// Request timeout
    pub timeout: Duration,
    /// User agent string
    pub user_agent: String,
    /// Token sent as `Authorization: token <value>`
    pub token: Option<String>,
    /// Default headers for all requests
    pub default_headers: HashMap<String, String>,
}

impl Default for HttpClientConfig {
    fn default() -> Self {
        let mut default_headers = HashMap::new();
        default_headers.insert(ACCEPT.to_string(), DEFAULT_ACCEPT.to_string());
        Self {
            timeout: Duration::from_secs(30),
            user_agent: format!("hubsearch/{}", env!("CARGO_PKG_VERSION")),
            token: None,
            default_headers,
        }
    }
}

impl HttpClientConfig {
    /// Create a new config builder
    pub fn builder() -> HttpClientConfigBuilder {
        HttpClientConfigBuilder::default()
    }
}

/// Builder for HTTP client config
#[derive(Default)]
pub struct HttpClientConfigBuilder {
    config: HttpClientConfig,
}

impl HttpClientConfigBuilder {
    /// Set the request timeout
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.config.timeout = timeout;
        self
    }

    /// Set the auth token
    pub fn token(mut self, token: impl Into<String>) -> Self {
        self.config.token = Some(token.into());
        self
    }

    /// Add a default header
    pub fn header(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.config.default_headers.insert(key.into(), value.into());
        self
    }

    /// Set user agent
    pub fn user_agent(mut self, agent: impl Into<String>) -> Self {
        self.config.user_agent = agent.into();
        self
    }

    /// Build the config
    pub fn build(self) -> HttpClientConfig {
        self.config
    }
}

/// HTTP client used by the searcher
#[derive(Debug, Clone)]
pub struct HttpClient {
    client: Client,
}

impl HttpClient {
    /// Create a new HTTP client with default configuration
    pub fn new() -> Result<Self> {
        Self::with_config(HttpClientConfig::default())
    }

    /// Create a new HTTP client with custom configuration
    pub fn with_config(config: HttpClientConfig) -> Result<Self> {
        let mut headers = HeaderMap::new();
        for (key, value) in &config.default_headers {
            let name = HeaderName::from_bytes(key.as_bytes())
                .map_err(|e| Error::config(format!("invalid header name '{key}': {e}")))?;
            let value = HeaderValue::from_str(value)
                .map_err(|e| Error::config(format!("invalid value for header '{key}': {e}")))?;
            headers.insert(name, value);
        }

        if let Some(token) = &config.token {
            let mut value = HeaderValue::from_str(&format!("token {token}"))
                .map_err(|_| Error::config("auth token contains invalid characters"))?;
            value.set_sensitive(true);
            headers.insert(AUTHORIZATION, value);
        }

        let client = Client::builder()
            .timeout(config.timeout)
            .user_agent(&config.user_agent)
            .default_headers(headers)
            .build()?;

        Ok(Self { client })
    }

    /// Make a GET request to a fully built URL.
    ///
    /// Any response, including non-2xx, is returned as `Ok`; only transport
    /// failures are errors.
    pub async fn get(&self, url: &Url) -> Result<Response> {
        debug!("GET {}", url);
        let response = self.client.get(url.clone()).send().await?;
        debug!("{} {}", response.status().as_u16(), url);
        Ok(response)
    }
}
